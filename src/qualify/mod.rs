//! Qualification engine: payment math, per-program checks, aggregate decision

mod engine;
pub mod payment;
mod result;

pub use engine::{
    QualificationEngine, Rejection, BASELINE_MAX_BACK_END_DTI, BASELINE_MAX_FRONT_END_DTI,
    BASELINE_RATE, MIN_QUALIFYING_CREDIT_SCORE,
};
pub use payment::{monthly_housing_payment, monthly_principal_and_interest, LOAN_TERM_MONTHS};
pub use result::{ProgramOffer, QualificationResult, SharedFigures};
