//! Mortgage Prequal - Pre-qualification engine for residential loan programs
//!
//! This library provides:
//! - Pure qualification engine: per-program eligibility, payments, DTI ratios
//! - Fixed-rate amortization math
//! - Injected rate tables (programs, credit tiers, state costs) with CSV loaders
//! - Applicant CSV loading for batch runs
//! - Scenario runner for repeated qualifications without table reloads

pub mod applicant;
pub mod qualify;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use applicant::ApplicantProfile;
pub use qualify::{ProgramOffer, QualificationEngine, QualificationResult};
pub use rates::{CreditTier, ProgramId, RateTables};
pub use scenario::ScenarioRunner;
