//! Qualification output structures

use crate::rates::{CreditTier, ProgramId};
use serde::{Deserialize, Serialize};

/// One eligible program with its quoted figures
///
/// Monetary fields are rounded to whole currency units; DTI percentages
/// carry two decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramOffer {
    pub program: ProgramId,
    pub display_name: String,

    /// Quoted annual rate (credit-tier rate when published, else base rate)
    pub rate: f64,

    /// Monthly principal and interest
    pub monthly_payment: f64,

    /// Principal, interest, tax, insurance, and mortgage insurance
    pub total_monthly_payment: f64,

    pub front_end_dti: f64,
    pub back_end_dti: f64,

    pub requires_mortgage_insurance: bool,
    pub mortgage_insurance_amount: f64,
}

/// Intermediate figures shared by every program check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedFigures {
    pub monthly_income: f64,
    pub monthly_debts: f64,
    pub loan_amount: f64,
    pub ltv: f64,
    pub credit_tier: CreditTier,
    pub property_tax: f64,
    pub home_insurance: f64,
}

/// Complete qualification decision for one applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationResult {
    /// True iff at least one program is eligible
    pub qualified: bool,

    /// Eligible programs in rule-table order (never sorted by rate)
    pub programs: Vec<ProgramOffer>,

    pub calculations: SharedFigures,

    /// Decline reasons from the baseline scenario; only populated when
    /// not qualified, and legitimately empty when a program-specific
    /// rule (e.g. FHA minimum down payment) was the sole blocker
    pub reasons: Vec<String>,
}

impl QualificationResult {
    /// Look up the offer for a specific program, if eligible
    pub fn offer(&self, program: ProgramId) -> Option<&ProgramOffer> {
        self.programs.iter().find(|o| o.program == program)
    }

    /// Program ids in offer order
    pub fn offered_programs(&self) -> Vec<ProgramId> {
        self.programs.iter().map(|o| o.program).collect()
    }
}
