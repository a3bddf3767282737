//! Applicant profile as produced by the validation stage

use serde::{Deserialize, Serialize};

/// Validated applicant, property, and financial inputs for one calculation
///
/// Upstream validation is responsible for rejecting malformed values; the
/// engine assumes every numeric field here is already well-formed and does
/// no defensive checks of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Identifier assigned by the caller (0 when not tracked)
    #[serde(default)]
    pub applicant_id: u32,

    /// Base gross monthly income
    pub monthly_income: f64,

    /// Secondary monthly income (rental, bonus, co-borrower)
    #[serde(default)]
    pub additional_monthly_income: f64,

    /// Recurring non-housing debt obligations per month
    pub monthly_debts: f64,

    /// Credit score, nominally in [300, 850]
    pub credit_score: u16,

    /// Cash available at closing
    pub down_payment: f64,

    /// Purchase price / appraised value of the property
    pub property_value: f64,

    /// Two-letter state code for tax and insurance rates
    pub property_state: String,
}

impl ApplicantProfile {
    /// Total qualifying monthly income
    pub fn combined_monthly_income(&self) -> f64 {
        self.monthly_income + self.additional_monthly_income
    }

    /// Financed amount
    ///
    /// Negative when the down payment exceeds the property value; that
    /// case flows through the payment and DTI math unchanged rather than
    /// being rejected here.
    pub fn loan_amount(&self) -> f64 {
        self.property_value - self.down_payment
    }

    /// Loan-to-value ratio as a percent
    pub fn ltv(&self) -> f64 {
        self.loan_amount() / self.property_value * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> ApplicantProfile {
        ApplicantProfile {
            applicant_id: 1,
            monthly_income: 8_000.0,
            additional_monthly_income: 500.0,
            monthly_debts: 400.0,
            credit_score: 720,
            down_payment: 60_000.0,
            property_value: 300_000.0,
            property_state: "CA".to_string(),
        }
    }

    #[test]
    fn test_derived_figures() {
        let p = profile();

        assert_relative_eq!(p.combined_monthly_income(), 8_500.0);
        assert_relative_eq!(p.loan_amount(), 240_000.0);
        assert_relative_eq!(p.ltv(), 80.0);
    }

    #[test]
    fn test_negative_loan_amount_propagates() {
        let mut p = profile();
        p.down_payment = 350_000.0;

        assert_relative_eq!(p.loan_amount(), -50_000.0);
        assert!(p.ltv() < 0.0);
    }

    #[test]
    fn test_additional_income_defaults_to_zero() {
        let p: ApplicantProfile = serde_json::from_str(
            r#"{
                "monthly_income": 5000,
                "monthly_debts": 200,
                "credit_score": 700,
                "down_payment": 20000,
                "property_value": 250000,
                "property_state": "TX"
            }"#,
        )
        .unwrap();

        assert_eq!(p.additional_monthly_income, 0.0);
        assert_eq!(p.applicant_id, 0);
    }
}
