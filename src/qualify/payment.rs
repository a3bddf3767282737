//! Fixed-rate amortization and housing payment math

/// Payments on a 30-year fixed-rate loan
pub const LOAN_TERM_MONTHS: u32 = 360;

/// Annual mortgage insurance rate applied to the loan amount
pub const ANNUAL_MI_RATE: f64 = 0.005;

/// Monthly principal-and-interest payment for a fully amortizing
/// 30-year fixed-rate loan.
///
/// # Arguments
/// * `loan_amount` - Financed amount in currency units
/// * `annual_rate_pct` - Annual interest rate as a percent (e.g., 6.5)
///
/// A zero rate degenerates to straight-line repayment. Negative loan
/// amounts produce negative payments; rejecting them is the upstream
/// validation stage's call, not this function's.
pub fn monthly_principal_and_interest(loan_amount: f64, annual_rate_pct: f64) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let num_payments = LOAN_TERM_MONTHS as f64;

    if monthly_rate == 0.0 {
        return loan_amount / num_payments;
    }

    let growth = (1.0 + monthly_rate).powi(LOAN_TERM_MONTHS as i32);
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}

/// Monthly mortgage insurance premium for a loan amount
pub fn monthly_mortgage_insurance(loan_amount: f64) -> f64 {
    loan_amount * ANNUAL_MI_RATE / 12.0
}

/// Total monthly housing payment: principal and interest plus escrowed
/// tax, insurance, and (when applicable) mortgage insurance.
///
/// Used for the baseline decline-reason scenario; per-program checks
/// assemble the same sum from their own MI determination.
pub fn monthly_housing_payment(
    loan_amount: f64,
    annual_rate_pct: f64,
    property_tax: f64,
    home_insurance: f64,
    requires_mi: bool,
) -> f64 {
    let principal_and_interest = monthly_principal_and_interest(loan_amount, annual_rate_pct);
    let mi = if requires_mi {
        monthly_mortgage_insurance(loan_amount)
    } else {
        0.0
    };
    principal_and_interest + property_tax + home_insurance + mi
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_principal_and_interest(300_000.0, 0.0);
        assert_relative_eq!(payment, 300_000.0 / 360.0);
    }

    #[test]
    fn test_known_payment() {
        // $240,000 at 6.5% over 30 years
        let payment = monthly_principal_and_interest(240_000.0, 6.5);
        assert!((payment - 1_516.96).abs() < 0.05, "got {}", payment);
    }

    #[test]
    fn test_payment_increases_with_rate() {
        let low = monthly_principal_and_interest(200_000.0, 5.0);
        let high = monthly_principal_and_interest(200_000.0, 7.0);
        assert!(high > low);
    }

    #[test]
    fn test_negative_loan_propagates() {
        // Down payment above property value: payment goes negative
        // rather than erroring, matching the documented engine contract
        let payment = monthly_principal_and_interest(-50_000.0, 6.5);
        assert!(payment < 0.0);
    }

    #[test]
    fn test_housing_payment_components() {
        let base = monthly_housing_payment(200_000.0, 6.5, 200.0, 80.0, false);
        let with_mi = monthly_housing_payment(200_000.0, 6.5, 200.0, 80.0, true);

        assert_relative_eq!(
            base,
            monthly_principal_and_interest(200_000.0, 6.5) + 280.0
        );
        // Compare the sums rather than their difference: the subtraction
        // cancels to the last few bits and trips the default tolerance.
        assert_relative_eq!(with_mi, base + 200_000.0 * 0.005 / 12.0);
    }
}
