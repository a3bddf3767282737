//! Per-program eligibility checks and the aggregate qualification decision

use super::payment::{
    monthly_housing_payment, monthly_mortgage_insurance, monthly_principal_and_interest,
};
use super::result::{ProgramOffer, QualificationResult, SharedFigures};
use crate::applicant::ApplicantProfile;
use crate::rates::{CreditTier, LoanProgram, MonthlyCosts, RateTables};

/// Reference rate for the baseline decline-reason scenario
pub const BASELINE_RATE: f64 = 6.5;

/// Baseline DTI ceilings, used only for decline reasons
pub const BASELINE_MAX_FRONT_END_DTI: f64 = 36.0;
pub const BASELINE_MAX_BACK_END_DTI: f64 = 43.0;

/// Credit floor below which no program approves
pub const MIN_QUALIFYING_CREDIT_SCORE: u16 = 580;

/// LTV above which non-exempt programs require mortgage insurance
const MI_LTV_THRESHOLD: f64 = 80.0;

/// First failing check for a single program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    CreditScoreTooLow,
    LtvTooHigh,
    FrontEndDtiTooHigh,
    BackEndDtiTooHigh,
    DownPaymentBelowMinimum,
}

/// Main qualification engine
///
/// Holds immutable rate tables; `qualify` is a pure function of its
/// inputs, so one engine instance can serve concurrent callers.
pub struct QualificationEngine {
    rates: RateTables,
}

impl QualificationEngine {
    /// Create a new engine with the given rate tables
    pub fn new(rates: RateTables) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTables {
        &self.rates
    }

    /// Qualify one applicant against every configured loan program
    ///
    /// Never fails for business outcomes: an applicant who qualifies for
    /// nothing gets `qualified == false` with decline reasons, not an error.
    pub fn qualify(&self, profile: &ApplicantProfile) -> QualificationResult {
        let monthly_income = profile.combined_monthly_income();
        let monthly_debts = profile.monthly_debts;
        let loan_amount = profile.loan_amount();
        let ltv = profile.ltv();
        let credit_tier = CreditTier::from_score(profile.credit_score);
        let costs = self
            .rates
            .regions
            .monthly_costs(&profile.property_state, profile.property_value);

        let mut programs = Vec::new();
        for program in self.rates.programs.iter() {
            match self.check_program(profile, program, monthly_income, ltv, &costs, credit_tier) {
                Ok(offer) => programs.push(offer),
                Err(rejection) => {
                    log::debug!(
                        "applicant {}: {} declined: {:?}",
                        profile.applicant_id,
                        program.id,
                        rejection
                    );
                }
            }
        }

        let qualified = !programs.is_empty();
        let reasons = if qualified {
            Vec::new()
        } else {
            self.decline_reasons(profile, monthly_income, monthly_debts, loan_amount, ltv, &costs)
        };

        QualificationResult {
            qualified,
            programs,
            calculations: SharedFigures {
                monthly_income,
                monthly_debts,
                loan_amount,
                ltv: round_2dp(ltv),
                credit_tier,
                property_tax: round_currency(costs.property_tax),
                home_insurance: round_currency(costs.home_insurance),
            },
            reasons,
        }
    }

    /// Check a single program, short-circuiting on the first failing rule
    ///
    /// Eligibility math uses the program base rate throughout; the
    /// credit-tier rate only affects the quoted offer rate.
    fn check_program(
        &self,
        profile: &ApplicantProfile,
        program: &LoanProgram,
        monthly_income: f64,
        ltv: f64,
        costs: &MonthlyCosts,
        credit_tier: CreditTier,
    ) -> Result<ProgramOffer, Rejection> {
        if profile.credit_score < program.min_credit_score {
            return Err(Rejection::CreditScoreTooLow);
        }

        if ltv > program.max_ltv {
            return Err(Rejection::LtvTooHigh);
        }

        let loan_amount = profile.loan_amount();
        let requires_mi = ltv > MI_LTV_THRESHOLD && !program.mi_exempt;
        let mi_amount = if requires_mi {
            monthly_mortgage_insurance(loan_amount)
        } else {
            0.0
        };

        let monthly_payment = monthly_principal_and_interest(loan_amount, program.base_rate);
        let total_monthly_payment =
            monthly_payment + costs.property_tax + costs.home_insurance + mi_amount;

        let front_end_dti = total_monthly_payment / monthly_income * 100.0;
        if front_end_dti > program.max_front_end_dti {
            return Err(Rejection::FrontEndDtiTooHigh);
        }

        let back_end_dti =
            (total_monthly_payment + profile.monthly_debts) / monthly_income * 100.0;
        if back_end_dti > program.max_back_end_dti {
            return Err(Rejection::BackEndDtiTooHigh);
        }

        // Program-specific minimum down payment, checked last
        if program.min_down_payment_pct > 0.0
            && profile.down_payment < profile.property_value * program.min_down_payment_pct / 100.0
        {
            return Err(Rejection::DownPaymentBelowMinimum);
        }

        let rate = self
            .rates
            .tier_rates
            .rate_for(credit_tier, program.id)
            .unwrap_or(program.base_rate);

        Ok(ProgramOffer {
            program: program.id,
            display_name: program.display_name.clone(),
            rate,
            monthly_payment: round_currency(monthly_payment),
            total_monthly_payment: round_currency(total_monthly_payment),
            front_end_dti: round_2dp(front_end_dti),
            back_end_dti: round_2dp(back_end_dti),
            requires_mortgage_insurance: requires_mi,
            mortgage_insurance_amount: round_currency(mi_amount),
        })
    }

    /// Decline reasons from a single baseline scenario
    ///
    /// Intentionally not per-rejected-program: a program-specific rule
    /// like FHA's minimum down payment produces no reason string, so the
    /// list may be empty even when nothing qualified.
    fn decline_reasons(
        &self,
        profile: &ApplicantProfile,
        monthly_income: f64,
        monthly_debts: f64,
        loan_amount: f64,
        ltv: f64,
        costs: &MonthlyCosts,
    ) -> Vec<String> {
        let mut reasons = Vec::new();

        if profile.credit_score < MIN_QUALIFYING_CREDIT_SCORE {
            reasons.push(format!(
                "Credit score too low (minimum {} required)",
                MIN_QUALIFYING_CREDIT_SCORE
            ));
        }

        if ltv > 100.0 {
            reasons.push("Down payment too low for available programs".to_string());
        }

        let housing_payment = monthly_housing_payment(
            loan_amount,
            BASELINE_RATE,
            costs.property_tax,
            costs.home_insurance,
            ltv > MI_LTV_THRESHOLD,
        );
        let front_end_dti = housing_payment / monthly_income * 100.0;
        let back_end_dti = (housing_payment + monthly_debts) / monthly_income * 100.0;

        if front_end_dti > BASELINE_MAX_FRONT_END_DTI {
            reasons.push(format!(
                "Front-end DTI too high: {}% (max {}%)",
                front_end_dti.round(),
                BASELINE_MAX_FRONT_END_DTI
            ));
        }

        if back_end_dti > BASELINE_MAX_BACK_END_DTI {
            reasons.push(format!(
                "Back-end DTI too high: {}% (max {}%)",
                back_end_dti.round(),
                BASELINE_MAX_BACK_END_DTI
            ));
        }

        reasons
    }
}

/// Round to whole currency units, half away from zero
fn round_currency(amount: f64) -> f64 {
    amount.round()
}

/// Round a percentage to two decimal places
fn round_2dp(pct: f64) -> f64 {
    (pct * 100.0).round() / 100.0
}
