//! Scenario runner for efficient batch qualification
//!
//! Pre-loads rate tables once, then allows qualifying many applicants
//! (or re-running one applicant under alternate tables) without
//! re-reading CSV files.

use crate::applicant::ApplicantProfile;
use crate::qualify::{QualificationEngine, QualificationResult};
use crate::rates::{RateTableError, RateTables};

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// for applicant in &applicants {
///     let result = runner.run(applicant);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base rate tables
    base_rates: RateTables,
}

impl ScenarioRunner {
    /// Create runner with the published in-memory tables
    pub fn new() -> Self {
        Self {
            base_rates: RateTables::default_published(),
        }
    }

    /// Create runner by loading tables from the default CSV location
    pub fn from_csv() -> Result<Self, RateTableError> {
        Ok(Self {
            base_rates: RateTables::from_csv()?,
        })
    }

    /// Create runner from a specific rates directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, RateTableError> {
        Ok(Self {
            base_rates: RateTables::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built tables
    pub fn with_tables(tables: RateTables) -> Self {
        Self { base_rates: tables }
    }

    pub fn tables(&self) -> &RateTables {
        &self.base_rates
    }

    /// Qualify one applicant against the base tables
    pub fn run(&self, profile: &ApplicantProfile) -> QualificationResult {
        let engine = QualificationEngine::new(self.base_rates.clone());
        engine.qualify(profile)
    }

    /// Qualify one applicant under substitute tables (rate shocks,
    /// alternate program rules) without touching the base tables
    pub fn run_with_tables(
        &self,
        profile: &ApplicantProfile,
        tables: RateTables,
    ) -> QualificationResult {
        let engine = QualificationEngine::new(tables);
        engine.qualify(profile)
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{CreditTierRates, LoanProgramTable, RegionCostTable};

    fn applicant() -> ApplicantProfile {
        ApplicantProfile {
            applicant_id: 7,
            monthly_income: 8_000.0,
            additional_monthly_income: 0.0,
            monthly_debts: 500.0,
            credit_score: 760,
            down_payment: 60_000.0,
            property_value: 300_000.0,
            property_state: "CA".to_string(),
        }
    }

    #[test]
    fn test_runner_matches_direct_engine() {
        let runner = ScenarioRunner::new();
        let engine = QualificationEngine::new(RateTables::default_published());
        let profile = applicant();

        let from_runner = serde_json::to_string(&runner.run(&profile)).unwrap();
        let direct = serde_json::to_string(&engine.qualify(&profile)).unwrap();

        assert_eq!(from_runner, direct);
    }

    #[test]
    fn test_substitute_tables_leave_base_untouched() {
        let runner = ScenarioRunner::new();
        let profile = applicant();

        // Empty program table: nothing can qualify
        let empty = RateTables {
            programs: LoanProgramTable::new(Vec::new()),
            tier_rates: CreditTierRates::default_published(),
            regions: RegionCostTable::default_published(),
        };
        let shocked = runner.run_with_tables(&profile, empty);
        assert!(!shocked.qualified);

        // Base tables still qualify the same applicant
        assert!(runner.run(&profile).qualified);
    }
}
