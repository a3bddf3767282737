//! CSV-based rate table loader
//!
//! Loads loan programs, credit tier rates, and state cost rates from
//! CSV files in data/rates/

use super::program::{LoanProgram, ProgramId};
use super::region::RegionRates;
use super::tier::CreditTier;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Default path to the rate tables directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// Errors raised while loading rate tables
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("failed to read rate table: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid rate table entry: {0}")]
    Invalid(String),
}

/// Raw CSV row matching loan_programs.csv columns
#[derive(Debug, serde::Deserialize)]
struct ProgramRow {
    #[serde(rename = "ProgramID")]
    program_id: String,
    #[serde(rename = "DisplayName")]
    display_name: String,
    #[serde(rename = "MinCreditScore")]
    min_credit_score: u16,
    #[serde(rename = "MaxLTV")]
    max_ltv: f64,
    #[serde(rename = "MaxFrontEndDTI")]
    max_front_end_dti: f64,
    #[serde(rename = "MaxBackEndDTI")]
    max_back_end_dti: f64,
    #[serde(rename = "BaseRate")]
    base_rate: f64,
    #[serde(rename = "MIExempt")]
    mi_exempt: bool,
    #[serde(rename = "MinDownPaymentPct")]
    min_down_payment_pct: f64,
}

impl ProgramRow {
    fn to_program(self) -> Result<LoanProgram, RateTableError> {
        let id: ProgramId = self.program_id.parse().map_err(RateTableError::Invalid)?;

        Ok(LoanProgram {
            id,
            display_name: self.display_name,
            min_credit_score: self.min_credit_score,
            max_ltv: self.max_ltv,
            max_front_end_dti: self.max_front_end_dti,
            max_back_end_dti: self.max_back_end_dti,
            base_rate: self.base_rate,
            mi_exempt: self.mi_exempt,
            min_down_payment_pct: self.min_down_payment_pct,
        })
    }
}

/// Load loan program rules from CSV, preserving file row order
pub fn load_loan_programs(path: &Path) -> Result<Vec<LoanProgram>, RateTableError> {
    let mut reader = csv::Reader::from_path(path.join("loan_programs.csv"))?;
    let mut programs = Vec::new();

    for result in reader.deserialize() {
        let row: ProgramRow = result?;
        programs.push(row.to_program()?);
    }

    log::debug!("loaded {} loan programs", programs.len());
    Ok(programs)
}

/// Raw CSV row matching credit_tier_rates.csv columns
#[derive(Debug, serde::Deserialize)]
struct TierRateRow {
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Program")]
    program: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// Load the credit tier rate sheet from CSV
pub fn load_credit_tier_rates(
    path: &Path,
) -> Result<HashMap<(CreditTier, ProgramId), f64>, RateTableError> {
    let mut reader = csv::Reader::from_path(path.join("credit_tier_rates.csv"))?;
    let mut rates = HashMap::new();

    for result in reader.deserialize() {
        let row: TierRateRow = result?;
        let tier: CreditTier = row.tier.parse().map_err(RateTableError::Invalid)?;
        let program: ProgramId = row.program.parse().map_err(RateTableError::Invalid)?;
        rates.insert((tier, program), row.rate);
    }

    log::debug!("loaded {} tier rates", rates.len());
    Ok(rates)
}

/// Raw CSV row matching state_rates.csv columns
#[derive(Debug, serde::Deserialize)]
struct StateRateRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "PropertyTaxRate")]
    property_tax_rate: f64,
    #[serde(rename = "HomeInsuranceRate")]
    home_insurance_rate: f64,
}

/// Load per-state cost rates from CSV
pub fn load_state_rates(path: &Path) -> Result<HashMap<String, RegionRates>, RateTableError> {
    let mut reader = csv::Reader::from_path(path.join("state_rates.csv"))?;
    let mut rates = HashMap::new();

    for result in reader.deserialize() {
        let row: StateRateRow = result?;
        rates.insert(
            row.state,
            RegionRates {
                property_tax_rate: row.property_tax_rate,
                home_insurance_rate: row.home_insurance_rate,
            },
        );
    }

    log::debug!("loaded cost rates for {} states", rates.len());
    Ok(rates)
}

/// All rate tables loaded from a directory of CSV files
pub struct LoadedRates {
    pub programs: Vec<LoanProgram>,
    pub tier_rates: HashMap<(CreditTier, ProgramId), f64>,
    pub state_rates: HashMap<String, RegionRates>,
}

impl LoadedRates {
    /// Load all rate tables from the default path
    pub fn load_default() -> Result<Self, RateTableError> {
        Self::load_from(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load all rate tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, RateTableError> {
        Ok(Self {
            programs: load_loan_programs(path)?,
            tier_rates: load_credit_tier_rates(path)?,
            state_rates: load_state_rates(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_rates() {
        let result = LoadedRates::load_default();
        assert!(result.is_ok(), "Failed to load rates: {:?}", result.err());

        let loaded = result.unwrap();

        assert_eq!(loaded.programs.len(), 5);
        assert_eq!(loaded.programs[0].id, ProgramId::Conventional);

        let fha = loaded
            .programs
            .iter()
            .find(|p| p.id == ProgramId::Fha)
            .unwrap();
        assert_eq!(fha.min_down_payment_pct, 3.5);

        // 4 tiers x 5 programs
        assert_eq!(loaded.tier_rates.len(), 20);
        assert_eq!(
            loaded.tier_rates[&(CreditTier::Excellent, ProgramId::Conventional)],
            6.875
        );

        assert!(loaded.state_rates.contains_key("CA"));
        assert!(loaded.state_rates.contains_key("TX"));
    }
}
