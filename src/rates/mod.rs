//! Rate tables: loan program rules, credit tier rates, and state cost rates

mod program;
mod region;
mod tier;
pub mod loader;

pub use loader::{LoadedRates, RateTableError};
pub use program::{LoanProgram, LoanProgramTable, ProgramId};
pub use region::{MonthlyCosts, RegionCostTable, RegionRates, DEFAULT_STATE};
pub use tier::{CreditTier, CreditTierRates};

use std::path::Path;

/// Container for all rate tables consumed by the qualification engine
///
/// Immutable configuration loaded once at startup; the engine never
/// mutates it, so a single instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct RateTables {
    pub programs: LoanProgramTable,
    pub tier_rates: CreditTierRates,
    pub regions: RegionCostTable,
}

impl RateTables {
    /// Create tables with the published in-memory defaults
    pub fn default_published() -> Self {
        Self {
            programs: LoanProgramTable::default_published(),
            tier_rates: CreditTierRates::default_published(),
            regions: RegionCostTable::default_published(),
        }
    }

    /// Load tables from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, RateTableError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, RateTableError> {
        let loaded = LoadedRates::load_from(path)?;

        let default_rates = loaded.state_rates.get(DEFAULT_STATE).copied().ok_or_else(|| {
            RateTableError::Invalid(format!("state rates must include {DEFAULT_STATE}"))
        })?;

        Ok(Self {
            programs: LoanProgramTable::from_loaded(&loaded.programs),
            tier_rates: CreditTierRates::new(loaded.tier_rates),
            regions: RegionCostTable::new(loaded.state_rates, default_rates),
        })
    }
}
