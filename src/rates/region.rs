//! Per-state property tax and homeowners insurance cost rates

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Annual cost rates for one state, as fractions of property value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegionRates {
    pub property_tax_rate: f64,
    pub home_insurance_rate: f64,
}

/// Monthly carrying costs for a specific property value
#[derive(Debug, Clone, Copy)]
pub struct MonthlyCosts {
    pub property_tax: f64,
    pub home_insurance: f64,
}

/// State used as the fallback for unknown state codes
pub const DEFAULT_STATE: &str = "CA";

/// State code to cost-rate lookup with fallback rates resolved up front
#[derive(Debug, Clone)]
pub struct RegionCostTable {
    rates: HashMap<String, RegionRates>,
    default_rates: RegionRates,
}

impl RegionCostTable {
    /// Create from explicit entries plus the rates applied to any state
    /// code absent from `rates`.
    pub fn new(rates: HashMap<String, RegionRates>, default_rates: RegionRates) -> Self {
        Self {
            rates,
            default_rates,
        }
    }

    /// Published state cost rates, defaulting unknown states to CA
    pub fn default_published() -> Self {
        let entries: [(&str, f64, f64); 16] = [
            ("AZ", 0.0062, 0.0040),
            ("CA", 0.0076, 0.0036),
            ("CO", 0.0051, 0.0048),
            ("FL", 0.0089, 0.0098),
            ("GA", 0.0092, 0.0052),
            ("IL", 0.0218, 0.0046),
            ("MA", 0.0117, 0.0038),
            ("NC", 0.0084, 0.0042),
            ("NJ", 0.0235, 0.0040),
            ("NV", 0.0060, 0.0038),
            ("NY", 0.0168, 0.0044),
            ("OH", 0.0152, 0.0042),
            ("PA", 0.0149, 0.0044),
            ("TX", 0.0174, 0.0090),
            ("VA", 0.0087, 0.0040),
            ("WA", 0.0093, 0.0042),
        ];

        let rates: HashMap<String, RegionRates> = entries
            .iter()
            .map(|&(state, tax, insurance)| {
                (
                    state.to_string(),
                    RegionRates {
                        property_tax_rate: tax,
                        home_insurance_rate: insurance,
                    },
                )
            })
            .collect();

        let default_rates = rates[DEFAULT_STATE];
        Self::new(rates, default_rates)
    }

    /// Get annual rates for a state, falling back to the default rates
    pub fn rates_for(&self, state_code: &str) -> RegionRates {
        self.rates
            .get(state_code)
            .copied()
            .unwrap_or(self.default_rates)
    }

    /// Monthly tax and insurance costs for a property in the given state
    pub fn monthly_costs(&self, state_code: &str, property_value: f64) -> MonthlyCosts {
        let rates = self.rates_for(state_code);
        MonthlyCosts {
            property_tax: property_value * rates.property_tax_rate / 12.0,
            home_insurance: property_value * rates.home_insurance_rate / 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_costs_known_state() {
        let table = RegionCostTable::default_published();
        let costs = table.monthly_costs("TX", 300_000.0);

        assert_relative_eq!(costs.property_tax, 300_000.0 * 0.0174 / 12.0);
        assert_relative_eq!(costs.home_insurance, 300_000.0 * 0.0090 / 12.0);
    }

    #[test]
    fn test_unknown_state_falls_back_to_default() {
        let table = RegionCostTable::default_published();

        let unknown = table.monthly_costs("ZZ", 250_000.0);
        let default = table.monthly_costs("CA", 250_000.0);

        assert_relative_eq!(unknown.property_tax, default.property_tax);
        assert_relative_eq!(unknown.home_insurance, default.home_insurance);
    }

    #[test]
    fn test_custom_table() {
        let wy = RegionRates {
            property_tax_rate: 0.012,
            home_insurance_rate: 0.005,
        };
        let mut rates = HashMap::new();
        rates.insert("WY".to_string(), wy);
        let table = RegionCostTable::new(rates, wy);

        let costs = table.monthly_costs("WY", 300_000.0);
        assert_relative_eq!(costs.property_tax, 300.0);
        assert_relative_eq!(costs.home_insurance, 125.0);
    }

    #[test]
    fn test_default_rates_apply_to_any_missing_state() {
        // The fallback is carried by value, so a sparse table can never
        // quote zero tax and insurance for an unlisted state.
        let default_rates = RegionRates {
            property_tax_rate: 0.010,
            home_insurance_rate: 0.004,
        };
        let table = RegionCostTable::new(HashMap::new(), default_rates);

        let costs = table.monthly_costs("MT", 240_000.0);
        assert_relative_eq!(costs.property_tax, 240_000.0 * 0.010 / 12.0);
        assert_relative_eq!(costs.home_insurance, 240_000.0 * 0.004 / 12.0);
    }
}
