//! Credit score tiers and the tier-specific offer rate table

use super::program::ProgramId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Credit tier classification
///
/// Tiers are ordered worst-to-best so `Ord` matches creditworthiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreditTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditTier {
    /// Classify a credit score using inclusive lower bounds
    ///
    /// Total over the whole score domain: anything below 620 (including
    /// out-of-range inputs) is Poor.
    pub fn from_score(score: u16) -> Self {
        if score >= 740 {
            CreditTier::Excellent
        } else if score >= 680 {
            CreditTier::Good
        } else if score >= 620 {
            CreditTier::Fair
        } else {
            CreditTier::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "Excellent",
            CreditTier::Good => "Good",
            CreditTier::Fair => "Fair",
            CreditTier::Poor => "Poor",
        }
    }
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(CreditTier::Excellent),
            "Good" => Ok(CreditTier::Good),
            "Fair" => Ok(CreditTier::Fair),
            "Poor" => Ok(CreditTier::Poor),
            other => Err(format!("Unknown credit tier: {}", other)),
        }
    }
}

/// Annual offer rates by credit tier and program
///
/// Used preferentially over a program's base rate when quoting an offer.
/// Eligibility checks always use the base rate, so the tier rate affects
/// what is quoted but never pass/fail.
#[derive(Debug, Clone)]
pub struct CreditTierRates {
    rates: HashMap<(CreditTier, ProgramId), f64>,
}

impl CreditTierRates {
    pub fn new(rates: HashMap<(CreditTier, ProgramId), f64>) -> Self {
        Self { rates }
    }

    /// Published fallback rate sheet
    pub fn default_published() -> Self {
        use CreditTier::*;
        use ProgramId::*;

        let mut rates = HashMap::new();
        let sheet = [
            (Conventional, [6.875, 7.125, 7.375, 7.750]),
            (Fha, [6.750, 7.000, 7.250, 7.625]),
            (Va, [6.625, 6.875, 7.125, 7.500]),
            (Usda, [6.750, 7.000, 7.250, 7.625]),
            (Jumbo, [7.000, 7.250, 7.500, 7.875]),
        ];

        for (program, [excellent, good, fair, poor]) in sheet {
            rates.insert((Excellent, program), excellent);
            rates.insert((Good, program), good);
            rates.insert((Fair, program), fair);
            rates.insert((Poor, program), poor);
        }

        Self { rates }
    }

    /// Get the tier-specific annual rate for a program, if one is published
    pub fn rate_for(&self, tier: CreditTier, program: ProgramId) -> Option<f64> {
        self.rates.get(&(tier, program)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(CreditTier::from_score(740), CreditTier::Excellent);
        assert_eq!(CreditTier::from_score(739), CreditTier::Good);
        assert_eq!(CreditTier::from_score(680), CreditTier::Good);
        assert_eq!(CreditTier::from_score(679), CreditTier::Fair);
        assert_eq!(CreditTier::from_score(620), CreditTier::Fair);
        assert_eq!(CreditTier::from_score(619), CreditTier::Poor);
    }

    #[test]
    fn test_tier_total_over_domain() {
        // Out-of-range scores still classify rather than panic
        assert_eq!(CreditTier::from_score(0), CreditTier::Poor);
        assert_eq!(CreditTier::from_score(u16::MAX), CreditTier::Excellent);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(CreditTier::Excellent > CreditTier::Good);
        assert!(CreditTier::Good > CreditTier::Fair);
        assert!(CreditTier::Fair > CreditTier::Poor);
    }

    #[test]
    fn test_default_rate_sheet() {
        let rates = CreditTierRates::default_published();

        assert_eq!(
            rates.rate_for(CreditTier::Excellent, ProgramId::Conventional),
            Some(6.875)
        );
        assert_eq!(
            rates.rate_for(CreditTier::Poor, ProgramId::Jumbo),
            Some(7.875)
        );

        // Better tiers never price higher
        for program in [
            ProgramId::Conventional,
            ProgramId::Fha,
            ProgramId::Va,
            ProgramId::Usda,
            ProgramId::Jumbo,
        ] {
            let excellent = rates.rate_for(CreditTier::Excellent, program).unwrap();
            let poor = rates.rate_for(CreditTier::Poor, program).unwrap();
            assert!(excellent < poor);
        }
    }
}
