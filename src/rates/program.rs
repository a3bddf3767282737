//! Loan program rules: credit floors, LTV caps, DTI limits, and base rates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a loan program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramId {
    Conventional,
    Fha,
    Va,
    Usda,
    Jumbo,
}

impl ProgramId {
    /// Lowercase key used in rate tables and CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramId::Conventional => "conventional",
            ProgramId::Fha => "fha",
            ProgramId::Va => "va",
            ProgramId::Usda => "usda",
            ProgramId::Jumbo => "jumbo",
        }
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conventional" => Ok(ProgramId::Conventional),
            "fha" => Ok(ProgramId::Fha),
            "va" => Ok(ProgramId::Va),
            "usda" => Ok(ProgramId::Usda),
            "jumbo" => Ok(ProgramId::Jumbo),
            other => Err(format!("Unknown program id: {}", other)),
        }
    }
}

/// Underwriting thresholds for a single loan program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanProgram {
    pub id: ProgramId,

    /// Human-readable name shown to applicants
    pub display_name: String,

    /// Minimum qualifying credit score
    pub min_credit_score: u16,

    /// Maximum loan-to-value ratio, as a percent
    pub max_ltv: f64,

    /// Maximum front-end (housing) DTI, as a percent
    pub max_front_end_dti: f64,

    /// Maximum back-end (total) DTI, as a percent
    pub max_back_end_dti: f64,

    /// Annual rate used for eligibility math and as the offer-rate fallback
    pub base_rate: f64,

    /// Programs with a government guarantee carry no mortgage insurance
    pub mi_exempt: bool,

    /// Minimum down payment as a percent of property value (0 = no rule)
    pub min_down_payment_pct: f64,
}

/// Ordered table of loan programs
///
/// Iteration order is the order offers appear in qualification results,
/// so it is part of the engine's observable behavior.
#[derive(Debug, Clone)]
pub struct LoanProgramTable {
    programs: Vec<LoanProgram>,
}

impl LoanProgramTable {
    pub fn new(programs: Vec<LoanProgram>) -> Self {
        Self { programs }
    }

    /// Published program rules: Conventional, FHA, VA, USDA, Jumbo
    ///
    /// FHA's max LTV is left at 100 so its 3.5% minimum-down-payment rule,
    /// not the LTV cap, is what rejects low-down-payment applications.
    pub fn default_published() -> Self {
        Self {
            programs: vec![
                LoanProgram {
                    id: ProgramId::Conventional,
                    display_name: "Conventional 30-Year Fixed".to_string(),
                    min_credit_score: 620,
                    max_ltv: 97.0,
                    max_front_end_dti: 28.0,
                    max_back_end_dti: 36.0,
                    base_rate: 6.5,
                    mi_exempt: false,
                    min_down_payment_pct: 0.0,
                },
                LoanProgram {
                    id: ProgramId::Fha,
                    display_name: "FHA 30-Year Fixed".to_string(),
                    min_credit_score: 580,
                    max_ltv: 100.0,
                    max_front_end_dti: 31.0,
                    max_back_end_dti: 43.0,
                    base_rate: 6.25,
                    mi_exempt: false,
                    min_down_payment_pct: 3.5,
                },
                LoanProgram {
                    id: ProgramId::Va,
                    display_name: "VA 30-Year Fixed".to_string(),
                    min_credit_score: 580,
                    max_ltv: 100.0,
                    max_front_end_dti: 41.0,
                    max_back_end_dti: 41.0,
                    base_rate: 6.0,
                    mi_exempt: true,
                    min_down_payment_pct: 0.0,
                },
                LoanProgram {
                    id: ProgramId::Usda,
                    display_name: "USDA Rural Development".to_string(),
                    min_credit_score: 640,
                    max_ltv: 100.0,
                    max_front_end_dti: 29.0,
                    max_back_end_dti: 41.0,
                    base_rate: 6.25,
                    mi_exempt: true,
                    min_down_payment_pct: 0.0,
                },
                LoanProgram {
                    id: ProgramId::Jumbo,
                    display_name: "Jumbo 30-Year Fixed".to_string(),
                    min_credit_score: 700,
                    max_ltv: 80.0,
                    max_front_end_dti: 28.0,
                    max_back_end_dti: 36.0,
                    base_rate: 7.0,
                    mi_exempt: false,
                    min_down_payment_pct: 0.0,
                },
            ],
        }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(programs: &[LoanProgram]) -> Self {
        Self {
            programs: programs.to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoanProgram> {
        self.programs.iter()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn get(&self, id: ProgramId) -> Option<&LoanProgram> {
        self.programs.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_id_round_trip() {
        for id in [
            ProgramId::Conventional,
            ProgramId::Fha,
            ProgramId::Va,
            ProgramId::Usda,
            ProgramId::Jumbo,
        ] {
            assert_eq!(id.as_str().parse::<ProgramId>().unwrap(), id);
        }
        assert!("heloc".parse::<ProgramId>().is_err());
    }

    #[test]
    fn test_default_table_order() {
        let table = LoanProgramTable::default_published();
        let ids: Vec<ProgramId> = table.iter().map(|p| p.id).collect();

        assert_eq!(
            ids,
            vec![
                ProgramId::Conventional,
                ProgramId::Fha,
                ProgramId::Va,
                ProgramId::Usda,
                ProgramId::Jumbo,
            ]
        );
    }

    #[test]
    fn test_fha_down_payment_rule() {
        let table = LoanProgramTable::default_published();
        let fha = table.get(ProgramId::Fha).unwrap();

        assert_eq!(fha.min_down_payment_pct, 3.5);
        // The LTV cap must not pre-empt the down payment rule
        assert!(fha.max_ltv > 96.5);
    }

    #[test]
    fn test_government_programs_mi_exempt() {
        let table = LoanProgramTable::default_published();

        assert!(table.get(ProgramId::Va).unwrap().mi_exempt);
        assert!(table.get(ProgramId::Usda).unwrap().mi_exempt);
        assert!(!table.get(ProgramId::Conventional).unwrap().mi_exempt);
        assert!(!table.get(ProgramId::Fha).unwrap().mi_exempt);
    }
}
