//! Load applicant profiles from CSV for batch qualification runs

use super::ApplicantProfile;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Default path to the sample applicants file
pub const DEFAULT_APPLICANTS_PATH: &str = "data/applicants_sample.csv";

/// Errors raised while loading applicant CSVs
#[derive(Debug, Error)]
pub enum ApplicantLoadError {
    #[error("failed to read applicants file: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw CSV row matching the applicant export columns
///
/// Name and contact columns are present in exports but unused by the
/// engine, so they are accepted and discarded here.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ApplicantID")]
    applicant_id: u32,
    #[serde(rename = "FirstName")]
    _first_name: String,
    #[serde(rename = "LastName")]
    _last_name: String,
    #[serde(rename = "MonthlyIncome")]
    monthly_income: f64,
    #[serde(rename = "AdditionalIncome")]
    additional_income: f64,
    #[serde(rename = "MonthlyDebts")]
    monthly_debts: f64,
    #[serde(rename = "CreditScore")]
    credit_score: u16,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "PropertyValue")]
    property_value: f64,
    #[serde(rename = "PropertyState")]
    property_state: String,
}

impl CsvRow {
    fn to_profile(self) -> ApplicantProfile {
        ApplicantProfile {
            applicant_id: self.applicant_id,
            monthly_income: self.monthly_income,
            additional_monthly_income: self.additional_income,
            monthly_debts: self.monthly_debts,
            credit_score: self.credit_score,
            down_payment: self.down_payment,
            property_value: self.property_value,
            property_state: self.property_state,
        }
    }
}

/// Load all applicants from a CSV file
pub fn load_applicants<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ApplicantProfile>, ApplicantLoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut applicants = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        applicants.push(row.to_profile());
    }

    log::debug!("loaded {} applicants", applicants.len());
    Ok(applicants)
}

/// Load applicants from any reader (e.g., string buffer, network stream)
pub fn load_applicants_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ApplicantProfile>, ApplicantLoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut applicants = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        applicants.push(row.to_profile());
    }

    Ok(applicants)
}

/// Load the shipped sample applicants file
pub fn load_sample_applicants() -> Result<Vec<ApplicantProfile>, ApplicantLoadError> {
    load_applicants(DEFAULT_APPLICANTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_applicants() {
        let applicants = load_sample_applicants().expect("Failed to load applicants");
        assert!(applicants.len() >= 6);

        let a1 = &applicants[0];
        assert_eq!(a1.applicant_id, 1);
        assert!(a1.property_value > 0.0);
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "\
ApplicantID,FirstName,LastName,MonthlyIncome,AdditionalIncome,MonthlyDebts,CreditScore,DownPayment,PropertyValue,PropertyState
42,Dana,Reyes,9200,0,650,755,80000,400000,WA
";
        let applicants = load_applicants_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(applicants.len(), 1);
        assert_eq!(applicants[0].applicant_id, 42);
        assert_eq!(applicants[0].credit_score, 755);
        assert_eq!(applicants[0].property_state, "WA");
    }
}
