//! AWS Lambda handler for the qualification endpoint
//!
//! Accepts the flat applicant JSON body via POST, validates it (the
//! engine itself assumes well-formed input), runs qualification, and
//! returns the result. Supports Lambda Function URLs for direct HTTP
//! access with the same CORS headers the browser form expects.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use mortgage_prequal::{ApplicantProfile, QualificationEngine, QualificationResult, RateTables};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Incoming qualification request
///
/// Every numeric field is optional at the wire level so validation can
/// report all missing fields at once instead of failing on the first.
#[derive(Debug, Deserialize)]
pub struct QualifyRequest {
    pub monthly_income: Option<f64>,

    #[serde(default)]
    pub additional_income: f64,

    pub monthly_debts: Option<f64>,

    pub credit_score: Option<i64>,

    pub down_payment: Option<f64>,

    pub property_value: Option<f64>,

    pub property_state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QualifyResponse {
    pub success: bool,
    pub qualification: QualificationResult,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ValidationErrorResponse {
    error: &'static str,
    details: Vec<String>,
}

/// Validation stage run before the engine: required fields present,
/// values inside their documented domains
fn validate(request: QualifyRequest) -> Result<ApplicantProfile, Vec<String>> {
    let mut errors = Vec::new();

    let monthly_income = match request.monthly_income {
        Some(v) if v >= 0.0 && v.is_finite() => v,
        Some(_) => {
            errors.push("monthly_income must be a non-negative number".to_string());
            0.0
        }
        None => {
            errors.push("monthly_income is required".to_string());
            0.0
        }
    };

    if !(request.additional_income >= 0.0 && request.additional_income.is_finite()) {
        errors.push("additional_income must be a non-negative number".to_string());
    }

    let monthly_debts = match request.monthly_debts {
        Some(v) if v >= 0.0 && v.is_finite() => v,
        Some(_) => {
            errors.push("monthly_debts must be a non-negative number".to_string());
            0.0
        }
        None => {
            errors.push("monthly_debts is required".to_string());
            0.0
        }
    };

    let credit_score = match request.credit_score {
        Some(v) if (300..=850).contains(&v) => v as u16,
        Some(_) => {
            errors.push("credit_score must be between 300 and 850".to_string());
            0
        }
        None => {
            errors.push("credit_score is required".to_string());
            0
        }
    };

    let down_payment = match request.down_payment {
        Some(v) if v >= 0.0 && v.is_finite() => v,
        Some(_) => {
            errors.push("down_payment must be a non-negative number".to_string());
            0.0
        }
        None => {
            errors.push("down_payment is required".to_string());
            0.0
        }
    };

    let property_value = match request.property_value {
        Some(v) if v > 0.0 && v.is_finite() => v,
        Some(_) => {
            errors.push("property_value must be a positive number".to_string());
            0.0
        }
        None => {
            errors.push("property_value is required".to_string());
            0.0
        }
    };

    let property_state = match request.property_state {
        Some(s) if !s.trim().is_empty() => s.trim().to_uppercase(),
        _ => {
            errors.push("property_state is required".to_string());
            String::new()
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ApplicantProfile {
        applicant_id: 0,
        monthly_income,
        additional_monthly_income: request.additional_income,
        monthly_debts,
        credit_score,
        down_payment,
        property_value,
        property_state,
    })
}

fn cors_response(status: u16, body: Body) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(body)
        .unwrap()
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    cors_response(status, Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors_response(200, Body::Empty));
    }

    if event.method().as_str() != "POST" {
        return Ok(error_response(405, "Method not allowed"));
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QualifyRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let profile = match validate(request) {
        Ok(p) => p,
        Err(details) => {
            let body = serde_json::to_string(&ValidationErrorResponse {
                error: "Validation failed",
                details,
            })?;
            return Ok(cors_response(400, Body::Text(body)));
        }
    };

    // Rate tables: CSV directory when configured, built-in defaults otherwise
    let tables = match std::env::var("RATES_DIR") {
        Ok(dir) => match RateTables::from_csv_path(Path::new(&dir)) {
            Ok(t) => t,
            Err(e) => {
                return Ok(error_response(500, &format!("Failed to load rate tables: {}", e)));
            }
        },
        Err(_) => RateTables::default_published(),
    };

    let engine = QualificationEngine::new(tables);
    let qualification = engine.qualify(&profile);

    let response = QualifyResponse {
        success: true,
        qualification,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(cors_response(200, Body::Text(serde_json::to_string(&response)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_request() {
        let request: QualifyRequest = serde_json::from_str(
            r#"{
                "monthly_income": 8000,
                "monthly_debts": 500,
                "credit_score": 760,
                "down_payment": 60000,
                "property_value": 300000,
                "property_state": "tx"
            }"#,
        )
        .unwrap();

        let profile = validate(request).unwrap();
        assert_eq!(profile.credit_score, 760);
        assert_eq!(profile.property_state, "TX");
        assert_eq!(profile.additional_monthly_income, 0.0);
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let request: QualifyRequest =
            serde_json::from_str(r#"{"credit_score": 900, "property_value": 0}"#).unwrap();

        let errors = validate(request).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("monthly_income")));
        assert!(errors.iter().any(|e| e.contains("credit_score")));
        assert!(errors.iter().any(|e| e.contains("property_value")));
        assert!(errors.iter().any(|e| e.contains("down_payment")));
    }
}
