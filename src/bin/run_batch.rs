//! Qualify a batch of applicants from a CSV export
//!
//! Writes per-applicant results to qualification_output.csv and prints
//! aggregate statistics (qualification rate, per-program counts, credit
//! tier distribution) as JSON.
//!
//! Usage: run_batch [applicants.csv]
//! Set RATES_DIR to load rate tables from CSV instead of built-in defaults.

use anyhow::Context;
use chrono::Utc;
use mortgage_prequal::{
    applicant::{load_applicants, loader::DEFAULT_APPLICANTS_PATH},
    qualify::QualificationResult,
    CreditTier, QualificationEngine, RateTables,
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Aggregate statistics across the batch
#[derive(Debug, Serialize)]
struct BatchStatistics {
    generated_at: String,
    total_applications: usize,
    qualified: usize,
    qualification_rate_pct: f64,
    average_credit_score: f64,
    program_counts: BTreeMap<String, usize>,
    tier_counts: BTreeMap<String, usize>,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let applicants_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_APPLICANTS_PATH.to_string());

    println!("Loading applicants from {}...", applicants_path);
    let applicants = load_applicants(&applicants_path)
        .with_context(|| format!("loading applicants from {}", applicants_path))?;
    println!("Loaded {} applicants in {:?}", applicants.len(), start.elapsed());

    let tables = match env::var("RATES_DIR") {
        Ok(dir) => RateTables::from_csv_path(Path::new(&dir))
            .with_context(|| format!("loading rate tables from {}", dir))?,
        Err(_) => RateTables::default_published(),
    };
    let engine = QualificationEngine::new(tables);

    println!("Qualifying...");
    let qual_start = Instant::now();

    // The engine is immutable, so one instance serves all workers
    let results: Vec<QualificationResult> = applicants
        .par_iter()
        .map(|applicant| engine.qualify(applicant))
        .collect();

    println!("Qualification complete in {:?}", qual_start.elapsed());

    // Per-applicant results CSV
    let csv_path = "qualification_output.csv";
    let mut file = File::create(csv_path).context("creating output CSV")?;
    writeln!(
        file,
        "ApplicantID,Qualified,CreditTier,LoanAmount,LTV,EligiblePrograms,Reasons"
    )?;
    for (applicant, result) in applicants.iter().zip(&results) {
        let programs: Vec<&str> = result.programs.iter().map(|o| o.program.as_str()).collect();
        writeln!(
            file,
            "{},{},{},{:.2},{:.2},{},{}",
            applicant.applicant_id,
            result.qualified,
            result.calculations.credit_tier,
            result.calculations.loan_amount,
            result.calculations.ltv,
            programs.join(";"),
            result.reasons.join("; "),
        )?;
    }
    println!("Per-applicant results written to: {}", csv_path);

    // Aggregate statistics
    let total = results.len();
    let qualified = results.iter().filter(|r| r.qualified).count();
    let qualification_rate_pct = if total > 0 {
        (qualified as f64 / total as f64 * 10_000.0).round() / 100.0
    } else {
        0.0
    };
    let average_credit_score = if total > 0 {
        applicants.iter().map(|a| a.credit_score as f64).sum::<f64>() / total as f64
    } else {
        0.0
    };

    let mut program_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut tier_counts: BTreeMap<String, usize> = BTreeMap::new();
    for result in &results {
        for offer in &result.programs {
            *program_counts.entry(offer.program.as_str().to_string()).or_default() += 1;
        }
        *tier_counts
            .entry(result.calculations.credit_tier.to_string())
            .or_default() += 1;
    }
    // Tier distribution includes empty tiers for stable dashboards
    for tier in [
        CreditTier::Poor,
        CreditTier::Fair,
        CreditTier::Good,
        CreditTier::Excellent,
    ] {
        tier_counts.entry(tier.to_string()).or_default();
    }

    let statistics = BatchStatistics {
        generated_at: Utc::now().to_rfc3339(),
        total_applications: total,
        qualified,
        qualification_rate_pct,
        average_credit_score,
        program_counts,
        tier_counts,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    println!("\nBatch statistics:");
    println!("{}", serde_json::to_string_pretty(&statistics)?);

    Ok(())
}
