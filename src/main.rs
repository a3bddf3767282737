//! Mortgage Prequal CLI
//!
//! Qualify a single applicant from command-line flags and print the
//! resulting program offers

use anyhow::Context;
use clap::Parser;
use mortgage_prequal::{ApplicantProfile, QualificationEngine, RateTables};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mortgage_prequal", about = "Mortgage pre-qualification engine", version)]
struct Args {
    /// Base gross monthly income
    #[arg(long)]
    monthly_income: f64,

    /// Secondary monthly income
    #[arg(long, default_value_t = 0.0)]
    additional_income: f64,

    /// Recurring monthly non-housing debts
    #[arg(long)]
    monthly_debts: f64,

    /// Credit score in [300, 850]
    #[arg(long)]
    credit_score: u16,

    /// Down payment amount
    #[arg(long)]
    down_payment: f64,

    /// Property purchase price
    #[arg(long)]
    property_value: f64,

    /// Two-letter property state code
    #[arg(long)]
    state: String,

    /// Load rate tables from this directory instead of built-in defaults
    #[arg(long)]
    rates_dir: Option<PathBuf>,

    /// Emit the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let tables = match &args.rates_dir {
        Some(dir) => RateTables::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display()))?,
        None => RateTables::default_published(),
    };

    let profile = ApplicantProfile {
        applicant_id: 0,
        monthly_income: args.monthly_income,
        additional_monthly_income: args.additional_income,
        monthly_debts: args.monthly_debts,
        credit_score: args.credit_score,
        down_payment: args.down_payment,
        property_value: args.property_value,
        property_state: args.state.clone(),
    };

    let engine = QualificationEngine::new(tables);
    let result = engine.qualify(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Mortgage Prequal v0.1.0");
    println!("=======================\n");

    let calc = &result.calculations;
    println!("Applicant:");
    println!("  Monthly Income: ${:.2}", calc.monthly_income);
    println!("  Monthly Debts:  ${:.2}", calc.monthly_debts);
    println!("  Credit Tier:    {}", calc.credit_tier);
    println!("  Loan Amount:    ${:.2}", calc.loan_amount);
    println!("  LTV:            {:.2}%", calc.ltv);
    println!("  Tax/Insurance:  ${:.0} / ${:.0} per month", calc.property_tax, calc.home_insurance);
    println!();

    if result.qualified {
        println!("Qualified for {} program(s):", result.programs.len());
        println!(
            "{:<28} {:>7} {:>10} {:>12} {:>8} {:>8} {:>5}",
            "Program", "Rate", "P&I", "Total/mo", "Front", "Back", "MI"
        );
        println!("{}", "-".repeat(84));

        for offer in &result.programs {
            println!(
                "{:<28} {:>6.3}% {:>10.0} {:>12.0} {:>7.2}% {:>7.2}% {:>5}",
                offer.display_name,
                offer.rate,
                offer.monthly_payment,
                offer.total_monthly_payment,
                offer.front_end_dti,
                offer.back_end_dti,
                if offer.requires_mortgage_insurance { "yes" } else { "no" },
            );
        }
    } else {
        println!("Not qualified for any program.");
        if !result.reasons.is_empty() {
            println!("\nReasons:");
            for reason in &result.reasons {
                println!("  - {}", reason);
            }
        }
    }

    Ok(())
}
