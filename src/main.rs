//! Grundrente CLI
//!
//! Evaluates a CSV of individual records and writes one result row per person

use anyhow::{Context, Result};
use clap::Parser;
use grundrente::person::load_records;
use grundrente::{write_results, Category, PopulationRunner, RuleSet, RuleVariant};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "grundrente", version, about = "Evaluate Grundrente and minimum-income entitlements")]
struct Args {
    /// Input CSV with one row per person
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV for the evaluation results
    #[arg(short, long, default_value = "grundrente_output.csv")]
    output: PathBuf,

    /// Built-in rule variant (grundrente or pensions)
    #[arg(long, default_value = "grundrente")]
    variant: RuleVariant,

    /// JSON rule set overriding the built-in variant
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Abort on the first record that cannot be evaluated
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rules = match &args.rules {
        Some(path) => RuleSet::from_json_path(path)
            .with_context(|| format!("failed to load rule set {}", path.display()))?,
        None => RuleSet::for_variant(args.variant),
    };
    println!("Rule set: {}", rules.label);

    let start = Instant::now();
    let records = load_records(&args.input, rules.pension_point_value)
        .with_context(|| format!("failed to load records from {}", args.input.display()))?;
    println!("Loaded {} records in {:?}", records.len(), start.elapsed());

    let runner = PopulationRunner::new(rules);
    let result = runner.run(&records);

    let written = write_results(&args.output, &result, args.strict)
        .with_context(|| format!("failed to write results to {}", args.output.display()))?;
    println!("{} results written to {}", written, args.output.display());

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Evaluated: {}", summary.evaluated);
    println!("  Failed:    {}", summary.failed);
    for category in Category::ALL {
        println!("  {:<10} {:>8}", category.as_str(), summary.count(category));
    }
    println!("  Top-up before income:    {:>14.2}", summary.total_topup_before_income);
    println!("  Grundrente after credit: {:>14.2}", summary.total_grundrente_final);
    println!("  Minimum income:          {:>14.2}", summary.total_minimum_income);
    println!("  Housing benefit:         {:>14.2}", summary.total_housing_benefit);
    println!("  Change vs flat baseline: {:>14.2}", summary.minimum_income_change());
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
