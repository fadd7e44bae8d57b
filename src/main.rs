//! Benefit Estimator CLI
//!
//! Command-line interface for estimating a monthly retirement benefit

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use benefit_estimator::{
    earnings::load_earnings, BenefitCalculator, CalculationConfig, CalculationResult, EarningRecord,
    PersonalInputs, ReferenceTables,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Estimate a monthly retirement benefit from an earnings history
#[derive(Debug, Parser)]
#[command(name = "benefit-estimator", version)]
struct Cli {
    #[arg(long)]
    birth_year: i32,

    /// 1-12
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    birth_month: u32,

    #[arg(long)]
    start_year: i32,

    /// 1-12
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    start_month: u32,

    /// Annual salary assumed from the last reported year until benefits start
    #[arg(long, default_value_t = 0.0)]
    salary: f64,

    /// Earnings history CSV (Year,Earnings)
    #[arg(long)]
    earnings: Option<PathBuf>,

    /// Directory with wage_index.csv, bend_points.csv and cola.csv
    /// (embedded tables when omitted)
    #[arg(long)]
    reference_dir: Option<PathBuf>,

    /// COLAs are applied through the year before this one (default: current year)
    #[arg(long)]
    valuation_year: Option<i32>,

    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Write the indexed earnings trail to this CSV file
    #[arg(long)]
    trail_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tables = match &cli.reference_dir {
        Some(dir) => ReferenceTables::from_csv_path(dir)
            .with_context(|| format!("loading reference tables from {}", dir.display()))?,
        None => ReferenceTables::default_published(),
    };

    let earnings: Vec<EarningRecord> = match &cli.earnings {
        Some(path) => load_earnings(path).with_context(|| format!("loading earnings from {}", path.display()))?,
        None => Vec::new(),
    };

    let config = cli
        .valuation_year
        .map(CalculationConfig::new)
        .unwrap_or_else(CalculationConfig::current_year);

    let inputs = PersonalInputs::new(cli.birth_year, cli.birth_month, cli.start_year, cli.start_month, cli.salary);
    let calculator = BenefitCalculator::new(tables, config);
    let result = calculator.calculate(&earnings, &inputs).context("calculating benefit")?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => print_table(&result, &inputs, config),
    }

    if let Some(path) = &cli.trail_csv {
        write_trail(path, &result).with_context(|| format!("writing {}", path.display()))?;
        println!("\nIndexed earnings written to: {}", path.display());
    }

    Ok(())
}

fn print_table(result: &CalculationResult, inputs: &PersonalInputs, config: CalculationConfig) {
    println!("Benefit Estimator v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Born {}/{}, benefits from {}/{} (age {:.2})",
        inputs.birth_month, inputs.birth_year,
        inputs.benefit_start_month, inputs.benefit_start_year,
        result.start_age);
    println!("  Full Retirement Age: {:.2}", result.fra);
    println!("  Indexing Year: {}  Eligibility Year: {}", result.indexing_year, result.eligibility_year);
    println!();

    println!("{:>6} {:>14} {:>10} {:>14} {:>5} {:>5}", "Year", "Raw", "Factor", "Indexed", "Top", "Proj");
    println!("{}", "-".repeat(60));
    for row in &result.indexed_earnings {
        println!("{:>6} {:>14.2} {:>10.6} {:>14.2} {:>5} {:>5}",
            row.year,
            row.raw_amount,
            row.index_factor,
            row.indexed_amount,
            if row.used_in_top35 { "*" } else { "" },
            if row.is_projected { "p" } else { "" },
        );
    }
    println!();

    let b = &result.pia_breakdown;
    println!("AIME: ${:.0}", result.aime);
    if result.bend_points_year != result.eligibility_year {
        println!("  (no bend points for {}; using {})", result.eligibility_year, result.bend_points_year);
    }
    println!("  90% of first ${:.0}:        ${:.2}", b.bend_point_1, b.portion_at_90_percent);
    println!("  32% from ${:.0} to ${:.0}: ${:.2}", b.bend_point_1, b.bend_point_2, b.portion_at_32_percent);
    println!("  15% above ${:.0}:           ${:.2}", b.bend_point_2, b.portion_at_15_percent);
    println!("Base PIA: ${:.2}", result.base_pia);

    for cola in &result.cola_adjustments {
        println!("  COLA {} {:>4.1}% -> ${:.2}", cola.year, cola.percent, cola.pia_after);
    }
    println!("Adjusted PIA (through {}): ${:.2}", config.valuation_year - 1, result.pia);

    let adj = &result.retirement_adjustment;
    if adj.months_early > 0 {
        println!("Claiming {} months early: x{:.4}", adj.months_early, adj.multiplier);
    } else if adj.months_delayed > 0 {
        println!("Claiming {} months late: x{:.4}", adj.months_delayed, adj.multiplier);
    } else {
        println!("Claiming at full retirement age");
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Years of earnings: {} ({} projected, {} used)",
        summary.total_years, summary.projected_years, summary.years_used);
    println!("  Top-35 indexed total: ${:.2}", summary.top35_indexed_total);
    println!("  Monthly Benefit: ${:.0}", result.benefit);
}

fn write_trail(path: &Path, result: &CalculationResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &result.indexed_earnings {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
