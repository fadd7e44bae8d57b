//! Compare monthly benefits for every claiming age from 62 to 70
//!
//! Usage: claiming_sweep <birth_year> <birth_month> [salary] [earnings.csv]
//!
//! Uses reference tables from data/reference/ and writes claiming_sweep_output.csv

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use benefit_estimator::{
    earnings::load_earnings, scenario::ClaimingOption, CalculationConfig, PersonalInputs, ScenarioRunner,
};

const OUTPUT_PATH: &str = "claiming_sweep_output.csv";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("Usage: claiming_sweep <birth_year> <birth_month> [salary] [earnings.csv]");
    }
    let birth_year: i32 = args[1].parse().context("birth_year")?;
    let birth_month: u32 = args[2].parse().context("birth_month")?;
    let salary: f64 = args.get(3).map(|s| s.parse::<f64>()).transpose().context("salary")?.unwrap_or(0.0);
    let earnings = match args.get(4) {
        Some(path) => load_earnings(path).with_context(|| format!("loading earnings from {}", path))?,
        None => Vec::new(),
    };

    let start = Instant::now();
    let config = CalculationConfig::current_year();
    let runner = ScenarioRunner::from_csv(config).context("loading reference tables")?;
    println!("Loaded reference tables in {:?}", start.elapsed());

    // Start year is replaced per claiming age
    let inputs = PersonalInputs::new(birth_year, birth_month, birth_year + 62, birth_month, salary);
    let options: Vec<ClaimingOption> = runner.claiming_sweep(&earnings, &inputs)?;

    println!("{:>8} {:>7} {:>10} {:>10} {:>10}", "Start", "Age", "Mult", "PIA", "Benefit");
    println!("{}", "-".repeat(50));
    for option in &options {
        println!("{:>4}/{:<3} {:>7.2} {:>10.4} {:>10.2} {:>10.0}",
            option.start_month,
            option.start_year,
            option.start_age,
            option.multiplier,
            option.pia,
            option.benefit,
        );
    }

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)?;
    for option in &options {
        writer.serialize(option)?;
    }
    writer.flush()?;

    println!("\nOutput written to {}", OUTPUT_PATH);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
