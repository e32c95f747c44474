use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use verdant_core::catalog::{Mixture, SubstanceCatalog};
use verdant_schemas::conditions::{ContextMode, ProcessConditions, ProcessType};
use verdant_schemas::report::AnalysisResult;

use crate::request::AnalysisRequest;

mod config;
mod request;

/// Deterministic green chemistry analysis over a substance mixture.
#[derive(Parser, Debug)]
#[command(name = "verdant", version, about)]
struct Cli {
    /// Directory holding the substance catalog YAML files.
    #[arg(long, default_value = "./data/catalog")]
    catalog_dir: String,

    /// Analysis request YAML file. When set, mixture and condition flags
    /// below are ignored.
    #[arg(long)]
    request: Option<String>,

    /// Mixture entries as `substance-id` or `substance-id=grams`.
    #[arg(long, value_delimiter = ',')]
    mixture: Vec<String>,

    /// Reactor temperature in degrees Celsius.
    #[arg(long, default_value_t = 25.0)]
    temperature: f64,

    #[arg(long, default_value_t = 7.0)]
    ph: f64,

    /// Agitation speed in RPM.
    #[arg(long, default_value_t = 0.0)]
    rpm: f64,

    /// Reactor pressure in bar.
    #[arg(long, default_value_t = 1.0)]
    pressure: f64,

    /// Narrative mode: standard, audit or executive.
    #[arg(long, default_value = "standard")]
    context: String,

    /// Process type label: npk_synthesis, solvent_recovery, ph_neutralization
    /// or anything else for the generic branch.
    #[arg(long, default_value = "generic")]
    process_type: String,

    /// Directory that receives the timestamped run output.
    #[arg(long, default_value = "./data/runs")]
    output_dir: String,
}

fn main() -> Result<()> {
    println!("--- Verdant Process Analysis ---");
    let cli = Cli::parse();

    let catalog = config::load_catalog(&cli.catalog_dir)?;

    let (mixture, conditions) = match &cli.request {
        Some(path) => build_from_request(path, &catalog)?,
        None => build_from_flags(&cli, &catalog)?,
    };

    println!(
        "Analyzing {} substances ({} process)...",
        mixture.len(),
        conditions.process_type.label()
    );
    let result = verdant_core::analyze(mixture.substances(), &conditions);
    print_summary(&result);

    let run_dir = format!(
        "{}/analysis_{}",
        cli.output_dir,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {}", run_dir))?;
    let report_path = Path::new(&run_dir).join("report.json");
    fs::write(&report_path, serde_json::to_string_pretty(&result)?)
        .with_context(|| format!("Failed to write '{}'", report_path.display()))?;

    println!("\nReport written to '{}'", report_path.display());
    Ok(())
}

fn build_from_request(
    path: &str,
    catalog: &SubstanceCatalog,
) -> Result<(Mixture, ProcessConditions)> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path))?;
    let request: AnalysisRequest =
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse '{}'", path))?;

    let mut mixture = Mixture::new();
    for entry in &request.mixture {
        mixture.push(catalog.resolve(&entry.substance_id)?)?;
        if let Some(grams) = entry.amount_g {
            mixture.set_amount(&entry.substance_id, grams)?;
        }
    }

    let conditions = ProcessConditions {
        temperature_c: request.temperature_c,
        ph: request.ph,
        agitation_rpm: request.agitation_rpm,
        pressure_bar: request.pressure_bar,
        process_type: ProcessType::from_label(&request.process_type),
        context_mode: ContextMode::from_label(&request.context_mode),
    };

    Ok((mixture, conditions))
}

fn build_from_flags(cli: &Cli, catalog: &SubstanceCatalog) -> Result<(Mixture, ProcessConditions)> {
    let mut mixture = Mixture::new();
    for entry in &cli.mixture {
        let (id, amount) = match entry.split_once('=') {
            Some((id, grams)) => {
                let grams: f64 = grams
                    .parse()
                    .with_context(|| format!("Invalid amount in mixture entry '{}'", entry))?;
                (id, Some(grams))
            }
            None => (entry.as_str(), None),
        };
        mixture.push(catalog.resolve(id)?)?;
        if let Some(grams) = amount {
            mixture.set_amount(id, grams)?;
        }
    }

    let conditions = ProcessConditions {
        temperature_c: cli.temperature,
        ph: cli.ph,
        agitation_rpm: cli.rpm,
        pressure_bar: cli.pressure,
        process_type: ProcessType::from_label(&cli.process_type),
        context_mode: ContextMode::from_label(&cli.context),
    };

    Ok((mixture, conditions))
}

fn print_summary(result: &AnalysisResult) {
    println!("\nScore: {} / 100 ({:?})", result.score, result.status);
    println!("{}", result.justification);

    println!("\nDiagnostics:");
    for diagnostic in &result.diagnostics {
        println!("  - {}", diagnostic);
    }

    if !result.optimizations.is_empty() {
        println!("\nSuggested optimizations:");
        for optimization in &result.optimizations {
            println!("  - {}", optimization.label);
        }
    }

    if let Some(flags) = &result.regulatory_flags {
        if !flags.is_empty() {
            println!("\nRegulatory flags:");
            for flag in flags {
                println!("  - {}", flag.label);
            }
        }
    }
}
