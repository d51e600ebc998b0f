mod compile;
mod error;

use clap::{Parser, Subcommand};
use error::CliResult;
use rf_quadrature::NodeSet;
use rf_rotor::{DeficitModel, RotorAvgModel};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "rf-cli")]
#[command(about = "RotorFlow CLI - rotor-averaged deficit evaluation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case file (YAML, or JSON by extension)
        case_path: PathBuf,
    },
    /// Print the sample nodes of a case's rotor-averaging strategy
    Nodes {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Evaluate the rotor-averaged deficit of every rotor in a case
    Evaluate {
        /// Path to the case file
        case_path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Nodes { case_path } => cmd_nodes(&case_path),
        Commands::Evaluate { case_path } => cmd_evaluate(&case_path),
    }
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    let case = rf_project::load(case_path)?;
    let strategy = compile::strategy(&case.rotor_avg);
    strategy.build()?;
    compile::model(&case.model)?;

    println!("✓ Case '{}' is valid", case.name);
    println!("  Strategy: {}", strategy.name());
    println!("  Rotors: {}", case.rotors.len());
    Ok(())
}

fn cmd_nodes(case_path: &Path) -> CliResult<()> {
    let case = rf_project::load(case_path)?;
    let strategy = compile::strategy(&case.rotor_avg);
    let sampling = strategy.build()?;
    let center = NodeSet::center();
    let nodes = sampling.nodes().unwrap_or(&center);

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} ({} nodes, {})",
        strategy.name(),
        nodes.len(),
        if nodes.weights().is_some() {
            "weighted"
        } else {
            "uniform"
        }
    )?;
    writeln!(out, "{:>4}  {:>12}  {:>12}  {:>12}", "#", "x", "y", "weight")?;
    for (i, (x, y, w)) in nodes.iter().enumerate() {
        writeln!(out, "{i:>4}  {x:>12.8}  {y:>12.8}  {w:>12.8}")?;
    }
    Ok(())
}

fn cmd_evaluate(case_path: &Path) -> CliResult<()> {
    let case = rf_project::load(case_path)?;
    let model = compile::model(&case.model)?;
    let strategy = compile::strategy(&case.rotor_avg);
    let averaged = RotorAvgModel::new(model.as_ref(), &strategy)?;
    let centre = RotorAvgModel::rotor_center(model.as_ref());
    let args = compile::rotor_args(&case.rotors)?;

    let start = Instant::now();
    let avg_values = averaged.calc_deficit(&args)?;
    let centre_values = centre.calc_deficit(&args)?;
    let elapsed = start.elapsed();
    info!(
        case = %case.name,
        rotors = case.rotors.len(),
        nodes = averaged.sampling().node_count(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "evaluated case"
    );

    let mut out = io::stdout().lock();
    writeln!(out, "Case: {}", case.name)?;
    writeln!(out, "Model: {}", averaged.name())?;
    writeln!(
        out,
        "{:>4}  {:>10}  {:>10}  {:>10}  {:>12}  {:>12}",
        "#", "diameter", "hcw", "dh", "centre", "rotor_avg"
    )?;
    for (j, rotor) in case.rotors.iter().enumerate() {
        let index = [j, 0, 0, 0];
        let c = centre_values.get(&index).unwrap_or(f64::NAN);
        let a = avg_values.get(&index).unwrap_or(f64::NAN);
        writeln!(
            out,
            "{j:>4}  {:>10.3}  {:>10.3}  {:>10.3}  {c:>12.6}  {a:>12.6}",
            rotor.diameter, rotor.hcw, rotor.dh
        )?;
    }
    writeln!(out, "Evaluated in {:.3} ms", elapsed.as_secs_f64() * 1e3)?;
    Ok(())
}
