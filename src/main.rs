//! Command line driver for the sparse Game of Life simulator

use anyhow::{Context, Result};
use clap::Parser;
use sparse_life::{
    config::{CliOverrides, InputSource, OutputFormat, Settings},
    game_of_life::{io::output_path_for, load_grid_from_file, load_grid_from_stdin, save_grid_to_file, write_grid},
    simulate, Grid, SimulationOutcome,
    utils::{format_grid_summary, ColorOutput},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sparse_life")]
#[command(about = "Run Conway's Game of Life on a Life 1.06 pattern")]
#[command(version)]
struct Cli {
    /// Life 1.06 pattern file; standard input is read when omitted
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Output file (defaults to <input stem>_output.lif or .json, or stdout for stdin input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (overrides config); also picks the default output suffix
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Accept any whitespace between coordinates
    #[arg(long)]
    lenient_whitespace: bool,

    /// Write the default configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    init_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Where the final generation is written
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_tracing(cli.verbose).and_then(|()| match cli.init_config.clone() {
        Some(path) => init_config_command(&path),
        None => run_command(cli),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Operator-facing line for a failed run, with the full context chain
fn failure_message(err: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {err:#}"))
}

fn init_tracing(verbose: bool) -> Result<()> {
    let directive = if verbose { "sparse_life=info" } else { "sparse_life=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn init_config_command(path: &Path) -> Result<()> {
    Settings::default()
        .to_file(path)
        .context("Failed to create default configuration")?;
    eprintln!("{}", ColorOutput::success(&format!("Created: {}", path.display())));
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match cli.config {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    settings.merge_with_cli(&CliOverrides {
        generations: cli.generations,
        format: cli.format,
        lenient_whitespace: cli.lenient_whitespace,
    });

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn destination(source: &InputSource, output: Option<&Path>, settings: &Settings) -> Destination {
    match (output, source) {
        (Some(path), _) => Destination::File(path.to_path_buf()),
        (None, InputSource::File(input)) => Destination::File(output_path_for(input, settings.output.suffix())),
        (None, InputSource::Stdin) => Destination::Stdout,
    }
}

/// Whether two paths name the same file, following links when both exist
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    let source = match cli.input {
        Some(ref path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    };

    let target = destination(&source, cli.output.as_deref(), &settings);
    if let (InputSource::File(input), Destination::File(output)) = (&source, &target) {
        if same_file(input, output) {
            anyhow::bail!("Output path {} would overwrite the input pattern", output.display());
        }
    }

    let whitespace = settings.input.whitespace();
    let initial = match source {
        InputSource::File(ref path) => load_grid_from_file(path, whitespace)?,
        InputSource::Stdin => load_grid_from_stdin(whitespace)?,
    };

    if cli.verbose {
        eprintln!("Initial: {}", format_grid_summary(&initial));
    }

    let start_time = Instant::now();
    let outcome = simulate(initial, settings.simulation.generations);

    let final_grid = match outcome {
        SimulationOutcome::NoLiveCells => {
            eprintln!("{}", ColorOutput::warning("No live cells initialized"));
            Grid::new()
        }
        SimulationOutcome::Evolved { grid, generations } => {
            if cli.verbose {
                eprintln!(
                    "{}",
                    ColorOutput::info(&format!(
                        "Ran {} generations in {:.3}s",
                        generations,
                        start_time.elapsed().as_secs_f64()
                    ))
                );
                eprintln!("Final: {}", format_grid_summary(&grid));
            }
            grid
        }
    };

    match target {
        Destination::Stdout => {
            write_grid(&final_grid, std::io::stdout().lock(), settings.output.format)?;
        }
        Destination::File(path) => {
            save_grid_to_file(&final_grid, &path, settings.output.format)?;
            eprintln!("{}", ColorOutput::success(&format!("Result saved to {}", path.display())));
        }
    }

    Ok(())
}
