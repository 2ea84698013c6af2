use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use cli_skeleton_core::Executable;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "skeleton-check")]
#[command(about = "Normalize and validate descriptions of CLI executables to scaffold")]
struct Cli {
    /// Log normalization details to stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize and validate a description, reporting every problem found.
    Check(CheckArgs),
    /// Print the normalized description.
    Normalize(NormalizeArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Description file (.json, .yaml or .yml).
    input: PathBuf,
    /// Override a text field before normalization (e.g. --set Owner=me).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Debug, Args)]
struct NormalizeArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Normalize(args) => run_normalize(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(log_filter(verbose))
        .try_init();
}

/// Starts from `RUST_LOG` (or `warn`); `--verbose` raises it to at least `debug`.
fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let below_debug = filter
        .max_level_hint()
        .is_none_or(|level| level < LevelFilter::DEBUG);
    if verbose && below_debug {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let exe = prepare(&args.source)?;
    println!(
        "Validated '{}': {} command(s), {} flag(s).",
        exe.name,
        exe.commands.len(),
        exe.flags.len()
    );
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> Result<(), String> {
    let exe = prepare(&args.source)?;
    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&exe)
            .map_err(|e| format!("Failed to serialize output: {e}"))?,
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(&exe).map_err(|e| format!("Failed to serialize output: {e}"))?
        }
    };
    println!("{}", raw.trim_end());
    Ok(())
}

/// Loads, overrides, normalizes and validates the description at `source`.
fn prepare(source: &SourceArgs) -> Result<Executable, String> {
    let mut exe = load_executable(&source.input)?;
    apply_overrides(&mut exe, &source.overrides)?;

    exe.fix()
        .map_err(|err| format!("Failed to normalize '{}': {err}", source.input.display()))?;

    let errors = exe.validate();
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {err}");
        }
        return Err(format!(
            "{} validation error(s) in '{}'",
            errors.len(),
            source.input.display()
        ));
    }

    Ok(exe)
}

fn load_executable(path: &Path) -> Result<Executable, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    debug!(path = %path.display(), yaml = is_yaml, "Loading description");

    if is_yaml {
        serde_yaml::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
    } else {
        serde_json::from_str(&raw)
            .map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
    }
}

fn apply_overrides(exe: &mut Executable, overrides: &[String]) -> Result<(), String> {
    for entry in overrides {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Invalid --set '{entry}', expected KEY=VALUE"))?;
        exe.overwrite_named(key.trim(), value.into())
            .map_err(|err| format!("Invalid --set '{entry}': {err}"))?;
        debug!(key, value, "Applied override");
    }
    Ok(())
}
