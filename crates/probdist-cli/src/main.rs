use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use probdist_cli::config::{NotebookConfig, ResolvedOutputs};
use probdist_cli::logging::init_logging;
use probdist_cli::notebook::{NotebookRunner, RenderMode};
use probdist_core::AppInfo;

/// Render a notebook of probability distributions.
#[derive(Debug, Parser)]
#[command(
    name = "probdist",
    author,
    version,
    about = "Render marginal, joint and conditional distribution tables"
)]
struct Cli {
    /// Path to the YAML notebook file.
    #[arg(short, long, value_name = "FILE", default_value = "notebooks/notebook.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Render only the distribution with this name.
    #[arg(long, value_name = "NAME")]
    only: Option<String>,

    /// Print JSON snapshots instead of the text rendering.
    #[arg(long)]
    json: bool,

    /// Exit after validating the notebook (nothing is rendered).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = NotebookConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let count = config.distributions.len();
    let run_id = config.run_id.clone();

    eprintln!(
        "{} {}: loaded notebook '{run_id}' with {count} distribution{}",
        AppInfo::name(),
        AppInfo::version(),
        if count == 1 { "" } else { "s" }
    );

    let _logging_guard = init_logging(&config.logging, &outputs, &run_id)?;
    let runner = NotebookRunner::new(config, outputs)?;

    if cli.validate_only {
        eprintln!("Validation-only mode: rendering skipped.");
        return Ok(());
    }

    let mode = if cli.json {
        RenderMode::Json
    } else {
        RenderMode::Text
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = runner
        .run(cli.only.as_deref(), mode, &mut out)
        .with_context(|| format!("rendering notebook '{run_id}'"))?;
    out.flush()?;

    for path in &summary.snapshots {
        eprintln!("Snapshot: {}", path.display());
    }

    Ok(())
}
