use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use probdist_core::{Distribution, DistributionSnapshot};
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{NotebookConfig, ResolvedOutputs, ValidationError};

/// How each distribution is written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Head/ellipsis/tail text rendering.
    #[default]
    Text,
    /// Pretty-printed JSON snapshot.
    Json,
}

/// Builds every configured distribution and renders it.
pub struct NotebookRunner {
    run_id: String,
    outputs: ResolvedOutputs,
    distributions: Vec<(String, Distribution)>,
    logging_enabled: bool,
}

/// Summary details returned after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rendered: usize,
    pub snapshots: Vec<PathBuf>,
}

impl NotebookRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: NotebookConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let distributions = config
            .distributions
            .iter()
            .map(|block| Ok((block.name.clone(), block.build()?)))
            .collect::<Result<Vec<_>, RunnerError>>()?;

        Ok(Self {
            logging_enabled: config.logging.enable_structured,
            run_id: config.run_id,
            outputs,
            distributions,
        })
    }

    pub fn distributions(&self) -> impl Iterator<Item = (&str, &Distribution)> {
        self.distributions
            .iter()
            .map(|(name, dist)| (name.as_str(), dist))
    }

    /// Render the selected distributions to `out`, writing snapshots when configured.
    pub fn run(
        &self,
        only: Option<&str>,
        mode: RenderMode,
        out: &mut impl Write,
    ) -> Result<RunSummary, RunnerError> {
        if let Some(name) = only {
            if !self.distributions.iter().any(|(n, _)| n == name) {
                return Err(RunnerError::UnknownDistribution {
                    name: name.to_string(),
                });
            }
        }

        if let Some(dir) = self.outputs.snapshot_dir.as_ref() {
            fs::create_dir_all(dir)?;
        }

        let mut rendered = 0usize;
        let mut snapshots = Vec::new();
        for (name, dist) in self
            .distributions
            .iter()
            .filter(|(name, _)| only.is_none_or(|wanted| wanted == name))
        {
            if rendered > 0 {
                writeln!(out)?;
            }
            match mode {
                RenderMode::Text => writeln!(out, "[{name}] {dist}")?,
                RenderMode::Json => writeln!(out, "{}", DistributionSnapshot::to_json(dist)?)?,
            }
            rendered += 1;

            if self.logging_enabled && tracing::enabled!(Level::DEBUG) {
                event!(
                    target: "probdist::render",
                    Level::DEBUG,
                    run_id = %self.run_id,
                    name = %name,
                    kind = dist.kind().as_str(),
                    entries = dist.len() as u64
                );
            }

            if let Some(dir) = self.outputs.snapshot_dir.as_ref() {
                snapshots.push(write_snapshot(dir, name, dist)?);
            }
        }

        if self.logging_enabled {
            event!(
                target: "probdist::run",
                Level::INFO,
                run_id = %self.run_id,
                rendered = rendered as u64,
                snapshots = snapshots.len() as u64
            );
        }

        Ok(RunSummary {
            rendered,
            snapshots,
        })
    }
}

fn write_snapshot(dir: &Path, name: &str, dist: &Distribution) -> Result<PathBuf, RunnerError> {
    let path = dir.join(format!("{name}.json"));
    let json = DistributionSnapshot::to_json(dist)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Build(#[from] ValidationError),
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize snapshot: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("no distribution named '{name}' in this notebook")]
    UnknownDistribution { name: String },
}
