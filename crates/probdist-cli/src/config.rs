use probdist_core::{
    Distribution, DistributionKind, GivenOutcome, Label, Outcome, OutcomeTuple, ProbabilityTable,
};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_JSONL: &str = "out/{run_id}/log.jsonl";
const NAME_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root notebook configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotebookConfig {
    pub run_id: String,
    pub distributions: Vec<DistributionConfig>,
    #[serde(default)]
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NotebookConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: NotebookConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_name("run_id", &self.run_id)?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        validate_distributions(&self.distributions)?;
        Ok(())
    }

    /// Resolve output templates (e.g., `{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            snapshot_dir: self
                .outputs
                .snapshot_dir
                .as_deref()
                .map(|template| resolve_template(&self.run_id, template)),
            log_jsonl: resolve_template(&self.run_id, &self.outputs.log_jsonl),
        }
    }
}

/// One named distribution and its table entries.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DistributionConfig {
    pub name: String,
    pub kind: DistributionKind,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// A single table entry.
///
/// Marginal and joint entries use `outcome` (a scalar or a list); partial and
/// conditional entries use `x` and `y`. Integer outcomes stay integers and
/// sort numerically. Other scalars (strings, floats, booleans) are normalised
/// to text through their parsed value, so `1.50` becomes `1.5` and `0x10`
/// becomes `16`. Quote a value to keep it verbatim.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EntryConfig {
    #[serde(default)]
    pub outcome: Value,
    #[serde(default)]
    pub x: Value,
    #[serde(default)]
    pub y: Value,
    pub p: Value,
}

impl DistributionConfig {
    /// Build the distribution described by this block.
    pub fn build(&self) -> Result<Distribution, ValidationError> {
        match self.kind {
            DistributionKind::Marginal => {
                let table = self.collect_entries(|field, entry| {
                    ensure_absent(field, "x", &entry.x)?;
                    ensure_absent(field, "y", &entry.y)?;
                    scalar_outcome(&entry.outcome)
                        .ok_or_else(|| invalid(format!("{field}.outcome"), "expected a scalar outcome"))
                })?;
                Ok(Distribution::marginal(table))
            }
            DistributionKind::Joint => {
                let table = self.collect_entries(|field, entry| {
                    ensure_absent(field, "x", &entry.x)?;
                    ensure_absent(field, "y", &entry.y)?;
                    match &entry.outcome {
                        Value::Sequence(_) => tuple(&entry.outcome, &format!("{field}.outcome")),
                        _ => Err(invalid(
                            format!("{field}.outcome"),
                            "expected a list of outcomes",
                        )),
                    }
                })?;
                Ok(Distribution::joint(table))
            }
            DistributionKind::Partial | DistributionKind::Conditional => {
                let table = self.collect_entries(|field, entry| {
                    ensure_absent(field, "outcome", &entry.outcome)?;
                    let x = tuple(&entry.x, &format!("{field}.x"))?;
                    let y = tuple(&entry.y, &format!("{field}.y"))?;
                    Ok(GivenOutcome::new(x, y))
                })?;
                if self.kind == DistributionKind::Partial {
                    Ok(Distribution::partial(table))
                } else {
                    Ok(Distribution::conditional(table))
                }
            }
        }
    }

    fn collect_entries<K: Ord + std::fmt::Display>(
        &self,
        key_of: impl Fn(&str, &EntryConfig) -> Result<K, ValidationError>,
    ) -> Result<ProbabilityTable<K>, ValidationError> {
        let mut table = BTreeMap::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let field = format!("distributions[{}].entries[{index}]", self.name);
            let key = key_of(&field, entry)?;
            let label = scalar_text(&entry.p)
                .map(Label::from)
                .ok_or_else(|| invalid(format!("{field}.p"), "expected a scalar probability label"))?;
            if table.contains_key(&key) {
                return Err(invalid(field, format!("outcome {key} listed more than once")));
            }
            table.insert(key, label);
        }
        Ok(ProbabilityTable::from_map(table))
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    #[serde(default)]
    pub snapshot_dir: Option<String>,
    #[serde(default = "default_log_jsonl")]
    pub log_jsonl: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: None,
            log_jsonl: default_log_jsonl(),
        }
    }
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        let snapshot_dir = self.snapshot_dir.as_ref();
        for (label, value) in [
            ("outputs.snapshot_dir", snapshot_dir),
            ("outputs.log_jsonl", Some(&self.log_jsonl)),
        ] {
            let Some(value) = value else {
                continue;
            };
            if value.trim().is_empty() {
                return Err(invalid(label, "path must not be empty"));
            }

            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(invalid(label, "resolved path is invalid"));
            }
        }
        Ok(())
    }
}

fn default_log_jsonl() -> String {
    DEFAULT_LOG_JSONL.to_string()
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid(field, format!("{field} must not be empty")));
    }

    if !value.chars().all(|c| NAME_ALLOWED.contains(c)) {
        return Err(invalid(
            field,
            format!("{field} may only contain alphanumeric characters, '.', '_' or '-'"),
        ));
    }

    Ok(())
}

fn validate_distributions(distributions: &[DistributionConfig]) -> Result<(), ValidationError> {
    if distributions.is_empty() {
        return Err(invalid(
            "distributions",
            "at least one distribution must be specified",
        ));
    }

    let mut seen = HashSet::new();
    for dist in distributions {
        validate_name("distributions.name", &dist.name)?;

        if !seen.insert(dist.name.as_str()) {
            return Err(invalid(
                "distributions",
                format!("distribution name '{}' defined more than once", dist.name),
            ));
        }

        dist.build()?;
    }

    Ok(())
}

/// Outcome of a YAML scalar; integers keep their numeric ordering.
fn scalar_outcome(value: &Value) -> Option<Outcome> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(int) => Some(Outcome::Int(int)),
            None => Some(Outcome::from(number.to_string())),
        },
        other => scalar_text(other).map(Outcome::from),
    }
}

/// Text of a YAML scalar (string, number or boolean).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// A scalar becomes a one-element tuple; a list of scalars becomes a tuple.
fn tuple(value: &Value, field: &str) -> Result<OutcomeTuple, ValidationError> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_outcome(item)
                    .ok_or_else(|| invalid(field, "tuple items must be scalars"))
            })
            .collect(),
        other => scalar_outcome(other)
            .map(|outcome| OutcomeTuple::new(vec![outcome]))
            .ok_or_else(|| invalid(field, "expected an outcome or a list of outcomes")),
    }
}

fn ensure_absent(field: &str, name: &str, value: &Value) -> Result<(), ValidationError> {
    if value.is_null() {
        Ok(())
    } else {
        Err(invalid(
            format!("{field}.{name}"),
            "field does not apply to this distribution kind",
        ))
    }
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ValidationError {
    ValidationError::InvalidField {
        field: field.into(),
        message: message.into(),
    }
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub snapshot_dir: Option<PathBuf>,
    pub log_jsonl: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
