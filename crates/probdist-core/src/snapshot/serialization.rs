use crate::model::distribution::{Distribution, OutcomeKey};
use crate::model::kind::DistributionKind;
use crate::model::label::Label;
use crate::model::outcome::{GivenOutcome, Outcome, OutcomeTuple};
use crate::model::table::ProbabilityTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable form of a labelled distribution.
///
/// Keys are written as a plain string or integer (marginal), a list of those
/// (joint) or an `{ "x": [...], "y": [...] }` object (partial and conditional).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSnapshot {
    pub kind: DistributionKind,
    #[serde(default)]
    pub entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotEntry {
    pub key: SnapshotKey,
    pub p: Label,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SnapshotKey {
    Single(Outcome),
    Tuple(OutcomeTuple),
    Given(GivenOutcome),
}

impl From<OutcomeKey> for SnapshotKey {
    fn from(key: OutcomeKey) -> Self {
        match key {
            OutcomeKey::Single(outcome) => SnapshotKey::Single(outcome),
            OutcomeKey::Tuple(tuple) => SnapshotKey::Tuple(tuple),
            OutcomeKey::Given(given) => SnapshotKey::Given(given),
        }
    }
}

impl SnapshotKey {
    const fn shape(&self) -> &'static str {
        match self {
            SnapshotKey::Single(_) => "outcome",
            SnapshotKey::Tuple(_) => "outcome tuple",
            SnapshotKey::Given(_) => "x/y outcome pair",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("entry {index}: {kind} distribution cannot hold a {shape} key")]
    KeyShape {
        index: usize,
        kind: DistributionKind,
        shape: &'static str,
    },
}

impl DistributionSnapshot {
    pub fn capture(dist: &Distribution) -> Self {
        DistributionSnapshot {
            kind: dist.kind(),
            entries: dist
                .iter()
                .map(|(key, p)| SnapshotEntry {
                    key: key.into(),
                    p: p.clone(),
                })
                .collect(),
        }
    }

    pub fn restore(self) -> Result<Distribution, SnapshotError> {
        let kind = self.kind;
        let mismatch = |index: usize, key: &SnapshotKey| SnapshotError::KeyShape {
            index,
            kind,
            shape: key.shape(),
        };

        let dist = match kind {
            DistributionKind::Marginal => {
                let mut table = Vec::with_capacity(self.entries.len());
                for (index, entry) in self.entries.into_iter().enumerate() {
                    match entry.key {
                        SnapshotKey::Single(outcome) => table.push((outcome, entry.p)),
                        other => return Err(mismatch(index, &other)),
                    }
                }
                Distribution::marginal(table.into_iter().collect::<ProbabilityTable<Outcome>>())
            }
            DistributionKind::Joint => {
                let mut table = Vec::with_capacity(self.entries.len());
                for (index, entry) in self.entries.into_iter().enumerate() {
                    match entry.key {
                        SnapshotKey::Tuple(tuple) => table.push((tuple, entry.p)),
                        other => return Err(mismatch(index, &other)),
                    }
                }
                Distribution::joint(table.into_iter().collect::<ProbabilityTable<OutcomeTuple>>())
            }
            DistributionKind::Partial | DistributionKind::Conditional => {
                let mut table = Vec::with_capacity(self.entries.len());
                for (index, entry) in self.entries.into_iter().enumerate() {
                    match entry.key {
                        SnapshotKey::Given(given) => table.push((given, entry.p)),
                        other => return Err(mismatch(index, &other)),
                    }
                }
                let table: ProbabilityTable<GivenOutcome> = table.into_iter().collect();
                if kind == DistributionKind::Partial {
                    Distribution::partial(table)
                } else {
                    Distribution::conditional(table)
                }
            }
        };
        Ok(dist)
    }

    pub fn to_json(dist: &Distribution) -> serde_json::Result<String> {
        let snapshot = Self::capture(dist);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
