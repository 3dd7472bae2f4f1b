use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a single realization of one random variable.
///
/// Integer outcomes compare numerically and sort before every text outcome,
/// so a die with faces `1..=12` orders `2` before `10`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Int(i64),
    Text(String),
}

impl Outcome {
    pub fn new(value: impl Into<String>) -> Self {
        Outcome::Text(value.into())
    }
}

impl From<i64> for Outcome {
    fn from(value: i64) -> Self {
        Outcome::Int(value)
    }
}

impl From<&str> for Outcome {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        Outcome::Text(value)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Int(value) => write!(f, "{value}"),
            Outcome::Text(text) => f.write_str(text),
        }
    }
}

/// Ordered, fixed-arity tuple of per-variable outcomes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeTuple(Vec<Outcome>);

impl OutcomeTuple {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self(outcomes)
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl<O: Into<Outcome>> FromIterator<O> for OutcomeTuple {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<O: Into<Outcome>, const N: usize> From<[O; N]> for OutcomeTuple {
    fn from(values: [O; N]) -> Self {
        values.into_iter().collect()
    }
}

impl fmt::Display for OutcomeTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, outcome) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{outcome}")?;
        }
        f.write_str(")")
    }
}

/// Outcome of the X-side tuple together with the conditioning Y-side tuple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GivenOutcome {
    pub x: OutcomeTuple,
    pub y: OutcomeTuple,
}

impl GivenOutcome {
    pub fn new(x: impl Into<OutcomeTuple>, y: impl Into<OutcomeTuple>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for GivenOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.x, self.y)
    }
}
