use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    Marginal,
    Joint,
    Partial,
    Conditional,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Marginal,
        DistributionKind::Joint,
        DistributionKind::Partial,
        DistributionKind::Conditional,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "marginal" => Some(DistributionKind::Marginal),
            "joint" => Some(DistributionKind::Joint),
            "partial" => Some(DistributionKind::Partial),
            "conditional" => Some(DistributionKind::Conditional),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DistributionKind::Marginal => "Marginal",
            DistributionKind::Joint => "Joint",
            DistributionKind::Partial => "Partial",
            DistributionKind::Conditional => "Conditional",
        }
    }

    /// Partial and conditional tables are keyed by an `(x, y)` outcome pair.
    pub const fn is_given(self) -> bool {
        matches!(
            self,
            DistributionKind::Partial | DistributionKind::Conditional
        )
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
