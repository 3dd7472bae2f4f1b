#![deny(warnings)]
pub mod model;
pub mod snapshot;

pub use model::distribution::{Distribution, OutcomeKey};
pub use model::kind::DistributionKind;
pub use model::label::Label;
pub use model::outcome::{GivenOutcome, Outcome, OutcomeTuple};
pub use model::table::ProbabilityTable;
pub use snapshot::{DistributionSnapshot, SnapshotError};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "probdist"
    }

    pub const fn codename() -> &'static str {
        "Distribution Notebook"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
