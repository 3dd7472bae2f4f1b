mod serialization;

pub use serialization::{DistributionSnapshot, SnapshotEntry, SnapshotError, SnapshotKey};
