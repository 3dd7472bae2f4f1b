//! Distribution containers over plain key-to-probability mappings.
//!
//! - `outcome`: key shapes (scalar outcome, outcome tuple, conditioned pair).
//! - `label`: symbolic probability labels.
//! - `table`: the generic mapping every container delegates to.
//! - `kind`: the four distribution kinds.
//! - `distribution`: the container sum type and its shared accessors.
//! - `render`: head/ellipsis/tail diagnostic formatting.

pub mod distribution;
pub mod kind;
pub mod label;
pub mod outcome;
mod render;
pub mod table;
