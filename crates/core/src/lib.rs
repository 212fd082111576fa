//! `occupancy-core` — shared building blocks.
//!
//! Error type, snapshot identity and the value-object marker. No IO.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{OccupancyError, OccupancyResult};
pub use id::SnapshotId;
pub use value_object::ValueObject;
