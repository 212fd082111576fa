//! Value object trait: equality by value, not identity.

/// Marker trait for derived values.
///
/// Aggregates, podium entries and drill-down rows are computed from a roster
/// snapshot and never edited afterwards. A changed roster produces new values;
/// nothing is patched in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BuildingCounts { podium: usize, second: usize, tower_b: usize }
///
/// impl ValueObject for BuildingCounts {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
