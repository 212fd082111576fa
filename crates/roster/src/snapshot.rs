//! Immutable roster snapshots (the aggregation input).

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use occupancy_core::{OccupancyError, OccupancyResult, SnapshotId};

use crate::record::EmployeeRecord;

/// Records that arrived under one zone-group key.
///
/// The key is carried for reference only; aggregation looks at the flattened
/// record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneGroup {
    pub key: String,
    pub records: Vec<Arc<EmployeeRecord>>,
}

/// Companion breakdown lists supplied next to the records.
///
/// Kept verbatim for the presentation layer; never consulted by aggregation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Breakdowns {
    pub personnel: JsonValue,
    pub zone: JsonValue,
    pub floor: JsonValue,
}

/// A roster document as the feed delivers it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterDocument {
    pub details_data: JsonValue,
    pub personnel_breakdown: JsonValue,
    pub zone_breakdown: JsonValue,
    pub floor_breakdown: JsonValue,
}

impl RosterDocument {
    /// Parse a roster document from JSON text.
    ///
    /// Accepts either the full document (`detailsData` plus breakdowns) or a
    /// bare `detailsData` mapping. Only syntax errors and non-object
    /// documents are rejected; record-level problems never are.
    pub fn from_json(text: &str) -> OccupancyResult<Self> {
        let value: JsonValue =
            serde_json::from_str(text).map_err(|e| OccupancyError::decode(e.to_string()))?;

        let Some(obj) = value.as_object() else {
            return Err(OccupancyError::decode(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        };

        if obj.contains_key("detailsData") {
            serde_json::from_value(value).map_err(|e| OccupancyError::decode(e.to_string()))
        } else {
            Ok(Self {
                details_data: value,
                ..Self::default()
            })
        }
    }

    pub fn into_snapshot(self) -> RosterSnapshot {
        RosterSnapshot::from_details(&self.details_data).with_breakdowns(Breakdowns {
            personnel: self.personnel_breakdown,
            zone: self.zone_breakdown,
            floor: self.floor_breakdown,
        })
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// One immutable record set, identified by a [`SnapshotId`].
///
/// A snapshot is never edited. A changed roster is a new snapshot with a new
/// id, which is what invalidates any aggregate derived from the old one.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    id: SnapshotId,
    groups: Vec<ZoneGroup>,
    breakdowns: Breakdowns,
}

impl RosterSnapshot {
    pub fn new(groups: Vec<ZoneGroup>) -> Self {
        Self::with_id(SnapshotId::new(), groups)
    }

    pub fn with_id(id: SnapshotId, groups: Vec<ZoneGroup>) -> Self {
        Self {
            id,
            groups,
            breakdowns: Breakdowns::default(),
        }
    }

    /// Single unnamed group holding `records` in the given order.
    pub fn from_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        Self::new(vec![ZoneGroup {
            key: String::new(),
            records: records.into_iter().map(Arc::new).collect(),
        }])
    }

    /// Build from a `detailsData` mapping (zone-group key → list of records).
    ///
    /// Entries whose value is not a list are skipped. A value that is not a
    /// mapping at all yields an empty snapshot.
    pub fn from_details(details: &JsonValue) -> Self {
        let Some(map) = details.as_object() else {
            if !details.is_null() {
                tracing::debug!("roster details are not a mapping; using an empty snapshot");
            }
            return Self::new(Vec::new());
        };

        let mut groups = Vec::with_capacity(map.len());
        for (key, value) in map {
            let Some(items) = value.as_array() else {
                tracing::debug!(group = %key, "skipping zone group that is not a list");
                continue;
            };
            groups.push(ZoneGroup {
                key: key.clone(),
                records: items
                    .iter()
                    .map(|item| Arc::new(EmployeeRecord::from_value(item)))
                    .collect(),
            });
        }

        Self::new(groups)
    }

    pub fn with_breakdowns(mut self, breakdowns: Breakdowns) -> Self {
        self.breakdowns = breakdowns;
        self
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn groups(&self) -> &[ZoneGroup] {
        &self.groups
    }

    pub fn breakdowns(&self) -> &Breakdowns {
        &self.breakdowns
    }

    /// Flattened record stream in group order, then list order.
    pub fn records(&self) -> impl Iterator<Item = &Arc<EmployeeRecord>> + '_ {
        self.groups.iter().flat_map(|g| g.records.iter())
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}
