//! Single-pass company/building aggregation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use occupancy_core::ValueObject;

use crate::building::{Building, BuildingCounts, BuildingSelection};
use crate::percentage::Percentage;
use crate::ranking::rank_companies;
use crate::record::EmployeeRecord;
use crate::snapshot::RosterSnapshot;

/// Per-company statistics.
///
/// Tracks:
/// - `total`: records counted toward any building
/// - `by_building`: the same records split by building (sums to `total`)
/// - `members`: the counted records, in encounter order (shared, not copied)
/// - `locations`: distinct non-empty primary locations, first-seen order
/// - `percentage`: share of the overall total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyAggregate {
    name: String,
    total: usize,
    by_building: BuildingCounts,
    #[serde(skip)]
    members: Vec<Arc<EmployeeRecord>>,
    locations: Vec<String>,
    percentage: Percentage,
}

impl ValueObject for CompanyAggregate {}

impl CompanyAggregate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn by_building(&self) -> &BuildingCounts {
        &self.by_building
    }

    pub fn count(&self, building: Building) -> usize {
        self.by_building.get(building)
    }

    pub fn members(&self) -> &[Arc<EmployeeRecord>] {
        &self.members
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }
}

/// Building-wide statistics plus the ranked company list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverallAggregate {
    total: usize,
    by_building: BuildingCounts,
    companies: Vec<CompanyAggregate>,
}

impl ValueObject for OverallAggregate {}

impl OverallAggregate {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn by_building(&self) -> &BuildingCounts {
        &self.by_building
    }

    pub fn count(&self, building: Building) -> usize {
        self.by_building.get(building)
    }

    /// Companies, descending by total; ties keep encounter order.
    pub fn companies(&self) -> &[CompanyAggregate] {
        &self.companies
    }

    pub fn company(&self, name: &str) -> Option<&CompanyAggregate> {
        self.companies.iter().find(|c| c.name == name)
    }

    /// Share of all counted occupants that sit in `building`.
    pub fn building_share(&self, building: Building) -> Percentage {
        Percentage::of(self.count(building), self.total)
    }

    /// Companies visible under `selection`. See [`crate::filter::filter_companies`].
    pub fn filtered(&self, selection: BuildingSelection) -> Vec<&CompanyAggregate> {
        crate::filter::filter_companies(self, selection)
    }
}

/// Working state for one company during a pass. Never leaves this module.
struct CompanyAccumulator {
    name: String,
    total: usize,
    by_building: BuildingCounts,
    members: Vec<Arc<EmployeeRecord>>,
    seen_locations: HashSet<String>,
    locations: Vec<String>,
}

impl CompanyAccumulator {
    fn new(name: String) -> Self {
        Self {
            name,
            total: 0,
            by_building: BuildingCounts::default(),
            members: Vec::new(),
            seen_locations: HashSet::new(),
            locations: Vec::new(),
        }
    }

    fn add(&mut self, record: &Arc<EmployeeRecord>, building: Building) {
        self.total += 1;
        self.by_building.increment(building);
        self.members.push(Arc::clone(record));
        if let Some(location) = record.primary_location() {
            if self.seen_locations.insert(location.to_string()) {
                self.locations.push(location.to_string());
            }
        }
    }

    fn finish(self, overall_total: usize) -> CompanyAggregate {
        CompanyAggregate {
            percentage: Percentage::of(self.total, overall_total),
            name: self.name,
            total: self.total,
            by_building: self.by_building,
            members: self.members,
            locations: self.locations,
        }
    }
}

/// Aggregate a flattened record stream.
///
/// Records whose zone resolves to no building are skipped entirely: they add
/// to no company, no building and no total. Companies appear in the result
/// ranked by [`rank_companies`].
pub fn aggregate<'a, I>(records: I) -> OverallAggregate
where
    I: IntoIterator<Item = &'a Arc<EmployeeRecord>>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut working: Vec<CompanyAccumulator> = Vec::new();
    let mut total = 0usize;
    let mut by_building = BuildingCounts::default();
    let mut seen = 0usize;

    for record in records {
        seen += 1;
        let Some(building) = record.building() else {
            continue;
        };

        let name = record.company_name();
        let slot = match index.get(name) {
            Some(&slot) => slot,
            None => {
                working.push(CompanyAccumulator::new(name.to_string()));
                index.insert(name.to_string(), working.len() - 1);
                working.len() - 1
            }
        };

        working[slot].add(record, building);
        total += 1;
        by_building.increment(building);
    }

    tracing::debug!(
        records = seen,
        counted = total,
        excluded = seen - total,
        companies = working.len(),
        "aggregated roster"
    );

    let mut companies: Vec<CompanyAggregate> =
        working.into_iter().map(|acc| acc.finish(total)).collect();
    rank_companies(&mut companies);

    OverallAggregate {
        total,
        by_building,
        companies,
    }
}

/// Aggregate every record of a snapshot.
pub fn aggregate_snapshot(snapshot: &RosterSnapshot) -> OverallAggregate {
    aggregate(snapshot.records())
}
