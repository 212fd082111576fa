//! Presentation-ready views over an aggregate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use occupancy_core::{SnapshotId, ValueObject};
use occupancy_roster::{
    Building, BuildingCounts, BuildingSelection, CompanyAggregate, DrillDownRow, OverallAggregate,
    Percentage, PodiumEntry, filter_positions,
};

/// Rows that get the highlighted rank badge.
pub const HIGHLIGHTED_RANKS: usize = 3;

/// Occupancy of one building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingCard {
    pub building: Building,
    pub total: usize,
    /// Share of all counted occupants.
    pub share: Percentage,
}

impl ValueObject for BuildingCard {}

pub fn building_cards(overall: &OverallAggregate) -> Vec<BuildingCard> {
    Building::ALL
        .into_iter()
        .map(|building| BuildingCard {
            building,
            total: overall.count(building),
            share: overall.building_share(building),
        })
        .collect()
}

/// Companies visible under one selection, in ranked order.
///
/// Shares the cached aggregate and keeps only the ranked positions it shows.
#[derive(Debug, Clone)]
pub struct VisibleCompanies {
    overall: Arc<OverallAggregate>,
    selection: BuildingSelection,
    positions: Vec<usize>,
}

impl VisibleCompanies {
    pub fn new(overall: Arc<OverallAggregate>, selection: BuildingSelection) -> Self {
        let positions = filter_positions(&overall, selection);
        Self {
            overall,
            selection,
            positions,
        }
    }

    pub fn aggregate(&self) -> &Arc<OverallAggregate> {
        &self.overall
    }

    pub fn selection(&self) -> BuildingSelection {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Company at `index` in the filtered list.
    pub fn get(&self, index: usize) -> Option<&CompanyAggregate> {
        let position = *self.positions.get(index)?;
        self.overall.companies().get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompanyAggregate> + '_ {
        let companies = self.overall.companies();
        self.positions.iter().filter_map(move |&i| companies.get(i))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRow {
    /// Position in the filtered list, starting at 1.
    pub rank: usize,
    pub highlighted: bool,
    pub name: String,
    pub total: usize,
    pub by_building: BuildingCounts,
    pub percentage: Percentage,
    pub locations: Vec<String>,
}

/// Footer of the company table: overall totals, independent of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableTotals {
    pub total: usize,
    pub by_building: BuildingCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyTable {
    pub selection: BuildingSelection,
    pub rows: Vec<CompanyRow>,
    pub totals: TableTotals,
}

impl ValueObject for CompanyTable {}

impl CompanyTable {
    pub fn build(overall: &OverallAggregate, selection: BuildingSelection) -> Self {
        let rows = overall
            .filtered(selection)
            .into_iter()
            .enumerate()
            .map(|(i, company)| company_row(i, company))
            .collect();

        Self {
            selection,
            rows,
            totals: TableTotals {
                total: overall.total(),
                by_building: *overall.by_building(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn company_row(index: usize, company: &CompanyAggregate) -> CompanyRow {
    CompanyRow {
        rank: index + 1,
        highlighted: index < HIGHLIGHTED_RANKS,
        name: company.name().to_string(),
        total: company.total(),
        by_building: *company.by_building(),
        percentage: company.percentage(),
        locations: company.locations().to_vec(),
    }
}

/// A titled drill-down listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillDown {
    pub title: String,
    pub rows: Vec<DrillDownRow>,
}

impl ValueObject for DrillDown {}

impl DrillDown {
    pub fn company_title(company: &str) -> String {
        if company.is_empty() {
            "Company Details".to_string()
        } else {
            company.to_string()
        }
    }

    pub fn building_title(building: Building) -> String {
        format!("{building} — Occupants")
    }

    pub fn company_building_title(company: &str, building: Building) -> String {
        let company = if company.is_empty() { "Company" } else { company };
        format!("{company} — {building}")
    }
}

/// Everything the summary screen shows at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub snapshot_id: SnapshotId,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub buildings: Vec<BuildingCard>,
    pub companies: CompanyTable,
    pub podium: Vec<PodiumEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use occupancy_roster::{EmployeeRecord, RosterSnapshot, aggregate_snapshot};

    fn overall(rows: &[(&str, &str)]) -> OverallAggregate {
        aggregate_snapshot(&RosterSnapshot::from_records(rows.iter().map(|(c, z)| {
            EmployeeRecord {
                company_name: Some(c.to_string()),
                zone: Some(z.to_string()),
                ..EmployeeRecord::default()
            }
        })))
    }

    #[test]
    fn ranks_follow_filtered_positions() {
        let overall = overall(&[
            ("A", "Red Zone"),
            ("A", "Red Zone"),
            ("A", "Red Zone"),
            ("B", "Tower B"),
            ("B", "Tower B"),
            ("C", "Tower B"),
            ("D", "2nd"),
            ("E", "Tower B"),
        ]);

        let table = CompanyTable::build(&overall, Building::TowerB.into());
        let ranks: Vec<_> = table
            .rows
            .iter()
            .map(|r| (r.rank, r.name.as_str(), r.highlighted))
            .collect();
        assert_eq!(ranks, vec![(1, "B", true), (2, "C", true), (3, "E", true)]);

        let all = CompanyTable::build(&overall, BuildingSelection::All);
        assert_eq!(all.rows.len(), 5);
        assert!(!all.rows[3].highlighted);
        assert_eq!(all.totals.total, 8);
        assert_eq!(table.totals, all.totals);
    }

    #[test]
    fn visible_companies_index_into_shared_aggregate() {
        let overall = Arc::new(overall(&[
            ("A", "Red Zone"),
            ("A", "Red Zone"),
            ("B", "Tower B"),
            ("C", "2nd"),
            ("D", "tower b"),
        ]));

        let visible = VisibleCompanies::new(Arc::clone(&overall), Building::TowerB.into());
        assert!(Arc::ptr_eq(visible.aggregate(), &overall));
        assert_eq!(visible.selection(), BuildingSelection::Only(Building::TowerB));
        let names: Vec<_> = visible.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "D"]);
        assert_eq!(visible.get(1).map(|c| c.name()), Some("D"));
        assert!(visible.get(2).is_none());

        let table = CompanyTable::build(&overall, Building::TowerB.into());
        assert_eq!(visible.len(), table.rows.len());
        assert!(std::ptr::eq(visible.get(0).unwrap(), &overall.companies()[1]));
    }

    #[test]
    fn cards_report_share_of_total() {
        let overall = overall(&[("A", "Red Zone"), ("A", "Tower B"), ("B", "Tower B"), ("B", "x")]);
        let cards = building_cards(&overall);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].building, Building::PodiumFloor);
        assert_eq!(cards[0].share.to_string(), "33.3");
        assert_eq!(cards[1].total, 0);
        assert_eq!(cards[1].share.to_string(), "0.0");
        assert_eq!(cards[2].share.to_string(), "66.7");
    }

    #[test]
    fn drilldown_titles() {
        assert_eq!(DrillDown::company_title("Acme"), "Acme");
        assert_eq!(DrillDown::company_title(""), "Company Details");
        assert_eq!(DrillDown::building_title(Building::TowerB), "Tower B — Occupants");
        assert_eq!(
            DrillDown::company_building_title("Acme", Building::PodiumFloor),
            "Acme — Podium Floor"
        );
        assert_eq!(
            DrillDown::company_building_title("", Building::SecondFloor),
            "Company — 2nd Floor"
        );
    }
}
