//! Company summary dashboard: current roster, selection and derived views.

use std::sync::Arc;

use chrono::Utc;

use occupancy_core::SnapshotId;
use occupancy_roster::{
    Building, BuildingSelection, OverallAggregate, PodiumEntry, RosterSnapshot, podium,
    project_building, project_company, project_company_building,
};

use crate::cache::{AggregateCache, CacheStats};
use crate::config::DashboardConfig;
use crate::report::{
    BuildingCard, CompanyTable, DrillDown, SummaryReport, VisibleCompanies, building_cards,
};

/// Stateful front of the aggregation engine.
///
/// Holds the current roster snapshot and building selection. Every query is
/// answered from the cached aggregate of the current snapshot, so changing
/// the selection or opening drill-downs never repeats the aggregation pass.
/// Loading a new snapshot switches every later query to it.
#[derive(Debug)]
pub struct Dashboard {
    snapshot: Arc<RosterSnapshot>,
    cache: AggregateCache,
    selection: BuildingSelection,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            snapshot: Arc::new(RosterSnapshot::new(Vec::new())),
            cache: AggregateCache::new(config.cache_capacity),
            selection: config.default_selection,
        }
    }

    /// Replace the roster. The selection is kept.
    pub fn load(&mut self, snapshot: RosterSnapshot) {
        tracing::info!(
            snapshot = %snapshot.id(),
            groups = snapshot.groups().len(),
            records = snapshot.record_count(),
            "roster snapshot loaded"
        );
        self.snapshot = Arc::new(snapshot);
    }

    pub fn snapshot(&self) -> &RosterSnapshot {
        &self.snapshot
    }

    pub fn snapshot_id(&self) -> SnapshotId {
        self.snapshot.id()
    }

    pub fn select(&mut self, selection: BuildingSelection) {
        self.selection = selection;
    }

    pub fn selection(&self) -> BuildingSelection {
        self.selection
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Aggregate of the current snapshot.
    pub fn overview(&mut self) -> Arc<OverallAggregate> {
        self.cache.get_or_build(&self.snapshot)
    }

    /// Companies under the current selection, in ranked order. The view
    /// shares the cached aggregate.
    pub fn visible_companies(&mut self) -> VisibleCompanies {
        VisibleCompanies::new(self.overview(), self.selection)
    }

    pub fn company_table(&mut self) -> CompanyTable {
        let overall = self.overview();
        CompanyTable::build(&overall, self.selection)
    }

    pub fn podium(&mut self) -> Vec<PodiumEntry> {
        podium(&self.overview())
    }

    pub fn building_cards(&mut self) -> Vec<BuildingCard> {
        building_cards(&self.overview())
    }

    /// All counted members of `company`. Unknown names give no rows.
    pub fn company_drilldown(&mut self, company: &str) -> DrillDown {
        let overall = self.overview();
        DrillDown {
            title: DrillDown::company_title(company),
            rows: overall
                .company(company)
                .map(project_company)
                .unwrap_or_default(),
        }
    }

    /// Everyone in `building`, across companies.
    pub fn building_drilldown(&mut self, building: Building) -> DrillDown {
        let overall = self.overview();
        DrillDown {
            title: DrillDown::building_title(building),
            rows: project_building(&overall, building),
        }
    }

    /// Members of `company` in `building`.
    pub fn company_building_drilldown(&mut self, company: &str, building: Building) -> DrillDown {
        let overall = self.overview();
        DrillDown {
            title: DrillDown::company_building_title(company, building),
            rows: overall
                .company(company)
                .map(|c| project_company_building(c, building))
                .unwrap_or_default(),
        }
    }

    pub fn report(&mut self) -> SummaryReport {
        let overall = self.overview();
        SummaryReport {
            snapshot_id: self.snapshot.id(),
            generated_at: Utc::now(),
            total: overall.total(),
            buildings: building_cards(&overall),
            companies: CompanyTable::build(&overall, self.selection),
            podium: podium(&overall),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
