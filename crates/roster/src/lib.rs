//! Occupancy roster domain.
//!
//! Turns raw per-zone employee records into ranked company statistics,
//! building totals, the podium and drill-down rows. Everything here is pure,
//! synchronous and infallible: malformed records fall back to defaults and
//! unrecognized zones are left out of every total.

pub mod aggregate;
pub mod building;
pub mod drilldown;
pub mod filter;
pub mod percentage;
pub mod ranking;
pub mod record;
pub mod snapshot;

pub use aggregate::{CompanyAggregate, OverallAggregate, aggregate, aggregate_snapshot};
pub use building::{Building, BuildingCounts, BuildingSelection, ZONE_RULES, ZoneRule, normalize_zone};
pub use drilldown::{DrillDownRow, project_building, project_company, project_company_building};
pub use filter::{filter_companies, filter_positions};
pub use percentage::Percentage;
pub use ranking::{Medal, PODIUM_SIZE, Placement, PodiumEntry, podium, rank_companies};
pub use record::{EmployeeRecord, MISSING_NAME, UNKNOWN_COMPANY};
pub use snapshot::{Breakdowns, RosterDocument, RosterSnapshot, ZoneGroup};
