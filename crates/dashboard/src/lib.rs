//! `occupancy-dashboard` — the company summary dashboard on top of the
//! roster domain: snapshot cache, configuration and presentation views.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod report;

pub use cache::{AggregateCache, CacheStats};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use report::{
    BuildingCard, CompanyRow, CompanyTable, DrillDown, SummaryReport, TableTotals, VisibleCompanies,
};
