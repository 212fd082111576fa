//! Drill-down projections: display rows derived from member records.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;

use occupancy_core::ValueObject;

use crate::aggregate::{CompanyAggregate, OverallAggregate};
use crate::building::Building;
use crate::record::EmployeeRecord;

/// One display row. `seq` is 1-based and follows row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillDownRow {
    pub seq: usize,
    pub name: String,
    pub employee_id: String,
    pub card_number: String,
    pub personnel_type: String,
    pub primary_location: String,
    /// Owning company; only filled in for building-wide listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub zone: String,
}

impl ValueObject for DrillDownRow {}

impl DrillDownRow {
    fn from_record(seq: usize, record: &EmployeeRecord) -> Self {
        Self {
            seq,
            name: record.display_name().to_string(),
            employee_id: record.employee_id().to_string(),
            card_number: record.card_number().to_string(),
            personnel_type: record.personnel_type().to_string(),
            primary_location: record.primary_location().unwrap_or_default().to_string(),
            company: None,
            zone: record.zone().to_string(),
        }
    }
}

/// Every member of `company`, in encounter order.
pub fn project_company(company: &CompanyAggregate) -> Vec<DrillDownRow> {
    number(company.members().iter())
}

/// Everyone in `building` across all companies, sorted by company then name
/// with case ignored.
pub fn project_building(overall: &OverallAggregate, building: Building) -> Vec<DrillDownRow> {
    let mut rows: Vec<DrillDownRow> = overall
        .companies()
        .iter()
        .flat_map(|c| c.members().iter())
        .filter(|r| r.building() == Some(building))
        .map(|r| {
            let mut row = DrillDownRow::from_record(0, r);
            row.company = Some(r.company_name().to_string());
            row
        })
        .collect();

    rows.sort_by(listing_order);
    for (i, row) in rows.iter_mut().enumerate() {
        row.seq = i + 1;
    }
    rows
}

/// Members of `company` located in `building`, in encounter order.
pub fn project_company_building(
    company: &CompanyAggregate,
    building: Building,
) -> Vec<DrillDownRow> {
    number(
        company
            .members()
            .iter()
            .filter(|r| r.building() == Some(building)),
    )
}

/// Company then name, each compared case-insensitively first and byte-wise
/// only to break ties.
fn listing_order(a: &DrillDownRow, b: &DrillDownRow) -> Ordering {
    let a_company = a.company.as_deref().unwrap_or_default();
    let b_company = b.company.as_deref().unwrap_or_default();
    caseless(a_company, b_company).then_with(|| caseless(&a.name, &b.name))
}

fn caseless(a: &str, b: &str) -> Ordering {
    fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars().flat_map(char::to_lowercase)
    }
    fold(a).cmp(fold(b)).then_with(|| a.cmp(b))
}

fn number<'a>(records: impl Iterator<Item = &'a Arc<EmployeeRecord>>) -> Vec<DrillDownRow> {
    records
        .enumerate()
        .map(|(i, r)| DrillDownRow::from_record(i + 1, r))
        .collect()
}
