//! Company ranking and the podium.

use serde::Serialize;

use occupancy_core::ValueObject;

use crate::aggregate::{CompanyAggregate, OverallAggregate};
use crate::building::Building;

/// Number of podium places.
pub const PODIUM_SIZE: usize = 3;

/// Sort companies descending by total.
///
/// `sort_by` is stable, so equal totals keep their encounter order.
pub fn rank_companies(companies: &mut [CompanyAggregate]) {
    companies.sort_by(|a, b| b.total().cmp(&a.total()));
}

/// Podium place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Placement {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

impl Placement {
    pub const ALL: [Placement; PODIUM_SIZE] = [Placement::First, Placement::Second, Placement::Third];

    pub fn label(self) -> &'static str {
        match self {
            Placement::First => "1st",
            Placement::Second => "2nd",
            Placement::Third => "3rd",
        }
    }

    pub fn medal(self) -> Medal {
        match self {
            Placement::First => Medal::Gold,
            Placement::Second => Medal::Silver,
            Placement::Third => Medal::Bronze,
        }
    }
}

impl core::fmt::Display for Placement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Medal tier shown next to a podium place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

/// One podium winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodiumEntry {
    pub name: String,
    /// Podium Floor occupants of this company.
    pub count: usize,
    pub position: Placement,
    pub medal: Medal,
}

impl ValueObject for PodiumEntry {}

/// Top companies by Podium Floor occupancy.
///
/// Only companies with at least one Podium Floor occupant qualify; the list is
/// never padded. Ties keep the order of the overall ranking.
pub fn podium(overall: &OverallAggregate) -> Vec<PodiumEntry> {
    let mut contenders: Vec<&CompanyAggregate> = overall
        .companies()
        .iter()
        .filter(|c| c.count(Building::PodiumFloor) > 0)
        .collect();
    contenders.sort_by(|a, b| {
        b.count(Building::PodiumFloor)
            .cmp(&a.count(Building::PodiumFloor))
    });

    contenders
        .into_iter()
        .zip(Placement::ALL)
        .map(|(company, position)| PodiumEntry {
            name: company.name().to_string(),
            count: company.count(Building::PodiumFloor),
            position,
            medal: position.medal(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::tests::{rec, records_strategy, run};
    use crate::record::EmployeeRecord;
    use proptest::prelude::*;

    fn repeat(company: &str, zone: &str, n: usize) -> Vec<EmployeeRecord> {
        (0..n).map(|_| rec(company, zone)).collect()
    }

    #[test]
    fn equal_totals_keep_encounter_order() {
        let mut records = Vec::new();
        records.push(rec("Beta", "Tower B"));
        records.push(rec("Alpha", "Tower B"));
        records.extend(repeat("Gamma", "2nd", 3));
        records.push(rec("Delta", "Red Zone"));

        let overall = run(records);
        let names: Vec<_> = overall.companies().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Gamma", "Beta", "Alpha", "Delta"]);
    }

    #[test]
    fn podium_ties_follow_ranked_order() {
        let mut records = Vec::new();
        records.extend(repeat("First", "Red Zone", 5));
        records.extend(repeat("Second", "Green Zone", 5));
        records.extend(repeat("Third", "Reception", 2));

        let winners = podium(&run(records));
        let summary: Vec<_> = winners
            .iter()
            .map(|w| (w.name.as_str(), w.count, w.position.label()))
            .collect();
        assert_eq!(
            summary,
            vec![("First", 5, "1st"), ("Second", 5, "2nd"), ("Third", 2, "3rd")]
        );
        assert_eq!(winners[0].medal, Medal::Gold);
        assert_eq!(winners[2].medal, Medal::Bronze);
    }

    #[test]
    fn podium_ranks_by_podium_count_not_total() {
        let mut records = Vec::new();
        records.extend(repeat("Big", "Tower B", 10));
        records.push(rec("Big", "Red Zone"));
        records.extend(repeat("Small", "Yellow Zone", 3));

        let winners = podium(&run(records));
        assert_eq!(winners[0].name, "Small");
        assert_eq!(winners[1].name, "Big");
        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn podium_is_never_padded() {
        let winners = podium(&run(vec![rec("Solo", "Red Zone"), rec("Other", "Tower B")]));
        assert_eq!(winners.len(), 1);
        assert!(podium(&run(Vec::new())).is_empty());
    }

    #[test]
    fn podium_takes_at_most_three() {
        let records: Vec<_> = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|c| rec(c, "reception"))
            .collect();
        let winners = podium(&run(records));
        assert_eq!(winners.len(), PODIUM_SIZE);
        let names: Vec<_> = winners.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn entry_serializes_position_label() {
        let winners = podium(&run(vec![rec("Acme", "Red Zone")]));
        let json = serde_json::to_value(&winners[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Acme", "count": 1, "position": "1st", "medal": "gold" })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: ranking is non-increasing by total, and equal totals keep
        /// the order in which companies were first encountered.
        #[test]
        fn ranking_is_stable_and_descending(records in records_strategy()) {
            let mut first_seen: Vec<String> = Vec::new();
            for r in &records {
                if r.building().is_some() && !first_seen.iter().any(|n| n == r.company_name()) {
                    first_seen.push(r.company_name().to_string());
                }
            }

            let overall = run(records);
            let ranked = overall.companies();
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].total() >= pair[1].total());
                if pair[0].total() == pair[1].total() {
                    let a = first_seen.iter().position(|n| n == pair[0].name());
                    let b = first_seen.iter().position(|n| n == pair[1].name());
                    prop_assert!(a < b);
                }
            }
        }

        /// Property: podium length is min(3, qualifying companies), counts are
        /// non-increasing and labels follow list order.
        #[test]
        fn podium_shape(records in records_strategy()) {
            let overall = run(records);
            let qualifying = overall
                .companies()
                .iter()
                .filter(|c| c.count(Building::PodiumFloor) > 0)
                .count();

            let winners = podium(&overall);
            prop_assert_eq!(winners.len(), qualifying.min(PODIUM_SIZE));
            for pair in winners.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
            for (entry, expected) in winners.iter().zip(Placement::ALL) {
                prop_assert_eq!(entry.position, expected);
                prop_assert!(entry.count > 0);
            }
        }
    }
}
