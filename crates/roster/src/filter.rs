//! Building-scoped company views.

use crate::aggregate::{CompanyAggregate, OverallAggregate};
use crate::building::BuildingSelection;

/// Companies visible under `selection`, in ranked order.
///
/// `All` returns every company. `Only(b)` keeps companies with at least one
/// occupant in `b`. The aggregate itself is only borrowed.
pub fn filter_companies(
    overall: &OverallAggregate,
    selection: BuildingSelection,
) -> Vec<&CompanyAggregate> {
    overall
        .companies()
        .iter()
        .filter(|c| is_visible(c, selection))
        .collect()
}

/// Ranked positions of the companies [`filter_companies`] would return.
///
/// Lets callers hold an index list next to a shared aggregate instead of
/// borrowing from it.
pub fn filter_positions(overall: &OverallAggregate, selection: BuildingSelection) -> Vec<usize> {
    overall
        .companies()
        .iter()
        .enumerate()
        .filter(|(_, c)| is_visible(c, selection))
        .map(|(i, _)| i)
        .collect()
}

fn is_visible(company: &CompanyAggregate, selection: BuildingSelection) -> bool {
    match selection {
        BuildingSelection::All => true,
        BuildingSelection::Only(building) => company.count(building) > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::tests::{rec, records_strategy, run};
    use crate::building::Building;
    use proptest::prelude::*;

    #[test]
    fn all_returns_full_ranked_list() {
        let overall = run(vec![
            rec("A", "Tower B"),
            rec("B", "Red Zone"),
            rec("B", "Red Zone"),
        ]);
        let names: Vec<_> = filter_companies(&overall, BuildingSelection::All)
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn building_keeps_only_present_companies() {
        let overall = run(vec![
            rec("A", "Tower B"),
            rec("B", "Red Zone"),
            rec("C", "tower b east"),
        ]);
        let names: Vec<_> = overall
            .filtered(Building::TowerB.into())
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(overall.filtered(Building::SecondFloor.into()).is_empty());
    }

    #[test]
    fn filtering_leaves_aggregate_untouched() {
        let overall = run(vec![rec("A", "Tower B"), rec("B", "2nd")]);
        let before = overall.clone();
        let _ = filter_companies(&overall, Building::TowerB.into());
        assert_eq!(before, overall);
    }

    #[test]
    fn positions_point_at_filtered_companies() {
        let overall = run(vec![
            rec("A", "Tower B"),
            rec("B", "Red Zone"),
            rec("B", "Red Zone"),
            rec("C", "tower b east"),
        ]);
        let positions = filter_positions(&overall, Building::TowerB.into());
        assert_eq!(positions, vec![1, 2]);
        let names: Vec<_> = positions.iter().map(|&i| overall.companies()[i].name()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(filter_positions(&overall, BuildingSelection::All), vec![0, 1, 2]);
    }

    #[test]
    fn empty_aggregate_filters_to_empty() {
        let overall = run(vec![rec("A", "nowhere")]);
        assert!(filter_companies(&overall, BuildingSelection::All).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a building filter yields exactly the subsequence of the
        /// ranked list with a nonzero count for that building.
        #[test]
        fn filter_is_ordered_subsequence(
            records in records_strategy(),
            pick in 0usize..3,
        ) {
            let overall = run(records);
            let building = Building::ALL[pick];

            let all = filter_companies(&overall, BuildingSelection::All);
            prop_assert_eq!(all.len(), overall.companies().len());

            let expected: Vec<&str> = overall
                .companies()
                .iter()
                .filter(|c| c.count(building) > 0)
                .map(|c| c.name())
                .collect();
            let actual: Vec<&str> = filter_companies(&overall, building.into())
                .iter()
                .map(|c| c.name())
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
