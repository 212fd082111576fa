//! Canonical buildings and zone normalization.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use occupancy_core::{OccupancyError, ValueObject};

/// One of the three physical-location buckets a zone can resolve to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Building {
    #[serde(rename = "Podium Floor")]
    PodiumFloor,
    #[serde(rename = "2nd Floor")]
    SecondFloor,
    #[serde(rename = "Tower B")]
    TowerB,
}

impl Building {
    /// Display order used for totals, cards and table columns.
    pub const ALL: [Building; 3] = [Building::PodiumFloor, Building::SecondFloor, Building::TowerB];

    pub fn name(self) -> &'static str {
        match self {
            Building::PodiumFloor => "Podium Floor",
            Building::SecondFloor => "2nd Floor",
            Building::TowerB => "Tower B",
        }
    }
}

impl core::fmt::Display for Building {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Building {
    type Err = OccupancyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Building::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OccupancyError::invalid_selection(s))
    }
}

/// A substring rule: any needle found in the lower-cased zone selects `building`.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRule {
    pub needles: &'static [&'static str],
    pub building: Building,
}

impl ZoneRule {
    fn matches(&self, folded_zone: &str) -> bool {
        self.needles.iter().any(|needle| folded_zone.contains(needle))
    }
}

/// Ordered rule list; the first matching rule wins.
///
/// Order matters: a zone such as "Reception 2nd wing" is Podium Floor, not 2nd Floor.
pub const ZONE_RULES: [ZoneRule; 3] = [
    ZoneRule {
        needles: &["red zone", "yellow zone", "green zone", "reception"],
        building: Building::PodiumFloor,
    },
    ZoneRule {
        needles: &["2nd"],
        building: Building::SecondFloor,
    },
    ZoneRule {
        needles: &["tower b"],
        building: Building::TowerB,
    },
];

/// Resolve a raw zone tag to its building.
///
/// Returns `None` for absent, empty or unmatched zones. There is no catch-all
/// bucket: callers must drop such records from every total.
pub fn normalize_zone(zone: Option<&str>) -> Option<Building> {
    let zone = zone?;
    if zone.is_empty() {
        return None;
    }

    let folded = zone.to_lowercase();
    ZONE_RULES
        .iter()
        .find(|rule| rule.matches(&folded))
        .map(|rule| rule.building)
}

/// Per-building counters with exactly three fixed keys.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingCounts {
    #[serde(rename = "Podium Floor")]
    podium_floor: usize,
    #[serde(rename = "2nd Floor")]
    second_floor: usize,
    #[serde(rename = "Tower B")]
    tower_b: usize,
}

impl ValueObject for BuildingCounts {}

impl BuildingCounts {
    pub fn get(&self, building: Building) -> usize {
        match building {
            Building::PodiumFloor => self.podium_floor,
            Building::SecondFloor => self.second_floor,
            Building::TowerB => self.tower_b,
        }
    }

    pub(crate) fn increment(&mut self, building: Building) {
        match building {
            Building::PodiumFloor => self.podium_floor += 1,
            Building::SecondFloor => self.second_floor += 1,
            Building::TowerB => self.tower_b += 1,
        }
    }

    /// Sum over all three buildings.
    pub fn sum(&self) -> usize {
        self.podium_floor + self.second_floor + self.tower_b
    }

    pub fn iter(&self) -> impl Iterator<Item = (Building, usize)> + '_ {
        Building::ALL.into_iter().map(|b| (b, self.get(b)))
    }
}

/// Filter selection: every company, or only those present in one building.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingSelection {
    #[default]
    All,
    Only(Building),
}

impl core::fmt::Display for BuildingSelection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuildingSelection::All => f.write_str("all"),
            BuildingSelection::Only(b) => core::fmt::Display::fmt(b, f),
        }
    }
}

impl From<Building> for BuildingSelection {
    fn from(value: Building) -> Self {
        BuildingSelection::Only(value)
    }
}

impl FromStr for BuildingSelection {
    type Err = OccupancyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(BuildingSelection::All);
        }
        s.parse::<Building>().map(BuildingSelection::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_sub_zones_map_to_podium_floor() {
        for zone in ["Red Zone A", "YELLOW ZONE", "green zone east", "Main Reception"] {
            assert_eq!(normalize_zone(Some(zone)), Some(Building::PodiumFloor), "{zone}");
        }
    }

    #[test]
    fn second_floor_and_tower_b() {
        assert_eq!(normalize_zone(Some("2nd Floor West")), Some(Building::SecondFloor));
        assert_eq!(normalize_zone(Some("Tower B - L4")), Some(Building::TowerB));
        assert_eq!(normalize_zone(Some("tower b")), Some(Building::TowerB));
    }

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(normalize_zone(Some("Reception 2nd wing")), Some(Building::PodiumFloor));
        assert_eq!(normalize_zone(Some("Tower B 2nd level")), Some(Building::SecondFloor));
        assert_eq!(normalize_zone(Some("Red Zone / Tower B")), Some(Building::PodiumFloor));
    }

    #[test]
    fn unmatched_zones_have_no_building() {
        assert_eq!(normalize_zone(None), None);
        assert_eq!(normalize_zone(Some("")), None);
        assert_eq!(normalize_zone(Some("Unmapped Wing")), None);
        assert_eq!(normalize_zone(Some("Tower A")), None);
        assert_eq!(normalize_zone(Some("blue zone")), None);
    }

    #[test]
    fn matching_is_substring_only() {
        // No whitespace folding beyond case.
        assert_eq!(normalize_zone(Some("RedZone")), None);
        assert_eq!(normalize_zone(Some("towerb")), None);
    }

    #[test]
    fn building_names_round_trip_through_from_str() {
        for b in Building::ALL {
            assert_eq!(b.name().parse::<Building>().unwrap(), b);
        }
        assert_eq!("tower B".parse::<Building>().unwrap(), Building::TowerB);
        assert!("Tower C".parse::<Building>().is_err());
    }

    #[test]
    fn selection_parses_all_and_buildings() {
        assert_eq!("all".parse::<BuildingSelection>().unwrap(), BuildingSelection::All);
        assert_eq!(" ALL ".parse::<BuildingSelection>().unwrap(), BuildingSelection::All);
        assert_eq!(
            "2nd Floor".parse::<BuildingSelection>().unwrap(),
            BuildingSelection::Only(Building::SecondFloor)
        );
        assert!(matches!(
            "basement".parse::<BuildingSelection>(),
            Err(OccupancyError::InvalidSelection(_))
        ));
    }

    #[test]
    fn counts_serialize_with_building_names() {
        let mut counts = BuildingCounts::default();
        counts.increment(Building::TowerB);
        counts.increment(Building::TowerB);
        counts.increment(Building::PodiumFloor);

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Podium Floor": 1, "2nd Floor": 0, "Tower B": 2 })
        );
        assert_eq!(counts.sum(), 3);
    }
}
