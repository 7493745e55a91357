//! Snapshot comparison engine.
//!
//! Two jobs:
//! - `backfill`: fills `previous`/`diff` on a snapshot's records against
//!   the preceding snapshot, keyed by (category, vehicle)
//! - `compare`: full report between two snapshots: grew, shrank, new,
//!   gone, plus a net unit change

use std::collections::HashMap;

use crate::collect::Snapshot;
use crate::collect::listing::{Category, VehicleRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum DiffType {
    Grew,
    Shrank,
    New,
    Gone,
}

#[derive(Debug, Clone)]
pub struct DiffEntry {
    pub category: Category,
    pub vehicle: String,
    pub old_units: u32,
    pub new_units: u32,
    pub delta: i64,
    pub diff_type: DiffType,
}

pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
    pub net_change: i64,
    pub from_date: String,
    pub to_date: String,
}

/// Matching key across snapshots. Category + vehicle name; listings have
/// no stable identifier beyond that.
fn make_key(category: Category, vehicle: &str) -> String {
    format!("{}:{}", category.as_str(), vehicle)
}

/// Fill `previous` and `diff` on `current` from the prior snapshot.
/// Vehicles absent from `previous` get `previous = total_units`, so a
/// newly listed model reads as diff 0 rather than a spurious jump.
pub fn backfill(current: &mut Snapshot, previous: &Snapshot) {
    let prior_units: HashMap<String, u32> = previous
        .vehicles
        .iter()
        .map(|v| (make_key(v.category, &v.vehicle), v.total_units))
        .collect();

    for record in &mut current.vehicles {
        let prior = prior_units
            .get(&make_key(record.category, &record.vehicle))
            .copied()
            .unwrap_or(record.total_units);

        record.previous = prior;
        record.diff = i64::from(record.total_units) - i64::from(prior);
    }
}

/// Compare two snapshots' unit counts and produce diff entries.
/// Unchanged vehicles are omitted.
pub fn compare(from: &Snapshot, to: &Snapshot) -> DiffResult {
    let mut from_map: HashMap<String, &VehicleRecord> = HashMap::new();
    for record in &from.vehicles {
        from_map.insert(make_key(record.category, &record.vehicle), record);
    }

    let mut to_map: HashMap<String, &VehicleRecord> = HashMap::new();
    for record in &to.vehicles {
        to_map.insert(make_key(record.category, &record.vehicle), record);
    }

    let mut entries = Vec::new();
    let mut net_change: i64 = 0;

    // matches, grew, and shrank
    for (key, to_record) in &to_map {
        if let Some(from_record) = from_map.get(key) {
            let delta = i64::from(to_record.total_units) - i64::from(from_record.total_units);

            if delta != 0 {
                entries.push(DiffEntry {
                    category: to_record.category,
                    vehicle: to_record.vehicle.clone(),
                    old_units: from_record.total_units,
                    new_units: to_record.total_units,
                    delta,
                    diff_type: if delta > 0 { DiffType::Grew } else { DiffType::Shrank },
                });
                net_change += delta;
            }
        } else {
            let delta = i64::from(to_record.total_units);
            entries.push(DiffEntry {
                category: to_record.category,
                vehicle: to_record.vehicle.clone(),
                old_units: 0,
                new_units: to_record.total_units,
                delta,
                diff_type: DiffType::New,
            });
            net_change += delta;
        }
    }

    // gone entries (only in 'from')
    for (key, from_record) in &from_map {
        if !to_map.contains_key(key) {
            let delta = -i64::from(from_record.total_units);
            entries.push(DiffEntry {
                category: from_record.category,
                vehicle: from_record.vehicle.clone(),
                old_units: from_record.total_units,
                new_units: 0,
                delta,
                diff_type: DiffType::Gone,
            });
            net_change += delta;
        }
    }

    DiffResult {
        entries,
        net_change,
        from_date: from.date.clone(),
        to_date: to.date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(vehicle: &str, units: u32) -> VehicleRecord {
        VehicleRecord {
            category: Category::TenFtDiesel,
            vehicle: vehicle.to_string(),
            years: BTreeMap::new(),
            total_units: units,
            previous: units,
            diff: 0,
        }
    }

    fn snapshot(date: &str, vehicles: Vec<VehicleRecord>) -> Snapshot {
        Snapshot {
            date: date.to_string(),
            time: "09:00:00".to_string(),
            vehicles,
            source: "sample data".to_string(),
            total_listings: 0,
        }
    }

    #[test]
    fn backfill_matched_key_sets_previous_and_diff() {
        let previous = snapshot("2026-08-23", vec![record("HINO DUTRO 2.8", 55)]);
        let mut current = snapshot("2026-08-24", vec![record("HINO DUTRO 2.8", 57)]);

        backfill(&mut current, &previous);

        assert_eq!(current.vehicles[0].previous, 55);
        assert_eq!(current.vehicles[0].diff, 2);
    }

    #[test]
    fn backfill_unmatched_key_yields_zero_diff() {
        let previous = snapshot("2026-08-23", vec![record("HINO DUTRO 2.8", 55)]);
        let mut current = snapshot("2026-08-24", vec![record("KIA 2500", 11)]);

        backfill(&mut current, &previous);

        assert_eq!(current.vehicles[0].previous, 11);
        assert_eq!(current.vehicles[0].diff, 0);
    }

    #[test]
    fn backfill_key_includes_category() {
        let mut other = record("KIA 2500", 30);
        other.category = Category::Other;

        let previous = snapshot("2026-08-23", vec![other]);
        let mut current = snapshot("2026-08-24", vec![record("KIA 2500", 11)]);

        backfill(&mut current, &previous);

        // same name under a different category must not match
        assert_eq!(current.vehicles[0].previous, 11);
        assert_eq!(current.vehicles[0].diff, 0);
    }

    #[test]
    fn backfill_shrinking_count_goes_negative() {
        let previous = snapshot("2026-08-23", vec![record("TOYOTA DYNA 3.0", 105)]);
        let mut current = snapshot("2026-08-24", vec![record("TOYOTA DYNA 3.0", 99)]);

        backfill(&mut current, &previous);

        assert_eq!(current.vehicles[0].previous, 105);
        assert_eq!(current.vehicles[0].diff, -6);
    }

    #[test]
    fn new_vehicle_detected() {
        let result = compare(
            &snapshot("2026-08-23", vec![]),
            &snapshot("2026-08-24", vec![record("HINO DUTRO 2.8", 57)]),
        );

        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].diff_type, DiffType::New);
        assert_eq!(result.entries[0].new_units, 57);
        assert_eq!(result.net_change, 57);
    }

    #[test]
    fn gone_vehicle_detected() {
        let result = compare(
            &snapshot("2026-08-23", vec![record("HINO DUTRO 2.8", 57)]),
            &snapshot("2026-08-24", vec![]),
        );

        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].diff_type, DiffType::Gone);
        assert_eq!(result.entries[0].old_units, 57);
        assert_eq!(result.entries[0].new_units, 0);
        assert_eq!(result.net_change, -57);
    }

    #[test]
    fn grew_and_shrank_classified_by_delta() {
        let result = compare(
            &snapshot(
                "2026-08-23",
                vec![record("HINO DUTRO 2.8", 55), record("TOYOTA DYNA 3.0", 105)],
            ),
            &snapshot(
                "2026-08-24",
                vec![record("HINO DUTRO 2.8", 57), record("TOYOTA DYNA 3.0", 99)],
            ),
        );

        assert_eq!(result.entries.len(), 2);

        let grew = result
            .entries
            .iter()
            .find(|e| e.vehicle == "HINO DUTRO 2.8")
            .unwrap();
        assert_eq!(grew.diff_type, DiffType::Grew);
        assert_eq!(grew.delta, 2);

        let shrank = result
            .entries
            .iter()
            .find(|e| e.vehicle == "TOYOTA DYNA 3.0")
            .unwrap();
        assert_eq!(shrank.diff_type, DiffType::Shrank);
        assert_eq!(shrank.delta, -6);

        assert_eq!(result.net_change, -4);
    }

    #[test]
    fn unchanged_vehicle_not_reported() {
        let result = compare(
            &snapshot("2026-08-23", vec![record("KIA 2500", 11)]),
            &snapshot("2026-08-24", vec![record("KIA 2500", 11)]),
        );

        assert!(result.entries.is_empty());
        assert_eq!(result.net_change, 0);
    }

    #[test]
    fn dates_preserved_on_result() {
        let result = compare(
            &snapshot("2026-08-23", vec![]),
            &snapshot("2026-08-24", vec![]),
        );

        assert_eq!(result.from_date, "2026-08-23");
        assert_eq!(result.to_date, "2026-08-24");
    }
}
