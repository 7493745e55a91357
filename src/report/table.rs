//! Terminal table rendering for snapshots.
//!
//! Formats a snapshot as a categorized table:
//! - Groups vehicles by category in display-rank order
//! - Shows year span, total units, previous, and diff per vehicle
//! - Per-category subtotals and a grand total

use std::collections::BTreeMap;

use crate::collect::Snapshot;
use crate::collect::listing::{Category, VehicleRecord};
use crate::util::format_signed;

pub fn render(snapshot: &Snapshot) -> String {
    if snapshot.vehicles.is_empty() {
        return String::from("No vehicles in snapshot.\n");
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} {} ({})\n",
        snapshot.date, snapshot.time, snapshot.source
    ));

    // group by category; BTreeMap iterates in display-rank order
    let mut by_category: BTreeMap<Category, Vec<&VehicleRecord>> = BTreeMap::new();
    for record in &snapshot.vehicles {
        by_category.entry(record.category).or_default().push(record);
    }

    let mut grand_units: u64 = 0;
    let mut grand_diff: i64 = 0;

    for (category, records) in by_category {
        let category_units: u64 = records.iter().map(|r| u64::from(r.total_units)).sum();
        let category_diff: i64 = records.iter().map(|r| r.diff).sum();
        grand_units += category_units;
        grand_diff += category_diff;

        output.push_str(&format!("\n{}\n", category.as_str()));
        output.push_str(&"-".repeat(68));
        output.push('\n');
        output.push_str(&format!(
            "  {:30} {:>10} {:>7} {:>7} {:>7}\n",
            "vehicle", "years", "units", "prev", "diff"
        ));

        for record in records {
            output.push_str(&format!(
                "  {:30} {:>10} {:>7} {:>7} {:>7}\n",
                truncate(&record.vehicle, 30),
                year_span(record),
                record.total_units,
                record.previous,
                format_signed(record.diff)
            ));
        }

        output.push_str(&format!(
            "  {:30} {:>10} {:>7} {:>7} {:>7}\n",
            "subtotal",
            "",
            category_units,
            "",
            format_signed(category_diff)
        ));
    }

    output.push_str(&format!(
        "\n{:>70}\n",
        format!("TOTAL: {grand_units} units ({})", format_signed(grand_diff))
    ));

    output
}

/// "2014-2025" span of the years a record has data for, or "-".
fn year_span(record: &VehicleRecord) -> String {
    let first = record.years.keys().next();
    let last = record.years.keys().next_back();

    match (first, last) {
        (Some(a), Some(b)) if a == b => a.clone(),
        (Some(a), Some(b)) => format!("{a}-{b}"),
        _ => String::from("-"),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::listing::YearStats;
    use std::collections::BTreeMap;

    fn record(category: Category, vehicle: &str, years: &[&str], units: u32) -> VehicleRecord {
        let mut map = BTreeMap::new();
        for year in years {
            map.insert(
                year.to_string(),
                YearStats {
                    lowest: 10000,
                    average: 10000,
                    units: 1,
                },
            );
        }

        VehicleRecord {
            category,
            vehicle: vehicle.to_string(),
            years: map,
            total_units: units,
            previous: units,
            diff: 0,
        }
    }

    #[test]
    fn empty_snapshot_renders_placeholder() {
        let snapshot = Snapshot {
            date: "2026-08-24".to_string(),
            time: "09:00:00".to_string(),
            vehicles: vec![],
            source: "sample data".to_string(),
            total_listings: 0,
        };

        assert_eq!(render(&snapshot), "No vehicles in snapshot.\n");
    }

    #[test]
    fn categories_appear_in_rank_order() {
        let snapshot = Snapshot {
            date: "2026-08-24".to_string(),
            time: "09:00:00".to_string(),
            vehicles: vec![
                record(Category::VanPetrol, "HONDA N-VAN", &["2024"], 44),
                record(Category::TenFtDiesel, "HINO DUTRO 2.8", &["2024", "2025"], 57),
            ],
            source: "sample data".to_string(),
            total_listings: 0,
        };

        let output = render(&snapshot);
        let ten = output.find("10FT DIESEL").unwrap();
        let petrol = output.find("VAN PETROL (GOODS VAN)").unwrap();
        assert!(ten < petrol);
        assert!(output.contains("2024-2025"));
        assert!(output.contains("TOTAL: 101 units"));
    }
}
