//! Listing aggregation.
//!
//! Turns raw listing rows into per-vehicle records:
//! - Groups by (category, uppercased vehicle name)
//! - Per registration year: lowest price, floored mean, unit count
//! - Orders output by category rank, then vehicle name

use std::collections::BTreeMap;

use super::listing::{Category, RawListing, VehicleRecord, YearStats};

pub fn aggregate(rows: &[RawListing]) -> Vec<VehicleRecord> {
    // BTreeMap keyed by (category, vehicle) gives the output order for free:
    // Category's derived Ord is the display rank
    let mut grouped: BTreeMap<(Category, String), BTreeMap<String, Vec<u32>>> = BTreeMap::new();

    for row in rows {
        let vehicle = row.vehicle.trim().to_uppercase();
        grouped
            .entry((row.category, vehicle))
            .or_default()
            .entry(row.year.clone())
            .or_default()
            .push(row.depreciation);
    }

    let mut records = Vec::with_capacity(grouped.len());

    for ((category, vehicle), years) in grouped {
        let mut stats = BTreeMap::new();
        let mut total_units: u32 = 0;

        for (year, prices) in years {
            let lowest = prices.iter().copied().min().unwrap_or(0);
            let sum: u64 = prices.iter().map(|p| u64::from(*p)).sum();
            let units = prices.len() as u32;

            stats.insert(
                year,
                YearStats {
                    lowest,
                    average: (sum / u64::from(units)) as u32,
                    units,
                },
            );
            total_units += units;
        }

        records.push(VehicleRecord {
            category,
            vehicle,
            years: stats,
            // back-filled against the prior snapshot at save time
            previous: total_units,
            diff: 0,
            total_units,
        });
    }

    records
}
