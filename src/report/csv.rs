//! Flat CSV export.
//!
//! One row per vehicle with fixed summary columns followed by
//! `<year>_Lowest / <year>_Average / <year>_Units` triplets for the
//! union of years across the snapshot, newest year first. Years a
//! vehicle has no data for render as 0.

use crate::collect::Snapshot;

pub fn render(snapshot: &Snapshot) -> Result<String, Box<dyn std::error::Error>> {
    let years = super::year_columns(snapshot);

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = ["Category", "Vehicle", "Total Units", "Previous", "Diff"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for year in &years {
        header.push(format!("{year}_Lowest"));
        header.push(format!("{year}_Average"));
        header.push(format!("{year}_Units"));
    }
    writer.write_record(&header)?;

    for record in &snapshot.vehicles {
        let mut row = vec![
            record.category.as_str().to_string(),
            record.vehicle.clone(),
            record.total_units.to_string(),
            record.previous.to_string(),
            record.diff.to_string(),
        ];

        for year in &years {
            match record.years.get(*year) {
                Some(stats) => {
                    row.push(stats.lowest.to_string());
                    row.push(stats.average.to_string());
                    row.push(stats.units.to_string());
                }
                None => {
                    row.extend(["0".to_string(), "0".to_string(), "0".to_string()]);
                }
            }
        }

        writer.write_record(&row)?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::listing::{Category, VehicleRecord, YearStats};
    use std::collections::BTreeMap;

    fn snapshot() -> Snapshot {
        let mut dutro_years = BTreeMap::new();
        dutro_years.insert(
            "2025".to_string(),
            YearStats {
                lowest: 11510,
                average: 11510,
                units: 49,
            },
        );
        dutro_years.insert(
            "2024".to_string(),
            YearStats {
                lowest: 11450,
                average: 11450,
                units: 8,
            },
        );

        let mut nvan_years = BTreeMap::new();
        nvan_years.insert(
            "2024".to_string(),
            YearStats {
                lowest: 9350,
                average: 9350,
                units: 3,
            },
        );

        Snapshot {
            date: "2026-08-24".to_string(),
            time: "09:00:00".to_string(),
            vehicles: vec![
                VehicleRecord {
                    category: Category::TenFtDiesel,
                    vehicle: "HINO DUTRO 2.8".to_string(),
                    years: dutro_years,
                    total_units: 57,
                    previous: 55,
                    diff: 2,
                },
                VehicleRecord {
                    category: Category::VanPetrol,
                    vehicle: "HONDA N-VAN".to_string(),
                    years: nvan_years,
                    total_units: 3,
                    previous: 3,
                    diff: 0,
                },
            ],
            source: "sample data".to_string(),
            total_listings: 60,
        }
    }

    #[test]
    fn header_unions_years_newest_first() {
        let output = render(&snapshot()).unwrap();
        let header = output.lines().next().unwrap();

        assert_eq!(
            header,
            "Category,Vehicle,Total Units,Previous,Diff,\
             2025_Lowest,2025_Average,2025_Units,\
             2024_Lowest,2024_Average,2024_Units"
        );
    }

    #[test]
    fn absent_years_render_as_zero() {
        let output = render(&snapshot()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[1],
            "10FT DIESEL,HINO DUTRO 2.8,57,55,2,11510,11510,49,11450,11450,8"
        );
        // N-VAN has no 2025 data
        assert_eq!(
            lines[2],
            "VAN PETROL (GOODS VAN),HONDA N-VAN,3,3,0,0,0,0,9350,9350,3"
        );
    }
}
