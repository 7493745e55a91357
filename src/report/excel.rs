//! Excel workbook export.
//!
//! Single worksheet with the same column layout as the CSV export:
//! fixed summary columns, then `<year>_Lowest / <year>_Average /
//! <year>_Units` triplets for the union of years, newest first.
//! Counts and dollar figures are written as numeric cells.

use rust_xlsxwriter::Workbook;

use crate::collect::Snapshot;

pub fn render(snapshot: &Snapshot) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let years = super::year_columns(snapshot);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&snapshot.date)?;

    let mut col: u16 = 0;
    for title in ["Category", "Vehicle", "Total Units", "Previous", "Diff"] {
        worksheet.write_string(0, col, title)?;
        col += 1;
    }
    for year in &years {
        worksheet.write_string(0, col, format!("{year}_Lowest"))?;
        worksheet.write_string(0, col + 1, format!("{year}_Average"))?;
        worksheet.write_string(0, col + 2, format!("{year}_Units"))?;
        col += 3;
    }

    for (i, record) in snapshot.vehicles.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.category.as_str())?;
        worksheet.write_string(row, 1, &record.vehicle)?;
        worksheet.write_number(row, 2, f64::from(record.total_units))?;
        worksheet.write_number(row, 3, f64::from(record.previous))?;
        worksheet.write_number(row, 4, record.diff as f64)?;

        let mut col: u16 = 5;
        for year in &years {
            let (lowest, average, units) = match record.years.get(*year) {
                Some(stats) => (stats.lowest, stats.average, stats.units),
                None => (0, 0, 0),
            };
            worksheet.write_number(row, col, f64::from(lowest))?;
            worksheet.write_number(row, col + 1, f64::from(average))?;
            worksheet.write_number(row, col + 2, f64::from(units))?;
            col += 3;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::listing::{Category, VehicleRecord, YearStats};
    use std::collections::BTreeMap;

    fn snapshot() -> Snapshot {
        let mut years = BTreeMap::new();
        years.insert(
            "2025".to_string(),
            YearStats {
                lowest: 11510,
                average: 11510,
                units: 49,
            },
        );

        Snapshot {
            date: "2026-08-24".to_string(),
            time: "09:00:00".to_string(),
            vehicles: vec![VehicleRecord {
                category: Category::TenFtDiesel,
                vehicle: "HINO DUTRO 2.8".to_string(),
                years,
                total_units: 49,
                previous: 49,
                diff: 0,
            }],
            source: "sample data".to_string(),
            total_listings: 49,
        }
    }

    #[test]
    fn render_produces_a_zip_container() {
        let buffer = render(&snapshot()).unwrap();

        // xlsx files are zip archives
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn empty_snapshot_still_renders() {
        let mut empty = snapshot();
        empty.vehicles.clear();

        let buffer = render(&empty).unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }
}
