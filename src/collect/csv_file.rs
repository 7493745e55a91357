//! CSV listing source.
//!
//! Reads raw listing rows from a `category,vehicle,year,depreciation`
//! file. Malformed rows are skipped with a diagnostic; a file with no
//! usable rows at all is an error, which the collect pipeline answers by
//! falling back to the sample dataset.

use serde::Deserialize;

use crate::config::Config;

use super::listing::{Category, RawListing, Source, SourceResult};

#[derive(Deserialize)]
struct Row {
    category: String,
    vehicle: String,
    year: String,
    depreciation: u32,
}

pub struct CsvSource;

impl Source for CsvSource {
    fn name(&self) -> &'static str {
        "csv file"
    }

    fn available(&self, config: &Config) -> bool {
        config.input.as_deref().map(|p| p.is_file()).unwrap_or(false)
    }

    fn collect(&self, config: &Config) -> Result<SourceResult, Box<dyn std::error::Error>> {
        let path = config.input.as_deref().ok_or("no input file configured")?;
        let mut reader = csv::Reader::from_path(path)?;

        let mut result = SourceResult::empty();

        for (i, record) in reader.deserialize::<Row>().enumerate() {
            // header is line 1, first data row is line 2
            let line = i + 2;

            let row = match record {
                Ok(row) => row,
                Err(e) => {
                    result.diagnostics.push(format!("line {line}: {e}"));
                    continue;
                }
            };

            if row.year.len() != 4 || !row.year.starts_with("20") {
                result
                    .diagnostics
                    .push(format!("line {line}: unrecognized year '{}'", row.year));
                continue;
            }

            // listings without a depreciation figure carry no signal
            if row.depreciation == 0 {
                continue;
            }

            result.listings.push(RawListing {
                category: Category::parse(&row.category),
                vehicle: row.vehicle,
                year: row.year,
                depreciation: row.depreciation,
            });
        }

        if result.listings.is_empty() {
            return Err(format!("no usable rows in {}", path.display()).into());
        }

        Ok(result)
    }
}
