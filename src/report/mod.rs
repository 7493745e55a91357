pub mod table;
pub mod json;
pub mod csv;
pub mod excel;

use std::collections::BTreeSet;

use crate::collect::{CollectResult, Snapshot};
use crate::config::Config;

/// Union of years across a snapshot, newest first. Shared column order
/// for the csv and xlsx exports.
pub(crate) fn year_columns(snapshot: &Snapshot) -> Vec<&str> {
    let mut years: BTreeSet<&str> = BTreeSet::new();
    for record in &snapshot.vehicles {
        for year in record.years.keys() {
            years.insert(year);
        }
    }
    years.into_iter().rev().collect()
}

pub fn print(result: &CollectResult, config: &Config) {
    if config.json_output {
        println!("{}", json::render(&result.snapshot));
    } else {
        print!("{}", table::render(&result.snapshot));
        print_collect_info(result, config.verbose);
        print_diagnostics(result, config.verbose);
    }
}

fn print_collect_info(result: &CollectResult, verbose: bool) {
    if let Some(duration_ms) = result.duration_ms {
        let duration_sec = duration_ms as f64 / 1000.0;
        println!("\ncollected in {duration_sec:.2}s");

        if verbose {
            println!(
                "{} listings aggregated into {} vehicles",
                result.snapshot.total_listings,
                result.snapshot.vehicles.len()
            );
        }
    }
}

fn print_diagnostics(result: &CollectResult, verbose: bool) {
    if result.diagnostics.is_empty() {
        return;
    }

    println!();
    if verbose {
        println!("Diagnostics:");
        println!("{}", "-".repeat(40));
        for diagnostic in &result.diagnostics {
            println!("  {diagnostic}");
        }
    } else {
        for diagnostic in &result.diagnostics {
            println!("[diagnostic] {diagnostic}");
        }
    }
}
