use clap::Parser;
use depwatch::cli::{Cli, Command, ExportFormat};
use depwatch::collect;
use depwatch::config::Config;
use depwatch::report;
use depwatch::store::diff::{self, DiffResult, DiffType};
use depwatch::store::history::HistoryStore;
use depwatch::util::format_signed;
use std::collections::BTreeMap;

use depwatch::collect::Snapshot;
use depwatch::collect::listing::Category;

fn open_store(config: &Config) -> HistoryStore {
    match HistoryStore::open(&config.history_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening history store: {e}");
            std::process::exit(1);
        }
    }
}

fn load_snapshot_or_exit(store: &HistoryStore, date: &str) -> Snapshot {
    match store.load(date) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            eprintln!("No snapshot for {date}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error loading snapshot for {date}: {e}");
            std::process::exit(1);
        }
    }
}

fn print_diff(result: &DiffResult) {
    println!("\nComparing snapshots:");
    println!("  From: {}", result.from_date);
    println!("  To:   {}", result.to_date);
    println!();

    if result.entries.is_empty() {
        println!("No changes detected.");
        return;
    }

    // group entries by category in display-rank order
    let mut by_category: BTreeMap<Category, Vec<&diff::DiffEntry>> = BTreeMap::new();
    for entry in &result.entries {
        by_category.entry(entry.category).or_default().push(entry);
    }

    for (category, entries) in by_category {
        println!("{}:", category.as_str());

        let mut grew: Vec<_> = entries.iter().filter(|e| matches!(e.diff_type, DiffType::Grew)).collect();
        let mut shrank: Vec<_> = entries.iter().filter(|e| matches!(e.diff_type, DiffType::Shrank)).collect();
        let mut new: Vec<_> = entries.iter().filter(|e| matches!(e.diff_type, DiffType::New)).collect();
        let mut gone: Vec<_> = entries.iter().filter(|e| matches!(e.diff_type, DiffType::Gone)).collect();

        grew.sort_by_key(|e| -(e.delta));
        shrank.sort_by_key(|e| e.delta);
        new.sort_by_key(|e| -(e.delta));
        gone.sort_by_key(|e| e.delta);

        for entry in grew {
            println!(
                "  [+] {} grew {} -> {} units ({})",
                entry.vehicle,
                entry.old_units,
                entry.new_units,
                format_signed(entry.delta)
            );
        }

        for entry in shrank {
            println!(
                "  [-] {} shrank {} -> {} units ({})",
                entry.vehicle,
                entry.old_units,
                entry.new_units,
                format_signed(entry.delta)
            );
        }

        for entry in new {
            println!("  [new] {} appeared ({} units)", entry.vehicle, entry.new_units);
        }

        for entry in gone {
            println!("  [gone] {} delisted (was {} units)", entry.vehicle, entry.old_units);
        }

        println!();
    }

    println!("Net change: {} units", format_signed(result.net_change));
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Collect(args) => {
            let config = Config::from_collect_args(cli.history_dir, &args);
            let mut result = collect::run(&config);

            match HistoryStore::open(&config.history_dir) {
                Ok(mut store) => {
                    if let Err(e) = store.save(&mut result.snapshot) {
                        eprintln!("warning: failed to save snapshot: {e}");
                    }
                }
                Err(e) => {
                    eprintln!("warning: history store unavailable: {e}");
                }
            }

            report::print(&result, &config);
        }
        Command::Report(args) => {
            let config = Config::load(cli.history_dir);
            let store = open_store(&config);

            if args.list {
                let summaries = match store.summary(args.limit) {
                    Ok(summaries) => summaries,
                    Err(e) => {
                        eprintln!("Error listing history: {e}");
                        std::process::exit(1);
                    }
                };

                if summaries.is_empty() {
                    println!("No snapshots found. Run 'depwatch collect' to create one.");
                } else if args.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&summaries)
                            .unwrap_or_else(|_| String::from("[]"))
                    );
                } else {
                    println!("Snapshots:");
                    println!("{:<12} {:<10} {:<10} {:<10}", "Date", "Time", "Vehicles", "Units");
                    println!("{}", "-".repeat(46));

                    for summary in summaries {
                        println!(
                            "{:<12} {:<10} {:<10} {:<10}",
                            summary.date, summary.time, summary.total_vehicles, summary.total_units
                        );
                    }
                }
            } else {
                let snapshot = if let Some(date) = &args.date {
                    load_snapshot_or_exit(&store, date)
                } else {
                    match store.latest() {
                        Ok(Some(snapshot)) => snapshot,
                        Ok(None) => {
                            eprintln!("No snapshots found. Run 'depwatch collect' to create one.");
                            std::process::exit(1);
                        }
                        Err(e) => {
                            eprintln!("Error loading snapshot: {e}");
                            std::process::exit(1);
                        }
                    }
                };

                if args.json {
                    println!("{}", report::json::render(&snapshot));
                } else {
                    print!("{}", report::table::render(&snapshot));

                    let previous = store.previous_date(&snapshot.date).unwrap_or("-");
                    let next = store.next_date(&snapshot.date).unwrap_or("-");
                    println!("\nprevious: {previous}  next: {next}");
                }
            }
        }
        Command::Diff(args) => {
            // validate that --from and --to are used together
            if args.from.is_some() != args.to.is_some() {
                eprintln!("Both --from and --to must be specified together.");
                std::process::exit(1);
            }

            let config = Config::load(cli.history_dir);
            let store = open_store(&config);

            let (from_date, to_date) = if let (Some(from), Some(to)) = (&args.from, &args.to) {
                (from.clone(), to.clone())
            } else {
                let dates = store.dates();
                if dates.len() < 2 {
                    eprintln!("Need at least 2 snapshots to compare. Run 'depwatch collect' a few times.");
                    std::process::exit(1);
                }
                (dates[1].clone(), dates[0].clone())
            };

            let from_snapshot = load_snapshot_or_exit(&store, &from_date);
            let to_snapshot = load_snapshot_or_exit(&store, &to_date);

            let diff_result = diff::compare(&from_snapshot, &to_snapshot);
            print_diff(&diff_result);
        }
        Command::Export(args) => {
            let config = Config::load(cli.history_dir);
            let store = open_store(&config);

            // same default as report: the most recently written snapshot
            let snapshot = match &args.date {
                Some(date) => load_snapshot_or_exit(&store, date),
                None => match store.latest() {
                    Ok(Some(snapshot)) => snapshot,
                    Ok(None) => {
                        eprintln!("No snapshots found. Run 'depwatch collect' to create one.");
                        std::process::exit(1);
                    }
                    Err(e) => {
                        eprintln!("Error loading snapshot: {e}");
                        std::process::exit(1);
                    }
                },
            };
            let date = snapshot.date.clone();

            let rendered: Vec<u8> = match args.format {
                ExportFormat::Json => report::json::render(&snapshot).into_bytes(),
                ExportFormat::Csv => match report::csv::render(&snapshot) {
                    Ok(rendered) => rendered.into_bytes(),
                    Err(e) => {
                        eprintln!("Error rendering CSV: {e}");
                        std::process::exit(1);
                    }
                },
                ExportFormat::Xlsx => match report::excel::render(&snapshot) {
                    Ok(rendered) => rendered,
                    Err(e) => {
                        eprintln!("Error rendering workbook: {e}");
                        std::process::exit(1);
                    }
                },
            };

            match &args.output {
                Some(path) => {
                    if let Err(e) = std::fs::write(path, &rendered) {
                        eprintln!("Error writing {}: {e}", path.display());
                        std::process::exit(1);
                    }
                    println!("exported {date} to {}", path.display());
                }
                None => {
                    if args.format == ExportFormat::Xlsx {
                        eprintln!("xlsx output is binary; pass --output to write a file.");
                        std::process::exit(1);
                    }
                    print!("{}", String::from_utf8_lossy(&rendered));
                }
            }
        }
        Command::Prune(args) => {
            let config = Config::load(cli.history_dir);
            let mut store = open_store(&config);

            let retention = match &args.keep {
                Some(text) => match humantime::parse_duration(text) {
                    Ok(duration) => duration,
                    Err(e) => {
                        eprintln!("Invalid retention window '{text}': {e}");
                        std::process::exit(1);
                    }
                },
                None => config.retention,
            };

            match store.prune(retention, args.dry_run) {
                Ok(removed) => {
                    if removed.is_empty() {
                        println!("Nothing to prune.");
                    } else {
                        for date in &removed {
                            println!("{date}");
                        }
                        if args.dry_run {
                            println!("\nwould remove {} snapshot folder(s)", removed.len());
                        } else {
                            println!("\nremoved {} snapshot folder(s)", removed.len());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error pruning history: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
