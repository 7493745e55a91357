//! JSON output for snapshots.
//!
//! Pretty-prints the persisted snapshot shape for scripting and piping.

use crate::collect::Snapshot;

pub fn render(snapshot: &Snapshot) -> String {
    serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_parses_back_to_the_same_snapshot() {
        let snapshot = Snapshot {
            date: "2026-08-24".to_string(),
            time: "09:00:00".to_string(),
            vehicles: vec![],
            source: "sample data".to_string(),
            total_listings: 0,
        };

        let parsed: Snapshot = serde_json::from_str(&render(&snapshot)).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
