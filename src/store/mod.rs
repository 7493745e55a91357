//! Snapshot history persistence.
//!
//! One folder per date under the history root, `latest.json` plus an
//! immutable timestamped copy per save, and a global `index.json` for
//! ordering and navigation. The diff engine lives next door and is
//! applied at save time.

pub mod history;
pub mod diff;
