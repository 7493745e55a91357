pub mod cli;
pub mod config;
pub mod collect;
pub mod store;
pub mod report;
pub mod util;
