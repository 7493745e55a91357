use serde::{Serialize, Deserialize};

use crate::config::Config;

/// Vehicle categories tracked by the depreciation feed. The variant order
/// is the display order; `Other` collects anything the feed mislabels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "10FT DIESEL")]
    TenFtDiesel,
    #[serde(rename = "14FT DIESEL")]
    FourteenFtDiesel,
    #[serde(rename = "VAN DIESEL (GOODS VAN)")]
    VanDiesel,
    #[serde(rename = "VAN PETROL (GOODS VAN)")]
    VanPetrol,
    #[serde(rename = "OTHER")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TenFtDiesel => "10FT DIESEL",
            Category::FourteenFtDiesel => "14FT DIESEL",
            Category::VanDiesel => "VAN DIESEL (GOODS VAN)",
            Category::VanPetrol => "VAN PETROL (GOODS VAN)",
            Category::Other => "OTHER",
        }
    }

    /// Lenient parse for ingest: unknown labels land in `Other` rather
    /// than failing the row.
    pub fn parse(s: &str) -> Category {
        match s.trim().to_uppercase().as_str() {
            "10FT DIESEL" => Category::TenFtDiesel,
            "14FT DIESEL" => Category::FourteenFtDiesel,
            "VAN DIESEL (GOODS VAN)" | "VAN DIESEL" => Category::VanDiesel,
            "VAN PETROL (GOODS VAN)" | "VAN PETROL" => Category::VanPetrol,
            _ => Category::Other,
        }
    }
}

/// One raw listing row as it comes off a source: a single vehicle offered
/// for sale, before any aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    pub category: Category,
    pub vehicle: String,
    /// Registration year, kept as a string key ("2021").
    pub year: String,
    /// Estimated yearly depreciation in dollars.
    pub depreciation: u32,
}

/// Per-year price statistics for one vehicle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStats {
    pub lowest: u32,
    pub average: u32,
    pub units: u32,
}

/// Aggregated view of one (category, vehicle) pair within a snapshot.
/// `previous` and `diff` are back-filled against the prior snapshot when
/// the record is saved; until then `previous == total_units`, `diff == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub category: Category,
    pub vehicle: String,
    pub years: std::collections::BTreeMap<String, YearStats>,
    pub total_units: u32,
    pub previous: u32,
    pub diff: i64,
}

pub struct SourceResult {
    pub listings: Vec<RawListing>,
    pub diagnostics: Vec<String>,
}

impl SourceResult {
    pub fn empty() -> Self {
        SourceResult {
            listings: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

pub trait Source {
    fn name(&self) -> &'static str;
    fn available(&self, config: &Config) -> bool;
    fn collect(&self, config: &Config) -> Result<SourceResult, Box<dyn std::error::Error>>;
}
