use std::collections::BTreeSet;
use std::fmt;

use super::bounds::PayloadBounds;
use super::error::DataLoadError;

// ---------------------------------------------------------------------------
// Canonical column names
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
/// Internal name of the payload column.
pub const COL_PAYLOAD: &str = "PayloadMass";
/// Name of the payload column as it appears in the source file.
pub const COL_PAYLOAD_SOURCE: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failed,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` value; anything but 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failed),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failed => 0,
            Outcome::Success => 1,
        }
    }

    /// Pie-slice label used for a single-site breakdown.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failed => "Failed",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kg, always finite and non-negative.
    pub payload_mass: f64,
    pub booster_category: String,
    pub outcome: Outcome,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    /// Convenience constructor for the four required attributes.
    pub fn new(
        site: impl Into<String>,
        payload_mass: f64,
        booster_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass,
            booster_category: booster_category.into(),
            outcome,
            flight_number: None,
            booster_version: None,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The immutable launch table with pre-computed indices.
///
/// Built once and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: BTreeSet<String>,
    booster_categories: BTreeSet<String>,
    bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Index the records. An empty table has no payload bounds and is refused.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        let bounds = PayloadBounds::of(&records).ok_or(DataLoadError::Empty)?;
        let sites = records.iter().map(|r| r.site.clone()).collect();
        let booster_categories = records
            .iter()
            .map(|r| r.booster_category.clone())
            .collect();

        Ok(LaunchDataset {
            records,
            sites,
            booster_categories,
            bounds,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Sorted set of distinct launch sites.
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.contains(site)
    }

    /// Sorted set of distinct booster version categories.
    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
