use std::collections::BTreeMap;
use std::fmt;

use super::error::SelectionError;
use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown value meaning "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Selection inputs
// ---------------------------------------------------------------------------

/// Which launch sites a chart covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelector {
    All,
    Site(String),
}

impl SiteSelector {
    /// Validate a raw dropdown value against the dataset's known sites.
    pub fn parse(value: &str, dataset: &LaunchDataset) -> Result<Self, SelectionError> {
        if value == ALL_SITES {
            Ok(SiteSelector::All)
        } else if dataset.has_site(value) {
            Ok(SiteSelector::Site(value.to_string()))
        } else {
            Err(SelectionError::UnknownSite {
                site: value.to_string(),
            })
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => f.write_str(ALL_SITES),
            SiteSelector::Site(site) => f.write_str(site),
        }
    }
}

/// Inclusive payload interval `[low, high]` in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, SelectionError> {
        if low > high || low.is_nan() || high.is_nan() {
            return Err(SelectionError::InvertedRange { low, high });
        }
        Ok(PayloadRange { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Both ends inclusive.
    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = SelectionError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        PayloadRange::new(low, high)
    }
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

/// Slice label → count for the success pie.
///
/// * `All`: successful launches only, grouped by site.
/// * `Site(s)`: every launch at `s`, grouped into "Success" / "Failed".
///   Only outcomes that actually occur get a label.
///
/// The counts always sum to the number of records that were grouped. A site
/// the dataset does not know simply matches nothing.
pub fn pie_aggregation(dataset: &LaunchDataset, selector: &SiteSelector) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    match selector {
        SiteSelector::All => {
            for r in dataset.records().iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(r.site.clone()).or_default() += 1;
            }
        }
        SiteSelector::Site(_) => {
            for r in dataset.records().iter().filter(|r| selector.matches(r)) {
                *counts.entry(r.outcome.label().to_string()).or_default() += 1;
            }
        }
    }
    counts
}

/// Records with payload in `range` (inclusive) at the selected site(s), in
/// dataset order.
pub fn scatter_selection<'a>(
    dataset: &'a LaunchDataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass) && selector.matches(r))
        .collect()
}
