use std::collections::BTreeMap;

use crate::bindings::{ChartTarget, ControlId};
use crate::data::filter::ALL_SITES;
use crate::data::model::LaunchDataset;

pub const HEADING: &str = "SpaceX Launch Records Dashboard";

// ---------------------------------------------------------------------------
// Widget descriptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub default: String,
    pub placeholder: String,
    pub searchable: bool,
}

impl DropdownSpec {
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Options whose label contains `query`, ignoring case. Empty query keeps all.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a DropdownOption> + 'a {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(move |o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderSpec {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: BTreeMap<i64, String>,
    pub default: [f64; 2],
}

impl RangeSliderSpec {
    /// Each mark with its position as a fraction of the slider track,
    /// `(pos - min) / (max - min)`, clamped to `[0, 1]`.
    pub fn mark_fractions(&self) -> Vec<(f64, &str)> {
        let span = self.max - self.min;
        self.marks
            .iter()
            .map(|(&pos, label)| {
                let fraction = if span > 0.0 {
                    ((pos as f64 - self.min) / span).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                (fraction, label.as_str())
            })
            .collect()
    }

    /// Move one handle, keeping `low ≤ high` and both inside `[min, max]`.
    ///
    /// The handle being dragged pushes against the other one rather than
    /// crossing it.
    pub fn clamp(&self, [low, high]: [f64; 2], moved_low: bool) -> [f64; 2] {
        let low = low.clamp(self.min, self.max);
        let high = high.clamp(self.min, self.max);
        if low <= high {
            [low, high]
        } else if moved_low {
            [high, high]
        } else {
            [low, low]
        }
    }
}

/// Static description of the page: one dropdown, one range slider, two graphs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub heading: String,
    pub site_dropdown: DropdownSpec,
    pub payload_slider: RangeSliderSpec,
    pub graphs: [ChartTarget; 2],
}

impl DashboardLayout {
    /// Derive the controls from the loaded data. Every dropdown value is a
    /// site that exists in `dataset`, plus `ALL`.
    pub fn build(dataset: &LaunchDataset, slider_step: f64, default_site: &str) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let bounds = dataset.payload_bounds();

        DashboardLayout {
            heading: HEADING.to_string(),
            site_dropdown: DropdownSpec {
                id: ControlId::SiteDropdown,
                options,
                default: default_site.to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            },
            payload_slider: RangeSliderSpec {
                id: ControlId::PayloadSlider,
                min: bounds.min,
                max: bounds.max,
                step: slider_step,
                marks: bounds.marks(),
                default: bounds.full_range(),
            },
            graphs: [ChartTarget::SuccessPie, ChartTarget::PayloadScatter],
        }
    }
}
