use serde::Serialize;

use crate::data::error::SelectionError;
use crate::data::filter::{pie_aggregation, scatter_selection, PayloadRange, SiteSelector};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Renderer-facing chart descriptions
// ---------------------------------------------------------------------------

/// Data, encoding and title of one chart, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(p) => &p.title,
            ChartSpec::Scatter(s) => &s.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Sorted by label.
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Column used for colour grouping.
    pub color_by: String,
    /// In dataset order.
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass: f64,
    pub class: u8,
    pub booster_category: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

pub fn pie_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Successful Launches by Site".to_string(),
        SiteSelector::Site(site) => format!("Success vs. Failed Launches for {site}"),
    }
}

pub fn scatter_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Payload vs. Launch Outcome for All Sites".to_string(),
        SiteSelector::Site(site) => format!("Payload vs. Launch Outcome for {site}"),
    }
}

/// Pie chart for an already validated selector.
pub fn build_pie(dataset: &LaunchDataset, selector: &SiteSelector) -> PieChart {
    let slices = pie_aggregation(dataset, selector)
        .into_iter()
        .map(|(label, count)| PieSlice { label, count })
        .collect();
    PieChart {
        title: pie_title(selector),
        slices,
    }
}

/// Scatter chart for an already validated selector and range.
pub fn build_scatter(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> ScatterChart {
    let points = scatter_selection(dataset, selector, range)
        .into_iter()
        .map(|r| ScatterPoint {
            payload_mass: r.payload_mass,
            class: r.outcome.class(),
            booster_category: r.booster_category.clone(),
            site: r.site.clone(),
            flight_number: r.flight_number,
        })
        .collect();
    ScatterChart {
        title: scatter_title(selector),
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "Launch Outcome".to_string(),
        color_by: "Booster Version Category".to_string(),
        points,
    }
}

// ---------------------------------------------------------------------------
// Callback contracts: raw control values in, chart out
// ---------------------------------------------------------------------------

/// Success pie for a raw dropdown value. Unknown sites are rejected.
pub fn pie_chart(dataset: &LaunchDataset, site: &str) -> Result<ChartSpec, SelectionError> {
    let selector = SiteSelector::parse(site, dataset)?;
    Ok(ChartSpec::Pie(build_pie(dataset, &selector)))
}

/// Payload/outcome scatter for a raw dropdown value and slider range.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &str,
    payload_range: [f64; 2],
) -> Result<ChartSpec, SelectionError> {
    let selector = SiteSelector::parse(site, dataset)?;
    let range = PayloadRange::try_from(payload_range)?;
    Ok(ChartSpec::Scatter(build_scatter(dataset, &selector, range)))
}
