use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use log::warn;

use crate::bindings::{CallbackRegistry, ChartTarget, ControlId, Dispatched, SelectionState};
use crate::chart::{ChartSpec, ScatterChart};
use crate::color::ColorMap;
use crate::data::error::SelectionError;
use crate::data::filter::{SiteSelector, ALL_SITES};
use crate::data::model::LaunchDataset;
use crate::layout::DashboardLayout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Shared read-only launch table.
    pub dataset: Arc<LaunchDataset>,

    /// File the dataset was loaded from.
    pub source: PathBuf,

    /// Controls derived from the dataset.
    pub layout: DashboardLayout,

    /// Current control values.
    pub selection: SelectionState,

    /// Control → handler wiring.
    pub registry: CallbackRegistry,

    /// Last successfully rendered spec per graph.
    pub charts: BTreeMap<ChartTarget, ChartSpec>,

    /// Colour per booster version category.
    pub booster_colors: ColorMap,

    /// Colour per launch site for the all-sites pie.
    pub site_colors: ColorMap,

    /// Text typed into the searchable dropdown.
    pub site_search: String,

    /// Slider step, kept to re-seed the layout on reload.
    pub slider_step: f64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Compose the dashboard around a loaded dataset and render both charts.
    ///
    /// `initial_site` must be `"ALL"` or a site present in the dataset.
    pub fn new(
        dataset: Arc<LaunchDataset>,
        source: PathBuf,
        slider_step: f64,
        initial_site: &str,
    ) -> Result<Self, SelectionError> {
        SiteSelector::parse(initial_site, &dataset)?;

        let layout = DashboardLayout::build(&dataset, slider_step, initial_site);
        let selection = SelectionState {
            site: initial_site.to_string(),
            payload_range: layout.payload_slider.default,
        };

        let mut state = AppState {
            booster_colors: ColorMap::new(dataset.booster_categories()),
            site_colors: ColorMap::new(dataset.sites()),
            dataset,
            source,
            layout,
            selection,
            registry: CallbackRegistry::dashboard(),
            charts: BTreeMap::new(),
            site_search: String::new(),
            slider_step,
            status_message: None,
        };
        state.render_all();
        Ok(state)
    }

    /// Swap in a freshly loaded dataset, resetting the controls.
    pub fn set_dataset(&mut self, dataset: Arc<LaunchDataset>, source: PathBuf) {
        self.layout = DashboardLayout::build(&dataset, self.slider_step, ALL_SITES);
        self.selection = SelectionState::initial(&dataset);
        self.booster_colors = ColorMap::new(dataset.booster_categories());
        self.site_colors = ColorMap::new(dataset.sites());
        self.dataset = dataset;
        self.source = source;
        self.site_search.clear();
        self.charts.clear();
        self.status_message = None;
        self.render_all();
    }

    /// Dropdown changed.
    pub fn set_site(&mut self, site: &str) {
        if self.selection.site == site {
            return;
        }
        self.selection.site = site.to_string();
        self.control_changed(ControlId::SiteDropdown);
    }

    /// Slider changed; the range is clamped to the slider bounds first.
    pub fn set_payload_range(&mut self, range: [f64; 2], moved_low: bool) {
        let range = self.layout.payload_slider.clamp(range, moved_low);
        if self.selection.payload_range == range {
            return;
        }
        self.selection.payload_range = range;
        self.control_changed(ControlId::PayloadSlider);
    }

    pub fn control_changed(&mut self, control: ControlId) {
        let results = self
            .registry
            .dispatch(control, &self.dataset, &self.selection);
        self.apply(results);
    }

    pub fn render_all(&mut self) {
        let results = self.registry.render_all(&self.dataset, &self.selection);
        self.apply(results);
    }

    /// Store successful renders; a failed handler keeps the previous chart.
    fn apply(&mut self, results: Dispatched) {
        let mut errors = Vec::new();
        for (target, result) in results {
            match result {
                Ok(spec) => {
                    self.charts.insert(target, spec);
                }
                Err(e) => {
                    warn!("{target}: {e}");
                    errors.push(format!("{target}: {e}"));
                }
            }
        }
        self.status_message = if errors.is_empty() {
            None
        } else {
            Some(errors.join("; "))
        };
    }

    pub fn chart(&self, target: ChartTarget) -> Option<&ChartSpec> {
        self.charts.get(&target)
    }

    /// The scatter currently on screen, if any.
    pub fn scatter(&self) -> Option<&ScatterChart> {
        match self.chart(ChartTarget::PayloadScatter)? {
            ChartSpec::Scatter(s) => Some(s),
            ChartSpec::Pie(_) => None,
        }
    }
}
