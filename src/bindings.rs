use std::fmt;

use log::debug;

use crate::chart::{pie_chart, scatter_chart, ChartSpec};
use crate::data::error::SelectionError;
use crate::data::filter::ALL_SITES;
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Control values owned by the view
// ---------------------------------------------------------------------------

/// Current dropdown and slider values, read by handlers on each dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Raw dropdown value: `"ALL"` or a site name.
    pub site: String,
    pub payload_range: [f64; 2],
}

impl SelectionState {
    /// All sites, full payload range.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        SelectionState {
            site: ALL_SITES.to_string(),
            payload_range: dataset.payload_bounds().full_range(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn id(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartTarget {
    SuccessPie,
    PayloadScatter,
}

impl ChartTarget {
    pub fn id(self) -> &'static str {
        match self {
            ChartTarget::SuccessPie => "success-pie-chart",
            ChartTarget::PayloadScatter => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Subscription table
// ---------------------------------------------------------------------------

pub type Handler = fn(&LaunchDataset, &SelectionState) -> Result<ChartSpec, SelectionError>;

/// One chart output bound to the controls that feed it.
pub struct Subscription {
    pub target: ChartTarget,
    pub inputs: Vec<ControlId>,
    handler: Handler,
}

pub type Dispatched = Vec<(ChartTarget, Result<ChartSpec, SelectionError>)>;

/// Maps control changes to the handlers that must re-run.
///
/// Handlers run synchronously, in registration order, on the caller's thread.
#[derive(Default)]
pub struct CallbackRegistry {
    subscriptions: Vec<Subscription>,
}

impl CallbackRegistry {
    /// The dashboard wiring: dropdown → pie; dropdown + slider → scatter.
    pub fn dashboard() -> Self {
        let mut registry = CallbackRegistry::default();
        registry.subscribe(ChartTarget::SuccessPie, &[ControlId::SiteDropdown], |ds, sel| {
            pie_chart(ds, &sel.site)
        });
        registry.subscribe(
            ChartTarget::PayloadScatter,
            &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            |ds, sel| scatter_chart(ds, &sel.site, sel.payload_range),
        );
        registry
    }

    pub fn subscribe(&mut self, target: ChartTarget, inputs: &[ControlId], handler: Handler) {
        self.subscriptions.push(Subscription {
            target,
            inputs: inputs.to_vec(),
            handler,
        });
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Re-run every handler that listens to `changed`.
    pub fn dispatch(
        &self,
        changed: ControlId,
        dataset: &LaunchDataset,
        selection: &SelectionState,
    ) -> Dispatched {
        self.subscriptions
            .iter()
            .filter(|s| s.inputs.contains(&changed))
            .map(|s| {
                debug!("{} changed → re-rendering {}", changed.id(), s.target);
                (s.target, (s.handler)(dataset, selection))
            })
            .collect()
    }

    /// Run every handler once, as on first page render.
    pub fn render_all(&self, dataset: &LaunchDataset, selection: &SelectionState) -> Dispatched {
        self.subscriptions
            .iter()
            .map(|s| (s.target, (s.handler)(dataset, selection)))
            .collect()
    }
}
