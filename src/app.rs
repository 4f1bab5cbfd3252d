use eframe::egui::{self, ScrollArea, Ui};

use crate::bindings::ChartTarget;
use crate::chart::ChartSpec;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site and payload controls ----
        egui::SidePanel::left("control_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::controls(ui, &mut self.state);
            });

        // ---- Central panel: graphs in layout order ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for target in self.state.layout.graphs {
                        graph(ui, &self.state, target);
                        ui.separator();
                    }
                    if let Some(scatter) = self.state.scatter() {
                        egui::CollapsingHeader::new("Selected launches")
                            .default_open(false)
                            .show(ui, |ui: &mut Ui| {
                                table::selection_table(ui, scatter, &self.state.booster_colors);
                            });
                    }
                });
        });
    }
}

/// Draw whatever spec the bindings last produced for `target`.
fn graph(ui: &mut Ui, state: &AppState, target: ChartTarget) {
    match state.chart(target) {
        Some(ChartSpec::Pie(pie)) => plot::pie_plot(ui, pie, &state.site_colors),
        Some(ChartSpec::Scatter(scatter)) => {
            plot::scatter_plot(ui, scatter, &state.booster_colors)
        }
        None => {
            ui.label(format!("{target}: nothing to show"));
        }
    }
}
