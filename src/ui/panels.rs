use std::sync::Arc;

use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, RichText, Sense, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Control panel – site dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the heading, the site dropdown and the payload range slider.
pub fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new(&state.layout.heading)
                .size(32.0)
                .color(Color32::from_rgb(0x50, 0x3d, 0x36)),
        );
    });
    ui.add_space(6.0);

    site_dropdown(ui, state);
    ui.add_space(8.0);
    payload_slider(ui, state);
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let spec = state.layout.site_dropdown.clone();
    let selected_text = spec
        .label_for(&state.selection.site)
        .unwrap_or(&spec.placeholder)
        .to_string();

    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt(spec.id.id())
        .selected_text(selected_text)
        .width(ui.available_width().min(320.0))
        .show_ui(ui, |ui: &mut Ui| {
            if spec.searchable {
                ui.add(
                    egui::TextEdit::singleline(&mut state.site_search)
                        .hint_text(spec.placeholder.as_str()),
                );
                ui.separator();
            }
            for option in spec.search(&state.site_search) {
                let is_selected = state.selection.site == option.value;
                if ui.selectable_label(is_selected, &option.label).clicked() {
                    picked = Some(option.value.clone());
                }
            }
        });

    if let Some(site) = picked {
        state.site_search.clear();
        state.set_site(&site);
    }
}

fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let spec = state.layout.payload_slider.clone();
    let [mut low, mut high] = state.selection.payload_range;

    ui.label(RichText::new("Payload range (Kg):").size(16.0));

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, spec.min..=spec.max)
                .step_by(spec.step)
                .text("from"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, spec.min..=spec.max)
                .step_by(spec.step)
                .text("to"),
        )
        .changed();

    // Tick labels under the track, each at its payload position.
    let track = vec2(ui.spacing().slider_width, 14.0);
    let (rect, _) = ui.allocate_exact_size(track, Sense::hover());
    let color = ui.visuals().weak_text_color();
    for (fraction, label) in spec.mark_fractions() {
        let x = rect.left() + rect.width() * fraction as f32;
        ui.painter().text(
            pos2(x, rect.top()),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(11.0),
            color,
        );
    }

    if low_changed || high_changed {
        state.set_payload_range([low, high], low_changed);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let selected = state.scatter().map_or(0, |s| s.points.len());
        ui.label(format!(
            "{} launches loaded, {} in payload selection",
            state.dataset.len(),
            selected
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(Arc::new(dataset), path),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart specs")
        .set_file_name("charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = crate::export::export_charts(&path, &state.charts) {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
