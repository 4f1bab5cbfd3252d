use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::ScatterChart;
use crate::color::ColorMap;
use crate::data::model::Outcome;

const ROW_HEIGHT: f32 = 18.0;

/// Launches currently shown in the scatter, one row each.
pub fn selection_table(ui: &mut Ui, chart: &ScatterChart, booster_colors: &ColorMap) {
    TableBuilder::new(ui)
        .id_salt("selection_table")
        .striped(true)
        .vscroll(false)
        .resizable(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["Flight", "Launch Site", "Payload (kg)", "Booster", "Outcome"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, chart.points.len(), |mut row| {
                let p = &chart.points[row.index()];
                row.col(|ui| {
                    ui.label(p.flight_number.map_or_else(|| "–".to_string(), |n| n.to_string()));
                });
                row.col(|ui| {
                    ui.label(&p.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", p.payload_mass));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&p.booster_category)
                            .color(booster_colors.color_for(&p.booster_category)),
                    );
                });
                row.col(|ui| {
                    let outcome = Outcome::from_class(i64::from(p.class));
                    ui.label(outcome.map_or("?", Outcome::label));
                });
            });
        });
}
