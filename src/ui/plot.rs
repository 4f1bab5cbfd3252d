use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{PieChart, ScatterChart};
use crate::color::{generate_palette, outcome_color, ColorMap};

/// Arc resolution of a full circle.
const PIE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Success pie
// ---------------------------------------------------------------------------

/// Outline of one pie slice, from `start` sweeping clockwise by `sweep` radians.
pub fn slice_outline(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start - sweep * (i as f64 / steps as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

/// Render a pie chart. Slices start at 12 o'clock and run clockwise.
pub fn pie_plot(ui: &mut Ui, chart: &PieChart, site_colors: &ColorMap) {
    ui.vertical_centered(|ui: &mut Ui| ui.strong(&chart.title));

    let total = chart.total();
    if total == 0 {
        ui.label("No launches match the current selection.");
        return;
    }

    let fallback = generate_palette(chart.slices.len());

    Plot::new("success-pie-chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.1)
        .include_y(1.1)
        .height(280.0)
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for (i, slice) in chart.slices.iter().enumerate() {
                let share = slice.count as f64 / total as f64;
                let sweep = share * TAU;
                let color = outcome_color(&slice.label).unwrap_or_else(|| {
                    let c = site_colors.color_for(&slice.label);
                    if c == Color32::GRAY {
                        fallback[i]
                    } else {
                        c
                    }
                });

                let outline: PlotPoints = slice_outline(start, sweep).into_iter().collect();
                plot_ui.polygon(
                    Polygon::new(outline)
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", share * 100.0)).color(Color32::WHITE),
                ));

                start -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter
// ---------------------------------------------------------------------------

/// Render the scatter, one series per booster version category.
pub fn scatter_plot(ui: &mut Ui, chart: &ScatterChart, booster_colors: &ColorMap) {
    ui.vertical_centered(|ui: &mut Ui| ui.strong(&chart.title));

    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &chart.points {
        series
            .entry(p.booster_category.as_str())
            .or_default()
            .push([p.payload_mass, f64::from(p.class)]);
    }

    Plot::new("success-payload-scatter-chart")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .height(320.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{:.0} kg, class {:.0}", value.x, value.y)
            }
        })
        .show(ui, |plot_ui| {
            for (category, points) in series {
                let points: PlotPoints = points.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_outline_starts_at_centre_and_spans_sweep() {
        let pts = slice_outline(FRAC_PI_2, TAU / 4.0);
        assert_eq!(pts[0], [0.0, 0.0]);
        let first = pts[1];
        let last = *pts.last().unwrap();
        assert!((first[0] - 0.0).abs() < 1e-9 && (first[1] - 1.0).abs() < 1e-9);
        assert!((last[0] - 1.0).abs() < 1e-9 && last[1].abs() < 1e-9);
    }
}
