//! Country Pie Chart
//! egui_plot has no pie type, so slices are painter-drawn arc fans with a
//! legend beside them.

use egui::{Sense, Shape, Stroke, Vec2};
use std::f32::consts::TAU;

use super::plotter::PALETTE;

/// Slices drawn individually before the tail is grouped into "Other" to keep
/// the legend readable.
const MAX_SLICES: usize = 9;

const OTHER_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 139, 150);

pub fn draw_country_pie(ui: &mut egui::Ui, counts: &[(String, u32)], size: f32) {
    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        ui.label("No rows match the current filters");
        return;
    }

    let mut slices: Vec<(String, u32)> = counts.iter().take(MAX_SLICES).cloned().collect();
    let tail: u32 = counts.iter().skip(MAX_SLICES).map(|(_, count)| count).sum();
    if tail > 0 {
        slices.push(("Other".to_string(), tail));
    }

    let slice_color = |i: usize, name: &str| {
        if name == "Other" {
            OTHER_COLOR
        } else {
            PALETTE[i % PALETTE.len()]
        }
    };

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.48;
        let separator = Stroke::new(1.0, ui.visuals().panel_fill);

        // Start at twelve o'clock and sweep clockwise.
        let mut start = -TAU / 4.0;
        for (i, (name, count)) in slices.iter().enumerate() {
            let sweep = *count as f32 / total as f32 * TAU;
            let steps = ((sweep / TAU * 64.0).ceil() as usize).max(2);

            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for step in 0..=steps {
                let angle = start + sweep * step as f32 / steps as f32;
                points.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
            }
            painter.add(Shape::convex_polygon(
                points,
                slice_color(i, name),
                separator,
            ));
            start += sweep;
        }

        ui.add_space(10.0);

        ui.vertical(|ui| {
            for (i, (name, count)) in slices.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (square, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                    ui.painter().rect_filled(square, 2.0, slice_color(i, name));
                    let pct = *count as f32 / total as f32 * 100.0;
                    ui.label(format!("{name}: {count} ({pct:.1}%)"));
                });
            }
        });
    });
}
