//! Chart Plotter Module
//! Interactive dashboard charts built on egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::view::{RankedEntry, ScatterPoint};

/// Accent color for single-series charts.
pub const ACCENT: Color32 = Color32::from_rgb(52, 152, 219); // Blue

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Horizontal ranked bars, best entry at the top.
    pub fn draw_top_followers(ui: &mut egui::Ui, entries: &[RankedEntry]) {
        let n = entries.len();
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new((n - 1 - i) as f64, entry.value)
                    .width(0.6)
                    .fill(ACCENT)
                    .name(&entry.label)
            })
            .collect();

        // Bars are placed bottom-up, so the label lookup is reversed.
        let mut y_labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
        y_labels.reverse();

        Plot::new("top_followers")
            .height(300.0)
            .allow_scroll(false)
            .x_axis_label("Followers")
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < y_labels.len() && (mark.value - idx as f64).abs() < 1e-6 {
                    y_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Followers"));
            });
    }

    /// Vertical ranked bars, palette-colored per influencer.
    pub fn draw_top_engagement(ui: &mut egui::Ui, entries: &[RankedEntry]) {
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(i as f64, entry.value)
                    .width(0.6)
                    .fill(PALETTE[i % PALETTE.len()])
                    .name(&entry.label)
            })
            .collect();

        let x_labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();

        Plot::new("top_engagement")
            .height(300.0)
            .allow_scroll(false)
            .y_axis_label("Engagement Rate (%)")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < x_labels.len() && (mark.value - idx as f64).abs() < 1e-6 {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Engagement"));
            });
    }

    /// Followers-vs-likes scatter over the whole filtered table.
    pub fn draw_followers_likes(ui: &mut egui::Ui, points: &[ScatterPoint]) {
        let plot_points: PlotPoints = points
            .iter()
            .map(|point| [point.followers, point.likes])
            .collect();

        Plot::new("followers_vs_likes")
            .height(300.0)
            .allow_scroll(false)
            .x_axis_label("Followers")
            .y_axis_label("Likes")
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(plot_points)
                        .radius(2.5)
                        .color(ACCENT.gamma_multiply(0.8))
                        .name("Influencers"),
                );
            });
    }
}
