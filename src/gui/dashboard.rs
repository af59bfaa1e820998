//! Dashboard Widget
//! Central scrollable panel: KPI row, chart cards and the data table.

use egui::{Color32, RichText, ScrollArea};
use polars::prelude::*;

use crate::charts::{draw_country_pie, ChartPlotter};
use crate::data::{self, COL_FOLLOWERS, ENGAGEMENT_RATE};
use crate::view::ViewModel;

const CARD_SPACING: f32 = 15.0;
const TABLE_PREVIEW_ROWS: usize = 100;

/// Scrollable dashboard area fed by the current [`ViewModel`]. Shows an
/// upload prompt until the first successful load.
pub struct Dashboard {
    pub view: Option<ViewModel>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self { view: None }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.view = None;
    }

    pub fn set_view(&mut self, view: ViewModel) {
        self.view = Some(view);
    }

    /// Draw the dashboard for the current view, or the idle prompt.
    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(view) = &self.view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("📂 Upload a CSV file to get started").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_kpi_row(ui, view);
                ui.add_space(CARD_SPACING);

                if let Some(entries) = &view.top_followers {
                    Self::chart_card(ui, "🏆 Top 10 Influencers by Followers", |ui| {
                        if entries.is_empty() {
                            ui.label("No rows match the current filters");
                        } else {
                            ChartPlotter::draw_top_followers(ui, entries);
                        }
                    });
                }

                if let Some(entries) = &view.top_engagement {
                    Self::chart_card(ui, "📈 Top 10 Engagement Rate", |ui| {
                        if entries.is_empty() {
                            ui.label("No rows match the current filters");
                        } else {
                            ChartPlotter::draw_top_engagement(ui, entries);
                        }
                    });
                }

                if let Some(counts) = &view.country_counts {
                    Self::chart_card(ui, "🌍 Influencers by Country", |ui| {
                        draw_country_pie(ui, counts, 260.0);
                    });
                }

                if let Some(points) = &view.followers_vs_likes {
                    Self::chart_card(ui, "📊 Followers vs Likes", |ui| {
                        if points.is_empty() {
                            ui.label("No rows match the current filters");
                        } else {
                            ChartPlotter::draw_followers_likes(ui, points);
                        }
                    });
                }

                Self::chart_card(ui, "📄 Full Dataset", |ui| {
                    Self::draw_table(ui, &view.table);
                });
            });
    }

    /// KPI cards, present only when the backing column survived ingestion.
    fn draw_kpi_row(ui: &mut egui::Ui, view: &ViewModel) {
        let kpis = &view.kpis;
        ui.horizontal(|ui| {
            Self::kpi_card(ui, "Total Influencers", kpis.influencer_count.to_string());

            if data::has_numeric_column(&view.table, COL_FOLLOWERS) {
                let total = kpis.total_followers.map(thousands);
                Self::kpi_card(ui, "Total Followers", unwrap_kpi(total));
                let avg = kpis.avg_followers.map(thousands);
                Self::kpi_card(ui, "Average Followers", unwrap_kpi(avg));
            }

            if data::has_numeric_column(&view.table, ENGAGEMENT_RATE) {
                let avg = kpis.avg_engagement.map(|v| format!("{v:.2}%"));
                Self::kpi_card(ui, "Avg Engagement Rate", unwrap_kpi(avg));
            }
        });
    }

    fn kpi_card(ui: &mut egui::Ui, label: &str, value: String) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(160.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(20.0).strong());
                });
            });
        ui.add_space(8.0);
    }

    fn chart_card(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(8.0);
                    body(ui);
                });
            });
        ui.add_space(CARD_SPACING);
    }

    /// First rows of the filtered table in a striped grid.
    fn draw_table(ui: &mut egui::Ui, table: &DataFrame) {
        if table.height() == 0 {
            ui.label("No rows match the current filters");
            return;
        }

        let preview_rows = table.height().min(TABLE_PREVIEW_ROWS);

        ScrollArea::horizontal().id_salt("data_table").show(ui, |ui| {
            egui::Grid::new("full_dataset")
                .striped(true)
                .min_col_width(80.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for col in table.get_columns() {
                        ui.label(RichText::new(col.name().as_str()).strong().size(12.0));
                    }
                    ui.end_row();

                    for row in 0..preview_rows {
                        for col in table.get_columns() {
                            ui.label(RichText::new(cell_text(col, row)).size(11.0));
                        }
                        ui.end_row();
                    }
                });
        });

        if preview_rows < table.height() {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "Showing first {} of {} rows",
                    preview_rows,
                    table.height()
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        }
    }
}

fn cell_text(col: &Column, row: usize) -> String {
    match col.get(row) {
        Ok(AnyValue::Null) | Err(_) => String::new(),
        Ok(value) => value.to_string().trim_matches('"').to_string(),
    }
}

fn unwrap_kpi(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Integer formatting with thousands separators, mirroring the KPI style of
/// the summary row.
fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0.0 {
        format!("-{out}")
    } else {
        out
    }
}
