//! Control Panel Widget
//! Left side panel with upload, filter and export controls.

use egui::{Color32, RichText, ScrollArea};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::data::FilterState;

/// Left side control panel. Filter selections live here as plain widget
/// state; a [`FilterState`] is rebuilt from them on every interaction.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    /// Distinct countries offered by the current upload.
    pub country_options: Vec<String>,
    pub selected_countries: Vec<bool>,
    /// Observed follower bounds of the source table; also the slider limits.
    pub followers_bounds: Option<(f64, f64)>,
    pub followers_min: f64,
    pub followers_max: f64,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            csv_path: None,
            country_options: Vec::new(),
            selected_countries: Vec::new(),
            followers_bounds: None,
            followers_min: 0.0,
            followers_max: 0.0,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset filter widgets for a freshly loaded table.
    pub fn set_source(
        &mut self,
        path: PathBuf,
        country_options: Vec<String>,
        followers_bounds: Option<(f64, f64)>,
    ) {
        self.csv_path = Some(path);
        self.selected_countries = vec![false; country_options.len()];
        self.country_options = country_options;
        self.followers_bounds = followers_bounds;
        if let Some((lo, hi)) = followers_bounds {
            self.followers_min = lo;
            self.followers_max = hi;
        }
        self.export_enabled = true;
    }

    /// Drop all source-dependent state after a failed load.
    pub fn clear_source(&mut self) {
        self.csv_path = None;
        self.country_options.clear();
        self.selected_countries.clear();
        self.followers_bounds = None;
        self.export_enabled = false;
    }

    /// Build the filter predicates from the current widget state. The full
    /// slider range is the inert default, so it maps to "no restriction".
    pub fn filter_state(&self) -> FilterState {
        let countries: BTreeSet<String> = self
            .country_options
            .iter()
            .zip(&self.selected_countries)
            .filter(|(_, &selected)| selected)
            .map(|(country, _)| country.clone())
            .collect();

        let followers = match self.followers_bounds {
            Some((lo, hi)) if (self.followers_min, self.followers_max) != (lo, hi) => {
                Some((self.followers_min, self.followers_max))
            }
            _ => None,
        };

        FilterState {
            countries,
            followers,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;
        let mut filters_changed = false;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🔥 TokBoard")
                    .size(22.0)
                    .color(Color32::from_rgb(255, 99, 71)),
            );
            ui.label(
                RichText::new("Influencer Analytics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filters Section =====
        ui.label(RichText::new("🔎 Filters").size(14.0).strong());
        ui.add_space(8.0);

        if !self.country_options.is_empty() {
            ui.label("Country:");
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(5.0)
                .show(ui, |ui| {
                    ScrollArea::vertical()
                        .max_height(140.0)
                        .id_salt("country_list")
                        .show(ui, |ui| {
                            for (i, country) in self.country_options.iter().enumerate() {
                                if i < self.selected_countries.len()
                                    && ui
                                        .checkbox(&mut self.selected_countries[i], country)
                                        .changed()
                                {
                                    filters_changed = true;
                                }
                            }
                        });
                });

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.small_button("Select All").clicked() {
                    self.selected_countries.iter_mut().for_each(|v| *v = true);
                    filters_changed = true;
                }
                if ui.small_button("Clear All").clicked() {
                    self.selected_countries.iter_mut().for_each(|v| *v = false);
                    filters_changed = true;
                }
            });
            ui.add_space(10.0);
        }

        if let Some((lo, hi)) = self.followers_bounds {
            ui.label("Followers Range:");
            let min_response =
                ui.add(egui::Slider::new(&mut self.followers_min, lo..=hi).integer().text("Min"));
            if min_response.changed() {
                if self.followers_min > self.followers_max {
                    self.followers_max = self.followers_min;
                }
                filters_changed = true;
            }
            let max_response =
                ui.add(egui::Slider::new(&mut self.followers_max, lo..=hi).integer().text("Max"));
            if max_response.changed() {
                if self.followers_max < self.followers_min {
                    self.followers_min = self.followers_max;
                }
                filters_changed = true;
            }
        }

        if self.country_options.is_empty() && self.followers_bounds.is_none() {
            let hint = if self.csv_path.is_some() {
                "No filterable columns in this file"
            } else {
                "Load a CSV to enable filters"
            };
            ui.label(RichText::new(hint).size(11.0).color(Color32::GRAY));
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button =
                    egui::Button::new(RichText::new("⬇ Download Filtered Data").size(14.0))
                        .min_size(egui::vec2(200.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportCsv;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        if action == ControlPanelAction::None && filters_changed {
            action = ControlPanelAction::FiltersChanged;
        }
        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    FiltersChanged,
    ExportCsv,
}
