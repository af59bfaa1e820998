//! TokBoard Main Application
//! Main window wiring the control panel, the data pipeline and the dashboard.

use anyhow::{Context, Result};
use egui::SidePanel;
use log::{info, warn};
use polars::prelude::DataFrame;
use std::path::Path;

use crate::data::{self, DataLoader};
use crate::gui::{ControlPanel, ControlPanelAction, Dashboard};
use crate::view;

/// Main application window.
pub struct TokBoardApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    dashboard: Dashboard,
}

impl TokBoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            dashboard: Dashboard::new(),
        }
    }

    /// Handle CSV file selection: run the whole ingest pipeline, then reset
    /// the filters to their inert defaults and render the first view.
    fn handle_browse_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        self.dashboard.clear();
        match self.loader.load_csv(&path) {
            Ok(df) => {
                let country_options = data::country_options(df);
                let followers_bounds = data::followers_bounds(df);
                let summary = format!("Loaded {} rows, {} columns", df.height(), df.width());
                self.control_panel
                    .set_source(path, country_options, followers_bounds);
                self.control_panel.set_status(&summary);
                self.recompute_view();
            }
            Err(err) => {
                warn!("CSV load failed: {err}");
                self.control_panel.clear_source();
                self.control_panel.set_status(&format!("Error: {err}"));
            }
        }
    }

    /// Re-run filtering and aggregation from the source table. Called on
    /// every filter interaction, mirroring the one-upload-one-recomputation
    /// model of the pipeline.
    fn recompute_view(&mut self) {
        let Some(df) = self.loader.get_dataframe() else {
            return;
        };

        let filters = self.control_panel.filter_state();
        match view::compute_view(df, &filters) {
            Ok(view) => {
                self.dashboard.set_view(view);
            }
            Err(err) => {
                warn!("view recomputation failed: {err}");
                self.control_panel.set_status(&format!("Error: {err}"));
            }
        }
    }

    /// Save the current filtered table as CSV via a file dialog.
    fn handle_export_csv(&mut self) {
        let Some(view) = self.dashboard.view.as_ref() else {
            self.control_panel.set_status("No data to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(data::EXPORT_FILE_NAME)
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::write_filtered_csv(&view.table, &path) {
            Ok(rows) => {
                info!("exported {} rows to {}", rows, path.display());
                self.control_panel
                    .set_status(&format!("Exported {rows} rows"));
            }
            Err(err) => {
                warn!("CSV export failed: {err:#}");
                self.control_panel.set_status(&format!("Error: {err:#}"));
            }
        }
    }

    fn write_filtered_csv(table: &DataFrame, path: &Path) -> Result<usize> {
        let bytes = data::to_csv_bytes(table).context("serializing filtered table")?;
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(table.height())
    }
}

impl eframe::App for TokBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::FiltersChanged => self.recompute_view(),
                        ControlPanelAction::ExportCsv => self.handle_export_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.show(ui);
        });
    }
}
