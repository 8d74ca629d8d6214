//! Control Panel Widget
//! Left side panel with the data source, chart style and load status.

use crate::config::ChartStyle;
use crate::data::ReviewTable;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Summary of the loaded table shown under the data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSummary {
    pub rows_read: usize,
    pub reviews: usize,
    pub skipped: usize,
    pub span: Option<String>,
}

impl TableSummary {
    pub fn from_table(table: &ReviewTable) -> Self {
        Self {
            rows_read: table.report().rows_read,
            reviews: table.len(),
            skipped: table.report().skipped,
            span: table.time_span().map(|(from, to)| {
                format!("{} → {}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
            }),
        }
    }
}

/// Left side control panel with file selection and rendering controls.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub chart_style: ChartStyle,
    pub summary: Option<TableSummary>,
    pub status: String,
    pub busy: bool,
}

impl ControlPanel {
    pub fn new(chart_style: ChartStyle) -> Self {
        Self {
            csv_path: None,
            chart_style,
            summary: None,
            status: "Ready".to_string(),
            busy: false,
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📱 Review Dashboard")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Store review sentiment")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = self
                    .csv_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file loaded".to_string());

                ui.label(RichText::new(&path_text).size(12.0).color(
                    if self.csv_path.is_some() {
                        ui.visuals().text_color()
                    } else {
                        Color32::GRAY
                    },
                ));

                ui.add_space(4.0);
                ui.add_enabled_ui(!self.busy, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                        if ui
                            .add_enabled(self.csv_path.is_some(), egui::Button::new("🔄 Reload"))
                            .clicked()
                        {
                            action = ControlPanelAction::Reload;
                        }
                    });
                });
            });

        if let Some(summary) = &self.summary {
            ui.add_space(8.0);
            egui::Grid::new("table_summary")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Rows read:");
                    ui.label(summary.rows_read.to_string());
                    ui.end_row();

                    ui.label("Reviews:");
                    ui.label(summary.reviews.to_string());
                    ui.end_row();

                    ui.label("Skipped:");
                    ui.label(summary.skipped.to_string());
                    ui.end_row();

                    if let Some(span) = &summary.span {
                        ui.label("Period:");
                        ui.label(span);
                        ui.end_row();
                    }
                });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Chart Style Section =====
        ui.label(RichText::new("⚙️ Chart Style").size(14.0).strong());
        ui.add_space(5.0);

        let before = self.chart_style;
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.chart_style, ChartStyle::Interactive, "Interactive");
            ui.radio_value(&mut self.chart_style, ChartStyle::Static, "Static");
        });
        if self.chart_style != before {
            action = ControlPanelAction::ChartStyleChanged(self.chart_style);
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        if self.busy {
            ui.add(egui::Spinner::new());
        }

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Reload,
    ChartStyleChanged(ChartStyle),
}
