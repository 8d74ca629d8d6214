//! Review Dashboard - App Store Review Sentiment Viewer
//!
//! Loads a static export of mobile-app store reviews, labels each review's
//! sentiment from its star rating and shows the distribution, word frequencies
//! and a filterable review table in a desktop dashboard.

mod analysis;
mod charts;
mod config;
mod data;
mod gui;

use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use gui::ReviewDashboardApp;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE));
    tracing::info!(data_path = %config.data_path.display(), "starting review dashboard");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Review Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Review Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(ReviewDashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))
}
