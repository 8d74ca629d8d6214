//! Charts module - Chart rendering
//!
//! Both renderers implement [`ChartRenderer`]; the dashboard picks one when it
//! is composed and never knows which backend draws the charts.

mod plotter;
mod renderer;
pub mod word_cloud;

pub use plotter::InteractiveRenderer;
pub use renderer::StaticChartRenderer;

use crate::analysis::{LexicalView, SentimentDistribution};
use crate::config::ChartStyle;
use crate::data::Sentiment;
use egui::Color32;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

impl ChartError {
    pub(crate) fn draw<E: std::fmt::Display>(e: E) -> Self {
        ChartError::Draw(e.to_string())
    }
}

/// Drawing capabilities the dashboard needs from a chart backend.
pub trait ChartRenderer {
    fn style(&self) -> ChartStyle;

    /// Bar chart of review counts per sentiment.
    fn show_distribution(&mut self, ui: &mut egui::Ui, distribution: &SentimentDistribution);

    /// Word cloud and top-words bar chart.
    fn show_lexical(&mut self, ui: &mut egui::Ui, lexical: &LexicalView);
}

/// Build the renderer for `style`.
pub fn renderer_for(style: ChartStyle) -> Box<dyn ChartRenderer> {
    match style {
        ChartStyle::Interactive => Box::new(InteractiveRenderer::new()),
        ChartStyle::Static => Box::new(StaticChartRenderer::new()),
    }
}

/// Color palette for words
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

pub fn sentiment_color(sentiment: Sentiment) -> Color32 {
    match sentiment {
        Sentiment::Negative => Color32::from_rgb(220, 53, 69),
        Sentiment::Neutral => Color32::from_rgb(255, 193, 7),
        Sentiment::Positive => Color32::from_rgb(40, 167, 69),
    }
}

pub fn palette_color(rank: usize) -> Color32 {
    PALETTE[rank % PALETTE.len()]
}
