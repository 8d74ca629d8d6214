//! Chart Viewer Widget
//! Dashboard tab: sentiment distribution and lexical views through the active renderer.

use crate::analysis::{LexicalView, SentimentDistribution};
use crate::charts::ChartRenderer;
use crate::config::ChartStyle;
use crate::data::Sentiment;
use egui::{RichText, ScrollArea};

const SECTION_SPACING: f32 = 15.0;

/// Scrollable dashboard. Owns the chart renderer chosen at composition time.
pub struct ChartViewer {
    renderer: Box<dyn ChartRenderer>,
    distribution: Option<SentimentDistribution>,
    lexical: Option<LexicalView>,
}

impl ChartViewer {
    pub fn new(renderer: Box<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            distribution: None,
            lexical: None,
        }
    }

    pub fn style(&self) -> ChartStyle {
        self.renderer.style()
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn ChartRenderer>) {
        if renderer.style() == self.style() {
            return;
        }
        tracing::info!(style = ?renderer.style(), "chart renderer switched");
        self.renderer = renderer;
    }

    /// Replace the views after a (re)load
    pub fn set_views(&mut self, distribution: SentimentDistribution, lexical: LexicalView) {
        self.distribution = Some(distribution);
        self.lexical = Some(lexical);
    }

    pub fn clear(&mut self) {
        self.distribution = None;
        self.lexical = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let (Some(distribution), Some(lexical)) = (&self.distribution, &self.lexical) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("📱 Review Sentiment Dashboard");
                ui.add_space(SECTION_SPACING);

                ui.label(RichText::new("Sentiment Distribution").size(16.0).strong());
                ui.horizontal(|ui| {
                    for sentiment in Sentiment::ALL {
                        ui.label(format!(
                            "{}: {} ({:.1}%)",
                            sentiment,
                            distribution.count(sentiment),
                            distribution.percentage(sentiment)
                        ));
                        ui.add_space(10.0);
                    }
                });
                self.renderer.show_distribution(ui, distribution);

                ui.add_space(SECTION_SPACING);
                ui.separator();
                ui.add_space(SECTION_SPACING);

                ui.label(RichText::new("Words in Reviews (without stopwords)").size(16.0).strong());
                self.renderer.show_lexical(ui, lexical);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::renderer_for;

    #[test]
    fn test_switch_renderer_keeps_views() {
        let mut viewer = ChartViewer::new(renderer_for(ChartStyle::Interactive));
        viewer.set_views(SentimentDistribution::from_counts([1, 2, 3]), LexicalView::default());

        viewer.set_renderer(renderer_for(ChartStyle::Static));

        assert_eq!(viewer.style(), ChartStyle::Static);
        assert_eq!(viewer.distribution.map(|d| d.total()), Some(6));
    }
}
