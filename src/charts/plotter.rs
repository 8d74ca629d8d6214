//! Interactive Chart Plotter
//! Draws the dashboard charts with egui_plot and the egui painter.

use crate::analysis::{LexicalView, SentimentDistribution, WordCount};
use crate::charts::word_cloud::{layout_word_cloud, CloudOptions, PlacedWord};
use crate::charts::{palette_color, sentiment_color, ChartRenderer};
use crate::config::ChartStyle;
use crate::data::Sentiment;
use egui::{Align2, Color32, FontId, RichText};
use egui_plot::{Bar, BarChart, Plot};

const CHART_HEIGHT: f32 = 280.0;
const CLOUD_HEIGHT: f32 = 360.0;
const CLOUD_MIN_WIDTH: f32 = 200.0;
/// Canvas widths snap to multiples of this step.
const CLOUD_WIDTH_STEP: f32 = 64.0;

/// Canvas width used for the word cloud, given the available width.
fn cloud_canvas_width(available: f32) -> f32 {
    ((available / CLOUD_WIDTH_STEP).floor() * CLOUD_WIDTH_STEP).max(CLOUD_MIN_WIDTH)
}

/// Word cloud placement computed for one canvas size.
struct CloudCache {
    words: Vec<WordCount>,
    size: [u32; 2],
    placed: Vec<PlacedWord>,
}

/// Zoomable charts drawn straight into the UI.
#[derive(Default)]
pub struct InteractiveRenderer {
    cloud: Option<CloudCache>,
}

impl InteractiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for an integer tick, empty between categories.
    fn category_label(value: f64, labels: &[String]) -> String {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    fn draw_distribution(ui: &mut egui::Ui, distribution: &SentimentDistribution) {
        let labels: Vec<String> = Sentiment::ALL.iter().map(|s| s.label().to_string()).collect();

        let bars: Vec<Bar> = distribution
            .iter()
            .map(|(sentiment, count)| {
                Bar::new(sentiment.index() as f64, count as f64)
                    .name(sentiment.label())
                    .fill(sentiment_color(sentiment))
                    .width(0.6)
            })
            .collect();

        Plot::new("sentiment_distribution")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .include_x(-0.5)
            .include_x(2.5)
            .x_axis_label("Sentimen")
            .y_axis_label("Jumlah ulasan")
            .x_axis_formatter(move |mark, _range| Self::category_label(mark.value, &labels))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name("Sentimen")
                        .element_formatter(Box::new(|bar, _chart| {
                            format!("{}: {}", bar.name, bar.value)
                        })),
                );
            });
    }

    fn draw_top_words(ui: &mut egui::Ui, words: &[WordCount]) {
        if words.is_empty() {
            ui.label(RichText::new("No words to rank").color(Color32::GRAY));
            return;
        }

        // Highest count on top: row 0 is the bottom of the plot
        let n = words.len();
        let labels: Vec<String> = words.iter().rev().map(|w| w.word.clone()).collect();

        let bars: Vec<Bar> = words
            .iter()
            .enumerate()
            .map(|(rank, w)| {
                Bar::new((n - 1 - rank) as f64, w.count as f64)
                    .name(&w.word)
                    .fill(palette_color(0))
                    .width(0.7)
            })
            .collect();

        Plot::new("top_words")
            .height((n as f32 * 18.0).max(CHART_HEIGHT))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .x_axis_label("Frekuensi")
            .y_axis_formatter(move |mark, _range| Self::category_label(mark.value, &labels))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .name("Frekuensi")
                        .element_formatter(Box::new(|bar, _chart| {
                            format!("{}: {}", bar.name, bar.value)
                        })),
                );
            });
    }

    fn draw_word_cloud(&mut self, ui: &mut egui::Ui, words: &[WordCount]) {
        let width = cloud_canvas_width(ui.available_width());
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CLOUD_HEIGHT), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 6.0, Color32::WHITE);

        if words.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No words to show",
                FontId::proportional(16.0),
                Color32::GRAY,
            );
            return;
        }

        let size = [rect.width() as u32, rect.height() as u32];
        let stale = self
            .cloud
            .as_ref()
            .map_or(true, |c| c.size != size || c.words.as_slice() != words);

        if stale {
            let placed = layout_word_cloud(
                words,
                rect.width(),
                rect.height(),
                &CloudOptions::default(),
                |word, font_size| {
                    let galley = ui.fonts(|f| {
                        f.layout_no_wrap(
                            word.to_string(),
                            FontId::proportional(font_size),
                            Color32::BLACK,
                        )
                    });
                    (galley.size().x, galley.size().y)
                },
            );
            tracing::debug!(words = words.len(), placed = placed.len(), "word cloud laid out");
            self.cloud = Some(CloudCache {
                words: words.to_vec(),
                size,
                placed,
            });
        }

        if let Some(cloud) = &self.cloud {
            for word in &cloud.placed {
                painter.text(
                    rect.min + egui::vec2(word.rect.x, word.rect.y),
                    Align2::LEFT_TOP,
                    &word.word,
                    FontId::proportional(word.font_size),
                    palette_color(word.rank),
                );
            }
        }
    }
}

impl ChartRenderer for InteractiveRenderer {
    fn style(&self) -> ChartStyle {
        ChartStyle::Interactive
    }

    fn show_distribution(&mut self, ui: &mut egui::Ui, distribution: &SentimentDistribution) {
        Self::draw_distribution(ui, distribution);
    }

    fn show_lexical(&mut self, ui: &mut egui::Ui, lexical: &LexicalView) {
        ui.label(RichText::new("Word Cloud").size(14.0).strong());
        self.draw_word_cloud(ui, &lexical.cloud_words);

        ui.add_space(12.0);

        ui.label(
            RichText::new(format!("Top {} Words", lexical.top_words.len()))
                .size(14.0)
                .strong(),
        );
        Self::draw_top_words(ui, &lexical.top_words);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = vec!["Negatif".to_string(), "Netral".to_string()];
        assert_eq!(InteractiveRenderer::category_label(0.0, &labels), "Negatif");
        assert_eq!(InteractiveRenderer::category_label(1.0000001, &labels), "Netral");
        assert_eq!(InteractiveRenderer::category_label(0.5, &labels), "");
        assert_eq!(InteractiveRenderer::category_label(-1.0, &labels), "");
        assert_eq!(InteractiveRenderer::category_label(2.0, &labels), "");
    }

    #[test]
    fn test_cloud_width_is_stable_while_resizing() {
        let widths: Vec<f32> = (0..60).map(|px| cloud_canvas_width(770.0 + px as f32)).collect();
        assert!(widths.iter().all(|w| *w == 768.0 || *w == 832.0));
        assert_eq!(cloud_canvas_width(800.0), 768.0);
        assert_eq!(cloud_canvas_width(50.0), CLOUD_MIN_WIDTH);
        assert!(cloud_canvas_width(1000.0) <= 1000.0);
    }
}
