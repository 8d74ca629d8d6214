//! Static Chart Renderer
//! Renders the dashboard charts to RGB bitmaps with plotters.
//!
//! Bitmaps are shown as egui textures and re-rendered only when their input
//! changes. Each chart can be saved as a PNG file.

use crate::analysis::{LexicalView, SentimentDistribution, WordCount};
use crate::charts::word_cloud::{estimate_text_size, layout_word_cloud, CloudOptions};
use crate::charts::{palette_color, sentiment_color, ChartError, ChartRenderer};
use crate::config::ChartStyle;
use crate::data::Sentiment;
use egui::{Color32, RichText, TextureHandle, TextureOptions};
use plotters::prelude::*;
use std::path::Path;

const FONT: &str = "sans-serif";

/// An RGB8 image buffer.
#[derive(Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Bitmap {
    fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgb: vec![255; (width * height * 3) as usize],
        }
    }

    pub fn save_png(&self, path: &Path) -> Result<(), ChartError> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.rgb.clone())
            .ok_or_else(|| ChartError::Draw("bitmap buffer has the wrong size".to_string()))?;
        img.save(path)?;
        Ok(())
    }

    fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgb([self.width as usize, self.height as usize], &self.rgb)
    }
}

/// A rendered chart and the input it was rendered from.
struct CachedChart<K> {
    key: K,
    bitmap: Bitmap,
    texture: TextureHandle,
}

/// Bitmap charts rendered with plotters.
#[derive(Default)]
pub struct StaticChartRenderer {
    distribution: Option<CachedChart<SentimentDistribution>>,
    cloud: Option<CachedChart<Vec<WordCount>>>,
    top_words: Option<CachedChart<Vec<WordCount>>>,
    last_error: Option<String>,
}

fn rgb(color: Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

/// Upper bound of a count axis with some headroom.
fn axis_max(max_count: usize) -> u32 {
    ((max_count as f64 * 1.15).ceil() as u32).max(1)
}

impl StaticChartRenderer {
    pub const DISTRIBUTION_SIZE: (u32, u32) = (800, 400);
    pub const CLOUD_SIZE: (u32, u32) = (800, 400);
    pub const TOP_WORDS_SIZE: (u32, u32) = (800, 520);

    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical bar chart of review counts per sentiment.
    pub fn render_distribution(
        distribution: &SentimentDistribution,
        width: u32,
        height: u32,
    ) -> Result<Bitmap, ChartError> {
        let mut bitmap = Bitmap::blank(width, height);
        {
            let root = BitMapBackend::with_buffer(&mut bitmap.rgb, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(ChartError::draw)?;

            let mut chart = ChartBuilder::on(&root)
                .caption("Distribusi Sentimen", (FONT, 22))
                .margin(15)
                .x_label_area_size(35)
                .y_label_area_size(50)
                .build_cartesian_2d(
                    (0u32..Sentiment::ALL.len() as u32).into_segmented(),
                    0u32..axis_max(distribution.max_count()),
                )
                .map_err(ChartError::draw)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .y_desc("Jumlah ulasan")
                .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                    SegmentValue::CenterOf(i) => Sentiment::ALL
                        .get(*i as usize)
                        .map(|s| s.label().to_string())
                        .unwrap_or_default(),
                    _ => String::new(),
                })
                .draw()
                .map_err(ChartError::draw)?;

            for (sentiment, count) in distribution.iter() {
                chart
                    .draw_series(
                        Histogram::vertical(&chart)
                            .style(rgb(sentiment_color(sentiment)).filled())
                            .margin(30)
                            .data(std::iter::once((sentiment.index() as u32, count as u32))),
                    )
                    .map_err(ChartError::draw)?;
            }

            root.present().map_err(ChartError::draw)?;
        }
        Ok(bitmap)
    }

    /// Horizontal bar chart, most frequent word on top.
    pub fn render_top_words(words: &[WordCount], width: u32, height: u32) -> Result<Bitmap, ChartError> {
        let mut bitmap = Bitmap::blank(width, height);
        {
            let root = BitMapBackend::with_buffer(&mut bitmap.rgb, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(ChartError::draw)?;

            let n = words.len() as u32;
            if n == 0 {
                root.draw(&Text::new("Tidak ada kata", (20, 20), (FONT, 18)))
                    .map_err(ChartError::draw)?;
            } else {
                Self::draw_top_words(&root, words)?;
            }
            root.present().map_err(ChartError::draw)?;
        }
        Ok(bitmap)
    }

    fn draw_top_words(
        root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
        words: &[WordCount],
    ) -> Result<(), ChartError> {
        let n = words.len() as u32;
        let max_count = words.iter().map(|w| w.count).max().unwrap_or(0);

        let mut chart = ChartBuilder::on(root)
            .caption(format!("{} Kata Paling Umum", words.len()), (FONT, 22))
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(110)
            .build_cartesian_2d(0u32..axis_max(max_count), (0u32..n).into_segmented())
            .map_err(ChartError::draw)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc("Frekuensi")
            .y_labels(words.len())
            .y_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) if *i < n => words[(n - 1 - *i) as usize].word.clone(),
                _ => String::new(),
            })
            .draw()
            .map_err(ChartError::draw)?;

        chart
            .draw_series(
                Histogram::horizontal(&chart)
                    .style(rgb(palette_color(0)).filled())
                    .margin(3)
                    .data(
                        words
                            .iter()
                            .enumerate()
                            .map(|(rank, w)| (n - 1 - rank as u32, w.count as u32)),
                    ),
            )
            .map_err(ChartError::draw)?;
        Ok(())
    }

    /// Word cloud with font size proportional to frequency.
    pub fn render_word_cloud(words: &[WordCount], width: u32, height: u32) -> Result<Bitmap, ChartError> {
        let mut bitmap = Bitmap::blank(width, height);
        {
            let root = BitMapBackend::with_buffer(&mut bitmap.rgb, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(ChartError::draw)?;

            let placed = layout_word_cloud(
                words,
                width as f32,
                height as f32,
                &CloudOptions::default(),
                |word, font_size| {
                    root.estimate_text_size(word, &TextStyle::from((FONT, font_size as f64)))
                        .map(|(w, h)| (w as f32, h as f32))
                        .unwrap_or_else(|_| estimate_text_size(word, font_size))
                },
            );

            for word in &placed {
                let style = (FONT, word.font_size as f64)
                    .into_font()
                    .color(&rgb(palette_color(word.rank)));
                root.draw(&Text::new(
                    word.word.clone(),
                    (word.rect.x as i32, word.rect.y as i32),
                    style,
                ))
                .map_err(ChartError::draw)?;
            }

            root.present().map_err(ChartError::draw)?;
        }
        Ok(bitmap)
    }

    /// Reuse `slot` when its key matches, otherwise render and upload a new texture.
    fn refresh<K, F>(
        ctx: &egui::Context,
        slot: &mut Option<CachedChart<K>>,
        key: &K,
        name: &str,
        render: F,
    ) -> Result<(), ChartError>
    where
        K: Clone + PartialEq,
        F: FnOnce() -> Result<Bitmap, ChartError>,
    {
        if slot.as_ref().is_some_and(|c| &c.key == key) {
            return Ok(());
        }
        let bitmap = render()?;
        let texture = ctx.load_texture(name, bitmap.to_color_image(), TextureOptions::LINEAR);
        tracing::debug!(chart = name, width = bitmap.width, height = bitmap.height, "rendered static chart");
        *slot = Some(CachedChart {
            key: key.clone(),
            bitmap,
            texture,
        });
        Ok(())
    }

    fn show_cached<K>(
        ui: &mut egui::Ui,
        slot: &Option<CachedChart<K>>,
        file_name: &str,
        last_error: &mut Option<String>,
    ) {
        let Some(chart) = slot else {
            return;
        };

        let avail = ui.available_width();
        let tex_size = chart.texture.size_vec2();
        let scale = (avail / tex_size.x).min(1.0);
        ui.image((chart.texture.id(), tex_size * scale));

        if ui.small_button("💾 Save PNG").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG Image", &["png"])
                .set_file_name(file_name)
                .save_file()
            {
                match chart.bitmap.save_png(&path) {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), "chart exported");
                        if let Err(e) = open::that(&path) {
                            tracing::warn!(error = %e, "could not open exported chart");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "chart export failed");
                        *last_error = Some(e.to_string());
                    }
                }
            }
        }
    }

    fn show_error(ui: &mut egui::Ui, error: &ChartError) {
        ui.label(RichText::new(format!("Error: {}", error)).color(Color32::from_rgb(220, 53, 69)));
    }

    fn show_last_error(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.last_error {
            ui.label(RichText::new(error).size(11.0).color(Color32::from_rgb(220, 53, 69)));
        }
    }
}

impl ChartRenderer for StaticChartRenderer {
    fn style(&self) -> ChartStyle {
        ChartStyle::Static
    }

    fn show_distribution(&mut self, ui: &mut egui::Ui, distribution: &SentimentDistribution) {
        let (w, h) = Self::DISTRIBUTION_SIZE;
        let ctx = ui.ctx().clone();
        match Self::refresh(&ctx, &mut self.distribution, distribution, "distribution", || {
            Self::render_distribution(distribution, w, h)
        }) {
            Ok(()) => Self::show_cached(ui, &self.distribution, "distribusi_sentimen.png", &mut self.last_error),
            Err(e) => Self::show_error(ui, &e),
        }
        self.show_last_error(ui);
    }

    fn show_lexical(&mut self, ui: &mut egui::Ui, lexical: &LexicalView) {
        let ctx = ui.ctx().clone();

        ui.label(RichText::new("Word Cloud").size(14.0).strong());
        let (w, h) = Self::CLOUD_SIZE;
        match Self::refresh(&ctx, &mut self.cloud, &lexical.cloud_words, "word_cloud", || {
            Self::render_word_cloud(&lexical.cloud_words, w, h)
        }) {
            Ok(()) => Self::show_cached(ui, &self.cloud, "wordcloud.png", &mut self.last_error),
            Err(e) => Self::show_error(ui, &e),
        }

        ui.add_space(12.0);

        ui.label(
            RichText::new(format!("Top {} Words", lexical.top_words.len()))
                .size(14.0)
                .strong(),
        );
        let (w, h) = Self::TOP_WORDS_SIZE;
        match Self::refresh(&ctx, &mut self.top_words, &lexical.top_words, "top_words", || {
            Self::render_top_words(&lexical.top_words, w, h)
        }) {
            Ok(()) => Self::show_cached(ui, &self.top_words, "kata_teratas.png", &mut self.last_error),
            Err(e) => Self::show_error(ui, &e),
        }
        self.show_last_error(ui);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max_has_headroom() {
        assert_eq!(axis_max(0), 1);
        assert_eq!(axis_max(10), 12);
        assert!(axis_max(100) > 100);
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        let bitmap = Bitmap::blank(4, 3);

        bitmap.save_png(&path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
    }

    #[test]
    fn test_save_png_rejects_bad_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let bitmap = Bitmap {
            width: 4,
            height: 4,
            rgb: vec![0; 5],
        };
        assert!(matches!(
            bitmap.save_png(&dir.path().join("bad.png")),
            Err(ChartError::Draw(_))
        ));
    }
}
