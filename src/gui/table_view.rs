//! Review Table Widget
//! Raw review preview plus a single-select sentiment filter.

use crate::analysis::{FilteredReviews, ViewCalculator};
use crate::charts::sentiment_color;
use crate::data::{Review, ReviewTable, Sentiment};
use egui::{ComboBox, RichText, ScrollArea};
use std::sync::Arc;

const CONTENT_WIDTH: f32 = 520.0;

pub struct ReviewTableView {
    table: Option<Arc<ReviewTable>>,
    preview_rows: usize,
    filtered_rows: usize,
    /// Labels offered by the filter, in order of first appearance
    options: Vec<Sentiment>,
    selected: Option<Sentiment>,
    filtered: Option<FilteredReviews>,
}

impl ReviewTableView {
    pub fn new(preview_rows: usize, filtered_rows: usize) -> Self {
        Self {
            table: None,
            preview_rows,
            filtered_rows,
            options: Vec::new(),
            selected: None,
            filtered: None,
        }
    }

    /// Show a new table. The filter offers only the labels present in it,
    /// with the first one preselected.
    pub fn set_table(&mut self, table: Arc<ReviewTable>) {
        self.options = table.sentiments_in_order();
        self.table = Some(table);
        self.selected = None;
        self.filtered = None;
        if let Some(&sentiment) = self.options.first() {
            self.select(sentiment);
        }
    }

    pub fn clear(&mut self) {
        self.table = None;
        self.options.clear();
        self.selected = None;
        self.filtered = None;
    }

    #[cfg(test)]
    pub fn options(&self) -> &[Sentiment] {
        &self.options
    }

    pub fn select(&mut self, sentiment: Sentiment) {
        self.selected = Some(sentiment);
        self.filtered = self
            .table
            .as_ref()
            .map(|t| ViewCalculator::filter_by_sentiment(t, sentiment, self.filtered_rows));
    }

    #[cfg(test)]
    pub fn filtered(&self) -> Option<&FilteredReviews> {
        self.filtered.as_ref()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(table) = self.table.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("🗂️ Reviews");
                ui.add_space(8.0);

                let head = ViewCalculator::head(&table, self.preview_rows);
                ui.label(
                    RichText::new(format!("First {} of {} reviews", head.len(), table.len()))
                        .color(egui::Color32::GRAY),
                );
                Self::review_grid(ui, "preview_grid", head.iter());

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                self.show_filter(ui);
                ui.add_space(6.0);

                if let Some(filtered) = &self.filtered {
                    ui.label(format!(
                        "Showing {} reviews with sentiment '{}'",
                        filtered.total, filtered.sentiment
                    ));
                    if filtered.total == 0 {
                        ui.label(RichText::new("No reviews match this sentiment").color(egui::Color32::GRAY));
                    } else {
                        let rows = filtered.rows.iter().filter_map(|&i| table.reviews().get(i));
                        Self::review_grid(ui, "filtered_grid", rows);
                    }
                }
            });
    }

    fn show_filter(&mut self, ui: &mut egui::Ui) {
        let mut picked = None;
        ui.horizontal(|ui| {
            ui.label("Filter by sentiment:");
            let selected_text = self.selected.map(|s| s.label()).unwrap_or("-");
            ComboBox::from_id_salt("sentiment_filter")
                .width(140.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for &sentiment in &self.options {
                        if ui
                            .selectable_label(self.selected == Some(sentiment), sentiment.label())
                            .clicked()
                        {
                            picked = Some(sentiment);
                        }
                    }
                });
        });
        if let Some(sentiment) = picked {
            tracing::debug!(%sentiment, "sentiment filter changed");
            self.select(sentiment);
        }
    }

    fn review_grid<'a>(ui: &mut egui::Ui, id: &str, rows: impl Iterator<Item = &'a Review>) {
        egui::Grid::new(id)
            .striped(true)
            .num_columns(4)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Author").strong());
                ui.label(RichText::new("Content").strong());
                ui.label(RichText::new("Rating").strong());
                ui.label(RichText::new("Sentiment").strong());
                ui.end_row();

                for review in rows {
                    ui.label(&review.author);
                    ui.scope(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        ui.add(egui::Label::new(&review.content).wrap());
                    });
                    ui.label("★".repeat(review.rating as usize));
                    ui.label(
                        RichText::new(review.sentiment.label())
                            .color(sentiment_color(review.sentiment)),
                    );
                    ui.end_row();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_review, LoadReport};

    fn table() -> Arc<ReviewTable> {
        let reviews = vec![
            sample_review("a", 4, "bagus"),
            sample_review("b", 1, "jelek"),
            sample_review("c", 5, "mantap"),
            sample_review("d", 2, "lambat"),
        ];
        Arc::new(ReviewTable::new(reviews, "reviews.csv", LoadReport::default()))
    }

    #[test]
    fn test_set_table_preselects_first_sentiment() {
        let mut view = ReviewTableView::new(50, 20);
        view.set_table(table());

        let filtered = view.filtered().unwrap();
        assert_eq!(filtered.sentiment, Sentiment::Positive);
        assert_eq!(filtered.total, 2);
        assert_eq!(filtered.rows, vec![0, 2]);
    }

    #[test]
    fn test_filter_offers_only_present_labels() {
        let reviews = vec![
            sample_review("a", 5, "mantap"),
            sample_review("b", 4, "bagus"),
            sample_review("c", 1, "jelek"),
        ];
        let mut view = ReviewTableView::new(50, 20);
        view.set_table(Arc::new(ReviewTable::new(reviews, "reviews.csv", LoadReport::default())));

        assert_eq!(view.options(), &[Sentiment::Positive, Sentiment::Negative]);

        view.clear();
        assert!(view.options().is_empty());
    }

    #[test]
    fn test_select_refilters() {
        let mut view = ReviewTableView::new(50, 1);
        view.set_table(table());

        view.select(Sentiment::Negative);
        let filtered = view.filtered().unwrap();
        assert_eq!(filtered.total, 2);
        assert_eq!(filtered.rows, vec![1]);

        view.select(Sentiment::Neutral);
        assert_eq!(view.filtered().unwrap().total, 0);
    }

    #[test]
    fn test_select_without_table() {
        let mut view = ReviewTableView::new(50, 20);
        view.select(Sentiment::Positive);
        assert!(view.filtered().is_none());
    }
}
