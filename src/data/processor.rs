//! Review Processor Module
//! Derives normalized content and sentiment labels for loaded rows.

use crate::data::loader::{LoaderError, RawReview, ReviewLoader};
use crate::data::normalizer::StopwordFilter;
use crate::data::review::{LoadReport, Review, ReviewTable, Sentiment};
use rayon::prelude::*;
use std::path::Path;

/// Turns raw rows into the immutable review table.
pub struct ReviewProcessor;

impl ReviewProcessor {
    /// Label and normalize every row, keeping file order.
    ///
    /// Rows without a rating in 1..=5 are dropped and counted in the report.
    pub fn build_table(
        raw: Vec<RawReview>,
        filter: &StopwordFilter,
        source: &Path,
    ) -> ReviewTable {
        let rows_read = raw.len();

        let derived: Vec<Option<Review>> = raw
            .into_par_iter()
            .enumerate()
            .map(|(row, record)| Self::derive(row, record, filter))
            .collect();

        let reviews: Vec<Review> = derived.into_iter().flatten().collect();
        let skipped = rows_read - reviews.len();
        if skipped > 0 {
            tracing::warn!(skipped, rows_read, "dropped reviews with invalid ratings");
        }

        ReviewTable::new(reviews, source, LoadReport { rows_read, skipped })
    }

    fn derive(row: usize, record: RawReview, filter: &StopwordFilter) -> Option<Review> {
        let Some(rating) = record.rating else {
            tracing::debug!(row, "review has no usable score");
            return None;
        };

        let sentiment = match Sentiment::from_rating(rating) {
            Ok(sentiment) => sentiment,
            Err(e) => {
                tracing::debug!(row, error = %e, "skipping review");
                return None;
            }
        };

        let normalized_content = filter.normalize(&record.content);

        Some(Review {
            author: record.author,
            rating: rating as u8,
            timestamp: record.timestamp,
            content: record.content,
            normalized_content,
            sentiment,
        })
    }

    /// Load `path` and derive the full table.
    pub fn load_table(path: &Path, filter: &StopwordFilter) -> Result<ReviewTable, LoaderError> {
        let raw = ReviewLoader::load_csv(path)?;
        let table = Self::build_table(raw, filter, path);
        tracing::info!(
            path = %path.display(),
            reviews = table.len(),
            "review table loaded"
        );
        Ok(table)
    }
}
