//! Review Model
//! The review entity, its sentiment label and the immutable review table.

use chrono::NaiveDateTime;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Invalid rating {0}: expected a value between 1 and 5")]
    InvalidRating(i64),
}

/// Sentiment label derived from a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// All labels in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Map a rating to its label: 1-2 negative, 3 neutral, 4-5 positive.
    pub fn from_rating(rating: i64) -> Result<Self, LabelError> {
        match rating {
            1 | 2 => Ok(Sentiment::Negative),
            3 => Ok(Sentiment::Neutral),
            4 | 5 => Ok(Sentiment::Positive),
            other => Err(LabelError::InvalidRating(other)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Negative => "Negatif",
            Sentiment::Neutral => "Netral",
            Sentiment::Positive => "Positif",
        }
    }

    /// Position in [`Sentiment::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Neutral => 1,
            Sentiment::Positive => 2,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single store review with its derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub timestamp: Option<NaiveDateTime>,
    pub content: String,
    pub normalized_content: String,
    pub sentiment: Sentiment,
}

/// Row accounting from a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows present in the source file
    pub rows_read: usize,
    /// Rows dropped because the rating was missing or out of range
    pub skipped: usize,
}

/// Immutable, ordered table of reviews. Built once per load.
#[derive(Debug, Clone)]
pub struct ReviewTable {
    reviews: Vec<Review>,
    source: PathBuf,
    report: LoadReport,
}

impl ReviewTable {
    pub fn new(reviews: Vec<Review>, source: impl Into<PathBuf>, report: LoadReport) -> Self {
        Self {
            reviews,
            source: source.into(),
            report,
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Earliest and latest posting time, ignoring reviews without a timestamp.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut stamps = self.reviews.iter().filter_map(|r| r.timestamp);
        let first = stamps.next()?;
        Some(stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }

    /// Distinct labels in order of first appearance.
    pub fn sentiments_in_order(&self) -> Vec<Sentiment> {
        let mut seen: Vec<Sentiment> = Vec::with_capacity(Sentiment::ALL.len());
        for review in &self.reviews {
            if !seen.contains(&review.sentiment) {
                seen.push(review.sentiment);
                if seen.len() == Sentiment::ALL.len() {
                    break;
                }
            }
        }
        seen
    }
}

#[cfg(test)]
pub(crate) fn sample_review(author: &str, rating: u8, content: &str) -> Review {
    Review {
        author: author.to_string(),
        rating,
        timestamp: None,
        content: content.to_string(),
        normalized_content: content.to_lowercase(),
        sentiment: Sentiment::from_rating(rating as i64).expect("valid rating"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_rating_thresholds() {
        for r in [1, 2] {
            assert_eq!(Sentiment::from_rating(r), Ok(Sentiment::Negative));
        }
        assert_eq!(Sentiment::from_rating(3), Ok(Sentiment::Neutral));
        for r in [4, 5] {
            assert_eq!(Sentiment::from_rating(r), Ok(Sentiment::Positive));
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        assert_eq!(Sentiment::from_rating(0), Err(LabelError::InvalidRating(0)));
        assert_eq!(Sentiment::from_rating(6), Err(LabelError::InvalidRating(6)));
        assert_eq!(Sentiment::from_rating(-1), Err(LabelError::InvalidRating(-1)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Sentiment::from_rating(2).unwrap().label(), "Negatif");
        assert_eq!(Sentiment::from_rating(3).unwrap().label(), "Netral");
        assert_eq!(Sentiment::from_rating(5).unwrap().to_string(), "Positif");
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, s) in Sentiment::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn test_sentiments_in_first_appearance_order() {
        let table = ReviewTable::new(
            vec![
                sample_review("a", 5, "x"),
                sample_review("b", 1, "y"),
                sample_review("c", 4, "z"),
            ],
            "reviews.csv",
            LoadReport::default(),
        );
        assert_eq!(
            table.sentiments_in_order(),
            vec![Sentiment::Positive, Sentiment::Negative]
        );
    }

    #[test]
    fn test_time_span() {
        let day = |d| {
            NaiveDate::from_ymd_opt(2024, 3, d)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        };
        let mut reviews = vec![
            sample_review("a", 5, "x"),
            sample_review("b", 3, "y"),
            sample_review("c", 2, "z"),
        ];
        reviews[0].timestamp = Some(day(10));
        reviews[2].timestamp = Some(day(2));
        let table = ReviewTable::new(reviews, "reviews.csv", LoadReport::default());

        assert_eq!(table.time_span(), Some((day(2), day(10))));

        let empty = ReviewTable::new(Vec::new(), "reviews.csv", LoadReport::default());
        assert_eq!(empty.time_span(), None);
    }
}
