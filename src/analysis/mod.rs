//! Analysis module - aggregate views over the review table

mod calculator;
mod views;

pub use calculator::{ViewCalculator, TOP_WORDS};
pub use views::{FilteredReviews, LexicalView, SentimentDistribution, WordCount};
