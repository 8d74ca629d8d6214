//! View Models
//! Read-only projections of the review table consumed by the renderers.

use crate::data::Sentiment;

/// Review count per sentiment, always covering all three labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentDistribution {
    counts: [usize; 3],
}

impl SentimentDistribution {
    #[cfg(test)]
    pub fn from_counts(counts: [usize; 3]) -> Self {
        Self { counts }
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        self.counts[sentiment.index()] += 1;
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.counts[sentiment.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Labels with their counts in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.iter().map(|s| (*s, self.count(*s)))
    }

    /// Share of `sentiment` in percent, 0 for an empty table.
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(sentiment) as f64 * 100.0 / total as f64
        }
    }
}

/// A token and how often it occurs across all normalized content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word frequencies for the top-words chart and the word cloud.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexicalView {
    /// Most frequent words, highest first
    pub top_words: Vec<WordCount>,
    /// Words fed to the word cloud, highest first
    pub cloud_words: Vec<WordCount>,
}

/// Reviews matching one sentiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredReviews {
    pub sentiment: Sentiment,
    /// Size of the full matching set
    pub total: usize,
    /// Table positions of the rows to display
    pub rows: Vec<usize>,
}
