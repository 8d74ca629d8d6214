//! View Calculator Module
//! Aggregations behind the dashboard: label counts, word frequencies and filtering.

use crate::analysis::views::{FilteredReviews, LexicalView, SentimentDistribution, WordCount};
use crate::data::{Review, ReviewTable, Sentiment};
use rustc_hash::FxHashMap;

/// Number of entries in the top-words chart.
pub const TOP_WORDS: usize = 20;

/// Computes read-only views over a review table.
pub struct ViewCalculator;

impl ViewCalculator {
    pub fn distribution(table: &ReviewTable) -> SentimentDistribution {
        let mut dist = SentimentDistribution::default();
        for review in table.reviews() {
            dist.record(review.sentiment);
        }
        dist
    }

    /// Every token of the normalized content with its count, highest count first.
    ///
    /// Equal counts keep the order in which the words were first seen.
    pub fn word_frequencies(table: &ReviewTable) -> Vec<WordCount> {
        // word -> (count, first position)
        let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
        let tokens = table
            .reviews()
            .iter()
            .flat_map(|r| r.normalized_content.split_whitespace());

        for (pos, token) in tokens.enumerate() {
            counts.entry(token).or_insert((0, pos)).0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .map(|(word, count, _)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }

    pub fn top_words(table: &ReviewTable, n: usize) -> Vec<WordCount> {
        let mut words = Self::word_frequencies(table);
        words.truncate(n);
        words
    }

    pub fn lexical(table: &ReviewTable, top_n: usize, cloud_n: usize) -> LexicalView {
        let mut cloud_words = Self::top_words(table, top_n.max(cloud_n));
        let top_words = cloud_words.iter().take(top_n).cloned().collect();
        cloud_words.truncate(cloud_n);
        LexicalView {
            top_words,
            cloud_words,
        }
    }

    /// The first `n` reviews.
    pub fn head(table: &ReviewTable, n: usize) -> &[Review] {
        let reviews = table.reviews();
        &reviews[..n.min(reviews.len())]
    }

    /// Reviews labeled `sentiment`; `total` counts all matches, `rows` holds at most `limit`.
    pub fn filter_by_sentiment(
        table: &ReviewTable,
        sentiment: Sentiment,
        limit: usize,
    ) -> FilteredReviews {
        let mut total = 0;
        let mut rows = Vec::with_capacity(limit.min(table.len()));
        for (idx, review) in table.reviews().iter().enumerate() {
            if review.sentiment == sentiment {
                total += 1;
                if rows.len() < limit {
                    rows.push(idx);
                }
            }
        }
        FilteredReviews {
            sentiment,
            total,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_review, LoadReport};

    fn table(rows: &[(u8, &str)]) -> ReviewTable {
        let reviews = rows
            .iter()
            .enumerate()
            .map(|(i, (rating, text))| sample_review(&format!("user{i}"), *rating, text))
            .collect();
        ReviewTable::new(reviews, "reviews.csv", LoadReport::default())
    }

    #[test]
    fn test_distribution_sums_to_table_len() {
        let t = table(&[(1, "a"), (2, "b"), (3, "c"), (5, "d"), (4, "e"), (5, "f")]);
        let dist = ViewCalculator::distribution(&t);

        assert_eq!(dist.count(Sentiment::Negative), 2);
        assert_eq!(dist.count(Sentiment::Neutral), 1);
        assert_eq!(dist.count(Sentiment::Positive), 3);
        assert_eq!(dist.total(), t.len());
    }

    #[test]
    fn test_word_frequencies_stable_ties() {
        let t = table(&[(5, "murah cepat bagus"), (4, "bagus murah"), (3, "lambat cepat")]);
        let words = ViewCalculator::word_frequencies(&t);
        let ranked: Vec<(&str, usize)> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();

        assert_eq!(
            ranked,
            vec![("murah", 2), ("cepat", 2), ("bagus", 2), ("lambat", 1)]
        );
    }

    #[test]
    fn test_top_words_bounded_and_sorted() {
        let text: String = (0..30)
            .flat_map(|i| std::iter::repeat(format!("w{i}")).take(i % 7 + 1))
            .collect::<Vec<_>>()
            .join(" ");
        let t = table(&[(5, text.as_str())]);

        let top = ViewCalculator::top_words(&t, TOP_WORDS);

        assert_eq!(top.len(), TOP_WORDS);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(top[0].count, 7);
    }

    #[test]
    fn test_top_words_with_few_tokens() {
        let t = table(&[(5, ""), (1, "rusak")]);
        let top = ViewCalculator::top_words(&t, TOP_WORDS);
        assert_eq!(
            top,
            vec![WordCount {
                word: "rusak".to_string(),
                count: 1
            }]
        );
        assert!(ViewCalculator::top_words(&table(&[]), TOP_WORDS).is_empty());
    }

    #[test]
    fn test_lexical_view_prefixes_agree() {
        let t = table(&[(5, "a b c d a b a")]);
        let view = ViewCalculator::lexical(&t, 2, 3);
        assert_eq!(view.top_words.len(), 2);
        assert_eq!(view.cloud_words.len(), 3);
        assert_eq!(&view.top_words[..], &view.cloud_words[..2]);
    }

    #[test]
    fn test_head() {
        let t = table(&[(5, "a"), (4, "b"), (3, "c")]);
        assert_eq!(ViewCalculator::head(&t, 2).len(), 2);
        assert_eq!(ViewCalculator::head(&t, 50).len(), 3);
    }

    #[test]
    fn test_filter_by_sentiment() {
        let t = table(&[(1, "a"), (5, "b"), (2, "c"), (4, "d"), (1, "e")]);

        let neg = ViewCalculator::filter_by_sentiment(&t, Sentiment::Negative, 2);
        assert_eq!(neg.total, 3);
        assert_eq!(neg.rows, vec![0, 2]);
        assert!(neg
            .rows
            .iter()
            .all(|&i| t.reviews()[i].sentiment == Sentiment::Negative));

        let all_neg = ViewCalculator::filter_by_sentiment(&t, Sentiment::Negative, 20);
        assert_eq!(all_neg.total, all_neg.rows.len());

        let neutral = ViewCalculator::filter_by_sentiment(&t, Sentiment::Neutral, 20);
        assert_eq!(neutral.total, 0);
        assert!(neutral.rows.is_empty());
    }
}
