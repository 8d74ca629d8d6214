//! Stopword Normalizer
//! Case folding and stopword removal for review content.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Short tokens common in Indonesian store reviews that the language list misses.
pub const DEFAULT_EXTRA_STOPWORDS: [&str; 3] = ["yg", "dg", "rt"];

/// A stopword set used to clean review content.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter from a language's stopword list.
    ///
    /// Unknown languages fall back to Indonesian.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Language list plus extra hand-picked tokens.
    pub fn for_reviews<S: AsRef<str>>(language: &str, extra: &[S]) -> Self {
        Self::new(language).with_extra(extra)
    }

    /// An empty filter (no filtering).
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_list(words: &[&str]) -> Self {
        Self::default().with_extra(words)
    }

    fn with_extra<S: AsRef<str>>(mut self, extra: &[S]) -> Self {
        for word in extra {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
        self
    }

    #[cfg(test)]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Lower-case `content`, drop stopword tokens and rejoin the rest with single spaces.
    pub fn normalize(&self, content: &str) -> String {
        let lowered = content.to_lowercase();
        lowered
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "id" | "indonesian" => LANGUAGE::Indonesian,
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            other => {
                tracing::warn!(language = other, "unknown stopword language, using Indonesian");
                LANGUAGE::Indonesian
            }
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_example() {
        let filter = StopwordFilter::from_list(&["yg"]);
        assert_eq!(
            filter.normalize("Aplikasi Ini Sangat Bagus yg"),
            "aplikasi ini sangat bagus"
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let filter = StopwordFilter::from_list(&["dan"]);
        assert_eq!(
            filter.normalize("  barang\tbagus  dan\n\nmurah "),
            "barang bagus murah"
        );
    }

    #[test]
    fn test_empty_and_all_stopword_content() {
        let filter = StopwordFilter::from_list(&["yg", "dg"]);
        assert_eq!(filter.normalize(""), "");
        assert_eq!(filter.normalize("   "), "");
        assert_eq!(filter.normalize("YG dg Yg"), "");
    }

    #[test]
    fn test_no_stopwords_survive_and_order_kept() {
        let filter = StopwordFilter::from_list(&["the", "a", "is"]);
        let out = filter.normalize("The app IS a great app for a shop");
        assert_eq!(out, "app great app for shop");
        assert!(out.split(' ').all(|t| !filter.is_stopword(t)));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let filter = StopwordFilter::for_reviews("id", &DEFAULT_EXTRA_STOPWORDS);
        let inputs = [
            "Pengiriman CEPAT dan barang sesuai yg dipesan",
            "rt dg yg",
            "Mantap!! Shopee terbaik 👍",
            "",
        ];
        for input in inputs {
            let once = filter.normalize(input);
            assert_eq!(filter.normalize(&once), once);
        }
    }

    #[test]
    fn test_review_filter_includes_extras() {
        let filter = StopwordFilter::for_reviews("id", &DEFAULT_EXTRA_STOPWORDS);
        for word in DEFAULT_EXTRA_STOPWORDS {
            assert!(filter.is_stopword(word));
        }
        assert!(filter.is_stopword("yang"));
        assert!(filter.is_stopword("Dan"));
        assert!(!filter.is_stopword("shopee"));
    }

    #[test]
    fn test_custom_stopwords() {
        let filter = StopwordFilter::from_list(&["custom", "Extra"]);
        assert!(filter.is_stopword("CUSTOM"));
        assert!(filter.is_stopword("extra"));
        assert!(!filter.is_stopword("other"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert_eq!(filter.normalize("Yang Dan"), "yang dan");
    }
}
