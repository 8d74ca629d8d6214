//! CSV Review Loader Module
//! Reads the review export into raw records using Polars.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns every review file must carry.
pub const AUTHOR_COL: &str = "userName";
pub const SCORE_COL: &str = "score";
pub const TIMESTAMP_COL: &str = "at";
pub const CONTENT_COL: &str = "content";

/// Every variant means the review data is unavailable.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Review file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Review file is missing required column '{0}'")]
    MissingColumn(String),
}

/// A review row as it appears in the file, before labeling.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReview {
    pub author: String,
    /// `None` when the score cell is empty or not an integer
    pub rating: Option<i64>,
    pub timestamp: Option<NaiveDateTime>,
    pub content: String,
}

/// Loads review exports with the `userName, score, at, content` layout.
pub struct ReviewLoader;

impl ReviewLoader {
    /// Read every row of `path` in file order.
    pub fn load_csv(path: &Path) -> Result<Vec<RawReview>, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        // Schema inference off: every column arrives as text and is coerced here
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        Self::records_from_frame(&df)
    }

    fn records_from_frame(df: &DataFrame) -> Result<Vec<RawReview>, LoaderError> {
        let authors = Self::text_column(df, AUTHOR_COL)?;
        let scores = Self::text_column(df, SCORE_COL)?;
        let stamps = Self::text_column(df, TIMESTAMP_COL)?;
        let contents = Self::text_column(df, CONTENT_COL)?;

        let records = authors
            .into_iter()
            .zip(scores.into_iter())
            .zip(stamps.into_iter())
            .zip(contents.into_iter())
            .map(|(((author, score), at), content)| RawReview {
                author: author.unwrap_or_default().to_string(),
                rating: score.and_then(Self::parse_rating),
                timestamp: at.and_then(Self::parse_timestamp),
                content: content.unwrap_or_default().to_string(),
            })
            .collect();

        Ok(records)
    }

    fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        Ok(column.as_materialized_series().str()?)
    }

    /// Accepts `"4"` and integral floats such as `"4.0"`.
    pub fn parse_rating(raw: &str) -> Option<i64> {
        let raw = raw.trim();
        if let Ok(v) = raw.parse::<i64>() {
            return Some(v);
        }
        let v = raw.parse::<f64>().ok()?;
        if v.is_finite() && v.fract() == 0.0 {
            Some(v as i64)
        } else {
            None
        }
    }

    /// Parse the export's `YYYY-MM-DD HH:MM:SS`, RFC 3339 or a bare date.
    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|t| t.naive_utc()))
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

#[cfg(test)]
pub(crate) fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_file() {
        let file = write_csv(
            "reviewId,userName,score,at,content\n\
             r1,Budi,5,2024-05-01 10:15:00,Mantap sekali\n\
             r2,Sari,2,2024-05-02 08:00:00,\"Pengiriman lambat, kecewa\"\n",
        );

        let records = ReviewLoader::load_csv(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].author, "Budi");
        assert_eq!(records[0].rating, Some(5));
        assert_eq!(
            records[0].timestamp,
            ReviewLoader::parse_timestamp("2024-05-01 10:15:00")
        );
        assert!(records[0].timestamp.is_some());
        assert_eq!(records[1].content, "Pengiriman lambat, kecewa");
    }

    #[test]
    fn test_missing_content_becomes_empty() {
        let file = write_csv("userName,score,at,content\nAni,4,2024-05-01 10:15:00,\n");

        let records = ReviewLoader::load_csv(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "");
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = ReviewLoader::load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn test_missing_column_is_data_unavailable() {
        let file = write_csv("userName,score,content\nAni,4,bagus\n");

        let err = ReviewLoader::load_csv(file.path()).unwrap_err();

        match &err {
            LoaderError::MissingColumn(col) => assert_eq!(col, TIMESTAMP_COL),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(ReviewLoader::parse_rating("5"), Some(5));
        assert_eq!(ReviewLoader::parse_rating(" 3 "), Some(3));
        assert_eq!(ReviewLoader::parse_rating("4.0"), Some(4));
        assert_eq!(ReviewLoader::parse_rating("4.5"), None);
        assert_eq!(ReviewLoader::parse_rating("lima"), None);
        assert_eq!(ReviewLoader::parse_rating("9"), Some(9));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(ReviewLoader::parse_timestamp("2024-01-31 23:59:59").is_some());
        assert!(ReviewLoader::parse_timestamp("2024-01-31T23:59:59Z").is_some());
        assert!(ReviewLoader::parse_timestamp("2024-01-31").is_some());
        assert!(ReviewLoader::parse_timestamp("kemarin").is_none());
        assert!(ReviewLoader::parse_timestamp("").is_none());
    }
}
