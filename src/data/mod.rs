//! Data module - review loading, normalization and labeling

mod cache;
mod loader;
mod normalizer;
mod processor;
mod review;

pub use cache::TableCache;
pub use loader::LoaderError;
pub use normalizer::{StopwordFilter, DEFAULT_EXTRA_STOPWORDS};
pub use processor::ReviewProcessor;
pub use review::{Review, ReviewTable, Sentiment};

#[cfg(test)]
pub(crate) use review::{sample_review, LoadReport};
