//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or validating catalog data.
///
/// Classification itself never fails; these only come from the input boundary.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Slug is empty or contains characters that are not URL-safe.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// Base price is negative.
    #[error("Invalid price for {slug}: {price}")]
    InvalidPrice { slug: String, price: i64 },

    /// A shoe must come in at least one color.
    #[error("Invalid color count for {slug}: {count}")]
    InvalidColorCount { slug: String, count: u32 },

    /// A listing inside a catalog failed validation.
    #[error("Listing #{index} ({slug}) is invalid: {source}")]
    InvalidListing {
        index: usize,
        slug: String,
        #[source]
        source: Box<CatalogError>,
    },

    /// Recency window length out of range.
    #[error("Invalid release window: {0} days (expected 1..={max})", max = crate::release::MAX_WINDOW_DAYS)]
    InvalidWindow(i64),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Unknown variant name.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Unknown sort order.
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// Catalog file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
