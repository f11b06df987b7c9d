//! Shoe listing input record.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::release::ReleaseWindow;
use crate::variant::{classify, Variant};

/// The attributes a catalog card is rendered from.
///
/// Listings are supplied by the caller and never mutated by rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    /// URL-safe identifier.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image reference.
    pub image_src: String,
    /// Base price in minor currency units.
    pub price: i64,
    /// Discounted price in minor currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    /// Release instant.
    #[serde(deserialize_with = "deserialize_release_date")]
    pub release_date: DateTime<Utc>,
    /// Number of available colors.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Create a listing with no sale price.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: i64,
        release_date: DateTime<Utc>,
        num_of_colors: u32,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: i64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Link target for the card.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Display variant for this listing.
    pub fn variant(&self, window: &ReleaseWindow) -> Variant {
        classify(self.sale_price, self.release_date, window)
    }

    /// Price the shopper actually pays.
    pub fn effective_price(&self) -> i64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether the sale price looks wrong: negative, or not below the base price.
    pub fn has_suspicious_sale_price(&self) -> bool {
        matches!(self.sale_price, Some(sale) if sale < 0 || sale >= self.price)
    }

    /// Check the listing's own constraints.
    ///
    /// The sale price is intentionally left alone: any present value marks the
    /// shoe as on sale.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !is_url_safe(&self.slug) {
            return Err(CatalogError::InvalidSlug(self.slug.clone()));
        }
        if self.price < 0 {
            return Err(CatalogError::InvalidPrice {
                slug: self.slug.clone(),
                price: self.price,
            });
        }
        if self.num_of_colors == 0 {
            return Err(CatalogError::InvalidColorCount {
                slug: self.slug.clone(),
                count: self.num_of_colors,
            });
        }
        Ok(())
    }
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReleaseDate {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` dates, or Unix milliseconds.
/// Fractional milliseconds are truncated.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawReleaseDate::deserialize(deserializer)? {
        RawReleaseDate::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| D::Error::custom(format!("release date out of range: {}", ms))),
        RawReleaseDate::FractionalMillis(ms) if ms.is_finite() => Utc
            .timestamp_millis_opt(ms.trunc() as i64)
            .single()
            .ok_or_else(|| D::Error::custom(format!("release date out of range: {}", ms))),
        RawReleaseDate::FractionalMillis(ms) => Err(D::Error::custom(format!(
            "release date is not a number: {}",
            ms
        ))),
        RawReleaseDate::Text(text) => parse_release_date(&text).map_err(D::Error::custom),
    }
}

/// Parse a release date string.
pub fn parse_release_date(text: &str) -> Result<DateTime<Utc>, CatalogError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CatalogError::Parse(format!("invalid release date: {}", text)))
}
