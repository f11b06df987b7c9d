//! Catalog of shoe listings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::shoe::ShoeListing;

/// An ordered collection of listings to render as a grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub shoes: Vec<ShoeListing>,
}

impl Catalog {
    pub fn new(shoes: Vec<ShoeListing>) -> Self {
        Self { shoes }
    }

    /// Parse a JSON catalog, either a bare array or `{"shoes": [...]}`.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        if content.trim_start().starts_with('[') {
            Ok(Self {
                shoes: serde_json::from_str(content)?,
            })
        } else {
            Ok(serde_json::from_str(content)?)
        }
    }

    /// Parse a TOML catalog made of `[[shoes]]` tables.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse catalog content, picking the format from the file name.
    pub fn parse(path: &Path, content: &str) -> Result<Self, CatalogError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(content),
            _ => Self::from_json(content),
        }
    }

    /// Validate every listing, reporting the first failure.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, shoe) in self.shoes.iter().enumerate() {
            shoe.validate().map_err(|e| CatalogError::InvalidListing {
                index,
                slug: shoe.slug.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    /// Reorder listings in place. Ties keep their original order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Featured => {}
            SortOrder::Newest => self
                .shoes
                .sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            SortOrder::PriceLowHigh => self.shoes.sort_by_key(|s| s.effective_price()),
            SortOrder::PriceHighLow => self
                .shoes
                .sort_by(|a, b| b.effective_price().cmp(&a.effective_price())),
            SortOrder::Name => self.shoes.sort_by(|a, b| a.name.cmp(&b.name)),
        }
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}

/// Grid ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the catalog's own order.
    #[default]
    Featured,
    Newest,
    PriceLowHigh,
    PriceHighLow,
    Name,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::Newest => "newest",
            SortOrder::PriceLowHigh => "price-low-high",
            SortOrder::PriceHighLow => "price-high-low",
            SortOrder::Name => "name",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CatalogError> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortOrder::Featured),
            "newest" => Ok(SortOrder::Newest),
            "price-low-high" | "price_asc" => Ok(SortOrder::PriceLowHigh),
            "price-high-low" | "price_desc" => Ok(SortOrder::PriceHighLow),
            "name" => Ok(SortOrder::Name),
            _ => Err(CatalogError::UnknownSortOrder(s.to_string())),
        }
    }
}
