//! Shoe catalog domain types for Stride.
//!
//! This crate holds everything a catalog card needs before it is rendered:
//!
//! - **Listings**: `ShoeListing` input records and the `Catalog` that groups them
//! - **Variants**: the `default` / `on-sale` / `new-release` classification and its badge
//! - **Money**: minor-unit prices and their display formatting
//! - **Release window**: the "recently released" check
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_catalog::prelude::*;
//!
//! let window = ReleaseWindow::default();
//! let variant = classify(Some(11000), release_date, &window);
//! assert_eq!(variant, Variant::OnSale);
//!
//! let badge = variant.presentation().unwrap();
//! println!("{} on {}", badge.text, badge.color);
//! ```

pub mod catalog;
pub mod error;
pub mod money;
pub mod release;
pub mod shoe;
pub mod text;
pub mod variant;

pub use catalog::{Catalog, SortOrder};
pub use error::CatalogError;
pub use money::{format_price, Currency, Money};
pub use release::ReleaseWindow;
pub use shoe::ShoeListing;
pub use text::pluralize;
pub use variant::{classify, BadgePresentation, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, SortOrder};
    pub use crate::error::CatalogError;
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::release::ReleaseWindow;
    pub use crate::shoe::ShoeListing;
    pub use crate::text::pluralize;
    pub use crate::variant::{classify, BadgePresentation, Variant};
}
