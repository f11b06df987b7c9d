//! Display variants for a catalog card.
//!
//! Every card shows exactly one variant. A sale always wins over a recent
//! release, so a discounted new shoe only ever carries the sale badge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;
use crate::release::ReleaseWindow;

/// Badge background for discounted shoes.
pub const SALE_BADGE_COLOR: &str = "#C5295D";
/// Badge background for recently released shoes.
pub const NEW_RELEASE_BADGE_COLOR: &str = "#6868D9";

/// The three mutually exclusive display modes of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// No badge, regular price.
    #[default]
    Default,
    /// Discounted; sale price shown and base price struck through.
    OnSale,
    /// Released inside the recency window.
    NewRelease,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CatalogError> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Variant::Default),
            "on-sale" => Ok(Variant::OnSale),
            "new-release" => Ok(Variant::NewRelease),
            _ => Err(CatalogError::UnknownVariant(s.to_string())),
        }
    }

    /// Badge for this variant, if it shows one.
    pub fn presentation(&self) -> Option<BadgePresentation> {
        match self {
            Variant::OnSale => Some(BadgePresentation {
                color: SALE_BADGE_COLOR,
                text: "Sale",
            }),
            Variant::NewRelease => Some(BadgePresentation {
                color: NEW_RELEASE_BADGE_COLOR,
                text: "Just Released!",
            }),
            Variant::Default => None,
        }
    }

    /// Whether a badge overlay is shown.
    pub fn has_badge(&self) -> bool {
        self.presentation().is_some()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge color and label for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BadgePresentation {
    /// CSS background color.
    pub color: &'static str,
    /// Badge label.
    pub text: &'static str,
}

/// Pick the variant for a shoe.
///
/// Any present sale price wins, including zero and negative amounts. Otherwise
/// the release window decides between `new-release` and `default`.
pub fn classify(
    sale_price: Option<i64>,
    release_date: DateTime<Utc>,
    window: &ReleaseWindow,
) -> Variant {
    match sale_price {
        Some(_) => Variant::OnSale,
        None if window.is_new_shoe(release_date) => Variant::NewRelease,
        None => Variant::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn window() -> ReleaseWindow {
        ReleaseWindow::default().as_of(now())
    }

    #[test]
    fn test_sale_price_wins_over_old_release() {
        let v = classify(Some(11000), now() - Duration::days(3650), &window());
        assert_eq!(v, Variant::OnSale);
    }

    #[test]
    fn test_sale_price_wins_over_new_release() {
        let v = classify(Some(0), now() - Duration::days(3), &window());
        assert_eq!(v, Variant::OnSale);
    }

    #[test]
    fn test_negative_sale_price_is_still_on_sale() {
        let v = classify(Some(-100), now() - Duration::days(400), &window());
        assert_eq!(v, Variant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale() {
        let v = classify(None, now() - Duration::days(3), &window());
        assert_eq!(v, Variant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale() {
        let v = classify(None, now() - Duration::days(365 * 5), &window());
        assert_eq!(v, Variant::Default);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let release = now() - Duration::days(12);
        let first = classify(None, release, &window());
        let second = classify(None, release, &window());
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_has_no_badge() {
        assert!(Variant::Default.presentation().is_none());
        assert!(!Variant::Default.has_badge());
    }

    #[test]
    fn test_badges_are_distinct_and_non_empty() {
        let sale = Variant::OnSale.presentation().unwrap();
        let fresh = Variant::NewRelease.presentation().unwrap();

        assert_eq!(sale.text, "Sale");
        assert_eq!(fresh.text, "Just Released!");
        assert!(!sale.color.is_empty() && !fresh.color.is_empty());
        assert_ne!(sale.color, fresh.color);
        assert_ne!(sale.text, fresh.text);
    }

    #[test]
    fn test_variant_string_round_trip() {
        for v in [Variant::Default, Variant::OnSale, Variant::NewRelease] {
            assert_eq!(Variant::from_str(v.as_str()).unwrap(), v);
        }
        assert!(Variant::from_str("clearance").is_err());
    }

    #[test]
    fn test_variant_serde_kebab_case() {
        let json = serde_json::to_string(&Variant::NewRelease).unwrap();
        assert_eq!(json, "\"new-release\"");
    }
}
