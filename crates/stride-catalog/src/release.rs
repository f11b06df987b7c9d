//! Recency window for newly released shoes.

use chrono::{DateTime, Duration, Utc};

use crate::error::CatalogError;

/// Default recency window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;
/// Longest accepted recency window in days.
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// Decides whether a release date counts as "recently released".
///
/// A shoe is new while its age is strictly less than `length`. Release dates
/// in the future have a negative age and are always new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    /// Length of the window.
    pub length: Duration,
    /// Reference instant; `None` means the current time.
    pub as_of: Option<DateTime<Utc>>,
}

impl Default for ReleaseWindow {
    fn default() -> Self {
        Self {
            length: Duration::days(DEFAULT_WINDOW_DAYS),
            as_of: None,
        }
    }
}

impl ReleaseWindow {
    /// Create a window of the given number of days, between 1 and `MAX_WINDOW_DAYS`.
    pub fn try_days(days: i64) -> Result<Self, CatalogError> {
        if !(1..=MAX_WINDOW_DAYS).contains(&days) {
            return Err(CatalogError::InvalidWindow(days));
        }
        let length = Duration::try_days(days).ok_or(CatalogError::InvalidWindow(days))?;
        Ok(Self {
            length,
            as_of: None,
        })
    }

    /// Pin the reference instant instead of reading the clock.
    pub fn as_of(mut self, reference: DateTime<Utc>) -> Self {
        self.as_of = Some(reference);
        self
    }

    /// The instant ages are measured against.
    pub fn reference(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }

    /// Check whether a shoe released at `release_date` is still new.
    pub fn is_new_shoe(&self, release_date: DateTime<Utc>) -> bool {
        self.reference() - release_date < self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_default_window_is_thirty_days() {
        let window = ReleaseWindow::default();
        assert_eq!(window.length, Duration::days(30));
        assert!(window.as_of.is_none());
    }

    #[test]
    fn test_recent_release_is_new() {
        let window = ReleaseWindow::default().as_of(now());
        assert!(window.is_new_shoe(now() - Duration::days(3)));
    }

    #[test]
    fn test_old_release_is_not_new() {
        let window = ReleaseWindow::default().as_of(now());
        assert!(!window.is_new_shoe(now() - Duration::days(365 * 5)));
    }

    #[test]
    fn test_boundary_is_not_new() {
        let window = ReleaseWindow::default().as_of(now());
        assert!(!window.is_new_shoe(now() - Duration::days(30)));
        assert!(window.is_new_shoe(now() - Duration::days(30) + Duration::seconds(1)));
    }

    #[test]
    fn test_future_release_is_new() {
        let window = ReleaseWindow::default().as_of(now());
        assert!(window.is_new_shoe(now() + Duration::days(10)));
    }

    #[test]
    fn test_monotonic_over_ages() {
        let window = ReleaseWindow::try_days(7).unwrap().as_of(now());
        let flags: Vec<bool> = (0..20)
            .map(|d| window.is_new_shoe(now() - Duration::days(d)))
            .collect();

        // Once a date falls out of the window, every older date does too.
        let first_old = flags.iter().position(|new| !new).unwrap();
        assert_eq!(first_old, 7);
        assert!(flags[first_old..].iter().all(|new| !new));
    }

    #[test]
    fn test_try_days_bounds() {
        assert_eq!(ReleaseWindow::try_days(1).unwrap().length, Duration::days(1));
        assert_eq!(
            ReleaseWindow::try_days(MAX_WINDOW_DAYS).unwrap().length,
            Duration::days(MAX_WINDOW_DAYS)
        );
        for days in [0, -5, MAX_WINDOW_DAYS + 1, 1_000_000_000_000, i64::MAX, i64::MIN] {
            assert!(matches!(
                ReleaseWindow::try_days(days),
                Err(CatalogError::InvalidWindow(d)) if d == days
            ));
        }
    }

    #[test]
    fn test_live_clock_reference() {
        let window = ReleaseWindow::default();
        assert!(window.is_new_shoe(Utc::now() - Duration::days(1)));
    }
}
