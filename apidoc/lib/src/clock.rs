//! Time sources for the generation timestamp in the document footer.

use chrono::{Local, NaiveDateTime};

/// Supplies the local date-time stamped into a generated document.
pub trait Clock {
    /// Returns the current local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
///
/// ## Examples
///
/// ```rust
/// use apidoc_lib::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .and_then(|d| d.and_hms_opt(10, 30, 0))
///     .unwrap();
/// assert_eq!(FixedClock(at).now(), at);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
