//! Host-supplied timestamps.
//!
//! `std::time::Instant` is unavailable on `wasm32-unknown-unknown`, so the
//! state machine works on offsets from an arbitrary host origin (for example
//! `performance.now()` in the browser).

use std::ops::Add;
use std::time::Duration;

/// Point in time, measured from a host-defined origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The origin.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Timestamp from milliseconds since the origin.
    ///
    /// Negative and non-finite inputs clamp to the origin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_millis(millis: f64) -> Self {
        if millis.is_finite() && millis > 0.0 {
            // Round to whole nanoseconds so 180.0 ms is exactly 180 ms.
            Self(Duration::from_nanos((millis * 1_000_000.0).round() as u64))
        } else {
            Self::ZERO
        }
    }

    /// Milliseconds since the origin.
    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0.as_secs_f64() * 1000.0
    }

    /// Time elapsed from `earlier` to `self`, zero if `earlier` is later.
    #[must_use]
    pub fn saturating_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}
