//! Order-of-magnitude latency estimate for display.
//!
//! Elapsed time around a cache access is reported as `10^n ms` where
//! `n = floor(log10(elapsed_ms))`. It is a diagnostic, not a measurement
//! anyone should compare across machines.

use std::fmt;
use std::time::Duration;

/// Decimal exponent of an elapsed time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyMagnitude {
    /// `floor(log10(elapsed_ms))`.
    Exponent(i32),
    /// The clock did not advance; there is no finite logarithm.
    Instant,
}

impl LatencyMagnitude {
    /// Computes the magnitude of `elapsed`.
    ///
    /// ```
    /// use std::time::Duration;
    /// use cachefusion::latency::LatencyMagnitude;
    ///
    /// assert_eq!(
    ///     LatencyMagnitude::from_elapsed(Duration::from_micros(250)),
    ///     LatencyMagnitude::Exponent(-1)
    /// );
    /// assert_eq!(
    ///     LatencyMagnitude::from_elapsed(Duration::ZERO),
    ///     LatencyMagnitude::Instant
    /// );
    /// ```
    pub fn from_elapsed(elapsed: Duration) -> Self {
        if elapsed.is_zero() {
            return LatencyMagnitude::Instant;
        }
        // Work in integer nanoseconds: floor(log10(ns)) - 6 == floor(log10(ms))
        // without float rounding at exact powers of ten.
        let nanos = elapsed.as_nanos();
        LatencyMagnitude::Exponent(nanos.ilog10() as i32 - 6)
    }

    /// Returns the exponent, or `None` for [`LatencyMagnitude::Instant`].
    pub fn exponent(self) -> Option<i32> {
        match self {
            LatencyMagnitude::Exponent(n) => Some(n),
            LatencyMagnitude::Instant => None,
        }
    }
}

impl fmt::Display for LatencyMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatencyMagnitude::Exponent(n) => write!(f, "10^{n} ms"),
            LatencyMagnitude::Instant => f.write_str("< 10^-6 ms"),
        }
    }
}
