// File:    engine.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: The OTP engine: deterministic code generation and windowed validation of time-based codes.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the OTP engine.
//!
//! A [`Totp`] combines a decoded secret and a time-derived counter through
//! an injected keyed hash to produce a 6-digit code, and validates a
//! supplied code by re-deriving candidates for every counter within a
//! bounded window around "now". Both operations are pure: identical
//! inputs always yield identical output, and time only enters through the
//! counter the caller supplies.

use crate::base32;
use crate::config::TotpConfig;
use crate::hash::{self, HashProvider};
use log::{debug, warn};
use std::sync::Arc;

/// Length of a one-time code in decimal digits.
pub const DIGITS: usize = 6;

/// Length of a time step in seconds.
pub const TIME_STEP: u64 = 30;

/// Default validation window, in time steps on each side of "now".
pub const DEFAULT_WINDOW: u32 = 5;

/// Converts a Unix timestamp to its time-step counter.
#[must_use]
pub const fn counter_at(unix_seconds: u64) -> u64 {
    unix_seconds / TIME_STEP
}

/// Seconds until the code for `unix_seconds` rolls over.
#[must_use]
pub const fn seconds_remaining_at(unix_seconds: u64) -> u64 {
    TIME_STEP - unix_seconds % TIME_STEP
}

/// Generates and validates time-based one-time codes.
///
/// Holds the injected hash capability and the validation window. Both are
/// read, never mutated, so one engine can be shared across concurrent
/// calls; reconfiguration means building a new engine and swapping the
/// reference.
pub struct Totp {
    hash: Option<Arc<dyn HashProvider>>,
    window: u32,
}

impl Totp {
    /// Creates an engine bound to a hash provider.
    #[must_use]
    pub fn new(hash: Arc<dyn HashProvider>, window: u32) -> Self {
        Self {
            hash: Some(hash),
            window,
        }
    }

    /// Creates an engine with no hash provider bound.
    ///
    /// An unbound engine generates no codes and validates nothing; it
    /// exists so a missing capability degrades instead of crashing.
    #[must_use]
    pub const fn unbound(window: u32) -> Self {
        Self { hash: None, window }
    }

    /// Builds an engine from configuration.
    ///
    /// An unknown hash name leaves the engine unbound; the condition is
    /// logged here and surfaces to callers as [`Totp::generate`]
    /// returning `None`.
    #[must_use]
    pub fn from_config(config: &TotpConfig) -> Self {
        let hash = hash::provider(&config.hash);
        if hash.is_none() {
            warn!("hash provider '{}' is not available", config.hash);
        }
        Self {
            hash,
            window: config.window,
        }
    }

    /// Whether a hash provider is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.hash.is_some()
    }

    /// Name of the bound hash algorithm, if any.
    #[must_use]
    pub fn hash_name(&self) -> Option<&'static str> {
        self.hash.as_deref().map(HashProvider::name)
    }

    /// The configured validation window.
    #[must_use]
    pub const fn window(&self) -> u32 {
        self.window
    }

    /// Generates the code for a Base32 secret at a time-step counter.
    ///
    /// The counter is serialized big-endian into 8 bytes, run through
    /// `HMAC(key, counter)`, dynamically truncated to 31 bits, reduced
    /// modulo one million, and zero-padded to [`DIGITS`] digits. Returns
    /// `None` when no hash provider is bound; that is the "unavailable"
    /// sentinel, not an error.
    #[must_use]
    pub fn generate(&self, secret: &str, counter: u64) -> Option<String> {
        let hash = self.hash.as_deref()?;
        let key = base32::decode(secret);
        let digest = hash.hmac(&key, &counter.to_be_bytes());

        let offset = usize::from(digest[hash.output_size() - 1] & 0x0f);
        let value = u32::from_be_bytes([
            digest[offset],
            digest[offset + 1],
            digest[offset + 2],
            digest[offset + 3],
        ]) & 0x7fff_ffff;

        Some(format!("{:0width$}", value % 1_000_000, width = DIGITS))
    }

    /// Validates a code at `now` with the configured window.
    #[must_use]
    pub fn validate(&self, secret: &str, code: &str, now: u64) -> bool {
        self.validate_within(secret, code, now, self.window)
    }

    /// Validates a code against every counter within `window` steps of
    /// `now`.
    ///
    /// Counters are scanned ascending over the inclusive range
    /// `[counter(now - 30*window), counter(now + 30*window)]`; the first
    /// exact match wins. A window of 0 accepts only the current counter.
    /// An unbound engine can never match.
    #[must_use]
    pub fn validate_within(&self, secret: &str, code: &str, now: u64, window: u32) -> bool {
        let skew = u64::from(window) * TIME_STEP;
        let start = counter_at(now.saturating_sub(skew));
        let end = counter_at(now.saturating_add(skew));

        for counter in start..=end {
            if self.generate(secret, counter).is_some_and(|c| c == code) {
                debug!(
                    "code matched at counter {counter}, {} steps from now",
                    counter as i64 - counter_at(now) as i64
                );
                return true;
            }
        }
        false
    }
}
