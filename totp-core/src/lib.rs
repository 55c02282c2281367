// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-20
//
// Description: The main library crate for totp-core, orchestrating secret encoding, hash providers, and code generation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # TOTP Core Library
//!
//! This library provides the core functionality for time-based one-time
//! passwords (TOTP): a lenient Base32 codec for shared secrets, keyed-hash
//! (HMAC) providers, and the engine that generates and validates 6-digit
//! codes within a configurable clock-skew window.
//!
//! The core is synchronous and stateless apart from the injected hash
//! provider and the window setting. It never reads a clock, sources
//! randomness, or persists a secret; callers own all of those.

/// Base32 encoding and decoding of shared secrets.
pub mod base32;
/// Engine configuration, persisted as JSON.
pub mod config;
/// Generation and validation of time-based codes.
pub mod engine;
/// Keyed-hash (HMAC) providers the engine is built around.
pub mod hash;
