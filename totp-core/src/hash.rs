//! Keyed-hash (HMAC) providers.
//!
//! The engine is polymorphic over the digest algorithm: anything that can
//! compute `hmac(key, message)` and report its digest size can be plugged
//! in. Swapping SHA-1 for the SHA-2 family means supplying a different
//! provider at construction, never touching the engine.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::sync::Arc;

/// A keyed-hash capability supplied to the OTP engine.
///
/// Implementations must be side-effect-free and reentrant; the engine
/// shares one provider across concurrent generate/validate calls without
/// locking.
pub trait HashProvider: Send + Sync {
    /// Short algorithm name usable for display, e.g. in a provisioning URI.
    fn name(&self) -> &'static str;

    /// Size in bytes of a full digest.
    fn output_size(&self) -> usize;

    /// Computes `HMAC(key, message)`.
    fn hmac(&self, key: &[u8], message: &[u8]) -> Vec<u8>;
}

/// HMAC over SHA-1 (160-bit digests). Required by Google Authenticator.
pub struct HmacSha1;

impl HashProvider for HmacSha1 {
    fn name(&self) -> &'static str {
        "sha1"
    }

    fn output_size(&self) -> usize {
        20
    }

    fn hmac(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }
}

/// HMAC over SHA-256 (256-bit digests).
pub struct HmacSha256;

impl HashProvider for HmacSha256 {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn output_size(&self) -> usize {
        32
    }

    fn hmac(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }
}

/// HMAC over SHA-512 (512-bit digests).
pub struct HmacSha512;

impl HashProvider for HmacSha512 {
    fn name(&self) -> &'static str {
        "sha512"
    }

    fn output_size(&self) -> usize {
        64
    }

    fn hmac(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Resolves a provider by its configured name.
///
/// Returns `None` for an unknown name; an engine built from it runs
/// unbound and reports codes as unavailable instead of crashing.
#[must_use]
pub fn provider(name: &str) -> Option<Arc<dyn HashProvider>> {
    match name {
        "sha1" => Some(Arc::new(HmacSha1)),
        "sha256" => Some(Arc::new(HmacSha256)),
        "sha512" => Some(Arc::new(HmacSha512)),
        _ => None,
    }
}
