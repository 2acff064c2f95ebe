//! Keyed, deterministic hashing of external identity subjects.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Derive the stored identity hash for a provider subject.
///
/// `hex(HMAC-SHA256(key, provider + ":" + subject))`. Deterministic for a given
/// key so it can be looked up through a unique index; the raw subject is never
/// persisted and cannot be recovered without the key.
pub fn derive_identity_hash(key: &[u8], provider: &str, subject: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(provider.as_bytes());
    mac.update(b":");
    mac.update(subject.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
