//! HMAC-SHA3-256 commitment engine.
//!
//! A commitment binds the program to a secret value before the player
//! moves: `tag = HMAC-SHA3-256(key, decimal(value))`. The committed message
//! is the UTF-8 bytes of the canonical decimal encoding of the value (no
//! sign, no leading zeros, `0` for zero itself). Tags and keys are shown as
//! standard base64 with padding.
//!
//! Pure and stateless; disclosing `(key, value)` after the player's input
//! lets anyone recompute the tag from the transcript alone.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Mac, SimpleHmac};
use sha3::Sha3_256;

pub use crate::rng::KEY_LEN;

/// Length of a commitment tag in bytes.
pub const TAG_LEN: usize = 32;

type HmacSha3 = SimpleHmac<Sha3_256>;

/// Commit to `value` under `key`. Deterministic for fixed inputs.
pub fn commit(key: &[u8; KEY_LEN], value: u64) -> [u8; TAG_LEN] {
    let mut mac = HmacSha3::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(value.to_string().as_bytes());
    mac.finalize().into_bytes().into()
}

/// Standard base64 with padding; a 32-byte input encodes to 44 characters.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> Option<Vec<u8>> {
    STANDARD.decode(text).ok()
}

/// Replay check for a disclosed round: does `(key, value)` reproduce
/// `tag_b64`? Keys of any length other than [`KEY_LEN`] are rejected.
pub fn verify(key: &[u8], value: u64, tag_b64: &str) -> bool {
    let Ok(key) = <&[u8; KEY_LEN]>::try_from(key) else {
        return false;
    };
    encode(&commit(key, value)) == tag_b64
}
