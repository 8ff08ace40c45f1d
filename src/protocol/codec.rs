//! Value codec
//!
//! Encoding and decoding of stored values for the line-oriented wire.
//!
//! ## Encoding Rule
//!
//! - A value whose bytes form a numeric literal is transmitted verbatim, so
//!   server-side counters (`incr`/`decr`) keep working on it.
//! - Every other value is base64-encoded: the transport frames on CR/LF, and
//!   raw payload bytes containing either would corrupt framing.
//!
//! A value whose base64 form happens to be purely numeric is ambiguous on
//! read; callers storing such payloads should carry their own marker.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{MemcError, Result};

/// Check whether `text` is a numeric literal
///
/// Grammar: optional sign, decimal digits with an optional fractional part
/// (or a bare fractional part), optional exponent. Hex, infinities, NaN, and
/// surrounding whitespace are not numeric.
pub fn is_numeric(text: &str) -> bool {
    let mut rest = text.strip_prefix(['+', '-']).unwrap_or(text);

    if rest.is_empty() {
        return false;
    }

    let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let has_int = int_len > 0;
    rest = &rest[int_len..];

    let mut has_frac = false;
    if let Some(after_dot) = rest.strip_prefix('.') {
        let frac_len = after_dot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dot.len());
        has_frac = frac_len > 0;
        rest = &after_dot[frac_len..];
    }

    // "." alone, "e5", "+." are not numbers
    if !has_int && !has_frac {
        return false;
    }

    if let Some(exp) = rest.strip_prefix(['e', 'E']) {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        return !exp.is_empty() && exp.bytes().all(|b| b.is_ascii_digit());
    }

    rest.is_empty()
}

/// Encode a value for transmission
///
/// Numeric literals pass through unchanged; everything else is base64.
pub fn pack(value: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(value) {
        if is_numeric(text) {
            return text.to_string();
        }
    }

    STANDARD.encode(value)
}

/// Decode a value received from the wire
///
/// Numeric literals pass through unchanged; everything else is expected to
/// be base64 and decoding failures surface as [`MemcError::Codec`].
pub fn unpack(text: &str) -> Result<Vec<u8>> {
    if is_numeric(text) {
        return Ok(text.as_bytes().to_vec());
    }

    STANDARD
        .decode(text)
        .map_err(|e| MemcError::Codec(format!("invalid base64 payload: {}", e)))
}
