//! Conversion between the canonical 36-character string and the raw 16-byte buffer.
//!
//! The canonical layout groups the 16 bytes as 4-2-2-2-6, hex encodes each group and joins
//! them with hyphens. Both directions walk the same group table so they cannot drift apart.

use crate::{UuidError, UuidResult};

/// Raw 128-bit UUID value in network byte order.
pub type RawUuid = [u8; 16];

/// Length of the hyphenated textual form.
pub const CANONICAL_LEN: usize = 36;

/// Character offsets of the four hyphens.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Byte ranges of the five hex groups.
const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// Decodes a canonical UUID string into its 16 raw bytes.
///
/// Hex digits may be upper or lower case; hyphens must sit at offsets 8, 13, 18 and 23.
///
/// # Errors
///
/// Returns [`UuidError::Format`] if `input` is not 36 characters long, a hyphen is missing
/// or misplaced, or any other position is not a hex digit.
pub fn to_raw(input: &str) -> UuidResult<RawUuid> {
    let bytes = input.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return Err(UuidError::Format(format!(
            "expected {} characters, got {}: '{}'",
            CANONICAL_LEN,
            bytes.len(),
            input
        )));
    }

    if let Some(pos) = HYPHENS.iter().copied().find(|&i| bytes[i] != b'-') {
        return Err(UuidError::Format(format!(
            "expected '-' at offset {}: '{}'",
            pos, input
        )));
    }

    let mut raw = [0u8; 16];
    let mut offset = 0;
    for &(start, end) in &GROUPS {
        let digits = (end - start) * 2;
        hex::decode_to_slice(&bytes[offset..offset + digits], &mut raw[start..end])
            .map_err(|e| UuidError::Format(format!("{}: '{}'", e, input)))?;
        offset += digits + 1;
    }

    Ok(raw)
}

/// Formats 16 raw bytes as a lowercase canonical UUID string.
pub fn to_canonical(raw: &RawUuid) -> String {
    let mut out = String::with_capacity(CANONICAL_LEN);
    for (i, &(start, end)) in GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&hex::encode(&raw[start..end]));
    }
    out
}

/// Returns true if `candidate` has the canonical UUID shape.
///
/// This is a purely syntactic check: 36 characters, hyphens at the fixed offsets, hex digits
/// (either case) everywhere else. The version and variant digits are not inspected.
///
/// Never fails; malformed input simply yields `false`.
pub fn validate(candidate: &str) -> bool {
    shape_matches(candidate, |b| b.is_ascii_hexdigit())
}

/// Returns true if `candidate` is in the exact form this crate emits.
///
/// Stricter than [`validate`]: hex digits must be lowercase (`0-9` and `a-f`).
pub fn is_canonical(candidate: &str) -> bool {
    shape_matches(candidate, |b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn shape_matches(candidate: &str, is_digit: impl Fn(u8) -> bool) -> bool {
    candidate.len() == CANONICAL_LEN
        && candidate.bytes().enumerate().all(|(i, b)| {
            if HYPHENS.contains(&i) {
                b == b'-'
            } else {
                is_digit(b)
            }
        })
}
