//! Digest encoding and the legacy character-class constraints.
//!
//! The encoded digest is not used verbatim. The legacy scheme keeps a head
//! of the encoded string, then appends one character per character class
//! (upper, lower, digit, symbol) drawn from the remaining "extras", and
//! finally rotates the result. Existing site passwords depend on every step
//! of this, including how an exhausted extras queue behaves.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

/// Characters reserved at the end of the head for the class constraints.
const RESERVED_CHARS: usize = 4;

/// Base64-encode a digest with the standard alphabet and no padding.
pub fn encode_digest(digest: &[u8]) -> String {
    STANDARD_NO_PAD.encode(digest)
}

/// Regex `\W` as the legacy scheme sees it: anything outside `[A-Za-z0-9_]`.
fn is_non_word(byte: u8) -> bool {
    !(byte.is_ascii_alphanumeric() || byte == b'_')
}

/// Whether a secret contains a character outside `[A-Za-z0-9_]`.
pub fn has_non_word(text: &str) -> bool {
    text.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Queue of encoded characters left over after the head.
///
/// Once empty it keeps yielding NUL, which is how the legacy scheme ends up
/// with zero bytes in its output for long secrets.
struct Extras<'a> {
    rest: std::slice::Iter<'a, u8>,
}

impl<'a> Extras<'a> {
    fn new(rest: &'a [u8]) -> Self {
        Self { rest: rest.iter() }
    }

    fn take(&mut self) -> u8 {
        self.rest.next().copied().unwrap_or(0)
    }

    fn between(&mut self, base: u8, interval: u8) -> u8 {
        base + self.take() % interval
    }
}

/// Apply the legacy constraints to an encoded digest.
///
/// `size` is the requested output size (secret length plus two) and
/// `nonalphanumeric` tells whether the secret itself contains a symbol.
/// NUL characters produced by an exhausted extras queue are removed, and
/// the result never exceeds the length of `encoded`.
pub fn apply_constraints(encoded: &str, size: usize, nonalphanumeric: bool) -> String {
    let bytes = encoded.as_bytes();
    let start = size.saturating_sub(RESERVED_CHARS).min(bytes.len());
    let mut result = bytes[..start].to_vec();
    let mut extras = Extras::new(&bytes[start..]);

    let next = if result.iter().any(u8::is_ascii_uppercase) {
        extras.take()
    } else {
        extras.between(b'A', 26)
    };
    result.push(next);

    let next = if result.iter().any(u8::is_ascii_lowercase) {
        extras.take()
    } else {
        extras.between(b'a', 26)
    };
    result.push(next);

    let next = if result.iter().any(u8::is_ascii_digit) {
        extras.take()
    } else {
        extras.between(b'0', 10)
    };
    result.push(next);

    let next = if nonalphanumeric && result.iter().copied().any(is_non_word) {
        extras.take()
    } else {
        b'+'
    };
    result.push(next);

    if !nonalphanumeric {
        while let Some(pos) = result.iter().copied().position(is_non_word) {
            result[pos] = extras.between(b'A', 26);
        }
    }

    let amount = usize::from(extras.take()) % result.len();
    result.rotate_left(amount);

    result
        .into_iter()
        .filter(|&b| b != 0)
        .take(bytes.len())
        .map(char::from)
        .collect()
}
