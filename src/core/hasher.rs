//! Keyed digest step of the derivation pipeline.

use hmac::{Hmac, Mac};
use md5::Md5;
use zeroize::Zeroizing;

/// A keyed hash that turns `(key, message)` into a fixed-size digest.
///
/// The derivation treats this as a replaceable strategy. Any implementation
/// other than [`HmacMd5`] produces passwords that are not compatible with
/// previously generated ones.
pub trait KeyedDigest {
    /// Compute the digest of `message` under `key`.
    fn digest(&self, key: &[u8], message: &[u8]) -> Vec<u8>;
}

/// HMAC-MD5 with the secret as key and the domain as message.
///
/// This is the scheme every existing site password was generated with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HmacMd5;

impl KeyedDigest for HmacMd5 {
    fn digest(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Md5>::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }
}

impl<D: KeyedDigest + ?Sized> KeyedDigest for &D {
    fn digest(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        (**self).digest(key, message)
    }
}

/// Convert text to the byte sequence the legacy scheme hashes.
///
/// Each UTF-16 code unit contributes its low 8 bits, so code points up to
/// U+00FF map to their Latin-1 byte and everything above is truncated.
/// The buffer is wiped when dropped since it usually holds the secret.
pub fn legacy_bytes(text: &str) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(text.encode_utf16().map(|unit| (unit & 0xff) as u8).collect())
}

/// Number of UTF-16 code units in `text`, the length unit of the legacy scheme.
pub fn legacy_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_md5_known_value() {
        let digest = HmacMd5.digest(b"my53cret#", b"example.com");
        assert_eq!(hex::encode(&digest), "06ee9a4a6f9972c7c1cd11d033c97eba");
    }

    #[test]
    fn test_digest_is_sixteen_bytes() {
        assert_eq!(HmacMd5.digest(b"a", b"").len(), 16);
        assert_eq!(HmacMd5.digest(&[0x61; 200], b"example.com").len(), 16);
    }

    #[test]
    fn test_digest_through_reference() {
        fn run<D: KeyedDigest>(strategy: D) -> Vec<u8> {
            strategy.digest(b"key", b"msg")
        }

        let strategy: &dyn KeyedDigest = &HmacMd5;
        assert_eq!(run(strategy), HmacMd5.digest(b"key", b"msg"));
    }

    #[test]
    fn test_legacy_bytes_ascii() {
        assert_eq!(legacy_bytes("abc").as_slice(), b"abc");
    }

    #[test]
    fn test_legacy_bytes_latin1() {
        // U+00FC and U+00E9 fit in one byte each
        assert_eq!(legacy_bytes("üé").as_slice(), &[0xfcu8, 0xe9]);
    }

    #[test]
    fn test_legacy_bytes_truncate_wide_units() {
        // U+4E2D keeps only its low byte
        assert_eq!(legacy_bytes("中").as_slice(), &[0x2du8]);
        // Astral characters become two surrogate units
        assert_eq!(legacy_bytes("😀").len(), 2);
    }

    #[test]
    fn test_legacy_len() {
        assert_eq!(legacy_len(""), 0);
        assert_eq!(legacy_len("mü53crét#"), 9);
        assert_eq!(legacy_len("中文العربي"), 8);
        assert_eq!(legacy_len("😀"), 2);
    }
}
