//! The derived site password value object.

use std::fmt;

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::encoder::{apply_constraints, encode_digest, has_non_word};
use crate::core::hasher::{legacy_bytes, legacy_len, HmacMd5, KeyedDigest};
use crate::error::PwdHashError;

/// Length added to the secret length to get the requested output size.
///
/// Matches the `@@` prefix the legacy tool used to mark password fields.
const PASSWORD_PREFIX_LEN: usize = 2;

/// A site-specific password derived from a master secret and a domain.
///
/// The secret is only used during construction and is not stored. The
/// rendered value is wiped from memory on drop and redacted from `Debug`.
///
/// # Examples
///
/// ```
/// use pwdhash::HashedPassword;
///
/// let password = HashedPassword::create("my53cret#", "example.com")?;
/// assert_eq!(password.render(), "Bu6aSm+Zcsf");
/// # Ok::<(), pwdhash::PwdHashError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct HashedPassword {
    rendered: String,
}

impl HashedPassword {
    /// Derive the password for `domain` with the legacy HMAC-MD5 scheme.
    ///
    /// Fails with [`PwdHashError::EmptySecret`] if `secret` is empty.
    pub fn create(secret: &str, domain: &str) -> Result<Self, PwdHashError> {
        Self::create_with(&HmacMd5, secret, domain)
    }

    /// Derive the password using an explicit digest strategy.
    pub fn create_with<D: KeyedDigest + ?Sized>(
        digest: &D,
        secret: &str,
        domain: &str,
    ) -> Result<Self, PwdHashError> {
        if secret.is_empty() {
            return Err(PwdHashError::EmptySecret);
        }

        let size = legacy_len(secret) + PASSWORD_PREFIX_LEN;
        trace!("deriving site password of requested size {}", size);

        let key = legacy_bytes(secret);
        let message = legacy_bytes(domain);
        let encoded = encode_digest(&digest.digest(&key, &message));
        let rendered = apply_constraints(&encoded, size, has_non_word(secret));

        Ok(Self { rendered })
    }

    /// The derived password as an owned string.
    pub fn render(&self) -> String {
        self.rendered.clone()
    }

    /// The derived password as a borrowed string.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Length of the derived password in characters.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    /// Always false; a derived password has at least four characters.
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

impl fmt::Display for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("rendered", &"<redacted>")
            .finish()
    }
}
