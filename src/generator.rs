//! End-to-end generation from a raw site address and a secret.

use log::debug;

use crate::core::password::HashedPassword;
use crate::domain::extractor::DomainExtractor;
use crate::domain::suffix::{CompoundSuffixes, SuffixRules};
use crate::error::PwdHashError;

/// Combines domain extraction and derivation behind a blank-input guard.
#[derive(Debug, Clone)]
pub struct Generator<R = &'static CompoundSuffixes> {
    extractor: DomainExtractor<R>,
    raw: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DomainExtractor::default())
    }
}

impl<R: SuffixRules> Generator<R> {
    pub fn new(extractor: DomainExtractor<R>) -> Self {
        Self {
            extractor,
            raw: false,
        }
    }

    /// Use the address verbatim as the domain instead of extracting it.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// The domain `address` is hashed against.
    pub fn domain_for(&self, address: &str) -> String {
        if self.raw {
            address.to_string()
        } else {
            self.extractor.extract(address)
        }
    }

    /// Derive the site password for `address`.
    ///
    /// Whitespace-only input counts as missing, so nothing is derived unless
    /// both an address and a secret were supplied.
    pub fn generate(&self, address: &str, secret: &str) -> Result<HashedPassword, PwdHashError> {
        if address.trim().is_empty() {
            return Err(PwdHashError::MissingAddress);
        }
        if secret.trim().is_empty() {
            return Err(PwdHashError::EmptySecret);
        }

        let domain = self.domain_for(address);
        debug!("deriving password for domain {}", domain);
        HashedPassword::create(secret, &domain)
    }
}

/// Derive the site password for `address` with the default extractor.
///
/// # Examples
///
/// ```
/// use pwdhash::generate;
///
/// let password = generate("https://www.example.com/login", "my53cret#")?;
/// assert_eq!(password.as_str(), "Bu6aSm+Zcsf");
/// # Ok::<(), pwdhash::PwdHashError>(())
/// ```
pub fn generate(address: &str, secret: &str) -> Result<HashedPassword, PwdHashError> {
    Generator::default().generate(address, secret)
}
