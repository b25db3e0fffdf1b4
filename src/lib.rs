//! pwdhash - Deterministic per-site passwords
//!
//! Derives a site-specific password from a master secret and the site's
//! registrable domain, so the master secret never appears verbatim on more
//! than one site. The derivation reproduces the legacy PwdHash scheme bit for
//! bit, which keeps previously generated passwords valid.
//!
//! # Quick Start
//!
//! ```
//! use pwdhash::{extract_domain, HashedPassword};
//!
//! // Reduce an address to its registrable domain
//! let domain = extract_domain(Some("https://login.example.co.uk/test.htm"))?;
//! assert_eq!(domain, "example.co.uk");
//!
//! // Derive the password for that domain
//! let password = HashedPassword::create("my53cret#", "example.com")?;
//! assert_eq!(password.render(), "Bu6aSm+Zcsf");
//! # Ok::<(), pwdhash::PwdHashError>(())
//! ```
//!
//! # Derivation
//!
//! | Step        | Description |
//! |-------------|-------------|
//! | bytes       | Low byte of each UTF-16 unit of secret and domain |
//! | digest      | HMAC-MD5, secret as key, domain as message |
//! | encode      | Base64, standard alphabet, no padding (22 chars) |
//! | constraints | Ensure upper, lower, digit and symbol classes, then rotate |
//! | length      | `clamp(secret_len + 2, 4, 22)` |
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, PwdHashError>`. The only failures are
//! an absent site address and an empty secret.

// Re-export main derivation types
pub use crate::core::{HashedPassword, HmacMd5, KeyedDigest};

// Re-export domain extraction
pub use crate::domain::{extract_domain, CompoundSuffixes, DomainExtractor, PublicSuffixList, SuffixRules};

// Re-export public types
pub use error::PwdHashError;
pub use generator::{generate, Generator};

// Module declarations
pub mod core;
pub mod domain;
pub mod error;
pub mod generator;
