//! Error types for domain extraction and password derivation.

use thiserror::Error;

/// Errors that can occur while extracting a domain or deriving a password.
///
/// Both variants are caller-input errors. Retrying with the same input
/// always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PwdHashError {
    /// No site address was supplied, so no domain can be derived.
    #[error("A site address is required to derive a domain")]
    MissingAddress,

    /// The master secret is empty.
    #[error("The secret must not be empty")]
    EmptySecret,
}
