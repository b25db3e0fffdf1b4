//! Core password derivation.
//!
//! This module contains the derivation pipeline:
//! - Legacy byte encoding and keyed hashing
//! - Digest encoding and character-class constraints
//! - The `HashedPassword` value object

pub mod encoder;
pub mod hasher;
pub mod password;

// Re-export main functionality
pub use encoder::{apply_constraints, encode_digest};
pub use hasher::{legacy_bytes, legacy_len, HmacMd5, KeyedDigest};
pub use password::HashedPassword;
