//! Site address processing.
//!
//! This module contains the domain-related functionality:
//! - Host extraction from URLs, hosts and bare domains
//! - Public suffix rules (legacy compound table or full PSL)
//! - Registrable domain extraction

pub mod extractor;
pub mod suffix;

// Re-export main functionality
pub use extractor::{extract_domain, host_of, DomainExtractor};
pub use suffix::{CompoundSuffixes, PublicSuffixList, SuffixRules};
