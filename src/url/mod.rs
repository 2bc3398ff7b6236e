//! URL handling module for Rockpool
//!
//! This module provides relative-reference resolution, host extraction,
//! registrable-domain derivation, and the internal-link matching policy
//! that anchors a crawl to its seed domain.

mod domain;
mod matcher;
mod resolve;

// Re-export main functions
pub use domain::{extract_domain, registrable_domain};
pub use matcher::DomainMatch;
pub use resolve::{resolve, resolve_all};
