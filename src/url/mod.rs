//! URL handling module for Tidecrawl
//!
//! This module provides domain extraction and the same-domain scope test that
//! gates frontier admission.

mod domain;
mod scope;

// Re-export main functions
pub use domain::extract_domain;
pub use scope::in_scope;
