//! Authentication and identity primitives.
//!
//! - [`session`] -- Session-token extraction and verification.
//! - [`identity`] -- The identity provider capability and its HTTP adapter.

pub mod identity;
pub mod session;
