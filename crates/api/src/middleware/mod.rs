//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the caller through the identity provider.

pub mod auth;
