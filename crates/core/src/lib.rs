//! Logoforge domain library.
//!
//! Holds everything about a logo request that does not touch the network:
//! the request schema and its validation, the style lexicon, prompt
//! rendering, the fixed generation parameters, and the quota constants
//! shared by the API layer.

pub mod error;
pub mod generation;
pub mod prompt;
pub mod quota;
pub mod request;
pub mod style;
