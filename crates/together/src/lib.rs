//! Client for the Together image-generation API.
//!
//! Submits a [`GenerationRequest`](logoforge_core::generation::GenerationRequest)
//! to `/images/generations`, optionally through an observability proxy, and
//! classifies provider failures into a tagged [`GenerationError`].

pub mod client;
pub mod error;
pub mod image;

pub use client::{CallOptions, ImageGenerator, ObservabilityProxy, TogetherClient};
pub use error::GenerationError;
pub use image::GeneratedImage;
