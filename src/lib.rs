//! Converts a project logo into a multi-resolution `favicon.ico`.
//!
//! The conversion itself lives in [`generate`]: load a source raster image,
//! normalize it to RGBA, and encode one bitmap per requested size into a
//! single ICO file. The image decode/encode capability is injected through
//! the [`IconCodec`] trait so the capability-missing path is an ordinary,
//! testable branch rather than an environment probe.

pub mod codec;
pub mod error;
pub mod favicon;

pub use codec::{IconCodec, ImageCodec};
pub use error::FaviconError;
pub use favicon::{generate, IconSize, DEFAULT_SIZES};
