use crate::codec::IconCodec;
use crate::error::FaviconError;
use anyhow::anyhow;
use std::fmt::{self, Display};
use std::path::Path;

/// ICO directory entries store each dimension in a single byte, so no
/// frame can exceed 256 pixels per axis.
const MAX_ICO_DIMENSION: u32 = 256;

/// One (width, height) entry of the output icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn new(width: u32, height: u32) -> Self {
        IconSize { width, height }
    }

    pub const fn square(edge: u32) -> Self {
        IconSize::new(edge, edge)
    }
}

impl Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The standard favicon size set.
pub const DEFAULT_SIZES: [IconSize; 4] = [
    IconSize::square(16),
    IconSize::square(32),
    IconSize::square(48),
    IconSize::square(64),
];

/// Converts the image at `source` into a multi-resolution ICO at `output`.
///
/// The source is decoded through `codec`, normalized to four-channel RGBA
/// (alpha defaults to fully opaque) and encoded with one bitmap per entry
/// of `sizes`, overwriting any existing file at `output`. On success
/// exactly one file is written; on any failure nothing is, and any
/// pre-existing file at `output` is left untouched.
pub fn generate(
    codec: &dyn IconCodec,
    source: &Path,
    output: &Path,
    sizes: &[IconSize],
) -> Result<(), FaviconError> {
    validate_sizes(sizes)?;
    let image = codec.load(source)?;
    let image = codec.to_rgba(image);
    codec.save_multi_size(&image, output, sizes)
}

fn validate_sizes(sizes: &[IconSize]) -> Result<(), FaviconError> {
    if sizes.is_empty() {
        return Err(anyhow!("at least one icon size is required").into());
    }
    for size in sizes {
        if size.width == 0 || size.height == 0 {
            return Err(anyhow!("icon size {size} has a zero dimension").into());
        }
        if size.width > MAX_ICO_DIMENSION || size.height > MAX_ICO_DIMENSION {
            return Err(anyhow!(
                "icon size {size} exceeds the ICO limit of {MAX_ICO_DIMENSION} pixels per axis"
            )
            .into());
        }
    }
    Ok(())
}
