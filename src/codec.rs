use crate::error::FaviconError;
use crate::favicon::IconSize;
use anyhow::Context;
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::FilterType,
    ColorType, DynamicImage, ImageFormat,
};
use std::{io::Cursor, path::Path};

/// The image decode/encode capability the generator depends on.
///
/// Injected explicitly so a build without codec support (or a test stub)
/// is an ordinary error branch instead of a runtime-wide availability
/// check.
pub trait IconCodec {
    /// Decode the raster image at `path`.
    fn load(&self, path: &Path) -> Result<DynamicImage, FaviconError>;

    /// Normalize to four-channel RGBA. Added alpha is fully opaque;
    /// already-RGBA images pass through unchanged.
    fn to_rgba(&self, image: DynamicImage) -> DynamicImage {
        match image {
            DynamicImage::ImageRgba8(_) => image,
            other => DynamicImage::ImageRgba8(other.to_rgba8()),
        }
    }

    /// Encode one bitmap per entry of `sizes` into a single ICO file at
    /// `path`, overwriting any existing file there.
    fn save_multi_size(
        &self,
        image: &DynamicImage,
        path: &Path,
        sizes: &[IconSize],
    ) -> Result<(), FaviconError>;
}

/// The real codec, backed by the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct ImageCodec;

impl ImageCodec {
    /// Checks that the build carries the decoders and the ICO encoder the
    /// generator needs. Fails with `CapabilityUnavailable` when the crate
    /// was built without them.
    pub fn detect() -> Result<Self, FaviconError> {
        if ImageFormat::Png.can_read() && ImageFormat::Ico.can_write() {
            Ok(ImageCodec)
        } else {
            Err(FaviconError::CapabilityUnavailable)
        }
    }
}

impl IconCodec for ImageCodec {
    fn load(&self, path: &Path) -> Result<DynamicImage, FaviconError> {
        let image = image::open(path)
            .with_context(|| format!("failed to load image '{}'", path.display()))?;
        Ok(image)
    }

    fn save_multi_size(
        &self,
        image: &DynamicImage,
        path: &Path,
        sizes: &[IconSize],
    ) -> Result<(), FaviconError> {
        let mut frames = Vec::with_capacity(sizes.len());
        for size in sizes {
            let resized = image.resize_exact(size.width, size.height, FilterType::Lanczos3);
            let rgba = resized.to_rgba8();
            let frame = IcoFrame::as_png(rgba.as_raw(), size.width, size.height, ColorType::Rgba8)
                .with_context(|| format!("failed to encode the {size} frame"))?;
            frames.push(frame);
        }

        // Encode fully in memory first so a failed encode never leaves a
        // truncated file on disk.
        let mut buf = Cursor::new(Vec::new());
        IcoEncoder::new(&mut buf)
            .encode_images(&frames)
            .context("failed to encode the icon")?;

        std::fs::write(path, buf.into_inner())
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}
