use std::fmt::{self, Display};

/// Outcome of a failed favicon generation.
///
/// The two kinds are distinguishable so callers can branch: a missing image
/// codec gets an installation hint, everything else gets the underlying
/// cause.
#[derive(Debug)]
pub enum FaviconError {
    /// Image decode/encode support is not present in this build.
    CapabilityUnavailable,
    /// Any other failure during load, convert, encode or write, carrying
    /// the underlying cause chain.
    Generation(anyhow::Error),
}

impl Display for FaviconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaviconError::CapabilityUnavailable => {
                f.write_str("image codec support is unavailable")
            }
            FaviconError::Generation(err) => write!(f, "{err:#}"),
        }
    }
}

impl std::error::Error for FaviconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FaviconError::CapabilityUnavailable => None,
            FaviconError::Generation(err) => Some(err.as_ref()),
        }
    }
}

impl From<anyhow::Error> for FaviconError {
    fn from(err: anyhow::Error) -> Self {
        FaviconError::Generation(err)
    }
}
