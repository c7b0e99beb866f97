use favicon_gen::{generate, FaviconError, ImageCodec, DEFAULT_SIZES};
use std::path::Path;

const SOURCE_PATH: &str = "assets/logo.png";
const OUTPUT_PATH: &str = "assets/favicon.ico";

fn main() {
    // Failures are reported on the console only; the process exits 0
    // either way, matching the historical behavior of this asset step.
    match run() {
        Ok(()) => println!("✓ Created {OUTPUT_PATH} from {SOURCE_PATH}"),
        Err(FaviconError::CapabilityUnavailable) => {
            println!("⚠ Image codec support is unavailable. Favicon not created.");
            println!("  Rebuild with the `image` crate's `png` and `ico` features enabled.");
        }
        Err(err) => println!("✗ Error creating favicon: {err}"),
    }
}

fn run() -> Result<(), FaviconError> {
    let codec = ImageCodec::detect()?;
    generate(
        &codec,
        Path::new(SOURCE_PATH),
        Path::new(OUTPUT_PATH),
        &DEFAULT_SIZES,
    )
}
