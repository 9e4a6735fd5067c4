//! Offline PNG preprocessing: trims transparent margins from an image and
//! re-pads it with a fixed transparent border.

mod error;
mod options;
mod png;
mod trim;

pub use error::TrimError;
pub use options::{Padding, TrimOptions};
pub use png::encode_png;
pub use trim::{Bounds, MAX_CANVAS_BYTES, content_bounds, trim_and_pad};

use std::{fs, path::Path};

/// Read `input`, trim and pad it, then write the PNG to `output`.
///
/// Parent directories of `output` are created when missing. Returns the
/// dimensions of the written image.
pub fn process_file(
    input: &Path,
    output: &Path,
    options: &TrimOptions,
) -> Result<(u32, u32), TrimError> {
    let bytes = fs::read(input).map_err(|source| TrimError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)?;
    tracing::debug!(
        width = decoded.width(),
        height = decoded.height(),
        path = %input.display(),
        "decoded source image"
    );

    let padded = trim_and_pad(&decoded.to_rgba8(), options)?;
    let encoded = encode_png(&padded)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| TrimError::Write {
            path: output.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, &encoded).map_err(|source| TrimError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        width = padded.width(),
        height = padded.height(),
        bytes = encoded.len(),
        path = %output.display(),
        "wrote trimmed image"
    );
    Ok(padded.dimensions())
}
