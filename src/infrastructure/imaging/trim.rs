use super::{TrimError, TrimOptions};
use image::{RgbaImage, imageops};

/// Largest RGBA canvas, in bytes, the tool will allocate.
pub const MAX_CANVAS_BYTES: u64 = 1 << 30;

/// Axis-aligned rectangle inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Smallest rectangle containing every pixel whose alpha exceeds `threshold`.
pub fn content_bounds(image: &RgbaImage, threshold: u8) -> Option<Bounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > threshold {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop `image` to its content and surround it with transparent padding.
pub fn trim_and_pad(image: &RgbaImage, options: &TrimOptions) -> Result<RgbaImage, TrimError> {
    let bounds = content_bounds(image, options.threshold).ok_or(TrimError::Blank {
        threshold: options.threshold,
    })?;
    let (width, height) = padded_dimensions(bounds, options)?;
    let content =
        imageops::crop_imm(image, bounds.x, bounds.y, bounds.width, bounds.height).to_image();
    let padding = options.padding;

    // Zeroed buffer is fully transparent.
    let mut canvas = RgbaImage::new(width, height);
    imageops::replace(
        &mut canvas,
        &content,
        i64::from(padding.left),
        i64::from(padding.top),
    );

    tracing::debug!(?bounds, width, height, "trimmed transparent margins");
    Ok(canvas)
}

/// Canvas size after padding, rejected before allocation when too big.
fn padded_dimensions(bounds: Bounds, options: &TrimOptions) -> Result<(u32, u32), TrimError> {
    let padding = options.padding;
    let width = u64::from(bounds.width) + u64::from(padding.left) + u64::from(padding.right);
    let height = u64::from(bounds.height) + u64::from(padding.top) + u64::from(padding.bottom);

    let too_large = || TrimError::TooLarge {
        width,
        height,
        limit: MAX_CANVAS_BYTES,
    };
    // Padded sides may exceed u32, so the byte count is computed in u128.
    let bytes = u128::from(width) * u128::from(height) * 4;
    if bytes > u128::from(MAX_CANVAS_BYTES) {
        return Err(too_large());
    }

    Ok((
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
    ))
}
