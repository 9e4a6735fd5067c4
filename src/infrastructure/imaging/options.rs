use super::TrimError;
use std::str::FromStr;

pub const DEFAULT_ALPHA_THRESHOLD: u8 = 10;

/// Transparent border, in pixels, added around the trimmed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 0,
            right: 12,
            bottom: 24,
            left: 12,
        }
    }
}

/// Accepts `top,right,bottom,left` in pixels.
impl FromStr for Padding {
    type Err = TrimError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let sides = value
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>().map_err(|_| {
                    TrimError::InvalidPadding(format!("`{part}` is not a pixel count"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match sides.as_slice() {
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(TrimError::InvalidPadding(format!(
                "expected 4 comma separated values, got {}",
                sides.len()
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOptions {
    /// Pixels with alpha at or below this value count as margin.
    pub threshold: u8,
    pub padding: Padding,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ALPHA_THRESHOLD,
            padding: Padding::default(),
        }
    }
}
