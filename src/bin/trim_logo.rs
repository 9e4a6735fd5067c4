// src/bin/trim_logo.rs
//! Trims transparent margins from the site logo and re-pads it.
//!
//! Environment:
//! - `LOGO_INPUT` (default `public/logo-source.png`)
//! - `LOGO_OUTPUT` (default `public/logo.png`)
//! - `LOGO_TRIM_THRESHOLD` alpha cut-off, 0-255 (default 10)
//! - `LOGO_PADDING` as `top,right,bottom,left` pixels (default `0,12,24,12`)
use anyhow::{Context, Result};
use gazette::infrastructure::imaging::{Padding, TrimOptions, process_file};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let input = PathBuf::from(
        env::var("LOGO_INPUT").unwrap_or_else(|_| "public/logo-source.png".to_string()),
    );
    let output =
        PathBuf::from(env::var("LOGO_OUTPUT").unwrap_or_else(|_| "public/logo.png".to_string()));

    let mut options = TrimOptions::default();
    if let Ok(raw) = env::var("LOGO_TRIM_THRESHOLD") {
        options.threshold = raw
            .trim()
            .parse()
            .with_context(|| format!("LOGO_TRIM_THRESHOLD must be 0-255, got `{raw}`"))?;
    }
    if let Ok(raw) = env::var("LOGO_PADDING") {
        options.padding = raw.parse::<Padding>()?;
    }

    let (width, height) = process_file(&input, &output, &options)?;
    println!("{} -> {} ({width}x{height})", input.display(), output.display());
    Ok(())
}
