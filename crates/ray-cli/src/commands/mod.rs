//! CLI command implementations

pub mod gradient;
pub mod sky;

use anyhow::{Context, Result};
use ray_core::Image;
use std::path::Path;

/// Save image to path, creating missing parent directories.
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    ray_io::write(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
