//! Format detection from file extensions.

use std::path::Path;

/// Image formats known to ray-io.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file extension only (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            _ => Format::Unknown,
        }
    }
}
