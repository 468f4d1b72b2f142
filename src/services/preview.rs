//! Pre-upload image previews.
//!
//! When files are picked for a post form, only images get a preview card:
//! the file name plus a human-readable size. Non-image selections are
//! skipped rather than rejected; the form can still submit them.

/// A file picked in a form's file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the picker.
    pub name: String,
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    /// Returns whether this file gets a preview.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// One preview card for the container under the file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    /// File name caption.
    pub file_name: String,
    /// Formatted size caption, e.g. `1.5 MB`.
    pub size_label: String,
}

/// Builds preview cards for a selection, keeping images only.
pub fn build_previews(files: &[SelectedFile]) -> Vec<PreviewItem> {
    files
        .iter()
        .filter(|f| f.is_image())
        .map(|f| PreviewItem {
            file_name: f.name.clone(),
            size_label: format_file_size(f.size),
        })
        .collect()
}

/// Formats a byte count for the size caption.
///
/// Base-1024 ladder capped at GB, value rounded to two decimals with no
/// trailing zeros: `0 Bytes`, `500 Bytes`, `1.5 KB`, `1 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}
