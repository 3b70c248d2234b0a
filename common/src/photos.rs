//! Image path handling for catalog and review photos.

use crate::app_const::MAX_PHOTOS_PER_UPLOAD;

const SUPPORTED_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

/// Turns a bundled photo path into a root-relative, URL-safe path:
/// `public/photos/Hatcher 1.jpg` becomes `/photos/Hatcher%201.jpg`.
pub fn normalize_image_path(photo_path: &str) -> String {
    let trimmed = photo_path.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let trimmed = trimmed.strip_prefix("public/").unwrap_or(trimmed);

    let mut path = String::with_capacity(trimmed.len() + 1);
    for c in std::iter::once('/').chain(trimmed.chars()) {
        if c == '/' && path.ends_with('/') {
            continue;
        }
        path.push(c);
    }

    match url::Url::parse("http://localhost") {
        Ok(mut base) => {
            base.set_path(&path);
            base.path().to_string()
        }
        Err(_) => path,
    }
}

/// Case-insensitive check of the file extension against browser-renderable formats.
pub fn is_supported_image_format(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Drops photos the browser cannot display (HEIC and friends).
pub fn filter_supported_images(photos: &[String]) -> Vec<String> {
    photos
        .iter()
        .filter(|p| is_supported_image_format(p.rsplit('/').next().unwrap_or_default()))
        .cloned()
        .collect()
}

/// How many more photos fit in one upload after `already_selected`.
pub fn photo_slots_left(already_selected: usize) -> usize {
    MAX_PHOTOS_PER_UPLOAD.saturating_sub(already_selected)
}
