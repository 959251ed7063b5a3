//! Image upload rules for the admin console.
//!
//! Uploaded images are written under `<upload_dir>/<folder>/<uuid>.<ext>` and
//! served back from `/uploads/<folder>/<uuid>.<ext>`.

use std::str::FromStr;

use uuid::Uuid;

use crate::error::CoreError;

/// Accepted image file extensions (lower-case).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Destination folder for an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    Kits,
    MobileSuits,
    Pilots,
    Factions,
}

impl UploadFolder {
    pub const ALL: &'static [UploadFolder] = &[
        UploadFolder::Kits,
        UploadFolder::MobileSuits,
        UploadFolder::Pilots,
        UploadFolder::Factions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFolder::Kits => "kits",
            UploadFolder::MobileSuits => "mobile-suits",
            UploadFolder::Pilots => "pilots",
            UploadFolder::Factions => "factions",
        }
    }
}

impl FromStr for UploadFolder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UploadFolder::ALL
            .iter()
            .copied()
            .find(|folder| folder.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("Unknown upload folder '{s}'")))
    }
}

/// Extract the lower-cased extension of a client-supplied file name.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check the file name and size of an upload. Returns the normalized
/// extension on success.
pub fn validate_image_upload(filename: &str, size_bytes: usize) -> Result<String, CoreError> {
    if size_bytes == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Uploaded file exceeds the {} MiB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let ext = file_extension(filename)
        .filter(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unsupported image type for '{filename}'. Supported: {}",
                ALLOWED_IMAGE_EXTENSIONS.join(", ")
            ))
        })?;

    // Store jpeg and jpg under one extension.
    Ok(if ext == "jpeg" { "jpg".to_string() } else { ext })
}

/// Relative storage path (`<folder>/<uuid>.<ext>`) for a new upload.
pub fn stored_file_path(folder: UploadFolder, ext: &str, id: Uuid) -> String {
    format!("{}/{}.{ext}", folder.as_str(), id.simple())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn extension_is_lower_cased() {
        assert_eq!(file_extension("Box-Art.PNG"), Some("png".to_string()));
    }

    #[test]
    fn extension_requires_stem_and_suffix() {
        assert_eq!(file_extension(".png"), None);
        assert_eq!(file_extension("image."), None);
        assert_eq!(file_extension("image"), None);
    }

    #[test]
    fn accepts_supported_image() {
        assert_eq!(validate_image_upload("rx78.webp", 1024).unwrap(), "webp");
    }

    #[test]
    fn jpeg_is_normalized_to_jpg() {
        assert_eq!(validate_image_upload("zaku.JPEG", 10).unwrap(), "jpg");
    }

    #[test]
    fn rejects_unsupported_extension() {
        assert_matches!(
            validate_image_upload("manual.pdf", 10),
            Err(CoreError::Validation(msg)) if msg.contains("manual.pdf")
        );
    }

    #[test]
    fn rejects_empty_and_oversize_files() {
        assert_matches!(validate_image_upload("a.png", 0), Err(CoreError::Validation(_)));
        assert_matches!(
            validate_image_upload("a.png", MAX_UPLOAD_BYTES + 1),
            Err(CoreError::Validation(_))
        );
        assert!(validate_image_upload("a.png", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn folder_parses_known_values() {
        assert_eq!("mobile-suits".parse::<UploadFolder>().unwrap(), UploadFolder::MobileSuits);
        assert!("users".parse::<UploadFolder>().is_err());
    }

    #[test]
    fn stored_path_uses_folder_and_simple_uuid() {
        let id = Uuid::nil();
        assert_eq!(
            stored_file_path(UploadFolder::Kits, "png", id),
            "kits/00000000000000000000000000000000.png"
        );
    }
}
