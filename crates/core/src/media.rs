//! Image handling for catalog and branding uploads.
//!
//! Uploaded files are sniffed with header-only decoding (no full decode)
//! to confirm they are real images in an allowed format and to extract
//! dimensions. Image replacement on existing records is an explicit
//! three-way update rather than an inferred two-field union.

use std::io::Cursor;

use image::ImageFormat;
use serde::Deserialize;

use crate::error::CoreError;

/// Maximum accepted upload size: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Formats accepted for catalog and branding images.
const ALLOWED_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Metadata extracted from an uploaded image header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Canonical file extension for the sniffed format (`png`, `jpg`, ...).
    pub extension: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// MIME type matching the sniffed format.
    pub fn content_type(&self) -> &'static str {
        match self.extension {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

/// Explicit image update operation for admin edits.
///
/// `Keep` leaves the stored image untouched, `Replace` swaps in a
/// previously uploaded object by key, `Clear` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ImageUpdate {
    #[default]
    Keep,
    Replace {
        key: String,
    },
    Clear,
}

/// Validate upload bytes as an allowed image and extract its dimensions.
///
/// Reads only the header; rejects oversized payloads, unrecognized bytes,
/// and disallowed formats.
pub fn validate_image_bytes(bytes: &[u8]) -> Result<ImageInfo, CoreError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Image exceeds the maximum upload size of {} bytes",
            MAX_UPLOAD_BYTES
        )));
    }
    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("File is not a recognized image".to_string()))?;
    if !ALLOWED_FORMATS.contains(&format) {
        return Err(CoreError::Validation(format!(
            "Unsupported image format {format:?}. Allowed: png, jpeg, webp"
        )));
    }
    let reader = image::ImageReader::with_format(Cursor::new(bytes), format);
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| CoreError::Validation(format!("Could not read image dimensions: {e}")))?;

    let extension = format
        .extensions_str()
        .first()
        .copied()
        .unwrap_or("bin");
    Ok(ImageInfo {
        extension,
        width,
        height,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal valid 1x1 PNG.
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
        0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', // IHDR length + tag
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
        0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, // bit depth etc. + CRC
        0x00, 0x00, 0x00, 0x0A, b'I', b'D', b'A', b'T', // IDAT
        0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01,
        0x0D, 0x0A, 0x2D, 0xB4, // CRC
        0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn accepts_png_and_reads_dimensions() {
        let info = validate_image_bytes(TINY_PNG).unwrap();
        assert_eq!(info.extension, "png");
        assert_eq!((info.width, info.height), (1, 1));
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(validate_image_bytes(b"definitely not an image").is_err());
        assert!(validate_image_bytes(&[]).is_err());
    }

    #[test]
    fn rejects_oversized_payload() {
        let huge = vec![0u8; MAX_UPLOAD_BYTES + 1];
        assert!(validate_image_bytes(&huge).is_err());
    }

    #[test]
    fn image_update_deserializes_tagged_ops() {
        let keep: ImageUpdate = serde_json::from_str(r#"{"op":"keep"}"#).unwrap();
        assert_eq!(keep, ImageUpdate::Keep);
        let replace: ImageUpdate =
            serde_json::from_str(r#"{"op":"replace","key":"uploads/a.png"}"#).unwrap();
        assert_eq!(
            replace,
            ImageUpdate::Replace {
                key: "uploads/a.png".into()
            }
        );
        let clear: ImageUpdate = serde_json::from_str(r#"{"op":"clear"}"#).unwrap();
        assert_eq!(clear, ImageUpdate::Clear);
    }

    #[test]
    fn image_update_defaults_to_keep() {
        assert_eq!(ImageUpdate::default(), ImageUpdate::Keep);
    }
}
