//! Uploaded images and their embedding as `data:` URIs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;

/// 1x1 transparent PNG used whenever an image slot is empty or rejected.
pub const PLACEHOLDER_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mN88P/BfwAJhAPk3KFb2AAAAABJRU5ErkJggg==";

/// MIME types accepted for uploaded photos.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Named upload slots of the CV form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Profile,
    FullBody,
    Passport,
}

impl ImageSlot {
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "profilePhoto" => Some(Self::Profile),
            "fullPhoto" => Some(Self::FullBody),
            "passportScan" => Some(Self::Passport),
            _ => None,
        }
    }
}

/// An in-memory image ready to be embedded in the markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageAsset {
    /// Accept an upload only if it is a JPEG/PNG no larger than `max_bytes`.
    pub fn accept(mime_type: &str, data: Vec<u8>, max_bytes: usize) -> Option<Self> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if !ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str()) {
            return None;
        }
        if data.is_empty() || data.len() > max_bytes {
            return None;
        }
        Some(Self { mime_type, data })
    }

    /// Load an image from disk, deriving the MIME type from the extension.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("image/png")
            .to_string();
        Ok(Self { mime_type, data })
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.data))
    }
}

/// Images collected from the three upload slots.
#[derive(Debug, Default, Clone)]
pub struct CvImages {
    pub profile: Option<ImageAsset>,
    pub full_body: Option<ImageAsset>,
    pub passport: Option<ImageAsset>,
}

impl CvImages {
    pub fn set(&mut self, slot: ImageSlot, image: Option<ImageAsset>) {
        match slot {
            ImageSlot::Profile => self.profile = image,
            ImageSlot::FullBody => self.full_body = image,
            ImageSlot::Passport => self.passport = image,
        }
    }
}

/// Data URI for an optional image, falling back to the placeholder.
pub fn data_uri_or_placeholder(image: Option<&ImageAsset>) -> String {
    image
        .map(ImageAsset::to_data_uri)
        .unwrap_or_else(|| PLACEHOLDER_DATA_URI.to_string())
}

/// Resolve the MIME type of an upload: the declared content type if any,
/// otherwise a guess from the filename.
pub fn resolve_mime(declared: Option<&str>, filename: Option<&str>) -> String {
    match declared {
        Some(mime) if !mime.is_empty() && mime != "application/octet-stream" => mime.to_string(),
        _ => filename
            .and_then(|name| mime_guess::from_path(name).first_raw())
            .unwrap_or("application/octet-stream")
            .to_string(),
    }
}
