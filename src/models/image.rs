use base64::{engine::general_purpose, Engine};
use thiserror::Error;

/// Camera frames are captured as JPEG.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Invalid file type. Please upload an image (JPEG, PNG, GIF, WEBP, etc.).")]
    NotAnImage(String),
    #[error("Failed to read or convert uploaded image to Base64.")]
    InvalidEncoding,
    #[error("Image data is empty.")]
    Empty,
}

/// Image sent alongside the identification prompt, kept base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime_type: String,
    data: String,
}

impl ImagePayload {
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, ImageError> {
        check_mime(mime_type)?;
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: general_purpose::STANDARD.encode(bytes),
        })
    }

    pub fn from_base64(data: &str, mime_type: &str) -> Result<Self, ImageError> {
        check_mime(mime_type)?;
        let data = data.trim();
        if data.is_empty() {
            return Err(ImageError::Empty);
        }

        let decoded = general_purpose::STANDARD
            .decode(data)
            .map_err(|_| ImageError::InvalidEncoding)?;
        if decoded.is_empty() {
            return Err(ImageError::Empty);
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Parses `data:<mime>;base64,<data>` as produced by canvas capture or a file reader.
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or(ImageError::InvalidEncoding)?;
        let (header, data) = rest.split_once(',').ok_or(ImageError::InvalidEncoding)?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or(ImageError::InvalidEncoding)?;

        Self::from_base64(data, mime_type)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

fn check_mime(mime_type: &str) -> Result<(), ImageError> {
    if mime_type.starts_with("image/") {
        Ok(())
    } else {
        Err(ImageError::NotAnImage(mime_type.to_string()))
    }
}
