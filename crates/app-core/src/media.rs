//! Image decoding for the profile picture
//!
//! This module turns fetched bytes into a displayable RGBA bitmap and defines
//! the three states a picture can be in while it is being loaded:
//! - [`ImageLoadState::Loading`] while the fetch is in flight
//! - [`ImageLoadState::Loaded`] once a bitmap is available
//! - [`ImageLoadState::Failed`] when the fetch or decode did not succeed

use image::{ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;

/// Maximum encoded image size accepted from the network (8 MB)
pub const MAX_IMAGE_SIZE: usize = 8_000_000;

/// Maximum decoded image dimension
pub const MAX_IMAGE_DIMENSION: u32 = 4096;

/// Errors that can occur while loading an image
#[derive(Debug, Error)]
pub enum MediaError {
    /// Server answered with a non-success status
    #[error("HTTP error: status {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Request could not be completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response carried no bytes
    #[error("Empty response body")]
    EmptyBody,

    /// Image decoding error
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// Unsupported format
    #[error("Unsupported image format")]
    UnsupportedFormat,

    /// File too large
    #[error("File size {size} exceeds maximum {max}")]
    FileTooLarge {
        /// Actual file size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Dimension too large
    #[error("Image dimension {dimension} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Actual dimension
        dimension: u32,
        /// Maximum allowed dimension
        max: u32,
    },

    /// No async runtime available to run the fetch
    #[error("No async runtime available")]
    NoRuntime,
}

/// Result type for media operations
pub type Result<T> = std::result::Result<T, MediaError>;

/// Image formats the loader can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportedFormat {
    /// JPEG format
    Jpeg,
    /// PNG format
    Png,
}

impl SupportedFormat {
    /// Sniff the format from the leading bytes
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        match image::guess_format(bytes) {
            Ok(ImageFormat::Jpeg) => Ok(Self::Jpeg),
            Ok(ImageFormat::Png) => Ok(Self::Png),
            _ => Err(MediaError::UnsupportedFormat),
        }
    }

    fn to_image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// Decoded image ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBitmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Source format
    pub format: SupportedFormat,
    /// RGBA8 pixel data, row-major
    pub pixels: Vec<u8>,
}

/// Load state of a remote image
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImageLoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Bitmap available
    Loaded(Arc<ImageBitmap>),
    /// Fetch or decode failed; carries the reason for logs
    Failed(String),
}

impl ImageLoadState {
    /// Check if still loading
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageLoadState::Loading)
    }

    /// Check if the fetch has resolved either way
    pub fn is_resolved(&self) -> bool {
        !self.is_loading()
    }

    /// Get the bitmap if loaded
    pub fn bitmap(&self) -> Option<&ImageBitmap> {
        match self {
            ImageLoadState::Loaded(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    /// Get the failure reason if failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ImageLoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Decode encoded image bytes into a bitmap
pub fn decode_bitmap(bytes: &[u8]) -> Result<ImageBitmap> {
    if bytes.is_empty() {
        return Err(MediaError::EmptyBody);
    }
    validate_size(bytes.len())?;

    let format = SupportedFormat::detect(bytes)?;

    // Header only; nothing is allocated for pixels until the size is accepted.
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .into_dimensions()
        .map_err(|e| MediaError::DecodeError(e.to_string()))?;
    validate_dimensions(width, height)?;

    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| MediaError::DecodeError(e.to_string()))?;

    Ok(ImageBitmap {
        width,
        height,
        format,
        pixels: img.into_rgba8().into_raw(),
    })
}

/// Validate image dimensions
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    let largest = width.max(height);
    if largest > MAX_IMAGE_DIMENSION {
        return Err(MediaError::DimensionTooLarge {
            dimension: largest,
            max: MAX_IMAGE_DIMENSION,
        });
    }
    Ok(())
}

/// Validate encoded image size
pub fn validate_size(size: usize) -> Result<()> {
    if size > MAX_IMAGE_SIZE {
        return Err(MediaError::FileTooLarge {
            size,
            max: MAX_IMAGE_SIZE,
        });
    }
    Ok(())
}
