//! Core application logic for Profile Card
//!
//! This crate contains everything the UI layer consumes that is not layout:
//! the profile content, startup configuration, and the image pipeline used
//! to load the profile picture.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod loader;
pub mod media;
pub mod profile;

pub use config::AppConfig;
pub use loader::{HttpImageFetcher, ImageFetcher, ImageLoader, ImageRequest};
pub use media::{ImageBitmap, ImageLoadState, MediaError};
pub use profile::Profile;
