//! Startup error types

use thiserror::Error;

/// Failures while loading the sprite images. All of them are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The image could not be read or decoded.
    #[error("failed to load image {path}: {reason}")]
    Load {
        /// Path that was requested.
        path: String,
        /// Loader's description of the failure.
        reason: String,
    },

    /// The image decoded to zero width or height, so it has no aspect ratio.
    #[error("image {path} is empty")]
    Empty {
        /// Path that was requested.
        path: String,
    },
}
