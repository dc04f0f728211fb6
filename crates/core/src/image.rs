use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("fetch {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("fetch {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("io error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

/// A loaded front face. Cards keep this for their whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Resolves a card identity to its front image. Implementations may block.
pub trait ImageSource {
    fn load_front(&mut self, identity: &str) -> Result<FrontImage, ImageError>;
}
