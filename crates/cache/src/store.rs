use crate::fetch::{avatar_url, Fetcher, HttpFetcher, DEFAULT_AVATAR_URL};
use cardtable_core::{FrontImage, ImageError, ImageSource};
use md5::{Digest, Md5};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_CACHE_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub dir: PathBuf,
    pub avatar_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CACHE_DIR),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

/// Lowercase hex MD5 of the identity, the key Gravatar and existing caches use.
pub fn identity_hash(identity: &str) -> String {
    let digest = Md5::digest(identity.as_bytes());
    format!("{digest:x}")
}

/// Flat directory of `<hash>.png` files. Only grows; an existing file is
/// authoritative regardless of who wrote it.
pub struct ImageCache {
    config: CacheConfig,
    fetcher: Box<dyn Fetcher>,
}

impl ImageCache {
    pub fn new(config: CacheConfig) -> Result<Self, ImageError> {
        let fetcher = HttpFetcher::new()?;
        Ok(Self::with_fetcher(config, Box::new(fetcher)))
    }

    pub fn with_fetcher(config: CacheConfig, fetcher: Box<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    pub fn ensure_dir(&self) -> Result<(), ImageError> {
        fs::create_dir_all(&self.config.dir).map_err(|err| io_error(&self.config.dir, err))
    }

    pub fn path_for(&self, identity: &str) -> PathBuf {
        self.hash_path(&identity_hash(identity))
    }

    fn hash_path(&self, hash: &str) -> PathBuf {
        self.config.dir.join(format!("{hash}.png"))
    }

    /// Cache hit returns at once. A miss fetches synchronously, writes the
    /// bytes and then returns the path. Fetch failures propagate.
    pub fn resolve(&self, identity: &str) -> Result<PathBuf, ImageError> {
        let hash = identity_hash(identity);
        let path = self.hash_path(&hash);
        if path.exists() {
            tracing::debug!(identity, path = %path.display(), "image cache hit");
            return Ok(path);
        }
        let url = avatar_url(&self.config.avatar_url, &hash);
        tracing::info!(identity, %url, "image cache miss, fetching");
        let bytes = self.fetcher.fetch(&url)?;
        self.write_atomic(&path, &bytes)?;
        tracing::debug!(identity, path = %path.display(), bytes = bytes.len(), "image cached");
        Ok(path)
    }

    // The destination only appears once the whole payload is on disk.
    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), ImageError> {
        let mut tmp =
            NamedTempFile::new_in(&self.config.dir).map_err(|err| io_error(&self.config.dir, err))?;
        tmp.write_all(bytes).map_err(|err| io_error(tmp.path(), err))?;
        tmp.flush().map_err(|err| io_error(tmp.path(), err))?;
        tmp.persist(path)
            .map_err(|err| io_error(path, err.error))?;
        Ok(())
    }
}

impl ImageSource for ImageCache {
    fn load_front(&mut self, identity: &str) -> Result<FrontImage, ImageError> {
        let path = self.resolve(identity)?;
        let bytes = fs::read(&path).map_err(|err| io_error(&path, err))?;
        Ok(FrontImage { path, bytes })
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ImageError {
    ImageError::Io {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
