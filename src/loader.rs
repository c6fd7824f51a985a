//! Image loading backends.
//!
//! [`ImageLoader`] is the single seam between resolution and the outside
//! world: given a candidate path it either returns decoded RGBA pixels or an
//! error. Errors are never fatal; the resolver just moves on.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Decoded image pixels in unmultiplied RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// `[width, height]` in pixels
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn width(&self) -> usize {
        self.size[0]
    }

    pub fn height(&self) -> usize {
        self.size[1]
    }
}

/// Loads one candidate image path.
pub trait ImageLoader {
    /// Loads and decodes the image at `url`.
    fn load(&self, url: &str) -> Result<DecodedImage>;
}

/// Reads candidates from disk, relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, url: &str) -> Result<DecodedImage> {
        let path = self.root.join(url);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let decoded = image::load_from_memory(&bytes)
            .with_context(|| format!("decoding {}", path.display()))?
            .to_rgba8();

        Ok(DecodedImage {
            size: [decoded.width() as usize, decoded.height() as usize],
            rgba: decoded.into_raw(),
        })
    }
}

/// Answers from a fixed set of available paths and records every attempt.
///
/// Available paths load as a 1x1 opaque pixel.
#[derive(Debug, Default)]
pub struct MemoryImageLoader {
    available: HashSet<String>,
    attempts: Mutex<Vec<String>>,
}

impl MemoryImageLoader {
    pub fn with_images<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: paths.into_iter().map(Into::into).collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Every path passed to `load`, in call order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts
            .lock()
            .map(|attempts| attempts.clone())
            .unwrap_or_default()
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&self, url: &str) -> Result<DecodedImage> {
        if let Ok(mut attempts) = self.attempts.lock() {
            attempts.push(url.to_string());
        }
        if self.available.contains(url) {
            Ok(DecodedImage {
                size: [1, 1],
                rgba: vec![255, 255, 255, 255],
            })
        } else {
            anyhow::bail!("{} not found", url)
        }
    }
}
