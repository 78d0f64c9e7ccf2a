//! Asset availability checks.
//!
//! The desktop shell serves assets from a root directory, so a missing
//! file can be detected before the webview ever tries it. The load-failure
//! hooks still cover files that exist but fail to decode.

use std::path::{Path, PathBuf};

/// Answers whether an asset path can be loaded.
pub trait AssetProbe {
    fn is_available(&self, path: &str) -> bool;
}

/// Checks files under a root directory.
#[derive(Clone, Debug)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetProbe for FsProbe {
    fn is_available(&self, path: &str) -> bool {
        let available = self.root.join(path).is_file();
        if !available {
            tracing::warn!(path, root = %self.root.display(), "Asset not found");
        }
        available
    }
}

/// Treats every path as loadable; failures surface only through the
/// runtime load-failure hooks.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssumeAvailable;

impl AssetProbe for AssumeAvailable {
    fn is_available(&self, _path: &str) -> bool {
        true
    }
}
