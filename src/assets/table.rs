use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{FramecastError, FramecastResult};

/// Normalize and validate asset-root-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> FramecastResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FramecastError::validation(format!(
            "asset path '{source}' must be relative"
        )));
    }
    if s.is_empty() {
        return Err(FramecastError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FramecastError::validation(format!(
                "asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FramecastError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Immutable lookup table of the files available under a static asset root.
///
/// Built once per job; every worker resolves against the same table. Cloning is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetTable {
    root: Option<PathBuf>,
    entries: Arc<BTreeSet<String>>,
}

impl AssetTable {
    /// Empty table; every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table from an explicit list of relative paths.
    pub fn from_paths<I, S>(paths: I) -> FramecastResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = paths
            .into_iter()
            .map(|p| normalize_rel_path(p.as_ref()))
            .collect::<FramecastResult<BTreeSet<_>>>()?;
        Ok(Self {
            root: None,
            entries: Arc::new(entries),
        })
    }

    /// Table from a one-time recursive scan of `root`.
    pub fn scan_dir(root: impl AsRef<Path>) -> FramecastResult<Self> {
        let root = root.as_ref();
        let mut entries = BTreeSet::new();
        scan_into(root, root, &mut entries)?;
        tracing::debug!(root = %root.display(), count = entries.len(), "scanned asset root");
        Ok(Self {
            root: Some(root.to_path_buf()),
            entries: Arc::new(entries),
        })
    }

    /// Number of known assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the table has no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return `true` when `path` names a known asset.
    pub fn contains(&self, path: &str) -> bool {
        normalize_rel_path(path).is_ok_and(|p| self.entries.contains(&p))
    }

    /// Resolve `path` to its normalized key, or fail with an asset error.
    pub fn resolve(&self, path: &str) -> FramecastResult<AssetRef> {
        let key = normalize_rel_path(path).map_err(|e| FramecastError::asset(e.to_string()))?;
        if !self.entries.contains(&key) {
            return Err(FramecastError::asset(format!(
                "'{key}' is not in the asset table"
            )));
        }
        Ok(AssetRef { path: key })
    }

    /// Absolute location of `asset` when the table was built from a directory scan.
    pub fn locate(&self, asset: &AssetRef) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(&asset.path))
    }
}

/// Resolved, normalized asset path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct AssetRef {
    path: String,
}

impl AssetRef {
    /// Normalized relative path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn scan_into(root: &Path, dir: &Path, out: &mut BTreeSet<String>) -> FramecastResult<()> {
    let read = std::fs::read_dir(dir).map_err(|e| {
        FramecastError::asset(format!("read asset dir '{}': {e}", dir.display()))
    })?;
    for entry in read {
        let entry = entry.map_err(|e| {
            FramecastError::asset(format!("read asset dir '{}': {e}", dir.display()))
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            FramecastError::asset(format!("stat '{}': {e}", path.display()))
        })?;
        if file_type.is_dir() {
            scan_into(root, &path, out)?;
        } else if let Ok(rel) = path.strip_prefix(root) {
            let rel = rel.to_string_lossy();
            out.insert(normalize_rel_path(&rel)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/table.rs"]
mod tests;
