//! Directory traversal yielding qualifying files.
//!
//! Uses the `ignore` crate to walk the tree top-down with the standard
//! gitignore/hidden filters disabled; the only filtering is the compiled-in
//! skip-sets and extension map from [`DumpConfig`]. Skip-set directories are
//! hard-pruned: nothing beneath them is ever opened.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::config::DumpConfig;

/// Errors that can occur when starting a directory walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A qualifying file yielded by the walk.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    /// Path to the file (root-prefixed).
    pub path: PathBuf,
    /// Fence language tag for the file's suffix. May be empty.
    pub lang: &'static str,
}

/// Walk a directory tree, lazily yielding every qualifying file: not beneath
/// a skipped directory, not in the file skip-set, and carrying a recognized
/// suffix.
///
/// The root is validated before any traversal begins. The returned iterator
/// is finite and single-use; start a fresh walk to iterate again.
/// Subdirectories that cannot be read are skipped, not fatal.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use codedump::config::DumpConfig;
/// use codedump::walker::walk;
///
/// let config = DumpConfig::default();
/// for entry in walk(Path::new("."), &config).unwrap() {
///     println!("{}", entry.path.display());
/// }
/// ```
pub fn walk(
    root: &Path,
    config: &DumpConfig,
) -> Result<impl Iterator<Item = WalkEntry>, WalkError> {
    let metadata = std::fs::metadata(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WalkError::NotFound {
                path: root.to_path_buf(),
            }
        } else {
            WalkError::Io {
                path: root.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(WalkError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut builder = WalkBuilder::new(root);

    // Only the compiled-in skip-sets apply: no gitignore handling, and
    // hidden entries stay visible (e.g. .env.local).
    builder.standard_filters(false);

    // Hard prune: returning false for a directory stops descent entirely.
    // Depth 0 is the root itself, which is never pruned by name.
    let prune = config.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if !is_dir {
            return true;
        }
        !entry
            .file_name()
            .to_str()
            .is_some_and(|name| prune.skips_dir(name))
    });

    let select = config.clone();
    Ok(builder.build().filter_map(move |result| {
        // Unreadable entries are skipped, not surfaced.
        let entry = result.ok()?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            return None;
        }
        let name = entry.file_name().to_str()?;
        if select.skips_file(name) {
            return None;
        }
        let lang = select.language_for(name)?;
        Some(WalkEntry {
            path: entry.into_path(),
            lang,
        })
    }))
}
