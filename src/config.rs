//! Dump configuration: skip-sets and the extension-to-language map.
//!
//! All three tables are compiled in. Callers hold one immutable
//! [`DumpConfig`] per run rather than mutating process-wide state.

use std::collections::{HashMap, HashSet};

/// Directory basenames that are pruned from traversal entirely.
const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    "dist",
    "build",
    ".turbo",
    ".idea",
    ".vscode",
    ".vercel",
];

/// File basenames that are never emitted.
const SKIP_FILES: &[&str] = &[".DS_Store"];

/// Extension (with leading dot) to fence language tag. An empty tag
/// produces a bare fence.
const EXT_TO_LANG: &[(&str, &str)] = &[
    (".js", "javascript"),
    (".jsx", "jsx"),
    (".ts", "typescript"),
    (".tsx", "tsx"),
    (".css", "css"),
    (".scss", "scss"),
    (".json", "json"),
    (".html", "html"),
    (".md", "markdown"),
    (".yml", "yaml"),
    (".yaml", "yaml"),
    (".sh", "bash"),
    (".env", ""),
    (".txt", ""),
];

/// Configuration for one dump run.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    skip_dirs: HashSet<&'static str>,
    skip_files: HashSet<&'static str>,
    languages: HashMap<&'static str, &'static str>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            skip_dirs: SKIP_DIRS.iter().copied().collect(),
            skip_files: SKIP_FILES.iter().copied().collect(),
            languages: EXT_TO_LANG.iter().copied().collect(),
        }
    }
}

impl DumpConfig {
    /// Whether a directory with this basename is pruned from traversal.
    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
    }

    /// Whether a file with this basename is excluded from output.
    pub fn skips_file(&self, name: &str) -> bool {
        self.skip_files.contains(name)
    }

    /// Language tag for a file basename, or `None` if its suffix is not
    /// recognized. The tag may be empty (bare fence).
    pub fn language_for(&self, file_name: &str) -> Option<&'static str> {
        self.languages.get(suffix(file_name)).copied()
    }
}

/// Dotted suffix of a file basename: the substring from the last `.` to the
/// end, or `""` when the dot is missing, leading (`.env` the dotfile has no
/// suffix; `local.env` does), or trailing.
pub fn suffix(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(i) if i > 0 && i < file_name.len() - 1 => &file_name[i..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_plain() {
        assert_eq!(suffix("app.tsx"), ".tsx");
        assert_eq!(suffix("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_suffix_edge_cases() {
        assert_eq!(suffix("Makefile"), "");
        assert_eq!(suffix(".env"), "");
        assert_eq!(suffix(".hidden.ts"), ".ts");
        assert_eq!(suffix("trailing."), "");
    }

    #[test]
    fn test_language_lookup() {
        let config = DumpConfig::default();

        assert_eq!(config.language_for("index.ts"), Some("typescript"));
        assert_eq!(config.language_for("README.md"), Some("markdown"));
        // Recognized but untagged
        assert_eq!(config.language_for("local.env"), Some(""));
        // Unrecognized suffix and the bare dotfile
        assert_eq!(config.language_for("photo.png"), None);
        assert_eq!(config.language_for(".env"), None);
    }

    #[test]
    fn test_skip_sets() {
        let config = DumpConfig::default();

        assert!(config.skips_dir("node_modules"));
        assert!(config.skips_dir(".git"));
        assert!(!config.skips_dir("src"));

        assert!(config.skips_file(".DS_Store"));
        assert!(!config.skips_file("README.md"));
    }
}
