//! Markdown document writer.
//!
//! Consumes the walker's file sequence, sorts it by root-relative path, and
//! writes the whole document in one pass: a title heading, then one section
//! per file (relative-path heading plus a language-tagged code fence).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::DumpConfig;
use crate::errors::DumpError;
use crate::walker::{walk, WalkEntry};

/// What a dump run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpReport {
    /// Sections written to the document.
    pub files: usize,
    /// Qualifying files that could not be read and were left out.
    pub skipped: usize,
}

/// Collate every qualifying file under `root` into a Markdown document at
/// `output`, creating or truncating it.
///
/// The root is validated before the output file is created, so an invalid
/// root never leaves an empty document behind. File contents are decoded
/// leniently: invalid UTF-8 sequences become replacement characters rather
/// than errors. A file that cannot be read at all is dropped from the dump
/// and counted in [`DumpReport::skipped`]; only failures to write `output`
/// itself are fatal.
///
/// Each file is read fully into memory one at a time, which is fine at
/// project scale but makes very large individual files a known limit.
pub fn write_dump(
    root: &Path,
    output: &Path,
    config: &DumpConfig,
) -> Result<DumpReport, DumpError> {
    let mut files: Vec<(String, WalkEntry)> = walk(root, config)?
        .map(|entry| (relative_heading(&entry.path, root), entry))
        .collect();

    // Byte order on the relative path string, matching section ordering
    // to what a plain sort of the headings would give.
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let root_name = root
        .file_name()
        .map_or_else(|| root.to_string_lossy(), |n| n.to_string_lossy());

    let file = File::create(output)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Code dump of `{root_name}`")?;
    writeln!(out)?;

    let mut report = DumpReport {
        files: 0,
        skipped: 0,
    };

    for (relative, entry) in &files {
        let Ok(bytes) = std::fs::read(&entry.path) else {
            report.skipped += 1;
            continue;
        };
        let content = String::from_utf8_lossy(&bytes);

        writeln!(out, "### {relative}")?;
        writeln!(out)?;
        writeln!(out, "```{}", entry.lang)?;
        out.write_all(content.as_bytes())?;
        writeln!(out)?;
        writeln!(out, "```")?;
        writeln!(out)?;

        report.files += 1;
    }

    out.flush()?;
    Ok(report)
}

/// Root-relative heading for a file, joined with `/` on every platform so
/// the document looks the same regardless of the native separator.
fn relative_heading(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}
