//! Codedump - Collate a project's text files into a single Markdown document.
//!
//! Codedump walks a project directory tree, skipping version-control metadata,
//! dependency caches, and build output, and concatenates every recognized
//! text/code file into one Markdown file: each file gets a heading with its
//! root-relative path and a fenced code block tagged with the language
//! matching its extension.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use codedump::{write_dump, DumpConfig};
//!
//! let config = DumpConfig::default();
//! let report = write_dump(
//!     Path::new("./my-project"),
//!     Path::new("project_dump.md"),
//!     &config,
//! )
//! .unwrap();
//!
//! println!("collated {} files", report.files);
//! ```
//!
//! # Modules
//!
//! - [`config`] - Skip-sets and the extension-to-language map
//! - [`walker`] - Directory traversal yielding qualifying files
//! - [`emitter`] - Markdown document writer
//! - [`errors`] - Top-level error type and exit codes

pub mod config;
pub mod emitter;
pub mod errors;
pub mod walker;

// Re-export key types at crate root for convenience
pub use config::DumpConfig;
pub use emitter::{write_dump, DumpReport};
pub use errors::DumpError;
pub use walker::{WalkEntry, WalkError};
