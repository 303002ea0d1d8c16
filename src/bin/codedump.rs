//! Codedump CLI - Collate a project's text files into one Markdown document.

use std::path::PathBuf;

use clap::Parser;
use codedump::config::DumpConfig;
use codedump::emitter::write_dump;
use codedump::errors::{exit_code, DumpError};
use codedump::walker::WalkError;

#[derive(Parser)]
#[command(name = "codedump")]
#[command(about = "Collate a project's text files into one Markdown document")]
#[command(version)]
struct Cli {
    /// Path to the project directory
    project_root: PathBuf,

    /// Output Markdown file
    #[arg(default_value = "project_dump.md")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<(), DumpError> {
    // Resolve the root so a title for `.` names the actual directory.
    // Also rejects missing paths before anything is written.
    let root = cli.project_root.canonicalize().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DumpError::Walk(WalkError::NotFound {
                path: cli.project_root.clone(),
            })
        } else {
            DumpError::Io(e)
        }
    })?;

    let config = DumpConfig::default();
    let report = write_dump(&root, &cli.output, &config)?;

    println!(
        "wrote {} ({} files{})",
        cli.output.display(),
        report.files,
        if report.skipped > 0 {
            format!(", {} unreadable skipped", report.skipped)
        } else {
            String::new()
        }
    );

    Ok(())
}
