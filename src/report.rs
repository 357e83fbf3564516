//! Progress reporting
//!
//! ## Table of Contents
//! - **GeneratedIcon / Summary**: What a run produced
//! - **Reporter**: Trait receiving progress events
//! - **ConsoleReporter**: Human-readable stdout output

use crate::encode::format_kb;
use crate::spec::IconSpec;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Spec the icon was produced from
    pub spec: IconSpec,
    /// Full output path
    pub path: PathBuf,
    /// Size on disk in bytes, read back after the write
    pub bytes: u64,
}

impl GeneratedIcon {
    /// Size on disk in kilobytes, two decimals
    pub fn kilobytes(&self) -> String {
        format_kb(self.bytes)
    }
}

/// Everything a successful run produced, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Icons written, in table order
    pub icons: Vec<GeneratedIcon>,
}

/// Receives progress events from the generator
pub trait Reporter {
    /// Source decoded, generation about to start
    fn started(&mut self, source: &Path);
    /// One icon written
    fn icon_written(&mut self, icon: &GeneratedIcon);
    /// Every icon written
    fn finished(&mut self, summary: &Summary);
}

/// Writes status lines with emoji markers to a writer (stdout by default)
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    /// Reporter on standard output
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter on any writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Console output is best effort: a closed stdout must not abort a run that
// has already written files.
impl<W: Write> Reporter for ConsoleReporter<W> {
    fn started(&mut self, source: &Path) {
        let _ = writeln!(self.out, "🖼️  Generating icons...");
        let _ = writeln!(self.out, "Source: {}\n", source.display());
    }

    fn icon_written(&mut self, icon: &GeneratedIcon) {
        let _ = writeln!(
            self.out,
            "{} {} ({}) generated - {}KB",
            "✅".green(),
            icon.spec.name,
            icon.spec.dimensions(),
            icon.kilobytes()
        );
    }

    fn finished(&mut self, summary: &Summary) {
        let _ = writeln!(self.out, "\n{}", "✨ All icons generated!".bold());
        let _ = writeln!(self.out, "\nGenerated files:");
        for icon in &summary.icons {
            let _ = writeln!(self.out, "  - {} ({})", icon.spec.name, icon.spec.dimensions());
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(size: u32, name: &str, bytes: u64) -> GeneratedIcon {
        GeneratedIcon {
            spec: IconSpec::new(size, name),
            path: PathBuf::from("public").join(name),
            bytes,
        }
    }

    #[test]
    fn test_console_output() {
        colored::control::set_override(false);

        let mut reporter = ConsoleReporter::new(Vec::new());
        let a = icon(16, "favicon16.png", 1536);
        let b = icon(512, "logo512_agumon.png", 204_800);

        reporter.started(Path::new("public/아구몬똥그림.png"));
        reporter.icon_written(&a);
        reporter.icon_written(&b);
        reporter.finished(&Summary {
            icons: vec![a, b],
        });

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.contains("Source: public/아구몬똥그림.png"));
        assert!(out.contains("✅ favicon16.png (16x16) generated - 1.50KB"));
        assert!(out.contains("✅ logo512_agumon.png (512x512) generated - 200.00KB"));
        assert!(out.contains("✨ All icons generated!"));
        assert!(out.contains("  - favicon16.png (16x16)\n  - logo512_agumon.png (512x512)"));
    }
}
