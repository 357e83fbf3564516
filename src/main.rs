//! # generate-icons
//!
//! Resizes the front-end's source artwork into its favicon / app-icon set.
//!
//! ## Usage
//!
//! ```bash
//! # Default run: public/아구몬똥그림.png -> five PNGs in public/
//! generate-icons
//!
//! # Another source or output directory
//! generate-icons --source art/logo.png --out-dir dist
//!
//! # Table, filter and fit from a config file
//! generate-icons --config icons.toml
//! ```

use anyhow::Context;
use clap::Parser;
use icon_gen::{ConsoleReporter, GeneratorConfig, IconError, IconGenerator};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "generate-icons")]
#[command(about = "Generate favicon and app-icon PNGs from one source image")]
#[command(version)]
struct Args {
    /// Source image (default: public/아구몬똥그림.png next to this crate)
    #[arg(short, long, env = "ICON_GEN_SOURCE")]
    source: Option<PathBuf>,

    /// Directory the icons are written to (default: public/)
    #[arg(short, long, env = "ICON_GEN_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resampling filter: lanczos3, catmull-rom, gaussian, triangle, nearest
    #[arg(long)]
    filter: Option<String>,

    /// How non-square sources fit the square: stretch or contain
    #[arg(long)]
    fit: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn into_config(self) -> anyhow::Result<GeneratorConfig> {
        let mut config = GeneratorConfig::default();
        if let Some(path) = &self.config {
            config = config
                .merge_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
        }
        if let Some(source) = self.source {
            config = config.source(source);
        }
        if let Some(dir) = self.out_dir {
            config = config.output_dir(dir);
        }
        if let Some(filter) = self.filter {
            config = config.filter(filter.parse()?);
        }
        if let Some(fit) = self.fit {
            config = config.fit(fit.parse()?);
        }
        Ok(config)
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &mut std::io::stderr());
            ExitCode::from(exit_code(&err))
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let generator = IconGenerator::new(args.into_config()?)?;
    debug!(config = ?generator.config(), "resolved configuration");

    generator.run(&mut ConsoleReporter::stdout())?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<IconError>()
        .map(IconError::exit_code)
        .unwrap_or(1)
}

/// Top-level message plus each cause not already spelled out by the one
/// before it (`image` errors repeat their inner error in their own text)
fn describe(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if !message.contains(&cause) {
            message.push_str(": ");
            message.push_str(&cause);
        }
    }
    message
}

fn report_error(err: &anyhow::Error, out: &mut impl Write) {
    use colored::Colorize;

    let cross = "❌".red();
    // Nothing left to report a failed stderr write to
    let _ = match err.downcast_ref::<IconError>() {
        Some(IconError::SourceNotFound { path }) => {
            writeln!(out, "{cross} Source image not found: {}", path.display())
        }
        Some(IconError::UnsupportedFormat { path, detail }) => writeln!(
            out,
            "{cross} No image decoder for {} in this build ({detail}).\n\
             Rebuild with: cargo install --path . --features all-formats",
            path.display()
        ),
        _ => writeln!(out, "{cross} Error: {}", describe(err)),
    };
}
