//! # icon-gen
//!
//! Generates the front-end's favicon and app-icon set from a single source
//! image: every entry of the icon table becomes a square PNG in `public/`,
//! resampled with Lanczos3 and written at maximum lossless compression.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use icon_gen::{generate, GeneratorConfig};
//!
//! fn main() -> icon_gen::Result<()> {
//!     let summary = generate(GeneratorConfig::default())?;
//!     assert_eq!(summary.icons.len(), 5);
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod encode;
pub mod error;
pub mod generator;
pub mod report;
pub mod resize;
pub mod spec;

pub use config::{default_public_dir, FitMode, GeneratorConfig, ResampleFilter, DEFAULT_SOURCE_NAME};
pub use error::{IconError, Result};
pub use generator::{generate, IconGenerator};
pub use report::{ConsoleReporter, GeneratedIcon, Reporter, Summary};
pub use spec::{default_icons, IconSpec, DEFAULT_ICONS};
