//! Icon generation pass
//!
//! One linear run: check the source, decode it once, then resize, encode
//! and write every icon in table order. The first failure aborts the run;
//! icons already written stay on disk.

use crate::config::GeneratorConfig;
use crate::encode::write_png;
use crate::error::{IconError, Result};
use crate::report::{GeneratedIcon, Reporter, Summary};
use crate::resize::resize_square;
use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::{debug, info};

/// Generates the icon set described by a [`GeneratorConfig`]
pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    /// Validate `config` and build a generator
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pass, reporting progress to `reporter`
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<Summary> {
        let source = self.load_source()?;
        if !self.config.output_dir.is_dir() {
            return Err(IconError::OutputDirNotFound {
                path: self.config.output_dir.clone(),
            });
        }

        reporter.started(&self.config.source);

        let mut summary = Summary::default();
        for spec in &self.config.icons {
            let path = self.config.output_dir.join(&spec.name);
            let resized = resize_square(&source, spec.size, self.config.filter, self.config.fit);
            let bytes = write_png(&resized, &path)?;

            let icon = GeneratedIcon {
                spec: spec.clone(),
                path,
                bytes,
            };
            info!(name = %icon.spec.name, size = spec.size, bytes, "icon generated");
            reporter.icon_written(&icon);
            summary.icons.push(icon);
        }

        reporter.finished(&summary);
        Ok(summary)
    }

    fn load_source(&self) -> Result<DynamicImage> {
        let path = &self.config.source;
        if !path.is_file() {
            return Err(IconError::SourceNotFound { path: path.clone() });
        }

        let image = ImageReader::open(path)
            .map_err(|e| IconError::io(path, e))?
            .with_guessed_format()
            .map_err(|e| IconError::io(path, e))?
            .decode()
            .map_err(|e| IconError::decode(path, e))?;

        let (width, height) = image.dimensions();
        debug!(source = %path.display(), width, height, "source decoded");
        Ok(image)
    }
}

/// Generate with `config`, printing progress to stdout
pub fn generate(config: GeneratorConfig) -> Result<Summary> {
    let mut reporter = crate::report::ConsoleReporter::stdout();
    IconGenerator::new(config)?.run(&mut reporter)
}
