//! Generator configuration
//!
//! ## Table of Contents
//! - **GeneratorConfig**: Merged configuration driving a run
//! - **ResampleFilter / FitMode**: Resize options
//! - **ConfigFile**: On-disk TOML layer (`icons.toml`)
//!
//! Layers are applied in order: built-in defaults, then a TOML file, then
//! command-line overrides. `validate` runs once on the merged result.

use crate::error::{IconError, Result};
use crate::spec::{default_icons, IconSpec};
use image::imageops::FilterType;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Source image name inside the public directory
pub const DEFAULT_SOURCE_NAME: &str = "아구몬똥그림.png";

/// Public asset directory of the front-end, resolved from this crate's
/// location so the working directory of the caller does not matter
pub fn default_public_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

/// Resampling filter used for every icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    /// Lanczos with window 3
    #[default]
    Lanczos3,
    /// Cubic (Catmull-Rom)
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Linear (triangle)
    Triangle,
    /// Nearest neighbor; only useful for pixel art
    Nearest,
}

impl ResampleFilter {
    /// Matching `image` filter
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Triangle => FilterType::Triangle,
            Self::Nearest => FilterType::Nearest,
        }
    }
}

impl FromStr for ResampleFilter {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            "catmull-rom" | "catmullrom" | "cubic" => Ok(Self::CatmullRom),
            "gaussian" => Ok(Self::Gaussian),
            "triangle" | "linear" => Ok(Self::Triangle),
            "nearest" => Ok(Self::Nearest),
            other => Err(IconError::config(format!(
                "unknown filter '{other}' (expected lanczos3, catmull-rom, gaussian, triangle or nearest)"
            ))),
        }
    }
}

/// How a non-square source maps onto the square target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Stretch to the target; aspect ratio is not preserved
    #[default]
    Stretch,
    /// Scale to fit inside the target and pad with transparency
    Contain,
}

impl FromStr for FitMode {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stretch" | "fill" => Ok(Self::Stretch),
            "contain" => Ok(Self::Contain),
            other => Err(IconError::config(format!(
                "unknown fit mode '{other}' (expected stretch or contain)"
            ))),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Source image
    pub source: PathBuf,
    /// Directory the icons are written to
    pub output_dir: PathBuf,
    /// Icons to produce, in order
    pub icons: Vec<IconSpec>,
    /// Resampling filter
    pub filter: ResampleFilter,
    /// Fit mode
    pub fit: FitMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let public_dir = default_public_dir();
        Self {
            source: public_dir.join(DEFAULT_SOURCE_NAME),
            output_dir: public_dir,
            icons: default_icons(),
            filter: ResampleFilter::default(),
            fit: FitMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults rooted at an explicit public directory
    pub fn with_public_dir(public_dir: impl Into<PathBuf>) -> Self {
        let public_dir = public_dir.into();
        Self {
            source: public_dir.join(DEFAULT_SOURCE_NAME),
            output_dir: public_dir,
            ..Self::default()
        }
    }

    /// Set the source image
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Replace the icon table
    pub fn icons(mut self, icons: Vec<IconSpec>) -> Self {
        self.icons = icons;
        self
    }

    /// Set the resampling filter
    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the fit mode
    pub fn fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    /// Read a TOML file and apply it on top of `self`
    pub fn merge_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| IconError::config(format!("{}: {}", path.display(), e)))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        debug!(config = %path.display(), "loaded config file");
        file.apply(self, base)
    }

    /// Check the merged configuration before anything is written
    pub fn validate(&self) -> Result<()> {
        if self.icons.is_empty() {
            return Err(IconError::config("icon table is empty"));
        }

        let mut seen = HashSet::new();
        for icon in &self.icons {
            if icon.size == 0 {
                return Err(IconError::config(format!("{}: size must be positive", icon.name)));
            }
            let name = Path::new(&icon.name);
            if name.file_name().map(|f| f != name.as_os_str()).unwrap_or(true) {
                return Err(IconError::config(format!(
                    "'{}' must be a plain file name",
                    icon.name
                )));
            }
            let is_png = name
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false);
            if !is_png {
                return Err(IconError::config(format!("'{}' must end in .png", icon.name)));
            }
            if !seen.insert(icon.name.as_str()) {
                return Err(IconError::config(format!("duplicate icon name '{}'", icon.name)));
            }
            if same_file(&self.output_dir.join(&icon.name), &self.source) {
                return Err(IconError::config(format!(
                    "'{}' would overwrite the source image {}",
                    icon.name,
                    self.source.display()
                )));
            }
        }
        Ok(())
    }
}

/// Lexically equal, or both resolve to the same existing file
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// On-disk configuration; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub filter: Option<String>,
    pub fit: Option<String>,
    pub icons: Option<Vec<IconSpec>>,
}

impl ConfigFile {
    /// Apply onto `config`, resolving relative paths against `base`
    pub fn apply(self, mut config: GeneratorConfig, base: &Path) -> Result<GeneratorConfig> {
        if let Some(source) = self.source {
            config.source = base.join(source);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = base.join(dir);
        }
        if let Some(filter) = self.filter {
            config.filter = filter.parse()?;
        }
        if let Some(fit) = self.fit {
            config.fit = fit.parse()?;
        }
        if let Some(icons) = self.icons {
            config.icons = icons;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(config.source.ends_with("public/아구몬똥그림.png"));
        assert!(config.output_dir.ends_with("public"));
        assert_eq!(config.icons.len(), 5);
        assert_eq!(config.filter, ResampleFilter::Lanczos3);
        assert_eq!(config.fit, FitMode::Stretch);
        config.validate().unwrap();
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("Lanczos3".parse::<ResampleFilter>().unwrap(), ResampleFilter::Lanczos3);
        assert_eq!("catmull-rom".parse::<ResampleFilter>().unwrap(), ResampleFilter::CatmullRom);
        assert!("bicubic-ish".parse::<ResampleFilter>().is_err());
        assert_eq!("CONTAIN".parse::<FitMode>().unwrap(), FitMode::Contain);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let base = GeneratorConfig::with_public_dir("/tmp/public");

        assert!(base.clone().icons(vec![]).validate().is_err());
        assert!(base
            .clone()
            .icons(vec![IconSpec::new(0, "zero.png")])
            .validate()
            .is_err());
        assert!(base
            .clone()
            .icons(vec![IconSpec::new(16, "a.png"), IconSpec::new(32, "a.png")])
            .validate()
            .is_err());
        assert!(base
            .clone()
            .icons(vec![IconSpec::new(16, "favicon.ico")])
            .validate()
            .is_err());
        assert!(base
            .icons(vec![IconSpec::new(16, "../escape.png")])
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_overwriting_source() {
        let config = GeneratorConfig::with_public_dir("/tmp/public")
            .source("/tmp/public/logo.png")
            .icons(vec![IconSpec::new(512, "logo.png")]);
        assert!(matches!(config.validate(), Err(IconError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_overwriting_source_via_other_path() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("art")).unwrap();
        std::fs::write(dir.path().join("art/logo.png"), b"png").unwrap();

        let config = GeneratorConfig::with_public_dir(dir.path().join("art"))
            .source(dir.path().join("art/../art/logo.png"))
            .icons(vec![IconSpec::new(512, "logo.png")]);
        assert!(matches!(config.validate(), Err(IconError::Config(_))));
    }

    #[test]
    fn test_merge_file_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        std::fs::write(
            &path,
            r#"
source = "assets/logo.png"
output_dir = "out"
filter = "triangle"
fit = "contain"

[[icons]]
size = 64
name = "icon64.png"
"#,
        )
        .unwrap();

        let config = GeneratorConfig::default().merge_file(&path).unwrap();
        assert_eq!(config.source, dir.path().join("assets/logo.png"));
        assert_eq!(config.output_dir, dir.path().join("out"));
        assert_eq!(config.filter, ResampleFilter::Triangle);
        assert_eq!(config.fit, FitMode::Contain);
        assert_eq!(config.icons, vec![IconSpec::new(64, "icon64.png")]);
    }

    #[test]
    fn test_merge_file_partial_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        std::fs::write(&path, "filter = \"gaussian\"\n").unwrap();

        let config = GeneratorConfig::default().merge_file(&path).unwrap();
        assert_eq!(config.filter, ResampleFilter::Gaussian);
        assert_eq!(config.icons.len(), 5);
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("icons.example.toml");
        let config = GeneratorConfig::default().merge_file(&path).unwrap();
        let defaults = GeneratorConfig::default();
        assert_eq!(config.source, defaults.source);
        assert_eq!(config.output_dir, defaults.output_dir);
        assert_eq!(config.icons, defaults.icons);
    }

    #[test]
    fn test_merge_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        std::fs::write(&path, "quality = 90\n").unwrap();

        let err = GeneratorConfig::default().merge_file(&path).unwrap_err();
        assert!(matches!(err, IconError::Config(_)));
    }
}
