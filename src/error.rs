//! Error types for icon-gen
//!
//! ## Table of Contents
//! - **IconError**: Main error enum covering all failure modes
//! - **Result**: Type alias for `Result<T, IconError>`

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, IconError>;

/// Main error type for icon generation
#[derive(Error, Debug)]
pub enum IconError {
    /// Source image does not exist
    #[error("source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// No decoder for the source's format is compiled into this build
    #[error("no decoder available for {}: {detail}", path.display())]
    UnsupportedFormat { path: PathBuf, detail: String },

    /// Source exists but could not be decoded
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// PNG encoding failed
    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Filesystem failure while reading or writing
    #[error("io error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory is missing
    #[error("output directory not found: {}", path.display())]
    OutputDirNotFound { path: PathBuf },

    /// Invalid configuration (file, flags or icon table)
    #[error("configuration error: {0}")]
    Config(String),
}

impl IconError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Classify a decode failure. Only a recognized format whose decoder is
    /// compiled out counts as a missing capability; unknown formats and
    /// non-image files are plain decode errors.
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        let path = path.as_ref().to_path_buf();
        match source {
            image::ImageError::Unsupported(err) if decoder_compiled_out(&err) => {
                Self::UnsupportedFormat {
                    path,
                    detail: err.to_string(),
                }
            }
            image::ImageError::IoError(err) => Self::Io { path, source: err },
            source => Self::Decode { path, source },
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

fn decoder_compiled_out(err: &UnsupportedError) -> bool {
    match err.kind() {
        UnsupportedErrorKind::Format(ImageFormatHint::Exact(format)) => !format.reading_enabled(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::error::Error as _;

    fn unsupported(hint: ImageFormatHint) -> image::ImageError {
        image::ImageError::Unsupported(UnsupportedError::from(hint))
    }

    #[test]
    fn test_compiled_out_decoder_is_capability_error() {
        // Depends on the build's feature set; every format may be enabled
        let Some(format) = ImageFormat::all().find(|f| !f.reading_enabled()) else {
            return;
        };
        let err = IconError::decode("public/source.img", unsupported(ImageFormatHint::Exact(format)));
        assert!(matches!(err, IconError::UnsupportedFormat { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unknown_format_is_decode_error() {
        let err = IconError::decode("notes.txt", unsupported(ImageFormatHint::Unknown));
        assert!(matches!(err, IconError::Decode { .. }));

        let err = IconError::decode(
            "Cargo.toml",
            unsupported(ImageFormatHint::PathExtension(PathBuf::from("toml"))),
        );
        assert!(matches!(err, IconError::Decode { .. }));
    }

    #[test]
    fn test_enabled_format_unsupported_feature_is_decode_error() {
        let err = IconError::decode("icon.png", unsupported(ImageFormatHint::Exact(ImageFormat::Png)));
        assert!(matches!(err, IconError::Decode { .. }));
    }

    #[test]
    fn test_display_leaves_cause_to_source_chain() {
        let err = IconError::io(
            "/root/x.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "io error on /root/x.png");
        assert_eq!(err.source().unwrap().to_string(), "permission denied");
    }

    #[test]
    fn test_source_not_found_names_path() {
        let err = IconError::SourceNotFound {
            path: PathBuf::from("public/missing.png"),
        };
        assert!(err.to_string().contains("public/missing.png"));
    }
}
