//! Icon specs and the default icon table

use serde::Deserialize;

/// One requested output: edge length in pixels plus output file name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconSpec {
    /// Edge length of the square output
    pub size: u32,
    /// File name written into the output directory
    pub name: String,
}

impl IconSpec {
    /// Create a spec
    pub fn new(size: u32, name: impl Into<String>) -> Self {
        Self {
            size,
            name: name.into(),
        }
    }

    /// `"<size>x<size>"`, as printed in status lines
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.size, self.size)
    }
}

/// Favicons, the legacy 48px icon, and the two PWA manifest logos
pub const DEFAULT_ICONS: [(u32, &str); 5] = [
    (16, "favicon16.png"),
    (32, "favicon32_agumon.png"),
    (48, "icon48.png"),
    (192, "logo192_agumon.png"),
    (512, "logo512_agumon.png"),
];

/// The default table as owned specs, in output order
pub fn default_icons() -> Vec<IconSpec> {
    DEFAULT_ICONS
        .iter()
        .map(|&(size, name)| IconSpec::new(size, name))
        .collect()
}
