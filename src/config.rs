//! Page geometry, type sizes and document metadata.
//!
//! Every field has a default, a config file only needs the keys it changes:
//! ```json
//! { "largeFontSize": 24, "indentUnit": 18, "title": "Notes" }
//! ```
use std::path::Path;

use serde::Deserialize;

use crate::types::{Error, Result};

#[derive(Debug,Clone,PartialEq,Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub page_width: f32,
    pub page_height: f32,
    pub page_margin: f32,
    pub normal_font_size: f32,
    pub large_font_size: f32,
    /// layout units per indent level
    pub indent_unit: f32,
    /// multiplier on the largest font size of a line
    pub line_spacing: f32,
    /// vertical gap after each paragraph
    pub paragraph_spacing: f32,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Default for Config {
    /// A4 portrait, 12pt body text and 30pt large text
    fn default() -> Self {
        Config {
            page_width: 595.0,
            page_height: 842.0,
            page_margin: 36.0,
            normal_font_size: 12.0,
            large_font_size: 30.0,
            indent_unit: 20.0,
            line_spacing: 1.2,
            paragraph_spacing: 6.0,
            title: None,
            author: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
            path: path.to_path_buf(),
            source
        })?;

        Config::from_json(&json)
    }

    /// horizontal space between the page margins
    pub fn text_width(&self) -> f32 {
        self.page_width - self.page_margin * 2.0
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("normalFontSize", self.normal_font_size),
            ("largeFontSize", self.large_font_size),
            ("lineSpacing", self.line_spacing),
        ];

        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }

        for (name, value) in [("pageMargin", self.page_margin), ("indentUnit", self.indent_unit), ("paragraphSpacing", self.paragraph_spacing)] {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must not be negative, got {value}")));
            }
        }

        if self.text_width() <= 0.0 || self.page_height - self.page_margin * 2.0 < self.large_font_size * self.line_spacing {
            return Err(Error::InvalidConfig(format!("pageMargin {} leaves no room for text", self.page_margin)));
        }

        Ok(())
    }
}
