//! The JSON table document and its mapping onto the core types.
//!
//! The document schema is what the CLI consumes:
//!
//! ```json
//! {
//!   "type": "single-line-full",
//!   "name": "Quarterly totals",
//!   "headers": ["Region", "Total"],
//!   "rows": [["EMEA", "1,204"], ["**APAC**", "2,117"]],
//!   "alignment": ["left", "right"],
//!   "png": {
//!     "ascii_font":   { "path": "DejaVu Sans Mono", "size": 24 },
//!     "title_font":   { "path": "DejaVu Sans Bold", "size": 24 },
//!     "content_font": { "path": "DejaVu Sans",      "size": 24 }
//!   }
//! }
//! ```
//!
//! `name` is accepted for labeling but not rendered. The `png` block is only
//! consulted for image output; an empty or missing font path selects the
//! system defaults for that face.

use serde::{Deserialize, Serialize};

use gridcast_raster::{FontRequest, FontSelection};
use gridcast_render::TableSpec;

/// One font entry in the `png` block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font file path or system font family name. Empty means "use defaults".
    #[serde(default)]
    pub path: String,
    /// Pixel size. Zero or missing falls back to the default size.
    #[serde(default)]
    pub size: f32,
}

impl FontConfig {
    fn to_request(&self) -> FontRequest {
        let default = FontRequest::default();
        FontRequest {
            name: if self.path.is_empty() {
                None
            } else {
                Some(self.path.clone())
            },
            size: if self.size > 0.0 {
                self.size
            } else {
                default.size
            },
        }
    }
}

/// PNG rendering options: one font per text classification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PngConfig {
    /// Monospace face for border glyphs.
    #[serde(default)]
    pub ascii_font: FontConfig,
    /// Bold face for emphasized content.
    #[serde(default)]
    pub title_font: FontConfig,
    /// Face for plain content.
    #[serde(default)]
    pub content_font: FontConfig,
}

impl PngConfig {
    /// Maps the config block onto the rasterizer's font selection.
    pub fn font_selection(&self) -> FontSelection {
        FontSelection {
            structural: self.ascii_font.to_request(),
            emphasized: self.title_font.to_request(),
            plain: self.content_font.to_request(),
        }
    }
}

/// A parsed table document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Border style name.
    #[serde(rename = "type")]
    pub style: String,
    /// Human label for the table; parsed but not rendered.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub alignment: Vec<String>,
    /// Image output options; only consulted with `--png`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<PngConfig>,
}

impl TableDocument {
    /// Parses a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Extracts the renderable table description.
    pub fn to_table_spec(&self) -> TableSpec {
        TableSpec {
            headers: self.headers.clone(),
            rows: self.rows.clone(),
            alignment: self.alignment.clone(),
            style: self.style.clone(),
        }
    }

    /// The font selection for image output. A missing `png` block selects
    /// system defaults for all three faces.
    pub fn font_selection(&self) -> FontSelection {
        self.png
            .as_ref()
            .map(PngConfig::font_selection)
            .unwrap_or_default()
    }
}
