//! Section options supplied as a string-keyed map.
//!
//! Callers that build documents from configuration rather than code pass
//! section setup as JSON:
//!
//! ```
//! use quire::config::SectionOptions;
//! use quire::layout::{Orientation, PaperSize};
//!
//! let options = SectionOptions::from_json(r#"{"paperSize": "A4", "Orientation": "landscape"}"#)?;
//! let props = options.into_properties()?;
//! assert_eq!(props.paper_size, PaperSize::A4);
//! assert_eq!(props.orientation, Orientation::Landscape);
//! # Ok::<(), quire::Error>(())
//! ```
//!
//! Unknown keys are rejected. Lengths are whole twips and may not be
//! negative. `paperSize` and `orientation` are names matched without regard
//! to case. `pageNumberingStart` is a JSON number of at least 1; a numeric
//! string such as `"9"` is rejected with [`Error::InvalidOptions`].

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::layout::Length;
use crate::model::SectionProperties;

/// Raw section options. Every field is optional and defaults to the
/// corresponding [`SectionProperties::default`] value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionOptions {
    pub paper_size: Option<String>,
    #[serde(alias = "Orientation")]
    pub orientation: Option<String>,
    pub margin_top: Option<i64>,
    pub margin_bottom: Option<i64>,
    pub margin_left: Option<i64>,
    pub margin_right: Option<i64>,
    pub gutter: Option<i64>,
    pub header_height: Option<i64>,
    pub footer_height: Option<i64>,
    pub page_numbering_start: Option<u32>,
}

impl SectionOptions {
    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))
    }

    /// Validate and convert to [`SectionProperties`].
    pub fn into_properties(self) -> Result<SectionProperties> {
        let mut props = SectionProperties::default();

        if let Some(paper) = self.paper_size {
            props.paper_size = paper.parse()?;
        }
        if let Some(orientation) = self.orientation {
            props.orientation = orientation.parse()?;
        }

        let lengths = [
            ("marginTop", self.margin_top, &mut props.margin_top),
            ("marginBottom", self.margin_bottom, &mut props.margin_bottom),
            ("marginLeft", self.margin_left, &mut props.margin_left),
            ("marginRight", self.margin_right, &mut props.margin_right),
            ("gutter", self.gutter, &mut props.gutter),
            ("headerHeight", self.header_height, &mut props.header_height),
            ("footerHeight", self.footer_height, &mut props.footer_height),
        ];
        for (key, value, slot) in lengths {
            if let Some(twips) = value {
                if twips < 0 {
                    return Err(Error::InvalidOptions(format!("{key} is negative: {twips}")));
                }
                *slot = Length::twips(twips);
            }
        }

        if let Some(start) = self.page_numbering_start {
            if start == 0 {
                return Err(Error::InvalidOptions(
                    "pageNumberingStart must be at least 1".into(),
                ));
            }
            props.page_numbering_start = Some(start);
        }
        Ok(props)
    }
}
