//! Emission of a [`Document`] into target-format XML trees.
//!
//! Provides the `Emitter` trait and the format-specific implementations.
//!
//! # Architecture
//!
//! Every emitter follows the same shape:
//! - `new()` creates an emitter with default configuration
//! - `with_config()` allows customization
//! - `emit()` validates style and field references, walks the document with
//!   a fresh [`IdAllocator`], and returns the named XML trees as [`XmlParts`]
//! - `export()` additionally packages the parts into a container
//!
//! # Example
//!
//! ```
//! use quire::{Container, Document, Format, SectionProperties, StyleRegistry};
//!
//! let mut doc = Document::new();
//! doc.add_section(SectionProperties::default())
//!     .add_text("Hello", None, None);
//!
//! let parts = Format::Odt.emit(&doc, &StyleRegistry::new())?;
//! assert!(parts.get("content.xml").is_some());
//! # Ok::<(), quire::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::io::{Seek, Write};

use crate::error::{Error, Result};
use crate::ids::IdAllocator;
use crate::model::{Document, FieldKind, Inline, Style};
use crate::package::write_package;
use crate::style::StyleRegistry;
use crate::xml::XmlElement;

mod docx;
mod odt;

pub use docx::{DocxConfig, DocxEmitter};
pub use odt::{OdtConfig, OdtEmitter};

// ============================================================================
// Formats
// ============================================================================

/// Supported target formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// OpenDocument Text.
    Odt,
    /// Office Open XML WordprocessingML.
    Docx,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Odt, Format::Docx];

    /// Emit `doc` with this format's default emitter.
    pub fn emit(self, doc: &Document, styles: &StyleRegistry) -> Result<XmlParts> {
        match self {
            Format::Odt => OdtEmitter::new().emit(doc, styles),
            Format::Docx => DocxEmitter::new().emit(doc, styles),
        }
    }

    /// Usual file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Odt => "odt",
            Format::Docx => "docx",
        }
    }

    /// Container media type.
    pub const fn media_type(self) -> &'static str {
        match self {
            Format::Odt => "application/vnd.oasis.opendocument.text",
            Format::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Contents of the uncompressed `mimetype` entry, for formats that have one.
    pub const fn mimetype_entry(self) -> Option<&'static str> {
        match self {
            Format::Odt => Some(self.media_type()),
            Format::Docx => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Odt => "ODT",
            Format::Docx => "DOCX",
        })
    }
}

// ============================================================================
// Emitted parts
// ============================================================================

/// Emitted XML trees keyed by their path inside the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlParts {
    parts: BTreeMap<String, XmlElement>,
}

impl XmlParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, root: XmlElement) {
        self.parts.insert(name.into(), root);
    }

    pub fn get(&self, name: &str) -> Option<&XmlElement> {
        self.parts.get(name)
    }

    /// Parts in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &XmlElement)> {
        self.parts.iter().map(|(name, root)| (name.as_str(), root))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

// ============================================================================
// Emitter contract
// ============================================================================

/// Trait for emitting documents in a specific format.
///
/// Emitters hold only configuration. All per-pass state lives in an
/// [`EmitContext`] created inside `emit`, so one emitter may serve many
/// documents, and one document may be emitted to several formats in
/// parallel.
pub trait Emitter {
    /// The format this emitter produces.
    fn format(&self) -> Format;

    /// Whether this format can express `kind`.
    fn supports_field(&self, kind: FieldKind) -> bool;

    /// Produce the XML trees for `doc`.
    fn emit(&self, doc: &Document, styles: &StyleRegistry) -> Result<XmlParts>;

    /// Emit and package into `writer`.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `std::io::Cursor<Vec<u8>>` for in-memory output
    /// - Any other type implementing `Write + Seek`
    fn export<W: Write + Seek>(
        &self,
        doc: &Document,
        styles: &StyleRegistry,
        writer: W,
    ) -> Result<()>
    where
        Self: Sized,
    {
        let parts = self.emit(doc, styles)?;
        write_package(&parts, self.format(), writer)
    }
}

/// State for one emission pass.
pub(crate) struct EmitContext<'a> {
    pub doc: &'a Document,
    pub styles: &'a StyleRegistry,
    pub ids: IdAllocator,
}

impl<'a> EmitContext<'a> {
    /// Validate `doc` for `emitter` and start a pass with fresh counters.
    pub fn begin(
        emitter: &impl Emitter,
        doc: &'a Document,
        styles: &'a StyleRegistry,
    ) -> Result<Self> {
        log::debug!(
            "emitting {} section(s) as {}",
            doc.sections().len(),
            emitter.format()
        );
        validate(emitter, doc, styles)?;
        Ok(Self {
            doc,
            styles,
            ids: IdAllocator::new(),
        })
    }
}

/// Check every style reference and field before anything is emitted.
///
/// Registered styles are resolved with their base so a dangling `based_on`
/// fails too. Fields the format cannot express fail with
/// [`Error::UnsupportedField`].
fn validate(emitter: &impl Emitter, doc: &Document, styles: &StyleRegistry) -> Result<()> {
    for (name, style) in styles.iter() {
        match style {
            Style::Font(_) => {
                styles.effective_font(name)?;
            }
            Style::Paragraph(_) => {
                styles.effective_paragraph(name)?;
            }
        }
    }

    for block in doc.all_blocks() {
        if let Some(name) = block.paragraph_style() {
            styles.paragraph(name)?;
        }
        for inline in block.inlines().iter() {
            if let Some(name) = inline.font_style() {
                styles.font(name)?;
            }
            if let Inline::Field(field) = inline
                && !emitter.supports_field(field.kind)
            {
                return Err(Error::UnsupportedField {
                    field: field.kind,
                    format: emitter.format(),
                });
            }
        }
    }
    Ok(())
}

/// Namespace declarations as `(prefix attribute, uri)` pairs.
pub(crate) fn with_namespaces(mut root: XmlElement, namespaces: &[(&str, &str)]) -> XmlElement {
    for (prefix, uri) in namespaces {
        root.set_attr(*prefix, *uri);
    }
    root
}
