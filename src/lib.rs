//! # quire
//!
//! A document model for word-processor files and emitters that turn it into
//! OpenDocument Text (ODT) and Office Open XML (DOCX) XML trees.
//!
//! ## Quick Start
//!
//! ```
//! use quire::{Container, Document, FieldKind, Format, SectionProperties, StyleRegistry};
//! use quire::model::FontStyle;
//!
//! let mut styles = StyleRegistry::new();
//! styles.add_font_style("small", FontStyle::new().with_name("Arial").with_bold(true));
//!
//! let mut doc = Document::new();
//! let section = doc.add_section(SectionProperties::default());
//! section.add_text("Hello", Some("small"), None);
//! let footer = section.add_footer().add_text_run(None);
//! footer.add_text("Page ", None);
//! footer.add_field(FieldKind::Page);
//!
//! for format in Format::ALL {
//!     let parts = format.emit(&doc, &styles)?;
//!     assert!(!parts.is_empty());
//! }
//! # Ok::<(), quire::Error>(())
//! ```
//!
//! ## Layout
//!
//! - [`model`]: sections, blocks, inlines and document settings
//! - [`style`]: the named style registry
//! - [`layout`]: twip lengths, paper sizes and page geometry
//! - [`export`]: the [`Emitter`] trait and the ODT/DOCX emitters
//! - [`package`]: ZIP containers for emitted parts
//! - [`config`]: section options from JSON

pub mod config;
pub mod error;
pub mod export;
pub mod ids;
pub mod layout;
pub mod model;
pub mod package;
pub mod style;
pub mod xml;

pub use error::{Error, Result};
pub use export::{DocxEmitter, Emitter, Format, OdtEmitter, XmlParts};
pub use layout::{Length, Orientation, PaperSize};
pub use model::{Container, Document, FieldKind, Section, SectionProperties};
pub use package::{write_package, write_package_to_path};
pub use style::StyleRegistry;
pub use xml::XmlElement;
