//! Format-agnostic document model.
//!
//! This module contains:
//! - The document root and its settings
//! - Sections with page properties and headers/footers
//! - Block and inline elements (paragraphs, text runs, fields, tabs)
//! - Named style definitions

mod document;
mod element;
mod section;
mod settings;
mod style;

pub use document::Document;
pub use element::{Block, Container, Field, FieldKind, Inline, Paragraph, TextRun};
pub use section::{HeaderFooter, HeaderFooterKind, Section, SectionProperties};
pub use settings::{Language, Settings, split_language_tag};
pub use style::{Alignment, FontStyle, ParagraphStyle, Style, Tab, TabAlignment};
