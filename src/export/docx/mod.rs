//! Office Open XML (DOCX) emitter.
//!
//! Section breaks are expressed the WordprocessingML way: every section but
//! the last closes with a paragraph whose properties carry its `w:sectPr`,
//! and the last section's `w:sectPr` is the final child of `w:body`.
//! Headers and footers are separate parts linked by relationship id.

mod document;
mod parts;

use crate::error::Result;
use crate::model::{Container, Document, FieldKind, HeaderFooter, HeaderFooterKind};
use crate::style::StyleRegistry;
use crate::xml::XmlElement;

use self::document::{SectionRefs, block_to_paragraph, section_properties};
use self::parts::{
    Relationship, app_xml, content_types_xml, relationships_xml, settings_xml, styles_xml,
};
use super::{EmitContext, Emitter, Format, XmlParts, with_namespaces};

pub(super) const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(super) const PACKAGE_RELS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
pub(super) const REL_TYPE_BASE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const WORD_NAMESPACES: &[(&str, &str)] = &[("xmlns:w", W_NS), ("xmlns:r", R_NS)];

/// Configuration for DOCX emission.
#[derive(Debug, Clone)]
pub struct DocxConfig {
    /// Value written to `Application` in `docProps/app.xml`.
    pub application: String,
}

impl Default for DocxConfig {
    fn default() -> Self {
        Self {
            application: concat!("quire/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// DOCX format emitter.
#[derive(Debug, Clone, Default)]
pub struct DocxEmitter {
    config: DocxConfig,
}

impl DocxEmitter {
    /// Create a new emitter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the emitter with custom settings.
    pub fn with_config(mut self, config: DocxConfig) -> Self {
        self.config = config;
        self
    }
}

impl Emitter for DocxEmitter {
    fn format(&self) -> Format {
        Format::Docx
    }

    fn supports_field(&self, _kind: FieldKind) -> bool {
        true
    }

    fn emit(&self, doc: &Document, styles: &StyleRegistry) -> Result<XmlParts> {
        let mut ctx = EmitContext::begin(self, doc, styles)?;
        let mut parts = XmlParts::new();

        let mut rels = vec![
            Relationship {
                id: ctx.ids.relationship(),
                kind: "styles",
                target: "styles.xml".into(),
            },
            Relationship {
                id: ctx.ids.relationship(),
                kind: "settings",
                target: "settings.xml".into(),
            },
        ];

        let mut body = XmlElement::new("w:body");
        let sections = doc.sections();
        for (i, section) in sections.iter().enumerate() {
            log::trace!("section {} of {}", i + 1, sections.len());
            let mut refs = SectionRefs::default();
            if let Some(header) = section.header() {
                let n = ctx.ids.header_part();
                let target = format!("header{n}.xml");
                parts.insert(format!("word/{target}"), header_footer_part(header));
                let id = ctx.ids.relationship();
                refs.header = Some(id.clone());
                rels.push(Relationship {
                    id,
                    kind: "header",
                    target,
                });
            }
            if let Some(footer) = section.footer() {
                let n = ctx.ids.footer_part();
                let target = format!("footer{n}.xml");
                parts.insert(format!("word/{target}"), header_footer_part(footer));
                let id = ctx.ids.relationship();
                refs.footer = Some(id.clone());
                rels.push(Relationship {
                    id,
                    kind: "footer",
                    target,
                });
            }

            for block in section.blocks() {
                body.push(block_to_paragraph(block));
            }

            let sect_pr = section_properties(section.properties(), &refs, i == 0);
            if i + 1 < sections.len() {
                body.push(
                    XmlElement::new("w:p").with_child(XmlElement::new("w:pPr").with_child(sect_pr)),
                );
            } else {
                body.push(sect_pr);
            }
        }

        let document = with_namespaces(XmlElement::new("w:document"), WORD_NAMESPACES);
        parts.insert("word/document.xml", document.with_child(body));
        parts.insert("word/styles.xml", styles_xml(ctx.styles, doc.settings()));
        parts.insert("word/settings.xml", settings_xml(doc.settings()));
        parts.insert("word/_rels/document.xml.rels", relationships_xml(&rels));
        parts.insert("docProps/app.xml", app_xml(&self.config.application));
        parts.insert(
            "_rels/.rels",
            relationships_xml(&[
                Relationship {
                    id: "rId1".into(),
                    kind: "officeDocument",
                    target: "word/document.xml".into(),
                },
                Relationship {
                    id: "rId2".into(),
                    kind: "extended-properties",
                    target: "docProps/app.xml".into(),
                },
            ]),
        );

        let content_types = content_types_xml(parts.names());
        parts.insert("[Content_Types].xml", content_types);

        log::debug!(
            "emitted {} DOCX part(s) with {} relationship(s)",
            parts.len(),
            rels.len()
        );
        Ok(parts)
    }
}

/// A `w:hdr` or `w:ftr` part. An empty one still holds a paragraph.
fn header_footer_part(part: &HeaderFooter) -> XmlElement {
    let name = match part.kind() {
        HeaderFooterKind::Header => "w:hdr",
        HeaderFooterKind::Footer => "w:ftr",
    };
    let mut root = with_namespaces(XmlElement::new(name), WORD_NAMESPACES);
    for block in part.blocks() {
        root.push(block_to_paragraph(block));
    }
    if root.is_empty() {
        root.push(XmlElement::new("w:p"));
    }
    root
}
