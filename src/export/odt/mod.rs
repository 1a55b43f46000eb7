//! OpenDocument Text emitter.
//!
//! Produces `content.xml`, `styles.xml`, `meta.xml` and
//! `META-INF/manifest.xml`. Each section becomes a `text:section` whose
//! first paragraph switches to a per-section master page; page geometry and
//! headers/footers live on that master page in `styles.xml`.

mod content;
mod styles;
mod text;

use crate::error::Result;
use crate::ids::SectionIds;
use crate::model::{Document, FieldKind};
use crate::style::StyleRegistry;
use crate::xml::XmlElement;

use super::{EmitContext, Emitter, Format, XmlParts, with_namespaces};

const ODF_VERSION: &str = "1.2";

const NAMESPACES: &[(&str, &str)] = &[
    (
        "xmlns:office",
        "urn:oasis:names:tc:opendocument:xmlns:office:1.0",
    ),
    (
        "xmlns:style",
        "urn:oasis:names:tc:opendocument:xmlns:style:1.0",
    ),
    ("xmlns:text", "urn:oasis:names:tc:opendocument:xmlns:text:1.0"),
    (
        "xmlns:table",
        "urn:oasis:names:tc:opendocument:xmlns:table:1.0",
    ),
    (
        "xmlns:fo",
        "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0",
    ),
    (
        "xmlns:svg",
        "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0",
    ),
    ("xmlns:xlink", "http://www.w3.org/1999/xlink"),
    ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
    ("xmlns:meta", "urn:oasis:names:tc:opendocument:xmlns:meta:1.0"),
    (
        "xmlns:number",
        "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0",
    ),
];

const MANIFEST_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";

/// Configuration for ODT emission.
#[derive(Debug, Clone)]
pub struct OdtConfig {
    /// Value written to `meta:generator`.
    pub generator: String,
}

impl Default for OdtConfig {
    fn default() -> Self {
        Self {
            generator: concat!("quire/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// ODT format emitter.
///
/// # Example
///
/// ```
/// use quire::{Container, Document, Emitter, SectionProperties, StyleRegistry};
/// use quire::export::OdtEmitter;
///
/// let mut doc = Document::new();
/// doc.add_section(SectionProperties::default())
///     .add_text("Hello", None, None);
///
/// let parts = OdtEmitter::new().emit(&doc, &StyleRegistry::new())?;
/// let content = parts.get("content.xml").unwrap();
/// assert_eq!(content.count("office:body/office:text/text:section"), 1);
/// # Ok::<(), quire::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OdtEmitter {
    config: OdtConfig,
}

impl OdtEmitter {
    /// Create a new emitter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the emitter with custom settings.
    pub fn with_config(mut self, config: OdtConfig) -> Self {
        self.config = config;
        self
    }
}

impl Emitter for OdtEmitter {
    fn format(&self) -> Format {
        Format::Odt
    }

    fn supports_field(&self, kind: FieldKind) -> bool {
        // ODF has no per-section page count.
        kind != FieldKind::SectionPages
    }

    fn emit(&self, doc: &Document, styles: &StyleRegistry) -> Result<XmlParts> {
        let mut ctx = EmitContext::begin(self, doc, styles)?;
        let ids: Vec<SectionIds> = doc
            .sections()
            .iter()
            .map(|_| {
                let ids = ctx.ids.begin_section();
                log::trace!("section {} uses {}", ids.index, ids.master_page);
                ids
            })
            .collect();

        let mut parts = XmlParts::new();
        parts.insert("content.xml", content_xml(&ctx, &ids)?);
        parts.insert("styles.xml", styles_xml(&ctx, &ids)?);
        parts.insert("meta.xml", self.meta_xml());
        parts.insert("META-INF/manifest.xml", manifest_xml(&parts));

        log::debug!("emitted {} ODT part(s)", parts.len());
        Ok(parts)
    }
}

impl OdtEmitter {
    fn meta_xml(&self) -> XmlElement {
        let root = XmlElement::new("office:document-meta").with_attr("office:version", ODF_VERSION);
        with_namespaces(root, NAMESPACES).with_child(
            XmlElement::new("office:meta").with_child(
                XmlElement::new("meta:generator").with_text(self.config.generator.as_str()),
            ),
        )
    }
}

fn content_xml(ctx: &EmitContext<'_>, ids: &[SectionIds]) -> Result<XmlElement> {
    let root =
        XmlElement::new("office:document-content").with_attr("office:version", ODF_VERSION);
    Ok(with_namespaces(root, NAMESPACES)
        .with_child(styles::font_face_decls(ctx.styles)?)
        .with_child(content::automatic_styles(ctx.doc, ids))
        .with_child(content::body(ctx.doc, ids)?))
}

fn styles_xml(ctx: &EmitContext<'_>, ids: &[SectionIds]) -> Result<XmlElement> {
    let mut automatic = XmlElement::new("office:automatic-styles");
    let mut masters = XmlElement::new("office:master-styles");
    for (section, ids) in ctx.doc.sections().iter().zip(ids) {
        automatic.push(styles::page_layout(section, ids));
        masters.push(styles::master_page(section, ids)?);
    }

    let root = XmlElement::new("office:document-styles").with_attr("office:version", ODF_VERSION);
    Ok(with_namespaces(root, NAMESPACES)
        .with_child(styles::font_face_decls(ctx.styles)?)
        .with_child(styles::office_styles(ctx.styles, ctx.doc.settings()))
        .with_child(automatic)
        .with_child(masters))
}

/// Manifest listing the package root and every part emitted so far.
fn manifest_xml(parts: &XmlParts) -> XmlElement {
    let mut manifest = XmlElement::new("manifest:manifest")
        .with_attr("xmlns:manifest", MANIFEST_NS)
        .with_attr("manifest:version", ODF_VERSION);
    manifest.push(
        XmlElement::new("manifest:file-entry")
            .with_attr("manifest:full-path", "/")
            .with_attr("manifest:version", ODF_VERSION)
            .with_attr("manifest:media-type", Format::Odt.media_type()),
    );
    for name in parts.names() {
        manifest.push(
            XmlElement::new("manifest:file-entry")
                .with_attr("manifest:full-path", name)
                .with_attr("manifest:media-type", "text/xml"),
        );
    }
    manifest
}
