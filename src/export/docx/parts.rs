//! Package-level DOCX parts: styles, settings, relationships, content
//! types and extended properties.

use crate::model::{Alignment, FontStyle, ParagraphStyle, Settings, Style};
use crate::style::StyleRegistry;
use crate::xml::XmlElement;

use super::{PACKAGE_RELS_NS, REL_TYPE_BASE, W_NS};

const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const EXTENDED_PROPERTIES_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";

const WML_CT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml";

/// One entry of a relationships part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Relationship {
    pub id: String,
    /// Last path segment of the relationship type, e.g. `styles`.
    pub kind: &'static str,
    pub target: String,
}

/// `word/styles.xml`.
pub(super) fn styles_xml(styles: &StyleRegistry, settings: &Settings) -> XmlElement {
    let mut rpr = XmlElement::new("w:rPr");
    if let Some(lang) = theme_lang("w:lang", settings) {
        rpr.push(lang);
    }
    let mut root = XmlElement::new("w:styles")
        .with_attr("xmlns:w", W_NS)
        .with_child(
            XmlElement::new("w:docDefaults")
                .with_child(XmlElement::new("w:rPrDefault").with_child(rpr)),
        );

    for (name, style) in styles.iter() {
        root.push(match style {
            Style::Font(font) => character_style(name, font),
            Style::Paragraph(para) => paragraph_style(name, para),
        });
    }
    root
}

fn style_header(kind: &str, name: &str, based_on: Option<&str>) -> XmlElement {
    let mut el = XmlElement::new("w:style")
        .with_attr("w:type", kind)
        .with_attr("w:customStyle", "1")
        .with_attr("w:styleId", name)
        .with_child(XmlElement::new("w:name").with_attr("w:val", name));
    if let Some(base) = based_on {
        el.push(XmlElement::new("w:basedOn").with_attr("w:val", base));
    }
    el
}

/// A toggle property. `w:val="0"` turns off an inherited value.
fn toggle(name: &str, on: bool) -> XmlElement {
    let el = XmlElement::new(name);
    if on { el } else { el.with_attr("w:val", "0") }
}

fn character_style(name: &str, font: &FontStyle) -> XmlElement {
    let mut rpr = XmlElement::new("w:rPr");
    if let Some(family) = &font.name {
        let family = family.as_str();
        rpr.push(
            XmlElement::new("w:rFonts")
                .with_attr("w:ascii", family)
                .with_attr("w:hAnsi", family)
                .with_attr("w:cs", family)
                .with_attr("w:eastAsia", family),
        );
    }
    if let Some(bold) = font.bold {
        rpr.push(toggle("w:b", bold));
    }
    if let Some(italic) = font.italic {
        rpr.push(toggle("w:i", italic));
    }
    if let Some(color) = &font.color {
        rpr.push(XmlElement::new("w:color").with_attr("w:val", color.as_str()));
    }
    if let Some(size) = font.size {
        let half_points = size.as_half_points().to_string();
        rpr.push(XmlElement::new("w:sz").with_attr("w:val", half_points.as_str()));
        rpr.push(XmlElement::new("w:szCs").with_attr("w:val", half_points));
    }
    if let Some(underline) = font.underline {
        rpr.push(
            XmlElement::new("w:u").with_attr("w:val", if underline { "single" } else { "none" }),
        );
    }
    style_header("character", name, font.based_on.as_deref()).with_child(rpr)
}

fn paragraph_style(name: &str, para: &ParagraphStyle) -> XmlElement {
    let mut ppr = XmlElement::new("w:pPr");
    if !para.tabs.is_empty() {
        let mut tabs = XmlElement::new("w:tabs");
        for tab in &para.tabs {
            tabs.push(
                XmlElement::new("w:tab")
                    .with_attr("w:val", tab.alignment.as_str())
                    .with_attr("w:pos", tab.position.as_twips().to_string()),
            );
        }
        ppr.push(tabs);
    }
    if para.space_before.is_some() || para.space_after.is_some() {
        let mut spacing = XmlElement::new("w:spacing");
        if let Some(before) = para.space_before {
            spacing.set_attr("w:before", before.as_twips().to_string());
        }
        if let Some(after) = para.space_after {
            spacing.set_attr("w:after", after.as_twips().to_string());
        }
        ppr.push(spacing);
    }
    if let Some(alignment) = para.alignment {
        let value = match alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        };
        ppr.push(XmlElement::new("w:jc").with_attr("w:val", value));
    }
    style_header("paragraph", name, para.based_on.as_deref()).with_child(ppr)
}

/// A language element (`w:lang` or `w:themeFontLang`) for the theme
/// language, if one is set.
fn theme_lang(name: &str, settings: &Settings) -> Option<XmlElement> {
    let theme = settings.theme_font_lang.as_ref()?;
    let mut el = XmlElement::new(name);
    if let Some(tag) = theme.latin_tag() {
        el.set_attr("w:val", tag);
    }
    if let Some(tag) = &theme.east_asia {
        el.set_attr("w:eastAsia", tag.as_str());
    }
    if let Some(tag) = &theme.bidirectional {
        el.set_attr("w:bidi", tag.as_str());
    }
    Some(el)
}

/// `word/settings.xml`.
pub(super) fn settings_xml(settings: &Settings) -> XmlElement {
    let mut root = XmlElement::new("w:settings").with_attr("xmlns:w", W_NS);
    if settings.hide_spelling_errors {
        root.push(XmlElement::new("w:hideSpellingErrors"));
    }
    if settings.hide_grammatical_errors {
        root.push(XmlElement::new("w:hideGrammaticalErrors"));
    }
    if let Some(lang) = theme_lang("w:themeFontLang", settings) {
        root.push(lang);
    }
    root
}

/// A `Relationships` part.
pub(super) fn relationships_xml(rels: &[Relationship]) -> XmlElement {
    let mut root = XmlElement::new("Relationships").with_attr("xmlns", PACKAGE_RELS_NS);
    for rel in rels {
        root.push(
            XmlElement::new("Relationship")
                .with_attr("Id", rel.id.as_str())
                .with_attr("Type", format!("{REL_TYPE_BASE}/{}", rel.kind))
                .with_attr("Target", rel.target.as_str()),
        );
    }
    root
}

/// Content type of a part, or `None` when the extension default covers it.
fn override_type(name: &str) -> Option<String> {
    let file = name.rsplit('/').next().unwrap_or(name);
    let kind = match file {
        "document.xml" => "document.main",
        "styles.xml" => "styles",
        "settings.xml" => "settings",
        "app.xml" => {
            return Some(
                "application/vnd.openxmlformats-officedocument.extended-properties+xml".into(),
            );
        }
        f if f.starts_with("header") => "header",
        f if f.starts_with("footer") => "footer",
        _ => return None,
    };
    Some(format!("{WML_CT}.{kind}+xml"))
}

/// `[Content_Types].xml` covering `part_names`.
pub(super) fn content_types_xml<'a>(part_names: impl IntoIterator<Item = &'a str>) -> XmlElement {
    let mut root = XmlElement::new("Types")
        .with_attr("xmlns", CONTENT_TYPES_NS)
        .with_child(
            XmlElement::new("Default")
                .with_attr("Extension", "rels")
                .with_attr(
                    "ContentType",
                    "application/vnd.openxmlformats-package.relationships+xml",
                ),
        )
        .with_child(
            XmlElement::new("Default")
                .with_attr("Extension", "xml")
                .with_attr("ContentType", "application/xml"),
        );

    for name in part_names {
        if let Some(content_type) = override_type(name) {
            root.push(
                XmlElement::new("Override")
                    .with_attr("PartName", format!("/{name}"))
                    .with_attr("ContentType", content_type),
            );
        }
    }
    root
}

/// `docProps/app.xml`.
pub(super) fn app_xml(application: &str) -> XmlElement {
    XmlElement::new("Properties")
        .with_attr("xmlns", EXTENDED_PROPERTIES_NS)
        .with_child(XmlElement::new("Application").with_text(application))
}
