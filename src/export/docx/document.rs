//! WordprocessingML body content: paragraphs, runs, fields and section
//! properties.

use crate::layout::{Orientation, page_dimensions};
use crate::model::{Block, Field, Inline, SectionProperties};
use crate::xml::XmlElement;

/// Relationship ids a section's header and footer were given.
#[derive(Debug, Clone, Default)]
pub(super) struct SectionRefs {
    pub header: Option<String>,
    pub footer: Option<String>,
}

/// Convert one block to a `w:p`.
pub(super) fn block_to_paragraph(block: &Block) -> XmlElement {
    let mut p = XmlElement::new("w:p");

    if let Block::PageBreak = block {
        p.push(
            XmlElement::new("w:r")
                .with_child(XmlElement::new("w:br").with_attr("w:type", "page")),
        );
        return p;
    }

    if let Some(style) = block.paragraph_style() {
        p.push(
            XmlElement::new("w:pPr")
                .with_child(XmlElement::new("w:pStyle").with_attr("w:val", style)),
        );
    }
    for inline in block.inlines().iter() {
        push_runs(&mut p, inline);
    }
    p
}

fn push_runs(p: &mut XmlElement, inline: &Inline) {
    let style = inline.font_style();
    match inline {
        Inline::Text { text, .. } => {
            let mut run = new_run(style);
            for (i, line) in text.split('\n').enumerate() {
                if i > 0 {
                    run.push(XmlElement::new("w:br"));
                }
                if !line.is_empty() {
                    run.push(text_element(line));
                }
            }
            p.push(run);
        }
        Inline::Tab { .. } => p.push(new_run(style).with_child(XmlElement::new("w:tab"))),
        Inline::Field(field) => push_field(p, field),
    }
}

/// A complex field: begin, instruction, separate, cached result, end.
///
/// The cached result is a placeholder; consumers recompute it on open.
fn push_field(p: &mut XmlElement, field: &Field) {
    let style = field.font_style.as_deref();
    let fld_char = |kind: &str| {
        new_run(style).with_child(XmlElement::new("w:fldChar").with_attr("w:fldCharType", kind))
    };

    p.push(fld_char("begin"));
    p.push(
        new_run(style).with_child(
            XmlElement::new("w:instrText")
                .with_attr("xml:space", "preserve")
                .with_text(format!(" {} ", field.kind.code())),
        ),
    );
    p.push(fld_char("separate"));
    p.push(new_run(style).with_child(text_element(field.kind.placeholder())));
    p.push(fld_char("end"));
}

fn new_run(style: Option<&str>) -> XmlElement {
    let mut run = XmlElement::new("w:r");
    if let Some(style) = style {
        run.push(
            XmlElement::new("w:rPr")
                .with_child(XmlElement::new("w:rStyle").with_attr("w:val", style)),
        );
    }
    run
}

fn text_element(text: &str) -> XmlElement {
    XmlElement::new("w:t")
        .with_attr("xml:space", "preserve")
        .with_text(text)
}

/// `w:sectPr` for a section. Sections after the first start on a new page.
pub(super) fn section_properties(
    props: &SectionProperties,
    refs: &SectionRefs,
    first: bool,
) -> XmlElement {
    let mut sect = XmlElement::new("w:sectPr");

    if let Some(id) = &refs.header {
        sect.push(
            XmlElement::new("w:headerReference")
                .with_attr("w:type", "default")
                .with_attr("r:id", id.as_str()),
        );
    }
    if let Some(id) = &refs.footer {
        sect.push(
            XmlElement::new("w:footerReference")
                .with_attr("w:type", "default")
                .with_attr("r:id", id.as_str()),
        );
    }
    if !first {
        sect.push(XmlElement::new("w:type").with_attr("w:val", "nextPage"));
    }

    let page = page_dimensions(props.paper_size, props.orientation);
    let mut size = XmlElement::new("w:pgSz")
        .with_attr("w:w", page.width.as_twips().to_string())
        .with_attr("w:h", page.height.as_twips().to_string());
    if props.orientation == Orientation::Landscape {
        size.set_attr("w:orient", "landscape");
    }
    sect.push(size);

    sect.push(
        XmlElement::new("w:pgMar")
            .with_attr("w:top", props.margin_top.as_twips().to_string())
            .with_attr("w:right", props.margin_right.as_twips().to_string())
            .with_attr("w:bottom", props.margin_bottom.as_twips().to_string())
            .with_attr("w:left", props.margin_left.as_twips().to_string())
            .with_attr("w:header", props.header_height.as_twips().to_string())
            .with_attr("w:footer", props.footer_height.as_twips().to_string())
            .with_attr("w:gutter", props.gutter.as_twips().to_string()),
    );

    if let Some(start) = props.page_numbering_start {
        sect.push(XmlElement::new("w:pgNumType").with_attr("w:start", start.to_string()));
    }
    sect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Length, PaperSize};
    use crate::model::{FieldKind, TextRun};

    #[test]
    fn test_text_run_with_tabs_and_field() {
        let mut run = TextRun::new(Some("footerTab"));
        run.add_text("Left\tPage ", Some("ftr"));
        run.add_field(FieldKind::Page).set_font_style("ftr");
        let p = block_to_paragraph(&Block::TextRun(run));

        assert_eq!(
            p.select("w:pPr/w:pStyle").and_then(|s| s.attr("w:val")),
            Some("footerTab")
        );
        // text, tab, text, then five field runs
        assert_eq!(p.count("w:r"), 8);
        assert!(p.select("w:r[2]/w:tab").is_some());
        assert_eq!(
            p.select("w:r[3]/w:t").map(|t| t.text_content()),
            Some("Page ".to_string())
        );
        assert_eq!(
            p.select("w:r[5]/w:instrText").map(|t| t.text_content()),
            Some(" PAGE ".to_string())
        );
        assert_eq!(
            p.select("w:r[8]/w:fldChar").and_then(|f| f.attr("w:fldCharType")),
            Some("end")
        );
        assert_eq!(
            p.select("w:r[4]/w:rPr/w:rStyle").and_then(|s| s.attr("w:val")),
            Some("ftr")
        );
    }

    #[test]
    fn test_newline_becomes_break() {
        let mut run = TextRun::new(None);
        run.add_text("one\ntwo", None);
        let p = block_to_paragraph(&Block::TextRun(run));
        let r = p.select("w:r").unwrap();
        assert_eq!(r.count("w:t"), 2);
        assert_eq!(r.count("w:br"), 1);
        assert!(p.select("w:pPr").is_none());
    }

    #[test]
    fn test_page_break() {
        let p = block_to_paragraph(&Block::PageBreak);
        assert_eq!(
            p.select("w:r/w:br").and_then(|b| b.attr("w:type")),
            Some("page")
        );
    }

    #[test]
    fn test_landscape_section_properties() {
        let props = SectionProperties {
            paper_size: PaperSize::A4,
            orientation: Orientation::Landscape,
            gutter: Length::twips(360),
            page_numbering_start: Some(9),
            ..SectionProperties::default()
        };
        let refs = SectionRefs {
            header: Some("rId3".into()),
            footer: None,
        };
        let sect = section_properties(&props, &refs, false);

        let names: Vec<_> = sect.children().map(|c| c.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["w:headerReference", "w:type", "w:pgSz", "w:pgMar", "w:pgNumType"]
        );
        let size = sect.select("w:pgSz").unwrap();
        assert_eq!(size.attr("w:w"), Some("16838"));
        assert_eq!(size.attr("w:h"), Some("11906"));
        assert_eq!(size.attr("w:orient"), Some("landscape"));
        let margins = sect.select("w:pgMar").unwrap();
        assert_eq!(margins.attr("w:left"), Some("1440"));
        assert_eq!(margins.attr("w:gutter"), Some("360"));
        assert_eq!(
            sect.select("w:pgNumType").and_then(|n| n.attr("w:start")),
            Some("9")
        );
    }

    #[test]
    fn test_first_section_has_no_type() {
        let sect = section_properties(&SectionProperties::default(), &SectionRefs::default(), true);
        assert!(sect.select("w:type").is_none());
        assert!(sect.select("w:pgSz").unwrap().attr("w:orient").is_none());
    }
}
