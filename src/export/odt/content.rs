//! `content.xml`: section wrappers and body paragraphs.

use crate::error::Result;
use crate::ids::SectionIds;
use crate::model::{Block, Container, Document};
use crate::xml::XmlElement;

use super::text::{PAGE_BREAK_STYLE, Region, block_to_paragraph};

/// Automatic section style shared by every `text:section`.
const SECTION_STYLE: &str = "Sect";

/// `office:automatic-styles` for the body.
///
/// The shared section style comes first, then one paragraph style per
/// section binding it to its master page, then the page break style when
/// the body needs it.
pub(super) fn automatic_styles(doc: &Document, ids: &[SectionIds]) -> XmlElement {
    let mut auto = XmlElement::new("office:automatic-styles");
    auto.push(
        XmlElement::new("style:style")
            .with_attr("style:name", SECTION_STYLE)
            .with_attr("style:family", "section")
            .with_child(
                XmlElement::new("style:section-properties").with_attr("style:editable", "false"),
            ),
    );

    for (section, ids) in doc.sections().iter().zip(ids) {
        let mut style = XmlElement::new("style:style")
            .with_attr("style:name", ids.section_style.as_str())
            .with_attr("style:family", "paragraph")
            .with_attr("style:master-page-name", ids.master_page.as_str());
        if let Some(start) = section.properties().page_numbering_start {
            style.push(
                XmlElement::new("style:paragraph-properties")
                    .with_attr("style:page-number", start.to_string()),
            );
        }
        style.push(XmlElement::new("style:text-properties").with_attr("text:display", "none"));
        auto.push(style);
    }

    let has_break = doc
        .sections()
        .iter()
        .any(|s| s.blocks().iter().any(|b| matches!(b, Block::PageBreak)));
    if has_break {
        auto.push(
            XmlElement::new("style:style")
                .with_attr("style:name", PAGE_BREAK_STYLE)
                .with_attr("style:family", "paragraph")
                .with_child(
                    XmlElement::new("style:paragraph-properties")
                        .with_attr("fo:break-before", "page"),
                ),
        );
    }
    auto
}

/// `office:body` with one `text:section` per document section.
///
/// Each section opens with an empty, hidden paragraph in its `SB{n}` style;
/// that paragraph is what switches the page to the section's master page.
pub(super) fn body(doc: &Document, ids: &[SectionIds]) -> Result<XmlElement> {
    let mut text = XmlElement::new("office:text");

    for (section, ids) in doc.sections().iter().zip(ids) {
        let mut wrapper = XmlElement::new("text:section")
            .with_attr("text:name", format!("Section{}", ids.index))
            .with_attr("text:style-name", SECTION_STYLE)
            .with_child(
                XmlElement::new("text:p").with_attr("text:style-name", ids.section_style.as_str()),
            );
        for block in section.blocks() {
            wrapper.push(block_to_paragraph(block, Region::Body)?);
        }
        text.push(wrapper);
    }

    Ok(XmlElement::new("office:body").with_child(text))
}
