//! Paragraph and inline content for ODF `text:` elements.

use crate::error::{Error, Result};
use crate::export::Format;
use crate::model::{Block, FieldKind, Inline};
use crate::xml::XmlElement;

/// Automatic paragraph style that forces a page break before it.
pub(super) const PAGE_BREAK_STYLE: &str = "PB";

/// Where a block is being written. Page breaks only exist in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Region {
    Body,
    HeaderFooter,
}

/// Convert one block to a `text:p`.
pub(super) fn block_to_paragraph(block: &Block, region: Region) -> Result<XmlElement> {
    let mut p = XmlElement::new("text:p");

    if let Block::PageBreak = block {
        if region == Region::Body {
            p.set_attr("text:style-name", PAGE_BREAK_STYLE);
        }
        return Ok(p);
    }

    if let Some(style) = block.paragraph_style() {
        p.set_attr("text:style-name", style);
    }
    for inline in block.inlines().iter() {
        push_inline(&mut p, inline)?;
    }
    Ok(p)
}

/// Append an inline, wrapped in its own `text:span` when it carries a style.
fn push_inline(p: &mut XmlElement, inline: &Inline) -> Result<()> {
    match inline.font_style() {
        Some(style) => {
            let mut span = XmlElement::new("text:span").with_attr("text:style-name", style);
            inline_content(&mut span, inline)?;
            p.push(span);
        }
        None => inline_content(p, inline)?,
    }
    Ok(())
}

fn inline_content(target: &mut XmlElement, inline: &Inline) -> Result<()> {
    match inline {
        Inline::Text { text, .. } => push_text(target, text),
        Inline::Tab { .. } => target.push(XmlElement::new("text:tab")),
        Inline::Field(field) => target.push(field_element(field.kind)?),
    }
    Ok(())
}

/// The `text:` element for a field.
pub(super) fn field_element(kind: FieldKind) -> Result<XmlElement> {
    let el = match kind {
        FieldKind::Page => {
            XmlElement::new("text:page-number").with_attr("text:select-page", "current")
        }
        FieldKind::NumPages => XmlElement::new("text:page-count"),
        FieldKind::Date => XmlElement::new("text:date"),
        FieldKind::Time => XmlElement::new("text:time"),
        FieldKind::Author => XmlElement::new("text:initial-creator"),
        FieldKind::Title => XmlElement::new("text:title"),
        FieldKind::FileName => {
            XmlElement::new("text:file-name").with_attr("text:display", "name-and-extension")
        }
        FieldKind::SectionPages => {
            return Err(Error::UnsupportedField {
                field: kind,
                format: Format::Odt,
            });
        }
    };
    Ok(el.with_text(kind.placeholder()))
}

/// Append text using ODF whitespace encoding.
///
/// ODF collapses whitespace, so a space survives literally only between two
/// non-space characters. Spaces at either end of the text, and every space
/// after the first in a run, become `text:s`. Newlines become
/// `text:line-break`, and each line is encoded on its own.
pub(super) fn push_text(target: &mut XmlElement, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            target.push(XmlElement::new("text:line-break"));
        }
        push_line(target, line);
    }
}

fn push_line(target: &mut XmlElement, line: &str) {
    let mut rest = line;
    let mut at_start = true;
    while !rest.is_empty() {
        let spaces = rest.len() - rest.trim_start_matches(' ').len();
        if spaces > 0 {
            let at_end = spaces == rest.len();
            if at_start || at_end {
                push_spaces(target, spaces);
            } else {
                target.push_text(" ");
                if spaces > 1 {
                    push_spaces(target, spaces - 1);
                }
            }
            rest = &rest[spaces..];
        } else {
            let word = rest.find(' ').unwrap_or(rest.len());
            target.push_text(&rest[..word]);
            rest = &rest[word..];
        }
        at_start = false;
    }
}

fn push_spaces(target: &mut XmlElement, count: usize) {
    let mut s = XmlElement::new("text:s");
    if count > 1 {
        s.set_attr("text:c", count.to_string());
    }
    target.push(s);
}
