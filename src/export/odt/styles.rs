//! `styles.xml`: named styles, page layouts and master pages.

use crate::error::Result;
use crate::ids::SectionIds;
use crate::layout::{MeasureUnit, effective_margins, page_dimensions};
use crate::model::{
    Alignment, Container, FontStyle, HeaderFooter, ParagraphStyle, Section, Settings, Style,
    split_language_tag,
};
use crate::style::StyleRegistry;
use crate::xml::XmlElement;

use super::text::{Region, block_to_paragraph};

/// Build `office:font-face-decls` from every font family the registry uses,
/// in registration order with duplicates dropped.
pub(super) fn font_face_decls(styles: &StyleRegistry) -> Result<XmlElement> {
    let mut decls = XmlElement::new("office:font-face-decls");
    let mut seen: Vec<String> = Vec::new();

    for (name, style) in styles.iter() {
        if !matches!(style, Style::Font(_)) {
            continue;
        }
        let Some(family) = styles.effective_font(name)?.name else {
            continue;
        };
        if seen.contains(&family) {
            continue;
        }
        let quoted = if family.contains(' ') {
            format!("'{family}'")
        } else {
            family.clone()
        };
        decls.push(
            XmlElement::new("style:font-face")
                .with_attr("style:name", family.as_str())
                .with_attr("svg:font-family", quoted),
        );
        seen.push(family);
    }
    Ok(decls)
}

/// `office:styles`: the paragraph default style followed by every registered
/// style in registration order.
pub(super) fn office_styles(styles: &StyleRegistry, settings: &Settings) -> XmlElement {
    let mut office = XmlElement::new("office:styles");
    office.push(
        XmlElement::new("style:default-style")
            .with_attr("style:family", "paragraph")
            .with_child(language_properties(settings)),
    );

    for (name, style) in styles.iter() {
        let el = match style {
            Style::Font(font) => font_style(name, font),
            Style::Paragraph(para) => paragraph_style(name, para),
        };
        office.push(el);
    }
    office
}

/// Default text properties carrying the document language.
///
/// Suppressed proofing is expressed as the "no linguistic content" language
/// on all three script axes.
fn language_properties(settings: &Settings) -> XmlElement {
    let mut props = XmlElement::new("style:text-properties");

    if settings.proofing_hidden() {
        for (lang, country) in [
            ("fo:language", "fo:country"),
            ("style:language-asian", "style:country-asian"),
            ("style:language-complex", "style:country-complex"),
        ] {
            props.set_attr(lang, "zxx");
            props.set_attr(country, "none");
        }
        return props;
    }

    if let Some(theme) = &settings.theme_font_lang {
        let axes = [
            (theme.latin_tag(), "fo:language", "fo:country"),
            (
                theme.east_asia.as_deref(),
                "style:language-asian",
                "style:country-asian",
            ),
            (
                theme.bidirectional.as_deref(),
                "style:language-complex",
                "style:country-complex",
            ),
        ];
        for (tag, lang_attr, country_attr) in axes {
            if let Some(tag) = tag {
                let (language, country) = split_language_tag(tag);
                props.set_attr(lang_attr, language);
                props.set_attr(country_attr, country.unwrap_or("none"));
            }
        }
    }
    props
}

fn font_style(name: &str, font: &FontStyle) -> XmlElement {
    let mut el = XmlElement::new("style:style")
        .with_attr("style:name", name)
        .with_attr("style:family", "text");
    if let Some(base) = &font.based_on {
        el.set_attr("style:parent-style-name", base.as_str());
    }

    let mut props = XmlElement::new("style:text-properties");
    if let Some(family) = &font.name {
        props.set_attr("style:font-name", family.as_str());
    }
    if let Some(size) = font.size {
        props.set_attr("fo:font-size", size.format(MeasureUnit::Point));
    }
    if let Some(bold) = font.bold {
        props.set_attr("fo:font-weight", if bold { "bold" } else { "normal" });
    }
    if let Some(italic) = font.italic {
        props.set_attr("fo:font-style", if italic { "italic" } else { "normal" });
    }
    if let Some(underline) = font.underline {
        props.set_attr(
            "style:text-underline-style",
            if underline { "solid" } else { "none" },
        );
    }
    if let Some(color) = &font.color {
        props.set_attr("fo:color", format!("#{color}"));
    }
    el.with_child(props)
}

fn paragraph_style(name: &str, para: &ParagraphStyle) -> XmlElement {
    let mut el = XmlElement::new("style:style")
        .with_attr("style:name", name)
        .with_attr("style:family", "paragraph");
    if let Some(base) = &para.based_on {
        el.set_attr("style:parent-style-name", base.as_str());
    }

    let mut props = XmlElement::new("style:paragraph-properties");
    if let Some(alignment) = para.alignment {
        let value = match alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        };
        props.set_attr("fo:text-align", value);
    }
    if let Some(before) = para.space_before {
        props.set_attr("fo:margin-top", before.format(MeasureUnit::Inch));
    }
    if let Some(after) = para.space_after {
        props.set_attr("fo:margin-bottom", after.format(MeasureUnit::Inch));
    }
    if !para.tabs.is_empty() {
        let mut stops = XmlElement::new("style:tab-stops");
        for tab in &para.tabs {
            stops.push(
                XmlElement::new("style:tab-stop")
                    .with_attr("style:type", tab.alignment.as_str())
                    .with_attr("style:position", tab.position.format(MeasureUnit::Inch)),
            );
        }
        props.push(stops);
    }
    el.with_child(props)
}

/// `style:page-layout` for one section.
///
/// When a header is present the page's top margin becomes the header
/// distance, and the rest of the body margin moves into the header's own
/// bottom margin. The footer mirrors this at the bottom.
pub(super) fn page_layout(section: &Section, ids: &SectionIds) -> XmlElement {
    let props = section.properties();
    let page = page_dimensions(props.paper_size, props.orientation);
    let margins = effective_margins(props);
    let unit = page.unit;

    let top = match section.header() {
        Some(_) => props.header_height,
        None => margins.top,
    };
    let bottom = match section.footer() {
        Some(_) => props.footer_height,
        None => margins.bottom,
    };

    let layout_props = XmlElement::new("style:page-layout-properties")
        .with_attr("fo:page-width", page.width.format(unit))
        .with_attr("fo:page-height", page.height.format(unit))
        .with_attr("style:print-orientation", props.orientation.as_str())
        .with_attr("fo:margin-top", top.format(unit))
        .with_attr("fo:margin-bottom", bottom.format(unit))
        .with_attr("fo:margin-left", margins.left.format(unit))
        .with_attr("fo:margin-right", margins.right.format(unit));

    let mut header_style = XmlElement::new("style:header-style");
    if section.header().is_some() {
        let gap = margins.top.saturating_sub(props.header_height);
        header_style.push(
            XmlElement::new("style:header-footer-properties")
                .with_attr("fo:min-height", "0")
                .with_attr("fo:margin-bottom", gap.format(unit)),
        );
    }

    let mut footer_style = XmlElement::new("style:footer-style");
    if section.footer().is_some() {
        let gap = margins.bottom.saturating_sub(props.footer_height);
        footer_style.push(
            XmlElement::new("style:header-footer-properties")
                .with_attr("fo:min-height", "0")
                .with_attr("fo:margin-top", gap.format(unit)),
        );
    }

    XmlElement::new("style:page-layout")
        .with_attr("style:name", ids.page_layout.as_str())
        .with_child(layout_props)
        .with_child(header_style)
        .with_child(footer_style)
}

/// `style:master-page` for one section, holding its header and footer.
pub(super) fn master_page(section: &Section, ids: &SectionIds) -> Result<XmlElement> {
    let mut master = XmlElement::new("style:master-page")
        .with_attr("style:name", ids.master_page.as_str())
        .with_attr("style:page-layout-name", ids.page_layout.as_str());

    if let Some(header) = section.header() {
        master.push(header_footer("style:header", header)?);
    }
    if let Some(footer) = section.footer() {
        master.push(header_footer("style:footer", footer)?);
    }
    Ok(master)
}

fn header_footer(name: &str, part: &HeaderFooter) -> Result<XmlElement> {
    let mut el = XmlElement::new(name);
    for block in part.blocks() {
        el.push(block_to_paragraph(block, Region::HeaderFooter)?);
    }
    if el.is_empty() {
        el.push(XmlElement::new("text:p"));
    }
    Ok(el)
}
