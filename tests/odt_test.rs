//! ODT emission tests: page layouts, master pages, headers/footers and tabs.

use quire::export::OdtEmitter;
use quire::layout::{TabPosition, content_width};
use quire::model::{Alignment, FontStyle, Language, ParagraphStyle, Tab, TabAlignment};
use quire::{
    Container, Document, Emitter, FieldKind, Length, Orientation, PaperSize, SectionProperties,
    StyleRegistry, XmlElement,
};

fn emit(doc: &Document, styles: &StyleRegistry) -> quire::XmlParts {
    OdtEmitter::new().emit(doc, styles).unwrap()
}

fn part<'a>(parts: &'a quire::XmlParts, name: &str) -> &'a XmlElement {
    parts.get(name).unwrap_or_else(|| panic!("missing part {name}"))
}

fn attr<'a>(root: &'a XmlElement, path: &str, name: &str) -> Option<&'a str> {
    root.select(path).and_then(|el| el.attr(name))
}

#[test]
fn test_header_footer_tabs() {
    let mut styles = StyleRegistry::new();
    styles.add_font_style(
        "hdrstyle1",
        FontStyle::new()
            .with_name("Courier New")
            .with_size(Length::points(8)),
    );

    let mut doc = Document::new();
    let section = doc.add_section(SectionProperties {
        paper_size: PaperSize::Letter,
        margin_top: Length::inches(1),
        margin_bottom: Length::inches(1),
        ..SectionProperties::default()
    });

    styles.add_paragraph_style(
        "centerheader",
        ParagraphStyle::new().with_alignment(Alignment::Center),
    );
    section
        .add_header()
        .add_text("Centered Header", Some("hdrstyle1"), Some("centerheader"));

    let width = content_width(section.properties());
    styles.add_paragraph_style(
        "footerTab",
        ParagraphStyle::new()
            .with_tab(Tab::within(TabAlignment::Center, TabPosition::CENTER, width).unwrap())
            .with_tab(Tab::within(TabAlignment::Right, TabPosition::END, width).unwrap()),
    );

    let run = section.add_footer().add_text_run(Some("footerTab"));
    run.add_text("Left footer", Some("hdrstyle1"));
    run.add_text("\t", Some("hdrstyle1"));
    run.add_field(FieldKind::Date).set_font_style("hdrstyle1");
    run.add_text("\t", Some("hdrstyle1"));
    run.add_text("Page ", Some("hdrstyle1"));
    run.add_field(FieldKind::Page).set_font_style("hdrstyle1");
    run.add_text(" of ", Some("hdrstyle1"));
    run.add_field(FieldKind::NumPages).set_font_style("hdrstyle1");

    section.add_text("First page", None, None);
    section.add_page_break();
    section.add_text("Second page", None, None);
    section.add_page_break();
    section.add_text("Third page", None, None);

    let parts = emit(&doc, &styles);
    let s = part(&parts, "styles.xml");

    let layout = "/office:document-styles/office:automatic-styles/style:page-layout/style:page-layout-properties";
    assert_eq!(attr(s, layout, "fo:page-width"), Some("8.5in"));
    assert_eq!(attr(s, layout, "fo:page-height"), Some("11in"));
    assert_eq!(attr(s, layout, "fo:margin-top"), Some("0.5in"));
    assert_eq!(attr(s, layout, "fo:margin-bottom"), Some("0.5in"));

    let named = "/office:document-styles/office:styles";
    assert_eq!(attr(s, &format!("{named}/style:style[1]"), "style:name"), Some("hdrstyle1"));
    assert_eq!(
        attr(s, &format!("{named}/style:style[1]/style:text-properties"), "style:font-name"),
        Some("Courier New")
    );
    assert_eq!(attr(s, &format!("{named}/style:style[2]"), "style:name"), Some("centerheader"));
    assert_eq!(
        attr(s, &format!("{named}/style:style[2]/style:paragraph-properties"), "fo:text-align"),
        Some("center")
    );
    assert_eq!(attr(s, &format!("{named}/style:style[3]"), "style:name"), Some("footerTab"));

    let stops = format!("{named}/style:style[3]/style:paragraph-properties/style:tab-stops");
    assert_eq!(attr(s, &format!("{stops}/style:tab-stop[1]"), "style:type"), Some("center"));
    assert_eq!(attr(s, &format!("{stops}/style:tab-stop[1]"), "style:position"), Some("3.25in"));
    assert_eq!(attr(s, &format!("{stops}/style:tab-stop[2]"), "style:type"), Some("right"));
    assert_eq!(attr(s, &format!("{stops}/style:tab-stop[2]"), "style:position"), Some("6.5in"));

    let footer = s
        .select("/office:document-styles/office:master-styles/style:master-page/style:footer/text:p")
        .unwrap();
    let span1 = footer.select("text:span[1]").unwrap();
    assert_eq!(span1.attr("text:style-name"), Some("hdrstyle1"));
    assert_eq!(span1.text_content(), "Left footer");
    assert!(footer.select("text:span[2]/text:tab").is_some());
    assert!(footer.select("text:span[3]/text:date").is_some());
    assert!(footer.select("text:span[4]/text:tab").is_some());
    let span5 = footer.select("text:span[5]").unwrap();
    assert_eq!(span5.text_content(), "Page");
    assert!(span5.select("text:s").is_some());
    assert!(footer.select("text:span[6]/text:page-number").is_some());
    let span7 = footer.select("text:span[7]").unwrap();
    assert_eq!(span7.text_content(), "of");
    assert!(span7.select("text:s[2]").is_some());
    assert!(footer.select("text:span[8]/text:page-count").is_some());

    let content = part(&parts, "content.xml");
    let body = content
        .select("/office:document-content/office:body/office:text/text:section")
        .unwrap();
    // SB1, First page, break, Second page, break, Third page
    assert_eq!(body.count("text:p"), 6);
    assert_eq!(attr(body, "text:p[3]", "text:style-name"), Some("PB"));
}

#[test]
fn test_hide_errors() {
    let mut doc = Document::new();
    let settings = doc.settings_mut();
    settings.hide_grammatical_errors = true;
    settings.hide_spelling_errors = true;
    settings.theme_font_lang = Some(Language::new("en-US").with_lang_id(Language::EN_US_ID));
    doc.add_section(SectionProperties::default())
        .add_text("Here is a paragraph with some speling errorz", None, None);

    let parts = emit(&doc, &StyleRegistry::new());
    let s = part(&parts, "styles.xml");
    let path = "/office:document-styles/office:styles/style:default-style/style:text-properties";
    assert_eq!(attr(s, path, "fo:language"), Some("zxx"));
    assert_eq!(attr(s, path, "style:language-asian"), Some("zxx"));
    assert_eq!(attr(s, path, "style:language-complex"), Some("zxx"));
    assert_eq!(attr(s, path, "fo:country"), Some("none"));
    assert_eq!(attr(s, path, "style:country-asian"), Some("none"));
    assert_eq!(attr(s, path, "style:country-complex"), Some("none"));
}

#[test]
fn test_visible_proofing_uses_theme_language() {
    let mut doc = Document::new();
    doc.settings_mut().theme_font_lang = Some(Language::new("de-DE"));
    doc.add_section(SectionProperties::default());

    let parts = emit(&doc, &StyleRegistry::new());
    let s = part(&parts, "styles.xml");
    let path = "office:styles/style:default-style/style:text-properties";
    assert_eq!(attr(s, path, "fo:language"), Some("de"));
    assert_eq!(attr(s, path, "fo:country"), Some("DE"));
}

#[test]
fn test_multiple_sections() {
    let mut doc = Document::new();
    doc.add_section(SectionProperties {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Portrait,
        ..SectionProperties::default()
    })
    .add_text(
        "This section uses Letter paper in portrait orientation.",
        None,
        None,
    );

    let section = doc.add_section(SectionProperties {
        paper_size: PaperSize::A4,
        orientation: Orientation::Landscape,
        page_numbering_start: Some(9),
        ..SectionProperties::default()
    });
    section.add_header().add_field(FieldKind::Page);
    section.add_text(
        "This section uses A4 paper in landscape orientation. It starts on page 9.",
        None,
        None,
    );

    let parts = emit(&doc, &StyleRegistry::new());
    let c = part(&parts, "content.xml");
    let auto = "/office:document-content/office:automatic-styles";
    let text = "/office:document-content/office:body/office:text";

    assert_eq!(attr(c, &format!("{auto}/style:style[2]"), "style:name"), Some("SB1"));
    assert_eq!(
        attr(c, &format!("{auto}/style:style[2]"), "style:master-page-name"),
        Some("Standard1")
    );
    assert_eq!(
        attr(c, &format!("{auto}/style:style[2]/style:text-properties"), "text:display"),
        Some("none")
    );
    assert_eq!(attr(c, &format!("{auto}/style:style[3]"), "style:name"), Some("SB2"));
    assert_eq!(
        attr(c, &format!("{auto}/style:style[3]"), "style:master-page-name"),
        Some("Standard2")
    );
    assert_eq!(
        attr(c, &format!("{auto}/style:style[3]/style:paragraph-properties"), "style:page-number"),
        Some("9")
    );
    assert_eq!(
        attr(c, &format!("{auto}/style:style[3]/style:text-properties"), "text:display"),
        Some("none")
    );

    assert_eq!(
        attr(c, &format!("{text}/text:section[1]/text:p[1]"), "text:style-name"),
        Some("SB1")
    );
    assert_eq!(
        attr(c, &format!("{text}/text:section[2]/text:p[1]"), "text:style-name"),
        Some("SB2")
    );

    let s = part(&parts, "styles.xml");
    let auto = "/office:document-styles/office:automatic-styles";
    assert_eq!(attr(s, &format!("{auto}/style:page-layout[1]"), "style:name"), Some("Mpm1"));
    let props = format!("{auto}/style:page-layout[1]/style:page-layout-properties");
    assert_eq!(attr(s, &props, "fo:page-width"), Some("8.5in"));
    assert_eq!(attr(s, &props, "fo:page-height"), Some("11in"));
    assert_eq!(attr(s, &props, "style:print-orientation"), Some("portrait"));

    assert_eq!(attr(s, &format!("{auto}/style:page-layout[2]"), "style:name"), Some("Mpm2"));
    let props = format!("{auto}/style:page-layout[2]/style:page-layout-properties");
    assert_eq!(attr(s, &props, "fo:page-width"), Some("29.7cm"));
    assert_eq!(attr(s, &props, "fo:page-height"), Some("21cm"));
    assert_eq!(attr(s, &props, "style:print-orientation"), Some("landscape"));

    let masters = "/office:document-styles/office:master-styles";
    assert_eq!(
        attr(s, &format!("{masters}/style:master-page[1]"), "style:name"),
        Some("Standard1")
    );
    assert_eq!(
        attr(s, &format!("{masters}/style:master-page[1]"), "style:page-layout-name"),
        Some("Mpm1")
    );
    assert_eq!(
        attr(s, &format!("{masters}/style:master-page[2]"), "style:name"),
        Some("Standard2")
    );
    assert_eq!(
        attr(s, &format!("{masters}/style:master-page[2]"), "style:page-layout-name"),
        Some("Mpm2")
    );
    assert!(
        s.select(&format!("{masters}/style:master-page[2]/style:header/text:p/text:page-number"))
            .is_some()
    );
}

#[test]
fn test_font_faces_declared_in_both_parts() {
    let mut styles = StyleRegistry::new();
    styles.add_font_style("mono", FontStyle::new().with_name("Courier New"));
    let mut doc = Document::new();
    doc.add_section(SectionProperties::default())
        .add_text("code", Some("mono"), None);

    let parts = emit(&doc, &styles);
    for name in ["content.xml", "styles.xml"] {
        let root = part(&parts, name);
        assert_eq!(
            attr(root, "office:font-face-decls/style:font-face", "svg:font-family"),
            Some("'Courier New'")
        );
    }
}

#[test]
fn test_serialized_content_is_well_formed() {
    let mut doc = Document::new();
    doc.add_section(SectionProperties::default())
        .add_text("Fish & chips", None, None);

    let parts = emit(&doc, &StyleRegistry::new());
    let xml = part(&parts, "content.xml").to_xml_string().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    assert!(xml.contains("Fish &amp; chips"));
    assert!(xml.contains("xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\""));
}

#[test]
fn test_control_characters_never_reach_output() {
    let mut doc = Document::new();
    let section = doc.add_section(SectionProperties::default());
    section.add_text("a\u{1}b", None, None);
    section.add_footer().add_text("page\u{8} footer", None, None);

    let parts = emit(&doc, &StyleRegistry::new());
    let content = part(&parts, "content.xml");
    assert_eq!(
        content
            .select("office:body/office:text/text:section/text:p[2]")
            .map(|p| p.text_content()),
        Some("ab".to_string())
    );
    for name in ["content.xml", "styles.xml"] {
        let xml = part(&parts, name).to_xml_string().unwrap();
        assert!(!xml.contains('\u{1}'), "{name} kept U+0001");
        assert!(!xml.contains('\u{8}'), "{name} kept U+0008");
    }
}
