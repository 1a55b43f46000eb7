//! Sections, their page properties, and headers/footers.

use crate::layout::{Length, Orientation, PaperSize};

use super::element::{Block, Container};

/// Page setup for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProperties {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margin_top: Length,
    pub margin_bottom: Length,
    pub margin_left: Length,
    pub margin_right: Length,
    /// Binding gutter, added to the left margin.
    pub gutter: Length,
    /// Distance from the top edge of the page to the header.
    pub header_height: Length,
    /// Distance from the bottom edge of the page to the footer.
    pub footer_height: Length,
    /// Restart page numbering at this value.
    pub page_numbering_start: Option<u32>,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
            margin_top: Length::inches(1),
            margin_bottom: Length::inches(1),
            margin_left: Length::inches(1),
            margin_right: Length::inches(1),
            gutter: Length::ZERO,
            header_height: Length::twips(720),
            footer_height: Length::twips(720),
            page_numbering_start: None,
        }
    }
}

/// Whether a [`HeaderFooter`] sits at the top or bottom of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

/// Page header or footer content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFooter {
    kind: HeaderFooterKind,
    blocks: Vec<Block>,
}

impl HeaderFooter {
    pub fn new(kind: HeaderFooterKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
        }
    }

    pub fn kind(&self) -> HeaderFooterKind {
        self.kind
    }
}

impl Container for HeaderFooter {
    fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }
}

/// A document division with its own page geometry and header/footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    properties: SectionProperties,
    blocks: Vec<Block>,
    header: Option<HeaderFooter>,
    footer: Option<HeaderFooter>,
}

impl Section {
    pub fn new(properties: SectionProperties) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    pub fn properties(&self) -> &SectionProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut SectionProperties {
        &mut self.properties
    }

    /// Attach a header and return it for population.
    ///
    /// A section has at most one header. Calling this again replaces the
    /// existing header and its content (last write wins).
    pub fn add_header(&mut self) -> &mut HeaderFooter {
        if self.header.is_some() {
            log::warn!("replacing existing section header");
        }
        self.header.insert(HeaderFooter::new(HeaderFooterKind::Header))
    }

    /// Attach a footer and return it for population.
    ///
    /// Like [`Section::add_header`], a second call replaces the first footer.
    pub fn add_footer(&mut self) -> &mut HeaderFooter {
        if self.footer.is_some() {
            log::warn!("replacing existing section footer");
        }
        self.footer.insert(HeaderFooter::new(HeaderFooterKind::Footer))
    }

    pub fn header(&self) -> Option<&HeaderFooter> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&HeaderFooter> {
        self.footer.as_ref()
    }

    /// Body, header and footer blocks, in that order.
    pub fn all_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .chain(self.header.iter().flat_map(|h| h.blocks.iter()))
            .chain(self.footer.iter().flat_map(|f| f.blocks.iter()))
    }
}

impl Container for Section {
    fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }
}
