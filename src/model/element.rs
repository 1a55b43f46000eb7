//! Block and inline elements: paragraphs, text runs, fields and breaks.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// ============================================================================
// Fields
// ============================================================================

/// Kind of dynamically substituted placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Current page number.
    Page,
    /// Total page count.
    NumPages,
    /// Page count of the current section.
    SectionPages,
    Date,
    Time,
    Author,
    Title,
    FileName,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Page,
        FieldKind::NumPages,
        FieldKind::SectionPages,
        FieldKind::Date,
        FieldKind::Time,
        FieldKind::Author,
        FieldKind::Title,
        FieldKind::FileName,
    ];

    /// Upper-case field code, as used in DOCX field instructions.
    pub const fn code(self) -> &'static str {
        match self {
            FieldKind::Page => "PAGE",
            FieldKind::NumPages => "NUMPAGES",
            FieldKind::SectionPages => "SECTIONPAGES",
            FieldKind::Date => "DATE",
            FieldKind::Time => "TIME",
            FieldKind::Author => "AUTHOR",
            FieldKind::Title => "TITLE",
            FieldKind::FileName => "FILENAME",
        }
    }

    /// Text shown until the consuming application updates the field.
    pub const fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Page | FieldKind::NumPages | FieldKind::SectionPages => "1",
            _ => "",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| Error::InvalidField(s.to_string()))
    }
}

/// A field placeholder with an optional character style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub font_style: Option<String>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            font_style: None,
        }
    }

    /// Set the character style the field renders with.
    pub fn set_font_style(&mut self, name: impl Into<String>) -> &mut Self {
        self.font_style = Some(name.into());
        self
    }
}

// ============================================================================
// Inlines
// ============================================================================

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text {
        text: String,
        font_style: Option<String>,
    },
    /// An explicit tab character.
    Tab { font_style: Option<String> },
    Field(Field),
}

impl Inline {
    pub fn font_style(&self) -> Option<&str> {
        match self {
            Inline::Text { font_style, .. } | Inline::Tab { font_style } => font_style.as_deref(),
            Inline::Field(field) => field.font_style.as_deref(),
        }
    }
}

/// Split `text` at tab characters into text and tab inlines sharing one style.
///
/// Empty text pieces are dropped, so `"\t"` yields a single tab.
pub(crate) fn split_tabs(text: &str, font_style: Option<&str>, out: &mut Vec<Inline>) {
    for (i, piece) in text.split('\t').enumerate() {
        if i > 0 {
            out.push(Inline::Tab {
                font_style: font_style.map(str::to_string),
            });
        }
        if !piece.is_empty() {
            out.push(Inline::Text {
                text: piece.to_string(),
                font_style: font_style.map(str::to_string),
            });
        }
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// A paragraph holding a single text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub font_style: Option<String>,
    pub paragraph_style: Option<String>,
}

/// A paragraph built from a sequence of inlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub paragraph_style: Option<String>,
    pub inlines: Vec<Inline>,
}

impl TextRun {
    pub fn new(paragraph_style: Option<&str>) -> Self {
        Self {
            paragraph_style: paragraph_style.map(str::to_string),
            inlines: Vec::new(),
        }
    }

    /// Append text. Tab characters become separate [`Inline::Tab`]s.
    pub fn add_text(&mut self, text: &str, font_style: Option<&str>) -> &mut Self {
        split_tabs(text, font_style, &mut self.inlines);
        self
    }

    pub fn add_tab(&mut self, font_style: Option<&str>) -> &mut Self {
        self.inlines.push(Inline::Tab {
            font_style: font_style.map(str::to_string),
        });
        self
    }

    /// Append a field and return it so a style can be attached.
    pub fn add_field(&mut self, kind: FieldKind) -> &mut Field {
        self.inlines.push(Inline::Field(Field::new(kind)));
        match self.inlines.last_mut() {
            Some(Inline::Field(field)) => field,
            _ => unreachable!("field was just pushed"),
        }
    }
}

/// Block-level content of a section, header or footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    TextRun(TextRun),
    /// A paragraph containing only a field.
    Field(Field),
    PageBreak,
}

impl Block {
    pub fn paragraph_style(&self) -> Option<&str> {
        match self {
            Block::Paragraph(p) => p.paragraph_style.as_deref(),
            Block::TextRun(run) => run.paragraph_style.as_deref(),
            Block::Field(_) | Block::PageBreak => None,
        }
    }

    /// Inline content of the block in document order.
    pub fn inlines(&self) -> Cow<'_, [Inline]> {
        match self {
            Block::Paragraph(p) => {
                let mut out = Vec::new();
                split_tabs(&p.text, p.font_style.as_deref(), &mut out);
                Cow::Owned(out)
            }
            Block::TextRun(run) => Cow::Borrowed(&run.inlines),
            Block::Field(field) => Cow::Owned(vec![Inline::Field(field.clone())]),
            Block::PageBreak => Cow::Borrowed(&[]),
        }
    }
}

// ============================================================================
// Containers
// ============================================================================

/// Shared builder operations for anything that holds blocks.
pub trait Container {
    fn blocks(&self) -> &[Block];

    fn blocks_mut(&mut self) -> &mut Vec<Block>;

    /// Add a single-span paragraph.
    fn add_text(&mut self, text: &str, font_style: Option<&str>, paragraph_style: Option<&str>) {
        self.blocks_mut().push(Block::Paragraph(Paragraph {
            text: text.to_string(),
            font_style: font_style.map(str::to_string),
            paragraph_style: paragraph_style.map(str::to_string),
        }));
    }

    /// Add an empty text run and return it for population.
    fn add_text_run(&mut self, paragraph_style: Option<&str>) -> &mut TextRun {
        let blocks = self.blocks_mut();
        blocks.push(Block::TextRun(TextRun::new(paragraph_style)));
        match blocks.last_mut() {
            Some(Block::TextRun(run)) => run,
            _ => unreachable!("text run was just pushed"),
        }
    }

    /// Add a paragraph holding only a field.
    fn add_field(&mut self, kind: FieldKind) -> &mut Field {
        let blocks = self.blocks_mut();
        blocks.push(Block::Field(Field::new(kind)));
        match blocks.last_mut() {
            Some(Block::Field(field)) => field,
            _ => unreachable!("field was just pushed"),
        }
    }

    fn add_page_break(&mut self) {
        self.blocks_mut().push(Block::PageBreak);
    }
}
