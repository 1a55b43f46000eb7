//! Named style definitions.

use std::fmt;

use crate::error::Result;
use crate::layout::{Length, TabPosition, tab_position};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Alignment rule of a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabAlignment {
    Left,
    Center,
    Right,
}

impl TabAlignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            TabAlignment::Left => "left",
            TabAlignment::Center => "center",
            TabAlignment::Right => "right",
        }
    }
}

impl fmt::Display for TabAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tab stop at an absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tab {
    pub alignment: TabAlignment,
    pub position: Length,
}

impl Tab {
    pub fn new(alignment: TabAlignment, position: Length) -> Self {
        Self {
            alignment,
            position,
        }
    }

    /// Build a tab from a possibly proportional position within
    /// `container_width`.
    pub fn within(
        alignment: TabAlignment,
        position: TabPosition,
        container_width: Length,
    ) -> Result<Self> {
        Ok(Self::new(alignment, tab_position(position, container_width)?))
    }
}

/// Character formatting.
///
/// Unset fields inherit from the base style, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontStyle {
    /// Font family name.
    pub name: Option<String>,
    pub size: Option<Length>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    /// RGB hex colour without `#`, e.g. `"FF0000"`.
    pub color: Option<String>,
    pub based_on: Option<String>,
}

impl FontStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: Length) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn based_on(mut self, base: impl Into<String>) -> Self {
        self.based_on = Some(base.into());
        self
    }

    /// Fill unset fields from `base`.
    pub(crate) fn inherit(&mut self, base: &FontStyle) {
        self.name = self.name.take().or_else(|| base.name.clone());
        self.size = self.size.or(base.size);
        self.bold = self.bold.or(base.bold);
        self.italic = self.italic.or(base.italic);
        self.underline = self.underline.or(base.underline);
        self.color = self.color.take().or_else(|| base.color.clone());
    }
}

/// Paragraph formatting, including tab stops.
///
/// A style that carries only tabs is what callers usually call a tab-stop
/// style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub alignment: Option<Alignment>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    /// Tab stops in declaration order.
    pub tabs: Vec<Tab>,
    pub based_on: Option<String>,
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_spacing(mut self, before: Length, after: Length) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn with_tabs(mut self, tabs: impl IntoIterator<Item = Tab>) -> Self {
        self.tabs.extend(tabs);
        self
    }

    pub fn based_on(mut self, base: impl Into<String>) -> Self {
        self.based_on = Some(base.into());
        self
    }

    /// Fill unset fields from `base`. Tabs are inherited only when this
    /// style declares none.
    pub(crate) fn inherit(&mut self, base: &ParagraphStyle) {
        self.alignment = self.alignment.or(base.alignment);
        self.space_before = self.space_before.or(base.space_before);
        self.space_after = self.space_after.or(base.space_after);
        if self.tabs.is_empty() {
            self.tabs = base.tabs.clone();
        }
    }
}

/// A globally registered, named style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    Font(FontStyle),
    Paragraph(ParagraphStyle),
}

impl Style {
    pub fn based_on(&self) -> Option<&str> {
        match self {
            Style::Font(s) => s.based_on.as_deref(),
            Style::Paragraph(s) => s.based_on.as_deref(),
        }
    }

    pub const fn kind_name(&self) -> &'static str {
        match self {
            Style::Font(_) => "font",
            Style::Paragraph(_) => "paragraph",
        }
    }
}

impl From<FontStyle> for Style {
    fn from(style: FontStyle) -> Self {
        Style::Font(style)
    }
}

impl From<ParagraphStyle> for Style {
    fn from(style: ParagraphStyle) -> Self {
        Style::Paragraph(style)
    }
}
