//! Named style registry.
//!
//! Styles are registered by name and looked up by name when an emitter
//! meets a reference. Registration order is preserved because both target
//! formats list named styles in the order they were declared.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{FontStyle, ParagraphStyle, Style};

// ============================================================================
// Style Registry
// ============================================================================

/// Registry of named styles shared by every section of a document.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    /// Styles in first-registration order.
    styles: Vec<(String, Style)>,

    /// Name -> index into `styles`.
    index: HashMap<String, usize>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `style` under `name`.
    ///
    /// Registering an existing name replaces its definition but keeps its
    /// original position, so a later definition overrides an earlier one.
    pub fn register(&mut self, name: impl Into<String>, style: impl Into<Style>) {
        let name = name.into();
        let style = style.into();
        match self.index.get(&name) {
            Some(&i) => {
                log::debug!("overriding style {name}");
                self.styles[i].1 = style;
            }
            None => {
                self.index.insert(name.clone(), self.styles.len());
                self.styles.push((name, style));
            }
        }
    }

    pub fn add_font_style(&mut self, name: impl Into<String>, style: FontStyle) {
        self.register(name, style);
    }

    pub fn add_paragraph_style(&mut self, name: impl Into<String>, style: ParagraphStyle) {
        self.register(name, style);
    }

    /// Look up a style by name.
    pub fn resolve(&self, name: &str) -> Result<&Style> {
        self.index
            .get(name)
            .map(|&i| &self.styles[i].1)
            .ok_or_else(|| Error::StyleNotFound(name.to_string()))
    }

    /// Look up a font style, rejecting paragraph styles.
    pub fn font(&self, name: &str) -> Result<&FontStyle> {
        match self.resolve(name)? {
            Style::Font(style) => Ok(style),
            other => Err(mismatch(name, other, "font")),
        }
    }

    /// Look up a paragraph style, rejecting font styles.
    pub fn paragraph(&self, name: &str) -> Result<&ParagraphStyle> {
        match self.resolve(name)? {
            Style::Paragraph(style) => Ok(style),
            other => Err(mismatch(name, other, "paragraph")),
        }
    }

    /// Font style with its base style's values filled in.
    ///
    /// Only one level of inheritance is applied; the base's own base is not
    /// followed.
    pub fn effective_font(&self, name: &str) -> Result<FontStyle> {
        let mut style = self.font(name)?.clone();
        if let Some(base) = style.based_on.as_deref() {
            let base = self.font(base)?.clone();
            style.inherit(&base);
        }
        Ok(style)
    }

    /// Paragraph style with its base style's values filled in (one level).
    pub fn effective_paragraph(&self, name: &str) -> Result<ParagraphStyle> {
        let mut style = self.paragraph(name)?.clone();
        if let Some(base) = style.based_on.as_deref() {
            let base = self.paragraph(base)?.clone();
            style.inherit(&base);
        }
        Ok(style)
    }

    /// Styles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn mismatch(name: &str, found: &Style, expected: &'static str) -> Error {
    log::debug!("style {name} is a {} style", found.kind_name());
    Error::StyleKindMismatch {
        name: name.to_string(),
        expected,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Length;
    use crate::model::{Alignment, Tab, TabAlignment};

    #[test]
    fn test_resolve_missing_style() {
        let registry = StyleRegistry::new();
        assert!(matches!(
            registry.resolve("nope"),
            Err(Error::StyleNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_last_registration_wins_in_place() {
        let mut registry = StyleRegistry::new();
        registry.add_font_style("a", FontStyle::new().with_name("Arial"));
        registry.add_font_style("b", FontStyle::new());
        registry.add_font_style("a", FontStyle::new().with_name("Courier New"));

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.font("a").unwrap().name.as_deref(), Some("Courier New"));
    }

    #[test]
    fn test_kind_mismatch() {
        let mut registry = StyleRegistry::new();
        registry.add_paragraph_style("p", ParagraphStyle::new());
        assert!(matches!(
            registry.font("p"),
            Err(Error::StyleKindMismatch { expected: "font", .. })
        ));
    }

    #[test]
    fn test_effective_follows_one_level() {
        let mut registry = StyleRegistry::new();
        registry.add_font_style("root", FontStyle::new().with_color("FF0000"));
        registry.add_font_style(
            "base",
            FontStyle::new().with_name("Arial").based_on("root"),
        );
        registry.add_font_style("child", FontStyle::new().with_bold(true).based_on("base"));

        let effective = registry.effective_font("child").unwrap();
        assert_eq!(effective.name.as_deref(), Some("Arial"));
        assert_eq!(effective.bold, Some(true));
        assert_eq!(effective.color, None);
    }

    #[test]
    fn test_effective_paragraph_inherits_tabs() {
        let mut registry = StyleRegistry::new();
        registry.add_paragraph_style(
            "tabs",
            ParagraphStyle::new().with_tab(Tab::new(TabAlignment::Center, Length::twips(4680))),
        );
        registry.add_paragraph_style(
            "centered",
            ParagraphStyle::new()
                .with_alignment(Alignment::Center)
                .based_on("tabs"),
        );

        let effective = registry.effective_paragraph("centered").unwrap();
        assert_eq!(effective.alignment, Some(Alignment::Center));
        assert_eq!(effective.tabs.len(), 1);
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let mut registry = StyleRegistry::new();
        registry.add_font_style("child", FontStyle::new().based_on("ghost"));
        assert!(matches!(
            registry.effective_font("child"),
            Err(Error::StyleNotFound(name)) if name == "ghost"
        ));
    }
}
