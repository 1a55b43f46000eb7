use super::element::Block;
use super::section::{Section, SectionProperties};
use super::settings::Settings;

/// Root of the document model: ordered sections plus settings.
///
/// A `Document` is pure data. It is built up incrementally and then handed,
/// read-only, to one or more emitters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
    settings: Settings,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section and return it for population.
    pub fn add_section(&mut self, properties: SectionProperties) -> &mut Section {
        self.sections.push(Section::new(properties));
        let index = self.sections.len() - 1;
        &mut self.sections[index]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Every block in the document, section by section.
    pub fn all_blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|section| section.all_blocks())
    }
}
