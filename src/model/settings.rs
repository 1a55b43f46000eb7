//! Document-wide settings: proofing flags and theme language.

/// Theme font language selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Language {
    /// BCP 47 tag for Latin text, e.g. `"en-US"`.
    pub latin: Option<String>,
    pub east_asia: Option<String>,
    /// Tag for complex-script (bidirectional) text.
    pub bidirectional: Option<String>,
    /// Windows language id, e.g. 1033 for en-US.
    pub lang_id: Option<u32>,
}

impl Language {
    pub const EN_US_ID: u32 = 1033;
    pub const EN_GB_ID: u32 = 2057;
    pub const DE_DE_ID: u32 = 1031;
    pub const FR_FR_ID: u32 = 1036;
    pub const ES_ES_ID: u32 = 3082;
    pub const IT_IT_ID: u32 = 1040;
    pub const JA_JP_ID: u32 = 1041;
    pub const ZH_CN_ID: u32 = 2052;
    pub const AR_SA_ID: u32 = 1025;
    pub const HE_IL_ID: u32 = 1037;

    const KNOWN_IDS: [(u32, &'static str); 10] = [
        (Self::EN_US_ID, "en-US"),
        (Self::EN_GB_ID, "en-GB"),
        (Self::DE_DE_ID, "de-DE"),
        (Self::FR_FR_ID, "fr-FR"),
        (Self::ES_ES_ID, "es-ES"),
        (Self::IT_IT_ID, "it-IT"),
        (Self::JA_JP_ID, "ja-JP"),
        (Self::ZH_CN_ID, "zh-CN"),
        (Self::AR_SA_ID, "ar-SA"),
        (Self::HE_IL_ID, "he-IL"),
    ];

    pub fn new(latin: impl Into<String>) -> Self {
        Self {
            latin: Some(latin.into()),
            ..Self::default()
        }
    }

    pub fn with_east_asia(mut self, tag: impl Into<String>) -> Self {
        self.east_asia = Some(tag.into());
        self
    }

    pub fn with_bidirectional(mut self, tag: impl Into<String>) -> Self {
        self.bidirectional = Some(tag.into());
        self
    }

    pub fn with_lang_id(mut self, id: u32) -> Self {
        self.lang_id = Some(id);
        self
    }

    /// Latin tag, falling back to the tag of a known language id.
    pub fn latin_tag(&self) -> Option<&str> {
        self.latin.as_deref().or_else(|| {
            let id = self.lang_id?;
            Self::KNOWN_IDS
                .iter()
                .find(|(known, _)| *known == id)
                .map(|(_, tag)| *tag)
        })
    }
}

/// Split a language tag into `(language, country)`.
///
/// The country is the last subtag when it is a two-letter region or a
/// three-digit area code: `"en-US"` gives `("en", Some("US"))`.
pub fn split_language_tag(tag: &str) -> (&str, Option<&str>) {
    let mut parts = tag.split(['-', '_']);
    let language = parts.next().unwrap_or(tag);
    let country = parts.last().filter(|region| {
        (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
            || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()))
    });
    (language, country)
}

/// Proofing and language settings for the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub hide_spelling_errors: bool,
    pub hide_grammatical_errors: bool,
    pub theme_font_lang: Option<Language>,
}

impl Settings {
    /// True when either kind of proofing mark is suppressed.
    pub fn proofing_hidden(&self) -> bool {
        self.hide_spelling_errors || self.hide_grammatical_errors
    }
}
