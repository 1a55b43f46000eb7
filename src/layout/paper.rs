//! Paper sizes and page orientation.

use std::fmt;
use std::str::FromStr;

use super::units::{Length, MeasureUnit};
use crate::error::{Error, Result};

/// Known paper sizes.
///
/// Each size remembers the unit it is defined in, so a Letter page is written
/// as `8.5in` and an A4 page as `21cm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    B5,
    Folio,
    Legal,
    Letter,
}

impl PaperSize {
    pub const ALL: [PaperSize; 7] = [
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::B5,
        PaperSize::Folio,
        PaperSize::Legal,
        PaperSize::Letter,
    ];

    /// Portrait width and height in hundredths of the native unit.
    const fn table(self) -> (i64, i64, MeasureUnit) {
        match self {
            PaperSize::A3 => (2970, 4200, MeasureUnit::Centimetre),
            PaperSize::A4 => (2100, 2970, MeasureUnit::Centimetre),
            PaperSize::A5 => (1480, 2100, MeasureUnit::Centimetre),
            PaperSize::B5 => (1760, 2500, MeasureUnit::Centimetre),
            PaperSize::Folio => (850, 1300, MeasureUnit::Inch),
            PaperSize::Legal => (850, 1400, MeasureUnit::Inch),
            PaperSize::Letter => (850, 1100, MeasureUnit::Inch),
        }
    }

    /// The unit this size is defined in.
    pub const fn native_unit(self) -> MeasureUnit {
        self.table().2
    }

    /// Portrait `(width, height)`.
    pub const fn portrait_size(self) -> (Length, Length) {
        let (w, h, unit) = self.table();
        (Length::from_hundredths(w, unit), Length::from_hundredths(h, unit))
    }

    pub const fn name(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::B5 => "B5",
            PaperSize::Folio => "Folio",
            PaperSize::Legal => "Legal",
            PaperSize::Letter => "Letter",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = Error;

    /// Parse a paper size name. Matching ignores ASCII case; anything outside
    /// the table is rejected.
    fn from_str(s: &str) -> Result<Self> {
        PaperSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidPaperSize(s.to_string()))
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [Orientation::Portrait, Orientation::Landscape]
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidOrientation(s.to_string()))
    }
}
