//! Integer lengths and their emission-time formatting.
//!
//! Every length in the model is a whole number of twips (1/20 pt, 1/1440 in).
//! Converting to inches, centimetres or points happens only when a value is
//! written into a target document, and always goes through [`Length::format`].

use std::fmt;
use std::ops::{Add, Sub};

/// Twips per inch.
pub const TWIPS_PER_INCH: i64 = 1440;

/// Twips per point.
pub const TWIPS_PER_POINT: i64 = 20;

/// A length in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(i64);

impl Length {
    pub const ZERO: Length = Length(0);

    /// A length of `n` twips.
    pub const fn twips(n: i64) -> Self {
        Length(n)
    }

    /// A length of `n` whole points.
    pub const fn points(n: i64) -> Self {
        Length(n.saturating_mul(TWIPS_PER_POINT))
    }

    /// A length of `n` whole inches.
    pub const fn inches(n: i64) -> Self {
        Length(n.saturating_mul(TWIPS_PER_INCH))
    }

    /// A length given in hundredths of `unit`, rounded to the nearest twip.
    ///
    /// `Length::from_hundredths(850, MeasureUnit::Inch)` is 8.5in.
    pub const fn from_hundredths(hundredths: i64, unit: MeasureUnit) -> Self {
        let (num, den) = unit.twips_ratio();
        Length(saturate(div_round(
            hundredths as i128 * num as i128,
            den as i128 * 100,
        )))
    }

    /// Raw twip count.
    pub const fn as_twips(self) -> i64 {
        self.0
    }

    /// Value in half-points, as used for DOCX font sizes.
    pub const fn as_half_points(self) -> i64 {
        saturate(div_round(self.0 as i128, (TWIPS_PER_POINT / 2) as i128))
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Difference clamped at zero.
    pub fn saturating_sub(self, other: Length) -> Length {
        Length(self.0.saturating_sub(other.0).max(0))
    }

    /// Format in `unit`, rounded to two decimals with trailing zeros trimmed.
    ///
    /// ```
    /// use quire::layout::{Length, MeasureUnit};
    ///
    /// assert_eq!(Length::twips(4680).format(MeasureUnit::Inch), "3.25in");
    /// assert_eq!(Length::twips(16838).format(MeasureUnit::Centimetre), "29.7cm");
    /// ```
    pub fn format(self, unit: MeasureUnit) -> String {
        let (num, den) = unit.twips_ratio();
        // twips -> hundredths of unit
        let hundredths = div_round(self.0 as i128 * den as i128 * 100, num as i128);
        format!("{}{}", format_hundredths(hundredths), unit.suffix())
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}tw", self.0)
    }
}

/// Measurement unit used when a length is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureUnit {
    Inch,
    Centimetre,
    Point,
}

impl MeasureUnit {
    /// Unit suffix as written in ODF attribute values.
    pub const fn suffix(self) -> &'static str {
        match self {
            MeasureUnit::Inch => "in",
            MeasureUnit::Centimetre => "cm",
            MeasureUnit::Point => "pt",
        }
    }

    /// Twips per unit as an exact fraction `(num, den)`.
    const fn twips_ratio(self) -> (i64, i64) {
        match self {
            MeasureUnit::Inch => (TWIPS_PER_INCH, 1),
            // 2.54cm per inch
            MeasureUnit::Centimetre => (TWIPS_PER_INCH * 100, 254),
            MeasureUnit::Point => (TWIPS_PER_POINT, 1),
        }
    }
}

/// Integer division rounding half away from zero. `den` must be positive.
///
/// Works in i128 so twip products cannot overflow.
const fn div_round(num: i128, den: i128) -> i128 {
    if num >= 0 {
        (num + den / 2) / den
    } else {
        -((-num + den / 2) / den)
    }
}

/// Clamp a wide intermediate back into the twip range.
const fn saturate(n: i128) -> i64 {
    if n > i64::MAX as i128 {
        i64::MAX
    } else if n < i64::MIN as i128 {
        i64::MIN
    } else {
        n as i64
    }
}

fn format_hundredths(hundredths: i128) -> String {
    let sign = if hundredths < 0 { "-" } else { "" };
    let abs = hundredths.abs();
    let (whole, frac) = (abs / 100, abs % 100);
    if frac == 0 {
        format!("{sign}{whole}")
    } else if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}
