//! Page geometry and tab-stop arithmetic.
//!
//! Everything here is a pure function over twip [`Length`]s. Emitters call
//! into this module to derive per-section geometry; nothing here knows about
//! either target schema.

mod paper;
mod units;

pub use paper::{Orientation, PaperSize};
pub use units::{Length, MeasureUnit, TWIPS_PER_INCH, TWIPS_PER_POINT};

use crate::error::{Error, Result};
use crate::model::SectionProperties;

/// Effective page size for a paper size and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
    /// Unit the paper size is defined in; emitters write geometry in it.
    pub unit: MeasureUnit,
}

/// Page margins after applying the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

/// Page size for `paper` in `orientation`. Landscape swaps width and height.
pub fn page_dimensions(paper: PaperSize, orientation: Orientation) -> PageDimensions {
    let (w, h) = paper.portrait_size();
    let (width, height) = match orientation {
        Orientation::Portrait => (w, h),
        Orientation::Landscape => (h, w),
    };
    PageDimensions {
        width,
        height,
        unit: paper.native_unit(),
    }
}

/// Margins a section actually lays out with. The gutter sits on the left.
pub fn effective_margins(props: &SectionProperties) -> Margins {
    Margins {
        top: props.margin_top,
        bottom: props.margin_bottom,
        left: props.margin_left + props.gutter,
        right: props.margin_right,
    }
}

/// Width between the effective left and right margins.
///
/// This is the container width callers pass to [`tab_position`] when placing
/// tabs relative to a header, footer or body line.
pub fn content_width(props: &SectionProperties) -> Length {
    let page = page_dimensions(props.paper_size, props.orientation);
    let margins = effective_margins(props);
    page.width - margins.left - margins.right
}

/// How a caller asks for a tab stop position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPosition {
    /// A fixed distance from the start of the line.
    Absolute(Length),
    /// A fraction of the container width, e.g. 1/2 for centred.
    Fraction { numerator: i64, denominator: i64 },
}

impl TabPosition {
    pub const CENTER: TabPosition = TabPosition::Fraction {
        numerator: 1,
        denominator: 2,
    };
    pub const END: TabPosition = TabPosition::Fraction {
        numerator: 1,
        denominator: 1,
    };
}

/// Resolve a tab position against an already computed container width.
///
/// Fractions truncate toward zero. A zero denominator, a result outside the
/// twip range or a negative result is rejected.
pub fn tab_position(position: TabPosition, container_width: Length) -> Result<Length> {
    let resolved = match position {
        TabPosition::Absolute(length) => length,
        TabPosition::Fraction {
            numerator,
            denominator,
        } => {
            let invalid = || Error::InvalidTabPosition(format!("{numerator}/{denominator}"));
            if denominator == 0 {
                return Err(invalid());
            }
            let twips =
                container_width.as_twips() as i128 * numerator as i128 / denominator as i128;
            Length::twips(i64::try_from(twips).map_err(|_| invalid())?)
        }
    };
    if resolved.is_negative() {
        return Err(Error::InvalidTabPosition(resolved.to_string()));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letter_portrait() {
        let dims = page_dimensions(PaperSize::Letter, Orientation::Portrait);
        assert_eq!(dims.width.format(dims.unit), "8.5in");
        assert_eq!(dims.height.format(dims.unit), "11in");
    }

    #[test]
    fn test_a4_landscape() {
        let dims = page_dimensions(PaperSize::A4, Orientation::Landscape);
        assert_eq!(dims.width.format(dims.unit), "29.7cm");
        assert_eq!(dims.height.format(dims.unit), "21cm");
    }

    #[test]
    fn test_content_width_letter() {
        let props = SectionProperties {
            paper_size: PaperSize::Letter,
            ..SectionProperties::default()
        };
        assert_eq!(content_width(&props), Length::twips(9360));
    }

    #[test]
    fn test_gutter_widens_left_margin() {
        let props = SectionProperties {
            paper_size: PaperSize::Letter,
            gutter: Length::twips(360),
            ..SectionProperties::default()
        };
        let margins = effective_margins(&props);
        assert_eq!(margins.left, Length::twips(1800));
        assert_eq!(margins.right, Length::twips(1440));
        assert_eq!(content_width(&props), Length::twips(9000));
    }

    #[test]
    fn test_footer_tab_positions() {
        let width = Length::twips(9360);
        let center = tab_position(TabPosition::CENTER, width).unwrap();
        let right = tab_position(TabPosition::END, width).unwrap();
        assert_eq!(center.format(MeasureUnit::Inch), "3.25in");
        assert_eq!(right.format(MeasureUnit::Inch), "6.5in");
    }

    #[test]
    fn test_invalid_tab_positions() {
        let width = Length::twips(9360);
        let zero = TabPosition::Fraction {
            numerator: 1,
            denominator: 0,
        };
        assert!(matches!(
            tab_position(zero, width),
            Err(Error::InvalidTabPosition(_))
        ));
        assert!(matches!(
            tab_position(TabPosition::Absolute(Length::twips(-1)), width),
            Err(Error::InvalidTabPosition(_))
        ));
    }

    #[test]
    fn test_wide_fractions_do_not_overflow() {
        let width = Length::twips(9360);
        let whole = TabPosition::Fraction {
            numerator: i64::MAX,
            denominator: i64::MAX,
        };
        assert_eq!(tab_position(whole, width).unwrap(), width);

        let huge = TabPosition::Fraction {
            numerator: i64::MAX,
            denominator: 1,
        };
        assert!(matches!(
            tab_position(huge, width),
            Err(Error::InvalidTabPosition(_))
        ));

        let flipped = TabPosition::Fraction {
            numerator: i64::MIN,
            denominator: i64::MIN,
        };
        assert_eq!(tab_position(flipped, width).unwrap(), width);
    }

    proptest! {
        #[test]
        fn prop_orientation_swaps_dimensions(index in 0usize..PaperSize::ALL.len()) {
            let paper = PaperSize::ALL[index];
            let portrait = page_dimensions(paper, Orientation::Portrait);
            let landscape = page_dimensions(paper, Orientation::Landscape);
            prop_assert_eq!(portrait.width, landscape.height);
            prop_assert_eq!(portrait.height, landscape.width);
            prop_assert_eq!(portrait.unit, landscape.unit);
            prop_assert!(portrait.width < portrait.height);
        }
    }
}
