//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible, so every style
//! the dashboard uses is built at compile time and referenced directly from
//! the widget functions.
//!
//! Readout values use the ISO-8859-1 fonts because they contain the degree
//! sign (`°`), which the ASCII fonts lack.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_6X10,
        iso_8859_1::{FONT_6X13_BOLD, FONT_7X14_BOLD},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{BORDER_GRAY, PHASE_SLATE, PURPLE, SLATE, VALUE_BLUE, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Header title, indicator labels, stability value.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Readout labels and values.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Header title (`ProFont` 14pt, white on slate).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Section titles ("Realtime Parameters", ...).
pub const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BORDER_GRAY);

/// Readout labels.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, SLATE);

/// Numeric and text readout values.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X13_BOLD, VALUE_BLUE);

/// Gait phase value.
pub const PHASE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X13_BOLD, PHASE_SLATE);

/// Stability status value.
pub const STABILITY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X14_BOLD, PURPLE);
