//! Header bar and section titles.
//!
//! All positions are `const Point`/`const Size` computed from the layout
//! constants, and both pieces are static: they are drawn once on the first
//! frame and never touched again.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::{BORDER_GRAY, SLATE},
    config::{HEADER_HEIGHT, LOWER_TITLE_Y, MARGIN, PARAMS_TITLE_Y, READOUT_BOTTOM, SCREEN_WIDTH, STABILITY_LEFT},
    styles::{CENTERED, LEFT_ALIGNED, SECTION_STYLE, TITLE_STYLE},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Header text.
pub const HEADER_TITLE: &str = "Gait Analysis Dashboard";

/// Position of the title (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 18);

/// Top-left corner of header rectangle.
const HEADER_RECT_POS: Point = Point::new(0, 0);

/// Size of header rectangle (full width).
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

/// Slate fill for the header background.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE);

// =============================================================================
// Section Titles
// =============================================================================

pub const PARAMS_TITLE: &str = "Realtime Parameters";
pub const INDICATORS_TITLE: &str = "Foot Pressure Indicators";
pub const STABILITY_TITLE: &str = "Stability Status";

const PARAMS_TITLE_POS: Point = Point::new(MARGIN as i32 + 2, PARAMS_TITLE_Y);
const INDICATORS_TITLE_POS: Point = Point::new(MARGIN as i32 + 2, LOWER_TITLE_Y);
const STABILITY_TITLE_POS: Point = Point::new(STABILITY_LEFT as i32 + 2, LOWER_TITLE_Y);

/// Rule separating the readout panel from the lower sections.
const SECTION_RULE_START: Point = Point::new(MARGIN as i32, READOUT_BOTTOM as i32 + 2);
const SECTION_RULE_END: Point = Point::new((SCREEN_WIDTH - MARGIN) as i32, READOUT_BOTTOM as i32 + 2);

const SECTION_RULE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BORDER_GRAY, 1);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar with the dashboard title.
pub fn draw_header(display: &mut SimulatorDisplay<Rgb565>) {
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style(HEADER_TITLE, HEADER_TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the three section titles and the rule above the lower sections.
pub fn draw_section_titles(display: &mut SimulatorDisplay<Rgb565>) {
    for (title, pos) in [
        (PARAMS_TITLE, PARAMS_TITLE_POS),
        (INDICATORS_TITLE, INDICATORS_TITLE_POS),
        (STABILITY_TITLE, STABILITY_TITLE_POS),
    ] {
        Text::with_text_style(title, pos, SECTION_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    Line::new(SECTION_RULE_START, SECTION_RULE_END)
        .into_styled(SECTION_RULE_STYLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use profont::PROFONT_14_POINT;

    use super::*;

    #[test]
    fn test_indicator_title_does_not_reach_stability_panel() {
        // FONT_6X10 is 6px per character
        let end = MARGIN + 2 + INDICATORS_TITLE.len() as u32 * 6;
        assert!(end < STABILITY_LEFT, "Section titles should not overlap");
    }

    #[test]
    fn test_header_fits_screen() {
        let width = HEADER_TITLE.len() as u32 * PROFONT_14_POINT.character_size.width;
        assert!(width <= SCREEN_WIDTH, "Header title should fit");
    }
}
