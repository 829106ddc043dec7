//! Foot pressure indicators and the stability status box.
//!
//! Each indicator is a square that is green while its zone is loaded above
//! the pressure threshold and gray otherwise. There are exactly two visual
//! states, no fades.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::{ACTIVE_GREEN, BORDER_GRAY, INACTIVE_GRAY, WHITE},
    config::{
        INDICATOR_LEFT, INDICATOR_PITCH, INDICATOR_SIZE, INDICATOR_TOP, MARGIN, SCREEN_WIDTH, STABILITY_CENTER_X,
        STABILITY_LEFT,
    },
    readouts::PressureIndicators,
    styles::{CENTERED, LABEL_STYLE, STABILITY_STYLE},
    widgets::primitives::{draw_panel, fit_text},
};

/// Indicator captions, left to right.
pub const INDICATOR_LABELS: [&str; 3] = ["Heel", "MTH", "Toe"];

/// Stability panel geometry.
const STABILITY_WIDTH: u32 = SCREEN_WIDTH - MARGIN - STABILITY_LEFT;
const STABILITY_HEIGHT: u32 = INDICATOR_SIZE + 12;
const STABILITY_VALUE_POS: Point = Point::new(STABILITY_CENTER_X, (INDICATOR_TOP + INDICATOR_SIZE / 2 + 5) as i32);

/// `FONT_7X14_BOLD` characters that fit inside the stability panel.
const STABILITY_MAX_CHARS: usize = ((STABILITY_WIDTH - 8) / 7) as usize;

/// Fill color for an indicator state.
#[inline]
pub const fn indicator_color(active: bool) -> Rgb565 { if active { ACTIVE_GREEN } else { INACTIVE_GRAY } }

/// Left edge of indicator `index`.
#[inline]
const fn indicator_left(index: usize) -> u32 { INDICATOR_LEFT + index as u32 * INDICATOR_PITCH }

/// Draw the captions under the three indicators.
pub fn draw_indicator_labels(display: &mut SimulatorDisplay<Rgb565>) {
    for (index, label) in INDICATOR_LABELS.iter().enumerate() {
        let center_x = (indicator_left(index) + INDICATOR_SIZE / 2) as i32;
        let baseline = (INDICATOR_TOP + INDICATOR_SIZE + 10) as i32;
        Text::with_text_style(label, Point::new(center_x, baseline), LABEL_STYLE, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Paint the three indicator boxes in their current state.
pub fn draw_pressure_indicators(display: &mut SimulatorDisplay<Rgb565>, indicators: PressureIndicators) {
    let states = [indicators.heel, indicators.mth, indicators.toe];
    for (index, active) in states.into_iter().enumerate() {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(indicator_color(active))
            .stroke_color(BORDER_GRAY)
            .stroke_width(1)
            .build();
        Rectangle::new(
            Point::new(indicator_left(index) as i32, INDICATOR_TOP as i32),
            Size::new(INDICATOR_SIZE, INDICATOR_SIZE),
        )
        .into_styled(style)
        .draw(display)
        .ok();
    }
}

/// Erase the stability panel and draw `status` centered in it.
pub fn draw_stability(display: &mut SimulatorDisplay<Rgb565>, status: &str) {
    draw_panel(display, STABILITY_LEFT, INDICATOR_TOP - 2, STABILITY_WIDTH, STABILITY_HEIGHT, WHITE);

    let text = fit_text(status, STABILITY_MAX_CHARS);
    Text::with_text_style(&text, STABILITY_VALUE_POS, STABILITY_STYLE, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_HEIGHT;

    #[test]
    fn test_indicator_color_is_binary() {
        assert_eq!(indicator_color(true), ACTIVE_GREEN, "Active indicator should be green");
        assert_eq!(indicator_color(false), INACTIVE_GRAY, "Inactive indicator should be gray");
    }

    #[test]
    fn test_indicators_do_not_overlap() {
        for index in 1..INDICATOR_LABELS.len() {
            assert!(
                indicator_left(index) >= indicator_left(index - 1) + INDICATOR_SIZE,
                "Indicator {index} should start after the previous one"
            );
        }
        assert!(indicator_left(2) + INDICATOR_SIZE < STABILITY_LEFT, "Indicators should not reach stability panel");
    }

    #[test]
    fn test_stability_panel_fits_screen() {
        assert!(INDICATOR_TOP - 2 + STABILITY_HEIGHT <= SCREEN_HEIGHT, "Stability panel should fit vertically");
        assert!(STABILITY_MAX_CHARS >= 3, "Placeholder must fit");
    }

    #[test]
    fn test_draw_indicators_smoke() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_indicator_labels(&mut display);
        draw_pressure_indicators(&mut display, PressureIndicators { heel: true, mth: false, toe: true });
        draw_stability(&mut display, "---");
    }
}
