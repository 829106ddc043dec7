//! "Realtime Parameters" panel: ten labeled readout rows.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Heel Pressure:             120                   │
//! │ MTH Pressure:              80/90 (85.0)          │
//! │ ...                                              │
//! │ Gait Phase:                stance                │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The panel background and labels are chrome (drawn once). Values are erased
//! and redrawn row by row whenever the readouts change.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::WHITE,
    config::{
        MARGIN, READOUT_BASELINE, READOUT_BOTTOM, READOUT_LABEL_X, READOUT_ROW_HEIGHT, READOUT_ROWS, READOUT_TOP,
        READOUT_VALUE_MAX_CHARS, READOUT_VALUE_WIDTH, READOUT_VALUE_X, SCREEN_WIDTH,
    },
    readouts::Readouts,
    render::row_idx,
    styles::{LABEL_STYLE, LEFT_ALIGNED, PHASE_STYLE, VALUE_STYLE},
    widgets::primitives::{clear_area, draw_panel, fit_text},
};

/// Row labels, in display order.
pub const READOUT_LABELS: [&str; READOUT_ROWS] = [
    "Heel Pressure:",
    "MTH Pressure:",
    "Toe Pressure:",
    "Shank Angle:",
    "Ankle Angle:",
    "Step Time (ms):",
    "Cadence (steps/min):",
    "Center of Pressure (CoP):",
    "Symmetry Index:",
    "Gait Phase:",
];

/// Top edge of a readout row.
#[inline]
const fn row_top(row: usize) -> u32 { READOUT_TOP + row as u32 * READOUT_ROW_HEIGHT }

/// Readout values in the same order as [`READOUT_LABELS`].
pub fn row_values(readouts: &Readouts) -> [&str; READOUT_ROWS] {
    [
        &readouts.heel_pressure,
        &readouts.mth_pressure,
        &readouts.toe_pressure,
        &readouts.shank_angle,
        &readouts.ankle_angle,
        &readouts.step_time,
        &readouts.cadence,
        &readouts.center_of_pressure,
        &readouts.symmetry_index,
        &readouts.gait_phase,
    ]
}

/// Value style for a row. Gait phase gets its own color.
#[inline]
const fn value_style(row: usize) -> MonoTextStyle<'static, Rgb565> {
    if row == row_idx::PHASE { PHASE_STYLE } else { VALUE_STYLE }
}

/// Draw the panel background and all row labels.
pub fn draw_readout_panel(display: &mut SimulatorDisplay<Rgb565>) {
    // Inset of 2px on each side, so pad the bounds by the same amount
    draw_panel(
        display,
        MARGIN - 2,
        READOUT_TOP - 2,
        SCREEN_WIDTH - 2 * MARGIN + 4,
        READOUT_BOTTOM - READOUT_TOP + 4,
        WHITE,
    );

    for (row, label) in READOUT_LABELS.iter().enumerate() {
        let pos = Point::new(READOUT_LABEL_X, row_top(row) as i32 + READOUT_BASELINE);
        Text::with_text_style(label, pos, LABEL_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Erase and redraw every readout value.
pub fn draw_readout_values(display: &mut SimulatorDisplay<Rgb565>, readouts: &Readouts) {
    for (row, value) in row_values(readouts).into_iter().enumerate() {
        let top = row_top(row) as i32;
        clear_area(
            display,
            Point::new(READOUT_VALUE_X, top),
            Size::new(READOUT_VALUE_WIDTH, READOUT_ROW_HEIGHT),
            WHITE,
        );

        let text = fit_text(value, READOUT_VALUE_MAX_CHARS);
        Text::with_text_style(&text, Point::new(READOUT_VALUE_X, top + READOUT_BASELINE), value_style(row), LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_HEIGHT;
    use crate::frame::{GaitFrame, RawFrame};

    #[test]
    fn test_labels_fit_before_values() {
        for label in READOUT_LABELS {
            // FONT_6X10 is 6px per character
            let end = READOUT_LABEL_X + label.len() as i32 * 6;
            assert!(end < READOUT_VALUE_X, "{label} should end before the value column");
        }
    }

    #[test]
    fn test_row_values_follow_label_order() {
        let raw = RawFrame::from_line("120,80,90,60,85.0,15,20.5,1.23,4.56,stance,250,110.0,0.95").unwrap();
        let readouts = Readouts::from_frame(&GaitFrame::try_from(&raw).unwrap());
        let values = row_values(&readouts);

        assert_eq!(values[row_idx::HEEL], "120");
        assert_eq!(values[row_idx::MTH], "80/90 (85.0)");
        assert_eq!(values[row_idx::TOE], "60");
        assert_eq!(values[row_idx::SHANK], "20.50°");
        assert_eq!(values[row_idx::ANKLE], "15°");
        assert_eq!(values[row_idx::STEP_TIME], "250");
        assert_eq!(values[row_idx::CADENCE], "110.0");
        assert_eq!(values[row_idx::COP], "X: 1.23, Y: 4.56");
        assert_eq!(values[row_idx::SYMMETRY], "0.95");
        assert_eq!(values[row_idx::PHASE], "stance");
    }

    #[test]
    fn test_rows_stay_inside_panel() {
        assert_eq!(row_top(READOUT_ROWS), READOUT_BOTTOM, "Last row should end at the panel bottom");
    }

    #[test]
    fn test_phase_row_has_distinct_style() {
        assert_eq!(value_style(row_idx::PHASE).text_color, PHASE_STYLE.text_color);
        assert_eq!(value_style(row_idx::HEEL).text_color, VALUE_STYLE.text_color);
        assert_ne!(PHASE_STYLE.text_color, VALUE_STYLE.text_color, "Phase should stand out");
    }

    #[test]
    fn test_draw_values_with_oversized_text() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut readouts = Readouts::placeholder();
        readouts.gait_phase = "x".repeat(500);
        draw_readout_panel(&mut display);
        draw_readout_values(&mut display, &readouts);
    }
}
