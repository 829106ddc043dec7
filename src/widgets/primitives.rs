//! Low-level drawing primitives shared across widgets.
//!
//! # Panel Inset
//!
//! `draw_panel` fills a rectangle with a 2px inset from the given bounds, so
//! adjacent panels drawn over the window background keep a thin gap between
//! them without explicit border drawing.
//!
//! # Text Fitting
//!
//! Readout text comes straight off the wire and can be arbitrarily long.
//! `fit_text` copies at most `max_chars` characters into a fixed-capacity
//! `heapless::String`, so one oversized field can never spill into the next
//! column or allocate per frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

/// Byte capacity of a fitted string. Holds the widest readout even if every
/// character needs four UTF-8 bytes.
pub const FIT_CAPACITY: usize = 128;

/// Draw a panel background with 2px inset.
///
/// # Parameters
/// - `x`, `y`: Top-left corner of the panel boundary
/// - `w`, `h`: Full panel dimensions (must be >= 4 to have drawable area)
/// - `fill`: Fill color
///
/// Returns early if dimensions are too small to prevent u32 underflow.
pub fn draw_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    fill: Rgb565,
) {
    if w < 4 || h < 4 {
        return;
    }
    Rectangle::new(Point::new(x as i32 + 2, y as i32 + 2), Size::new(w - 4, h - 4))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
}

/// Fill an exact rectangle, no inset. Used to erase a value before redrawing it.
pub fn clear_area(
    display: &mut SimulatorDisplay<Rgb565>,
    top_left: Point,
    size: Size,
    fill: Rgb565,
) {
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();
}

/// Copy at most `max_chars` characters of `text` into a bounded string.
pub fn fit_text(text: &str, max_chars: usize) -> String<FIT_CAPACITY> {
    let mut fitted = String::new();
    for ch in text.chars().take(max_chars) {
        if fitted.push(ch).is_err() {
            break;
        }
    }
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_text_short_is_unchanged() {
        assert_eq!(fit_text("stance", 26).as_str(), "stance");
    }

    #[test]
    fn test_fit_text_truncates_by_characters() {
        assert_eq!(fit_text("20.50°C extra", 6).as_str(), "20.50°", "Degree sign counts as one character");
    }

    #[test]
    fn test_fit_text_empty() {
        assert!(fit_text("", 10).is_empty());
    }

    #[test]
    fn test_fit_text_respects_capacity() {
        let long = "é".repeat(FIT_CAPACITY);
        let fitted = fit_text(&long, FIT_CAPACITY);
        assert!(fitted.len() <= FIT_CAPACITY, "Fitted text must not exceed capacity");
        assert_eq!(fitted.chars().count(), FIT_CAPACITY / 2, "Two-byte chars fill capacity at half count");
    }

    #[test]
    fn test_draw_panel_small_dimensions_is_noop() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(8, 8));
        // Must not underflow
        draw_panel(&mut display, 0, 0, 3, 3, Rgb565::WHITE);
    }
}
