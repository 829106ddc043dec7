//! Color constants for the gait dashboard.
//!
//! Built-in `RgbColor` constants are used where they fit. The light theme
//! colors are converted from 8-bit RGB by dropping the low bits
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure white. Readout panel fill and header text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Theme Colors
// =============================================================================

/// Window background, `#eaf2f8`.
pub const PALE_BLUE: Rgb565 = Rgb565::new(29, 60, 31);

/// Header fill and label text, `#2c3e50`.
pub const SLATE: Rgb565 = Rgb565::new(5, 15, 10);

/// Readout value text, `#2980b9`.
pub const VALUE_BLUE: Rgb565 = Rgb565::new(5, 32, 23);

/// Gait phase text, `#34495e`.
pub const PHASE_SLATE: Rgb565 = Rgb565::new(6, 18, 11);

/// Stability readout text, `#8e44ad`.
pub const PURPLE: Rgb565 = Rgb565::new(17, 17, 21);

/// Active pressure indicator, `#27ae60`.
pub const ACTIVE_GREEN: Rgb565 = Rgb565::new(4, 43, 12);

/// Inactive pressure indicator, `#bdc3c7`.
pub const INACTIVE_GRAY: Rgb565 = Rgb565::new(23, 48, 24);

/// Panel borders and section rules.
pub const BORDER_GRAY: Rgb565 = Rgb565::new(16, 32, 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_states_are_distinct() {
        assert_ne!(ACTIVE_GREEN, INACTIVE_GRAY, "Indicator states must be visually distinct");
    }

    #[test]
    fn test_value_text_contrasts_with_panel() {
        assert_ne!(VALUE_BLUE, WHITE, "Values are drawn on a white panel");
        assert_ne!(PHASE_SLATE, WHITE, "Phase is drawn on a white panel");
    }
}
