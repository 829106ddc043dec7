//! Render state tracking for selective redraws.
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Background, header, section titles, labels | Once | Draw-once tracking |
//! | Readout values, indicators, stability | When a frame is applied | Dirty flag from the sink |
//!
//! Nothing ever covers the static chrome (there are no popups or pages), so
//! after the first frame only the value areas are repainted.

/// Readout rows in display order.
///
/// Layout:
///   rows 0-8: realtime parameters
///   row 9:    gait phase
#[allow(dead_code)]
pub mod row_idx {
    pub const HEEL: usize = 0;
    pub const MTH: usize = 1;
    pub const TOE: usize = 2;
    pub const SHANK: usize = 3;
    pub const ANKLE: usize = 4;
    pub const STEP_TIME: usize = 5;
    pub const CADENCE: usize = 6;
    pub const COP: usize = 7;
    pub const SYMMETRY: usize = 8;
    pub const PHASE: usize = 9;
}

/// Tracks what has been drawn so far.
pub struct RenderState {
    /// Whether the static chrome is on screen.
    chrome_drawn: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Number of value redraws since startup.
    value_redraws: u64,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self { Self { chrome_drawn: false, first_frame: true, value_redraws: 0 } }

    /// Check if the static chrome needs drawing.
    #[inline]
    pub const fn need_chrome(&self) -> bool { !self.chrome_drawn || self.first_frame }

    /// Mark the static chrome as drawn.
    #[inline]
    pub const fn mark_chrome_drawn(&mut self) { self.chrome_drawn = true; }

    /// Check if value areas need repainting this frame.
    ///
    /// `readouts_changed` is the sink's dirty flag. Values are always painted on
    /// the first frame so placeholders appear before any data arrives.
    pub const fn check_values_dirty(&mut self, readouts_changed: bool) -> bool {
        let dirty = self.first_frame || readouts_changed;
        if dirty {
            self.value_redraws += 1;
        }
        dirty
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Number of times the value areas were repainted.
    #[inline]
    pub const fn value_redraws(&self) -> u64 { self.value_redraws }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) { self.first_frame = false; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::READOUT_ROWS;

    #[test]
    fn test_row_indices() {
        assert_eq!(row_idx::HEEL, 0, "Heel should be the first row");
        assert_eq!(row_idx::SYMMETRY, 8, "Symmetry should close the parameter block");
        assert_eq!(row_idx::PHASE, READOUT_ROWS - 1, "Gait phase should be the last row");
    }

    #[test]
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame(), "is_first_frame should be true initially");
        assert!(state.need_chrome(), "Chrome should be needed on first frame");
        assert_eq!(state.value_redraws(), 0);
    }

    #[test]
    fn test_chrome_drawn_once() {
        let mut state = RenderState::new();
        assert!(state.need_chrome());
        state.mark_chrome_drawn();
        state.end_frame();
        assert!(!state.need_chrome(), "Chrome should not redraw after first frame");
    }

    #[test]
    fn test_values_painted_on_first_frame() {
        let mut state = RenderState::new();
        assert!(state.check_values_dirty(false), "First frame should paint placeholders");
        state.end_frame();
        assert!(!state.check_values_dirty(false), "Unchanged readouts should not repaint");
        assert_eq!(state.value_redraws(), 1);
    }

    #[test]
    fn test_values_repaint_on_change() {
        let mut state = RenderState::new();
        state.end_frame();
        assert!(state.check_values_dirty(true), "Changed readouts should repaint");
        state.end_frame();
        assert!(!state.check_values_dirty(false));
        assert_eq!(state.value_redraws(), 1);
    }

    #[test]
    fn test_render_state_default() {
        let state = RenderState::default();
        assert!(state.is_first_frame(), "Default should match new()");
    }
}
