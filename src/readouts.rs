//! Display sink: turns validated frames into readout text.
//!
//! [`Readouts`] is the complete on-screen model: ten text readouts, the
//! stability stub and three pressure indicators. The widgets only ever read
//! from it. [`DisplaySink`] owns the current `Readouts` on the UI thread and
//! replaces them wholesale for every frame that parses, so a rejected frame
//! never leaves a half-updated screen.
//!
//! # Formatting
//!
//! | Readout | Source | Format |
//! |---------|--------|--------|
//! | Heel / Toe | fields 0, 3 | raw text |
//! | MTH | fields 1, 2, 4 | `r/l (mth:.1)` |
//! | Shank angle | field 6 | `{:.2}°` |
//! | Ankle angle | field 5 | raw text + `°` |
//! | Step time | field 10 | raw text |
//! | Cadence | field 11 | `{:.1}` |
//! | CoP | fields 7, 8 | `X: {:.2}, Y: {:.2}` |
//! | Symmetry | field 12 | `{:.2}` |
//! | Gait phase | field 9 | raw text |

use log::warn;

use crate::config::PLACEHOLDER;
use crate::frame::{FrameError, GaitFrame, RawFrame};

/// Binary state of the three foot pressure indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressureIndicators {
    pub heel: bool,
    pub mth: bool,
    pub toe: bool,
}

impl PressureIndicators {
    /// Derive indicator states from a frame's pressure readings.
    pub const fn from_frame(frame: &GaitFrame) -> Self {
        Self {
            heel: frame.heel.exceeds_threshold(),
            mth: frame.right_mth.exceeds_threshold() || frame.left_mth.exceeds_threshold(),
            toe: frame.toe.exceeds_threshold(),
        }
    }
}

/// Everything the dashboard shows, as display-ready text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readouts {
    pub heel_pressure: String,
    pub mth_pressure: String,
    pub toe_pressure: String,
    pub shank_angle: String,
    pub ankle_angle: String,
    pub step_time: String,
    pub cadence: String,
    pub center_of_pressure: String,
    pub symmetry_index: String,
    pub gait_phase: String,
    /// No stability field exists in the frame schema; always the placeholder.
    pub stability: String,
    pub indicators: PressureIndicators,
}

impl Readouts {
    /// Startup state: every readout shows the placeholder, indicators off.
    pub fn placeholder() -> Self {
        Self {
            heel_pressure: PLACEHOLDER.into(),
            mth_pressure: PLACEHOLDER.into(),
            toe_pressure: PLACEHOLDER.into(),
            shank_angle: PLACEHOLDER.into(),
            ankle_angle: PLACEHOLDER.into(),
            step_time: PLACEHOLDER.into(),
            cadence: PLACEHOLDER.into(),
            center_of_pressure: PLACEHOLDER.into(),
            symmetry_index: PLACEHOLDER.into(),
            gait_phase: PLACEHOLDER.into(),
            stability: PLACEHOLDER.into(),
            indicators: PressureIndicators::default(),
        }
    }

    /// Format every readout from a validated frame.
    pub fn from_frame(frame: &GaitFrame) -> Self {
        Self {
            heel_pressure: frame.heel.text.clone(),
            mth_pressure: format!(
                "{}/{} ({:.1})",
                frame.right_mth.text, frame.left_mth.text, frame.combined_mth
            ),
            toe_pressure: frame.toe.text.clone(),
            shank_angle: format!("{:.2}°", frame.shank_angle),
            ankle_angle: format!("{}°", frame.ankle_angle),
            step_time: frame.step_time.clone(),
            cadence: format!("{:.1}", frame.cadence),
            center_of_pressure: format!("X: {:.2}, Y: {:.2}", frame.cop_x, frame.cop_y),
            symmetry_index: format!("{:.2}", frame.symmetry),
            gait_phase: frame.phase.clone(),
            stability: PLACEHOLDER.into(),
            indicators: PressureIndicators::from_frame(frame),
        }
    }
}

impl Default for Readouts {
    fn default() -> Self { Self::placeholder() }
}

/// UI-thread owner of the current readouts.
#[derive(Debug)]
pub struct DisplaySink {
    readouts: Readouts,
    dirty: bool,
}

impl DisplaySink {
    /// Sink showing placeholders. Starts dirty so the first tick draws them.
    pub fn new() -> Self { Self { readouts: Readouts::placeholder(), dirty: true } }

    /// Apply a frame, logging and discarding it if any field fails to parse.
    pub fn update(&mut self, frame: &RawFrame) {
        if let Err(e) = self.try_update(frame) {
            warn!("UI update error: {e}");
        }
    }

    /// Apply a frame, or leave the readouts untouched and return why not.
    pub fn try_update(&mut self, frame: &RawFrame) -> Result<(), FrameError> {
        let frame = GaitFrame::try_from(frame)?;
        self.readouts = Readouts::from_frame(&frame);
        self.dirty = true;
        Ok(())
    }

    /// Current readouts.
    #[inline]
    pub const fn readouts(&self) -> &Readouts { &self.readouts }

    /// Whether the readouts changed since the last call, clearing the flag.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }
}

impl Default for DisplaySink {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: &str) -> RawFrame { RawFrame::from_line(line).expect("test line should have 13 fields") }

    const SAMPLE: &str = "120,80,90,60,85.0,15,20.5,1.23,4.56,stance,250,110.0,0.95";

    // -------------------------------------------------------------------------
    // Formatting Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sample_frame_rendering() {
        let mut sink = DisplaySink::new();
        sink.try_update(&raw(SAMPLE)).expect("sample should render");
        let r = sink.readouts();

        assert_eq!(r.heel_pressure, "120");
        assert_eq!(r.mth_pressure, "80/90 (85.0)");
        assert_eq!(r.toe_pressure, "60");
        assert_eq!(r.shank_angle, "20.50°");
        assert_eq!(r.ankle_angle, "15°");
        assert_eq!(r.step_time, "250");
        assert_eq!(r.cadence, "110.0");
        assert_eq!(r.center_of_pressure, "X: 1.23, Y: 4.56");
        assert_eq!(r.symmetry_index, "0.95");
        assert_eq!(r.gait_phase, "stance");
        assert_eq!(r.stability, PLACEHOLDER, "Stability has no source field");
    }

    #[test]
    fn test_sample_frame_indicators() {
        let mut sink = DisplaySink::new();
        sink.try_update(&raw(SAMPLE)).unwrap();
        let indicators = sink.readouts().indicators;

        assert!(indicators.heel, "Heel 120 > 100 should be active");
        assert!(!indicators.mth, "MTH 80/90 should be inactive");
        assert!(!indicators.toe, "Toe 60 should be inactive");
    }

    #[test]
    fn test_mth_indicator_uses_either_side() {
        let mut sink = DisplaySink::new();

        sink.try_update(&raw("0,101,0,0,0,0,0,0,0,swing,0,0,0")).unwrap();
        assert!(sink.readouts().indicators.mth, "Right MTH 101 should activate");

        sink.try_update(&raw("0,0,150,0,0,0,0,0,0,swing,0,0,0")).unwrap();
        assert!(sink.readouts().indicators.mth, "Left MTH 150 should activate");

        sink.try_update(&raw("0,100,100,0,0,0,0,0,0,swing,0,0,0")).unwrap();
        assert!(!sink.readouts().indicators.mth, "100 is not above the threshold");
    }

    #[test]
    fn test_rounding_and_precision() {
        let mut sink = DisplaySink::new();
        sink.try_update(&raw("1,2,3,4,7,-3,-1.237,0,12.3456,toe-off,301,98.26,1")).unwrap();
        let r = sink.readouts();

        assert_eq!(r.mth_pressure, "2/3 (7.0)", "Integer MTH should still show one decimal");
        assert_eq!(r.shank_angle, "-1.24°");
        assert_eq!(r.ankle_angle, "-3°");
        assert_eq!(r.center_of_pressure, "X: 0.00, Y: 12.35");
        assert_eq!(r.cadence, "98.3");
        assert_eq!(r.symmetry_index, "1.00");
    }

    #[test]
    fn test_raw_text_fields_are_verbatim() {
        let mut sink = DisplaySink::new();
        sink.try_update(&raw("+120,080,90,60,85,15.5,20,1,2,mid stance,250ms,110,0.9")).unwrap();
        let r = sink.readouts();

        assert_eq!(r.heel_pressure, "+120", "Heel text should not be normalized");
        assert_eq!(r.mth_pressure, "080/90 (85.0)");
        assert_eq!(r.ankle_angle, "15.5°");
        assert_eq!(r.step_time, "250ms");
        assert_eq!(r.gait_phase, "mid stance");
    }

    // -------------------------------------------------------------------------
    // Rejection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_non_numeric_frame_leaves_display_untouched() {
        let mut sink = DisplaySink::new();
        sink.try_update(&raw(SAMPLE)).unwrap();
        let before = sink.readouts().clone();
        assert!(sink.take_dirty());

        let result = sink.try_update(&raw("999,80,90,60,85.0,15,abc,1.23,4.56,swing,250,110.0,0.95"));

        assert!(result.is_err(), "Non-numeric shank angle should be rejected");
        assert_eq!(sink.readouts(), &before, "No readout should change on rejection");
        assert!(!sink.take_dirty(), "Rejected frame should not trigger a redraw");
    }

    #[test]
    fn test_rejection_reported_for_late_field() {
        // Symmetry is the last field parsed; earlier fields are all valid
        let mut sink = DisplaySink::new();
        let err = sink.try_update(&raw("1,2,3,4,5,6,7,8,9,swing,11,12,n/a")).unwrap_err();
        assert!(err.to_string().contains("symmetry index"), "Error should name the field: {err}");
        assert_eq!(sink.readouts(), &Readouts::placeholder(), "Placeholders should remain");
    }

    #[test]
    fn test_update_logs_instead_of_failing() {
        let mut sink = DisplaySink::new();
        sink.update(&raw("x,80,90,60,85.0,15,20.5,1.23,4.56,stance,250,110.0,0.95"));
        assert_eq!(sink.readouts(), &Readouts::placeholder());
    }

    // -------------------------------------------------------------------------
    // Dirty Tracking Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_sink_is_dirty_once() {
        let mut sink = DisplaySink::new();
        assert!(sink.take_dirty(), "Placeholders need an initial draw");
        assert!(!sink.take_dirty(), "Flag should clear after being taken");
    }

    #[test]
    fn test_placeholder_state() {
        let r = Readouts::default();
        assert_eq!(r.heel_pressure, PLACEHOLDER);
        assert_eq!(r.gait_phase, PLACEHOLDER);
        assert_eq!(r.indicators, PressureIndicators::default(), "Indicators start inactive");
    }
}
