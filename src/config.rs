//! Application configuration constants.
//!
//! Everything the dashboard needs to know up front lives here as a `const`:
//! screen geometry, pre-computed layout positions, frame pacing, serial link
//! settings and the frame schema. There are no CLI flags or config files.
//!
//! Layout values such as `READOUT_VALUE_X` are derived from other constants
//! at compile time so the drawing code never recomputes them per frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window scale factor. The simulator window is `SCREEN_WIDTH * 2` wide.
pub const WINDOW_SCALE: u32 = 2;

/// Title shown in the OS window decoration.
pub const WINDOW_TITLE: &str = "Locomotion and Gait Analysis";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target UI tick (~50 FPS). Pending frames are drained once per tick.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Serial Link Configuration
// =============================================================================

/// Serial endpoint the sensor device is attached to.
#[cfg(windows)]
pub const SERIAL_PORT: &str = "COM8";

/// Serial endpoint the sensor device is attached to.
#[cfg(not(windows))]
pub const SERIAL_PORT: &str = "/dev/ttyACM0";

/// Fixed link speed of the sensor firmware.
pub const BAUD_RATE: u32 = 115_200;

/// Upper bound on a single blocking read. Also bounds shutdown latency,
/// since the stop token is only checked between reads.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Frames buffered between the reader thread and the UI loop.
/// The UI drains the queue every `FRAME_TIME`, so this only fills if the UI stalls.
pub const FRAME_QUEUE_CAPACITY: usize = 64;

// =============================================================================
// Frame Schema
// =============================================================================

/// Number of comma-separated fields in every frame.
pub const FIELD_COUNT: usize = 13;

/// Field separator on the wire.
pub const FIELD_SEPARATOR: char = ',';

/// A pressure indicator is active when its reading is strictly above this value.
pub const PRESSURE_THRESHOLD: i64 = 100;

/// Text every readout shows before the first frame, and the stability readout always.
pub const PLACEHOLDER: &str = "---";

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Outer margin used by all panels.
pub const MARGIN: u32 = 4;

/// Baseline of the "Realtime Parameters" section title.
pub const PARAMS_TITLE_Y: i32 = 39;

/// Top edge of the first readout row.
pub const READOUT_TOP: u32 = 44;

/// Height of one readout row (fits the 6x13 value font).
pub const READOUT_ROW_HEIGHT: u32 = 13;

/// Number of readout rows: nine parameters plus gait phase.
pub const READOUT_ROWS: usize = 10;

/// Baseline offset of text inside a readout row.
pub const READOUT_BASELINE: i32 = 10;

/// X position of readout labels.
pub const READOUT_LABEL_X: i32 = (MARGIN + 4) as i32;

/// Widest label is "Center of Pressure (CoP):" at 25 characters of 6px.
pub const READOUT_VALUE_X: i32 = READOUT_LABEL_X + 25 * 6 + 4;

/// Width available to a readout value.
pub const READOUT_VALUE_WIDTH: u32 = SCREEN_WIDTH - MARGIN - READOUT_VALUE_X as u32;

/// Readout values longer than this many characters are truncated.
pub const READOUT_VALUE_MAX_CHARS: usize = (READOUT_VALUE_WIDTH / 6) as usize;

/// Bottom edge of the readout panel.
pub const READOUT_BOTTOM: u32 = READOUT_TOP + READOUT_ROW_HEIGHT * READOUT_ROWS as u32;

/// Baseline of the "Foot Pressure Indicators" and "Stability Status" titles.
pub const LOWER_TITLE_Y: i32 = READOUT_BOTTOM as i32 + 13;

/// Top edge of the indicator boxes.
pub const INDICATOR_TOP: u32 = READOUT_BOTTOM + 18;

/// Side length of each square pressure indicator.
pub const INDICATOR_SIZE: u32 = 30;

/// Horizontal distance between indicator left edges.
pub const INDICATOR_PITCH: u32 = 60;

/// Left edge of the first indicator box.
pub const INDICATOR_LEFT: u32 = 20;

/// Left edge of the stability panel.
pub const STABILITY_LEFT: u32 = 196;

/// Screen center X coordinate of the stability panel.
pub const STABILITY_CENTER_X: i32 = ((STABILITY_LEFT + SCREEN_WIDTH - MARGIN) / 2) as i32;

const _: () = assert!(READOUT_BOTTOM < SCREEN_HEIGHT);
const _: () = assert!(INDICATOR_TOP + INDICATOR_SIZE + 12 <= SCREEN_HEIGHT);
const _: () = assert!(INDICATOR_LEFT + 2 * INDICATOR_PITCH + INDICATOR_SIZE < STABILITY_LEFT);
