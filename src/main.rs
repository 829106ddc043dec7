// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::module_name_repetitions)] // FrameReader in reader, FrameError in frame

//! Locomotion and gait analysis dashboard.
//!
//! Shows live telemetry from a wearable gait sensor attached over a serial
//! link. Each frame is one text line of 13 comma-separated fields; the window
//! displays:
//! - Heel, MTH and toe pressure (MTH as right/left and combined value)
//! - Shank and ankle angle
//! - Step time and cadence
//! - Center of pressure (X, Y)
//! - Symmetry index and gait phase
//! - Three foot pressure indicators (green above threshold)
//! - Stability status (placeholder, no field carries it)
//!
//! # Architecture
//!
//! ```text
//!  serial port ──► frame-reader thread ──► bounded queue ──► UI loop ──► window
//!                  (shape check)                             (typed parse,
//!                                                             display sink)
//! ```
//!
//! - The reader thread owns the port. It blocks on reads with a 1 s timeout
//!   and only ever pushes [`frame::RawFrame`] values.
//! - The UI loop drains the queue every `FRAME_TIME`, parses each frame into
//!   a [`frame::GaitFrame`] and replaces all readouts at once. A frame that
//!   fails to parse is logged and leaves the previous readouts untouched.
//! - Closing the window raises the shared [`stop::StopToken`]; the reader
//!   notices it within one read timeout and exits, closing the port.
//!
//! # Logging
//!
//! Diagnostics go through `log` with `env_logger` as the backend. The default
//! level is `info`; set `RUST_LOG=debug` for more.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │          Gait Analysis Dashboard           │  26px
//! ├────────────────────────────────────────────┤
//! │ Realtime Parameters                        │
//! │  Heel Pressure:          120               │
//! │  ...                     (10 rows)         │  130px
//! ├──────────────────────────┬─────────────────┤
//! │ Foot Pressure Indicators │ Stability Status│
//! │  [Heel]  [MTH]  [Toe]    │      ---        │
//! └──────────────────────────┴─────────────────┘
//! ```

mod colors;
mod config;
mod frame;
mod queue;
mod reader;
mod readouts;
mod render;
mod stop;
mod styles;
mod widgets;

use std::thread;
use std::time::Instant;

use colors::PALE_BLUE;
use config::{FRAME_QUEUE_CAPACITY, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, SERIAL_PORT, WINDOW_SCALE, WINDOW_TITLE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, error, info};
use queue::frame_queue;
use readouts::DisplaySink;
use render::RenderState;
use stop::StopToken;
use widgets::{
    draw_header,
    draw_indicator_labels,
    draw_pressure_indicators,
    draw_readout_panel,
    draw_readout_values,
    draw_section_titles,
    draw_stability,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(PALE_BLUE).ok();
    window.update(&display);

    // ==========================================================================
    // Frame Reader
    // ==========================================================================

    let stop = StopToken::new();
    let (frames_tx, frames_rx) = frame_queue(FRAME_QUEUE_CAPACITY);

    // The window stays usable without a reader; readouts keep their placeholders.
    let reader = match reader::spawn(SERIAL_PORT, frames_tx, stop.clone()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            error!("Could not start frame reader: {e}");
            None
        }
    };

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut sink = DisplaySink::new();
    let mut render_state = RenderState::new();

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                break 'running;
            }
        }

        // Apply every frame that arrived since the last tick, oldest first.
        // Later frames overwrite earlier ones; only the newest is ever visible.
        for frame in frames_rx.drain() {
            sink.update(&frame);
        }

        // ======================================================================
        // Static Chrome (drawn once)
        // ======================================================================

        if render_state.need_chrome() {
            if render_state.is_first_frame() {
                debug!("Drawing dashboard chrome");
            }
            display.clear(PALE_BLUE).ok();
            draw_header(&mut display);
            draw_section_titles(&mut display);
            draw_readout_panel(&mut display);
            draw_indicator_labels(&mut display);
            render_state.mark_chrome_drawn();
        }

        // ======================================================================
        // Values (redrawn when the sink changed)
        // ======================================================================

        if render_state.check_values_dirty(sink.take_dirty()) {
            let readouts = sink.readouts();
            draw_readout_values(&mut display, readouts);
            draw_pressure_indicators(&mut display, readouts.indicators);
            draw_stability(&mut display, &readouts.stability);
        }

        render_state.end_frame();
        window.update(&display);

        // Frame timing: sleep for the rest of the frame budget
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    // ==========================================================================
    // Shutdown
    // ==========================================================================

    stop.stop();
    // Any push after this reports `Closed`.
    drop(frames_rx);

    if let Some(handle) = reader {
        match handle.join() {
            Ok(stats) => info!(
                "Frame reader stopped: {} queued, {} dropped, {} read errors",
                stats.frames_queued, stats.frames_dropped, stats.read_errors
            ),
            Err(_) => error!("Frame reader thread panicked"),
        }
    }
    info!("Dashboard closed after {} value redraws", render_state.value_redraws());
}
