//! Widget components for the gait dashboard window.
//!
//! - [`header`]: Header bar and section titles
//! - [`readout_panel`]: "Realtime Parameters" label/value rows
//! - [`indicators`]: Foot pressure indicator boxes and stability status
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │          Gait Analysis Dashboard           │  26px
//! ├────────────────────────────────────────────┤
//! │ Realtime Parameters                        │
//! │  Heel Pressure:            120             │
//! │  ...                       (10 rows)       │  130px
//! ├────────────────────────────────────────────┤
//! │ Foot Pressure Indicators │ Stability Status│
//! │  [Heel]  [MTH]  [Toe]    │      ---        │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Every widget takes the simulator display and only reads dashboard state;
//! none of them mutate it. Drawing results are discarded with `.ok()` since
//! the simulator framebuffer cannot fail.

mod header;
mod indicators;
mod primitives;
mod readout_panel;

pub use header::{draw_header, draw_section_titles};
pub use indicators::{draw_indicator_labels, draw_pressure_indicators, draw_stability};
pub use readout_panel::{draw_readout_panel, draw_readout_values};
