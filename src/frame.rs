//! Telemetry frame parsing.
//!
//! A frame travels as one newline-terminated line of 13 comma-separated text
//! fields. Parsing happens in two stages:
//!
//! 1. [`RawFrame::from_line`] (reader thread): shape check only. Empty lines,
//!    lines without a comma and lines that do not split into exactly
//!    [`FIELD_COUNT`] fields are discarded.
//! 2. [`GaitFrame::try_from`] (UI thread): every numeric field is parsed once
//!    into a named, typed field. Any failure rejects the whole frame.
//!
//! # Field Order
//!
//! ```text
//!  0 heel   1 r-MTH   2 l-MTH   3 toe   4 MTH   5 ankle   6 shank
//!  7 CoP-X  8 CoP-Y   9 phase  10 step time  11 cadence  12 symmetry
//! ```

use core::fmt;

use heapless::Vec;
use thiserror::Error;

use crate::config::{FIELD_COUNT, FIELD_SEPARATOR, PRESSURE_THRESHOLD};

// =============================================================================
// Field Names
// =============================================================================

/// Positional fields of a frame, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    HeelPressure,
    RightMthPressure,
    LeftMthPressure,
    ToePressure,
    CombinedMthPressure,
    AnkleAngle,
    ShankAngle,
    CopX,
    CopY,
    GaitPhase,
    StepTime,
    Cadence,
    SymmetryIndex,
}

impl Field {
    /// All fields in wire order.
    #[cfg(test)]
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::HeelPressure,
        Self::RightMthPressure,
        Self::LeftMthPressure,
        Self::ToePressure,
        Self::CombinedMthPressure,
        Self::AnkleAngle,
        Self::ShankAngle,
        Self::CopX,
        Self::CopY,
        Self::GaitPhase,
        Self::StepTime,
        Self::Cadence,
        Self::SymmetryIndex,
    ];

    /// Position of this field in the comma-separated line.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Human-readable name used in log messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeelPressure => "heel pressure",
            Self::RightMthPressure => "right MTH pressure",
            Self::LeftMthPressure => "left MTH pressure",
            Self::ToePressure => "toe pressure",
            Self::CombinedMthPressure => "MTH pressure",
            Self::AnkleAngle => "ankle angle",
            Self::ShankAngle => "shank angle",
            Self::CopX => "CoP X",
            Self::CopY => "CoP Y",
            Self::GaitPhase => "gait phase",
            Self::StepTime => "step time",
            Self::Cadence => "cadence",
            Self::SymmetryIndex => "symmetry index",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

// =============================================================================
// Errors
// =============================================================================

/// Reasons a frame cannot be displayed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("expected {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} is not an integer: {text:?}")]
    NotInteger { field: Field, text: String },

    #[error("{field} is not a number: {text:?}")]
    NotNumber { field: Field, text: String },
}

// =============================================================================
// Raw Frame (shape-checked text)
// =============================================================================

/// Exactly [`FIELD_COUNT`] text fields, as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFrame {
    fields: Vec<String, FIELD_COUNT>,
}

impl RawFrame {
    /// Shape-check one decoded serial line.
    ///
    /// Trailing whitespace (including `\r\n`) is stripped first. Returns `None`
    /// for noise: empty lines, lines without a separator, and lines with the
    /// wrong number of fields.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end();
        if line.is_empty() || !line.contains(FIELD_SEPARATOR) {
            return None;
        }
        Self::from_fields(line.split(FIELD_SEPARATOR)).ok()
    }

    /// Build a frame from already-split fields, enforcing the arity.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String, FIELD_COUNT> = Vec::new();
        let mut found = 0usize;
        for field in fields {
            found += 1;
            if found <= FIELD_COUNT {
                collected.push(field.into()).ok();
            }
        }
        if found != FIELD_COUNT {
            return Err(FrameError::FieldCount { expected: FIELD_COUNT, found });
        }
        Ok(Self { fields: collected })
    }

    /// Text of a single field.
    #[inline]
    pub fn get(&self, field: Field) -> &str { &self.fields[field.index()] }

    /// All fields in wire order.
    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = &str> { self.fields.iter().map(String::as_str) }

    fn integer(&self, field: Field) -> Result<Pressure, FrameError> {
        let text = self.get(field);
        let value = text.trim().parse::<i64>().map_err(|_| FrameError::NotInteger {
            field,
            text: text.to_owned(),
        })?;
        Ok(Pressure { text: text.to_owned(), value })
    }

    fn number(&self, field: Field) -> Result<f64, FrameError> {
        let text = self.get(field);
        text.trim().parse::<f64>().map_err(|_| FrameError::NotNumber {
            field,
            text: text.to_owned(),
        })
    }

    fn text(&self, field: Field) -> String { self.get(field).to_owned() }
}

// =============================================================================
// Typed Frame
// =============================================================================

/// A pressure reading: the text as sent plus its integer value.
///
/// The readouts show the received text; the indicators use the number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pressure {
    pub text: String,
    pub value: i64,
}

impl Pressure {
    /// Whether this reading lights its pressure indicator.
    #[inline]
    pub const fn exceeds_threshold(&self) -> bool { self.value > PRESSURE_THRESHOLD }
}

/// A fully validated frame with named fields.
///
/// Fields that are only ever displayed verbatim (`ankle_angle`, `phase`,
/// `step_time`) stay as text and are never parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct GaitFrame {
    pub heel: Pressure,
    pub right_mth: Pressure,
    pub left_mth: Pressure,
    pub toe: Pressure,
    pub combined_mth: f64,
    pub ankle_angle: String,
    pub shank_angle: f64,
    pub cop_x: f64,
    pub cop_y: f64,
    pub phase: String,
    pub step_time: String,
    pub cadence: f64,
    pub symmetry: f64,
}

impl TryFrom<&RawFrame> for GaitFrame {
    type Error = FrameError;

    fn try_from(raw: &RawFrame) -> Result<Self, Self::Error> {
        Ok(Self {
            heel: raw.integer(Field::HeelPressure)?,
            right_mth: raw.integer(Field::RightMthPressure)?,
            left_mth: raw.integer(Field::LeftMthPressure)?,
            toe: raw.integer(Field::ToePressure)?,
            combined_mth: raw.number(Field::CombinedMthPressure)?,
            ankle_angle: raw.text(Field::AnkleAngle),
            shank_angle: raw.number(Field::ShankAngle)?,
            cop_x: raw.number(Field::CopX)?,
            cop_y: raw.number(Field::CopY)?,
            phase: raw.text(Field::GaitPhase),
            step_time: raw.text(Field::StepTime),
            cadence: raw.number(Field::Cadence)?,
            symmetry: raw.number(Field::SymmetryIndex)?,
        })
    }
}
