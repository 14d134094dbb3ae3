//! Pin classification and symbol layout.
//!
//! Pins are split into two columns: supply/control signals on the left,
//! port pins (I/O) on the right with their full alternate-function chain as
//! the label. The bounding geometry is computed in grid units so every pin
//! lands exactly on a grid intersection of the target format.

use crate::part::PartDescriptor;
use crate::tables::{FunctionTable, PinoutTable};

/// Length of the pin stub outside the body, in grid units.
pub const PIN_LENGTH: i32 = 100;
/// Text size of pin names and numbers.
pub const PIN_TEXT_SIZE: i32 = 40;
/// Text size of the F0..F3 field lines.
pub const FIELD_TEXT_SIZE: i32 = 50;
/// The coordinate quantum everything must align to.
pub const GRID: i32 = 100;

/// Error type for layout construction
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("no pinout table entry '{key}' for part {part}")]
    UnknownPinout { part: String, key: String },
    #[error("no alternate-function entry for signal '{signal}' (pin {pin}) of part {part}")]
    UnknownSignal {
        part: String,
        pin: String,
        signal: String,
    },
}

/// Electrical class of a pin. Decided once during layout and carried in the
/// entry so emission cannot drift from classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKind {
    /// Supply rails and grounds
    PowerInput,
    /// Reset and other control inputs
    Input,
    /// Everything else, including all port pins
    Bidirectional,
}

impl PinKind {
    /// Electrical-type letter used on an `X` pin line.
    pub fn type_letter(self) -> char {
        match self {
            PinKind::PowerInput => 'W',
            PinKind::Input => 'I',
            PinKind::Bidirectional => 'B',
        }
    }
}

/// One placed pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEntry {
    /// Physical pin identifier: numeric for quad packages, a row-letter +
    /// column coordinate for grid arrays. Never parsed as an integer.
    pub number: String,
    /// Short signal name from the pinout table.
    pub signal: String,
    /// Display label; for I/O pins the alternate functions followed by the
    /// signal name, `/`-joined.
    pub label: String,
    pub kind: PinKind,
}

/// A row of the left column: either a pin or a vertical gap separating the
/// misc, power, and ground clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeftSlot {
    Pin(PinEntry),
    Gap,
}

/// Computed symbol geometry, all values in grid units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub left: Vec<LeftSlot>,
    pub right: Vec<PinEntry>,
    pub width: i32,
    pub height: i32,
    pub top: i32,
}

/// Stateless builder of [`Layout`] values.
pub struct LayoutEngine;

impl LayoutEngine {
    /// Build the layout for one part from its pinout and function tables.
    pub fn build(
        part: &PartDescriptor,
        pinouts: &PinoutTable,
        functions: &FunctionTable,
    ) -> Result<Layout, LayoutError> {
        let key = part.pinout_key();
        let pinout = pinouts.lookup(&key).ok_or_else(|| LayoutError::UnknownPinout {
            part: part.part_number(),
            key: key.clone(),
        })?;

        // Bucket priority is fixed: misc, then power, then ground. The
        // token tests are substring matches on the canonical rail names,
        // so VDDANA is power and GNDANA is ground.
        let mut misc = Vec::new();
        let mut power = Vec::new();
        let mut ground = Vec::new();
        let mut io = Vec::new();
        for (number, signal) in pinout {
            if is_port_pin(signal) {
                io.push((number.clone(), signal.clone()));
            } else if signal.contains("VDD") {
                power.push(left_entry(number, signal));
            } else if signal.contains("GND") {
                ground.push(left_entry(number, signal));
            } else {
                misc.push(left_entry(number, signal));
            }
        }

        for bucket in [&mut misc, &mut power, &mut ground] {
            bucket.sort_by(|a, b| a.signal.cmp(&b.signal));
        }
        io.sort_by(|a, b| a.1.cmp(&b.1));

        let right = io
            .into_iter()
            .map(|(number, signal)| {
                let funcs =
                    functions
                        .lookup(&signal)
                        .ok_or_else(|| LayoutError::UnknownSignal {
                            part: part.part_number(),
                            pin: number.clone(),
                            signal: signal.clone(),
                        })?;
                let label = expand_label(funcs, &signal);
                Ok(PinEntry {
                    number,
                    signal,
                    label,
                    kind: PinKind::Bidirectional,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        // Exactly two gaps, present even when the buckets around them are
        // empty; they count as rows and so affect the symbol height.
        let mut left = Vec::with_capacity(misc.len() + power.len() + ground.len() + 2);
        left.extend(misc.into_iter().map(LeftSlot::Pin));
        left.push(LeftSlot::Gap);
        left.extend(power.into_iter().map(LeftSlot::Pin));
        left.push(LeftSlot::Gap);
        left.extend(ground.into_iter().map(LeftSlot::Pin));

        let max_left = left
            .iter()
            .filter_map(|slot| match slot {
                LeftSlot::Pin(pin) => Some(pin.label.chars().count()),
                LeftSlot::Gap => None,
            })
            .max()
            .unwrap_or(0);
        let max_right = right
            .iter()
            .map(|pin| pin.label.chars().count())
            .max()
            .unwrap_or(0);

        let raw_width = (max_left + max_right) as i32 * PIN_TEXT_SIZE + 2 * PIN_LENGTH;
        let width = round_up(raw_width, 2 * GRID);
        let rows = left.len().max(right.len()) as i32;
        let height = round_up(rows * GRID, 2 * GRID);
        let top = round_up(height / 2, GRID);

        Ok(Layout {
            left,
            right,
            width,
            height,
            top,
        })
    }
}

fn left_entry(number: &str, signal: &str) -> PinEntry {
    PinEntry {
        number: number.to_string(),
        signal: signal.to_string(),
        label: signal.to_string(),
        kind: classify_left(signal),
    }
}

/// Port pins look like `PA00`..`PB31`: `P`, a bank letter, two digits.
fn is_port_pin(signal: &str) -> bool {
    let b = signal.as_bytes();
    b.len() == 4
        && b[0] == b'P'
        && b[1].is_ascii_uppercase()
        && b[2].is_ascii_digit()
        && b[3].is_ascii_digit()
}

fn classify_left(signal: &str) -> PinKind {
    if signal.contains("VDD") || signal.contains("GND") {
        PinKind::PowerInput
    } else if signal.contains("RESET") {
        PinKind::Input
    } else {
        PinKind::Bidirectional
    }
}

/// Alternate functions in table order, original signal name last. An empty
/// function list collapses to the bare name with no dangling delimiter.
fn expand_label(functions: &[String], signal: &str) -> String {
    if functions.is_empty() {
        return signal.to_string();
    }
    let mut label = functions.join("/");
    label.push('/');
    label.push_str(signal);
    label
}

/// Round `value` up to the next multiple of `multiple`. Ceiling arithmetic
/// only: truncation would pull pins off the grid.
fn round_up(value: i32, multiple: i32) -> i32 {
    ((value + multiple - 1) / multiple) * multiple
}
