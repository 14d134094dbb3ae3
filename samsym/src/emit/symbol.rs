//! Symbol (`.lib`) entry serialization.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::layout::{Layout, LeftSlot, PinEntry, FIELD_TEXT_SIZE, GRID, PIN_LENGTH, PIN_TEXT_SIZE};
use crate::part::PartDescriptor;

/// First lines of a legacy symbol library file.
pub const LIB_HEADER: &str = "EESchema-LIBRARY Version 2.3\n#encoding utf-8\n";
/// Final lines of a legacy symbol library file.
pub const LIB_FOOTER: &str = "#\n#End Library\n";

/// Renders one `DEF`..`ENDDEF` entry of a KiCad legacy symbol library.
///
/// Emission is append-only and purely functional: neither the layout nor
/// the descriptors are touched.
pub struct SymbolWriter {
    generated_at: DateTime<Utc>,
}

impl SymbolWriter {
    pub fn new() -> Self {
        SymbolWriter {
            generated_at: Utc::now(),
        }
    }

    /// Pin the header timestamp (tests, reproducible builds).
    pub fn with_timestamp(generated_at: DateTime<Utc>) -> Self {
        SymbolWriter { generated_at }
    }

    /// Serialize one symbol entry for `part`, listing `aliases` as its
    /// alternate names.
    pub fn emit(&self, part: &PartDescriptor, aliases: &[PartDescriptor], layout: &Layout) -> String {
        let name = part.part_number();
        let half = layout.width / 2;
        let field_y = layout.top + FIELD_TEXT_SIZE;
        let mut out = String::new();

        out.push_str("#\n");
        out.push_str(&format!("# {}\n", name));
        out.push_str("#\n");
        out.push_str(&format!(
            "# Generated by samsym on {}\n",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        out.push_str("#\n");
        out.push_str(&format!("DEF {} U 0 40 Y Y 1 F N\n", name));
        out.push_str(&format!(
            "F0 \"U\" {} {} {} H V L CNN\n",
            -half, field_y, FIELD_TEXT_SIZE
        ));
        out.push_str(&format!(
            "F1 \"{}\" {} {} {} H V R CNN\n",
            name, half, field_y, FIELD_TEXT_SIZE
        ));
        out.push_str(&format!(
            "F2 \"{}\" 0 {} {} H I C CNN\n",
            part.package_label(),
            -field_y,
            FIELD_TEXT_SIZE
        ));
        out.push_str(&format!("F3 \"\" 0 0 {} H I C CNN\n", FIELD_TEXT_SIZE));
        if !aliases.is_empty() {
            let names: Vec<String> = aliases.iter().map(|a| a.part_number()).collect();
            out.push_str(&format!("ALIAS {}\n", names.join(" ")));
        }
        out.push_str("DRAW\n");
        out.push_str(&format!(
            "S {} {} {} {} 0 1 10 f\n",
            -half,
            layout.top,
            half,
            layout.top - layout.height
        ));
        // Left pins sit on the left edge pointing right into the body; gap
        // rows are skipped but still advance the row counter.
        for (row, slot) in layout.left.iter().enumerate() {
            if let LeftSlot::Pin(pin) = slot {
                out.push_str(&pin_line(
                    pin,
                    -(half + PIN_LENGTH),
                    layout.top - GRID * (row as i32 + 1),
                    'R',
                ));
            }
        }
        for (row, pin) in layout.right.iter().enumerate() {
            out.push_str(&pin_line(
                pin,
                half + PIN_LENGTH,
                layout.top - GRID * (row as i32 + 1),
                'L',
            ));
        }
        out.push_str("ENDDRAW\n");
        out.push_str("ENDDEF\n");
        out
    }
}

impl Default for SymbolWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn pin_line(pin: &PinEntry, x: i32, y: i32, orientation: char) -> String {
    format!(
        "X {} {} {} {} {} {} {} {} 1 1 {}\n",
        pin.label,
        pin.number,
        x,
        y,
        PIN_LENGTH,
        orientation,
        PIN_TEXT_SIZE,
        PIN_TEXT_SIZE,
        pin.kind.type_letter()
    )
}
