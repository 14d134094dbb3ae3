//! Documentation library (`.dcm`) serialization.

use crate::part::PartDescriptor;

/// First lines of a legacy documentation library file.
pub const DOC_HEADER: &str = "EESchema-DOCLIB  Version 2.0\n#\n";
/// Final lines of a legacy documentation library file.
pub const DOC_FOOTER: &str = "#\n#End Doc Library\n";

/// Renders one `$CMP`..`$ENDCMP` block per part number. Documentation
/// blocks are emitted for every alias member, independent of layout.
pub struct DocWriter;

impl DocWriter {
    pub fn emit(part: &PartDescriptor) -> String {
        format!(
            "$CMP {}\nD Atmel {} Cortex-M0+ MCU, {} Flash, {} RAM, {}, {}, {}\nK ARM Cortex-M0+ {}\nF {}\n$ENDCMP\n",
            part.part_number(),
            part.family_label(),
            part.flash_label(),
            part.ram_label(),
            part.speed_label(),
            part.package_label(),
            part.packaging_label(),
            part.series(),
            part.datasheet_url(),
        )
    }
}
