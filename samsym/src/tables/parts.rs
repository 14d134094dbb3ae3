//! Known part-number enumeration.
//!
//! Walks the full grid of pin-count class × flash size × die revision ×
//! package × grade × carrier, minus the package combinations the family is
//! not manufactured in.

use crate::part::{MemoryCode, PackageCode, PinCountClass, SERIES};

const PIN_COUNTS: [PinCountClass; 3] = [
    PinCountClass::Small,
    PinCountClass::Medium,
    PinCountClass::Large,
];
const MEMORIES: [MemoryCode; 4] = [
    MemoryCode::F15,
    MemoryCode::F16,
    MemoryCode::F17,
    MemoryCode::F18,
];
const VARIANTS: [char; 2] = ['A', 'B'];
const PACKAGES: [PackageCode; 4] = [
    PackageCode::Tqfp,
    PackageCode::Qfn,
    PackageCode::Wlcsp,
    PackageCode::Ufbga,
];
const GRADES: [char; 2] = ['U', 'F'];
const CARRIERS: [&str; 2] = ["", "T"];

/// Every SAM D21 part number the generator can produce symbols for, in a
/// stable enumeration order.
pub fn known_parts() -> Vec<String> {
    let mut parts = Vec::new();
    for pin_count in PIN_COUNTS {
        for memory in MEMORIES {
            for variant in VARIANTS {
                for package in PACKAGES {
                    let exists = match package {
                        // UFBGA only exists at 64 pins
                        PackageCode::Ufbga => pin_count == PinCountClass::Large,
                        // the 64-pin die has no WLCSP option
                        PackageCode::Wlcsp => pin_count != PinCountClass::Large,
                        _ => true,
                    };
                    if !exists {
                        continue;
                    }
                    for grade in GRADES {
                        for carrier in CARRIERS {
                            parts.push(format!(
                                "{}{}{}{}-{}{}{}",
                                SERIES,
                                pin_count.code(),
                                memory.code(),
                                variant,
                                package.code(),
                                grade,
                                carrier,
                            ));
                        }
                    }
                }
            }
        }
    }
    parts
}
