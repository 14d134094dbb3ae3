//! SAM D21 part-number decoding.
//!
//! A SAM D21 part number encodes every attribute the symbol generator needs
//! at a fixed character offset:
//!
//! ```text
//! S A M D 2 1 J 1 8 A - A U T
//! \─────┬────/ │ \┬/ │   │ │ └─ carrier: "T" = tape and reel, absent = tray
//!    series    │  │  │   │ └─── grade (U or F)
//!              │  │  │   └───── package (A=TQFP, M=QFN, U=WLCSP, C=UFBGA)
//!              │  │  └───────── die revision letter
//!              │  └──────────── flash size code (15..18)
//!              └─────────────── pin-count class (E=32, G=48, J=64)
//! ```
//!
//! Decoding is pure string slicing; an unrecognized series or positional
//! code is an error, never a default.

/// The only series this decoder knows how to slice.
pub const SERIES: &str = "SAMD21";

/// Error type for part-number decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown series in part number '{part}'")]
    UnknownSeries { part: String },
    #[error("unknown {field} code '{value}' in part number '{part}'")]
    UnknownCode {
        part: String,
        field: &'static str,
        value: String,
    },
}

/// Pin-count class letter at offset 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinCountClass {
    /// E: 32-pin body
    Small,
    /// G: 48-pin body
    Medium,
    /// J: 64-pin body
    Large,
}

impl PinCountClass {
    pub fn code(self) -> char {
        match self {
            PinCountClass::Small => 'E',
            PinCountClass::Medium => 'G',
            PinCountClass::Large => 'J',
        }
    }

    /// Nominal pin count for quad and grid-array packages.
    pub fn pins(self) -> u32 {
        match self {
            PinCountClass::Small => 32,
            PinCountClass::Medium => 48,
            PinCountClass::Large => 64,
        }
    }
}

/// Package letter at offset 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageCode {
    /// A: thin quad flat pack
    Tqfp,
    /// M: quad flat no-lead
    Qfn,
    /// U: wafer-level chip scale
    Wlcsp,
    /// C: ultra-fine ball grid array
    Ufbga,
}

impl PackageCode {
    pub fn code(self) -> char {
        match self {
            PackageCode::Tqfp => 'A',
            PackageCode::Qfn => 'M',
            PackageCode::Wlcsp => 'U',
            PackageCode::Ufbga => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PackageCode::Tqfp => "TQFP",
            PackageCode::Qfn => "QFN",
            PackageCode::Wlcsp => "WLCSP",
            PackageCode::Ufbga => "UFBGA",
        }
    }

    /// Shape half of the normalized pinout-table key. TQFP and QFN share
    /// numeric pinouts, so both normalize to "quad".
    pub fn shape(self) -> &'static str {
        match self {
            PackageCode::Tqfp | PackageCode::Qfn => "quad",
            PackageCode::Wlcsp => "chip-scale",
            PackageCode::Ufbga => "grid",
        }
    }
}

/// Flash-size digits at offsets 7..9. The code is the base-2 exponent of
/// the flash size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryCode {
    F15,
    F16,
    F17,
    F18,
}

impl MemoryCode {
    pub fn code(self) -> &'static str {
        match self {
            MemoryCode::F15 => "15",
            MemoryCode::F16 => "16",
            MemoryCode::F17 => "17",
            MemoryCode::F18 => "18",
        }
    }

    pub fn flash_label(self) -> &'static str {
        match self {
            MemoryCode::F15 => "32KB",
            MemoryCode::F16 => "64KB",
            MemoryCode::F17 => "128KB",
            MemoryCode::F18 => "256KB",
        }
    }

    pub fn ram_label(self) -> &'static str {
        match self {
            MemoryCode::F15 => "4KB",
            MemoryCode::F16 => "8KB",
            MemoryCode::F17 => "16KB",
            MemoryCode::F18 => "32KB",
        }
    }
}

/// Decoded, immutable view of one part number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartDescriptor {
    pub pin_count: PinCountClass,
    pub package: PackageCode,
    pub memory: MemoryCode,
    pub variant: char,
    pub grade: char,
    pub tape_reel: bool,
}

impl PartDescriptor {
    /// Decode a part number by fixed-offset slicing.
    pub fn decode(part: &str) -> Result<Self, DecodeError> {
        if !part.is_ascii() || part.len() < 6 || &part[..6] != SERIES {
            return Err(DecodeError::UnknownSeries {
                part: part.to_string(),
            });
        }
        let unknown = |field: &'static str, value: &str| DecodeError::UnknownCode {
            part: part.to_string(),
            field,
            value: value.to_string(),
        };
        if part.len() < 13 {
            return Err(unknown("suffix", &part[6..]));
        }

        let bytes = part.as_bytes();
        let pin_count = match bytes[6] {
            b'E' => PinCountClass::Small,
            b'G' => PinCountClass::Medium,
            b'J' => PinCountClass::Large,
            _ => return Err(unknown("pin count", &part[6..7])),
        };
        let memory = match &part[7..9] {
            "15" => MemoryCode::F15,
            "16" => MemoryCode::F16,
            "17" => MemoryCode::F17,
            "18" => MemoryCode::F18,
            other => return Err(unknown("flash size", other)),
        };
        let variant = bytes[9] as char;
        if !variant.is_ascii_uppercase() {
            return Err(unknown("variant", &part[9..10]));
        }
        if bytes[10] != b'-' {
            return Err(unknown("separator", &part[10..11]));
        }
        let package = match bytes[11] {
            b'A' => PackageCode::Tqfp,
            b'M' => PackageCode::Qfn,
            b'U' => PackageCode::Wlcsp,
            b'C' => PackageCode::Ufbga,
            _ => return Err(unknown("package", &part[11..12])),
        };
        // Combinations the family is not manufactured in: UFBGA only exists
        // at 64 pins, and the 64-pin die has no WLCSP option.
        let valid = match package {
            PackageCode::Ufbga => pin_count == PinCountClass::Large,
            PackageCode::Wlcsp => pin_count != PinCountClass::Large,
            _ => true,
        };
        if !valid {
            return Err(unknown("package", &part[11..12]));
        }
        let grade = match bytes[12] {
            b'U' => 'U',
            b'F' => 'F',
            _ => return Err(unknown("grade", &part[12..13])),
        };
        let tape_reel = match &part[13..] {
            "" => false,
            "T" => true,
            other => return Err(unknown("carrier", other)),
        };

        Ok(PartDescriptor {
            pin_count,
            package,
            memory,
            variant,
            grade,
            tape_reel,
        })
    }

    /// Re-encode the decoded fields into the canonical part number.
    pub fn part_number(&self) -> String {
        format!(
            "{}{}{}{}-{}{}{}",
            SERIES,
            self.pin_count.code(),
            self.memory.code(),
            self.variant,
            self.package.code(),
            self.grade,
            if self.tape_reel { "T" } else { "" },
        )
    }

    pub fn series(&self) -> &'static str {
        SERIES
    }

    /// Physical pin count of the actual package. WLCSP bodies carry their
    /// own counts (35 and 45 balls) rather than the nominal class count.
    pub fn physical_pins(&self) -> u32 {
        match (self.package, self.pin_count) {
            (PackageCode::Wlcsp, PinCountClass::Small) => 35,
            (PackageCode::Wlcsp, PinCountClass::Medium) => 45,
            // Large + Wlcsp is rejected at decode time
            _ => self.pin_count.pins(),
        }
    }

    /// Human package name with pin count, e.g. "TQFP32" or "UFBGA64".
    pub fn package_label(&self) -> String {
        format!("{}{}", self.package.name(), self.physical_pins())
    }

    pub fn flash_label(&self) -> &'static str {
        self.memory.flash_label()
    }

    pub fn ram_label(&self) -> &'static str {
        self.memory.ram_label()
    }

    pub fn packaging_label(&self) -> &'static str {
        if self.tape_reel {
            "Tape and Reel"
        } else {
            "Tray"
        }
    }

    /// Normalized pinout-table key, e.g. "64-quad" or "35-chip-scale".
    pub fn pinout_key(&self) -> String {
        format!("{}-{}", self.physical_pins(), self.package.shape())
    }

    /// Symbol-identity key for alias grouping: the fixed-width identity
    /// prefix (series, pin-count class, flash size, variant) plus the
    /// package letter. Grade and carrier deliberately excluded.
    pub fn alias_key(&self) -> String {
        format!(
            "{}{}{}{}{}",
            SERIES,
            self.pin_count.code(),
            self.memory.code(),
            self.variant,
            self.package.code(),
        )
    }

    pub fn family_label(&self) -> &'static str {
        "SAM D21"
    }

    pub fn speed_label(&self) -> &'static str {
        "48MHz"
    }

    pub fn datasheet_url(&self) -> &'static str {
        "http://www.atmel.com/Images/Atmel-42181-SAM-D21_Datasheet.pdf"
    }
}

impl std::fmt::Display for PartDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.part_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_part_number() {
        let part = PartDescriptor::decode("SAMD21J18A-AUT").unwrap();
        assert_eq!(part.pin_count, PinCountClass::Large);
        assert_eq!(part.memory, MemoryCode::F18);
        assert_eq!(part.variant, 'A');
        assert_eq!(part.package, PackageCode::Tqfp);
        assert_eq!(part.grade, 'U');
        assert!(part.tape_reel);
    }

    #[test]
    fn reencodes_to_original() {
        for pn in ["SAMD21J18A-AUT", "SAMD21E15B-MF", "SAMD21G16A-UU"] {
            let part = PartDescriptor::decode(pn).unwrap();
            assert_eq!(part.part_number(), pn);
        }
    }

    #[test]
    fn package_labels() {
        let e_tqfp = PartDescriptor::decode("SAMD21E15A-AU").unwrap();
        assert_eq!(e_tqfp.package_label(), "TQFP32");

        let j_ufbga = PartDescriptor::decode("SAMD21J18A-CU").unwrap();
        assert_eq!(j_ufbga.package_label(), "UFBGA64");

        let e_wlcsp = PartDescriptor::decode("SAMD21E16A-UU").unwrap();
        assert_eq!(e_wlcsp.package_label(), "WLCSP35");

        let g_wlcsp = PartDescriptor::decode("SAMD21G16A-UU").unwrap();
        assert_eq!(g_wlcsp.package_label(), "WLCSP45");
    }

    #[test]
    fn memory_labels() {
        let part = PartDescriptor::decode("SAMD21J18A-AU").unwrap();
        assert_eq!(part.flash_label(), "256KB");
        assert_eq!(part.ram_label(), "32KB");

        let part = PartDescriptor::decode("SAMD21E15A-AU").unwrap();
        assert_eq!(part.flash_label(), "32KB");
        assert_eq!(part.ram_label(), "4KB");
    }

    #[test]
    fn packaging_label_follows_carrier() {
        let tray = PartDescriptor::decode("SAMD21J18A-AU").unwrap();
        assert_eq!(tray.packaging_label(), "Tray");
        let reel = PartDescriptor::decode("SAMD21J18A-AUT").unwrap();
        assert_eq!(reel.packaging_label(), "Tape and Reel");
    }

    #[test]
    fn pinout_keys() {
        assert_eq!(
            PartDescriptor::decode("SAMD21J18A-AU").unwrap().pinout_key(),
            "64-quad"
        );
        assert_eq!(
            PartDescriptor::decode("SAMD21J18A-MU").unwrap().pinout_key(),
            "64-quad"
        );
        assert_eq!(
            PartDescriptor::decode("SAMD21J18A-CU").unwrap().pinout_key(),
            "64-grid"
        );
        assert_eq!(
            PartDescriptor::decode("SAMD21E15A-UU").unwrap().pinout_key(),
            "35-chip-scale"
        );
    }

    #[test]
    fn rejects_unknown_series() {
        assert!(matches!(
            PartDescriptor::decode("STM32F411CEU6"),
            Err(DecodeError::UnknownSeries { .. })
        ));
        assert!(matches!(
            PartDescriptor::decode(""),
            Err(DecodeError::UnknownSeries { .. })
        ));
        assert!(matches!(
            PartDescriptor::decode("SÄMD21J18A-AU"),
            Err(DecodeError::UnknownSeries { .. })
        ));
    }

    #[test]
    fn rejects_unknown_positional_codes() {
        // pin-count letter
        assert!(matches!(
            PartDescriptor::decode("SAMD21X18A-AU"),
            Err(DecodeError::UnknownCode { field: "pin count", .. })
        ));
        // flash digits
        assert!(matches!(
            PartDescriptor::decode("SAMD21J14A-AU"),
            Err(DecodeError::UnknownCode { field: "flash size", .. })
        ));
        // missing separator
        assert!(matches!(
            PartDescriptor::decode("SAMD21J18AXAU"),
            Err(DecodeError::UnknownCode { field: "separator", .. })
        ));
        // package letter
        assert!(matches!(
            PartDescriptor::decode("SAMD21J18A-ZU"),
            Err(DecodeError::UnknownCode { field: "package", .. })
        ));
        // grade letter
        assert!(matches!(
            PartDescriptor::decode("SAMD21J18A-AX"),
            Err(DecodeError::UnknownCode { field: "grade", .. })
        ));
        // trailing junk after the carrier position
        assert!(matches!(
            PartDescriptor::decode("SAMD21J18A-AUTT"),
            Err(DecodeError::UnknownCode { field: "carrier", .. })
        ));
        // truncated suffix
        assert!(matches!(
            PartDescriptor::decode("SAMD21J18"),
            Err(DecodeError::UnknownCode { field: "suffix", .. })
        ));
    }

    #[test]
    fn rejects_packages_the_family_is_not_built_in() {
        // 64-pin die has no WLCSP option
        assert!(matches!(
            PartDescriptor::decode("SAMD21J18A-UU"),
            Err(DecodeError::UnknownCode { field: "package", .. })
        ));
        // UFBGA only exists at 64 pins
        assert!(matches!(
            PartDescriptor::decode("SAMD21E15A-CU"),
            Err(DecodeError::UnknownCode { field: "package", .. })
        ));
    }

    #[test]
    fn alias_key_ignores_grade_and_carrier() {
        let a = PartDescriptor::decode("SAMD21J18A-AU").unwrap();
        let b = PartDescriptor::decode("SAMD21J18A-AFT").unwrap();
        assert_eq!(a.alias_key(), b.alias_key());

        let other_package = PartDescriptor::decode("SAMD21J18A-MU").unwrap();
        assert_ne!(a.alias_key(), other_package.alias_key());
    }
}
