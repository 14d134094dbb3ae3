//! End-to-end batch generation tests

use chrono::{TimeZone, Utc};
use samsym::{
    group_aliases, known_parts, GenerateOptions, MissingPinout, PartDescriptor, SamSymCore,
    SamSymError,
};

#[test]
fn full_library_stats_and_framing() {
    let library = SamSymCore::generate_library(GenerateOptions::default()).unwrap();

    assert_eq!(library.stats.parts, 288);
    assert_eq!(library.stats.classes, 72);
    // only the quad packages have pinout tables: TQFP/QFN at 32 and 64
    // pins, i.e. 4 of the 9 classes per flash-size/variant combination
    assert_eq!(library.stats.emitted, 32);
    assert_eq!(library.stats.skipped, 40);

    assert!(library
        .lib
        .starts_with("EESchema-LIBRARY Version 2.3\n#encoding utf-8\n"));
    assert!(library.lib.ends_with("#\n#End Library\n"));
    assert!(library.dcm.starts_with("EESchema-DOCLIB  Version 2.0\n"));
    assert!(library.dcm.ends_with("#\n#End Doc Library\n"));

    let defs = library
        .lib
        .lines()
        .filter(|l| l.starts_with("DEF "))
        .count();
    assert_eq!(defs, 32);
    // one documentation block per member of every emitted class
    assert_eq!(library.dcm.matches("$CMP ").count(), 128);
}

#[test]
fn representative_carries_its_aliases() {
    let library = SamSymCore::generate_library(GenerateOptions::default()).unwrap();
    assert!(library.lib.contains("DEF SAMD21E15A-AU U 0 40 Y Y 1 F N"));
    assert!(library
        .lib
        .contains("ALIAS SAMD21E15A-AUT SAMD21E15A-AF SAMD21E15A-AFT"));
}

#[test]
fn every_part_lands_in_exactly_one_class() {
    let parts: Vec<PartDescriptor> = known_parts()
        .iter()
        .map(|pn| PartDescriptor::decode(pn).unwrap())
        .collect();
    let total = parts.len();
    let classes = group_aliases(parts);

    let grouped: usize = classes.iter().map(|c| c.members().len()).sum();
    assert_eq!(grouped, total);

    let mut seen = std::collections::HashSet::new();
    for class in &classes {
        let rep_key = class.representative().alias_key();
        for member in class.members() {
            // pairwise equivalent to the representative
            assert_eq!(member.alias_key(), rep_key);
            assert!(seen.insert(member.part_number()), "duplicate member");
        }
    }
    assert_eq!(seen.len(), total);
}

#[test]
fn strict_mode_fails_on_missing_pinout() {
    let options = GenerateOptions {
        on_missing_pinout: MissingPinout::Fail,
        ..Default::default()
    };
    let err = SamSymCore::generate_part("SAMD21G16A-AU", options).unwrap_err();
    assert!(matches!(err, SamSymError::Layout(_)));
    assert!(err.to_string().contains("SAMD21G16A-AU"));
    assert!(err.to_string().contains("48-quad"));
}

#[test]
fn skip_mode_counts_missing_pinouts() {
    let library =
        SamSymCore::generate_part("SAMD21G16A-AU", GenerateOptions::default()).unwrap();
    assert_eq!(library.stats.emitted, 0);
    assert_eq!(library.stats.skipped, 1);
}

#[test]
fn single_part_generation() {
    let options = GenerateOptions {
        timestamp: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    let library = SamSymCore::generate_part("SAMD21J18A-AU", options).unwrap();
    assert!(library.lib.contains("DEF SAMD21J18A-AU U 0 40 Y Y 1 F N"));
    assert!(!library.lib.contains("ALIAS"));
    assert!(library
        .lib
        .contains("# Generated by samsym on 2024-01-01T00:00:00Z"));
    assert_eq!(library.dcm.matches("$CMP ").count(), 1);
}

#[test]
fn decode_failure_propagates_with_part_number() {
    let err = SamSymCore::generate_part("STM32F411CEU6", GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, SamSymError::Decode(_)));
    assert!(err.to_string().contains("STM32F411CEU6"));
}

#[test]
fn write_to_creates_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let library =
        SamSymCore::generate_part("SAMD21J18A-AU", GenerateOptions::default()).unwrap();
    let (lib_path, dcm_path) = library.write_to(dir.path(), "atmel_samd21").unwrap();

    assert!(lib_path.ends_with("atmel_samd21.lib"));
    assert!(dcm_path.ends_with("atmel_samd21.dcm"));
    let lib_text = std::fs::read_to_string(&lib_path).unwrap();
    assert!(lib_text.contains("DEF SAMD21J18A-AU"));
    let dcm_text = std::fs::read_to_string(&dcm_path).unwrap();
    assert!(dcm_text.contains("$CMP SAMD21J18A-AU"));
}
