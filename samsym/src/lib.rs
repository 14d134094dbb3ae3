//! samsym - KiCad symbol library generator for Atmel SAM D21 microcontrollers
//!
//! This library decodes SAM D21 part numbers, lays their pins out into
//! two-column schematic symbols on a fixed grid, groups part numbers that
//! share a footprint under one aliased symbol, and serializes the result in
//! the KiCad legacy `.lib`/`.dcm` library formats.
//!
//! # Quick Start
//!
//! ```no_run
//! use samsym::{GenerateOptions, SamSymCore};
//!
//! let library = SamSymCore::generate_library(GenerateOptions::default()).unwrap();
//! print!("{}", library.lib);
//! ```
//!
//! # Pipeline
//!
//! - **Part decoding**: fixed-offset slicing of the part-number encoding
//! - **Layout**: supply/control pins on the left (misc / power / ground
//!   clusters separated by gaps), port pins on the right with their full
//!   alternate-function chain
//! - **Alias grouping**: parts differing only in grade or carrier share a
//!   symbol
//! - **Emission**: byte-exact legacy library records

pub mod alias;
pub mod core;
pub mod emit;
pub mod layout;
pub mod part;
pub mod tables;

// Re-export main types
pub use crate::core::{
    GenerateOptions, GenerateStats, GeneratedLibrary, MissingPinout, SamSymCore, SamSymError,
};
pub use alias::{group_aliases, AliasClass};
pub use emit::{DocWriter, SymbolWriter};
pub use layout::{Layout, LayoutEngine, LayoutError, LeftSlot, PinEntry, PinKind};
pub use part::{DecodeError, MemoryCode, PackageCode, PartDescriptor, PinCountClass};
pub use tables::{function_table, known_parts, pinout_table, FunctionTable, PinoutTable};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        GenerateOptions, GeneratedLibrary, MissingPinout, PartDescriptor, SamSymCore, SamSymError,
    };
}
