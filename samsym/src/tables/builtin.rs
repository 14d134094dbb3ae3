//! Built-in pinout and alternate-function tables.
//!
//! Both tables are embedded as JSON and deserialized once into process-wide
//! statics. Pinouts are keyed by the normalized `<pins>-<shape>` string
//! produced by [`PartDescriptor::pinout_key`](crate::part::PartDescriptor::pinout_key),
//! e.g. "64-quad" for TQFP64/QFN64 (which share a pinout) or "64-grid" for
//! UFBGA64. Only the keys present in the JSON are populated; everything
//! else is reported as missing by `lookup`.

use std::collections::HashMap;
use std::sync::LazyLock;

// Embed the table JSON into the binary
const EMBEDDED_PINOUTS: &str = include_str!("../../tables/pinouts.json");
const EMBEDDED_FUNCTIONS: &str = include_str!("../../tables/functions.json");

#[derive(Debug, serde::Deserialize)]
struct PinoutRecord {
    key: String,
    // Kept as an ordered list of pairs: emission order is the table's
    // order, a hash map would scramble it.
    pins: Vec<(String, String)>,
}

/// Ordered physical-pin → signal-name mapping per populated package.
#[derive(Debug)]
pub struct PinoutTable {
    pinouts: Vec<PinoutRecord>,
}

impl PinoutTable {
    /// Build a table from explicit entries (tests, alternate data sources).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<(String, String)>)>,
    {
        PinoutTable {
            pinouts: entries
                .into_iter()
                .map(|(key, pins)| PinoutRecord { key, pins })
                .collect(),
        }
    }

    /// Look up the ordered pinout for a normalized key. `None` is an
    /// expected outcome for packages whose table has not been entered.
    pub fn lookup(&self, key: &str) -> Option<&[(String, String)]> {
        self.pinouts
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.pins.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pinouts.iter().map(|p| p.key.as_str())
    }
}

/// Short signal name → ordered alternate-function list.
#[derive(Debug, serde::Deserialize)]
pub struct FunctionTable(HashMap<String, Vec<String>>);

impl FunctionTable {
    /// Build a table from explicit entries (tests, alternate data sources).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        FunctionTable(entries.into_iter().collect())
    }

    /// Look up the alternate functions for a signal, in table order. A miss
    /// for an I/O-classified signal means the two tables disagree.
    pub fn lookup(&self, signal: &str) -> Option<&[String]> {
        self.0.get(signal).map(|f| f.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static PINOUTS: LazyLock<PinoutTable> = LazyLock::new(|| {
    match serde_json::from_str::<Vec<PinoutRecord>>(EMBEDDED_PINOUTS) {
        Ok(pinouts) => PinoutTable { pinouts },
        Err(e) => {
            tracing::warn!("failed to parse embedded pinout table: {}", e);
            PinoutTable {
                pinouts: Vec::new(),
            }
        }
    }
});

static FUNCTIONS: LazyLock<FunctionTable> = LazyLock::new(|| {
    match serde_json::from_str::<FunctionTable>(EMBEDDED_FUNCTIONS) {
        Ok(functions) => functions,
        Err(e) => {
            tracing::warn!("failed to parse embedded function table: {}", e);
            FunctionTable(HashMap::new())
        }
    }
});

/// The built-in pinout table.
pub fn pinout_table() -> &'static PinoutTable {
    &PINOUTS
}

/// The built-in alternate-function table.
pub fn function_table() -> &'static FunctionTable {
    &FUNCTIONS
}
