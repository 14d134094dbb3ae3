//! Batch generation shared by the CLI and any other front end.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::alias::group_aliases;
use crate::emit::{DocWriter, SymbolWriter, DOC_FOOTER, DOC_HEADER, LIB_FOOTER, LIB_HEADER};
use crate::layout::{LayoutEngine, LayoutError};
use crate::part::{DecodeError, PartDescriptor};
use crate::tables::{function_table, known_parts, pinout_table};

#[derive(Debug, thiserror::Error)]
pub enum SamSymError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Batch policy for symbol classes whose package has no pinout table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPinout {
    /// Log and move on; the tables are only partially populated.
    #[default]
    Skip,
    /// Treat a missing pinout as fatal for the whole batch.
    Fail,
}

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub on_missing_pinout: MissingPinout,
    /// Pin the header timestamp; `None` means now.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Counts from one generation run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GenerateStats {
    pub parts: usize,
    pub classes: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// The two output streams of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedLibrary {
    /// Symbol library (`.lib`) text.
    pub lib: String,
    /// Documentation library (`.dcm`) text.
    pub dcm: String,
    pub stats: GenerateStats,
}

impl GeneratedLibrary {
    /// Write `<name>.lib` and `<name>.dcm` into `dir`, creating it if
    /// needed. Returns the two paths written.
    pub fn write_to(&self, dir: &Path, name: &str) -> Result<(PathBuf, PathBuf), SamSymError> {
        std::fs::create_dir_all(dir)?;
        let lib_path = dir.join(format!("{}.lib", name));
        let dcm_path = dir.join(format!("{}.dcm", name));
        std::fs::write(&lib_path, &self.lib)?;
        std::fs::write(&dcm_path, &self.dcm)?;
        Ok((lib_path, dcm_path))
    }
}

/// Core generation API used by the CLI.
pub struct SamSymCore;

impl SamSymCore {
    /// Generate the `.lib` and `.dcm` streams for every known part number.
    pub fn generate_library(options: GenerateOptions) -> Result<GeneratedLibrary, SamSymError> {
        let parts = known_parts()
            .iter()
            .map(|pn| PartDescriptor::decode(pn))
            .collect::<Result<Vec<_>, _>>()?;
        Self::generate_for(parts, options)
    }

    /// Generate for a single part number; no alias pass.
    pub fn generate_part(
        part_number: &str,
        options: GenerateOptions,
    ) -> Result<GeneratedLibrary, SamSymError> {
        let part = PartDescriptor::decode(part_number)?;
        Self::generate_for(vec![part], options)
    }

    /// Generate for an explicit descriptor list: group aliases, lay out and
    /// emit one symbol per class plus one documentation block per member.
    pub fn generate_for(
        parts: Vec<PartDescriptor>,
        options: GenerateOptions,
    ) -> Result<GeneratedLibrary, SamSymError> {
        let writer = match options.timestamp {
            Some(ts) => SymbolWriter::with_timestamp(ts),
            None => SymbolWriter::new(),
        };
        let total = parts.len();
        let classes = group_aliases(parts);

        let mut lib = String::from(LIB_HEADER);
        let mut dcm = String::from(DOC_HEADER);
        let mut emitted = 0;
        let mut skipped = 0;
        for class in &classes {
            let rep = class.representative();
            let layout = match LayoutEngine::build(rep, pinout_table(), function_table()) {
                Ok(layout) => layout,
                Err(e @ LayoutError::UnknownPinout { .. })
                    if options.on_missing_pinout == MissingPinout::Skip =>
                {
                    tracing::warn!("skipping {}: {}", rep.part_number(), e);
                    skipped += 1;
                    continue;
                }
                // UnknownSignal means the pinout and function tables
                // disagree; that is never skippable.
                Err(e) => return Err(e.into()),
            };
            lib.push_str(&writer.emit(rep, class.aliases(), &layout));
            for member in class.members() {
                dcm.push_str(&DocWriter::emit(member));
            }
            emitted += 1;
        }
        lib.push_str(LIB_FOOTER);
        dcm.push_str(DOC_FOOTER);

        let stats = GenerateStats {
            parts: total,
            classes: classes.len(),
            emitted,
            skipped,
        };
        tracing::info!(
            "emitted {} symbols ({} classes skipped) for {} part numbers",
            stats.emitted,
            stats.skipped,
            stats.parts
        );
        Ok(GeneratedLibrary { lib, dcm, stats })
    }
}
