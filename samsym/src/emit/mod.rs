//! KiCad legacy library serialization.
//!
//! Two line-oriented text formats are produced: the symbol library itself
//! (`.lib`, `DEF`..`ENDDEF` entries) and the companion documentation
//! library (`.dcm`, `$CMP`..`$ENDCMP` blocks). Downstream tooling parses
//! these byte-for-byte, so whitespace and field order are fixed.

pub mod doc;
pub mod symbol;

// Re-exports for convenience
pub use doc::{DocWriter, DOC_FOOTER, DOC_HEADER};
pub use symbol::{SymbolWriter, LIB_FOOTER, LIB_HEADER};
