//! Static data tables: pinouts, alternate functions, and the known-part
//! enumeration.
//!
//! The pinout and function tables are embedded JSON parsed once on first
//! use; they are the two external data collaborators the layout engine
//! consumes. A missing pinout key is an expected condition (not every
//! package variant has been entered yet); a missing function entry for a
//! port pin is a data-integrity bug.

pub mod builtin;
pub mod parts;

// Re-exports for convenience
pub use builtin::{function_table, pinout_table, FunctionTable, PinoutTable};
pub use parts::known_parts;
