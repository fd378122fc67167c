//! Table orchestrator module.
//!
//! `TableOptions` configuration, the nine controlled state slots and the
//! `Table` instance that resolves the row model.

pub use grappelli_table::*;
