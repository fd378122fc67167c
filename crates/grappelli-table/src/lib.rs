//! # Grappelli Table
//!
//! The table orchestrator: wires the state slots, sanitizers, filter
//! predicates, fuzzy scorer, pagination windower and translator into one
//! [`Table`] instance driven by a declarative [`TableOptions`] configuration.
//!
//! All row fetching, rendering and I/O stays in caller code; the orchestrator
//! reconciles state, sanitizes every untrusted input on its way into a state
//! slot, and resolves the client-side row model (or packages a
//! [`LazyLoadEvent`](grappelli_core::LazyLoadEvent) in lazy mode).
//!
//! ## Example
//!
//! ```
//! use grappelli_core::{ColumnDefinition, FilterValue};
//! use grappelli_table::{Table, TableOptions};
//! use serde_json::{json, Value};
//!
//! let rows = vec![
//!     json!({"firstName": "Joanna"}),
//!     json!({"firstName": "Pierre"}),
//! ];
//! let columns: Vec<ColumnDefinition<Value>> =
//!     vec![ColumnDefinition::field("firstName", "First name")];
//!
//! let table = Table::new(TableOptions::new(rows, columns)).unwrap();
//! table
//!     .set_column_filter("firstName", FilterValue::Text("jo".to_string()))
//!     .unwrap();
//! assert_eq!(table.row_model().len(), 1);
//! ```

pub mod options;
pub mod table;

pub use options::{Controlled, TableOptions};
pub use table::Table;
