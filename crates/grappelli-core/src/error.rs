//! Error types for table configuration and orchestration

use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised by table configuration and orchestration
///
/// Untrusted input (filter text, pagination indices, sort ids) never produces
/// an error: it is sanitized and clamped instead. These variants cover
/// programmer-level misconfiguration and aborted structural operations.
#[derive(Debug, Error)]
pub enum TableError {
	/// The table was constructed with a structurally invalid configuration
	#[error("Invalid table configuration: {0}")]
	InvalidConfiguration(String),

	/// A column id was not found in the current column set
	#[error("Unknown column: {0}")]
	UnknownColumn(String),

	/// A column reorder referenced an id absent from the current order
	#[error("Reorder aborted: id '{0}' is not present in the current order")]
	ReorderAborted(String),
}
