//! File upload validation
//!
//! Rejects files over 10 MiB or whose declared MIME type is outside an
//! explicit allow-list (common image types, PDF, CSV, Excel). Unlike the
//! other sanitizers this one reports its reason, so the UI can display a
//! localized message.

use thiserror::Error;

/// Largest accepted upload, in bytes (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for uploads
pub const ALLOWED_MIME_TYPES: &[&str] = &[
	"image/jpeg",
	"image/png",
	"image/gif",
	"image/webp",
	"application/pdf",
	"text/csv",
	"application/vnd.ms-excel",
	"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Why an upload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileUploadError {
	/// The file exceeds [`MAX_UPLOAD_BYTES`]
	#[error("File exceeds the maximum size of {max} bytes (got {size})")]
	TooLarge {
		/// Declared file size
		size: u64,
		/// Allowed maximum
		max: u64,
	},

	/// The declared MIME type is not in the allow-list
	#[error("MIME type '{0}' is not allowed")]
	DisallowedMimeType(String),
}

/// Outcome of [`validate_file_upload`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUploadCheck {
	/// Whether the file may be accepted
	pub is_valid: bool,
	/// Rejection reason when `is_valid` is `false`
	pub error: Option<FileUploadError>,
}

impl FileUploadCheck {
	fn ok() -> Self {
		Self {
			is_valid: true,
			error: None,
		}
	}

	fn rejected(error: FileUploadError) -> Self {
		Self {
			is_valid: false,
			error: Some(error),
		}
	}
}

/// Validates a file upload by declared MIME type and size.
///
/// # Examples
///
/// ```
/// use grappelli_sanitize::{validate_file_upload, MAX_UPLOAD_BYTES};
///
/// assert!(validate_file_upload("image/png", 1024).is_valid);
/// assert!(!validate_file_upload("application/x-sh", 1024).is_valid);
/// assert!(!validate_file_upload("image/png", MAX_UPLOAD_BYTES + 1).is_valid);
/// ```
pub fn validate_file_upload(mime_type: &str, size: u64) -> FileUploadCheck {
	if size > MAX_UPLOAD_BYTES {
		return FileUploadCheck::rejected(FileUploadError::TooLarge {
			size,
			max: MAX_UPLOAD_BYTES,
		});
	}
	let normalized = mime_type.trim().to_ascii_lowercase();
	if !ALLOWED_MIME_TYPES.contains(&normalized.as_str()) {
		return FileUploadCheck::rejected(FileUploadError::DisallowedMimeType(normalized));
	}
	FileUploadCheck::ok()
}
