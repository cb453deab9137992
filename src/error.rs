use thiserror::Error;

/// Errors raised by the two cleanup phases.
///
/// Each phase catches its own variant internally: a `Remove` error triggers a
/// retry, a `Rename` error is reported once and dropped. Neither ever escapes
/// to the process boundary; only sink I/O errors propagate.
#[derive(Error, Debug)]
pub enum CleanupError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to remove {path}: {source}")]
	Remove {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to rename {path}: {source}")]
	Rename {
		path: String,
		#[source]
		source: std::io::Error,
	},
}

impl CleanupError {
	/// Check if this error indicates that the operation should be retried
	pub fn is_retryable(&self) -> bool {
		match self {
			// Every deletion failure is treated as transient and retried
			// up to the attempt cap
			CleanupError::Remove { .. } => true,

			// The fallback rename is attempted exactly once
			CleanupError::Rename { .. } => false,

			CleanupError::Io(_) => false,
		}
	}

	/// Check whether the underlying OS error reports the path as busy or
	/// locked by another process
	pub fn is_busy(&self) -> bool {
		match self {
			CleanupError::Remove { source, .. } | CleanupError::Rename { source, .. } => {
				source.kind() == std::io::ErrorKind::ResourceBusy
			}
			CleanupError::Io(_) => false,
		}
	}

	/// Get error category for logging
	pub fn category(&self) -> &'static str {
		match self {
			CleanupError::Io(_) => "io",
			CleanupError::Remove { .. } => "remove",
			CleanupError::Rename { .. } => "rename",
		}
	}
}

pub type Result<T> = std::result::Result<T, CleanupError>;
