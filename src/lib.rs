mod cleanup;
mod error;
mod fallback;
mod remover;

pub use cleanup::{run, run_with_policy, CleanupOptions, CleanupReport};
pub use error::{CleanupError, Result};
pub use fallback::{disable_file, disabled_name, RenameOutcome, DEFAULT_FALLBACK_FILE};
pub use remover::{force_remove, RemoveOutcome, RetryPolicy};
