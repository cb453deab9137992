//! Orchestration of the two cleanup phases.

use crate::error::Result;
use crate::fallback::{disable_file, RenameOutcome};
use crate::remover::{force_remove, RemoveOutcome, RetryPolicy};
use std::io::Write;
use std::path::PathBuf;

/// What to clean up and which file to disable if removal fails
#[derive(Debug, Clone)]
pub struct CleanupOptions {
	/// Directory tree to remove
	pub target: PathBuf,
	/// File inside `target` to rename to `.disabled` if it survives
	pub fallback_file: String,
}

/// Outcome of a full run, one field per phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
	pub removal: RemoveOutcome,
	pub rename: RenameOutcome,
}

/// Run the removal loop, then the fallback rename, in order.
///
/// The fallback runs regardless of how the removal ended; when the tree was
/// fully removed the fallback file is gone with it and the rename phase is a
/// silent no-op. No failure in either phase escapes as an error, so the
/// process exits normally on every path.
pub fn run(options: &CleanupOptions, out: &mut dyn Write) -> Result<CleanupReport> {
	run_with_policy(options, &RetryPolicy::default(), out)
}

/// Same as [`run`] with an explicit retry policy
pub fn run_with_policy(
	options: &CleanupOptions, policy: &RetryPolicy, out: &mut dyn Write,
) -> Result<CleanupReport> {
	let removal = force_remove(&options.target, policy, out)?;
	let rename = disable_file(&options.target, &options.fallback_file, out)?;
	Ok(CleanupReport { removal, rename })
}
