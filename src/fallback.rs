//! Fallback rename for a file the removal loop could not delete.
//!
//! Renaming to a `.disabled` suffix is the non-destructive mitigation when
//! the directory tree itself refuses to go away.

use crate::error::{CleanupError, Result};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File the fallback targets when none is named on the command line
pub const DEFAULT_FALLBACK_FILE: &str = "route.ts";

/// Suffix appended to the full file name when disabling it
pub const DISABLED_SUFFIX: &str = ".disabled";

/// Outcome of the fallback phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
	/// The fallback file was not there; nothing was attempted
	Missing,
	/// The file was renamed out of the way
	Renamed { to: PathBuf },
	/// The single rename attempt failed; the file is unchanged
	Failed,
}

/// Compute the `.disabled` sibling for a path.
///
/// The suffix is appended to the complete file name, so `route.ts` becomes
/// `route.ts.disabled` rather than replacing the extension.
pub fn disabled_name(path: &Path) -> PathBuf {
	let mut name = OsString::from(path.as_os_str());
	name.push(DISABLED_SUFFIX);
	PathBuf::from(name)
}

fn rename_attempt(from: &Path, to: &Path) -> Result<()> {
	std::fs::rename(from, to)
		.map_err(|source| CleanupError::Rename { path: from.display().to_string(), source })
}

/// If `file_name` still exists under `target`, rename it to its `.disabled`
/// sibling. Runs once; a failure is reported and swallowed, never retried.
/// Produces no output when the file is already gone.
pub fn disable_file(
	target: &Path, file_name: &str, out: &mut dyn Write,
) -> Result<RenameOutcome> {
	let file_target = target.join(file_name);

	if !file_target.exists() {
		debug!("{} not present, nothing to disable", file_target.display());
		return Ok(RenameOutcome::Missing);
	}

	writeln!(
		out,
		"File {} still exists. Attempting move...",
		file_target.display()
	)?;

	let dest = disabled_name(&file_target);
	match rename_attempt(&file_target, &dest) {
		Ok(()) => {
			writeln!(out, "Successfully renamed file")?;
			debug!("renamed {} to {}", file_target.display(), dest.display());
			Ok(RenameOutcome::Renamed { to: dest })
		}
		Err(error) => {
			writeln!(out, "Rename failed: {}", error)?;
			if error.is_busy() {
				writeln!(out, "Reason: file is busy or locked by another process.")?;
			}
			warn!("fallback rename failed for {}: {}", file_target.display(), error);
			Ok(RenameOutcome::Failed)
		}
	}
}
