//! Bounded retry loop for the forced directory removal.

use crate::error::{CleanupError, Result};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for the removal loop.
///
/// The defaults (5 attempts, 1 second apart) are the tool's fixed behavior;
/// the policy is not exposed on the command line. Tests construct shorter
/// delays directly.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
	pub max_attempts: u32,
	pub delay: Duration,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self { max_attempts: 5, delay: Duration::from_secs(1) }
	}
}

/// How the removal loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
	/// The target was absent when checked; nothing was deleted
	Missing,
	/// The tree was deleted on the given attempt (1-based)
	Removed { attempts: u32 },
	/// Every attempt failed; the target may still exist
	Failed { attempts: u32 },
}

/// One recursive deletion attempt
fn remove_attempt(target: &Path) -> Result<()> {
	std::fs::remove_dir_all(target)
		.map_err(|source| CleanupError::Remove { path: target.display().to_string(), source })
}

/// Try to delete `target` and everything under it, retrying on failure.
///
/// Status lines are written to `out` as they happen. Deletion errors never
/// escape the loop; each one is reported, followed by a blocking pause, until
/// the attempt cap is reached. No pause follows the final attempt.
pub fn force_remove(
	target: &Path, policy: &RetryPolicy, out: &mut dyn Write,
) -> Result<RemoveOutcome> {
	writeln!(out, "Attempting to remove {}", target.display())?;

	for attempt in 1..=policy.max_attempts {
		// Checked each iteration: a partially deleted tree can disappear
		// between attempts
		if !target.exists() {
			writeln!(out, "Target does not exist")?;
			debug!("target {} absent on attempt {}", target.display(), attempt);
			return Ok(RemoveOutcome::Missing);
		}

		match remove_attempt(target) {
			Ok(()) => {
				writeln!(out, "Successfully removed directory")?;
				debug!("removed {} on attempt {}", target.display(), attempt);
				return Ok(RemoveOutcome::Removed { attempts: attempt });
			}
			Err(error) => {
				writeln!(out, "Attempt {} failed: {}", attempt, error)?;
				warn!(
					"remove attempt {}/{} failed for {}: {}",
					attempt,
					policy.max_attempts,
					target.display(),
					error
				);

				if attempt < policy.max_attempts {
					std::thread::sleep(policy.delay);
				}
			}
		}
	}

	// The per-attempt messages are the only failure output
	Ok(RemoveOutcome::Failed { attempts: policy.max_attempts })
}
