//! Common test utilities for the force-remove crate

#![allow(dead_code)]

use force_remove::RetryPolicy;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn setup_temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temp directory")
}

/// Create a test file with content
pub fn create_test_file(path: &Path, content: &str) -> std::io::Result<()> {
	std::fs::write(path, content)
}

/// Retry policy with the real attempt cap but short pauses
pub fn fast_policy() -> RetryPolicy {
	RetryPolicy { max_attempts: 5, delay: Duration::from_millis(10) }
}

/// Turn a captured output buffer into a string
pub fn transcript(buf: Vec<u8>) -> String {
	String::from_utf8(buf).expect("transcript should be valid UTF-8")
}

/// Count occurrences of a substring in the transcript
pub fn count_lines_containing(text: &str, needle: &str) -> usize {
	text.lines().filter(|line| line.contains(needle)).count()
}
