use clap::Parser;
use force_remove::{run, CleanupOptions, DEFAULT_FALLBACK_FILE};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "force-remove")]
#[command(
	about = "Best-effort forced removal of a directory tree, with a rename fallback for a stuck file"
)]
struct Cli {
	/// Directory to remove
	path: PathBuf,

	/// File inside the target to rename to `.disabled` if removal fails
	#[arg(long, default_value = DEFAULT_FALLBACK_FILE)]
	fallback_file: String,

	/// Enable verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Initialize tracing; diagnostics go to stderr so the status transcript
	// on stdout stays clean
	let level = if cli.verbose {
		Level::DEBUG
	} else {
		Level::INFO
	};
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.init();

	let options = CleanupOptions {
		target: cli.path,
		fallback_file: cli.fallback_file,
	};
	debug!("starting cleanup of {}", options.target.display());

	let mut stdout = std::io::stdout();
	let report = run(&options, &mut stdout)?;
	debug!("cleanup finished: {:?}", report);

	// Removal and rename failures were already reported line by line and do
	// not affect the exit status
	Ok(())
}
