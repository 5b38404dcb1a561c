use std::path::PathBuf;

use palc::{Parser, Subcommand};

use crate::{Shoebill, reader::DEFAULT_CHUNK_SIZE};

/// Interpreter for the shoebill language.
#[derive(Parser)]
#[command(name = "shoebill", after_long_help = "Set RUST_LOG (e.g. RUST_LOG=shoebill=debug) to trace the pipeline.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file, streamed in chunks
	File {
		path:       PathBuf,
		/// Bytes read per chunk, 4096 when omitted
		#[arg(long)]
		chunk_size: Option<usize>,
	},
	/// Start the interactive prompt
	Repl,
}

impl Mode {
	/// The driver configured for this mode.
	pub fn shoebill(&self) -> Shoebill {
		match self {
			Mode::File { chunk_size, .. } => Shoebill::with_chunk_size(chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)),
			Mode::Repl => Shoebill::new(),
		}
	}
}
