//! The producer side of the streaming pipeline.
//!
//! A [`ChunkReader`] reads its source in fixed-size pieces on a separate
//! thread and hands them to the [`Scanner`](crate::scanner::Scanner) through a
//! bounded channel. Dropping the sender at the end of input closes the
//! channel, which the scanner sees as end of stream.

use std::{fs::File, io::{ErrorKind, Read}, path::Path, thread::{self, JoinHandle}};

use anyhow::Context;
use crossbeam::channel::{Receiver, bounded};
use tracing::{debug, trace};

/// Bytes per chunk when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
/// Chunks the producer may run ahead of the scanner.
pub const CHANNEL_CAPACITY: usize = 16;

/// Handle on a running producer. Joining yields the first I/O error it hit.
pub type Producer = JoinHandle<anyhow::Result<()>>;

#[derive(Debug, Clone, Copy)]
pub struct ChunkReader {
	chunk_size: usize,
}

impl Default for ChunkReader {
	fn default() -> Self { Self { chunk_size: DEFAULT_CHUNK_SIZE } }
}

impl ChunkReader {
	/// Chunks of at most `chunk_size` bytes. Zero is treated as one.
	pub fn with_chunk_size(chunk_size: usize) -> Self { Self { chunk_size: chunk_size.max(1) } }

	/// Open `path` and start streaming it.
	pub fn open(&self, path: impl AsRef<Path>) -> anyhow::Result<(Receiver<Vec<u8>>, Producer)> {
		let path = path.as_ref();
		let file = File::open(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		debug!(path = %path.display(), chunk_size = self.chunk_size, "streaming source file");
		self.spawn(file)
	}

	/// Stream any reader on a new thread.
	pub fn spawn<R: Read + Send + 'static>(&self, mut reader: R) -> anyhow::Result<(Receiver<Vec<u8>>, Producer)> {
		let (sender, receiver) = bounded(CHANNEL_CAPACITY);
		let chunk_size = self.chunk_size;
		let producer = thread::Builder::new()
			.name("shoebill-reader".into())
			.spawn(move || {
				let mut buffer = vec![0; chunk_size];
				let mut sent = 0usize;
				loop {
					let n = match reader.read(&mut buffer) {
						Ok(0) => break,
						Ok(n) => n,
						Err(e) if e.kind() == ErrorKind::Interrupted => continue,
						Err(e) => return Err(e).context("Failed read source chunk"),
					};
					if sender.send(buffer[..n].to_vec()).is_err() {
						debug!("scanner hung up, stop reading");
						break;
					}
					sent += 1;
					trace!(bytes = n, chunk = sent, "sent chunk");
				}
				debug!(chunks = sent, "end of source");
				Ok(())
			})
			.context("Failed spawn reader thread")?;
		Ok((receiver, producer))
	}
}
