use std::{io::{BufRead, Write}, path::Path};

use anyhow::{Context, anyhow};

use crate::{ShoebillError, interpreter::{Interpreter, value::Value}, parser::Parser, reader::{ChunkReader, DEFAULT_CHUNK_SIZE}, scanner::Scanner, statement::Program};

const PROMPT: &str = ">> ";

/// Shoebill wires the pipeline together: chunk producer, scanner, parser and
/// interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shoebill {
	chunk_size: usize,
}

impl Default for Shoebill {
	fn default() -> Self { Self { chunk_size: DEFAULT_CHUNK_SIZE } }
}

impl Shoebill {
	pub fn new() -> Self { Self::default() }

	/// Read files in chunks of `chunk_size` bytes instead of the default.
	pub fn with_chunk_size(chunk_size: usize) -> Self { Self { chunk_size } }

	/// Stream the file at `path` through the pipeline and evaluate it.
	#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<Value>, ShoebillError> {
		let (chunks, producer) = ChunkReader::with_chunk_size(self.chunk_size).open(path)?;
		let program = parse(Parser::new(Scanner::new(chunks)));
		// A read failure truncates the source, so it outranks any parse error.
		producer.join().map_err(|_| anyhow!("Reader thread panicked"))??;
		evaluate(program?)
	}

	/// Parse and evaluate a complete program held in memory.
	pub fn run(&self, source: &str) -> Result<Option<Value>, ShoebillError> {
		evaluate(parse(Parser::from_source(source))?)
	}

	/// Run the REPL on stdin/stdout.
	pub fn run_prompt(&self) {
		let stdin = std::io::stdin();
		if let Err(e) = self.repl(stdin.lock(), std::io::stdout()) {
			eprintln!("Failed run prompt: {e:#}");
		}
	}

	/// Read-eval-print over any line source. Bindings persist from one line to
	/// the next. Ends on EOF or `exit`/`quit`.
	pub fn repl<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> anyhow::Result<()> {
		let mut interpreter = Interpreter::new();
		let mut line = String::new();
		loop {
			write!(output, "{PROMPT}")?;
			output.flush().context("Failed flush")?;
			line.clear();
			if input.read_line(&mut line).context("Failed read line")? == 0 {
				writeln!(output)?;
				break;
			}
			let source = line.trim();
			if source.eq_ignore_ascii_case("exit") || source.eq_ignore_ascii_case("quit") {
				break;
			}
			if source.is_empty() {
				continue;
			}

			let mut parser = Parser::from_source(source);
			let program = parser.parse_program();
			if !parser.errors().is_empty() {
				for error in parser.errors() {
					writeln!(output, "\tline {}: {error}", error.line())?;
				}
				continue;
			}
			match interpreter.interpret(&program) {
				Some(value) => writeln!(output, "{value}")?,
				None => writeln!(output, "{program}")?,
			}
		}
		Ok(())
	}
}

/// Parse to the end of input. The scanner drains its channel on the way.
fn parse(mut parser: Parser) -> Result<Program, ShoebillError> {
	let program = parser.parse_program();
	if parser.errors().is_empty() { Ok(program) } else { Err(ShoebillError::ParserErrors(parser.errors().to_vec())) }
}

fn evaluate(program: Program) -> Result<Option<Value>, ShoebillError> {
	match Interpreter::new().interpret(&program) {
		Some(Value::Error(message)) => Err(ShoebillError::RuntimeError(message)),
		result => Ok(result),
	}
}
