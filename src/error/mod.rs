pub mod interpreter;
pub mod parser;

use crate::error::parser::ParseError;

/// ShoebillError is the top-level error type for running a program.
#[derive(thiserror::Error, Debug)]
pub enum ShoebillError {
	/// Failure outside the language itself: I/O, the chunk producer thread
	#[error("Internal error: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// The program did not parse, evaluation was skipped
	#[error("Parser errors:\n{}", display_parse_errors(.0))]
	ParserErrors(Vec<ParseError>),
	/// The program evaluated to an error value
	#[error("Runtime error: {0}")]
	RuntimeError(String),
}

fn display_parse_errors(errors: &[ParseError]) -> String {
	errors.iter().map(|e| format!("\tline {}: {e}", e.line())).collect::<Vec<String>>().join("\n")
}
