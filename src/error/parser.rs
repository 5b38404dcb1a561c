use crate::scanner::TokenType;

/// A parse diagnostic. Displays as the bare message; the source line is kept
/// alongside for callers that want to show it.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{}", .r#type)]
pub struct ParseError {
	line:   usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// The lookahead token was not the one the grammar requires here.
	UnexpectedToken { expected: TokenType, got: TokenType },
	/// No expression can start with this token.
	NoPrefixParseFunction(TokenType),
	/// An integer token whose text is not a valid 64-bit integer.
	InvalidInteger(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, got } => {
				write!(f, "expected next token to be {expected}, got {got} instead")
			}
			NoPrefixParseFunction(token) => write!(f, "no prefix parse function for {token} found"),
			InvalidInteger(literal) => write!(f, "could not parse {literal:?} as integer"),
		}
	}
}
