use std::fmt::Display;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub r#type: TokenType,
	pub lexeme: String,
	pub line:   usize,
}

impl Token {
	pub fn new(r#type: TokenType, lexeme: impl Into<String>, line: usize) -> Self {
		Self { r#type, lexeme: lexeme.into(), line }
	}
}

/// The different kinds of tokens. The literal text lives on [`Token`], so a
/// kind is a plain tag that can key the parser's dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// A character the language does not know, a lone `&`/`|` or an
	/// unterminated string.
	Illegal,
	/// End of input, repeated forever once the chunk stream is closed.
	Eof,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// Integer literal, e.g. `123`.
	IntegerLiteral,
	/// String literal, e.g. `"hello"`.
	StringLiteral,
	/// Assign `=`.
	Assign,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Percent `%`.
	Percent,
	/// Bang `!`.
	Bang,
	/// Less than `<`.
	Less,
	/// Greater than `>`.
	Greater,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Logical and `&&`.
	And,
	/// Logical or `||`.
	Or,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Colon `:`.
	Colon,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Left bracket `[`.
	LeftBracket,
	/// Right bracket `]`.
	RightBracket,
	/// Function keyword `fn`.
	Function,
	/// Binding keyword `let`.
	Let,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// If keyword.
	If,
	/// Else keyword.
	Else,
	/// Return keyword.
	Return,
}

impl TokenType {
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"fn" => TokenType::Function,
			"let" => TokenType::Let,
			"true" => TokenType::True,
			"false" => TokenType::False,
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"return" => TokenType::Return,
			_ => TokenType::Identifier,
		}
	}
}

impl Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		#[rustfmt::skip]
		let name = match self {
			Illegal => "ILLEGAL",
			Eof => "EOF",
			Identifier => "IDENT",
			IntegerLiteral => "INT",
			StringLiteral => "STRING",
			Assign => "=",
			Plus => "+",
			Minus => "-",
			Star => "*",
			Slash => "/",
			Percent => "%",
			Bang => "!",
			Less => "<",
			Greater => ">",
			EqualEqual => "==",
			BangEqual => "!=",
			And => "&&",
			Or => "||",
			Comma => ",",
			Semicolon => ";",
			Colon => ":",
			LeftParen => "(",
			RightParen => ")",
			LeftBrace => "{",
			RightBrace => "}",
			LeftBracket => "[",
			RightBracket => "]",
			Function => "FUNCTION",
			Let => "LET",
			True => "TRUE",
			False => "FALSE",
			If => "IF",
			Else => "ELSE",
			Return => "RETURN",
		};
		write!(f, "{name}")
	}
}
