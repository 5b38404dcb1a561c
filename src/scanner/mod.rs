//! Turns a stream of byte chunks into tokens.
//!
//! The source never sits in memory as one string. A producer pushes byte
//! chunks through a channel and the scanner pulls them one at a time, keeping
//! exactly two buffers: the `current` chunk being scanned and the `shadow`
//! chunk it replaced. Chunk boundaries carry no meaning, so an identifier,
//! number or string may start in one chunk and end in the next. When the scan
//! cursor runs off the end of `current` in the middle of such a lexeme, the
//! next chunk is loaded, the old chunk becomes the `shadow`, and the partial
//! span left in the shadow is joined with the rest read from the new buffer.
//!
//! Tokens are produced on demand, one per [`Scanner::next_token`] call. Once
//! the channel is closed every further call yields `EOF`.
mod token;

use TokenType::*;
use crossbeam::channel::{Receiver, unbounded};
pub use token::*;
use tracing::{debug, trace};

/// A streaming scanner over byte chunks
pub struct Scanner {
	/// Incoming chunks, closed by the producer at end of input
	chunks:    Receiver<Vec<u8>>,
	/// The chunk under the cursor
	current:   Vec<u8>,
	/// The chunk before `current`, holds the head of a lexeme that straddles a
	/// boundary
	shadow:    Vec<u8>,
	/// Points at the next unread byte of `current`
	cursor:    usize,
	/// Set once the channel has been observed closed
	exhausted: bool,
	/// Tracks what source line the cursor is on so tokens know their location.
	line:      usize,
	/// Set once the iterator has handed out its `EOF`
	finished:  bool,
}

impl Scanner {
	pub fn new(chunks: Receiver<Vec<u8>>) -> Self {
		Self {
			chunks,
			current: Vec::new(),
			shadow: Vec::new(),
			cursor: 0,
			exhausted: false,
			line: 1,
			finished: false,
		}
	}

	/// Scan chunks that are already in memory.
	pub fn from_chunks<I>(chunks: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Vec<u8>>,
	{
		let (sender, receiver) = unbounded();
		for chunk in chunks {
			// The receiver is alive for the whole loop, so the send cannot fail.
			let _ = sender.send(chunk.into());
		}
		Self::new(receiver)
	}

	/// Scan a complete source as a single chunk, as the REPL does per line.
	pub fn from_source(source: &str) -> Self { Self::from_chunks([source.as_bytes()]) }

	/// Produce the next token. Returns `EOF` forever once input is exhausted.
	pub fn next_token(&mut self) -> Token {
		self.skip_whitespace();
		let line = self.line;
		let Some(byte) = self.peek() else {
			return Token::new(Eof, "", line);
		};

		match byte {
			b'"' => return self.string(line),
			b if b.is_ascii_digit() => return self.number(line),
			b if b.is_ascii_alphabetic() || b == b'_' => return self.identifier(line),
			_ => self.cursor += 1,
		}

		#[rustfmt::skip]
		let r#type = match byte {
			b'=' => if self.match_next(b'=') { EqualEqual } else { Assign },
			b'!' => if self.match_next(b'=') { BangEqual } else { Bang },
			b'&' => if self.match_next(b'&') { And } else { Illegal },
			b'|' => if self.match_next(b'|') { Or } else { Illegal },
			b'+' => Plus,
			b'-' => Minus,
			b'*' => Star,
			b'/' => Slash,
			b'%' => Percent,
			b'<' => Less,
			b'>' => Greater,
			b',' => Comma,
			b';' => Semicolon,
			b':' => Colon,
			b'(' => LeftParen,
			b')' => RightParen,
			b'{' => LeftBrace,
			b'}' => RightBrace,
			b'[' => LeftBracket,
			b']' => RightBracket,
			b if b.is_ascii() => Illegal,
			lead => return self.non_ascii(lead, line),
		};

		let lexeme = if r#type == Illegal { char::from(byte).to_string() } else { r#type.to_string() };
		Token::new(r#type, lexeme, line)
	}

	/// Skip spaces, tabs, carriage returns and newlines, counting lines.
	fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			match byte {
				b'\n' => self.line += 1,
				b' ' | b'\t' | b'\r' => {}
				_ => break,
			}
			self.cursor += 1;
		}
	}

	/// Look at the byte under the cursor, pulling the next chunk if the current
	/// one is used up. Only safe between lexemes.
	fn peek(&mut self) -> Option<u8> {
		if self.cursor >= self.current.len() && !self.load_buffer() {
			return None;
		}
		self.current.get(self.cursor).copied()
	}

	/// Match the next byte if it is the expected one
	fn match_next(&mut self, expected: u8) -> bool {
		matches!(self.peek(), Some(b) if b == expected && { self.cursor += 1; true })
	}

	/// Receive the next non-empty chunk and swap it in, keeping the previous
	/// chunk as the shadow buffer. Blocks until a chunk arrives or the channel
	/// closes.
	fn load_buffer(&mut self) -> bool {
		if self.exhausted {
			return false;
		}
		for chunk in self.chunks.iter() {
			if chunk.is_empty() {
				continue;
			}
			trace!(len = chunk.len(), line = self.line, "loaded chunk");
			self.shadow = std::mem::replace(&mut self.current, chunk);
			self.cursor = 0;
			return true;
		}
		debug!(line = self.line, "chunk stream closed");
		self.exhausted = true;
		false
	}

	/// Consume bytes while `predicate` holds and return them. This is where a
	/// lexeme crossing a chunk boundary is stitched back together.
	fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> Vec<u8> {
		let mut lexeme = Vec::new();
		let mut start = self.cursor;
		loop {
			match self.current.get(self.cursor) {
				Some(&byte) if predicate(byte) => self.cursor += 1,
				Some(_) => break,
				None => {
					if !self.load_buffer() {
						break;
					}
					lexeme.extend_from_slice(&self.shadow[start..]);
					start = 0;
				}
			}
		}
		lexeme.extend_from_slice(&self.current[start..self.cursor]);
		lexeme
	}

	/// Scan a string literal. An unterminated string swallows the rest of the
	/// input and comes back as an illegal token.
	fn string(&mut self, line: usize) -> Token {
		self.cursor += 1; // The opening "
		let bytes = self.take_while(|b| b != b'"');
		self.line += bytes.iter().filter(|&&b| b == b'\n').count();
		let value = String::from_utf8_lossy(&bytes).into_owned();
		if self.match_next(b'"') {
			Token::new(StringLiteral, value, line)
		} else {
			debug!(line, "unterminated string literal");
			Token::new(Illegal, format!("\"{value}"), line)
		}
	}

	/// Scan a run of digits and dots. The parser decides whether it is a valid
	/// integer.
	fn number(&mut self, line: usize) -> Token {
		let bytes = self.take_while(|b| b.is_ascii_digit() || b == b'.');
		Token::new(IntegerLiteral, String::from_utf8_lossy(&bytes), line)
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self, line: usize) -> Token {
		let bytes = self.take_while(|b| b.is_ascii_alphanumeric() || b == b'_');
		let text = String::from_utf8_lossy(&bytes).into_owned();
		Token::new(TokenType::keyword_or_identifier(&text), text, line)
	}

	/// A non-ASCII character outside a string is one illegal token, however
	/// many bytes its encoding takes.
	fn non_ascii(&mut self, lead: u8, line: usize) -> Token {
		let mut bytes = vec![lead];
		bytes.extend(self.take_while(|b| b & 0xC0 == 0x80));
		Token::new(Illegal, String::from_utf8_lossy(&bytes), line)
	}
}

/// Yields every token up to and including the first `EOF`.
impl Iterator for Scanner {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		if self.finished {
			return None;
		}
		let token = self.next_token();
		self.finished = token.r#type == Eof;
		Some(token)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn scan(chunks: &[&str]) -> Vec<(TokenType, String)> {
		Scanner::from_chunks(chunks.iter().map(|c| c.as_bytes())).map(|t| (t.r#type, t.lexeme)).collect()
	}

	fn types(source: &str) -> Vec<TokenType> { Scanner::from_source(source).map(|t| t.r#type).collect() }

	const PROGRAM: &str = r#"let five = 5;
let add = fn(x, y) { x + y; };
let result = add(five, 10) % 3;
if (result != 2 && !false || 1 == 1) { return "two words"; } else { [1, 2][0] }
{"key": 9 - 4 * 2 / 1 < 7 > 0}
"#;

	#[test]
	fn scan_let_statement() {
		assert_eq!(
			scan(&["let five = 5;"]),
			vec![
				(Let, "let".to_string()),
				(Identifier, "five".to_string()),
				(Assign, "=".to_string()),
				(IntegerLiteral, "5".to_string()),
				(Semicolon, ";".to_string()),
				(Eof, "".to_string()),
			]
		);
	}

	#[test]
	fn scan_split_identifier() {
		assert_eq!(scan(&["let fi", "ve = 5;"]), scan(&["let five = 5;"]));
	}

	#[test]
	fn scan_every_two_way_split() {
		let expected = scan(&[PROGRAM]);
		for i in 0..=PROGRAM.len() {
			assert_eq!(scan(&[&PROGRAM[..i], &PROGRAM[i..]]), expected, "split at {i}");
		}
	}

	#[test]
	fn scan_one_byte_chunks() {
		let bytes: Vec<Vec<u8>> = PROGRAM.bytes().map(|b| vec![b]).collect();
		let tokens: Vec<_> = Scanner::from_chunks(bytes).map(|t| (t.r#type, t.lexeme)).collect();
		assert_eq!(tokens, scan(&[PROGRAM]));
	}

	#[test]
	fn scan_operators() {
		assert_eq!(types("= == ! != + - * / % < >"), vec![
			Assign, EqualEqual, Bang, BangEqual, Plus, Minus, Star, Slash, Percent, Less, Greater, Eof
		]);
		assert_eq!(types("&& || , ; : ( ) { } [ ]"), vec![
			And, Or, Comma, Semicolon, Colon, LeftParen, RightParen, LeftBrace, RightBrace, LeftBracket, RightBracket,
			Eof
		]);
		assert_eq!(types("a==b"), vec![Identifier, EqualEqual, Identifier, Eof]);
	}

	#[test]
	fn scan_two_char_operator_across_chunks() {
		assert_eq!(scan(&["a =", "= b"]), scan(&["a == b"]));
		assert_eq!(scan(&["x &", "& y"]), scan(&["x && y"]));
	}

	#[test]
	fn scan_lone_ampersand_and_pipe() {
		assert_eq!(scan(&["a & b | c"]), vec![
			(Identifier, "a".to_string()),
			(Illegal, "&".to_string()),
			(Identifier, "b".to_string()),
			(Illegal, "|".to_string()),
			(Identifier, "c".to_string()),
			(Eof, "".to_string()),
		]);
	}

	#[test]
	fn scan_keywords() {
		assert_eq!(types("fn let true false if else return"), vec![
			Function, Let, True, False, If, Else, Return, Eof
		]);
		assert_eq!(types("lets _fn return1"), vec![Identifier, Identifier, Identifier, Eof]);
	}

	#[test]
	fn scan_strings() {
		assert_eq!(scan(&[r#""hello world""#])[0], (StringLiteral, "hello world".to_string()));
		assert_eq!(scan(&[r#""""#])[0], (StringLiteral, "".to_string()));
		assert_eq!(scan(&["\"hel", "lo\""])[0], (StringLiteral, "hello".to_string()));
	}

	#[test]
	fn scan_multibyte_string_split_mid_character() {
		let source = "\"世界\"".as_bytes();
		let tokens: Vec<_> =
			Scanner::from_chunks([&source[..2], &source[2..5], &source[5..]]).map(|t| (t.r#type, t.lexeme)).collect();
		assert_eq!(tokens, vec![(StringLiteral, "世界".to_string()), (Eof, "".to_string())]);
	}

	#[test]
	fn scan_unterminated_string() {
		assert_eq!(scan(&["\"abc"]), vec![(Illegal, "\"abc".to_string()), (Eof, "".to_string())]);
	}

	#[test]
	fn scan_illegal_characters() {
		assert_eq!(scan(&["@ 你"]), vec![
			(Illegal, "@".to_string()),
			(Illegal, "你".to_string()),
			(Eof, "".to_string())
		]);
	}

	#[test]
	fn scan_numbers_keep_dots() {
		assert_eq!(scan(&["12", "3.4"])[0], (IntegerLiteral, "123.4".to_string()));
	}

	#[test]
	fn scan_tracks_lines() {
		let lines: Vec<usize> = Scanner::from_source("a\nb\r\n\n\"x\ny\" c").map(|t| t.line).collect();
		assert_eq!(lines, vec![1, 2, 4, 5, 5]);
	}

	#[test]
	fn eof_repeats_forever() {
		let mut scanner = Scanner::from_source("x");
		assert_eq!(scanner.next_token().r#type, Identifier);
		for _ in 0..3 {
			assert_eq!(scanner.next_token().r#type, Eof);
		}
	}

	#[test]
	fn empty_chunks_are_skipped() {
		assert_eq!(scan(&["", "le", "", "t", ""]), scan(&["let"]));
	}

	proptest! {
		#[test]
		fn chunking_never_changes_tokens(cuts in prop::collection::vec(0..PROGRAM.len(), 0..8)) {
			let mut cuts = cuts;
			cuts.sort_unstable();
			cuts.dedup();
			let mut chunks = Vec::new();
			let mut last = 0;
			for cut in cuts {
				chunks.push(&PROGRAM[last..cut]);
				last = cut;
			}
			chunks.push(&PROGRAM[last..]);
			prop_assert_eq!(scan(&chunks), scan(&[PROGRAM]));
		}
	}
}
