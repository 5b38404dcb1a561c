//! The `Scanner` uses the lexical grammar, turning bytes into tokens. The
//! `Parser` uses the syntactic grammar, turning tokens into statements and
//! expressions.
//!
//! Expressions are parsed by precedence climbing (Pratt parsing). Every token
//! kind that can start an expression has a prefix parse function, and every
//! token kind that can continue one has an infix parse function. Both live in
//! dispatch tables filled once when the parser is built. The climbing loop
//! parses a prefix, then keeps folding infix operators into it while the
//! lookahead binds tighter than the current floor.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Or|`\|\|`|Left
//! And|`&&`|Left
//! Equals|== !=|Left
//! LessGreater|< >|Left
//! Sum|+ -|Left
//! Product|* / %|Left
//! Prefix|! -|Right
//! Call|`(`|Left
//! Index|`[`|Left
//!
//! Statement grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → "let" IDENT "=" expression ";"?
//!                | "return" expression ";"?
//!                | expression ";"? ;
//! block          → "{" statement* "}" ;
//! ```
//!
//! A parse error never stops the parser. It is recorded, the rest of the
//! offending statement is skipped up to the next `;`, and parsing resumes.

pub mod expression;

use TokenType::*;
use expression::Expression;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{error::parser::{ParseError, ParseErrorType}, scanner::{Scanner, Token, TokenType}, statement::{BlockStatement, Program, Statement}};

type PrefixParseFn = fn(&mut Parser) -> Result<Expression, ParseError>;
type InfixParseFn = fn(&mut Parser, Expression) -> Result<Expression, ParseError>;

/// Binding power of operators, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Lowest,
	Or,
	And,
	Equals,
	LessGreater,
	Sum,
	Product,
	Prefix,
	Call,
	Index,
}

impl Precedence {
	/// The precedence a token has when it appears in infix position.
	pub fn of(r#type: TokenType) -> Self {
		match r#type {
			Or => Precedence::Or,
			And => Precedence::And,
			EqualEqual | BangEqual => Precedence::Equals,
			Less | Greater => Precedence::LessGreater,
			Plus | Minus => Precedence::Sum,
			Star | Slash | Percent => Precedence::Product,
			LeftParen => Precedence::Call,
			LeftBracket => Precedence::Index,
			_ => Precedence::Lowest,
		}
	}
}

/// A Pratt parser pulling tokens from a [`Scanner`].
pub struct Parser {
	scanner:          Scanner,
	/// The token under examination
	current:          Token,
	/// One token of lookahead
	peek:             Token,
	errors:           Vec<ParseError>,
	prefix_parse_fns: FxHashMap<TokenType, PrefixParseFn>,
	infix_parse_fns:  FxHashMap<TokenType, InfixParseFn>,
}

impl Parser {
	pub fn new(mut scanner: Scanner) -> Self {
		let current = scanner.next_token();
		let peek = scanner.next_token();
		let mut parser = Self {
			scanner,
			current,
			peek,
			errors: Vec::new(),
			prefix_parse_fns: FxHashMap::default(),
			infix_parse_fns: FxHashMap::default(),
		};

		parser.register_prefix(Identifier, Parser::parse_identifier);
		parser.register_prefix(IntegerLiteral, Parser::parse_integer);
		parser.register_prefix(StringLiteral, Parser::parse_string);
		parser.register_prefix(True, Parser::parse_boolean);
		parser.register_prefix(False, Parser::parse_boolean);
		parser.register_prefix(Bang, Parser::parse_prefix);
		parser.register_prefix(Minus, Parser::parse_prefix);
		parser.register_prefix(LeftParen, Parser::parse_grouped);
		parser.register_prefix(If, Parser::parse_if);
		parser.register_prefix(Function, Parser::parse_function);
		parser.register_prefix(LeftBracket, Parser::parse_array);
		parser.register_prefix(LeftBrace, Parser::parse_hash);

		for operator in [Plus, Minus, Star, Slash, Percent, Less, Greater, EqualEqual, BangEqual, And, Or] {
			parser.register_infix(operator, Parser::parse_infix);
		}
		parser.register_infix(LeftParen, Parser::parse_call);
		parser.register_infix(LeftBracket, Parser::parse_index);

		parser
	}

	/// Parse a complete source held in memory.
	pub fn from_source(source: &str) -> Self { Self::new(Scanner::from_source(source)) }

	/// Diagnostics recorded so far, in source order. The tree returned by
	/// [`Parser::parse_program`] is only trustworthy when this is empty.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	/// Parse statements until `EOF`.
	#[tracing::instrument(level = "debug", skip_all)]
	pub fn parse_program(&mut self) -> Program {
		let mut program = Program::default();
		while !self.current_is(Eof) {
			match self.parse_statement() {
				Ok(statement) => program.statements.push(statement),
				Err(error) => {
					self.report(error);
					self.synchronize();
				}
			}
			self.next_token();
		}
		debug!(statements = program.statements.len(), errors = self.errors.len(), "parsed program");
		program
	}

	fn register_prefix(&mut self, r#type: TokenType, function: PrefixParseFn) {
		self.prefix_parse_fns.insert(r#type, function);
	}

	fn register_infix(&mut self, r#type: TokenType, function: InfixParseFn) {
		self.infix_parse_fns.insert(r#type, function);
	}

	fn parse_statement(&mut self) -> Result<Statement, ParseError> {
		match self.current.r#type {
			Let => self.parse_let_statement(),
			Return => self.parse_return_statement(),
			_ => self.parse_expression_statement(),
		}
	}

	fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
		self.expect_peek(Identifier)?;
		let name = self.current.lexeme.clone();
		self.expect_peek(Assign)?;
		self.next_token();
		let value = self.parse_expression(Precedence::Lowest)?;
		self.skip_semicolon();
		Ok(Statement::Let { name, value })
	}

	fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
		self.next_token();
		let value = self.parse_expression(Precedence::Lowest)?;
		self.skip_semicolon();
		Ok(Statement::Return(value))
	}

	fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
		let expression = self.parse_expression(Precedence::Lowest)?;
		self.skip_semicolon();
		Ok(Statement::Expression(expression))
	}

	/// Parse the statements of a block. The current token is the opening `{`;
	/// on success it is the closing `}`.
	fn parse_block(&mut self) -> Result<BlockStatement, ParseError> {
		let mut block = BlockStatement::default();
		self.next_token();
		while !self.current_is(RightBrace) {
			if self.current_is(Eof) {
				return Err(self.error(ParseErrorType::UnexpectedToken { expected: RightBrace, got: Eof }));
			}
			block.statements.push(self.parse_statement()?);
			self.next_token();
		}
		Ok(block)
	}

	/// The precedence climbing loop.
	fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
		let Some(prefix) = self.prefix_parse_fns.get(&self.current.r#type).copied() else {
			return Err(self.error(ParseErrorType::NoPrefixParseFunction(self.current.r#type)));
		};
		let mut left = prefix(self)?;

		while precedence < Precedence::of(self.peek.r#type) {
			let Some(infix) = self.infix_parse_fns.get(&self.peek.r#type).copied() else {
				return Ok(left);
			};
			self.next_token();
			left = infix(self, left)?;
		}
		Ok(left)
	}

	fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
		Ok(Expression::Identifier(self.current.lexeme.clone()))
	}

	fn parse_integer(&mut self) -> Result<Expression, ParseError> {
		let literal = &self.current.lexeme;
		match literal.parse() {
			Ok(value) => Ok(Expression::Integer(value)),
			Err(_) => Err(self.error(ParseErrorType::InvalidInteger(literal.clone()))),
		}
	}

	fn parse_string(&mut self) -> Result<Expression, ParseError> { Ok(Expression::String(self.current.lexeme.clone())) }

	fn parse_boolean(&mut self) -> Result<Expression, ParseError> { Ok(Expression::Boolean(self.current_is(True))) }

	fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
		let operator = self.current.r#type;
		self.next_token();
		let right = self.parse_expression(Precedence::Prefix)?;
		Ok(Expression::prefix(operator, right))
	}

	fn parse_grouped(&mut self) -> Result<Expression, ParseError> {
		self.next_token();
		let expression = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightParen)?;
		Ok(expression)
	}

	fn parse_if(&mut self) -> Result<Expression, ParseError> {
		self.expect_peek(LeftParen)?;
		self.next_token();
		let condition = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightParen)?;
		self.expect_peek(LeftBrace)?;
		let consequence = self.parse_block()?;

		let alternative = if self.peek_is(Else) {
			self.next_token();
			self.expect_peek(LeftBrace)?;
			Some(self.parse_block()?)
		} else {
			None
		};

		Ok(Expression::If { condition: Box::new(condition), consequence, alternative })
	}

	fn parse_function(&mut self) -> Result<Expression, ParseError> {
		self.expect_peek(LeftParen)?;
		let parameters = self.parse_function_parameters()?;
		self.expect_peek(LeftBrace)?;
		let body = self.parse_block()?;
		Ok(Expression::function(parameters, body))
	}

	/// Comma separated identifiers up to `)`, which may be empty.
	fn parse_function_parameters(&mut self) -> Result<Vec<String>, ParseError> {
		let mut parameters = Vec::new();
		if self.peek_is(RightParen) {
			self.next_token();
			return Ok(parameters);
		}

		self.expect_peek(Identifier)?;
		parameters.push(self.current.lexeme.clone());
		while self.peek_is(Comma) {
			self.next_token();
			self.expect_peek(Identifier)?;
			parameters.push(self.current.lexeme.clone());
		}

		self.expect_peek(RightParen)?;
		Ok(parameters)
	}

	fn parse_array(&mut self) -> Result<Expression, ParseError> {
		Ok(Expression::Array(self.parse_expression_list(RightBracket)?))
	}

	fn parse_hash(&mut self) -> Result<Expression, ParseError> {
		let mut pairs = Vec::new();
		while !self.peek_is(RightBrace) {
			self.next_token();
			let key = self.parse_expression(Precedence::Lowest)?;
			self.expect_peek(Colon)?;
			self.next_token();
			let value = self.parse_expression(Precedence::Lowest)?;
			pairs.push((key, value));

			if !self.peek_is(RightBrace) {
				self.expect_peek(Comma)?;
			}
		}
		self.expect_peek(RightBrace)?;
		Ok(Expression::Hash(pairs))
	}

	fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseError> {
		let operator = self.current.r#type;
		let precedence = Precedence::of(operator);
		self.next_token();
		let right = self.parse_expression(precedence)?;
		Ok(Expression::infix(left, operator, right))
	}

	fn parse_call(&mut self, function: Expression) -> Result<Expression, ParseError> {
		let arguments = self.parse_expression_list(RightParen)?;
		Ok(Expression::call(function, arguments))
	}

	fn parse_index(&mut self, left: Expression) -> Result<Expression, ParseError> {
		self.next_token();
		let index = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightBracket)?;
		Ok(Expression::index(left, index))
	}

	/// Comma separated expressions up to `end`, shared by calls, arrays and
	/// hashes' elements.
	fn parse_expression_list(&mut self, end: TokenType) -> Result<Vec<Expression>, ParseError> {
		let mut list = Vec::new();
		if self.peek_is(end) {
			self.next_token();
			return Ok(list);
		}

		self.next_token();
		list.push(self.parse_expression(Precedence::Lowest)?);
		while self.peek_is(Comma) {
			self.next_token();
			self.next_token();
			list.push(self.parse_expression(Precedence::Lowest)?);
		}

		self.expect_peek(end)?;
		Ok(list)
	}

	/// Advance to the next token.
	fn next_token(&mut self) { self.current = std::mem::replace(&mut self.peek, self.scanner.next_token()); }

	fn current_is(&self, r#type: TokenType) -> bool { self.current.r#type == r#type }

	fn peek_is(&self, r#type: TokenType) -> bool { self.peek.r#type == r#type }

	/// Advance only if the lookahead is the expected token.
	fn expect_peek(&mut self, expected: TokenType) -> Result<(), ParseError> {
		if self.peek_is(expected) {
			self.next_token();
			Ok(())
		} else {
			Err(ParseError::new(self.peek.line, ParseErrorType::UnexpectedToken { expected, got: self.peek.r#type }))
		}
	}

	fn skip_semicolon(&mut self) {
		if self.peek_is(Semicolon) {
			self.next_token();
		}
	}

	fn error(&self, r#type: ParseErrorType) -> ParseError { ParseError::new(self.current.line, r#type) }

	fn report(&mut self, error: ParseError) {
		debug!(line = error.line(), %error, "parse error");
		self.errors.push(error);
	}

	/// Skip the rest of a broken statement, up to its `;` or the end of input.
	fn synchronize(&mut self) {
		while !self.current_is(Semicolon) && !self.current_is(Eof) {
			self.next_token();
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn parse_program(input: &str) -> Program {
		let mut parser = Parser::from_source(input);
		let program = parser.parse_program();
		let errors: Vec<String> = parser.errors().iter().map(ToString::to_string).collect();
		assert!(errors.is_empty(), "parse errors for {input:?}: {errors:?}");
		program
	}

	fn parse(input: &str, equals: &str) { assert_eq!(parse_program(input).to_string(), equals); }

	fn parse_errors(input: &str) -> Vec<String> {
		let mut parser = Parser::from_source(input);
		parser.parse_program();
		parser.errors().iter().map(ToString::to_string).collect()
	}

	fn single_expression(input: &str) -> Expression {
		let program = parse_program(input);
		assert_eq!(program.statements.len(), 1);
		match program.statements.into_iter().next() {
			Some(Statement::Expression(expression)) => expression,
			other => panic!("expected an expression statement, got {other:?}"),
		}
	}

	#[test]
	fn parse_let_statements() {
		let program = parse_program("let x = 5; let y = true; let foobar = y;");
		assert_eq!(program.statements, vec![
			Statement::Let { name: "x".to_string(), value: Expression::Integer(5) },
			Statement::Let { name: "y".to_string(), value: Expression::Boolean(true) },
			Statement::Let { name: "foobar".to_string(), value: Expression::Identifier("y".to_string()) },
		]);
		assert_eq!(program.to_string(), "let x = 5;\nlet y = true;\nlet foobar = y;");
	}

	#[test]
	fn parse_return_statements() {
		parse("return 5; return x + 1", "return 5;\nreturn (x + 1);");
	}

	#[test]
	fn semicolon_ends_expression() {
		parse("a + b; -c * d; f(x);[1]", "(a + b);\n((-c) * d);\nf(x);\n[1]");
		parse("let a = x * y; (a)", "let a = (x * y);\na");
	}

	#[test]
	fn parse_operator_precedence() {
		parse("-a * b", "((-a) * b)");
		parse("!-a", "(!(-a))");
		parse("a + b + c", "((a + b) + c)");
		parse("a + b - c", "((a + b) - c)");
		parse("a * b * c", "((a * b) * c)");
		parse("a * b / c", "((a * b) / c)");
		parse("a + b / c", "(a + (b / c))");
		parse("a + b * c", "(a + (b * c))");
		parse("a % b * c", "((a % b) * c)");
		parse("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
		parse("3 + 4; -5 * 5", "(3 + 4);\n((-5) * 5)");
		parse("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
		parse("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
		parse("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
		parse("3 > 5 == false", "((3 > 5) == false)");
		parse("a || b && c", "(a || (b && c))");
		parse("a && b == c || d", "((a && (b == c)) || d)");
	}

	#[test]
	fn parse_grouping() {
		parse("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
		parse("(5 + 5) * 2", "((5 + 5) * 2)");
		parse("-(5 + 5)", "(-(5 + 5))");
		parse("!(true == true)", "(!(true == true))");
	}

	#[test]
	fn parse_calls_and_indexes() {
		parse("a + add(b * c) + d", "((a + add((b * c))) + d)");
		parse("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))", "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))");
		parse("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))");
		parse("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)");
		parse("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))");
		parse("-a[0]", "(-(a[0]))");
		parse("f(x)(y)", "f(x)(y)");
		parse("f()", "f()");
	}

	#[test]
	fn parse_if_expressions() {
		let expression = single_expression("if (x < y) { x }");
		let Expression::If { condition, consequence, alternative } = expression else {
			panic!("expected an if expression");
		};
		assert_eq!(condition.to_string(), "(x < y)");
		assert_eq!(consequence.statements, vec![Statement::Expression(Expression::Identifier("x".to_string()))]);
		assert_eq!(alternative, None);

		parse("if (x < y) { x } else { y }", "if ((x < y)) { x } else { y }");
		parse("if (a) { let b = 1; b }", "if (a) { let b = 1; b }");
		parse("if (a) { }", "if (a) { }");
	}

	#[test]
	fn parse_function_literals() {
		let expression = single_expression("fn(x, y) { x + y; }");
		let Expression::Function(literal) = expression else {
			panic!("expected a function literal");
		};
		assert_eq!(*literal.parameters, vec!["x".to_string(), "y".to_string()]);
		assert_eq!(literal.body.to_string(), "{ (x + y) }");

		parse("fn() {}", "fn() { }");
		parse("fn(x) { return x; }", "fn(x) { return x; }");
		parse("let add = fn(a, b) { a + b }; add(1, 2)", "let add = fn(a, b) { (a + b) };\nadd(1, 2)");
	}

	#[test]
	fn parse_literals() {
		assert_eq!(single_expression("5"), Expression::Integer(5));
		assert_eq!(single_expression("\"hello world\""), Expression::String("hello world".to_string()));
		assert_eq!(single_expression("false"), Expression::Boolean(false));
		parse("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
		parse("[]", "[]");
	}

	#[test]
	fn parse_hash_literals() {
		let expression = single_expression(r#"{"one": 1, "two": 2, true: 3, 4: 10 - 8}"#);
		let Expression::Hash(pairs) = expression else {
			panic!("expected a hash literal");
		};
		let rendered: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
		assert_eq!(rendered, vec!["\"one\"=1", "\"two\"=2", "true=3", "4=(10 - 8)"]);

		parse("{}", "{}");
		parse("{a: 1,}", "{a: 1}");
	}

	#[test]
	fn parse_peek_errors() {
		assert_eq!(parse_errors("let x 5;"), vec!["expected next token to be =, got INT instead"]);
		assert_eq!(parse_errors("let = 10;"), vec!["expected next token to be IDENT, got = instead"]);
		assert_eq!(parse_errors("let 838383;"), vec!["expected next token to be IDENT, got INT instead"]);
		assert_eq!(parse_errors("add(1, 2"), vec!["expected next token to be ), got EOF instead"]);
		assert_eq!(parse_errors("{1 2}"), vec!["expected next token to be :, got INT instead"]);
		assert_eq!(parse_errors("if (x) { y"), vec!["expected next token to be }, got EOF instead"]);
	}

	#[test]
	fn parse_prefix_errors() {
		assert_eq!(parse_errors("+5"), vec!["no prefix parse function for + found"]);
		assert_eq!(parse_errors("a & b"), vec!["no prefix parse function for ILLEGAL found"]);
		assert_eq!(parse_errors("let x = ;"), vec!["no prefix parse function for ; found"]);
	}

	#[test]
	fn parse_invalid_integer() {
		assert_eq!(parse_errors("1.5"), vec!["could not parse \"1.5\" as integer"]);
		assert_eq!(parse_errors("99999999999999999999"), vec![
			"could not parse \"99999999999999999999\" as integer"
		]);
	}

	#[test]
	fn parse_recovers_at_next_statement() {
		let mut parser = Parser::from_source("let x 5; let = 10; let y = 1;");
		let program = parser.parse_program();
		assert_eq!(parser.errors().len(), 2);
		assert_eq!(program.to_string(), "let y = 1;");
	}

	#[test]
	fn parse_error_lines() {
		let mut parser = Parser::from_source("let a = 1;\nlet b = 2;\nlet c 3;");
		parser.parse_program();
		assert_eq!(parser.errors().iter().map(ParseError::line).collect::<Vec<_>>(), vec![3]);
	}

	#[test]
	fn parse_chunked_source() {
		let chunks = ["let add = f", "n(a, b) { a", " + b }; add(1", "0, 20)"];
		let mut parser = Parser::new(Scanner::from_chunks(chunks));
		let program = parser.parse_program();
		assert!(parser.errors().is_empty());
		assert_eq!(program.to_string(), "let add = fn(a, b) { (a + b) };\nadd(10, 20)");
	}

	fn expression_source() -> impl Strategy<Value = String> {
		let leaf = prop_oneof![
			prop::sample::select(vec!["a", "b", "x", "y1"]).prop_map(String::from),
			(0..1000i64).prop_map(|n| n.to_string()),
			any::<bool>().prop_map(|b| b.to_string()),
			"[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),
		];
		leaf.prop_recursive(4, 32, 3, |inner| {
			let operators = vec!["+", "-", "*", "/", "%", "<", ">", "==", "!=", "&&", "||"];
			prop_oneof![
				(prop::sample::select(vec!["-", "!"]), inner.clone()).prop_map(|(op, e)| format!("{op}{e}")),
				(inner.clone(), prop::sample::select(operators), inner.clone())
					.prop_map(|(l, op, r)| format!("{l} {op} {r}")),
				inner.clone().prop_map(|e| format!("({e})")),
				prop::collection::vec(inner.clone(), 0..3).prop_map(|v| format!("[{}]", v.join(", "))),
				(inner.clone(), inner.clone()).prop_map(|(l, i)| format!("{l}[{i}]")),
				prop::collection::vec(inner.clone(), 0..3).prop_map(|v| format!("f({})", v.join(", "))),
				prop::collection::vec((inner.clone(), inner.clone()), 0..3).prop_map(|pairs| {
					let pairs: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
					format!("{{{}}}", pairs.join(", "))
				}),
				(inner.clone(), inner.clone(), inner.clone())
					.prop_map(|(c, a, b)| format!("if ({c}) {{ {a} }} else {{ {b} }}")),
				inner.clone().prop_map(|body| format!("fn(p, q) {{ return {body}; }}")),
			]
		})
	}

	fn statement_source() -> impl Strategy<Value = String> {
		prop_oneof![
			expression_source().prop_map(|e| format!("{e};")),
			expression_source().prop_map(|e| format!("let v = {e};")),
			expression_source().prop_map(|e| format!("return {e};")),
		]
	}

	proptest! {
		#[test]
		fn printed_program_reparses_to_same_tree(statements in prop::collection::vec(statement_source(), 1..4)) {
			let source = statements.join("\n");
			let program = parse_program(&source);
			let printed = program.to_string();
			let reparsed = parse_program(&printed);
			prop_assert_eq!(reparsed.to_string(), printed);
			prop_assert_eq!(reparsed, program);
		}
	}
}
