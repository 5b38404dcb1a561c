//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a function is always a block of statements.

use std::fmt::{Display, Write};

use crate::parser::expression::Expression;

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// A binding statement, `let name = value;`.
	Let { name: String, value: Expression },
	/// A return statement.
	Return(Expression),
	/// An expression used as a statement.
	Expression(Expression),
}

/// A brace-delimited list of statements, the body of functions and `if`
/// branches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
	pub statements: Vec<Statement>,
}

/// The root of every parse: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Let { name, value } => write!(f, "let {name} = {value};"),
			Statement::Return(value) => write!(f, "return {value};"),
			Statement::Expression(expression) => write!(f, "{expression}"),
		}
	}
}

/// Write statements with `separator` between them. A bare expression followed
/// by another statement gets its `;` back, otherwise the next statement could
/// read as an infix or call continuation of it.
fn write_statements(f: &mut std::fmt::Formatter<'_>, statements: &[Statement], separator: char) -> std::fmt::Result {
	for (i, statement) in statements.iter().enumerate() {
		if i > 0 {
			if matches!(statements[i - 1], Statement::Expression(_)) {
				f.write_char(';')?;
			}
			f.write_char(separator)?;
		}
		write!(f, "{statement}")?;
	}
	Ok(())
}

impl Display for BlockStatement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.statements.is_empty() {
			return write!(f, "{{ }}");
		}
		write!(f, "{{ ")?;
		write_statements(f, &self.statements, ' ')?;
		write!(f, " }}")
	}
}

impl Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write_statements(f, &self.statements, '\n') }
}
