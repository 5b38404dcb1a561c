//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-a * (b + 1)`
//! as nested nodes. Each node prints in a canonical, fully parenthesised form
//! that parses back to the same tree.

use std::{fmt::Display, rc::Rc};

use crate::{scanner::TokenType, statement::BlockStatement};

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Identifier(String),
	Integer(i64),
	String(String),
	Boolean(bool),
	Array(Vec<Expression>),
	Index { left: Box<Expression>, index: Box<Expression> },
	/// Key/value pairs in source order. The order carries no meaning.
	Hash(Vec<(Expression, Expression)>),
	If { condition: Box<Expression>, consequence: BlockStatement, alternative: Option<BlockStatement> },
	Function(FunctionLiteral),
	Call { function: Box<Expression>, arguments: Vec<Expression> },
	Prefix { operator: TokenType, right: Box<Expression> },
	Infix { left: Box<Expression>, operator: TokenType, right: Box<Expression> },
}

/// A function literal. Parameters and body are shared with every closure the
/// literal evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
	pub parameters: Rc<Vec<String>>,
	pub body:       Rc<BlockStatement>,
}

impl Expression {
	pub fn index(left: Self, index: Self) -> Self { Expression::Index { left: Box::new(left), index: Box::new(index) } }

	pub fn call(function: Self, arguments: Vec<Self>) -> Self {
		Expression::Call { function: Box::new(function), arguments }
	}

	pub fn prefix(operator: TokenType, right: Self) -> Self { Expression::Prefix { operator, right: Box::new(right) } }

	pub fn infix(left: Self, operator: TokenType, right: Self) -> Self {
		Expression::Infix { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn function(parameters: Vec<String>, body: BlockStatement) -> Self {
		Expression::Function(FunctionLiteral { parameters: Rc::new(parameters), body: Rc::new(body) })
	}
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
	items.into_iter().map(|item| item.to_string()).collect::<Vec<String>>().join(", ")
}

impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Expression::*;
		match self {
			Identifier(name) => write!(f, "{name}"),
			Integer(value) => write!(f, "{value}"),
			String(value) => write!(f, "\"{value}\""),
			Boolean(value) => write!(f, "{value}"),
			Array(elements) => write!(f, "[{}]", join(elements)),
			Index { left, index } => write!(f, "({left}[{index}])"),
			Hash(pairs) => write!(f, "{{{}}}", join(pairs.iter().map(|(key, value)| format!("{key}: {value}")))),
			If { condition, consequence, alternative } => {
				write!(f, "if ({condition}) {consequence}")?;
				if let Some(alternative) = alternative {
					write!(f, " else {alternative}")?;
				}
				Ok(())
			}
			Function(literal) => write!(f, "{literal}"),
			Call { function, arguments } => write!(f, "{function}({})", join(arguments)),
			Prefix { operator, right } => write!(f, "({operator}{right})"),
			Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
		}
	}
}

impl Display for FunctionLiteral {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "fn({}) {}", self.parameters.join(", "), self.body)
	}
}
