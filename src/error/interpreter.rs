use crate::{interpreter::value::{Value, ValueType}, scanner::TokenType};

/// Errors that can occur during evaluation. They never escape as `Err`: each
/// one becomes a [`Value::Error`] carrying its message.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
	#[error("type mismatch: {left} {operator} {right}")]
	TypeMismatch { left: ValueType, operator: TokenType, right: ValueType },
	#[error("unknown operator: {left} {operator} {right}")]
	UnknownInfixOperator { left: ValueType, operator: TokenType, right: ValueType },
	#[error("unknown operator: {operator}{right}")]
	UnknownPrefixOperator { operator: TokenType, right: ValueType },
	#[error("division by zero: {left} {operator} 0")]
	DivisionByZero { left: i64, operator: TokenType },
	#[error("identifier not found: {0}")]
	IdentifierNotFound(String),
	#[error("not a function: {0}")]
	NotAFunction(ValueType),
	#[error("wrong number of arguments: want={want}, got={got}")]
	ArgumentCountMismatch { want: usize, got: usize },
	#[error("wrong number of arguments. got={got}, want={want}")]
	BuiltinArgumentCount { want: usize, got: usize },
	#[error("argument to `{function}` not supported, got {got}")]
	UnsupportedArgument { function: &'static str, got: ValueType },
	#[error("argument to `{function}` must be ARRAY, got {got}")]
	ExpectedArray { function: &'static str, got: ValueType },
	#[error("unusable as hash key: {0}")]
	UnusableHashKey(ValueType),
	#[error("index operator not supported: {0}")]
	IndexNotSupported(ValueType),
	#[error("stack overflow: call depth exceeded {limit}")]
	StackOverflow { limit: usize },
	#[error("`{function}` failed to write output: {message}")]
	OutputFailed { function: &'static str, message: String },
}

impl From<RuntimeError> for Value {
	fn from(error: RuntimeError) -> Self { Value::Error(error.to_string()) }
}
