//! Tree-walking evaluator.
//!
//! The interpreter walks the tree produced by the parser, evaluating each node
//! against an [`Environment`] chain.
//!
//! Internally every evaluation step returns `Result<Value, Value>`. The `Err`
//! side carries the two values that must unwind the walk: a
//! [`Value::Return`] travelling to the enclosing call, and a [`Value::Error`]
//! travelling all the way to the program boundary. `?` does the unwinding.
//! Entry points turn the result back into a plain value.

pub mod builtins;
pub mod callable;
pub mod value;

use std::{cell::Cell, rc::Rc};

use callable::FunctionValue;
use tracing::trace;
use value::{HashPair, HashValue, Value};

use crate::{environment::Environment, error::interpreter::RuntimeError, parser::expression::Expression, scanner::TokenType, statement::{BlockStatement, Program, Statement}, utils::{RcCell, ensure_sufficient_stack}};

type Flow<T = Value> = Result<T, Value>;

/// Deepest chain of active user function calls. One more call is a
/// `stack overflow` error value.
pub const MAX_CALL_DEPTH: usize = 15_000;

thread_local! {
	static CALL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Counts one active user function call until dropped.
struct CallGuard;

impl CallGuard {
	fn enter() -> Flow<Self> {
		CALL_DEPTH.with(|depth| {
			if depth.get() >= MAX_CALL_DEPTH {
				return Err(RuntimeError::StackOverflow { limit: MAX_CALL_DEPTH }.into());
			}
			depth.set(depth.get() + 1);
			Ok(CallGuard)
		})
	}
}

impl Drop for CallGuard {
	fn drop(&mut self) { CALL_DEPTH.with(|depth| depth.set(depth.get() - 1)) }
}

/// Evaluates programs in one global scope that persists across calls, so
/// bindings from one REPL line stay visible on the next.
#[derive(Default)]
pub struct Interpreter {
	environment: RcCell<Environment>,
}

impl Interpreter {
	pub fn new() -> Self { Self::default() }

	/// The value of the last statement, or `None` when it produced none (an
	/// empty program, or one ending in `let`). Runtime errors come back as
	/// [`Value::Error`].
	#[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
	pub fn interpret(&mut self, program: &Program) -> Option<Value> { eval_program(program, &self.environment) }
}

/// Evaluate `program` in `environment`. A top-level `return` stops the program
/// with its value, an error stops it with the error.
pub fn eval_program(program: &Program, environment: &RcCell<Environment>) -> Option<Value> {
	let mut result = None;
	for statement in &program.statements {
		match eval_statement(statement, environment) {
			Ok(value) => result = value,
			Err(Value::Return(value)) => return Some(*value),
			Err(error) => return Some(error),
		}
	}
	result
}

fn eval_statement(statement: &Statement, environment: &RcCell<Environment>) -> Flow<Option<Value>> {
	match statement {
		Statement::Let { name, value } => {
			let value = eval_expression(value, environment)?;
			environment.borrow_mut().define(name.as_str(), value);
			Ok(None)
		}
		Statement::Return(value) => Err(Value::Return(Box::new(eval_expression(value, environment)?))),
		Statement::Expression(expression) => eval_expression(expression, environment).map(Some),
	}
}

/// Blocks run in the scope they appear in. Only calls open a new one.
fn eval_block(block: &BlockStatement, environment: &RcCell<Environment>) -> Flow<Option<Value>> {
	let mut result = None;
	for statement in &block.statements {
		result = eval_statement(statement, environment)?;
	}
	Ok(result)
}

fn eval_expression(expression: &Expression, environment: &RcCell<Environment>) -> Flow {
	ensure_sufficient_stack(|| eval_node(expression, environment))
}

fn eval_node(expression: &Expression, environment: &RcCell<Environment>) -> Flow {
	match expression {
		Expression::Identifier(name) => eval_identifier(name, environment),
		Expression::Integer(value) => Ok((*value).into()),
		Expression::String(value) => Ok(value.as_str().into()),
		Expression::Boolean(value) => Ok((*value).into()),
		Expression::Array(elements) => Ok(Value::Array(Rc::new(eval_expressions(elements, environment)?))),
		Expression::Index { left, index } => {
			let left = eval_expression(left, environment)?;
			let index = eval_expression(index, environment)?;
			eval_index(left, index)
		}
		Expression::Hash(pairs) => eval_hash(pairs, environment),
		Expression::If { condition, consequence, alternative } => {
			let branch = if eval_expression(condition, environment)?.is_truthy() {
				Some(consequence)
			} else {
				alternative.as_ref()
			};
			match branch {
				Some(block) => Ok(eval_block(block, environment)?.unwrap_or(Value::Null)),
				None => Ok(Value::Null),
			}
		}
		Expression::Function(literal) => Ok(Value::Function(Rc::new(FunctionValue {
			parameters: literal.parameters.clone(),
			body:       literal.body.clone(),
			closure:    environment.clone(),
		}))),
		Expression::Call { function, arguments } => {
			let function = eval_expression(function, environment)?;
			let arguments = eval_expressions(arguments, environment)?;
			apply_function(function, arguments)
		}
		Expression::Prefix { operator, right } => {
			let right = eval_expression(right, environment)?;
			eval_prefix(*operator, right)
		}
		Expression::Infix { left, operator, right } => {
			let left = eval_expression(left, environment)?;
			let right = eval_expression(right, environment)?;
			eval_infix(*operator, left, right)
		}
	}
}

/// Left to right, stopping at the first error.
fn eval_expressions(expressions: &[Expression], environment: &RcCell<Environment>) -> Flow<Vec<Value>> {
	expressions.iter().map(|expression| eval_expression(expression, environment)).collect()
}

fn eval_identifier(name: &str, environment: &RcCell<Environment>) -> Flow {
	if let Some(value) = environment.borrow().get(name) {
		return Ok(value);
	}
	builtins::lookup(name).map(Value::Builtin).ok_or_else(|| RuntimeError::IdentifierNotFound(name.to_owned()).into())
}

fn apply_function(function: Value, arguments: Vec<Value>) -> Flow {
	match function {
		Value::Function(function) => {
			if function.arity() != arguments.len() {
				return Err(RuntimeError::ArgumentCountMismatch { want: function.arity(), got: arguments.len() }.into());
			}
			let _guard = CallGuard::enter()?;
			trace!(arity = function.arity(), "calling function");
			let mut scope = Environment::new_enclosed(function.closure.clone());
			for (parameter, argument) in function.parameters.iter().zip(arguments) {
				scope.define(parameter.as_str(), argument);
			}
			match eval_block(&function.body, &RcCell::new(scope)) {
				Ok(value) => Ok(value.unwrap_or(Value::Null)),
				Err(Value::Return(value)) => Ok(*value),
				Err(error) => Err(error),
			}
		}
		Value::Builtin(builtin) => {
			trace!(name = builtin.name, "calling builtin");
			match builtin.call(&arguments) {
				error @ Value::Error(_) => Err(error),
				value => Ok(value),
			}
		}
		other => Err(RuntimeError::NotAFunction(other.r#type()).into()),
	}
}

fn eval_prefix(operator: TokenType, right: Value) -> Flow {
	match (operator, &right) {
		(TokenType::Bang, _) => Ok(Value::Boolean(matches!(right, Value::Null | Value::Boolean(false)))),
		(TokenType::Minus, Value::Integer(value)) => Ok(Value::Integer(value.wrapping_neg())),
		_ => Err(RuntimeError::UnknownPrefixOperator { operator, right: right.r#type() }.into()),
	}
}

fn eval_infix(operator: TokenType, left: Value, right: Value) -> Flow {
	match (&left, &right) {
		(Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
		(Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
		(Value::String(l), Value::String(r)) if operator == TokenType::Plus => Ok(Value::String(format!("{l}{r}").into())),
		_ if left.r#type() != right.r#type() => {
			Err(RuntimeError::TypeMismatch { left: left.r#type(), operator, right: right.r#type() }.into())
		}
		_ => Err(unknown_infix(operator, &left, &right)),
	}
}

fn unknown_infix(operator: TokenType, left: &Value, right: &Value) -> Value {
	RuntimeError::UnknownInfixOperator { left: left.r#type(), operator, right: right.r#type() }.into()
}

/// Arithmetic wraps on overflow. Division truncates toward zero and `%` takes
/// the sign of the dividend.
fn eval_integer_infix(operator: TokenType, left: i64, right: i64) -> Flow {
	use TokenType::*;
	let value = match operator {
		Plus => Value::Integer(left.wrapping_add(right)),
		Minus => Value::Integer(left.wrapping_sub(right)),
		Star => Value::Integer(left.wrapping_mul(right)),
		Slash | Percent if right == 0 => return Err(RuntimeError::DivisionByZero { left, operator }.into()),
		Slash => Value::Integer(left.wrapping_div(right)),
		Percent => Value::Integer(left.wrapping_rem(right)),
		Less => Value::Boolean(left < right),
		Greater => Value::Boolean(left > right),
		EqualEqual => Value::Boolean(left == right),
		BangEqual => Value::Boolean(left != right),
		_ => return Err(unknown_infix(operator, &Value::Integer(left), &Value::Integer(right))),
	};
	Ok(value)
}

fn eval_boolean_infix(operator: TokenType, left: bool, right: bool) -> Flow {
	use TokenType::*;
	let value = match operator {
		EqualEqual => left == right,
		BangEqual => left != right,
		And => left && right,
		Or => left || right,
		_ => return Err(unknown_infix(operator, &Value::Boolean(left), &Value::Boolean(right))),
	};
	Ok(Value::Boolean(value))
}

/// Out-of-range and negative indices yield `null`. Strings index by character.
fn eval_index(left: Value, index: Value) -> Flow {
	match (&left, &index) {
		(Value::Array(elements), Value::Integer(i)) => {
			Ok(usize::try_from(*i).ok().and_then(|i| elements.get(i)).cloned().unwrap_or(Value::Null))
		}
		(Value::String(s), Value::Integer(i)) => Ok(usize::try_from(*i)
			.ok()
			.and_then(|i| s.chars().nth(i))
			.map_or(Value::Null, |c| Value::String(c.to_string().into()))),
		(Value::Hash(hash), _) => {
			let key = index.hash_key().ok_or(RuntimeError::UnusableHashKey(index.r#type()))?;
			Ok(hash.pairs.get(&key).map_or(Value::Null, |pair| pair.value.clone()))
		}
		_ => Err(RuntimeError::IndexNotSupported(left.r#type()).into()),
	}
}

/// Pairs evaluate in source order. A repeated key keeps the last value.
fn eval_hash(pairs: &[(Expression, Expression)], environment: &RcCell<Environment>) -> Flow {
	let mut hash = HashValue::default();
	for (key, value) in pairs {
		let key = eval_expression(key, environment)?;
		let hash_key = key.hash_key().ok_or(RuntimeError::UnusableHashKey(key.r#type()))?;
		let value = eval_expression(value, environment)?;
		hash.pairs.insert(hash_key, HashPair { key, value });
	}
	Ok(Value::Hash(Rc::new(hash)))
}
