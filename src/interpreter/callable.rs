use std::{fmt::{Debug, Display}, rc::Rc};

use crate::{environment::Environment, interpreter::value::Value, statement::BlockStatement, utils::RcCell};

pub type NativeFunction = fn(&[Value]) -> Value;

/// A user function closed over the scope its literal was evaluated in.
pub struct FunctionValue {
	pub parameters: Rc<Vec<String>>,
	pub body:       Rc<BlockStatement>,
	pub closure:    RcCell<Environment>,
}

/// A function provided by the host, looked up by name when no binding
/// shadows it.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunction {
	pub name:     &'static str,
	pub function: NativeFunction,
}

impl FunctionValue {
	pub fn arity(&self) -> usize { self.parameters.len() }
}

impl BuiltinFunction {
	pub fn call(&self, arguments: &[Value]) -> Value { (self.function)(arguments) }
}

// The closure may contain this very function, so it is left out.
impl Debug for FunctionValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionValue").field("parameters", &self.parameters).field("body", &self.body).finish_non_exhaustive()
	}
}

impl Display for FunctionValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "fn({}) {}", self.parameters.join(", "), self.body)
	}
}
