//! Host functions available in every program unless a binding shadows them.

use std::{io::Write, rc::Rc};

use crate::{error::interpreter::RuntimeError, interpreter::{callable::BuiltinFunction, value::Value}};

const BUILTINS: &[BuiltinFunction] = &[
	BuiltinFunction { name: "len", function: len },
	BuiltinFunction { name: "first", function: first },
	BuiltinFunction { name: "last", function: last },
	BuiltinFunction { name: "rest", function: rest },
	BuiltinFunction { name: "push", function: push },
	BuiltinFunction { name: "print", function: print },
];

pub fn lookup(name: &str) -> Option<BuiltinFunction> {
	BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}

fn check_arity(arguments: &[Value], want: usize) -> Result<(), Value> {
	if arguments.len() == want {
		Ok(())
	} else {
		Err(RuntimeError::BuiltinArgumentCount { want, got: arguments.len() }.into())
	}
}

fn to_integer(n: usize) -> Value { Value::Integer(i64::try_from(n).unwrap_or(i64::MAX)) }

/// Byte length of a string, element count of an array.
fn len(arguments: &[Value]) -> Value {
	if let Err(error) = check_arity(arguments, 1) {
		return error;
	}
	match &arguments[0] {
		Value::String(s) => to_integer(s.len()),
		Value::Array(elements) => to_integer(elements.len()),
		other => RuntimeError::UnsupportedArgument { function: "len", got: other.r#type() }.into(),
	}
}

/// Run `f` on the single array argument of the builtin `name`.
fn with_array(name: &'static str, arguments: &[Value], f: impl FnOnce(&Rc<Vec<Value>>) -> Value) -> Value {
	if let Err(error) = check_arity(arguments, 1) {
		return error;
	}
	match &arguments[0] {
		Value::Array(elements) => f(elements),
		other => RuntimeError::ExpectedArray { function: name, got: other.r#type() }.into(),
	}
}

fn first(arguments: &[Value]) -> Value {
	with_array("first", arguments, |elements| elements.first().cloned().unwrap_or(Value::Null))
}

fn last(arguments: &[Value]) -> Value {
	with_array("last", arguments, |elements| elements.last().cloned().unwrap_or(Value::Null))
}

fn rest(arguments: &[Value]) -> Value {
	with_array("rest", arguments, |elements| match elements.split_first() {
		Some((_, tail)) => Value::Array(Rc::new(tail.to_vec())),
		None => Value::Null,
	})
}

/// A new array with the element appended. The argument array is untouched.
fn push(arguments: &[Value]) -> Value {
	if let Err(error) = check_arity(arguments, 2) {
		return error;
	}
	match &arguments[0] {
		Value::Array(elements) => {
			let mut extended = Vec::with_capacity(elements.len() + 1);
			extended.extend(elements.iter().cloned());
			extended.push(arguments[1].clone());
			Value::Array(Rc::new(extended))
		}
		other => RuntimeError::ExpectedArray { function: "push", got: other.r#type() }.into(),
	}
}

fn print(arguments: &[Value]) -> Value { write_line("print", &mut std::io::stdout().lock(), arguments) }

/// Strings go out raw, everything else in its inspect form.
fn write_line(function: &'static str, out: &mut impl Write, arguments: &[Value]) -> Value {
	let line = arguments
		.iter()
		.map(|argument| match argument {
			Value::String(s) => s.to_string(),
			other => other.to_string(),
		})
		.collect::<Vec<_>>()
		.join(" ");
	match writeln!(out, "{line}").and_then(|()| out.flush()) {
		Ok(()) => Value::Null,
		Err(e) => RuntimeError::OutputFailed { function, message: e.to_string() }.into(),
	}
}
