use std::{fmt::Display, hash::Hasher, rc::Rc};

use rustc_hash::{FxHashMap, FxHasher};

use crate::interpreter::callable::{BuiltinFunction, FunctionValue};

/// A runtime value.
///
/// Compound values sit behind `Rc`, so cloning a value (binding it, passing it
/// as an argument) never copies an array or hash. Nothing mutates them in
/// place: `push` builds a new array.
#[derive(Debug, Clone)]
pub enum Value {
	Integer(i64),
	String(Rc<str>),
	Boolean(bool),
	Null,
	Array(Rc<Vec<Value>>),
	Hash(Rc<HashValue>),
	Function(Rc<FunctionValue>),
	Builtin(BuiltinFunction),
	/// A value travelling out of a function body through `return`.
	Return(Box<Value>),
	/// A runtime error message. It aborts evaluation up to the nearest
	/// program boundary.
	Error(String),
}

/// The kind of a [`Value`], as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Integer,
	String,
	Boolean,
	Null,
	Array,
	Hash,
	Function,
	Builtin,
	Return,
	Error,
}

impl Display for ValueType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		#[rustfmt::skip]
		let name = match self {
			ValueType::Integer => "INTEGER",
			ValueType::String => "STRING",
			ValueType::Boolean => "BOOLEAN",
			ValueType::Null => "NULL",
			ValueType::Array => "ARRAY",
			ValueType::Hash => "HASH",
			ValueType::Function => "FUNCTION",
			ValueType::Builtin => "BUILTIN",
			ValueType::Return => "RETURN_VALUE",
			ValueType::Error => "ERROR",
		};
		write!(f, "{name}")
	}
}

/// Identity of a hashable value inside a hash. Equal values of the same kind
/// produce equal keys, values of different kinds never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
	pub r#type: ValueType,
	pub value:  u64,
}

/// An entry of a hash: the original key value is kept for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
	pub key:   Value,
	pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashValue {
	pub pairs: FxHashMap<HashKey, HashPair>,
}

impl Value {
	pub fn r#type(&self) -> ValueType {
		match self {
			Value::Integer(_) => ValueType::Integer,
			Value::String(_) => ValueType::String,
			Value::Boolean(_) => ValueType::Boolean,
			Value::Null => ValueType::Null,
			Value::Array(_) => ValueType::Array,
			Value::Hash(_) => ValueType::Hash,
			Value::Function(_) => ValueType::Function,
			Value::Builtin(_) => ValueType::Builtin,
			Value::Return(_) => ValueType::Return,
			Value::Error(_) => ValueType::Error,
		}
	}

	/// Only integers, strings and booleans can key a hash.
	pub fn hash_key(&self) -> Option<HashKey> {
		let value = match self {
			Value::Integer(n) => *n as u64,
			Value::Boolean(b) => u64::from(*b),
			Value::String(s) => {
				let mut hasher = FxHasher::default();
				hasher.write(s.as_bytes());
				hasher.finish()
			}
			_ => return None,
		};
		Some(HashKey { r#type: self.r#type(), value })
	}

	/// Condition semantics: `null`, `false` and `0` are false.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Null => false,
			Value::Boolean(b) => *b,
			Value::Integer(n) => *n != 0,
			_ => true,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self { Value::Boolean(value) }
}

impl From<i64> for Value {
	fn from(value: i64) -> Self { Value::Integer(value) }
}

impl From<&str> for Value {
	fn from(value: &str) -> Self { Value::String(value.into()) }
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		use Value::*;
		match (self, other) {
			(Integer(l), Integer(r)) => l == r,
			(String(l), String(r)) => l == r,
			(Boolean(l), Boolean(r)) => l == r,
			(Null, Null) => true,
			(Array(l), Array(r)) => l == r,
			(Hash(l), Hash(r)) => l == r,
			(Function(l), Function(r)) => Rc::ptr_eq(l, r),
			(Builtin(l), Builtin(r)) => l.name == r.name,
			(Return(l), Return(r)) => l == r,
			(Error(l), Error(r)) => l == r,
			_ => false,
		}
	}
}

/// The inspect form shown by the REPL. Strings are quoted.
impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Integer(n) => write!(f, "{n}"),
			Value::String(s) => write!(f, "\"{s}\""),
			Value::Boolean(b) => write!(f, "{b}"),
			Value::Null => write!(f, "null"),
			Value::Array(elements) => {
				let elements = elements.iter().map(|element| element.to_string()).collect::<Vec<_>>();
				write!(f, "[{}]", elements.join(", "))
			}
			Value::Hash(hash) => {
				let pairs = hash.pairs.values().map(|pair| format!("{}: {}", pair.key, pair.value)).collect::<Vec<_>>();
				write!(f, "{{{}}}", pairs.join(", "))
			}
			Value::Function(function) => write!(f, "{function}"),
			Value::Builtin(_) => write!(f, "builtin function"),
			Value::Return(value) => write!(f, "{value}"),
			Value::Error(message) => write!(f, "ERROR: {message}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn equal_strings_share_a_hash_key() {
		let hello = Value::from("Hello World");
		let hello_again = Value::from("Hello World");
		let other = Value::from("My name is johnny");

		assert_eq!(hello.hash_key(), hello_again.hash_key());
		assert_ne!(hello.hash_key(), other.hash_key());
	}

	#[test]
	fn hash_keys_differ_across_kinds() {
		assert_ne!(Value::Integer(1).hash_key(), Value::Boolean(true).hash_key());
		assert_ne!(Value::Integer(0).hash_key(), Value::Boolean(false).hash_key());
		assert_eq!(Value::Integer(-1).hash_key(), Value::Integer(-1).hash_key());
	}

	#[test]
	fn unhashable_values() {
		assert_eq!(Value::Null.hash_key(), None);
		assert_eq!(Value::Array(Rc::new(vec![])).hash_key(), None);
		assert_eq!(Value::Hash(Rc::default()).hash_key(), None);
	}

	#[test]
	fn truthiness() {
		assert!(!Value::Null.is_truthy());
		assert!(!Value::Boolean(false).is_truthy());
		assert!(!Value::Integer(0).is_truthy());
		assert!(Value::Integer(-3).is_truthy());
		assert!(Value::from("").is_truthy());
		assert!(Value::Array(Rc::new(vec![])).is_truthy());
	}

	#[test]
	fn inspect() {
		let array = Value::Array(Rc::new(vec![Value::Integer(1), Value::from("two"), Value::Null]));
		assert_eq!(array.to_string(), r#"[1, "two", null]"#);
		assert_eq!(Value::Error("boom".into()).to_string(), "ERROR: boom");
		assert_eq!(Value::Return(Box::new(Value::Boolean(true))).to_string(), "true");

		let key = Value::from("a");
		let mut hash = HashValue::default();
		hash.pairs.insert(key.hash_key().unwrap(), HashPair { key, value: Value::Integer(1) });
		assert_eq!(Value::Hash(Rc::new(hash)).to_string(), r#"{"a": 1}"#);
	}
}
