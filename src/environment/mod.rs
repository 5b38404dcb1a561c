use rustc_hash::FxHashMap;

use crate::{interpreter::value::Value, utils::RcCell};

/// A lexical scope: bindings plus the scope it is nested in. Clone the RcCell
/// handle to share a scope, it's a shallow copy.
///
/// The enclosing scope is held strongly. A closure returned from a call keeps
/// its whole defining chain alive even after the function value that made the
/// call is gone.
#[derive(Default, Debug)]
pub struct Environment {
	variables: FxHashMap<String, Value>,
	outer:     Option<RcCell<Environment>>,
}

impl Environment {
	/// A fresh scope for one function invocation, nested in the scope the
	/// function was defined in.
	pub fn new_enclosed(outer: RcCell<Environment>) -> Self {
		Self { variables: FxHashMap::default(), outer: Some(outer) }
	}

	/// Bind `name` in this scope, shadowing any outer binding of that name and
	/// replacing an earlier binding in this scope.
	pub fn define(&mut self, name: impl Into<String>, value: Value) { self.variables.insert(name.into(), value); }

	/// Look `name` up here, then outward through the enclosing scopes.
	pub fn get(&self, name: &str) -> Option<Value> {
		self.variables.get(name).cloned().or_else(|| self.outer.as_ref().and_then(|env| env.borrow().get(name)))
	}
}
