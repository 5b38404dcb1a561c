use std::{cell::{Ref, RefCell, RefMut}, rc::Rc};

/// A scope shared between the code running in it and every closure created
/// there. Cloning the handle shares the scope.
#[derive(Debug, Default)]
pub struct RcCell<T> {
	inner: Rc<RefCell<T>>,
}

impl<T> Clone for RcCell<T> {
	fn clone(&self) -> Self { Self { inner: Rc::clone(&self.inner) } }
}

impl<T> RcCell<T> {
	pub fn new(value: T) -> Self { Self { inner: Rc::new(RefCell::new(value)) } }

	pub fn borrow(&self) -> Ref<'_, T> { self.inner.borrow() }

	pub fn borrow_mut(&self) -> RefMut<'_, T> { self.inner.borrow_mut() }
}

/// Grow the stack when less than this is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly used up. Evaluation recurses once per nested expression and call,
/// so deep user recursion would otherwise overflow the native stack.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R { stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f) }

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R { f() }
