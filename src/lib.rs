//! # Shoebill
//!
//! A tree-walking interpreter for a small expression language with integers,
//! strings, booleans, arrays, hashes and first-class closures.
//!
//! ``` markdown
//! let adder = fn(x) { fn(y) { x + y } };
//! let addTwo = adder(2);
//! print(addTwo(40), len("héllo"), {"k": [1, 2]}["k"]);
//! ```

//! ## Reading
//!
//! Source arrives as a stream of byte chunks over a bounded channel. A file is
//! read on its own thread by the [`reader`], in-memory source goes through the
//! same channel type. Chunk boundaries fall anywhere, even inside a token or
//! a multi-byte character.

//! ## Scanning
//!
//! The [`scanner`] keeps two buffers: the chunk it is reading and the one
//! before it. A token cut by a chunk boundary is stitched from the tail of
//! the older buffer and the head of the newer one, so the token stream never
//! depends on how the input was split.

//! ## Parsing
//!
//! A Pratt [`parser`] turns tokens into a [`statement::Program`]. Each token
//! kind maps to a prefix and/or infix handler plus a binding power, and one
//! loop climbs precedence. Errors are collected rather than fatal: the parser
//! skips to the next `;` and keeps going.
//!
//! ``` markdown
//! let x = -a * (b + 1);
//! └── * (Expression::Infix)
//!     ├── - (Expression::Prefix)
//!     │   └── a (Expression::Identifier)
//!     └── + (Expression::Infix)
//!         ├── b (Expression::Identifier)
//!         └── 1 (Expression::Integer)
//! ```

//! ## Evaluation
//!
//! The [`interpreter`] walks the tree. Runtime errors are values: they travel
//! up to the program boundary and come out as the program's result. Functions
//! capture the [`environment`] they were created in.

pub mod cli;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod reader;
pub mod scanner;
mod shoebill;
pub mod statement;
pub mod utils;

use std::sync::Once;

pub use error::{ShoebillError, interpreter::RuntimeError, parser::{ParseError, ParseErrorType}};
pub use interpreter::{Interpreter, value::Value};
pub use shoebill::Shoebill;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber, at most once per process and only when
/// `RUST_LOG` is set.
pub fn init_tracing() {
	TRACING_INIT.call_once(|| {
		use tracing_subscriber::{EnvFilter, fmt, prelude::*};

		if std::env::var_os("RUST_LOG").is_some() {
			tracing_subscriber::registry()
				.with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
				.with(EnvFilter::from_default_env())
				.init();
		}
	});
}
