//! # spruce-rules
//!
//! Built-in lint rules for spruce.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | 108 | `use-in` | Prefer `x in (y, z)` over repeated `==` checks joined by `or` |
//! | 127 | `no-with-assign` | Flags a declaration made redundant by a with-block reassignment |
//! | 145 | `no-slice-copy` | Prefer `.copy()` over a full-range slice of a sequence |
//!
//! ## Usage
//!
//! ```ignore
//! use spruce_core::{Engine, Selection};
//!
//! let registry = spruce_rules::registry();
//! let report = Engine::new(&registry).run(&module, &Selection::all());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod no_slice_copy;
mod no_with_assign;
mod use_in;

pub use catalog::{all_rules, registry};
pub use no_slice_copy::NoSliceCopy;
pub use no_with_assign::NoWithAssign;
pub use use_in::UseIn;

/// Re-export core types for convenience.
pub use spruce_core::{Diagnostic, Rule, RuleBox};
