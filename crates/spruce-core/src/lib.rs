//! # spruce-core
//!
//! Core framework for the spruce lint engine.
//!
//! This crate provides the pieces rules are built from:
//!
//! - The syntax tree model ([`ast`]) handed over by an external front-end,
//!   with mandatory source positions and optional resolved static types
//! - The [`visit::Visit`] trait for pre-order, depth-first traversal with
//!   per-kind overrides and explicit descent control
//! - The [`Rule`] trait and the [`Registry`] catalogue with selection by
//!   code or category
//! - [`Diagnostic`] findings, the append-only [`Collector`], and the
//!   [`Engine`] producing a deterministically ordered report
//!
//! Parsing, type resolution, CLI, and output formatting live outside this
//! crate; trees come in fully built and diagnostics go out as plain data.
//!
//! ## Example
//!
//! ```ignore
//! use spruce_core::{Engine, Registry, Selection};
//!
//! let registry = Registry::from_rules(my_rules)?;
//! let report = Engine::new(&registry).run(&module, &Selection::all());
//! for diagnostic in &report.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod engine;
mod registry;
mod rule;
mod types;
pub mod visit;

pub use ast::{Module, Span, TypeSig};
pub use engine::{Engine, RunReport};
pub use registry::{Registry, RegistryError, Selection, SelectionError, Selector};
pub use rule::{Rule, RuleBox};
pub use types::{Collector, Diagnostic, RuleInfo};
