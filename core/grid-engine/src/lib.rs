//! FILENAME: core/grid-engine/src/lib.rs
//! Grid subsystem for the Nakamoto table.
//!
//! This crate turns a (possibly nested) column definition tree and a list
//! of flat records into a framework-agnostic grid model: multi-row headers
//! with merged cells, and data rows aligned to the leaf columns.
//!
//! Layers:
//! - `definition`: Column and record types (what the table IS)
//! - `schema`: Column tree resolution (HOW headers are laid out)
//! - `view`: Renderable output for a frontend (WHAT we display)
//! - `engine`: Row building (HOW records become cells)

pub mod definition;
pub mod error;
pub mod schema;
pub mod view;
pub mod engine;

pub use definition::*;
pub use error::SchemaError;
pub use schema::{resolve, ResolvedSchema};
pub use view::*;
pub use engine::{build, render_grid};
