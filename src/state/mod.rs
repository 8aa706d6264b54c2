//! Dialog state module.
//!
//! Splits the session state into small files while keeping the public API
//! under `crate::state::*` via re-exports: catalog value types, the pager
//! over the eligible list, and the id-keyed selection set.

pub mod pager;
pub mod selection;
pub mod types;

// Public re-exports to keep call sites short
pub use pager::{PAGE_SIZE, Pager};
pub use selection::Selection;
pub use types::{Addon, DialogPhase, DialogResult, MainMod, MetadataRecord, ModId};
