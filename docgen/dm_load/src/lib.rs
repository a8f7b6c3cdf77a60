//! JSON metadata source for the documentation model.
//!
//! Reads assembly descriptions (see [`schema`]) into a [`dm_model::Model`].
//! Several files may be loaded into one model; identifiers already known
//! keep their first definition.

mod error;
mod loader;
pub mod schema;

pub use error::{LoadError, Origin};
pub use loader::{load_paths, LoadSummary, Loader};
