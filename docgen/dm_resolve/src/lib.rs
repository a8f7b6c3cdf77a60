//! Member inheritance resolution and hierarchy flattening.
//!
//! Operates in place on a [`dm_model::Model`]:
//!
//! - **Inheritance**: every type's `all_members` is its own members plus the
//!   non-overridden, non-constructor members of its base, sorted by name,
//!   with page ids disambiguated per type.
//! - **Descendants**: every type is linked into its base's `descendants` and
//!   into the `implementers` of the interfaces it lists.
//! - **Flattening**: every class gets a `(depth, type)` list of its ancestors,
//!   itself and all transitive descendants.
//!
//! Nothing here fails. Undocumented bases mean "no inheritance", id
//! collisions get a deterministic suffix, and malformed input (cyclic bases,
//! descendants that cannot be placed) is reported as a [`Problem`] while
//! processing continues.
//!
//! ```text
//! let (mut model, registry) = builder.finish();
//! let report = dm_resolve::process(&mut model, &registry);
//! ```

mod config;
mod flatten;
mod inherit;
mod page_id;
mod problem;
mod process;
mod stack;

#[cfg(test)]
mod testing;

pub use config::{ProcessorConfig, UnplacedDescendant};
pub use page_id::{file_safe_page_id, FileSafePageId, PageIdFunction};
pub use problem::Problem;
pub use process::{process, ProcessReport, Processor};
