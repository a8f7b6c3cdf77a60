//! Documentation model for the member inheritance resolver.
//!
//! Types and members are stored in arenas owned by [`Model`] and addressed
//! by typed 32-bit handles. Every descriptor is registered under its stable
//! identifier in a [`Registry`], scoped by the assembly that declares it.
//!
//! # Architecture
//!
//! ```text
//! ModelBuilder
//!     ├── Model            (scopes, types, members)
//!     └── Registry         (identifier -> handle, scoped then global)
//! ```

mod builder;
mod descriptor;
mod idx;
mod model;
mod registry;

pub use builder::ModelBuilder;
pub use descriptor::{
    Capabilities, DescriptorRef, HierarchyEntry, MemberDescriptor, MemberKind, MemberView,
    ResolveState, Scope, TypeDescriptor, TypeKind,
};
pub use idx::{MemberIdx, ScopeIdx, TypeIdx};
pub use model::Model;
pub use registry::{Descriptor, Registry, ScopedRegistry};
