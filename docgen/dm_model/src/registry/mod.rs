//! Identifier registry for type and member descriptors.
//!
//! Descriptors are registered under their stable identifier, scoped by the
//! owning assembly. Lookup is two-phase:
//!
//! ```text
//! find_by_id(id, Some(scope))
//!     ├── scoped table for `scope`   (hit: done)
//!     └── global first-wins table    (miss in both: None)
//! ```
//!
//! A miss is not an error: callers treat it as an external or undocumented
//! reference.

use rustc_hash::FxHashMap;

use crate::{MemberIdx, ScopeIdx, TypeIdx};

/// A registered descriptor handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Descriptor {
    Type(TypeIdx),
    Member(MemberIdx),
}

impl Descriptor {
    /// The type handle, if this is a type.
    #[inline]
    pub fn as_type(self) -> Option<TypeIdx> {
        match self {
            Descriptor::Type(ty) => Some(ty),
            Descriptor::Member(_) => None,
        }
    }
}

/// The two-operation lookup contract the resolver depends on.
///
/// [`ScopedRegistry`] is the default implementation; callers may supply their
/// own as long as they keep the insert-or-find and scoped-then-global rules.
pub trait Registry {
    /// Register `descriptor` under `id` in `scope` (`None` = unscoped).
    ///
    /// If `id` is already present in that scope nothing changes and the
    /// existing descriptor is returned.
    fn register(&mut self, scope: Option<ScopeIdx>, id: &str, descriptor: Descriptor)
        -> Descriptor;

    /// Find `id` in `scope`, falling back to an unscoped search.
    fn find_by_id(&self, id: &str, scope: Option<ScopeIdx>) -> Option<Descriptor>;

    /// Find `id` and keep the result only if it is a type.
    fn find_type(&self, id: &str, scope: Option<ScopeIdx>) -> Option<TypeIdx> {
        self.find_by_id(id, scope).and_then(Descriptor::as_type)
    }
}

/// Hash-table registry with per-scope tables and a global fallback table.
#[derive(Clone, Debug, Default)]
pub struct ScopedRegistry {
    /// Scope -> (identifier -> descriptor). `None` holds unscoped entries.
    scoped: FxHashMap<Option<ScopeIdx>, FxHashMap<String, Descriptor>>,

    /// Identifier -> first descriptor registered under it in any scope.
    global: FxHashMap<String, Descriptor>,

    /// Total number of registrations that created an entry.
    len: usize,
}

impl ScopedRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `id` is registered in exactly `scope` (no fallback).
    pub fn contains(&self, id: &str, scope: Option<ScopeIdx>) -> bool {
        self.scoped
            .get(&scope)
            .is_some_and(|table| table.contains_key(id))
    }

    /// Number of distinct `(scope, id)` entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Registry for ScopedRegistry {
    fn register(
        &mut self,
        scope: Option<ScopeIdx>,
        id: &str,
        descriptor: Descriptor,
    ) -> Descriptor {
        let table = self.scoped.entry(scope).or_default();
        if let Some(&existing) = table.get(id) {
            tracing::debug!(id, ?scope, "duplicate registration ignored");
            return existing;
        }

        table.insert(id.to_owned(), descriptor);
        self.global.entry(id.to_owned()).or_insert(descriptor);
        self.len += 1;
        descriptor
    }

    fn find_by_id(&self, id: &str, scope: Option<ScopeIdx>) -> Option<Descriptor> {
        if let Some(found) = self.scoped.get(&scope).and_then(|table| table.get(id)) {
            return Some(*found);
        }
        self.global.get(id).copied()
    }
}

#[cfg(test)]
mod tests;
