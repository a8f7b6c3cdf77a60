//! Model construction with insert-or-find registration.
//!
//! Loading is additive across assemblies and input files: adding a scope,
//! type or member whose identifier is already known returns the existing
//! handle and drops the new descriptor.

use crate::{
    Descriptor, MemberDescriptor, MemberIdx, MemberKind, Model, Registry, Scope, ScopeIdx,
    ScopedRegistry, TypeDescriptor, TypeIdx,
};

/// Builds a [`Model`] and registers every descriptor as it is added.
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder<R = ScopedRegistry> {
    model: Model,
    registry: R,
}

impl ModelBuilder<ScopedRegistry> {
    /// Create a builder backed by a [`ScopedRegistry`].
    pub fn new() -> Self {
        Self::with_registry(ScopedRegistry::new())
    }
}

impl<R: Registry> ModelBuilder<R> {
    /// Create a builder backed by a caller-supplied registry.
    pub fn with_registry(registry: R) -> Self {
        ModelBuilder {
            model: Model::new(),
            registry,
        }
    }

    /// Add an assembly scope, or return the existing one with that name.
    pub fn add_scope(&mut self, name: &str) -> ScopeIdx {
        if let Some((idx, _)) = self.model.scopes().find(|(_, scope)| scope.name == name) {
            return idx;
        }
        self.model.push_scope(Scope {
            name: name.to_owned(),
            types: Vec::new(),
        })
    }

    /// Add a top-level type to `scope`.
    pub fn add_type(&mut self, scope: ScopeIdx, mut ty: TypeDescriptor) -> TypeIdx {
        ty.scope = scope;
        ty.declaring_type = None;
        let (idx, inserted) = self.insert_type(ty);
        if inserted {
            self.model.scope_mut(scope).types.push(idx);
        }
        idx
    }

    /// Add a type nested in `declaring`.
    ///
    /// The nested type is registered in the declaring type's scope and also
    /// appended to its members as a [`MemberKind::NestedType`] entry.
    pub fn add_nested_type(&mut self, declaring: TypeIdx, mut ty: TypeDescriptor) -> TypeIdx {
        ty.scope = self.model.ty(declaring).scope;
        ty.declaring_type = Some(declaring);
        let id = ty.id.clone();
        let name = ty.name.clone();

        let (idx, inserted) = self.insert_type(ty);
        if inserted {
            let mut member = MemberDescriptor::new(id, name, MemberKind::NestedType(idx));
            member.owner = declaring;
            let member_idx = self.model.push_member(member);
            self.model.ty_mut(declaring).members.push(member_idx);
        }
        idx
    }

    /// Add a member declared by `owner`.
    pub fn add_member(&mut self, owner: TypeIdx, mut member: MemberDescriptor) -> MemberIdx {
        let scope = self.model.ty(owner).scope;
        member.owner = owner;

        let candidate = self.model.next_member_idx();
        match self
            .registry
            .register(Some(scope), &member.id, Descriptor::Member(candidate))
        {
            Descriptor::Member(existing) if existing != candidate => existing,
            Descriptor::Member(_) => {
                let idx = self.model.push_member(member);
                self.model.ty_mut(owner).members.push(idx);
                idx
            }
            Descriptor::Type(_) => {
                tracing::debug!(id = %member.id, "member id already names a type; left unregistered");
                let idx = self.model.push_member(member);
                self.model.ty_mut(owner).members.push(idx);
                idx
            }
        }
    }

    /// Register and store `ty`, returning its handle and whether it is new.
    fn insert_type(&mut self, ty: TypeDescriptor) -> (TypeIdx, bool) {
        let candidate = self.model.next_type_idx();
        match self
            .registry
            .register(Some(ty.scope), &ty.id, Descriptor::Type(candidate))
        {
            Descriptor::Type(existing) if existing != candidate => (existing, false),
            Descriptor::Type(_) => (self.model.push_type(ty), true),
            Descriptor::Member(_) => {
                tracing::debug!(id = %ty.id, "type id already names a member; left unregistered");
                (self.model.push_type(ty), true)
            }
        }
    }

    // === Access ===

    #[inline]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[inline]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Consume the builder.
    pub fn finish(self) -> (Model, R) {
        (self.model, self.registry)
    }
}
