//! Arena storage for scopes, types and members.

use crate::{
    DescriptorRef, MemberDescriptor, MemberIdx, Scope, ScopeIdx, TypeDescriptor, TypeIdx,
};

/// All descriptors of one documentation run.
///
/// Handles handed out by [`ModelBuilder`](crate::ModelBuilder) are always
/// valid for the model they came from; indexing with a foreign handle panics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    scopes: Vec<Scope>,
    types: Vec<TypeDescriptor>,
    members: Vec<MemberDescriptor>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    // === Access ===

    #[inline]
    pub fn ty(&self, idx: TypeIdx) -> &TypeDescriptor {
        &self.types[idx.index()]
    }

    #[inline]
    pub fn ty_mut(&mut self, idx: TypeIdx) -> &mut TypeDescriptor {
        &mut self.types[idx.index()]
    }

    #[inline]
    pub fn member(&self, idx: MemberIdx) -> &MemberDescriptor {
        &self.members[idx.index()]
    }

    #[inline]
    pub fn member_mut(&mut self, idx: MemberIdx) -> &mut MemberDescriptor {
        &mut self.members[idx.index()]
    }

    #[inline]
    pub fn scope(&self, idx: ScopeIdx) -> &Scope {
        &self.scopes[idx.index()]
    }

    /// Borrow a type as a [`DescriptorRef`].
    #[inline]
    pub fn type_ref(&self, idx: TypeIdx) -> DescriptorRef<'_> {
        DescriptorRef::Type(self.ty(idx))
    }

    /// Borrow a member as a [`DescriptorRef`].
    #[inline]
    pub fn member_ref(&self, idx: MemberIdx) -> DescriptorRef<'_> {
        DescriptorRef::Member(self.member(idx))
    }

    // === Iteration ===

    /// All type handles in load order (nested types included).
    pub fn type_handles(&self) -> impl Iterator<Item = TypeIdx> {
        (0..self.types.len()).map(TypeIdx::from_index)
    }

    /// All member handles in load order.
    pub fn member_handles(&self) -> impl Iterator<Item = MemberIdx> {
        (0..self.members.len()).map(MemberIdx::from_index)
    }

    /// All scopes with their handles, in load order.
    pub fn scopes(&self) -> impl Iterator<Item = (ScopeIdx, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .map(|(i, scope)| (ScopeIdx::from_index(i), scope))
    }

    /// Find a type by identifier with a linear scan.
    ///
    /// Intended for tools and tests; the resolver goes through the registry.
    pub fn type_by_id(&self, id: &str) -> Option<TypeIdx> {
        self.types
            .iter()
            .position(|ty| ty.id == id)
            .map(TypeIdx::from_index)
    }

    #[inline]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    // === Arena growth (builder only) ===

    pub(crate) fn push_scope(&mut self, scope: Scope) -> ScopeIdx {
        let idx = ScopeIdx::from_index(self.scopes.len());
        self.scopes.push(scope);
        idx
    }

    pub(crate) fn scope_mut(&mut self, idx: ScopeIdx) -> &mut Scope {
        &mut self.scopes[idx.index()]
    }

    pub(crate) fn push_type(&mut self, ty: TypeDescriptor) -> TypeIdx {
        let idx = TypeIdx::from_index(self.types.len());
        self.types.push(ty);
        idx
    }

    pub(crate) fn push_member(&mut self, member: MemberDescriptor) -> MemberIdx {
        let idx = MemberIdx::from_index(self.members.len());
        self.members.push(member);
        idx
    }

    pub(crate) fn next_type_idx(&self) -> TypeIdx {
        TypeIdx::from_index(self.types.len())
    }

    pub(crate) fn next_member_idx(&self) -> MemberIdx {
        MemberIdx::from_index(self.members.len())
    }
}
