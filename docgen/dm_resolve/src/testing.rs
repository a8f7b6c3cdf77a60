//! Model fixtures for unit tests.
//!
//! Types are named `T:<name>`, members `<prefix>:<owner>.<name>`, all in a
//! single `Core` scope.

use dm_model::{
    MemberDescriptor, MemberIdx, MemberKind, Model, ModelBuilder, ScopeIdx, ScopedRegistry,
    TypeDescriptor, TypeIdx, TypeKind,
};

pub(crate) struct Fixture {
    builder: ModelBuilder,
    scope: ScopeIdx,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let mut builder = ModelBuilder::new();
        let scope = builder.add_scope("Core");
        Fixture { builder, scope }
    }

    /// Add a class; `bases` are names, nearest first.
    pub(crate) fn class(&mut self, name: &str, bases: &[&str]) -> TypeIdx {
        self.ty(name, TypeKind::Class, bases)
    }

    pub(crate) fn ty(&mut self, name: &str, kind: TypeKind, bases: &[&str]) -> TypeIdx {
        let desc = TypeDescriptor::new(format!("T:{name}"), name, kind)
            .with_bases(bases.iter().map(|base| format!("T:{base}")));
        self.builder.add_type(self.scope, desc)
    }

    pub(crate) fn nested(&mut self, outer: TypeIdx, name: &str, bases: &[&str]) -> TypeIdx {
        let outer_name = self.builder.model().ty(outer).name.clone();
        let desc = TypeDescriptor::new(format!("T:{outer_name}.{name}"), name, TypeKind::Class)
            .with_bases(bases.iter().map(|base| format!("T:{base}")));
        self.builder.add_nested_type(outer, desc)
    }

    pub(crate) fn member(&mut self, owner: TypeIdx, name: &str, kind: MemberKind) -> MemberIdx {
        let id = format!("{}:{}.{name}", prefix(kind), self.owner_name(owner));
        self.builder
            .add_member(owner, MemberDescriptor::new(id, name, kind))
    }

    pub(crate) fn method(&mut self, owner: TypeIdx, name: &str) -> MemberIdx {
        self.member(owner, name, MemberKind::Method)
    }

    /// Add a method overload; `params` distinguishes the identifier.
    pub(crate) fn overload(&mut self, owner: TypeIdx, name: &str, params: &str) -> MemberIdx {
        let id = format!("M:{}.{name}({params})", self.owner_name(owner));
        self.builder
            .add_member(owner, MemberDescriptor::new(id, name, MemberKind::Method))
    }

    /// Add a method overriding `base`.
    pub(crate) fn overriding(&mut self, owner: TypeIdx, name: &str, base: MemberIdx) -> MemberIdx {
        let base_id = self.builder.model().member(base).id.clone();
        let id = format!("M:{}.{name}", self.owner_name(owner));
        self.builder.add_member(
            owner,
            MemberDescriptor::new(id, name, MemberKind::Method).overriding(base_id),
        )
    }

    pub(crate) fn finish(self) -> (Model, ScopedRegistry) {
        self.builder.finish()
    }

    fn owner_name(&self, owner: TypeIdx) -> String {
        self.builder.model().ty(owner).name.clone()
    }
}

fn prefix(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Constructor | MemberKind::Method | MemberKind::Operator => "M",
        MemberKind::Property => "P",
        MemberKind::Field => "F",
        MemberKind::Event => "E",
        MemberKind::NestedType(_) => "T",
    }
}

/// Identifiers of `ty`'s `all_members`, in order.
pub(crate) fn all_member_ids(model: &Model, ty: TypeIdx) -> Vec<String> {
    model
        .ty(ty)
        .all_member_handles()
        .map(|member| model.member(member).id.clone())
        .collect()
}

/// `(depth, type id)` pairs of `ty`'s flattened hierarchy.
pub(crate) fn hierarchy(model: &Model, ty: TypeIdx) -> Vec<(usize, String)> {
    model
        .ty(ty)
        .flattened_hierarchy
        .iter()
        .map(|entry| (entry.depth, entry.type_id.clone()))
        .collect()
}
