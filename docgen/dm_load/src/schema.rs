//! On-disk model description.
//!
//! ```text
//! { "assemblies": [
//!     { "name": "Core",
//!       "namespaces": [
//!         { "name": "Demo",
//!           "types": [
//!             { "id": "T:Demo.Circle", "name": "Circle", "kind": "class",
//!               "bases": ["T:Demo.Shape", "T:System.Object"],
//!               "interfaces": ["T:Demo.IDrawable"],
//!               "members": [
//!                 { "id": "M:Demo.Circle.Draw", "name": "Draw", "kind": "method",
//!                   "overrides": "M:Demo.Shape.Draw" } ],
//!               "nested_types": [] } ] } ] } ] }
//! ```

use dm_model::{MemberKind, TypeKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    pub assemblies: Vec<AssemblyDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblyDef {
    pub name: String,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDef {
    /// Empty for the global namespace.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: TypeKindDef,
    /// Base-type identifiers, nearest first.
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDef>,
    #[serde(default)]
    pub nested_types: Vec<TypeDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDef {
    pub id: String,
    pub name: String,
    pub kind: MemberKindDef,
    #[serde(default)]
    pub overrides: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TypeKindDef {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl From<TypeKindDef> for TypeKind {
    fn from(kind: TypeKindDef) -> Self {
        match kind {
            TypeKindDef::Class => TypeKind::Class,
            TypeKindDef::Struct => TypeKind::Struct,
            TypeKindDef::Interface => TypeKind::Interface,
            TypeKindDef::Enum => TypeKind::Enum,
            TypeKindDef::Delegate => TypeKind::Delegate,
        }
    }
}

/// Member kinds a file may declare. Nested types go in `nested_types`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberKindDef {
    Constructor,
    Method,
    Operator,
    Property,
    Field,
    Event,
}

impl MemberKindDef {
    pub(crate) fn into_kind(self) -> MemberKind {
        match self {
            MemberKindDef::Constructor => MemberKind::Constructor,
            MemberKindDef::Method => MemberKind::Method,
            MemberKindDef::Operator => MemberKind::Operator,
            MemberKindDef::Property => MemberKind::Property,
            MemberKindDef::Field => MemberKind::Field,
            MemberKindDef::Event => MemberKind::Event,
        }
    }
}
