//! Type and member descriptors.
//!
//! Descriptors are created once when metadata is loaded and mutated in place
//! by the resolver: `all_members`, page ids, capability flags, descendant
//! links and flattened hierarchies are all filled in after loading.

use bitflags::bitflags;

use crate::{MemberIdx, ScopeIdx, TypeIdx};

/// The kind of a documented type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Lowercase keyword for display.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }
}

/// The kind of a documented member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Constructor,
    Method,
    Operator,
    Property,
    Field,
    Event,
    /// A type declared inside another type.
    NestedType(TypeIdx),
}

impl MemberKind {
    /// Constructors, methods and operators get page ids recomputed per type
    /// and take part in overload detection.
    #[inline]
    pub fn is_method_like(self) -> bool {
        matches!(
            self,
            MemberKind::Constructor | MemberKind::Method | MemberKind::Operator
        )
    }

    /// Check if this is a constructor.
    #[inline]
    pub fn is_constructor(self) -> bool {
        matches!(self, MemberKind::Constructor)
    }

    /// The nested type handle, if this member is a nested type.
    #[inline]
    pub fn nested_type(self) -> Option<TypeIdx> {
        match self {
            MemberKind::NestedType(ty) => Some(ty),
            _ => None,
        }
    }

    /// Lowercase keyword for display.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Constructor => "constructor",
            MemberKind::Method => "method",
            MemberKind::Operator => "operator",
            MemberKind::Property => "property",
            MemberKind::Field => "field",
            MemberKind::Event => "event",
            MemberKind::NestedType(_) => "type",
        }
    }
}

bitflags! {
    /// Coarse "has members of kind X" flags used to decide which sections a
    /// type page shows.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const CONSTRUCTORS = 1 << 0;
        const METHODS = 1 << 1;
        const OPERATORS = 1 << 2;
        const PROPERTIES = 1 << 3;
        const FIELDS = 1 << 4;
        const EVENTS = 1 << 5;
        const NESTED_TYPES = 1 << 6;
    }
}

impl Capabilities {
    /// The flag set by a member of the given kind.
    pub fn for_kind(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Constructor => Capabilities::CONSTRUCTORS,
            MemberKind::Method => Capabilities::METHODS,
            MemberKind::Operator => Capabilities::OPERATORS,
            MemberKind::Property => Capabilities::PROPERTIES,
            MemberKind::Field => Capabilities::FIELDS,
            MemberKind::Event => Capabilities::EVENTS,
            MemberKind::NestedType(_) => Capabilities::NESTED_TYPES,
        }
    }
}

/// Progress of inheritance resolution for one type.
///
/// `Processing` marks types on the current resolution path; meeting one again
/// means the base chain is cyclic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolveState {
    #[default]
    Unprocessed,
    Processing,
    Done,
}

/// One documented type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Stable identifier, unique within the owning scope (e.g. `T:Demo.Shape`).
    pub id: String,

    /// Display name (e.g. `Shape`).
    pub name: String,

    /// Containing namespace (empty for the global namespace).
    pub namespace: String,

    pub kind: TypeKind,

    /// Owning assembly scope. Set by the builder.
    pub scope: ScopeIdx,

    /// Declaring type for nested types. Set by the builder.
    pub declaring_type: Option<TypeIdx>,

    /// Base-type identifiers, nearest first.
    pub bases: Vec<String>,

    /// Implemented-interface identifiers.
    pub interfaces: Vec<String>,

    /// Members declared by this type, in declaration order.
    pub members: Vec<MemberIdx>,

    /// Own members plus non-overridden inherited members, sorted by name.
    pub all_members: Vec<MemberView>,

    /// Types whose direct base is this type.
    pub descendants: Vec<TypeIdx>,

    /// Types listing this interface among their interfaces.
    pub implementers: Vec<TypeIdx>,

    /// Ancestors, this type and every transitive descendant, with depths.
    pub flattened_hierarchy: Vec<HierarchyEntry>,

    pub capabilities: Capabilities,

    /// File-safe identifier for the type's page.
    pub page_id: String,

    /// Direct base recorded by the resolver (`None` when unresolvable).
    pub resolved_base: Option<TypeIdx>,

    pub state: ResolveState,
}

impl TypeDescriptor {
    /// Create an unregistered descriptor with no bases and no members.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDescriptor {
            id: id.into(),
            name: name.into(),
            namespace: String::new(),
            kind,
            scope: ScopeIdx::from_raw(0),
            declaring_type: None,
            bases: Vec::new(),
            interfaces: Vec::new(),
            members: Vec::new(),
            all_members: Vec::new(),
            descendants: Vec::new(),
            implementers: Vec::new(),
            flattened_hierarchy: Vec::new(),
            capabilities: Capabilities::empty(),
            page_id: String::new(),
            resolved_base: None,
            state: ResolveState::Unprocessed,
        }
    }

    /// Set the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the base chain, nearest base first.
    #[must_use]
    pub fn with_bases<I, S>(mut self, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bases = bases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the implemented interfaces.
    #[must_use]
    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    /// Identifier of the direct base, if any.
    #[inline]
    pub fn direct_base(&self) -> Option<&str> {
        self.bases.first().map(String::as_str)
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    #[inline]
    pub fn has_methods(&self) -> bool {
        self.capabilities.contains(Capabilities::METHODS)
    }

    #[inline]
    pub fn has_properties(&self) -> bool {
        self.capabilities.contains(Capabilities::PROPERTIES)
    }

    #[inline]
    pub fn has_events(&self) -> bool {
        self.capabilities.contains(Capabilities::EVENTS)
    }

    #[inline]
    pub fn has_fields(&self) -> bool {
        self.capabilities.contains(Capabilities::FIELDS)
    }

    /// Handles of `all_members`, in order.
    pub fn all_member_handles(&self) -> impl Iterator<Item = MemberIdx> + '_ {
        self.all_members.iter().map(|view| view.member)
    }
}

/// One documented member (constructor, method, property, field, event or
/// nested type).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDescriptor {
    /// Stable identifier (e.g. `M:Demo.Shape.Draw`).
    pub id: String,

    /// Display name (e.g. `Draw`).
    pub name: String,

    pub kind: MemberKind,

    /// Declaring type. Set by the builder.
    pub owner: TypeIdx,

    /// Identifier of the base member this one overrides.
    pub overrides: Option<String>,

    /// Page id as seen from the declaring type.
    pub page_id: String,

    /// Whether the declaring type has other methods with the same name.
    pub has_overrides: bool,
}

impl MemberDescriptor {
    /// Create an unregistered member descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: MemberKind) -> Self {
        MemberDescriptor {
            id: id.into(),
            name: name.into(),
            kind,
            owner: TypeIdx::from_raw(0),
            overrides: None,
            page_id: String::new(),
            has_overrides: false,
        }
    }

    /// Mark this member as overriding the base member `base_id`.
    #[must_use]
    pub fn overriding(mut self, base_id: impl Into<String>) -> Self {
        self.overrides = Some(base_id.into());
        self
    }

    /// Check whether this member overrides the member identified by `id`.
    #[inline]
    pub fn overrides_id(&self, id: &str) -> bool {
        self.overrides.as_deref() == Some(id)
    }
}

/// A member as seen from one type's `all_members` list.
///
/// Inherited members are shared descriptors, so values that depend on the
/// viewing type live here rather than on the descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberView {
    pub member: MemberIdx,

    /// Page id, disambiguated within the viewing type.
    pub page_id: String,

    /// Whether the viewing type has other methods with the same name.
    pub has_overrides: bool,
}

impl MemberView {
    /// A view with no page id and no overload flag yet.
    pub fn new(member: MemberIdx) -> Self {
        MemberView {
            member,
            page_id: String::new(),
            has_overrides: false,
        }
    }
}

/// One row of a flattened hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HierarchyEntry {
    /// Distance from the most distant ancestor.
    pub depth: usize,

    /// Identifier of the referenced type.
    pub type_id: String,

    /// Resolved handle (`None` for undocumented ancestors).
    pub ty: Option<TypeIdx>,
}

/// An assembly: the unit of identifier uniqueness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    pub name: String,

    /// Top-level types in load order.
    pub types: Vec<TypeIdx>,
}

/// Borrowed view of either kind of descriptor.
#[derive(Copy, Clone, Debug)]
pub enum DescriptorRef<'a> {
    Type(&'a TypeDescriptor),
    Member(&'a MemberDescriptor),
}

impl<'a> DescriptorRef<'a> {
    /// Stable identifier of the referenced descriptor.
    pub fn id(self) -> &'a str {
        match self {
            DescriptorRef::Type(ty) => &ty.id,
            DescriptorRef::Member(member) => &member.id,
        }
    }

    /// Display name of the referenced descriptor.
    pub fn name(self) -> &'a str {
        match self {
            DescriptorRef::Type(ty) => &ty.name,
            DescriptorRef::Member(member) => &member.name,
        }
    }
}
