use super::*;

fn scope(raw: u32) -> Option<ScopeIdx> {
    Some(ScopeIdx::from_raw(raw))
}

#[test]
fn register_and_find_in_scope() {
    let mut registry = ScopedRegistry::new();
    let ty = Descriptor::Type(TypeIdx::from_raw(0));

    assert_eq!(registry.register(scope(0), "T:Demo.Shape", ty), ty);
    assert_eq!(registry.find_by_id("T:Demo.Shape", scope(0)), Some(ty));
    assert!(registry.contains("T:Demo.Shape", scope(0)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn reregistration_returns_existing() {
    let mut registry = ScopedRegistry::new();
    let first = Descriptor::Type(TypeIdx::from_raw(0));
    let second = Descriptor::Type(TypeIdx::from_raw(1));

    registry.register(scope(0), "T:Demo.Shape", first);
    let result = registry.register(scope(0), "T:Demo.Shape", second);

    assert_eq!(result, first);
    assert_eq!(registry.find_by_id("T:Demo.Shape", scope(0)), Some(first));
    assert_eq!(registry.len(), 1);
}

#[test]
fn same_id_in_two_scopes() {
    let mut registry = ScopedRegistry::new();
    let a = Descriptor::Type(TypeIdx::from_raw(0));
    let b = Descriptor::Type(TypeIdx::from_raw(1));

    registry.register(scope(0), "T:Shared", a);
    registry.register(scope(1), "T:Shared", b);

    assert_eq!(registry.find_by_id("T:Shared", scope(0)), Some(a));
    assert_eq!(registry.find_by_id("T:Shared", scope(1)), Some(b));
    assert_eq!(registry.len(), 2);
}

#[test]
fn scoped_miss_falls_back_to_global() {
    let mut registry = ScopedRegistry::new();
    let base = Descriptor::Type(TypeIdx::from_raw(4));

    registry.register(scope(1), "T:Core.Base", base);

    assert!(!registry.contains("T:Core.Base", scope(0)));
    assert_eq!(registry.find_by_id("T:Core.Base", scope(0)), Some(base));
    assert_eq!(registry.find_by_id("T:Core.Base", None), Some(base));
}

#[test]
fn global_fallback_prefers_first_registration() {
    let mut registry = ScopedRegistry::new();
    let first = Descriptor::Type(TypeIdx::from_raw(0));
    let second = Descriptor::Type(TypeIdx::from_raw(1));

    registry.register(scope(0), "T:Dup", first);
    registry.register(scope(1), "T:Dup", second);

    assert_eq!(registry.find_by_id("T:Dup", scope(2)), Some(first));
}

#[test]
fn missing_everywhere_is_none() {
    let registry = ScopedRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.find_by_id("T:System.Object", scope(0)), None);
    assert_eq!(registry.find_type("T:System.Object", None), None);
}

#[test]
fn find_type_filters_members() {
    let mut registry = ScopedRegistry::new();
    registry.register(scope(0), "M:Demo.Go", Descriptor::Member(MemberIdx::from_raw(0)));

    assert_eq!(registry.find_type("M:Demo.Go", scope(0)), None);
    assert_eq!(
        registry.find_by_id("M:Demo.Go", scope(0)),
        Some(Descriptor::Member(MemberIdx::from_raw(0)))
    );
}
