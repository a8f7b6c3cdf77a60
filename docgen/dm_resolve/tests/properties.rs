//! Property-based tests for inheritance resolution and flattening.
//!
//! Random acyclic class forests with random members are processed and
//! checked for:
//! 1. Idempotence: a second run changes nothing
//! 2. Determinism: processing the same input twice gives the same model
//! 3. Ordering: `all_members` is sorted by ordinal name
//! 4. No member appears next to a member overriding it
//! 5. Inherited constructors never appear
//! 6. Page ids are unique among method-like members of a type
//! 7. Every class's hierarchy contains itself at the depth of its base chain

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use dm_model::{
    MemberDescriptor, MemberKind, Model, ModelBuilder, ScopedRegistry, TypeDescriptor, TypeKind,
};
use dm_resolve::{process, Processor};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

const NAMES: &[&str] = &["Go", "Stop", "Run", "Item", "_x", "b", "B"];

const KINDS: &[MemberKind] = &[
    MemberKind::Constructor,
    MemberKind::Method,
    MemberKind::Operator,
    MemberKind::Property,
    MemberKind::Field,
    MemberKind::Event,
];

/// One generated member: name index, kind index, overrides-base flag.
type MemberPlan = (usize, usize, bool);

/// One generated class: optional base (always an earlier class) and members.
#[derive(Clone, Debug)]
struct ClassPlan {
    base: Option<usize>,
    members: Vec<MemberPlan>,
}

fn member_strategy() -> impl Strategy<Value = MemberPlan> {
    (0..NAMES.len(), 0..KINDS.len(), any::<bool>())
}

fn forest_strategy() -> impl Strategy<Value = Vec<ClassPlan>> {
    prop::collection::vec(
        (any::<prop::sample::Index>(), any::<bool>(), prop::collection::vec(member_strategy(), 0..6)),
        1..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (pick, has_base, members))| ClassPlan {
                base: (i > 0 && has_base).then(|| pick.index(i)),
                members,
            })
            .collect()
    })
}

/// Ancestor indices of class `i`, nearest first.
fn chain(plans: &[ClassPlan], i: usize) -> Vec<usize> {
    let mut chain = Vec::new();
    let mut current = plans[i].base;
    while let Some(base) = current {
        chain.push(base);
        current = plans[base].base;
    }
    chain
}

fn build(plans: &[ClassPlan]) -> (Model, ScopedRegistry) {
    let mut builder = ModelBuilder::new();
    let scope = builder.add_scope("Core");

    for (i, plan) in plans.iter().enumerate() {
        let ty = builder.add_type(
            scope,
            TypeDescriptor::new(format!("T:C{i}"), format!("C{i}"), TypeKind::Class)
                .with_bases(chain(plans, i).into_iter().map(|b| format!("T:C{b}"))),
        );

        for (k, &(name, kind, overrides)) in plan.members.iter().enumerate() {
            let name = NAMES[name];
            let mut member =
                MemberDescriptor::new(format!("M:C{i}.{name}#{k}"), name, KINDS[kind]);
            if let (true, Some(base)) = (overrides, plan.base) {
                member = member.overriding(format!("M:C{base}.{name}#{k}"));
            }
            builder.add_member(ty, member);
        }
    }

    builder.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn second_run_is_a_no_op(plans in forest_strategy()) {
        let (mut model, registry) = build(&plans);
        process(&mut model, &registry);
        let once = model.clone();

        let second = Processor::new(&mut model, &registry).run();

        prop_assert_eq!(second.types_resolved, 0);
        prop_assert_eq!(second.hierarchies_flattened, 0);
        prop_assert!(second.problems.is_empty());
        prop_assert_eq!(model, once);
    }

    #[test]
    fn processing_is_deterministic(plans in forest_strategy()) {
        let (mut first, first_registry) = build(&plans);
        let (mut second, second_registry) = build(&plans);

        process(&mut first, &first_registry);
        process(&mut second, &second_registry);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolved_members_are_well_formed(plans in forest_strategy()) {
        let (mut model, registry) = build(&plans);
        let report = process(&mut model, &registry);
        prop_assert!(report.problems.is_empty());

        for ty in model.type_handles() {
            let desc = model.ty(ty);
            let members: Vec<_> = desc
                .all_member_handles()
                .map(|member| model.member(member))
                .collect();

            for pair in members.windows(2) {
                prop_assert!(pair[0].name <= pair[1].name);
            }

            for member in &members {
                if let Some(overridden) = &member.overrides {
                    prop_assert!(members.iter().all(|other| other.id != *overridden));
                }
                if member.kind.is_constructor() {
                    prop_assert_eq!(member.owner, ty);
                }
            }

            let mut seen = FxHashSet::default();
            for view in &desc.all_members {
                if model.member(view.member).kind.is_method_like() {
                    prop_assert!(seen.insert(view.page_id.clone()), "duplicate page id {}", view.page_id);
                }
            }

            let own = desc
                .flattened_hierarchy
                .iter()
                .find(|entry| entry.ty == Some(ty))
                .expect("class hierarchy contains itself");
            prop_assert_eq!(own.depth, desc.bases.len());
            prop_assert!(desc.flattened_hierarchy.len() > desc.bases.len());
        }
    }
}
