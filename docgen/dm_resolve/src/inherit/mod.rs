//! Member inheritance resolution.
//!
//! For each type, `all_members` is the type's own members plus every member
//! of its base's `all_members` that is neither a constructor nor overridden
//! by a member already collected. Bases are resolved first, so the merge
//! walks the whole chain exactly once per type.
//!
//! After merging, the list is sorted by display name and page ids are
//! assigned to method-like members, with per-type collision suffixes:
//!
//! ```text
//! Compare   -> Demo.Cmp.Compare
//! Compare   -> Demo.Cmp.Compare_1
//! Compare   -> Demo.Cmp.Compare_2
//! ```

use std::cmp::Ordering;

use dm_model::{Capabilities, DescriptorRef, MemberView, ResolveState, TypeIdx};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::stack::ensure_sufficient_stack;
use crate::{Problem, Processor};

impl Processor<'_> {
    /// Compute `all_members` for `ty` (and its bases and nested types).
    ///
    /// Returns the resolved direct base, or `None` when the type has no base,
    /// its base is not documented, or its base chain is cyclic. Calling this
    /// again for a resolved type returns the recorded base without doing any
    /// work.
    ///
    /// Nested types are queued while a base chain is being walked and
    /// resolved once the outermost call is done, so a nested type deriving
    /// from a type further down the chain does not see it as `Processing`.
    pub fn resolve_inheritance(&mut self, ty: TypeIdx) -> Option<TypeIdx> {
        let outermost = self.chain_depth == 0;
        let base = self.resolve_chain(ty);
        if outermost {
            while let Some(nested) = self.deferred_nested.pop_front() {
                self.resolve_chain(nested);
            }
        }
        base
    }

    /// Resolve `ty` as one link of the base chain currently being walked.
    fn resolve_chain(&mut self, ty: TypeIdx) -> Option<TypeIdx> {
        self.chain_depth += 1;
        let base = ensure_sufficient_stack(|| self.resolve_type(ty));
        self.chain_depth -= 1;
        base
    }

    #[tracing::instrument(level = "trace", skip(self), fields(id = %self.model.ty(ty).id))]
    fn resolve_type(&mut self, ty: TypeIdx) -> Option<TypeIdx> {
        match self.model.ty(ty).state {
            ResolveState::Done => return self.model.ty(ty).resolved_base,
            ResolveState::Processing => return None,
            ResolveState::Unprocessed => {}
        }
        self.model.ty_mut(ty).state = ResolveState::Processing;

        let mut base = self.lookup_base(ty);

        let mut all_members: Vec<MemberView> = Vec::new();
        let mut capabilities = Capabilities::empty();
        for &member in &self.model.ty(ty).members {
            all_members.push(MemberView::new(member));
            capabilities |= Capabilities::for_kind(self.model.member(member).kind);
        }

        if let Some(base_idx) = base {
            if self.model.ty(base_idx).state == ResolveState::Processing {
                let problem = Problem::InheritanceCycle {
                    type_id: self.model.ty(ty).id.clone(),
                    base_id: self.model.ty(base_idx).id.clone(),
                };
                self.record(problem);
                base = None;
            } else {
                self.resolve_chain(base_idx);
                capabilities |= self.merge_inherited(base_idx, &mut all_members);
            }
        }

        all_members.sort_by(|a, b| {
            ordinal_cmp(
                &self.model.member(a.member).name,
                &self.model.member(b.member).name,
            )
        });
        self.assign_page_ids(&mut all_members);

        // Members declared here carry the declaring type's view.
        for view in &all_members {
            let member = self.model.member_mut(view.member);
            if member.owner == ty {
                member.page_id.clone_from(&view.page_id);
                member.has_overrides = view.has_overrides;
            }
        }

        let nested: Vec<TypeIdx> = self
            .model
            .ty(ty)
            .members
            .iter()
            .filter_map(|&member| self.model.member(member).kind.nested_type())
            .collect();

        let desc = self.model.ty_mut(ty);
        desc.all_members = all_members;
        desc.capabilities |= capabilities;
        desc.resolved_base = base;
        desc.state = ResolveState::Done;
        self.report.types_resolved += 1;

        self.deferred_nested.extend(nested);

        base
    }

    /// Look up the direct base of `ty`, in its own scope first.
    fn lookup_base(&mut self, ty: TypeIdx) -> Option<TypeIdx> {
        let desc = self.model.ty(ty);
        let base_id = desc.direct_base()?;

        let found = self.registry.find_type(base_id, Some(desc.scope));
        if found.is_none() {
            tracing::debug!(id = %desc.id, base_id, "base type not documented; no members inherited");
            self.report.unresolved_bases += 1;
        }
        found
    }

    /// Append the base's inheritable members to `all_members`.
    ///
    /// Returns the capability flags contributed by inherited members.
    fn merge_inherited(&mut self, base: TypeIdx, all_members: &mut Vec<MemberView>) -> Capabilities {
        let candidates: Vec<_> = self.model.ty(base).all_member_handles().collect();
        let mut capabilities = Capabilities::empty();

        for candidate in candidates {
            let member = self.model.member(candidate);
            if member.kind.is_constructor() {
                continue;
            }
            let overridden = all_members
                .iter()
                .any(|view| self.model.member(view.member).overrides_id(&member.id));
            if overridden {
                continue;
            }

            capabilities |= Capabilities::for_kind(member.kind);
            all_members.push(MemberView::new(candidate));
            self.report.inherited_members += 1;
        }

        capabilities
    }

    /// Fill page ids and overload flags for one type's sorted member list.
    ///
    /// Method-like members get a page id from the hook, suffixed `_<n>` when
    /// the same id was already handed out in this type. Other members keep
    /// the page id of their descriptor.
    fn assign_page_ids(&self, all_members: &mut [MemberView]) {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut names: FxHashMap<&str, usize> = FxHashMap::default();

        for view in all_members.iter_mut() {
            let member = self.model.member(view.member);
            if !member.kind.is_method_like() {
                view.page_id.clone_from(&member.page_id);
                continue;
            }

            let raw = self.page_ids.page_id(DescriptorRef::Member(member));
            let count = counts.entry(raw.clone()).or_insert(0);
            let mut page_id = suffixed(&raw, *count);
            while !used.insert(page_id.clone()) {
                *count += 1;
                page_id = suffixed(&raw, *count);
            }
            *count += 1;
            view.page_id = page_id;

            *names.entry(member.name.as_str()).or_insert(0) += 1;
        }

        for view in all_members.iter_mut() {
            let member = self.model.member(view.member);
            view.has_overrides = member.kind.is_method_like()
                && names.get(member.name.as_str()).is_some_and(|&n| n > 1);
        }
    }
}

/// Ordinal name order: UTF-16 code units, not code points.
///
/// The two differ only when one name has a supplementary-plane character
/// where the other has one in `U+E000..=U+FFFF`.
pub(crate) fn ordinal_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

fn suffixed(raw: &str, count: usize) -> String {
    if count == 0 {
        raw.to_owned()
    } else {
        format!("{raw}_{count}")
    }
}
