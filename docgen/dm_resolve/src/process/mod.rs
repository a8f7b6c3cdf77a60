//! Processing driver.
//!
//! # Passes
//!
//! ```text
//! run()
//!     ├── initial page ids      (every type and member without one)
//!     ├── inheritance           (all_members, descendants, implementers)
//!     └── flattening            (flattened_hierarchy of every class)
//! ```
//!
//! Flattening reads the descendant links written by the inheritance pass,
//! so it only starts once every type has been resolved.

use std::collections::VecDeque;

use dm_model::{MemberIdx, Model, Registry, TypeIdx, TypeKind};

use crate::{FileSafePageId, PageIdFunction, Problem, ProcessorConfig};

static DEFAULT_PAGE_IDS: FileSafePageId = FileSafePageId;

/// Outcome of a processing run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Types whose `all_members` were computed during this run.
    pub types_resolved: usize,

    /// Inherited members appended across all types.
    pub inherited_members: usize,

    /// Types whose direct base is not in the registry.
    pub unresolved_bases: usize,

    /// Classes whose flattened hierarchy was built during this run.
    pub hierarchies_flattened: usize,

    pub problems: Vec<Problem>,
}

/// Mutates a [`Model`] in place: member inheritance, page ids, descendant
/// links and flattened hierarchies.
pub struct Processor<'a> {
    pub(crate) model: &'a mut Model,
    pub(crate) registry: &'a dyn Registry,
    pub(crate) page_ids: &'a dyn PageIdFunction,
    pub(crate) config: ProcessorConfig,
    pub(crate) report: ProcessReport,

    /// Nesting of `resolve_type` calls on the base chain being walked.
    pub(crate) chain_depth: usize,

    /// Nested types waiting for the outermost resolution to finish.
    pub(crate) deferred_nested: VecDeque<TypeIdx>,
}

impl<'a> Processor<'a> {
    /// Create a processor with the default configuration and
    /// [`FileSafePageId`] page ids.
    pub fn new(model: &'a mut Model, registry: &'a dyn Registry) -> Self {
        Processor {
            model,
            registry,
            page_ids: &DEFAULT_PAGE_IDS,
            config: ProcessorConfig::default(),
            report: ProcessReport::default(),
            chain_depth: 0,
            deferred_nested: VecDeque::new(),
        }
    }

    /// Use a caller-supplied page id function.
    #[must_use]
    pub fn with_page_ids(mut self, page_ids: &'a dyn PageIdFunction) -> Self {
        self.page_ids = page_ids;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every pass over the whole model.
    ///
    /// Running again on the same model changes nothing and returns an empty
    /// report.
    #[tracing::instrument(level = "debug", skip_all, fields(types = self.model.type_count()))]
    pub fn run(&mut self) -> ProcessReport {
        self.assign_initial_page_ids();

        let handles: Vec<TypeIdx> = self.model.type_handles().collect();
        for &ty in &handles {
            if let Some(base) = self.resolve_inheritance(ty) {
                self.link_descendant(base, ty);
            }
            if self.config.link_implementers {
                self.link_implementers(ty);
            }
        }
        tracing::debug!("inheritance resolution complete");

        for &ty in &handles {
            self.flatten_hierarchy(ty);
        }
        tracing::debug!("hierarchy flattening complete");

        std::mem::take(&mut self.report)
    }

    /// Problems found so far and not yet returned by [`Processor::run`].
    pub fn problems(&self) -> &[Problem] {
        &self.report.problems
    }

    /// Give every type and member without a page id one from the hook.
    fn assign_initial_page_ids(&mut self) {
        let types: Vec<TypeIdx> = self.model.type_handles().collect();
        for ty in types {
            if self.model.ty(ty).page_id.is_empty() {
                let page_id = self.page_ids.page_id(self.model.type_ref(ty));
                self.model.ty_mut(ty).page_id = page_id;
            }
        }
        let members: Vec<MemberIdx> = self.model.member_handles().collect();
        for member in members {
            if self.model.member(member).page_id.is_empty() {
                let page_id = self.page_ids.page_id(self.model.member_ref(member));
                self.model.member_mut(member).page_id = page_id;
            }
        }
    }

    fn link_descendant(&mut self, base: TypeIdx, ty: TypeIdx) {
        let descendants = &mut self.model.ty_mut(base).descendants;
        if !descendants.contains(&ty) {
            descendants.push(ty);
        }
    }

    fn link_implementers(&mut self, ty: TypeIdx) {
        let desc = self.model.ty(ty);
        if !matches!(desc.kind, TypeKind::Class | TypeKind::Struct) {
            return;
        }

        let interfaces: Vec<TypeIdx> = desc
            .interfaces
            .iter()
            .filter_map(|id| self.registry.find_type(id, Some(desc.scope)))
            .filter(|&iface| self.model.ty(iface).is_interface())
            .collect();

        for iface in interfaces {
            let implementers = &mut self.model.ty_mut(iface).implementers;
            if !implementers.contains(&ty) {
                implementers.push(ty);
            }
        }
    }

    /// Log and collect a problem.
    pub(crate) fn record(&mut self, problem: Problem) {
        tracing::warn!(code = problem.code(), "{problem}");
        self.report.problems.push(problem);
    }
}

/// Process `model` with the default configuration and page ids.
pub fn process(model: &mut Model, registry: &dyn Registry) -> ProcessReport {
    Processor::new(model, registry).run()
}
