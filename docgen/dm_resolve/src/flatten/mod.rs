//! Hierarchy flattening.
//!
//! Each class gets one linear list of its ancestors, itself and all of its
//! transitive descendants, annotated with depth, so a derived-types tree can
//! be rendered without recursion:
//!
//! ```text
//! Object      0
//! Shape       1   <- root being flattened
//! Circle      2
//! Ellipse     3
//! Square      2
//! ```
//!
//! Siblings are visited in descending name order and each one is inserted
//! right after its base's entry, which leaves them in ascending order in the
//! final list.

use dm_model::{HierarchyEntry, TypeIdx};
use rustc_hash::FxHashSet;

use crate::inherit::ordinal_cmp;
use crate::stack::ensure_sufficient_stack;
use crate::{Problem, Processor, UnplacedDescendant};

impl Processor<'_> {
    /// Build the flattened hierarchy of `root`.
    ///
    /// Only classes are flattened; other kinds and classes that already have
    /// a hierarchy are left untouched. Reads the `descendants` links, so run
    /// it after inheritance resolution has linked every type.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn flatten_hierarchy(&mut self, root: TypeIdx) {
        let desc = self.model.ty(root);
        if !desc.is_class() || !desc.flattened_hierarchy.is_empty() {
            return;
        }

        let mut entries: Vec<HierarchyEntry> = desc
            .bases
            .iter()
            .rev()
            .enumerate()
            .map(|(depth, id)| HierarchyEntry {
                depth,
                type_id: id.clone(),
                ty: self.registry.find_type(id, Some(desc.scope)),
            })
            .collect();
        entries.push(HierarchyEntry {
            depth: desc.bases.len(),
            type_id: desc.id.clone(),
            ty: Some(root),
        });

        let mut visited = FxHashSet::default();
        visited.insert(root);
        self.flatten_descendants(root, root, &mut entries, &mut visited);

        self.model.ty_mut(root).flattened_hierarchy = entries;
        self.report.hierarchies_flattened += 1;
    }

    /// Insert the descendants of `node` into the hierarchy of `root`.
    fn flatten_descendants(
        &mut self,
        root: TypeIdx,
        node: TypeIdx,
        entries: &mut Vec<HierarchyEntry>,
        visited: &mut FxHashSet<TypeIdx>,
    ) {
        ensure_sufficient_stack(|| {
            let mut descendants = self.model.ty(node).descendants.clone();
            descendants
                .sort_by(|a, b| ordinal_cmp(&self.model.ty(*b).name, &self.model.ty(*a).name));

            for descendant in descendants {
                if !visited.insert(descendant) {
                    continue;
                }
                if self.place_descendant(root, descendant, entries) {
                    self.flatten_descendants(root, descendant, entries, visited);
                }
            }
        });
    }

    /// Insert one descendant right after its base's entry.
    ///
    /// Returns `false` when the descendant was left out.
    fn place_descendant(
        &mut self,
        root: TypeIdx,
        descendant: TypeIdx,
        entries: &mut Vec<HierarchyEntry>,
    ) -> bool {
        let desc = self.model.ty(descendant);
        let position = desc
            .direct_base()
            .and_then(|base_id| entries.iter().position(|entry| entry.type_id == base_id));

        if let Some(index) = position {
            let entry = HierarchyEntry {
                depth: entries[index].depth + 1,
                type_id: desc.id.clone(),
                ty: Some(descendant),
            };
            entries.insert(index + 1, entry);
            return true;
        }

        let entry = HierarchyEntry {
            depth: 0,
            type_id: desc.id.clone(),
            ty: Some(descendant),
        };
        let problem = Problem::UnplacedDescendant {
            root_id: self.model.ty(root).id.clone(),
            descendant_id: desc.id.clone(),
            base_id: desc.direct_base().map(str::to_owned),
        };
        self.record(problem);

        match self.config.unplaced {
            UnplacedDescendant::Skip => false,
            UnplacedDescendant::InsertAtRoot => {
                entries.insert(0, entry);
                true
            }
        }
    }
}
