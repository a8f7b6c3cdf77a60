//! The `report` command: the processed model as JSON.

use dm_model::{Model, TypeIdx};
use dm_resolve::ProcessReport;
use serde::Serialize;

/// Serializable summary of a processed model.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ModelReport {
    pub types_resolved: usize,
    pub inherited_members: usize,
    pub unresolved_bases: usize,
    pub hierarchies_flattened: usize,
    pub assemblies: Vec<AssemblyRow>,
    pub types: Vec<TypeRow>,
    pub problems: Vec<ProblemRow>,
}

/// An assembly and its top-level types, in load order.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AssemblyRow {
    pub name: String,
    pub types: Vec<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TypeRow {
    pub id: String,
    pub name: String,
    pub namespace: String,
    pub kind: &'static str,
    pub page_id: String,
    /// Enclosing type of a nested type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub members: Vec<MemberRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descendants: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implementers: Vec<String>,
    /// `(depth, type id)` pairs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hierarchy: Vec<(usize, String)>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MemberRow {
    pub id: String,
    pub name: String,
    pub kind: &'static str,
    pub page_id: String,
    pub declared_by: String,
    pub overloaded: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProblemRow {
    pub code: &'static str,
    pub message: String,
}

impl ModelReport {
    pub fn new(model: &Model, report: &ProcessReport, types: &[TypeIdx]) -> Self {
        let ids = |handles: &[TypeIdx]| -> Vec<String> {
            handles.iter().map(|&ty| model.ty(ty).id.clone()).collect()
        };

        let types = types
            .iter()
            .map(|&ty| {
                let desc = model.ty(ty);
                TypeRow {
                    id: desc.id.clone(),
                    name: desc.name.clone(),
                    namespace: desc.namespace.clone(),
                    kind: desc.kind.as_str(),
                    page_id: desc.page_id.clone(),
                    declaring_type: desc
                        .declaring_type
                        .map(|outer| model.ty(outer).id.clone()),
                    base: desc.resolved_base.map(|base| model.ty(base).id.clone()),
                    members: desc
                        .all_members
                        .iter()
                        .map(|view| {
                            let member = model.member(view.member);
                            MemberRow {
                                id: member.id.clone(),
                                name: member.name.clone(),
                                kind: member.kind.as_str(),
                                page_id: view.page_id.clone(),
                                declared_by: model.ty(member.owner).id.clone(),
                                overloaded: view.has_overrides,
                            }
                        })
                        .collect(),
                    descendants: ids(&desc.descendants),
                    implementers: ids(&desc.implementers),
                    hierarchy: desc
                        .flattened_hierarchy
                        .iter()
                        .map(|entry| (entry.depth, entry.type_id.clone()))
                        .collect(),
                }
            })
            .collect();

        ModelReport {
            types_resolved: report.types_resolved,
            inherited_members: report.inherited_members,
            unresolved_bases: report.unresolved_bases,
            hierarchies_flattened: report.hierarchies_flattened,
            assemblies: model
                .scopes()
                .map(|(_, scope)| AssemblyRow {
                    name: scope.name.clone(),
                    types: ids(&scope.types),
                })
                .collect(),
            types,
            problems: report
                .problems
                .iter()
                .map(|problem| ProblemRow {
                    code: problem.code(),
                    message: problem.to_string(),
                })
                .collect(),
        }
    }
}

/// Serialize the report for `types` as JSON.
pub fn render_report(
    model: &Model,
    report: &ProcessReport,
    types: &[TypeIdx],
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let report = ModelReport::new(model, report, types);
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}
