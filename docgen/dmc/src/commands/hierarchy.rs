//! The `hierarchy` command: flattened class hierarchies as indented trees.

use std::fmt::Write;

use dm_model::{Model, TypeIdx};

/// Render the flattened hierarchy of each class in `types`.
///
/// The class itself is marked with `*`, undocumented ancestors with
/// `(external)`. Non-class types are skipped.
///
/// ```text
/// T:Demo.Shape
///   T:System.Object (external)
///     T:Demo.Shape *
///       T:Demo.Circle
/// ```
pub fn render_hierarchy(model: &Model, types: &[TypeIdx]) -> String {
    let mut out = String::new();

    for &ty in types {
        let desc = model.ty(ty);
        if !desc.is_class() {
            continue;
        }
        let _ = writeln!(out, "{}", desc.id);

        for entry in &desc.flattened_hierarchy {
            let indent = "  ".repeat(entry.depth + 1);
            let _ = write!(out, "{indent}{}", entry.type_id);
            match entry.ty {
                Some(handle) if handle == ty => out.push_str(" *"),
                None => out.push_str(" (external)"),
                Some(_) => {}
            }
            out.push('\n');
        }
    }

    out
}
