//! The `members` command: effective member lists with page ids.

use std::fmt::Write;

use dm_model::{Model, TypeIdx};

/// Render `all_members` of each type in `types`.
///
/// ```text
/// T:Demo.Circle (class)
///   property     Area                     Demo.Shape.Area  (from T:Demo.Shape)
///   method       Move                     Demo.Shape.Move_1  [overload]  (from T:Demo.Shape)
/// ```
pub fn render_members(model: &Model, types: &[TypeIdx]) -> String {
    let mut out = String::new();

    for &ty in types {
        let desc = model.ty(ty);
        let _ = writeln!(out, "{} ({})", desc.id, desc.kind.as_str());

        if desc.all_members.is_empty() {
            let _ = writeln!(out, "  (no members)");
            continue;
        }

        for view in &desc.all_members {
            let member = model.member(view.member);
            let _ = write!(
                out,
                "  {:<12} {:<24} {}",
                member.kind.as_str(),
                member.name,
                view.page_id
            );
            if view.has_overrides {
                let _ = write!(out, "  [overload]");
            }
            if member.owner != ty {
                let _ = write!(out, "  (from {})", model.ty(member.owner).id);
            }
            out.push('\n');
        }
    }

    out
}
