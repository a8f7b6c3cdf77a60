//! Page identifier hook.
//!
//! The resolver never invents page ids itself: it asks a [`PageIdFunction`]
//! for a raw id and only disambiguates collisions within one type.

use dm_model::DescriptorRef;

/// Computes a stable, file-safe identifier for a descriptor.
///
/// Implemented for any `Fn(DescriptorRef<'_>) -> String`, so a closure can be
/// passed wherever a page id function is expected.
pub trait PageIdFunction {
    fn page_id(&self, descriptor: DescriptorRef<'_>) -> String;
}

impl<F> PageIdFunction for F
where
    F: Fn(DescriptorRef<'_>) -> String,
{
    #[inline]
    fn page_id(&self, descriptor: DescriptorRef<'_>) -> String {
        self(descriptor)
    }
}

/// Default page ids derived from documentation identifiers.
///
/// See [`file_safe_page_id`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSafePageId;

impl PageIdFunction for FileSafePageId {
    fn page_id(&self, descriptor: DescriptorRef<'_>) -> String {
        file_safe_page_id(descriptor.id())
    }
}

/// Turn a documentation identifier into a file-safe page id.
///
/// Drops a leading kind prefix (`T:`, `M:`, `P:`, `F:`, `E:`, `N:`), drops a
/// parameter list, and replaces every character outside `[A-Za-z0-9._-]`
/// with `_`. Overloads therefore share a page id:
///
/// ```text
/// M:Demo.Cmp.Compare(System.Int32)   ->  Demo.Cmp.Compare
/// T:Demo.List`1                      ->  Demo.List_1
/// ```
pub fn file_safe_page_id(id: &str) -> String {
    let body = strip_kind_prefix(id);
    let body = body.split_once('(').map_or(body, |(head, _)| head);
    body.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn strip_kind_prefix(id: &str) -> &str {
    match id.as_bytes() {
        [b'T' | b'M' | b'P' | b'F' | b'E' | b'N', b':', ..] => &id[2..],
        _ => id,
    }
}
