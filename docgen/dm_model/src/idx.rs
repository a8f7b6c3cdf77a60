//! Typed arena handles.
//!
//! Every descriptor lives in an arena owned by [`Model`](crate::Model) and is
//! referenced by a 32-bit index. Handles are `Copy`, compare in O(1), and
//! cannot be mixed up across arenas.

use std::fmt;

macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw u32 value.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Position of this handle in its arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Create a handle for the arena slot at `index`.
            ///
            /// # Panics
            /// Panics if the arena grew past `u32::MAX` entries.
            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                match u32::try_from(index) {
                    Ok(raw) => Self(raw),
                    Err(_) => panic!(
                        "{} arena exceeded capacity: {index} entries, max is {}",
                        stringify!($name),
                        u32::MAX
                    ),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_idx!(
    /// Handle to a [`TypeDescriptor`](crate::TypeDescriptor).
    TypeIdx
);

define_idx!(
    /// Handle to a [`MemberDescriptor`](crate::MemberDescriptor).
    MemberIdx
);

define_idx!(
    /// Handle to an assembly [`Scope`](crate::Scope).
    ///
    /// Identifiers are unique within one scope; the registry falls back to
    /// an unscoped search when a scoped lookup misses.
    ScopeIdx
);
