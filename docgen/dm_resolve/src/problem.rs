//! Anomalies found while processing malformed metadata.
//!
//! None of these stop processing. Each one is logged when found and
//! collected in the [`ProcessReport`](crate::ProcessReport).

use std::fmt;

/// A recoverable anomaly in the input model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Problem {
    /// The base chain of `type_id` leads back to a type still being resolved.
    /// The link to `base_id` is ignored.
    InheritanceCycle { type_id: String, base_id: String },

    /// The direct base of `descendant_id` was not found in the hierarchy of
    /// `root_id`.
    UnplacedDescendant {
        root_id: String,
        descendant_id: String,
        base_id: Option<String>,
    },
}

impl Problem {
    /// Stable code for searching and filtering.
    pub fn code(&self) -> &'static str {
        match self {
            Problem::InheritanceCycle { .. } => "W0001",
            Problem::UnplacedDescendant { .. } => "W0002",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: ", self.code())?;
        match self {
            Problem::InheritanceCycle { type_id, base_id } => write!(
                f,
                "base chain of `{type_id}` cycles through `{base_id}`; treating it as a root"
            ),
            Problem::UnplacedDescendant {
                root_id,
                descendant_id,
                base_id: Some(base_id),
            } => write!(
                f,
                "`{descendant_id}` derives from `{base_id}`, which is not in the hierarchy of `{root_id}`"
            ),
            Problem::UnplacedDescendant {
                root_id,
                descendant_id,
                base_id: None,
            } => write!(
                f,
                "`{descendant_id}` has no base but is listed as a descendant in the hierarchy of `{root_id}`"
            ),
        }
    }
}
