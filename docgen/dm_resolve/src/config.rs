//! Processor configuration.

/// What the flattener does with a descendant whose direct base is missing
/// from the hierarchy being built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnplacedDescendant {
    /// Leave the descendant and its subtree out.
    #[default]
    Skip,

    /// Insert the descendant at the front of the list at depth 0.
    InsertAtRoot,
}

impl UnplacedDescendant {
    /// Parse a command-line value (`skip` or `root`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "skip" => Some(UnplacedDescendant::Skip),
            "root" => Some(UnplacedDescendant::InsertAtRoot),
            _ => None,
        }
    }
}

/// Configuration for a [`Processor`](crate::Processor) run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Placement policy for descendants the flattener cannot place.
    pub unplaced: UnplacedDescendant,

    /// Record classes and structs in the `implementers` list of the
    /// interfaces they implement.
    pub link_implementers: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            unplaced: UnplacedDescendant::Skip,
            link_implementers: true,
        }
    }
}
