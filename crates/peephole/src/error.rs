//! Error classification for the core (§7, §7.1 "Rust error-handling surface").
//!
//! "Analyzer unavailable" is not represented here at all — it is encoded in
//! the type system as `Option`/`None` at each pass's analyzer-construction
//! boundary, per §7.1. This enum only covers the one classification that can
//! actually propagate out of a pass: a collaborator (the call-graph or the
//! inliner) failing on a call this crate asked it to remove or inline.

use core::fmt;

/// An error propagated from an external collaborator while a pass was
/// applying its scheduled edits.
///
/// Generic over the collaborator's own error type, mirroring
/// `wasmi_core::Trap`'s practice of wrapping a boxed host error rather than
/// inventing a parallel error hierarchy.
#[derive(Debug)]
pub enum PeepholeError<E> {
    /// The call-graph registry rejected a removal or lookup this pass
    /// required to keep the graph consistent with the mutated method.
    CallGraph(E),
    /// The inliner failed to inline a callsite this pass exposed.
    Inliner(E),
}

impl<E: fmt::Display> fmt::Display for PeepholeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeepholeError::CallGraph(e) => write!(f, "call-graph collaborator failed: {e}"),
            PeepholeError::Inliner(e) => write!(f, "inliner collaborator failed: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for PeepholeError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_which_collaborator_failed() {
        let err: PeepholeError<&str> = PeepholeError::CallGraph("no such callsite");
        assert_eq!(
            alloc::format!("{err}"),
            "call-graph collaborator failed: no such callsite"
        );
        let err: PeepholeError<&str> = PeepholeError::Inliner("budget exceeded");
        assert_eq!(
            alloc::format!("{err}"),
            "inliner collaborator failed: budget exceeded"
        );
    }
}
