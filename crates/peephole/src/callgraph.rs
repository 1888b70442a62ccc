//! The call-graph and inliner collaborator surfaces (§6, §9 "Cyclic
//! references").
//!
//! The call-graph is modeled as an external service addressed by instruction
//! identity, never as an in-core graph structure: removal is a single
//! entry-point this crate calls immediately before (or after) deleting a
//! call instruction. This sidesteps the cyclic reference a real call graph
//! would otherwise have back into the method it indexes.

use crate::{instr::IndyInsn, method::{InstrId, Method}};
use alloc::vec::Vec;

/// A callsite identity as understood by the external call-graph: the
/// instruction that performs the call, scoped to a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub call: InstrId,
}

/// The external call-graph registry (§6: `callsites`, `removeCallsite`,
/// `removeClosureInstantiation`, `callsiteOrdering`).
///
/// A removed call MUST also be removed from this registry (§3 invariants);
/// every pass that deletes a `Call`/`Indy` instruction routes the deletion
/// through these methods rather than mutating the method's instruction list
/// first.
pub trait CallGraph {
    type Error;

    /// All callsites the graph currently knows about within `method`,
    /// restricted to the current method as §4.3's inliner handoff requires.
    fn callsites(&self, method: &Method) -> Result<Vec<CallSite>, Self::Error>;

    /// Removes a callsite from the graph. Called right before or after the
    /// corresponding `Call` instruction is spliced out of the method.
    fn remove_callsite(&mut self, call: CallSite, method: &Method) -> Result<(), Self::Error>;

    /// Removes a closure instantiation (an `invokedynamic` recognized as a
    /// lambda-metafactory call) and its synthetic implementation method from
    /// the graph.
    fn remove_closure_instantiation(
        &mut self,
        indy: InstrId,
        insn: &IndyInsn,
        method: &Method,
    ) -> Result<(), Self::Error>;

    /// The inliner's canonical ordering over callsites, used to make the
    /// order the stale-store pass hands exposed callsites to the inliner
    /// deterministic (§4.3 "Inliner handoff").
    fn callsite_ordering(&self, a: &CallSite, b: &CallSite) -> core::cmp::Ordering;
}

/// The external inliner (§6: `inlineCallsite`).
pub trait Inliner {
    type Error;

    /// Inlines `callsite` into `method`. `update_call_graph` is `true` only
    /// for the final callsite in a batch (§4.3: "The call-graph should be
    /// updated only on the final inline").
    fn inline_callsite(
        &mut self,
        callsite: CallSite,
        method: &mut Method,
        update_call_graph: bool,
    ) -> Result<(), Self::Error>;
}

/// A call-graph/inliner pair that does nothing: every method lookup returns
/// empty, every mutation succeeds trivially. Useful for driving the passes
/// in isolation (unit tests, embedders without a whole-program call graph
/// wired up yet).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallGraph;

impl CallGraph for NoopCallGraph {
    type Error = core::convert::Infallible;

    fn callsites(&self, _method: &Method) -> Result<Vec<CallSite>, Self::Error> {
        Ok(Vec::new())
    }

    fn remove_callsite(&mut self, _call: CallSite, _method: &Method) -> Result<(), Self::Error> {
        Ok(())
    }

    fn remove_closure_instantiation(
        &mut self,
        _indy: InstrId,
        _insn: &IndyInsn,
        _method: &Method,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn callsite_ordering(&self, a: &CallSite, b: &CallSite) -> core::cmp::Ordering {
        a.call.cmp(&b.call)
    }
}

impl Inliner for NoopCallGraph {
    type Error = core::convert::Infallible;

    fn inline_callsite(
        &mut self,
        _callsite: CallSite,
        _method: &mut Method,
        _update_call_graph: bool,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
