//! Peephole optimization passes over a single method's instruction list in a
//! stack-based bytecode virtual machine.
//!
//! Four cooperating passes, each a self-contained, single-threaded function
//! over one [`Method`] plus whatever external collaborators it needs:
//!
//! - [`copy_propagate`] (A): rewrites loads onto the smallest-numbered local
//!   alias.
//! - [`eliminate_stale_stores`] (B): removes stores with no consumer and
//!   rewrites the `ClassTag(classOf[X]).newArray(n)` intrinsic.
//! - [`eliminate_push_pop`] (C): bubbles explicit pops backward through pure
//!   producers, also removing side-effect-free constructor calls.
//! - [`eliminate_store_load_pairs`] (D): removes adjacent store/load pairs
//!   on a dead local slot in a single forward pass.
//!
//! None of these passes know how to parse bytecode, build a whole-program
//! call graph, or inline across methods: those are external collaborators,
//! expressed here as the [`FrameAnalysis`], [`CallGraph`], and [`Inliner`]
//! traits (see [`analyzer`] and [`callgraph`]). This crate ships its own
//! conservative [`LinearFrameAnalyzer`] and a [`NoopCallGraph`] fake good
//! enough to drive the passes standalone or in tests; a driver backed by a
//! real whole-program analyzer supplies its own implementations instead.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    clippy::cast_lossless,
    clippy::missing_errors_doc,
    clippy::used_underscore_binding,
    clippy::redundant_closure_for_method_calls,
    clippy::type_repetition_in_bounds,
    clippy::inconsistent_struct_constructor,
    clippy::default_trait_access,
    clippy::map_unwrap_or,
    clippy::items_after_statements
)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

pub mod analyzer;
pub mod callgraph;
pub mod config;
pub mod copy_prop;
pub mod error;
pub mod instr;
pub mod method;
pub mod oracle;
pub mod producer;
pub mod push_pop;
pub mod stale_store;
pub mod store_load;

pub use self::{
    analyzer::{FrameAnalysis, InputProducer, LinearFrameAnalyzer},
    callgraph::{CallGraph, CallSite, Inliner, NoopCallGraph},
    config::PeepholeConfig,
    copy_prop::{copy_propagate, copy_propagate_with},
    error::PeepholeError,
    instr::{
        CallInsn, CallKind, Const, FieldOp, IndyInsn, Instruction, JumpOp, MethodRef, Op, TypeOp,
        VarOp, Width,
    },
    method::{InstrId, Method, TryCatchRegion},
    oracle::{ClassTagNewArray, NoneOracle, SideEffectOracle},
    producer::Producer,
    push_pop::eliminate_push_pop,
    stale_store::eliminate_stale_stores,
    store_load::eliminate_store_load_pairs,
};
