//! Stale-Store Eliminator + Intrinsic Rewriter (B) — §4.3.
//!
//! Removes local-variable stores whose written value has no later reader,
//! with GC-safety null-poisoning for reference slots that cannot be proven
//! non-leakable, and rewrites the `ClassTag(classOf[X]).newArray(n)`
//! intrinsic into a direct `anewarray`, handing any callsites it exposes to
//! the external inliner.

use crate::{
    analyzer::FrameAnalysis,
    callgraph::{CallGraph, CallSite, Inliner},
    config::PeepholeConfig,
    error::PeepholeError,
    instr::{Const, Instruction, Op, VarOp},
    method::{InstrId, Method},
    oracle::SideEffectOracle,
    producer::Producer,
};
use alloc::{collections::BTreeSet, vec::Vec};

enum RefAction {
    Pop,
    NullPoison { already_null: bool },
}

/// Runs the stale-store pass against a caller-supplied [`FrameAnalysis`] and
/// collaborators. Returns `(staleStoreRemoved, intrinsicRewritten, callInlined)`.
pub fn eliminate_stale_stores<A, CG, IN, E>(
    method: &mut Method,
    analyzer: &A,
    oracle: &impl SideEffectOracle,
    call_graph: &mut CG,
    inliner: &mut IN,
    config: &PeepholeConfig,
) -> Result<(bool, bool, bool), PeepholeError<E>>
where
    A: FrameAnalysis,
    CG: CallGraph<Error = E>,
    IN: Inliner<Error = E>,
{
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!("stale_store", instructions = method.instruction_count()).entered();

    let trailing = trailing_before_returns(method);

    // live-ref-slot tracking, computed over the whole method independent of
    // which stores end up scheduled for removal.
    let mut ref_live: BTreeSet<u32> = BTreeSet::new();
    for (id, insn) in method.iter() {
        if let Instruction::Var(op, slot) = insn {
            if !op.is_reference() {
                continue;
            }
            if op.is_load() {
                ref_live.insert(*slot);
            } else if *slot < method.params_size() {
                ref_live.insert(*slot);
            } else if !is_null_source(method, analyzer, id) {
                ref_live.insert(*slot);
            }
        }
    }

    let mut non_ref_pops: Vec<(InstrId, Op)> = Vec::new();
    let mut ref_actions: Vec<(InstrId, u32, RefAction)> = Vec::new();
    let mut inc_removals: Vec<InstrId> = Vec::new();
    let mut intrinsic_rewrites: Vec<(InstrId, InstrId, alloc::string::String)> = Vec::new();
    let mut array_consumer_candidates: Vec<InstrId> = Vec::new();

    for (id, insn) in method.iter() {
        match insn {
            Instruction::Var(op, slot) if op.is_store() => {
                let slot = *slot;
                if slot_has_later_consumer(method, id, slot) {
                    continue;
                }
                if op.is_reference() {
                    let initial = analyzer.initial_producer_of_input(id, 0);
                    let provably_non_leakable = matches!(
                        initial,
                        Some(Producer::Parameter(0)) if !method.is_static_method()
                    ) || matches!(initial, Some(Producer::UninitializedLocal(_)));
                    if provably_non_leakable || trailing.contains(&id) {
                        ref_actions.push((id, slot, RefAction::Pop));
                    } else {
                        let already_null = is_null_source(method, analyzer, id);
                        ref_actions.push((id, slot, RefAction::NullPoison { already_null }));
                    }
                } else {
                    non_ref_pops.push((id, pop_op_for_width(op.width())));
                }
            }
            Instruction::Inc { slot, .. } => {
                if !slot_has_later_consumer(method, id, *slot) {
                    inc_removals.push(id);
                }
            }
            Instruction::Call(call) => {
                if let Some(tag) = oracle.class_tag_new_array_arg(call) {
                    if let Some(receiver) = analyzer.producer_of_input(id, call.arg_count) {
                        if let Producer::Instr(receiver_id) = receiver.producer {
                            intrinsic_rewrites.push((id, receiver_id, tag.element_type));
                        }
                    }
                } else if oracle.is_runtime_array_load_or_update(call) {
                    array_consumer_candidates.push(id);
                }
            }
            _ => {}
        }
    }

    let mut stale_store_removed = false;

    for (id, op) in &non_ref_pops {
        method.replace(*id, Instruction::Plain(*op));
        stale_store_removed = true;
    }

    for (id, slot, action) in &ref_actions {
        let action = match action {
            RefAction::Pop => RefAction::Pop,
            RefAction::NullPoison { already_null } => {
                if ref_live.contains(slot) {
                    RefAction::NullPoison { already_null: *already_null }
                } else {
                    RefAction::Pop
                }
            }
        };
        match action {
            RefAction::Pop => {
                method.replace(*id, Instruction::Plain(Op::Pop));
                stale_store_removed = true;
            }
            RefAction::NullPoison { already_null } => {
                if !already_null {
                    method.insert_before(*id, Instruction::Plain(Op::Pop));
                    method.insert_before(*id, Instruction::Const(Const::Null));
                    stale_store_removed = true;
                }
            }
        }
    }

    for id in &inc_removals {
        method.remove(*id);
        stale_store_removed = true;
    }

    let intrinsic_rewritten = !intrinsic_rewrites.is_empty();
    let mut rewritten_array_producers: Vec<InstrId> = Vec::new();
    for (call_id, receiver_id, element_type) in intrinsic_rewrites {
        #[cfg(feature = "logging")]
        tracing::trace!(?call_id, element_type = %element_type, "rewrote class-tag newArray intrinsic");
        call_graph
            .remove_callsite(CallSite { call: call_id }, method)
            .map_err(PeepholeError::CallGraph)?;
        method.insert_after(receiver_id, Instruction::Plain(Op::Pop));
        method.replace(call_id, Instruction::Type(crate::instr::TypeOp::ANewArray, element_type));
        rewritten_array_producers.push(call_id);
    }

    let mut to_inline: Vec<CallSite> = Vec::new();
    for producer in rewritten_array_producers {
        for consumer in analyzer.consumers_of_value_at(producer, 0) {
            if let Instruction::Var(op, slot) = method.get(consumer) {
                if op.is_store() {
                    let slot = *slot;
                    collect_array_consumers(method, consumer, slot, &array_consumer_candidates, &mut to_inline);
                }
            }
        }
    }

    let mut call_inlined = false;
    if !to_inline.is_empty() {
        let known = call_graph.callsites(method).map_err(PeepholeError::CallGraph)?;
        let mut ordered: Vec<CallSite> = known
            .into_iter()
            .filter(|c| to_inline.iter().any(|t| t.call == c.call))
            .collect();
        ordered.sort_by(|a, b| call_graph.callsite_ordering(a, b));
        let last = ordered.len().saturating_sub(1);
        for (i, callsite) in ordered.into_iter().enumerate() {
            inliner
                .inline_callsite(callsite, method, i == last)
                .map_err(PeepholeError::Inliner)?;
            call_inlined = true;
        }
    }

    Ok((stale_store_removed, intrinsic_rewritten, call_inlined))
}

fn collect_array_consumers(
    method: &Method,
    store_id: InstrId,
    slot: u32,
    candidates: &[InstrId],
    out: &mut Vec<CallSite>,
) {
    let mut cursor = method.next(store_id);
    while let Some(id) = cursor {
        if let Instruction::Var(op, s) = method.get(id) {
            if *s == slot && op.is_store() {
                break;
            }
            if *s == slot && op.is_load() {
                if let Some(next) = method.next(id) {
                    if candidates.contains(&next) {
                        out.push(CallSite { call: next });
                    }
                }
            }
        }
        cursor = method.next(id);
    }
}

/// `true` if the value a store at `id` is about to write is already the
/// `null` constant: its immediate producer is a `Const::Null` push.
fn is_null_source(method: &Method, analyzer: &impl FrameAnalysis, store_id: InstrId) -> bool {
    match analyzer.producer_of_input(store_id, 0) {
        Some(input) => match input.producer {
            Producer::Instr(id) => matches!(method.get(id), Instruction::Const(c) if c.is_null()),
            _ => false,
        },
        None => false,
    }
}

/// Scans forward from `after` for the first use of `slot`, stopping at a
/// return (no further code runs) or an overwrite (the value is dead).
fn slot_has_later_consumer(method: &Method, after: InstrId, slot: u32) -> bool {
    let mut cursor = method.next(after);
    while let Some(id) = cursor {
        let insn = method.get(id);
        match insn {
            Instruction::Var(op, s) if *s == slot => return op.is_load(),
            Instruction::Inc { slot: s, .. } if *s == slot => return true,
            _ if insn.is_return() => return false,
            _ => {}
        }
        cursor = method.next(id);
    }
    false
}

/// Walks backward from every return instruction through the maximal suffix
/// of "trailing" instructions (§4.3): anything that cannot branch, call, or
/// switch away. A stale reference-store found in such a run is exempt from
/// null-poisoning since the method returns before the slot could extend a
/// referent's lifetime.
fn trailing_before_returns(method: &Method) -> BTreeSet<InstrId> {
    let mut trailing = BTreeSet::new();
    for (id, insn) in method.iter() {
        if !insn.is_return() {
            continue;
        }
        let mut cursor = method.prev(id);
        while let Some(prev_id) = cursor {
            let prev_insn = method.get(prev_id);
            if prev_insn.can_branch_call_or_switch() || prev_insn.is_return() {
                break;
            }
            trailing.insert(prev_id);
            cursor = method.prev(prev_id);
        }
    }
    trailing
}

fn pop_op_for_width(width: u8) -> Op {
    if width >= 2 {
        Op::Pop2
    } else {
        Op::Pop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analyzer::LinearFrameAnalyzer,
        callgraph::NoopCallGraph,
        instr::{CallInsn, CallKind, MethodRef},
        oracle::{ClassTagNewArray, NoneOracle},
    };
    use assert_matches::assert_matches;
    use core::convert::Infallible;

    fn run(
        method: &mut Method,
        oracle: &impl SideEffectOracle,
    ) -> (bool, bool, bool) {
        let cfg = PeepholeConfig::default();
        let analyzer = LinearFrameAnalyzer::build_for_source_value(method, &cfg).unwrap();
        let mut cg = NoopCallGraph;
        let mut inl = NoopCallGraph;
        let result: Result<(bool, bool, bool), PeepholeError<Infallible>> =
            eliminate_stale_stores(method, &analyzer, oracle, &mut cg, &mut inl, &cfg);
        assert_matches!(result, Ok(_));
        result.unwrap()
    }

    #[test]
    fn reference_gc_safety_this_receiver() {
        // ALOAD 0; ASTORE 3; RETURN, non-static, slot 3 otherwise unused.
        let mut m = Method::new(4, 1, 1, false);
        let _load0 = m.push_back(Instruction::Var(VarOp::ALoad, 0));
        let store3 = m.push_back(Instruction::Var(VarOp::AStore, 3));
        m.push_back(Instruction::Plain(Op::Return));

        let (removed, _, _) = run(&mut m, &NoneOracle);
        assert!(removed);
        assert_eq!(*m.get(store3), Instruction::Plain(Op::Pop));
    }

    #[test]
    fn non_reference_stale_store_becomes_pop() {
        let mut m = Method::new(2, 1, 0, true);
        m.push_back(Instruction::Const(Const::I32(5)));
        let store = m.push_back(Instruction::Var(VarOp::IStore, 1));
        m.push_back(Instruction::Plain(Op::Return));

        let (removed, _, _) = run(&mut m, &NoneOracle);
        assert!(removed);
        assert_eq!(*m.get(store), Instruction::Plain(Op::Pop));
    }

    #[test]
    fn live_store_is_untouched() {
        let mut m = Method::new(2, 1, 0, true);
        m.push_back(Instruction::Const(Const::I32(5)));
        let store = m.push_back(Instruction::Var(VarOp::IStore, 1));
        m.push_back(Instruction::Var(VarOp::ILoad, 1));
        m.push_back(Instruction::Plain(Op::IReturn));

        let (removed, _, _) = run(&mut m, &NoneOracle);
        assert!(!removed);
        assert_eq!(*m.get(store), Instruction::Var(VarOp::IStore, 1));
    }

    struct NewArrayOracle;
    impl SideEffectOracle for NewArrayOracle {
        fn is_side_effect_free_call(&self, _call: &CallInsn) -> bool {
            false
        }
        fn is_side_effect_free_constructor_call(&self, _call: &CallInsn) -> bool {
            false
        }
        fn is_new_for_side_effect_free_constructor(&self, _type_name: &str) -> bool {
            false
        }
        fn is_scala_unbox(&self, _call: &CallInsn) -> bool {
            false
        }
        fn is_java_unbox(&self, _call: &CallInsn) -> bool {
            false
        }
        fn boxed_type_of(&self, call: &CallInsn) -> MethodRef {
            call.target.clone()
        }
        fn is_runtime_array_load_or_update(&self, _call: &CallInsn) -> bool {
            false
        }
        fn is_boxed_unit(&self, _field: &MethodRef, _op: crate::instr::FieldOp) -> bool {
            false
        }
        fn is_module_load(&self, _field: &MethodRef, _op: crate::instr::FieldOp) -> bool {
            false
        }
        fn class_tag_new_array_arg(&self, call: &CallInsn) -> Option<ClassTagNewArray> {
            if call.target.name == "newArray" {
                Some(ClassTagNewArray { element_type: "java/lang/String".into() })
            } else {
                None
            }
        }
    }

    #[test]
    fn class_tag_new_array_rewrite() {
        // LDC classOf[String]; INVOKESTATIC ClassTag.apply; INVOKEVIRTUAL newArray(I); ASTORE 4
        let mut m = Method::new(5, 3, 0, true);
        let _ldc = m.push_back(Instruction::Const(Const::Class("java/lang/String".into())));
        let apply = m.push_back(Instruction::Call(CallInsn {
            kind: CallKind::Static,
            target: MethodRef::new("ClassTag", "apply", "(Ljava/lang/Class;)Lscala/reflect/ClassTag;"),
            arg_count: 1,
            arg_width: 1,
            result_width: 1,
        }));
        let _n = m.push_back(Instruction::Const(Const::I32(4)));
        let new_array = m.push_back(Instruction::Call(CallInsn {
            kind: CallKind::Virtual,
            target: MethodRef::new("scala/reflect/ClassTag", "newArray", "(I)Ljava/lang/Object;"),
            arg_count: 1,
            arg_width: 1,
            result_width: 1,
        }));
        m.push_back(Instruction::Var(VarOp::AStore, 4));

        let (_, intrinsic_rewritten, _) = run(&mut m, &NewArrayOracle);
        assert!(intrinsic_rewritten);
        assert_eq!(
            *m.get(new_array),
            Instruction::Type(crate::instr::TypeOp::ANewArray, "java/lang/String".into())
        );
        // a pop was inserted right after the class-tag receiver producer
        let after_apply = m.next(apply).unwrap();
        assert_eq!(*m.get(after_apply), Instruction::Plain(Op::Pop));
    }
}
