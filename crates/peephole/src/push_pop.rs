//! Push/Pop Eliminator (C) — §4.4.
//!
//! The largest and most delicate pass: backward reachability from explicit
//! pops, cutting away pure producers and their inputs, plus a follow-up
//! fixpoint that removes side-effect-free constructor invocations together
//! with their allocation.

use crate::{
    analyzer::{FrameAnalysis, InputProducer},
    callgraph::{CallGraph, CallSite},
    config::PeepholeConfig,
    error::PeepholeError,
    instr::{Const, Instruction, Op, TypeOp},
    method::{InstrId, Method},
    oracle::SideEffectOracle,
    producer::Producer,
};
use alloc::{
    collections::{BTreeSet, VecDeque},
    vec::Vec,
};

#[derive(Default)]
struct PushPopState {
    to_remove: BTreeSet<InstrId>,
    pops_after: Vec<(InstrId, Op)>,
    pops_before: Vec<(InstrId, Op)>,
    cast_added: bool,
    null_check_added: bool,
    changed: bool,
}

impl PushPopState {
    /// Marks `id` for deletion. Does not by itself flag `changed`: a
    /// scheduled removal can still be cancelled against a matching
    /// `pops_after` entry during [`commit`], so the final `changed` verdict
    /// is only settled once cancellation has run.
    fn schedule_remove(&mut self, id: InstrId) {
        self.to_remove.insert(id);
    }
}

/// `producersIfSingleConsumer`, given the input's already-queried
/// [`InputProducer`]: the producer instruction, if every value it pushes
/// reaches exactly one consumer (`cons` itself); `None` otherwise.
fn single_consumer_producer_of(
    analyzer: &impl FrameAnalysis,
    cons: InstrId,
    input: &InputProducer,
) -> Option<InstrId> {
    if input.producer.is_conservatively_multi_consumer() || !input.single_output {
        return None;
    }
    let prod_id = input.producer.as_instr()?;
    let consumers = analyzer.consumers_of_value_at(prod_id, input.output_index);
    if consumers.len() == 1 && consumers[0] == cons {
        Some(prod_id)
    } else {
        None
    }
}

/// `producersIfSingleConsumer`: the producer instruction of `cons`'s
/// `input_index`-th input, if every value it pushes reaches exactly one
/// consumer (`cons` itself); `None` otherwise.
fn single_consumer_producer(
    analyzer: &impl FrameAnalysis,
    cons: InstrId,
    input_index: u32,
) -> Option<InstrId> {
    let input: InputProducer = analyzer.producer_of_input(cons, input_index)?;
    single_consumer_producer_of(analyzer, cons, &input)
}

/// Recurses into `cons`'s `input_index`-th input if it is a removable
/// single-consumer producer, else schedules a pop of that input's *actual*
/// width before `cons`. The width always comes from the analyzer's own
/// [`InputProducer::width`] when available — a long/double argument among
/// otherwise width-1 call or constructor arguments must not get a width-1
/// pop (§4.4 "a pop of the right width"); `fallback_width` is only used
/// when the analyzer has no frame for this input (deeper than its tracked
/// stack), matching every existing caller's previously-hardcoded width.
fn recurse_or_pop_before(
    analyzer: &impl FrameAnalysis,
    queue: &mut VecDeque<(InstrId, u8)>,
    state: &mut PushPopState,
    cons: InstrId,
    input_index: u32,
    fallback_width: u8,
) {
    let input = analyzer.producer_of_input(cons, input_index);
    let width = input.map(|i| i.width).unwrap_or(fallback_width);
    let prod = input.and_then(|i| single_consumer_producer_of(analyzer, cons, &i));
    if let Some(prod) = prod {
        queue.push_back((prod, width));
    } else {
        state.pops_before.push((cons, pop_op_for_width(width)));
    }
}

fn pop_op_for_width(width: u8) -> Op {
    if width >= 2 {
        Op::Pop2
    } else {
        Op::Pop
    }
}

fn binary_operand_widths(op: Op) -> (u8, u8) {
    use Op::*;
    match op {
        LShl | LShr | LUshr => (1, 2),
        LAdd | LSub | LMul | LAnd | LOr | LXor | LCmp => (2, 2),
        DAdd | DSub | DMul | DDiv | DRem | DCmpL | DCmpG => (2, 2),
        _ => (1, 1),
    }
}

fn unary_operand_width(op: Op) -> u8 {
    use Op::*;
    match op {
        LNeg | L2I | L2F | L2D => 2,
        DNeg | D2I | D2L | D2F => 2,
        _ => 1,
    }
}

fn is_pure_unary_or_binary(op: Op) -> bool {
    use Op::*;
    // Integer/long division and remainder are handled separately
    // (`is_integer_division`): they can raise `ArithmeticException` on a
    // zero divisor and so are never dropped outright. Float/double
    // division and remainder have no such exception (zero divisor yields
    // `Infinity`/`NaN`) and are pure like the rest of this table.
    matches!(
        op,
        IAdd | LAdd | FAdd | DAdd | ISub | LSub | FSub | DSub | IMul | LMul | FMul | DMul
            | FDiv | DDiv | FRem | DRem
            | IAnd | LAnd | IOr | LOr | IXor | LXor | IShl | LShl | IShr | LShr | IUshr | LUshr
            | LCmp | FCmpL | FCmpG | DCmpL | DCmpG | INeg | LNeg | FNeg | DNeg | I2L | I2F | I2D
            | L2I | L2F | L2D | F2I | F2L | F2D | D2I | D2L | D2F | I2B | I2C | I2S
    )
}

fn is_binary(op: Op) -> bool {
    op.pops() == 2 && !matches!(op, Op::LReturn | Op::DReturn)
}

/// Runs the push/pop pass against a caller-supplied [`FrameAnalysis`] and
/// collaborators. Returns `(pushPopChanged, castAdded, nullCheckAdded)`.
pub fn eliminate_push_pop<A, CG, E>(
    method: &mut Method,
    analyzer: &A,
    oracle: &impl SideEffectOracle,
    call_graph: &mut CG,
    config: &PeepholeConfig,
) -> Result<(bool, bool, bool), PeepholeError<E>>
where
    A: FrameAnalysis,
    CG: CallGraph<Error = E>,
{
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!("push_pop", instructions = method.instruction_count()).entered();

    let mut state = PushPopState::default();
    let mut queue: VecDeque<(InstrId, u8)> = VecDeque::new();

    let mut pure_constructors: Vec<InstrId> = Vec::new();
    for (id, insn) in method.iter() {
        if let Instruction::Plain(op @ (Op::Pop | Op::Pop2)) = insn {
            let width = if *op == Op::Pop { 1 } else { 2 };
            if let Some(prod) = single_consumer_producer(analyzer, id, 0) {
                state.schedule_remove(id);
                queue.push_back((prod, width));
            }
        }
        if let Instruction::Call(call) = insn {
            if oracle.is_side_effect_free_constructor_call(call) {
                pure_constructors.push(id);
            }
        }
    }

    drain_queue(method, analyzer, oracle, call_graph, config, &mut queue, &mut state)?;

    loop {
        let mut any = false;
        for &ctor_id in &pure_constructors.clone() {
            if state.to_remove.contains(&ctor_id) {
                continue;
            }
            let Instruction::Call(call) = method.get(ctor_id).clone() else { continue };
            if try_eliminate_constructor(ctor_id, &call, method, analyzer, &mut state, &mut queue) {
                any = true;
            }
        }
        if !any {
            break;
        }
        drain_queue(method, analyzer, oracle, call_graph, config, &mut queue, &mut state)?;
    }

    commit(method, &mut state);

    Ok((state.changed, state.cast_added, state.null_check_added))
}

fn try_eliminate_constructor(
    ctor_id: InstrId,
    call: &crate::instr::CallInsn,
    method: &Method,
    analyzer: &impl FrameAnalysis,
    state: &mut PushPopState,
    queue: &mut VecDeque<(InstrId, u8)>,
) -> bool {
    let num_args = call.arg_count;
    let Some(receiver) = analyzer.producer_of_input(ctor_id, num_args) else {
        return false;
    };
    if !receiver.single_output {
        return false;
    }
    let Producer::Instr(receiver_id) = receiver.producer else {
        return false;
    };
    let consumers = analyzer.consumers_of_value_at(receiver_id, receiver.output_index);
    if consumers.len() != 1 || consumers[0] != ctor_id {
        return false;
    }

    match method.get(receiver_id) {
        Instruction::Type(TypeOp::New, _) => {
            // Shape 1: `NEW T; <args>; INVOKESPECIAL T.<init>` (no DUP).
            state.schedule_remove(ctor_id);
            for i in 0..num_args {
                recurse_or_pop_before(analyzer, queue, state, ctor_id, i, 1);
            }
            state.schedule_remove(receiver_id);
            true
        }
        Instruction::Plain(op) if op.is_dup() => {
            // Shape 2: `NEW T; DUP; <args>; INVOKESPECIAL T.<init>`, the DUP
            // already scheduled for removal by the main queue.
            if !state.to_remove.contains(&receiver_id) {
                return false;
            }
            state.schedule_remove(ctor_id);
            for i in 0..num_args {
                recurse_or_pop_before(analyzer, queue, state, ctor_id, i, 1);
            }
            if let Some(new_id) = single_consumer_producer(analyzer, receiver_id, 0) {
                queue.push_back((new_id, 1));
            }
            true
        }
        _ => false,
    }
}

#[allow(clippy::too_many_arguments)]
fn drain_queue<A, CG, E>(
    method: &mut Method,
    analyzer: &A,
    oracle: &impl SideEffectOracle,
    call_graph: &mut CG,
    config: &PeepholeConfig,
    queue: &mut VecDeque<(InstrId, u8)>,
    state: &mut PushPopState,
) -> Result<(), PeepholeError<E>>
where
    A: FrameAnalysis,
    CG: CallGraph<Error = E>,
{
    while let Some((prod_id, width)) = queue.pop_front() {
        dispatch(method, analyzer, oracle, call_graph, config, queue, state, prod_id, width)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn dispatch<A, CG, E>(
    method: &mut Method,
    analyzer: &A,
    oracle: &impl SideEffectOracle,
    call_graph: &mut CG,
    config: &PeepholeConfig,
    queue: &mut VecDeque<(InstrId, u8)>,
    state: &mut PushPopState,
    prod_id: InstrId,
    width: u8,
) -> Result<(), PeepholeError<E>>
where
    A: FrameAnalysis,
    CG: CallGraph<Error = E>,
{
    let insn = method.get(prod_id).clone();

    if let Instruction::Plain(op) = &insn {
        if op.is_dup() {
            if state.to_remove.contains(&prod_id) {
                recurse_or_pop_before(analyzer, queue, state, prod_id, 0, width);
            } else {
                state.schedule_remove(prod_id);
            }
            return Ok(());
        }
    }

    if state.to_remove.contains(&prod_id) {
        return Ok(());
    }

    match &insn {
        Instruction::Const(c) => {
            let removable = c.is_numeric_or_string() || c.is_null() || config.allow_skip_class_loading;
            if removable {
                state.schedule_remove(prod_id);
            } else {
                state.pops_after.push((prod_id, pop_op_for_width(width)));
            }
        }
        Instruction::Var(op, _) if op.is_load() => {
            state.schedule_remove(prod_id);
        }
        Instruction::Plain(op) if op.is_exotic_shuffle() => {
            unreachable!(
                "exotic stack-shuffle opcode {op:?} reached the push/pop queue: excluded upstream"
            );
        }
        Instruction::Plain(op) if op.is_integer_division() => {
            state.pops_after.push((prod_id, pop_op_for_width(width)));
        }
        Instruction::Plain(op) if is_pure_unary_or_binary(*op) => {
            state.schedule_remove(prod_id);
            if is_binary(*op) {
                let (w0, w1) = binary_operand_widths(*op);
                recurse_or_pop_before(analyzer, queue, state, prod_id, 0, w0);
                recurse_or_pop_before(analyzer, queue, state, prod_id, 1, w1);
            } else {
                let w0 = unary_operand_width(*op);
                recurse_or_pop_before(analyzer, queue, state, prod_id, 0, w0);
            }
        }
        Instruction::Field(op, field) if op.is_get() => {
            let removable = oracle.is_boxed_unit(field, *op)
                || (config.allow_skip_module_initialization && oracle.is_module_load(field, *op));
            if removable {
                state.schedule_remove(prod_id);
                if !op.is_static() {
                    recurse_or_pop_before(analyzer, queue, state, prod_id, 0, 1);
                }
            } else {
                state.pops_after.push((prod_id, pop_op_for_width(width)));
            }
        }
        Instruction::Call(call) => {
            if oracle.is_side_effect_free_call(call) {
                state.schedule_remove(prod_id);
                call_graph
                    .remove_callsite(CallSite { call: prod_id }, method)
                    .map_err(PeepholeError::CallGraph)?;
                let argc = call.arg_count + u32::from(call.has_receiver());
                for i in 0..argc {
                    recurse_or_pop_before(analyzer, queue, state, prod_id, i, 1);
                }
            } else if oracle.is_scala_unbox(call) {
                let boxed = oracle.boxed_type_of(call);
                method.replace(prod_id, Instruction::Type(TypeOp::CheckCast, boxed.owner));
                state.pops_after.push((prod_id, Op::Pop));
                state.cast_added = true;
                state.changed = true;
            } else if oracle.is_java_unbox(call) {
                insert_null_check(method, prod_id);
                state.schedule_remove(prod_id);
                state.null_check_added = true;
                state.changed = true;
            } else {
                state.pops_after.push((prod_id, pop_op_for_width(width)));
            }
        }
        Instruction::Indy(indy) => {
            if indy.is_lambda_meta_factory {
                state.schedule_remove(prod_id);
                call_graph
                    .remove_callsite(CallSite { call: prod_id }, method)
                    .map_err(PeepholeError::CallGraph)?;
                call_graph
                    .remove_closure_instantiation(prod_id, indy, method)
                    .map_err(PeepholeError::CallGraph)?;
                for i in 0..indy.arg_count {
                    recurse_or_pop_before(analyzer, queue, state, prod_id, i, 1);
                }
            } else {
                state.pops_after.push((prod_id, pop_op_for_width(width)));
            }
        }
        Instruction::Type(TypeOp::New, type_name) => {
            if oracle.is_new_for_side_effect_free_constructor(type_name) {
                state.schedule_remove(prod_id);
            } else {
                state.pops_after.push((prod_id, pop_op_for_width(width)));
            }
        }
        Instruction::MultiNewArray { dims, .. } => {
            state.schedule_remove(prod_id);
            for i in 0..*dims {
                recurse_or_pop_before(analyzer, queue, state, prod_id, i, 1);
            }
        }
        _ => {
            // conservative default: assume side effects, keep the producer.
            state.pops_after.push((prod_id, pop_op_for_width(width)));
        }
    }
    Ok(())
}

/// Rewrites a now-unused Java-style unboxing call into an inlined null
/// check: `IFNONNULL L; ACONST_NULL; ATHROW; L:`. The implicit NPE on a
/// `null` `ATHROW` operand preserves the original call's null-check
/// semantics without allocating an exception object.
fn insert_null_check(method: &mut Method, call_id: InstrId) {
    let label = method.insert_after(call_id, Instruction::Label);
    method.insert_before(call_id, Instruction::Jump(crate::instr::JumpOp::IfNonNull, label));
    method.insert_before(call_id, Instruction::Const(Const::Null));
    method.insert_before(call_id, Instruction::Plain(Op::AThrow));
    method.set_max_stack(method.max_stack() + 1);
}

fn commit(method: &mut Method, state: &mut PushPopState) {
    for (anchor, pop_op) in core::mem::take(&mut state.pops_after) {
        if let Some(next_id) = method.next_executable_or_label(anchor) {
            if matches!(method.get(next_id), Instruction::Plain(op) if *op == pop_op)
                && state.to_remove.remove(&next_id)
            {
                continue;
            }
        }
        method.insert_after(anchor, Instruction::Plain(pop_op));
        state.changed = true;
    }

    for (anchor, pop_op) in core::mem::take(&mut state.pops_before) {
        method.insert_before(anchor, Instruction::Plain(pop_op));
        state.changed = true;
    }

    // Anything still scheduled survived the cancellation check above and is
    // a genuine structural change.
    if !state.to_remove.is_empty() {
        state.changed = true;
    }
    for id in core::mem::take(&mut state.to_remove) {
        method.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analyzer::LinearFrameAnalyzer,
        callgraph::NoopCallGraph,
        instr::{CallInsn, CallKind, FieldOp, MethodRef, VarOp},
        oracle::{ClassTagNewArray, NoneOracle},
    };
    use assert_matches::assert_matches;
    use core::convert::Infallible;

    fn run(method: &mut Method, oracle: &impl SideEffectOracle) -> (bool, bool, bool) {
        let cfg = PeepholeConfig::default();
        let analyzer = LinearFrameAnalyzer::build_for_source_value(method, &cfg).unwrap();
        let mut cg = NoopCallGraph;
        let result: Result<(bool, bool, bool), PeepholeError<Infallible>> =
            eliminate_push_pop(method, &analyzer, oracle, &mut cg, &cfg);
        assert_matches!(result, Ok(_));
        result.unwrap()
    }

    #[test]
    fn removes_single_consumer_const_push() {
        let mut m = Method::new(0, 1, 0, true);
        m.push_back(Instruction::Const(Const::I32(5)));
        m.push_back(Instruction::Plain(Op::Pop));
        m.push_back(Instruction::Plain(Op::Return));

        let (changed, _, _) = run(&mut m, &NoneOracle);
        assert!(changed);
        let kept: Vec<_> = m.iter().map(|(_, i)| i.clone()).collect();
        assert_eq!(kept, alloc::vec![Instruction::Plain(Op::Return)]);
    }

    #[test]
    fn division_is_preserved() {
        // ICONST_5; ILOAD 1; IDIV; POP
        let mut m = Method::new(2, 2, 2, true);
        m.push_back(Instruction::Const(Const::I32(5)));
        let load1 = m.push_back(Instruction::Var(VarOp::ILoad, 1));
        let idiv = m.push_back(Instruction::Plain(Op::IDiv));
        m.push_back(Instruction::Plain(Op::Pop));

        let (changed, _, _) = run(&mut m, &NoneOracle);
        // The trailing POP is tentatively scheduled for removal (its
        // producer looks single-consumer) and IDIV's own pop-after request
        // cancels right back against it in `commit`, so nothing actually
        // moves.
        assert!(!changed);
        let seq: Vec<_> = m.iter().map(|(_, i)| i.clone()).collect();
        assert_eq!(
            seq,
            alloc::vec![
                Instruction::Const(Const::I32(5)),
                Instruction::Var(VarOp::ILoad, 1),
                Instruction::Plain(Op::IDiv),
                Instruction::Plain(Op::Pop),
            ]
        );
        let _ = (load1, idiv);
    }

    struct CtorOracle;
    impl SideEffectOracle for CtorOracle {
        fn is_side_effect_free_call(&self, _call: &CallInsn) -> bool {
            false
        }
        fn is_side_effect_free_constructor_call(&self, call: &CallInsn) -> bool {
            call.target.name == "<init>"
        }
        fn is_new_for_side_effect_free_constructor(&self, type_name: &str) -> bool {
            type_name == "T"
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
        fn is_boxed_unit(&self, _field: &MethodRef, _op: FieldOp) -> bool {
            false
        }
        fn is_module_load(&self, _field: &MethodRef, _op: FieldOp) -> bool {
            false
        }
        fn class_tag_new_array_arg(&self, _call: &CallInsn) -> Option<ClassTagNewArray> {
            None
        }
    }

    #[test]
    fn pure_constructor_with_dup_is_fully_removed() {
        // NEW T; DUP; ICONST_1; INVOKESPECIAL T.<init>(I)V; POP
        let mut m = Method::new(0, 3, 0, true);
        m.push_back(Instruction::Type(TypeOp::New, "T".into()));
        m.push_back(Instruction::Plain(Op::Dup));
        m.push_back(Instruction::Const(Const::I32(1)));
        m.push_back(Instruction::Call(CallInsn {
            kind: CallKind::Special,
            target: MethodRef::new("T", "<init>", "(I)V"),
            arg_count: 1,
            arg_width: 1,
            result_width: 0,
        }));
        m.push_back(Instruction::Plain(Op::Pop));

        let (changed, _, _) = run(&mut m, &CtorOracle);
        assert!(changed);
        assert_eq!(m.instruction_count(), 0);
    }

    #[test]
    fn recurse_or_pop_before_uses_the_analyzers_width_not_a_hardcoded_one() {
        let mut m = Method::new(0, 2, 0, true);
        let call = m.push_back(Instruction::Call(CallInsn {
            kind: CallKind::Static,
            target: MethodRef::new("Owner", "m", "(J)V"),
            arg_count: 1,
            arg_width: 2,
            result_width: 0,
        }));

        struct StubAnalyzer;
        impl FrameAnalysis for StubAnalyzer {
            fn aliases_of(&self, _at: InstrId, slot: u32) -> Vec<u32> {
                alloc::vec![slot]
            }
            fn producer_of_input(&self, _at: InstrId, _input_index: u32) -> Option<InputProducer> {
                // Not single-consumer (the `Exception` sentinel is always
                // conservatively treated as multi-consumer) and width 2, as
                // a long/double call argument whose producer cannot be
                // folded away would report.
                Some(InputProducer {
                    producer: crate::producer::Producer::Exception,
                    output_index: 0,
                    single_output: false,
                    width: 2,
                })
            }
            fn consumers_of_value_at(&self, _producer: InstrId, _output_index: u32) -> Vec<InstrId> {
                Vec::new()
            }
            fn initial_producer_of_input(
                &self,
                _at: InstrId,
                _input_index: u32,
            ) -> Option<crate::producer::Producer> {
                None
            }
            fn initial_producer_of_local(&self, _at: InstrId, _slot: u32) -> crate::producer::Producer {
                crate::producer::Producer::UninitializedLocal(0)
            }
            fn stack_depth_at(&self, _at: InstrId) -> Option<u32> {
                None
            }
        }

        let mut state = PushPopState::default();
        let mut queue: VecDeque<(InstrId, u8)> = VecDeque::new();
        recurse_or_pop_before(&StubAnalyzer, &mut queue, &mut state, call, 0, 1);

        assert!(queue.is_empty());
        assert_eq!(state.pops_before, alloc::vec![(call, Op::Pop2)]);
    }
}
