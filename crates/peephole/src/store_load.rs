//! Store/Load Pair Eliminator (D) — §4.5.
//!
//! A single forward traversal with a small pair-start stack, entirely
//! self-contained: unlike (A)–(C), it needs no [`FrameAnalysis`] and works
//! across branches, since labels and jump targets are tracked directly
//! rather than assumed straight-line.

use crate::{
    instr::{Const, Instruction, VarOp},
    method::{InstrId, Method},
};
use alloc::{collections::BTreeSet, vec::Vec};

enum Dep {
    Label(InstrId),
    Pair(usize),
}

enum ElemKind {
    Null,
    Store { slot: u32, op: VarOp },
}

struct Elem {
    start: InstrId,
    kind: ElemKind,
    deps: Vec<Dep>,
}

struct PairCandidate {
    store: InstrId,
    closer: InstrId,
    slot: u32,
    deps: Vec<Dep>,
}

/// Runs the store/load pair pass. Returns whether any pair was removed.
pub fn eliminate_store_load_pairs(method: &mut Method) -> bool {
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!("store_load", instructions = method.instruction_count()).entered();

    let mut stack: Vec<Elem> = Vec::new();
    let mut pairs: Vec<PairCandidate> = Vec::new();
    let mut live_vars: BTreeSet<u32> = BTreeSet::new();
    let mut live_labels: BTreeSet<InstrId> = BTreeSet::new();

    let ids: Vec<InstrId> = method.iter().map(|(id, _)| id).collect();
    for id in ids {
        let insn = method.get(id).clone();
        match &insn {
            Instruction::Const(Const::Null) => {
                stack.push(Elem { start: id, kind: ElemKind::Null, deps: Vec::new() });
            }
            Instruction::Var(op, slot) if op.is_store() => {
                stack.push(Elem {
                    start: id,
                    kind: ElemKind::Store { slot: *slot, op: *op },
                    deps: Vec::new(),
                });
            }
            Instruction::Label => {
                if let Some(top) = stack.last_mut() {
                    top.deps.push(Dep::Label(id));
                }
            }
            _ => {
                for target in insn.jump_targets() {
                    live_labels.insert(target);
                }
                try_to_pair(&mut stack, &mut pairs, id, &insn, &mut live_vars);
            }
        }
    }

    // Whatever is still open when the instruction stream ends can never
    // close (there is no instruction left to act as the load): keep it.
    for elem in stack.drain(..) {
        if let ElemKind::Store { slot, .. } = elem.kind {
            live_vars.insert(slot);
        }
    }

    let mut kept = alloc::vec![false; pairs.len()];
    loop {
        let mut newly_kept = false;
        for i in 0..pairs.len() {
            if kept[i] {
                continue;
            }
            let disqualified = live_vars.contains(&pairs[i].slot)
                || pairs[i].deps.iter().any(|d| match d {
                    Dep::Label(l) => live_labels.contains(l),
                    Dep::Pair(j) => kept[*j],
                });
            if disqualified {
                kept[i] = true;
                live_vars.insert(pairs[i].slot);
                newly_kept = true;
            }
        }
        if !newly_kept {
            break;
        }
    }

    let mut changed = false;
    for (i, pair) in pairs.into_iter().enumerate() {
        if !kept[i] {
            method.remove(pair.store);
            method.remove(pair.closer);
            changed = true;
        }
    }
    changed
}

/// Attempts to resolve `insn` (the current dispatched, non-store/const/label
/// instruction) against the pair stack. On success, pops and records a
/// [`PairCandidate`], propagating it as a dependency of whatever remains
/// below. On failure, registers liveness for `insn` itself (if it is an
/// unresolved load or increment) and for every element still on the stack,
/// then empties it.
fn try_to_pair(
    stack: &mut Vec<Elem>,
    pairs: &mut Vec<PairCandidate>,
    id: InstrId,
    insn: &Instruction,
    live_vars: &mut BTreeSet<u32>,
) {
    // Opportunistically fuse a completed `aconst_null; astore s` sitting at
    // the top of the stack; this does not depend on what `insn` is, and may
    // expose a new top that `insn` goes on to pair against below.
    loop {
        let fusable = stack.len() >= 2
            && matches!(stack[stack.len() - 1].kind, ElemKind::Store { op: VarOp::AStore, .. })
            && matches!(stack[stack.len() - 2].kind, ElemKind::Null);
        if !fusable {
            break;
        }
        let store_elem = stack.pop().unwrap();
        let null_elem = stack.pop().unwrap();
        let ElemKind::Store { slot, .. } = store_elem.kind else { unreachable!() };
        let mut deps = null_elem.deps;
        deps.extend(store_elem.deps);
        let pair_idx = pairs.len();
        pairs.push(PairCandidate { store: null_elem.start, closer: store_elem.start, slot, deps });
        if let Some(new_top) = stack.last_mut() {
            new_top.deps.push(Dep::Pair(pair_idx));
        }
    }

    if let Some(top) = stack.last() {
        if let ElemKind::Store { slot, .. } = top.kind {
            if let Instruction::Var(op, s) = insn {
                if op.is_load() && *s == slot {
                    let elem = stack.pop().unwrap();
                    let pair_idx = pairs.len();
                    pairs.push(PairCandidate { store: elem.start, closer: id, slot, deps: elem.deps });
                    if let Some(new_top) = stack.last_mut() {
                        new_top.deps.push(Dep::Pair(pair_idx));
                    }
                    return;
                }
            }
        }
    }

    // No pairing: `insn` itself, if a load or increment, becomes live, and
    // every in-flight pair start on the stack is abandoned.
    match insn {
        Instruction::Var(op, slot) if op.is_load() => {
            live_vars.insert(*slot);
        }
        Instruction::Inc { slot, .. } => {
            live_vars.insert(*slot);
        }
        _ => {}
    }
    for elem in stack.drain(..) {
        if let ElemKind::Store { slot, .. } = elem.kind {
            live_vars.insert(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::{Const, JumpOp, Op};

    #[test]
    fn removes_adjacent_store_load() {
        // ILOAD 0; ISTORE 1; ILOAD 1; IRETURN
        let mut m = Method::new(2, 2, 1, true);
        m.push_back(Instruction::Var(VarOp::ILoad, 0));
        let store1 = m.push_back(Instruction::Var(VarOp::IStore, 1));
        let load1 = m.push_back(Instruction::Var(VarOp::ILoad, 1));
        m.push_back(Instruction::Plain(Op::IReturn));

        let changed = eliminate_store_load_pairs(&mut m);
        assert!(changed);
        let seq: Vec<_> = m.iter().map(|(_, i)| i.clone()).collect();
        assert_eq!(
            seq,
            alloc::vec![
                Instruction::Var(VarOp::ILoad, 0),
                Instruction::Plain(Op::IReturn),
            ]
        );
        let _ = (store1, load1);
    }

    #[test]
    fn removes_dead_null_store() {
        // ACONST_NULL; ASTORE 2; RETURN  (slot 2 never read again)
        let mut m = Method::new(3, 1, 0, true);
        m.push_back(Instruction::Const(Const::Null));
        m.push_back(Instruction::Var(VarOp::AStore, 2));
        m.push_back(Instruction::Plain(Op::Return));

        let changed = eliminate_store_load_pairs(&mut m);
        assert!(changed);
        let seq: Vec<_> = m.iter().map(|(_, i)| i.clone()).collect();
        assert_eq!(seq, alloc::vec![Instruction::Plain(Op::Return)]);
    }

    #[test]
    fn keeps_pair_crossed_by_a_live_label() {
        // ILOAD 0; ISTORE 1; L: ILOAD 1; IRETURN — with a GOTO L elsewhere,
        // the label is a live jump target and must survive between the
        // store and its load, so the pair is not removed.
        let mut m = Method::new(2, 2, 1, true);
        m.push_back(Instruction::Var(VarOp::ILoad, 0));
        m.push_back(Instruction::Var(VarOp::IStore, 1));
        let label = m.push_back(Instruction::Label);
        m.push_back(Instruction::Var(VarOp::ILoad, 1));
        m.push_back(Instruction::Plain(Op::IReturn));
        m.push_back(Instruction::Jump(JumpOp::Goto, label));

        let changed = eliminate_store_load_pairs(&mut m);
        assert!(!changed);
        assert_eq!(m.instruction_count(), 6);
    }

    #[test]
    fn keeps_store_whose_slot_is_read_elsewhere() {
        // ILOAD 0; ISTORE 1; ILOAD 1; ILOAD 1; IADD; IRETURN — the second
        // ILOAD 1 never pairs, marking slot 1 live, so the first pair must
        // not be removed either.
        let mut m = Method::new(2, 3, 1, true);
        m.push_back(Instruction::Var(VarOp::ILoad, 0));
        m.push_back(Instruction::Var(VarOp::IStore, 1));
        m.push_back(Instruction::Var(VarOp::ILoad, 1));
        m.push_back(Instruction::Var(VarOp::ILoad, 1));
        m.push_back(Instruction::Plain(Op::IAdd));
        m.push_back(Instruction::Plain(Op::IReturn));

        let changed = eliminate_store_load_pairs(&mut m);
        assert!(!changed);
        assert_eq!(m.instruction_count(), 6);
    }

    #[test]
    fn nested_null_store_pair_inside_outer_pair() {
        // ICONST_0; ISTORE 1; ACONST_NULL; ASTORE 2; ILOAD 1 — slots 1 and 2
        // otherwise dead: the inner null-store pair fuses and is removed,
        // which then exposes the outer store/load pair across the gap.
        let mut m = Method::new(3, 1, 0, true);
        m.push_back(Instruction::Const(Const::I32(0)));
        m.push_back(Instruction::Var(VarOp::IStore, 1));
        m.push_back(Instruction::Const(Const::Null));
        m.push_back(Instruction::Var(VarOp::AStore, 2));
        m.push_back(Instruction::Var(VarOp::ILoad, 1));

        let changed = eliminate_store_load_pairs(&mut m);
        assert!(changed);
        let seq: Vec<_> = m.iter().map(|(_, i)| i.clone()).collect();
        assert_eq!(seq, alloc::vec![Instruction::Const(Const::I32(0))]);
    }
}
