//! Copy-Propagator (A) — §4.2.
//!
//! Rewrites each non-parameter load to the smallest-numbered alias in its
//! equivalence class, preferring an alias already observed as a load operand
//! earlier in the same pass (`usedOrMinAlias`).

use crate::{
    analyzer::{FrameAnalysis, LinearFrameAnalyzer},
    config::PeepholeConfig,
    instr::Instruction,
    method::Method,
};
use alloc::collections::BTreeSet;

/// Runs copy-propagation, building its own [`LinearFrameAnalyzer`] gated by
/// `config.max_instructions_for_aliasing`. Returns `None` if the method is
/// outside the analyzer's size gate (no change attempted, not an error).
pub fn copy_propagate(method: &mut Method, config: &PeepholeConfig) -> Option<bool> {
    let analyzer = LinearFrameAnalyzer::build_for_aliasing(method, config)?;
    Some(copy_propagate_with(method, &analyzer))
}

/// Runs copy-propagation against a caller-supplied [`FrameAnalysis`], for
/// drivers backed by a real whole-program analyzer.
pub fn copy_propagate_with(method: &mut Method, analyzer: &impl FrameAnalysis) -> bool {
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!("copy_prop", instructions = method.instruction_count()).entered();

    let mut known_used: BTreeSet<u32> = BTreeSet::new();
    let mut changed = false;

    let mut cursor = method.first();
    while let Some(id) = cursor {
        cursor = method.next(id);

        let Instruction::Var(op, slot) = *method.get(id) else {
            continue;
        };
        if !op.is_load() {
            continue;
        }

        // Parameter slots are excluded: their initial value is always live,
        // and there is no upstream store to coalesce onto.
        if slot < method.params_size() {
            continue;
        }

        let aliases = analyzer.aliases_of(id, slot);
        let chosen = aliases
            .iter()
            .copied()
            .find(|s| known_used.contains(s))
            .unwrap_or_else(|| aliases.iter().copied().min().unwrap_or(slot));

        if chosen != slot {
            #[cfg(feature = "logging")]
            tracing::trace!(from = slot, to = chosen, "copy-propagated load");
            method.replace(id, Instruction::Var(op, chosen));
            changed = true;
        }
        known_used.insert(chosen);
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::{Instruction, VarOp};

    #[test]
    fn alias_canonicalization() {
        // ILOAD 5; ISTORE 7; ILOAD 7  (slot 5 is a parameter, 7 becomes its alias)
        let mut m = Method::new(8, 2, 6, true);
        let load5 = m.push_back(Instruction::Var(VarOp::ILoad, 5));
        let _store7 = m.push_back(Instruction::Var(VarOp::IStore, 7));
        let load7 = m.push_back(Instruction::Var(VarOp::ILoad, 7));

        let cfg = PeepholeConfig::default();
        let changed = copy_propagate(&mut m, &cfg).unwrap();
        assert!(changed);
        assert_eq!(*m.get(load5), Instruction::Var(VarOp::ILoad, 5));
        assert_eq!(*m.get(load7), Instruction::Var(VarOp::ILoad, 5));
    }

    #[test]
    fn parameter_loads_are_never_rewritten() {
        let mut m = Method::new(2, 1, 2, true);
        let load0 = m.push_back(Instruction::Var(VarOp::ILoad, 0));
        let cfg = PeepholeConfig::default();
        let changed = copy_propagate(&mut m, &cfg).unwrap();
        assert!(!changed);
        assert_eq!(*m.get(load0), Instruction::Var(VarOp::ILoad, 0));
    }

    #[test]
    fn no_change_on_already_minimal_slot() {
        // ILOAD 1; ISTORE 2; ILOAD 1 — slot 1 never becomes an alias target
        // worth picking over itself.
        let mut m = Method::new(3, 2, 0, true);
        m.push_back(Instruction::Var(VarOp::ILoad, 1));
        m.push_back(Instruction::Var(VarOp::IStore, 2));
        let load1_again = m.push_back(Instruction::Var(VarOp::ILoad, 1));
        let cfg = PeepholeConfig::default();
        let changed = copy_propagate(&mut m, &cfg).unwrap();
        assert!(!changed);
        assert_eq!(*m.get(load1_again), Instruction::Var(VarOp::ILoad, 1));
    }

    #[test]
    fn declines_outside_size_gate() {
        let mut m = Method::new(1, 1, 0, true);
        m.push_back(Instruction::Var(VarOp::ILoad, 0));
        let cfg = PeepholeConfig { max_instructions_for_aliasing: 0, ..PeepholeConfig::default() };
        assert!(copy_propagate(&mut m, &cfg).is_none());
    }
}
