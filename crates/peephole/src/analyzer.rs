//! The frame/alias analyzer (§4.1) and its external-collaborator trait.
//!
//! [`FrameAnalysis`] is the query surface a driver's real, whole-program,
//! fixpoint-over-arbitrary-control-flow analyzer would implement. This crate
//! ships [`LinearFrameAnalyzer`], a conservative implementation good enough
//! to drive the straight-line and single-handler-region fixtures in this
//! crate's own test suite and any embedder that has not wired up a full CFG
//! analyzer yet: it declines to build (like any analyzer past the size gate)
//! whenever the method contains a branch, because resolving aliasing across
//! a real control-flow merge needs the fixpoint engine this crate does not
//! own (§1: global dataflow is out of scope; per-method CFG dataflow is the
//! driver's analyzer's job, not this one's).

use crate::{
    config::PeepholeConfig,
    instr::{Instruction, Op},
    method::{InstrId, Method},
    producer::Producer,
};
use alloc::{collections::BTreeMap, vec::Vec};

/// The immediate producer of one of an instruction's stack inputs, together
/// with the bookkeeping [`FrameAnalysis::producer_of_input`]'s callers need
/// to finish the §4.4 `producersIfSingleConsumer` check themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputProducer {
    /// The instruction (or sentinel) that pushed this value.
    pub producer: Producer,
    /// Which of `producer`'s pushed values this is, in push order. Always
    /// `0` except for `DUP`/`DUP2`, which push two copies of one value.
    pub output_index: u32,
    /// `true` if `producer`'s shape is eligible for the single-output fold:
    /// a `Parameter`, `DUP`/a width-2 `DUP2`, or any instruction whose net
    /// effect produces exactly one value.
    pub single_output: bool,
    /// The stack width (`1` or `2`) of this value, so a caller that falls
    /// back to inserting an explicit pop picks the right-width opcode
    /// (§4.4 "Recursing on inputs": "a pop of the right width").
    pub width: u8,
}

/// The query surface consumed by the copy-propagation, stale-store, and
/// push-pop passes (§4.1, §6). A driver backed by a real whole-program
/// analyzer implements this trait directly; this crate's own passes are
/// generic over it.
pub trait FrameAnalysis {
    /// `aliasesOf`: every local slot holding an equal value to `slot`, in
    /// the frame just before `at` executes. Always includes `slot` itself.
    fn aliases_of(&self, at: InstrId, slot: u32) -> Vec<u32>;

    /// The producer of whatever sits `input_index` positions from the top
    /// of the stack in the frame just before `at` executes (`0` = top).
    /// `None` if `input_index` is deeper than the stack.
    fn producer_of_input(&self, at: InstrId, input_index: u32) -> Option<InputProducer>;

    /// `consumersOfValueAt`: the instructions that consume `producer`'s
    /// `output_index`-th pushed value. Empty if it reaches no consumer
    /// (dead code, or the method's return).
    fn consumers_of_value_at(&self, producer: InstrId, output_index: u32) -> Vec<InstrId>;

    /// `initialProducersForInputsOf`: the ultimate, through-copies origin of
    /// whatever sits `input_index` positions from the top of the stack just
    /// before `at` executes (a `Parameter`, `UninitializedLocal`,
    /// `Exception`, or the instruction that first computed a fresh value).
    fn initial_producer_of_input(&self, at: InstrId, input_index: u32) -> Option<Producer>;

    /// `initialProducersForValueAt` restricted to local slots: the ultimate
    /// origin currently held by local slot `slot`, just before `at` runs.
    fn initial_producer_of_local(&self, at: InstrId, slot: u32) -> Producer;

    /// The number of values (not words) on the stack just before `at` runs.
    fn stack_depth_at(&self, at: InstrId) -> Option<u32>;
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    origin: Producer,
    immediate: Producer,
    width: u8,
    output_index: u32,
    single_output: bool,
}

#[derive(Debug, Clone)]
struct FrameSnapshot {
    locals: Vec<Option<Producer>>,
    stack: Vec<Cell>,
}

/// This crate's own conservative [`FrameAnalysis`] implementation: a single
/// forward simulation over a method with no branches (beyond straight-line
/// fallthrough into at most the `try`/`catch` handler regions the method
/// declares).
#[derive(Debug)]
pub struct LinearFrameAnalyzer {
    /// Frame just before each instruction executes.
    frames: BTreeMap<InstrId, FrameSnapshot>,
    /// `(producer, output_index) -> consumers`, built while simulating.
    consumers: BTreeMap<(InstrId, u32), Vec<InstrId>>,
}

impl LinearFrameAnalyzer {
    /// Builds the analyzer gated by `max_instructions_for_aliasing`, for use
    /// by the copy-propagation pass.
    pub fn build_for_aliasing(method: &Method, config: &PeepholeConfig) -> Option<Self> {
        Self::build_gated(method, config.max_instructions_for_aliasing)
    }

    /// Builds the analyzer gated by `max_instructions_for_source_value`, for
    /// use by the stale-store and push-pop passes.
    pub fn build_for_source_value(method: &Method, config: &PeepholeConfig) -> Option<Self> {
        Self::build_gated(method, config.max_instructions_for_source_value)
    }

    fn build_gated(method: &Method, limit: u32) -> Option<Self> {
        if method.instruction_count() as u32 > limit {
            return None;
        }
        if method.iter().any(|(_, insn)| is_branch(insn)) {
            // No real CFG merges to resolve: out of scope for this
            // in-crate analyzer (a driver's own analyzer handles it).
            return None;
        }
        Some(Self::simulate(method))
    }

    fn simulate(method: &Method) -> Self {
        let mut locals: Vec<Option<Producer>> = (0..method.max_locals())
            .map(|slot| {
                if slot < method.params_size() {
                    Some(Producer::Parameter(slot))
                } else {
                    None
                }
            })
            .collect();
        let mut stack: Vec<Cell> = Vec::new();
        let mut frames = BTreeMap::new();
        let mut consumers: BTreeMap<(InstrId, u32), Vec<InstrId>> = BTreeMap::new();

        let handler_starts: Vec<InstrId> =
            method.try_catch_regions().iter().map(|r| r.handler).collect();

        for (id, insn) in method.iter() {
            if handler_starts.contains(&id) {
                stack.clear();
                stack.push(Cell {
                    origin: Producer::Exception,
                    immediate: Producer::Exception,
                    width: 1,
                    output_index: 0,
                    single_output: false,
                });
            }

            frames.insert(
                id,
                FrameSnapshot {
                    locals: locals.clone(),
                    stack: stack.clone(),
                },
            );

            let mut record_consumer = |cell: &Cell, consumer: InstrId| {
                if let Producer::Instr(pid) = cell.immediate {
                    consumers.entry((pid, cell.output_index)).or_default().push(consumer);
                }
            };

            match insn {
                Instruction::Label => {}
                Instruction::Var(op, slot) if op.is_load() => {
                    let slot = *slot;
                    let origin = locals[slot as usize].unwrap_or(Producer::UninitializedLocal(slot));
                    stack.push(Cell {
                        origin,
                        immediate: Producer::Instr(id),
                        width: op.width(),
                        output_index: 0,
                        single_output: true,
                    });
                }
                Instruction::Var(_, slot) => {
                    // store
                    if let Some(cell) = stack.pop() {
                        record_consumer(&cell, id);
                        locals[*slot as usize] = Some(cell.origin);
                    }
                }
                Instruction::Inc { slot, .. } => {
                    locals[*slot as usize] = Some(Producer::Instr(id));
                }
                Instruction::Call(call) => {
                    let argc = call.arg_count + u32::from(call.has_receiver());
                    for _ in 0..argc {
                        if let Some(cell) = stack.pop() {
                            record_consumer(&cell, id);
                        }
                    }
                    if call.result_width > 0 {
                        stack.push(Cell {
                            origin: Producer::Instr(id),
                            immediate: Producer::Instr(id),
                            width: call.result_width,
                            output_index: 0,
                            single_output: true,
                        });
                    }
                }
                Instruction::Indy(indy) => {
                    for _ in 0..indy.arg_count {
                        if let Some(cell) = stack.pop() {
                            record_consumer(&cell, id);
                        }
                    }
                    if indy.result_width > 0 {
                        stack.push(Cell {
                            origin: Producer::Instr(id),
                            immediate: Producer::Instr(id),
                            width: indy.result_width,
                            output_index: 0,
                            single_output: true,
                        });
                    }
                }
                Instruction::Type(op, _) => {
                    use crate::instr::TypeOp::*;
                    let pops = match op {
                        New => 0,
                        ANewArray | CheckCast | InstanceOf => 1,
                    };
                    for _ in 0..pops {
                        if let Some(cell) = stack.pop() {
                            record_consumer(&cell, id);
                        }
                    }
                    stack.push(Cell {
                        origin: Producer::Instr(id),
                        immediate: Producer::Instr(id),
                        width: 1,
                        output_index: 0,
                        single_output: true,
                    });
                }
                Instruction::Jump(..) | Instruction::TableSwitch { .. } | Instruction::LookupSwitch { .. } => {
                    unreachable!("build_gated rejects methods containing branches")
                }
                Instruction::Const(c) => {
                    stack.push(Cell {
                        origin: Producer::Instr(id),
                        immediate: Producer::Instr(id),
                        width: c.width(),
                        output_index: 0,
                        single_output: true,
                    });
                }
                Instruction::MultiNewArray { dims, .. } => {
                    for _ in 0..*dims {
                        if let Some(cell) = stack.pop() {
                            record_consumer(&cell, id);
                        }
                    }
                    stack.push(Cell {
                        origin: Producer::Instr(id),
                        immediate: Producer::Instr(id),
                        width: 1,
                        output_index: 0,
                        single_output: true,
                    });
                }
                Instruction::Field(op, _) => {
                    if op.is_get() {
                        if !op.is_static() {
                            if let Some(cell) = stack.pop() {
                                record_consumer(&cell, id);
                            }
                        }
                        stack.push(Cell {
                            origin: Producer::Instr(id),
                            immediate: Producer::Instr(id),
                            width: 1,
                            output_index: 0,
                            single_output: true,
                        });
                    } else {
                        if let Some(cell) = stack.pop() {
                            record_consumer(&cell, id);
                        }
                        if !op.is_static() {
                            if let Some(cell) = stack.pop() {
                                record_consumer(&cell, id);
                            }
                        }
                    }
                }
                Instruction::Plain(op) => simulate_plain(*op, id, &mut stack, &mut record_consumer),
            }
        }

        Self { frames, consumers }
    }
}

fn simulate_plain(
    op: Op,
    id: InstrId,
    stack: &mut Vec<Cell>,
    record_consumer: &mut impl FnMut(&Cell, InstrId),
) {
    let mut pop = |stack: &mut Vec<Cell>, record_consumer: &mut dyn FnMut(&Cell, InstrId)| -> Option<Cell> {
        let cell = stack.pop();
        if let Some(cell) = &cell {
            record_consumer(cell, id);
        }
        cell
    };
    let fresh = |width| Cell {
        origin: Producer::Instr(id),
        immediate: Producer::Instr(id),
        width,
        output_index: 0,
        single_output: true,
    };

    match op {
        // returns and control exits
        Op::Return => {}
        Op::IReturn | Op::FReturn | Op::AReturn | Op::AThrow | Op::MonitorEnter | Op::MonitorExit => {
            pop(stack, record_consumer);
        }
        Op::LReturn | Op::DReturn => {
            pop(stack, record_consumer);
        }
        Op::Nop => {}
        Op::ArrayLength => {
            pop(stack, record_consumer);
            stack.push(fresh(1));
        }
        Op::Pop => {
            pop(stack, record_consumer);
        }
        Op::Pop2 => {
            let top_width = stack.last().map(|c| c.width).unwrap_or(1);
            pop(stack, record_consumer);
            if top_width == 1 {
                pop(stack, record_consumer);
            }
        }
        Op::Dup => {
            if let Some(c) = pop(stack, record_consumer) {
                let copy = |idx| Cell {
                    origin: c.origin,
                    immediate: Producer::Instr(id),
                    width: c.width,
                    output_index: idx,
                    single_output: true,
                };
                // Both copies are now owned by this DUP for prodcons purposes.
                stack.push(copy(0));
                stack.push(copy(1));
            }
        }
        Op::Dup2 => {
            let top_width = stack.last().map(|c| c.width).unwrap_or(1);
            if top_width == 2 {
                if let Some(c) = pop(stack, record_consumer) {
                    let copy = |idx| Cell {
                        origin: c.origin,
                        immediate: Producer::Instr(id),
                        width: c.width,
                        output_index: idx,
                        single_output: true,
                    };
                    stack.push(copy(0));
                    stack.push(copy(1));
                }
            } else {
                let hi = pop(stack, record_consumer);
                let lo = pop(stack, record_consumer);
                if let (Some(lo), Some(hi)) = (lo, hi) {
                    let retag = |c: Cell, idx| Cell {
                        origin: c.origin,
                        immediate: Producer::Instr(id),
                        width: c.width,
                        output_index: idx,
                        single_output: false,
                    };
                    stack.push(retag(lo, 0));
                    stack.push(retag(hi, 1));
                    stack.push(retag(lo, 2));
                    stack.push(retag(hi, 3));
                }
            }
        }
        Op::DupX1 | Op::DupX2 | Op::Dup2X1 | Op::Dup2X2 | Op::Swap => {
            // Exotic shuffles: out of scope (§1 non-goals). Approximate the
            // stack-depth bookkeeping so later frames stay consistent, but
            // never claim to track provenance through them.
            let pops = op.pops();
            for _ in 0..pops {
                pop(stack, record_consumer);
            }
            let pushes = op.pushes();
            for _ in 0..pushes {
                let mut cell = fresh(1);
                cell.single_output = false;
                stack.push(cell);
            }
        }
        // binary arithmetic / bitwise / compare
        Op::IAdd | Op::LAdd | Op::FAdd | Op::DAdd | Op::ISub | Op::LSub | Op::FSub | Op::DSub
        | Op::IMul | Op::LMul | Op::FMul | Op::DMul | Op::IDiv | Op::LDiv | Op::FDiv | Op::DDiv
        | Op::IRem | Op::LRem | Op::FRem | Op::DRem | Op::IAnd | Op::LAnd | Op::IOr | Op::LOr
        | Op::IXor | Op::LXor | Op::IShl | Op::LShl | Op::IShr | Op::LShr | Op::IUshr | Op::LUshr
        | Op::LCmp | Op::FCmpL | Op::FCmpG | Op::DCmpL | Op::DCmpG => {
            pop(stack, record_consumer);
            pop(stack, record_consumer);
            stack.push(fresh(result_width_of(op)));
        }
        // unary arithmetic / conversions
        Op::INeg | Op::LNeg | Op::FNeg | Op::DNeg | Op::I2L | Op::I2F | Op::I2D | Op::L2I
        | Op::L2F | Op::L2D | Op::F2I | Op::F2L | Op::F2D | Op::D2I | Op::D2L | Op::D2F
        | Op::I2B | Op::I2C | Op::I2S => {
            pop(stack, record_consumer);
            stack.push(fresh(result_width_of(op)));
        }
    }
}

/// Result width for ops whose result is not always a single 32-bit word.
fn result_width_of(op: Op) -> u8 {
    use Op::*;
    match op {
        LAdd | LSub | LMul | LDiv | LRem | LAnd | LOr | LXor | LShl | LShr | LUshr | LNeg | I2L
        | F2L | D2L => 2,
        DAdd | DSub | DMul | DDiv | DRem | DNeg | I2D | L2D | F2D => 2,
        _ => 1,
    }
}

fn is_branch(insn: &Instruction) -> bool {
    matches!(
        insn,
        Instruction::Jump(..) | Instruction::TableSwitch { .. } | Instruction::LookupSwitch { .. }
    )
}

impl FrameAnalysis for LinearFrameAnalyzer {
    fn aliases_of(&self, at: InstrId, slot: u32) -> Vec<u32> {
        let Some(frame) = self.frames.get(&at) else {
            return alloc::vec![slot];
        };
        let Some(target) = frame.locals.get(slot as usize).copied().flatten() else {
            return alloc::vec![slot];
        };
        frame
            .locals
            .iter()
            .enumerate()
            .filter(|(_, origin)| **origin == Some(target))
            .map(|(i, _)| i as u32)
            .collect()
    }

    fn producer_of_input(&self, at: InstrId, input_index: u32) -> Option<InputProducer> {
        let frame = self.frames.get(&at)?;
        let cell = frame.stack.iter().rev().nth(input_index as usize)?;
        Some(InputProducer {
            producer: cell.immediate,
            output_index: cell.output_index,
            single_output: cell.single_output,
            width: cell.width,
        })
    }

    fn consumers_of_value_at(&self, producer: InstrId, output_index: u32) -> Vec<InstrId> {
        self.consumers
            .get(&(producer, output_index))
            .cloned()
            .unwrap_or_default()
    }

    fn initial_producer_of_input(&self, at: InstrId, input_index: u32) -> Option<Producer> {
        let frame = self.frames.get(&at)?;
        let cell = frame.stack.iter().rev().nth(input_index as usize)?;
        Some(cell.origin)
    }

    fn initial_producer_of_local(&self, at: InstrId, slot: u32) -> Producer {
        self.frames
            .get(&at)
            .and_then(|f| f.locals.get(slot as usize).copied().flatten())
            .unwrap_or(Producer::UninitializedLocal(slot))
    }

    fn stack_depth_at(&self, at: InstrId) -> Option<u32> {
        self.frames.get(&at).map(|f| f.stack.len() as u32)
    }
}
