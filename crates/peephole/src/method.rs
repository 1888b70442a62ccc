//! The [`Method`]: a doubly-linked, identity-addressed instruction sequence.
//!
//! Instructions are never referred to by position — positions drift under
//! edits. Instead every instruction has a stable [`InstrId`] handle, backed
//! by a [`wasmi_collections::arena::Arena`]. The arena cannot deallocate
//! single entities (by design, see its own docs), so "removing" an
//! instruction tombstones its node and splices it out of the linked list;
//! its `InstrId` simply becomes dangling and must no longer be used.

use crate::instr::Instruction;
use alloc::vec::Vec;
use wasmi_collections::arena::{Arena, ArenaIndex};

/// A stable handle to an instruction within a [`Method`].
///
/// Identity, not position: two [`InstrId`]s compare equal iff they name the
/// same node, regardless of how many edits have happened since either was
/// obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstrId(u32);

impl ArenaIndex for InstrId {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn from_usize(value: usize) -> Self {
        let Ok(value) = u32::try_from(value) else {
            panic!("out of bounds `InstrId`: {value}")
        };
        Self(value)
    }
}

#[derive(Debug)]
struct Node {
    insn: Instruction,
    prev: Option<InstrId>,
    next: Option<InstrId>,
    /// `true` once this node has been spliced out of the instruction list.
    /// The arena keeps the slot (it cannot deallocate) but the method no
    /// longer considers it part of the sequence.
    removed: bool,
}

/// An exception-handler region, needed only by the frame/alias analyzer.
#[derive(Debug, Clone, Copy)]
pub struct TryCatchRegion {
    pub start: InstrId,
    pub end: InstrId,
    pub handler: InstrId,
}

/// An ordered, doubly-linked sequence of instructions with stable identity,
/// plus the metadata the analyzer and passes need: `max_locals`, `max_stack`,
/// the parameter count, whether the method is static, and its try/catch
/// regions.
#[derive(Debug)]
pub struct Method {
    nodes: Arena<InstrId, Node>,
    head: Option<InstrId>,
    tail: Option<InstrId>,
    max_locals: u32,
    max_stack: u32,
    /// Combined stack width of the declared parameters (`this` included for
    /// non-static methods), i.e. `parametersSize`.
    params_size: u32,
    is_static: bool,
    try_catch: Vec<TryCatchRegion>,
}

impl Method {
    /// Creates an empty method. Instructions are appended via [`Method::push_back`].
    pub fn new(max_locals: u32, max_stack: u32, params_size: u32, is_static: bool) -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            max_locals,
            max_stack,
            params_size,
            is_static,
            try_catch: Vec::new(),
        }
    }

    pub fn max_locals(&self) -> u32 {
        self.max_locals
    }

    pub fn set_max_stack(&mut self, max_stack: u32) {
        if max_stack > self.max_stack {
            self.max_stack = max_stack;
        }
    }

    pub fn max_stack(&self) -> u32 {
        self.max_stack
    }

    pub fn params_size(&self) -> u32 {
        self.params_size
    }

    pub fn is_static_method(&self) -> bool {
        self.is_static
    }

    pub fn try_catch_regions(&self) -> &[TryCatchRegion] {
        &self.try_catch
    }

    pub fn add_try_catch(&mut self, region: TryCatchRegion) {
        self.try_catch.push(region);
    }

    /// Appends a new instruction to the end of the method, returning its
    /// stable identity.
    pub fn push_back(&mut self, insn: Instruction) -> InstrId {
        let id = self.nodes.alloc(Node {
            insn,
            prev: self.tail,
            next: None,
            removed: false,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    fn node(&self, id: InstrId) -> &Node {
        self.nodes
            .get(id)
            .filter(|n| !n.removed)
            .unwrap_or_else(|| panic!("use of a removed or invalid instruction handle"))
    }

    fn node_mut(&mut self, id: InstrId) -> &mut Node {
        self.nodes
            .get_mut(id)
            .unwrap_or_else(|| panic!("invalid instruction handle"))
    }

    pub fn get(&self, id: InstrId) -> &Instruction {
        &self.node(id).insn
    }

    pub fn get_mut(&mut self, id: InstrId) -> &mut Instruction {
        &mut self.node_mut(id).insn
    }

    /// Replaces the instruction at `id` in place, preserving its identity
    /// and position.
    pub fn replace(&mut self, id: InstrId, insn: Instruction) {
        self.node_mut(id).insn = insn;
    }

    pub fn first(&self) -> Option<InstrId> {
        self.head
    }

    pub fn next(&self, id: InstrId) -> Option<InstrId> {
        self.node(id).next
    }

    pub fn prev(&self, id: InstrId) -> Option<InstrId> {
        self.node(id).prev
    }

    /// The next *executable* instruction or label after `id`, skipping
    /// nothing else (labels are themselves returned, matching
    /// `nextExecutableInstructionOrLabel`).
    pub fn next_executable_or_label(&self, id: InstrId) -> Option<InstrId> {
        self.next(id)
    }

    /// Inserts `insn` immediately before `id`, returning its identity.
    pub fn insert_before(&mut self, id: InstrId, insn: Instruction) -> InstrId {
        let prev = self.node(id).prev;
        let new_id = self.nodes.alloc(Node {
            insn,
            prev,
            next: Some(id),
            removed: false,
        });
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(new_id),
            None => self.head = Some(new_id),
        }
        self.node_mut(id).prev = Some(new_id);
        new_id
    }

    /// Inserts `insn` immediately after `id`, returning its identity.
    pub fn insert_after(&mut self, id: InstrId, insn: Instruction) -> InstrId {
        let next = self.node(id).next;
        let new_id = self.nodes.alloc(Node {
            insn,
            prev: Some(id),
            next,
            removed: false,
        });
        match next {
            Some(next) => self.node_mut(next).prev = Some(new_id),
            None => self.tail = Some(new_id),
        }
        self.node_mut(id).next = Some(new_id);
        new_id
    }

    /// Removes the instruction, splicing it out of the list. Its `InstrId`
    /// must not be dereferenced again.
    pub fn remove(&mut self, id: InstrId) {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.node_mut(id).removed = true;
    }

    /// Iterates all live instructions in order, from head to tail.
    pub fn iter(&self) -> MethodIter<'_> {
        MethodIter {
            method: self,
            current: self.head,
        }
    }

    /// Total number of live instructions. `O(n)`; mainly for size-gating and tests.
    pub fn instruction_count(&self) -> usize {
        self.iter().count()
    }
}

/// An in-order iterator over a [`Method`]'s live instructions.
pub struct MethodIter<'a> {
    method: &'a Method,
    current: Option<InstrId>,
}

impl<'a> Iterator for MethodIter<'a> {
    type Item = (InstrId, &'a Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.method.next(id);
        Some((id, self.method.get(id)))
    }
}
