//! The tagged-variant `Producer` of a dataflow value (§3, §9 "Deep
//! polymorphism of producer kinds").

use crate::method::InstrId;

/// Where a stack or local-slot value ultimately originates.
///
/// Matched explicitly at every use site rather than dispatched through a
/// trait object, per the design notes: there are exactly four kinds and
/// they are known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Producer {
    /// An ordinary instruction in the method body.
    Instr(InstrId),
    /// The initial value of a parameter slot on method entry.
    Parameter(u32),
    /// A local slot's default value, before any store reaches it.
    UninitializedLocal(u32),
    /// The exception value landed on the stack at a handler entry.
    Exception,
}

impl Producer {
    /// Exception producers and the uninitialized-local sentinel are always
    /// treated as conservatively multi-consumer, regardless of how many
    /// consumers are actually observed.
    pub fn is_conservatively_multi_consumer(self) -> bool {
        matches!(self, Producer::Exception | Producer::UninitializedLocal(_))
    }

    pub fn as_instr(self) -> Option<InstrId> {
        match self {
            Producer::Instr(id) => Some(id),
            _ => None,
        }
    }
}
