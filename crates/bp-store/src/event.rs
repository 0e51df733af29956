use crate::state::Operation;

/// Lifecycle phase of an operation transition.
///
/// Within one operation invocation, `Pending` is always observed before the
/// terminal phase. No ordering holds across different invocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

/// A state transition published on the store's broadcast channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreEvent {
    pub operation: Operation,
    pub phase: Phase,
}

impl std::fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = match self.phase {
            Phase::Pending => "pending",
            Phase::Fulfilled => "fulfilled",
            Phase::Rejected => "rejected",
        };
        write!(f, "{}/{}", self.operation, phase)
    }
}
