//! Stateful domain services.

pub mod regeneration_gate;

pub use regeneration_gate::{GateDecision, GateError, GatePhase, GateState, RegenerationGate};
