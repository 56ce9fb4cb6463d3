//! CPU core: machine state and the execution loop.

/// Arithmetic/compare logic unit.
pub mod alu;
/// The CPU proper: state, dispatcher, and run loop.
pub mod cpu;
/// General-purpose register file.
pub mod gpr;
/// Flat byte-addressable memory.
pub mod memory;
