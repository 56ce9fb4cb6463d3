//! LS-8 virtual machine library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit teaching ISA with the following:
//! 1. **Machine state:** 256 bytes of flat memory, eight byte registers, program counter, flags.
//! 2. **ALU:** Wrapping add/multiply and a three-way compare that drives the flags byte.
//! 3. **ISA:** Opcode encodings, decoding, and mnemonics for the thirteen LS-8 instructions.
//! 4. **Dispatcher:** The fetch-decode-execute loop, stack discipline, and fault reporting.
//! 5. **Simulation:** The `.ls8` text image loader.

/// Common types and constants (memory geometry, flag bits, errors).
pub mod common;
/// CPU core (machine state, registers, memory, ALU, execution loop).
pub mod core;
/// Instruction set (opcode encodings, decoding, mnemonics).
pub mod isa;
/// Program image loading.
pub mod sim;

/// Main CPU type; owns memory, registers, flags, and the stack pointer.
pub use crate::core::cpu::Cpu;
/// Terminal status of a successful run; reports the halt address and retired count.
pub use crate::core::cpu::Halt;
/// Fatal runtime condition; ends a run immediately.
pub use crate::common::error::Fault;
/// Program image failure; prevents a run from starting.
pub use crate::common::error::LoadError;
