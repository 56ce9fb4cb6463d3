//! Global machine constants.
//!
//! This module defines the fixed geometry of the LS-8 machine. It includes:
//! 1. **Memory constants:** Address space size and the initial stack pointer.
//! 2. **Register constants:** Register file size and the stack-pointer mirror register.
//! 3. **Flag constants:** Bit assignments within the condition-flags byte.

/// Size of the flat address space in bytes. Program code occupies the low
/// addresses; the stack grows downward from the high addresses.
pub const MEM_SIZE: usize = 256;

/// Number of general-purpose byte registers.
pub const NUM_REGISTERS: usize = 8;

/// Initial value of the working stack pointer. The first push writes one
/// byte below this address.
pub const STACK_INIT: usize = 244;

/// Register that mirrors the stack pointer by convention.
///
/// The mirror is written once when a run starts and is **not** updated by
/// push/pop/call/return; the live stack pointer is separate working state.
/// Programs reading R7 to observe stack depth will see a stale value.
pub const SP_REG: u8 = 7;

/// Flags bit set by CMP when the operands are equal.
pub const FL_EQUAL: u8 = 0b0000_0001;

/// Flags bit set by CMP when the first operand is greater.
pub const FL_GREATER: u8 = 0b0000_0010;

/// Flags bit set by CMP when the first operand is less.
pub const FL_LESS: u8 = 0b0000_0100;

/// Mask covering the three flag bits CMP recomputes.
pub const FL_MASK: u8 = FL_EQUAL | FL_GREATER | FL_LESS;
