//! LS-8 opcode byte encodings.
//!
//! The encoding follows the `AABCDDDD` convention: bits 7-6 give the
//! operand count, bit 5 marks ALU operations, bit 4 marks instructions
//! that set the program counter, and bits 3-0 select the instruction.

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Wrapping add: `ADD regA, regB`.
pub const ADD: u8 = 0b1010_0000;

/// Wrapping multiply: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_0010;

/// Three-way compare into the flags byte: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0111;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop top of stack into register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Call subroutine at register's value: `CALL reg`.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine: `RET`.
pub const RET: u8 = 0b0001_0001;

/// Unconditional jump to register's value: `JMP reg`.
pub const JMP: u8 = 0b0101_0100;

/// Jump when the flags byte is exactly Equal: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0101;

/// Jump when the flags byte is 0, Greater, or Less: `JNE reg`.
pub const JNE: u8 = 0b0101_0110;

/// Halt the machine: `HLT`.
pub const HLT: u8 = 0b0000_0001;
