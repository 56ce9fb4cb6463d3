//! Instruction set: opcode encodings, decoding, and mnemonics.
//!
//! This module defines the thirteen LS-8 instructions. It provides:
//! 1. **Encodings:** The raw opcode byte for each instruction ([`opcodes`]).
//! 2. **Decoding:** Mapping a fetched byte to an [`Opcode`], or `None` for
//!    an unrecognized instruction.
//! 3. **Mnemonics:** Assembly names for diagnostics and trace logging.

use std::fmt;

/// Raw opcode byte constants.
pub mod opcodes;

/// A decoded LS-8 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Load an immediate value into a register.
    Ldi,
    /// Print a register value as a decimal line.
    Prn,
    /// Add two registers into the first (wrapping).
    Add,
    /// Multiply two registers into the first (wrapping).
    Mul,
    /// Compare two registers; sets the flags byte.
    Cmp,
    /// Push a register value onto the stack.
    Push,
    /// Pop the top of the stack into a register.
    Pop,
    /// Push the return address and jump to a register's value.
    Call,
    /// Pop the return address into the program counter.
    Ret,
    /// Jump to a register's value unconditionally.
    Jump,
    /// Jump to a register's value when the flags byte is exactly Equal.
    Jeq,
    /// Jump to a register's value when the flags byte is 0, Greater, or Less.
    Jne,
    /// Halt the machine.
    Hlt,
}

impl Opcode {
    /// Decodes a fetched byte.
    ///
    /// # Returns
    ///
    /// The matching [`Opcode`], or `None` when the byte is not an LS-8
    /// instruction (an unrecognized-instruction fault at dispatch).
    pub const fn decode(byte: u8) -> Option<Self> {
        match byte {
            opcodes::LDI => Some(Self::Ldi),
            opcodes::PRN => Some(Self::Prn),
            opcodes::ADD => Some(Self::Add),
            opcodes::MUL => Some(Self::Mul),
            opcodes::CMP => Some(Self::Cmp),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            opcodes::CALL => Some(Self::Call),
            opcodes::RET => Some(Self::Ret),
            opcodes::JMP => Some(Self::Jump),
            opcodes::JEQ => Some(Self::Jeq),
            opcodes::JNE => Some(Self::Jne),
            opcodes::HLT => Some(Self::Hlt),
            _ => None,
        }
    }

    /// Number of operand bytes following the opcode.
    ///
    /// Matches bits 7-6 of the encoding.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Ldi | Self::Add | Self::Mul | Self::Cmp => 2,
            Self::Prn | Self::Push | Self::Pop | Self::Call | Self::Jump | Self::Jeq | Self::Jne => {
                1
            }
            Self::Ret | Self::Hlt => 0,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jump => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Hlt => "HLT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
