//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the dispatcher. It
//! handles the two wrapping arithmetic operations and the three-way
//! compare that drives the condition-flags byte. The unit is pure: it
//! consumes two register values and the current flags and produces an
//! optional result plus the next flags value.

use crate::common::constants::{FL_EQUAL, FL_GREATER, FL_LESS, FL_MASK};

/// An ALU operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping 8-bit addition.
    Add,
    /// Wrapping 8-bit multiplication.
    Mul,
    /// Three-way compare; writes flags instead of a result.
    Cmp,
}

/// Output of one ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutput {
    /// Value to write back to the destination register, when the operation
    /// produces one. `Cmp` produces none.
    pub result: Option<u8>,
    /// The flags byte after the operation. `Add` and `Mul` pass the flags
    /// through untouched.
    pub flags: u8,
}

/// Arithmetic Logic Unit for the LS-8.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `a`     - First operand (destination register value for `Add`/`Mul`).
    /// * `b`     - Second operand.
    /// * `flags` - Current condition-flags byte.
    ///
    /// # Returns
    ///
    /// The operation's [`AluOutput`]. `Cmp` fully recomputes the Equal,
    /// Greater, and Less bits from `a` and `b` — each bit is independently
    /// set or cleared, never accumulated with prior flag state — and
    /// leaves the remaining bits of the flags byte as they were.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::alu::{Alu, AluOp};
    /// use ls8_core::common::constants::FL_LESS;
    ///
    /// let out = Alu::execute(AluOp::Add, 200, 100, 0);
    /// assert_eq!(out.result, Some(44)); // wraps mod 256
    ///
    /// let out = Alu::execute(AluOp::Cmp, 5, 10, 0);
    /// assert_eq!(out.result, None);
    /// assert_eq!(out.flags, FL_LESS);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8, flags: u8) -> AluOutput {
        match op {
            AluOp::Add => AluOutput {
                result: Some(a.wrapping_add(b)),
                flags,
            },
            AluOp::Mul => AluOutput {
                result: Some(a.wrapping_mul(b)),
                flags,
            },
            AluOp::Cmp => {
                let mut next = flags & !FL_MASK;
                if a < b {
                    next |= FL_LESS;
                }
                if a > b {
                    next |= FL_GREATER;
                }
                if a == b {
                    next |= FL_EQUAL;
                }
                AluOutput {
                    result: None,
                    flags: next,
                }
            }
        }
    }
}
