//! LS-8 general-purpose register file.
//!
//! This module implements the general-purpose register file. It performs the following:
//! 1. **Storage:** Maintains eight independent byte registers (`R0`-`R7`).
//! 2. **Index checking:** Rejects out-of-range register operands as faults.
//! 3. **Debugging:** Provides a dump of the complete register state.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::Fault;

/// General-purpose register file.
///
/// Eight byte-valued registers, indexed 0-7. `R7` conventionally mirrors
/// the initial stack pointer; see [`crate::common::constants::SP_REG`].
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7), usually a raw operand byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfBounds`] when `idx` is not a valid
    /// register.
    pub fn read(&self, idx: u8) -> Result<u8, Fault> {
        self.regs
            .get(idx as usize)
            .copied()
            .ok_or(Fault::RegisterOutOfBounds(idx))
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7), usually a raw operand byte.
    /// * `val` - The byte value to write.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfBounds`] when `idx` is not a valid
    /// register.
    pub fn write(&mut self, idx: u8, val: u8) -> Result<(), Fault> {
        match self.regs.get_mut(idx as usize) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(Fault::RegisterOutOfBounds(idx)),
        }
    }

    /// Dumps the contents of all registers to stderr for diagnostics.
    ///
    /// Stdout is reserved for PRN output, so fault-path dumps go to stderr.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            eprintln!("R{i}={val:#04x} ({val})");
        }
    }
}
