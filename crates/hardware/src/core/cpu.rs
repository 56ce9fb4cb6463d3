//! The CPU: machine state and the fetch-decode-execute loop.
//!
//! This module implements the instruction dispatcher. It performs the following:
//! 1. **State ownership:** One explicit `Cpu` value owns memory, registers, flags,
//!    program counter, and the working stack pointer; no hidden global state.
//! 2. **Dispatch:** Each handler returns a [`Control`] signal consumed by the loop
//!    driver; faults travel as [`Fault`] errors and end the run deterministically.
//! 3. **Stack discipline:** Push/call descend from [`STACK_INIT`]; descending into
//!    the loaded program bytes is a fault, not silent corruption.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::common::constants::{FL_EQUAL, FL_GREATER, FL_LESS, SP_REG, STACK_INIT};
use crate::common::error::{Fault, LoadError};
use crate::core::alu::{Alu, AluOp};
use crate::core::gpr::RegisterFile;
use crate::core::memory::Memory;
use crate::isa::Opcode;

/// Control-flow signal returned by each instruction handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Advance the program counter past the opcode byte.
    Advance,
    /// Redirect the program counter to the given address.
    Jump(usize),
    /// Stop the run loop; terminal state.
    Halt,
}

/// Terminal status of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Halt {
    /// Address of the HLT opcode that ended the run.
    pub pc: usize,
    /// Number of instructions retired, HLT included.
    pub instructions: u64,
}

/// The LS-8 CPU.
///
/// All machine state for one run. Created zeroed, populated once by
/// [`Cpu::load`], then mutated exclusively by the dispatcher until HLT or a
/// fault. Nothing survives across runs.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Flat 256-byte memory shared by program and stack.
    pub mem: Memory,
    /// The eight general-purpose registers.
    pub regs: RegisterFile,
    /// Condition-flags byte; low three bits written by CMP.
    pub flags: u8,
    /// Address of the next instruction byte.
    pub pc: usize,
    /// Working stack pointer.
    ///
    /// Deliberately decoupled from the R7 mirror: R7 is written once at run
    /// start and never updated afterwards, matching the reference machine.
    /// Programs reading R7 observe a stale, unchanging value.
    pub sp: usize,
    /// Number of bytes the loaded program occupies from address 0.
    pub program_len: usize,
    /// Retired-instruction counter for the run summary.
    pub instructions: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Creates a CPU with zeroed memory and registers, pc 0, flags clear,
    /// and the stack pointer at [`STACK_INIT`].
    pub const fn new() -> Self {
        Self {
            mem: Memory::new(),
            regs: RegisterFile::new(),
            flags: 0,
            pc: 0,
            sp: STACK_INIT,
            program_len: 0,
            instructions: 0,
        }
    }

    /// Resets all state to its initial values, discarding any loaded
    /// program.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// Must succeed before [`Cpu::run`] is called; a failed load leaves no
    /// way to start the dispatcher over partial state.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when the image exceeds the address
    /// space.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.mem.load(image)?;
        self.program_len = image.len();
        debug!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Runs the dispatcher loop to completion.
    ///
    /// Blocks until HLT or a fault. PRN output goes to `out`, one decimal
    /// line per instruction, in execution order.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] that ended the run: an unrecognized opcode
    /// (with its address and byte), an out-of-bounds memory or register
    /// access, a stack overflow into the program region, or an output
    /// write failure.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Halt, Fault> {
        self.sp = STACK_INIT;
        // R7 mirrors the initial stack pointer by convention. It is not
        // kept in sync with `self.sp` after this point.
        self.regs.write(SP_REG, STACK_INIT as u8)?;

        loop {
            if matches!(self.step(out)?, Control::Halt) {
                info!(pc = self.pc, instructions = self.instructions, "halted");
                return Ok(Halt {
                    pc: self.pc,
                    instructions: self.instructions,
                });
            }
        }
    }

    /// Executes a single instruction cycle: fetch, decode, execute, and
    /// apply the resulting [`Control`] signal to the program counter.
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] on any fatal condition; no state is mutated
    /// beyond the point of failure.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<Control, Fault> {
        let addr = self.pc;
        let byte = self.mem.read(addr)?;
        let op = Opcode::decode(byte).ok_or(Fault::UnrecognizedOpcode { addr, opcode: byte })?;
        trace!(pc = addr, op = %op, "execute");

        let ctrl = self.execute(op, out)?;
        match ctrl {
            Control::Advance => self.pc += 1,
            Control::Jump(target) => self.pc = target,
            Control::Halt => {}
        }
        self.instructions += 1;
        Ok(ctrl)
    }

    fn execute<W: Write>(&mut self, op: Opcode, out: &mut W) -> Result<Control, Fault> {
        Ok(match op {
            Opcode::Ldi => {
                let reg = self.read_operand()?;
                let val = self.read_operand()?;
                self.regs.write(reg, val)?;
                Control::Advance
            }
            Opcode::Prn => {
                let reg = self.read_operand()?;
                let val = self.regs.read(reg)?;
                writeln!(out, "{val}")?;
                Control::Advance
            }
            Opcode::Add => self.binary_alu(AluOp::Add)?,
            Opcode::Mul => self.binary_alu(AluOp::Mul)?,
            Opcode::Cmp => self.binary_alu(AluOp::Cmp)?,
            Opcode::Push => {
                let reg = self.read_operand()?;
                let val = self.regs.read(reg)?;
                self.push(val)?;
                Control::Advance
            }
            Opcode::Pop => {
                let reg = self.read_operand()?;
                let val = self.pop()?;
                self.regs.write(reg, val)?;
                Control::Advance
            }
            Opcode::Call => {
                let reg = self.read_operand()?;
                let target = self.regs.read(reg)? as usize;
                // Return address: the instruction after the operand byte,
                // truncated to one byte like every other address on this
                // machine.
                self.pc += 1;
                self.push(self.pc as u8)?;
                Control::Jump(target)
            }
            Opcode::Ret => {
                let addr = self.pop()?;
                Control::Jump(addr as usize)
            }
            Opcode::Jump => Control::Jump(self.jump_target()?),
            Opcode::Jeq => {
                let target = self.jump_target()?;
                // Literal comparison against the Equal-only pattern, not an
                // Equal-bit test; see the JNE note below.
                if self.flags == FL_EQUAL {
                    Control::Jump(target)
                } else {
                    Control::Advance
                }
            }
            Opcode::Jne => {
                let target = self.jump_target()?;
                // The reference machine checks the flags byte against the
                // three literal values 0, Greater, and Less rather than
                // testing the Equal bit. Any other flags value falls
                // through. Preserved as observed behavior.
                if matches!(self.flags, 0 | FL_GREATER | FL_LESS) {
                    Control::Jump(target)
                } else {
                    Control::Advance
                }
            }
            Opcode::Hlt => Control::Halt,
        })
    }

    /// Reads the next operand byte. Advancing the program counter is an
    /// intrinsic side effect of the read: the counter moves first, then
    /// the byte at the new counter is fetched, so operand order matters.
    fn read_operand(&mut self) -> Result<u8, Fault> {
        self.pc += 1;
        self.mem.read(self.pc)
    }

    fn binary_alu(&mut self, op: AluOp) -> Result<Control, Fault> {
        let reg_a = self.read_operand()?;
        let reg_b = self.read_operand()?;
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;

        let output = Alu::execute(op, a, b, self.flags);
        self.flags = output.flags;
        if let Some(result) = output.result {
            self.regs.write(reg_a, result)?;
        }
        Ok(Control::Advance)
    }

    /// Decrements the stack pointer and writes `val` at the new top.
    ///
    /// The stack must stay strictly above the loaded program bytes.
    fn push(&mut self, val: u8) -> Result<(), Fault> {
        let next = self
            .sp
            .checked_sub(1)
            .filter(|&sp| sp >= self.program_len)
            .ok_or(Fault::StackOverflow {
                sp: self.sp.saturating_sub(1),
                limit: self.program_len,
            })?;
        self.sp = next;
        self.mem.write(self.sp, val)
    }

    /// Reads the byte at the top of the stack and increments the stack
    /// pointer. Ascending past the address space faults at the read.
    fn pop(&mut self) -> Result<u8, Fault> {
        let val = self.mem.read(self.sp)?;
        self.sp += 1;
        Ok(val)
    }

    fn jump_target(&mut self) -> Result<usize, Fault> {
        let reg = self.read_operand()?;
        Ok(self.regs.read(reg)? as usize)
    }
}
