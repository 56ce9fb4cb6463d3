//! Flat byte-addressable memory.
//!
//! This module implements the single 256-byte address space shared by
//! program code (low addresses) and the runtime stack (high addresses,
//! growing downward). Every access is bounds-checked: an address outside
//! the space is a [`Fault`], never wrapped or clamped.

use crate::common::constants::MEM_SIZE;
use crate::common::error::{Fault, LoadError};

/// The machine's flat memory.
///
/// Sole storage for both instructions and stack data. Initialized to
/// numeric zero.
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: [u8; MEM_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            bytes: [0; MEM_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] when `addr` is outside the
    /// address space.
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds(addr))
    }

    /// Writes `val` to the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] when `addr` is outside the
    /// address space.
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        match self.bytes.get_mut(addr) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(Fault::MemoryOutOfBounds(addr)),
        }
    }

    /// Writes a program image starting at address 0, in image order.
    ///
    /// Bytes beyond the image keep their current value.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when the image exceeds the address
    /// space; memory is left untouched in that case.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEM_SIZE {
            return Err(LoadError::TooLarge {
                len: image.len(),
                limit: MEM_SIZE,
            });
        }
        self.bytes[..image.len()].copy_from_slice(image);
        Ok(())
    }
}
