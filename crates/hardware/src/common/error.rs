//! Fault and load error definitions.
//!
//! This module defines the error handling surface of the virtual machine. It provides:
//! 1. **Faults:** Fatal runtime conditions that end a run immediately and deterministically.
//! 2. **Load errors:** Program image failures, recovered at the loader boundary so the
//!    dispatcher never starts over a partially initialized memory.

use std::io;

use thiserror::Error;

/// Fatal runtime condition.
///
/// Every fault ends the run immediately with no further state mutation and
/// no retry. The reference machine relied on unchecked indexing for several
/// of these cases; here each one is an explicit, checked error.
#[derive(Debug, Error)]
pub enum Fault {
    /// The byte at the program counter does not decode to any LS-8 opcode.
    ///
    /// Carries the faulting address and the opcode byte for diagnostics.
    #[error("unrecognized instruction {opcode:#010b} at address {addr}")]
    UnrecognizedOpcode {
        /// Address of the undecodable byte.
        addr: usize,
        /// The byte that failed to decode.
        opcode: u8,
    },

    /// A memory access fell outside the 256-byte address space.
    #[error("memory access out of bounds at address {0}")]
    MemoryOutOfBounds(usize),

    /// A register index fell outside 0-7.
    #[error("register index {0} out of range")]
    RegisterOutOfBounds(u8),

    /// A push would move the stack pointer into the loaded program bytes.
    #[error("stack overflow: stack pointer {sp} would enter the program region ending at {limit}")]
    StackOverflow {
        /// Stack pointer value the push attempted to reach.
        sp: usize,
        /// First address above the loaded program image.
        limit: usize,
    },

    /// Writing PRN output to the sink failed.
    #[error("output write failed: {0}")]
    Output(#[from] io::Error),
}

/// Program image failure.
///
/// Returned by the loader; a failed load must prevent the dispatcher from
/// starting. (The reference implementation printed a message and executed
/// over uninitialized memory anyway.)
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read program image '{path}': {source}")]
    Io {
        /// Path of the image that failed to open or read.
        path: String,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A non-comment, non-blank line is not an 8-character binary string.
    #[error("line {line}: expected an 8-bit binary string, found '{text}'")]
    Malformed {
        /// 1-based line number within the image.
        line: usize,
        /// The offending line content, comment stripped and trimmed.
        text: String,
    },

    /// The image holds more bytes than the machine's address space.
    #[error("program image is {len} bytes but memory holds {limit}")]
    TooLarge {
        /// Number of bytes the image decodes to.
        len: usize,
        /// Capacity of the address space.
        limit: usize,
    },
}
