//! Common types and constants shared across the virtual machine.

/// Machine geometry and flag-bit constants.
pub mod constants;
/// Fatal fault and image load error types.
pub mod error;
