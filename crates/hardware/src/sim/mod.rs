//! Simulation support: program image loading.

/// `.ls8` text image parsing and file reading.
pub mod loader;
