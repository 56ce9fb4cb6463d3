//! Program image loader.
//!
//! This module reads `.ls8` text images into byte vectors for [`crate::Cpu::load`].
//! It performs:
//! 1. **Parsing:** One 8-character binary string per line; `#` comments (whole-line
//!    or inline after the digits) and blank lines are skipped.
//! 2. **Validation:** Malformed lines and unreadable files are reported as
//!    [`LoadError`]s instead of crashing or, worse, silently executing garbage.
//!
//! Every non-comment, non-blank line becomes one byte, written to sequential
//! addresses starting at 0, in file order.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;

/// Parses `.ls8` image text into a program byte vector.
///
/// # Arguments
///
/// * `source` - The full text of the image.
///
/// # Returns
///
/// The program bytes, one per instruction line, in file order.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] (with a 1-based line number) for any
/// line that is not blank, a comment, or exactly eight binary digits.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_image;
///
/// let image = "# print8.ls8\n10000010 # LDI R0,8\n00000000\n00001000\n";
/// assert_eq!(parse_image(image).unwrap(), vec![0b1000_0010, 0, 8]);
/// ```
pub fn parse_image(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        // An inline comment may follow the digits; the reference parser
        // stopped at the first non-digit, so canonical images rely on this.
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        if text.len() != 8 || !text.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(LoadError::Malformed {
                line: idx + 1,
                text: text.to_string(),
            });
        }

        // Eight binary digits always fit a byte.
        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::Malformed {
            line: idx + 1,
            text: text.to_string(),
        })?;
        bytes.push(byte);
    }

    debug!(bytes = bytes.len(), "image parsed");
    Ok(bytes)
}

/// Reads and parses a `.ls8` image file.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read, or any
/// [`parse_image`] error for its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_image(&source)
}
