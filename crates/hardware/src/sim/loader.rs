//! Binary Loader.
//!
//! This module provides utilities for placing programs in memory. It performs:
//! 1. **Binary loading:** Reads flat binaries from disk into a byte buffer.
//! 2. **Placement:** Copies an image to the configured memory base.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::SimError;
use crate::core::Cpu;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file, or [`SimError::Io`] if it cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads a flat binary and places it at the start of memory.
///
/// # Arguments
///
/// * `cpu` - CPU whose memory receives the image.
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The image size in bytes.
pub fn load_program(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<usize, SimError> {
    let image = load_binary(path)?;
    let base = cpu.memory.base();
    cpu.memory.load(base, &image)?;
    info!(
        bytes = image.len(),
        base = format_args!("{base:#010x}"),
        "program loaded"
    );
    Ok(image.len())
}
