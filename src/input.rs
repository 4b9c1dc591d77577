//! Thin input layer: reading template and worksheet text.
//!
//! File paths are read directly; the conventional `-` path reads stdin so
//! the binary can sit at the end of a pipeline.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a document from a file path, or from stdin when the path is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the input is not valid
/// UTF-8.
pub fn read_document(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
