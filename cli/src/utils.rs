use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Reads the PEM buffer to operate on, from a file when a path was given
/// and from stdin otherwise.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}
