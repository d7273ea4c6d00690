//! Input ingestion, result validation and binary persistence.
//!
//! The input format is textual: an element count followed by that many
//! whitespace-separated integers. The output record is binary: a 4-byte
//! little-endian count followed by each element as a 4-byte little-endian
//! integer.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;

use crate::types::{Element, Result, SortError};

/// Read an element count `n >= 1` and then `n` integers from a text file.
///
/// Only the root rank of the driver calls this; the count is broadcast to
/// the other ranks before any data is distributed.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    let mut tokens = contents.split_whitespace();

    let n: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .filter(|&n| n >= 1)
        .ok_or_else(|| SortError::Parse {
            token: "element count".to_string(),
            pos: 0,
        })?;

    let mut elements = Vec::with_capacity(n);
    for i in 0..n {
        let value = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| SortError::Parse {
                token: format!("element {i}"),
                pos: i + 1,
            })?;
        elements.push(value);
    }

    Ok(elements)
}

/// True if `elements` is non-decreasing.
pub fn sorted_ascending(elements: &[Element]) -> bool {
    elements.iter().tuple_windows().all(|(a, b)| a <= b)
}

/// Verify the final array is sorted, then write the binary result record.
///
/// A failed sortedness check is reported as [`SortError::NotSorted`] and no
/// file is produced; it signals a defect in the sort itself rather than an
/// environment problem.
pub fn check_and_write<P: AsRef<Path>>(path: P, elements: &[Element]) -> Result<()> {
    if !sorted_ascending(elements) {
        return Err(SortError::NotSorted);
    }
    write_output(path, elements)
}

/// Write the binary result record: a `u32` count then the elements, all
/// little endian.
pub fn write_output<P: AsRef<Path>>(path: P, elements: &[Element]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(&(elements.len() as u32).to_le_bytes())?;
    for element in elements {
        file.write_all(&element.to_le_bytes())?;
    }
    file.flush()?;
    Ok(())
}
