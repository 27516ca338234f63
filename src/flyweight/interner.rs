// Flyweight: index-backed string table
//
// Every distinct substring is stored exactly once. Callers hold `usize` indices
// into the table instead of owning copies of the text.

use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{Result, WorkshopError};

/// Append-only table of unique strings, in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct StringTable {
    strings: Vec<String>,
    lookup: FxHashMap<String, usize>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `value`, appending it first if it is not present yet.
    pub fn intern(&mut self, value: &str) -> usize {
        if let Some(&index) = self.lookup.get(value) {
            return index;
        }
        let index = self.strings.len();
        self.strings.push(value.to_owned());
        self.lookup.insert(value.to_owned(), index);
        debug!("interned {value:?} at index {index}");
        index
    }

    /// Splits `value` on `delimiter` and interns every part, preserving order.
    pub fn decompose(&mut self, value: &str, delimiter: char) -> Vec<usize> {
        value
            .split(delimiter)
            .map(|part| self.intern(part))
            .collect()
    }

    /// Joins the parts referenced by `indices` back together with `delimiter`.
    pub fn reconstruct(&self, indices: &[usize], delimiter: char) -> Result<String> {
        let parts: Vec<&str> = indices
            .iter()
            .map(|&index| self.get(index))
            .collect::<Result<_>>()?;
        Ok(parts.iter().join(&delimiter.to_string()))
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.strings
            .get(index)
            .map(String::as_str)
            .ok_or(WorkshopError::IndexOutOfRange {
                index,
                len: self.strings.len(),
            })
    }

    pub fn entries(&self) -> &[String] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Heap bytes in use by the table: string headers plus string contents,
    /// counted by length. The lookup map is excluded.
    pub fn heap_bytes(&self) -> usize {
        self.strings.len() * std::mem::size_of::<String>()
            + self.strings.iter().map(String::len).sum::<usize>()
    }
}
