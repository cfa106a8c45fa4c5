// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-capacity scratch buffer for paths and database contents

use std::io::{self, Read};

/// Capacity of the scratch buffer, also the largest database file accepted
pub const CAPACITY: usize = 4096;

/// Errors reported by the scratch buffer
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Data does not fit into the buffer
    #[error("Scratch buffer capacity of {CAPACITY} bytes exceeded")]
    CapacityExceeded,
    /// The reader ran out of data before the requested size was read
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Input/output error while reading
    #[error("I/O error")]
    IO(#[from] io::Error),
}

/// Bounded byte buffer with a length cursor
///
/// The buffer never grows. Every operation that would write past
/// [`CAPACITY`] fails without touching the stored data beyond the cursor.
pub struct ScratchBuffer {
    data: [u8; CAPACITY],
    len: usize,
}

impl ScratchBuffer {
    /// Return an empty buffer
    pub const fn new() -> Self {
        Self {
            data: [0; CAPACITY],
            len: 0,
        }
    }

    /// Reset the cursor, the old contents become unreachable
    pub const fn clear(&mut self) {
        self.len = 0;
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes written since the last `clear()`
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Append a single byte
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.extend_from_slice(&[byte])
    }

    /// Append a slice, failing if it does not fit as a whole
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self
            .len
            .checked_add(bytes.len())
            .filter(|end| *end <= CAPACITY)
            .ok_or(Error::CapacityExceeded)?;
        self.data[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Replace the contents with exactly `size` bytes from `reader`
    ///
    /// Partial reads are accumulated. A read returning zero bytes before
    /// `size` bytes have arrived is reported as `UnexpectedEof`. On any
    /// error the buffer is left empty.
    pub fn fill_from(&mut self, reader: &mut impl Read, size: usize) -> Result<(), Error> {
        self.clear();
        if size > CAPACITY {
            return Err(Error::CapacityExceeded);
        }

        let mut filled = 0;
        while filled < size {
            match reader.read(&mut self.data[filled..size]) {
                Ok(0) => return Err(Error::UnexpectedEof),
                Ok(count) => filled += count,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }

        self.len = size;
        Ok(())
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}
