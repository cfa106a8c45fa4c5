// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding key and function sequences from terminfo database files
//!
//! Only the legacy format with 16-bit numbers is understood. Every offset
//! read from the file is checked against the loaded length, a file that
//! points outside of itself is rejected.

use crate::capability::{Capabilities, FUNC_COUNT, Func, KEY_COUNT, Key, Source};

/// Magic number of the legacy terminfo format
pub const MAGIC: i16 = 0o432;

/// Size of the header in bytes
pub const HEADER_LENGTH: usize = 12;

const ABSENT_ENTRY: i16 = -1;
const CANCELED_ENTRY: i16 = -2;

/// Errors reported when decoding a malformed terminfo database
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The file ends before a section it declares
    #[error("Truncated terminfo database")]
    Truncated,
    /// The file does not start with the expected magic number
    #[error("Bad magic number")]
    BadMagic,
    /// A header field has a negative value
    #[error("Negative size or count in header")]
    NegativeField,
    /// A string offset points outside of the string table
    #[error("String offset {0} is out of range")]
    OffsetOutOfRange(i16),
    /// A string is missing its terminating NUL
    #[error("Unterminated string")]
    UnterminatedString,
}

fn read_le16(buffer: &[u8], position: usize) -> Option<i16> {
    let bytes = buffer.get(position..position + 2)?;
    Some(i16::from_le_bytes([bytes[0], bytes[1]]))
}

fn count(value: i16) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::NegativeField)
}

/// Header of a terminfo database
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub names_size: usize,
    pub bool_count: usize,
    pub num_count: usize,
    pub str_count: usize,
    pub str_table_size: usize,
}

impl Header {
    /// Read and validate the header at the start of `buffer`
    pub fn parse(buffer: &[u8]) -> Result<Self, Error> {
        let mut fields = [0i16; HEADER_LENGTH / 2];
        for (index, field) in fields.iter_mut().enumerate() {
            *field = read_le16(buffer, index * 2).ok_or(Error::Truncated)?;
        }

        let [magic, names_size, bool_count, num_count, str_count, str_table_size] = fields;
        if magic != MAGIC {
            return Err(Error::BadMagic);
        }

        Ok(Self {
            names_size: count(names_size)?,
            bool_count: count(bool_count)?,
            num_count: count(num_count)?,
            str_count: count(str_count)?,
            str_table_size: count(str_table_size)?,
        })
    }

    /// Compute section offsets
    pub const fn layout(&self) -> Layout {
        let booleans = HEADER_LENGTH + self.names_size;
        // Writers insert a byte to start the numbers on an even offset.
        let padding = (self.names_size + self.bool_count) & 1;
        let numbers = booleans + self.bool_count + padding;
        let string_offsets = numbers + 2 * self.num_count;
        let string_table = string_offsets + 2 * self.str_count;
        Layout {
            booleans,
            numbers,
            string_offsets,
            string_table,
            end: string_table + self.str_table_size,
        }
    }
}

/// Offsets of the sections of a terminfo database
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub booleans: usize,
    pub numbers: usize,
    /// Start of the 16-bit offsets into the string table
    pub string_offsets: usize,
    pub string_table: usize,
    /// End of the string table
    pub end: usize,
}

/// Look up string capability number `capability`
///
/// Absent and canceled capabilities, and capabilities beyond the end of
/// the offsets section, are returned as empty strings.
fn get_string<'a>(offsets: &[u8], table: &'a [u8], capability: usize) -> Result<&'a [u8], Error> {
    let Some(offset) = read_le16(offsets, capability * 2) else {
        return Ok(b"".as_slice());
    };
    if offset == ABSENT_ENTRY || offset == CANCELED_ENTRY {
        return Ok(b"".as_slice());
    }

    let Some(string_slice) = usize::try_from(offset)
        .ok()
        .and_then(|start| table.get(start..))
        .filter(|slice| !slice.is_empty())
    else {
        return Err(Error::OffsetOutOfRange(offset));
    };
    match string_slice.iter().position(|c| *c == b'\0') {
        Some(string_length) => Ok(&string_slice[..string_length]),
        None => Err(Error::UnterminatedString),
    }
}

/// Decode key and function sequences from a terminfo database
///
/// The returned sequences borrow `buffer` and exclude the terminating NUL.
/// Data after the string table, such as extended capabilities, is ignored.
pub fn decode(buffer: &[u8]) -> Result<Capabilities<'_>, Error> {
    let layout = Header::parse(buffer)?.layout();
    let Some(offsets) = buffer.get(layout.string_offsets..layout.string_table) else {
        return Err(Error::Truncated);
    };
    let Some(table) = buffer.get(layout.string_table..layout.end) else {
        return Err(Error::Truncated);
    };

    let mut keys = [b"".as_slice(); KEY_COUNT];
    for (slot, key) in keys.iter_mut().zip(Key::ALL) {
        *slot = get_string(offsets, table, key.capability())?;
    }

    let mut funcs = [b"".as_slice(); FUNC_COUNT];
    for (slot, func) in funcs.iter_mut().zip(Func::ALL) {
        *slot = get_string(offsets, table, func.capability())?;
    }

    Ok(Capabilities::new(keys, funcs, Source::Database))
}
