// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Search for terminfo database file for the terminal and load it

use std::{io, path::Path, slice::Split};

use crate::{
    buffer::{self, CAPACITY, ScratchBuffer},
    env::Environment,
    fs::FileSystem,
};

/// Directory used for empty `TERMINFO_DIRS` elements and as the last resort
pub const DEFAULT_DIRECTORY: &[u8] = b"/usr/share/terminfo";

/// Errors reported when looking for a terminfo database file
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The name of the terminal is missing or empty
    #[error("Invalid terminal name")]
    InvalidTerminalName,
    /// No candidate file could be loaded
    #[error("File not found")]
    FileNotFound,
    /// The candidate path does not fit into the scratch buffer
    #[error("Path exceeds {CAPACITY} bytes")]
    PathTooLong,
}

/// Reason a single candidate file was skipped
#[derive(thiserror::Error, Debug)]
enum Skip {
    #[error(transparent)]
    Path(Error),
    #[error("path is not valid for this platform")]
    InvalidPath,
    #[error("cannot open: {0}")]
    Open(io::Error),
    #[error("file size {0} exceeds {CAPACITY} bytes")]
    TooLarge(u64),
    #[error("cannot read: {0}")]
    Read(buffer::Error),
}

/// Base directory of one candidate file
///
/// The directory is `base` immediately followed by `suffix`, which lets
/// `$HOME/.terminfo` be expressed without building a new string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directory<'a> {
    base: &'a [u8],
    suffix: &'static [u8],
}

impl<'a> Directory<'a> {
    const fn new(base: &'a [u8]) -> Self {
        Self { base, suffix: b"" }
    }

    /// Leading part of the directory path
    pub const fn base(&self) -> &'a [u8] {
        self.base
    }

    /// Fixed trailing part of the directory path
    pub const fn suffix(&self) -> &'static [u8] {
        self.suffix
    }

    /// Write `<directory>/<first byte of term_name>/<term_name>` into `buffer`
    pub fn write_path(&self, term_name: &[u8], buffer: &mut ScratchBuffer) -> Result<(), Error> {
        let Some(&first_byte) = term_name.first() else {
            return Err(Error::InvalidTerminalName);
        };
        let separator = [b'/', first_byte, b'/'];
        let parts: [&[u8]; 4] = [self.base, self.suffix, &separator, term_name];
        buffer.clear();
        for part in parts {
            if buffer.extend_from_slice(part).is_err() {
                buffer.clear();
                return Err(Error::PathTooLong);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    User,
    List,
    Default,
    Done,
}

type DirList<'a> = Split<'a, u8, fn(&u8) -> bool>;

/// Iterator over directories searched for terminfo files, in search order
///
/// Created by [`search_directories`].
pub struct SearchDirectories<'a> {
    env: &'a Environment,
    stage: Stage,
    list: Option<DirList<'a>>,
}

impl<'a> Iterator for SearchDirectories<'a> {
    type Item = Directory<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stage {
                Stage::User => {
                    self.stage = Stage::List;
                    // `TERMINFO` replaces `~/.terminfo`, it does not add to it.
                    if let Some(dir) = self.env.terminfo_dir() {
                        return Some(Directory::new(dir));
                    }
                    if let Some(home) = self.env.home_dir() {
                        return Some(Directory {
                            base: home,
                            suffix: b"/.terminfo",
                        });
                    }
                }
                Stage::List => {
                    if let Some(dir) = self.list.as_mut().and_then(Iterator::next) {
                        let dir = if dir.is_empty() { DEFAULT_DIRECTORY } else { dir };
                        return Some(Directory::new(dir));
                    }
                    self.stage = Stage::Default;
                }
                Stage::Default => {
                    self.stage = Stage::Done;
                    return Some(Directory::new(DEFAULT_DIRECTORY));
                }
                Stage::Done => return None,
            }
        }
    }
}

const fn is_separator(byte: &u8) -> bool {
    *byte == b':'
}

/// Returns all directories that are searched for terminfo files
///
/// The order is `$TERMINFO` or else `$HOME/.terminfo`, then every element
/// of `$TERMINFO_DIRS`, then [`DEFAULT_DIRECTORY`]. Nothing is allocated
/// and no directory is checked for existence.
pub fn search_directories(env: &Environment) -> SearchDirectories<'_> {
    let list = env
        .terminfo_dir_list()
        .filter(|dirs| !dirs.is_empty())
        .map(|dirs| dirs.split(is_separator as fn(&u8) -> bool));
    SearchDirectories {
        env,
        stage: Stage::User,
        list,
    }
}

#[cfg(unix)]
fn as_path(bytes: &[u8]) -> Option<&Path> {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    Some(Path::new(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn as_path(bytes: &[u8]) -> Option<&Path> {
    str::from_utf8(bytes).ok().map(Path::new)
}

fn try_directory<F: FileSystem>(
    fs: &F,
    dir: Directory<'_>,
    term_name: &[u8],
    buffer: &mut ScratchBuffer,
) -> Result<usize, Skip> {
    dir.write_path(term_name, buffer).map_err(Skip::Path)?;

    let (mut file, size) = {
        let path = as_path(buffer.as_bytes()).ok_or(Skip::InvalidPath)?;
        tracing::trace!(path = %path.display(), "Trying terminfo file");
        fs.open(path).map_err(Skip::Open)?
    };

    let size = usize::try_from(size)
        .ok()
        .filter(|size| *size <= CAPACITY)
        .ok_or(Skip::TooLarge(size))?;
    buffer.fill_from(&mut file, size).map_err(Skip::Read)?;
    Ok(size)
}

/// Find the terminfo database file for the terminal and load it into `buffer`
///
/// The terminal name is taken from `env`. Candidates that cannot be opened,
/// are larger than the buffer or fail to read are skipped.
///
/// Returns the number of bytes loaded, an error if no candidate loaded.
pub fn load<F: FileSystem>(
    fs: &F,
    env: &Environment,
    buffer: &mut ScratchBuffer,
) -> Result<usize, Error> {
    let Some(term_name) = env.term_name() else {
        return Err(Error::InvalidTerminalName);
    };

    for dir in search_directories(env) {
        match try_directory(fs, dir, term_name, buffer) {
            Ok(size) => {
                tracing::debug!(
                    dir = %String::from_utf8_lossy(dir.base()),
                    size,
                    "Loaded terminfo file"
                );
                return Ok(size);
            }
            Err(err) => {
                tracing::debug!(
                    dir = %String::from_utf8_lossy(dir.base()),
                    %err,
                    "Skipping terminfo candidate"
                );
            }
        }
    }

    buffer.clear();
    Err(Error::FileNotFound)
}
