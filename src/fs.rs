// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Minimal file access used to load terminfo databases

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Read-only access to database files
pub trait FileSystem {
    /// Open file handle, closed when dropped
    type File: Read;

    /// Open `path` for reading and return the handle with the file size
    fn open(&self, path: &Path) -> io::Result<(Self::File, u64)>;
}

/// File access through `std::fs`
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    type File = File;

    fn open(&self, path: &Path) -> io::Result<(File, u64)> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok((file, size))
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        io::{self, Read},
        path::{Path, PathBuf},
    };

    use super::FileSystem;

    /// In-memory files served in small chunks, remembering every open attempt
    #[derive(Default)]
    pub(crate) struct FakeFileSystem {
        pub files: BTreeMap<PathBuf, Vec<u8>>,
        pub chunk: usize,
        pub opened: RefCell<Vec<PathBuf>>,
    }

    impl FakeFileSystem {
        pub fn with_file(mut self, path: &str, data: &[u8]) -> Self {
            self.files.insert(PathBuf::from(path), data.to_vec());
            self
        }

        pub fn opened(&self) -> Vec<PathBuf> {
            self.opened.borrow().clone()
        }
    }

    pub(crate) struct FakeFile {
        data: Vec<u8>,
        position: usize,
        chunk: usize,
    }

    impl Read for FakeFile {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let remaining = &self.data[self.position..];
            let count = self.chunk.max(1).min(buf.len()).min(remaining.len());
            buf[..count].copy_from_slice(&remaining[..count]);
            self.position += count;
            Ok(count)
        }
    }

    impl FileSystem for FakeFileSystem {
        type File = FakeFile;

        fn open(&self, path: &Path) -> io::Result<(FakeFile, u64)> {
            self.opened.borrow_mut().push(path.to_owned());
            let data = self
                .files
                .get(path)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            let file = FakeFile {
                data: data.clone(),
                position: 0,
                chunk: self.chunk,
            };
            Ok((file, data.len() as u64))
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn open_reports_size() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data");
        fs::write(&path, b"twelve bytes").unwrap();

        let (mut file, size) = OsFileSystem.open(&path).unwrap();
        assert_eq!(size, 12);
        let mut contents = vec![];
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"twelve bytes");
    }

    #[test]
    fn open_missing() {
        let temp_dir = tempdir().unwrap();
        let error = OsFileSystem.open(&temp_dir.path().join("missing"));
        assert_eq!(error.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
