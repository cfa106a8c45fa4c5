// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment variables consulted during resolution

use std::{
    env,
    ffi::{OsStr, OsString},
};

/// Snapshot of the variables that control capability resolution
///
/// Use [`Environment::from_env`] to capture the process environment, or
/// build one explicitly to resolve capabilities for another terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    term: Option<OsString>,
    terminfo: Option<OsString>,
    home: Option<OsString>,
    terminfo_dirs: Option<OsString>,
}

impl Environment {
    /// Capture `TERM`, `TERMINFO`, `HOME` and `TERMINFO_DIRS`
    pub fn from_env() -> Self {
        Self {
            term: env::var_os("TERM"),
            terminfo: env::var_os("TERMINFO"),
            home: env::var_os("HOME"),
            terminfo_dirs: env::var_os("TERMINFO_DIRS"),
        }
    }

    /// Set the terminal name
    #[must_use]
    pub fn term(mut self, value: impl AsRef<OsStr>) -> Self {
        self.term = Some(value.as_ref().to_owned());
        self
    }

    /// Set the directory overriding all user directories
    #[must_use]
    pub fn terminfo(mut self, value: impl AsRef<OsStr>) -> Self {
        self.terminfo = Some(value.as_ref().to_owned());
        self
    }

    /// Set the home directory searched for `.terminfo`
    #[must_use]
    pub fn home(mut self, value: impl AsRef<OsStr>) -> Self {
        self.home = Some(value.as_ref().to_owned());
        self
    }

    /// Set the colon separated directory list
    #[must_use]
    pub fn terminfo_dirs(mut self, value: impl AsRef<OsStr>) -> Self {
        self.terminfo_dirs = Some(value.as_ref().to_owned());
        self
    }

    /// Terminal name, `None` if unset or empty
    pub fn term_name(&self) -> Option<&[u8]> {
        as_bytes(self.term.as_ref()).filter(|name| !name.is_empty())
    }

    pub fn terminfo_dir(&self) -> Option<&[u8]> {
        as_bytes(self.terminfo.as_ref())
    }

    pub fn home_dir(&self) -> Option<&[u8]> {
        as_bytes(self.home.as_ref())
    }

    pub fn terminfo_dir_list(&self) -> Option<&[u8]> {
        as_bytes(self.terminfo_dirs.as_ref())
    }
}

fn as_bytes(value: Option<&OsString>) -> Option<&[u8]> {
    value.map(|value| value.as_encoded_bytes())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn captures_process_environment() {
        temp_env::with_vars(
            [
                ("TERM", Some("xterm")),
                ("TERMINFO", None),
                ("HOME", Some("/home/user")),
                ("TERMINFO_DIRS", Some(":/opt/terminfo")),
            ],
            || {
                let env = Environment::from_env();
                assert_eq!(env.term_name(), Some(b"xterm".as_slice()));
                assert_eq!(env.terminfo_dir(), None);
                assert_eq!(env.home_dir(), Some(b"/home/user".as_slice()));
                assert_eq!(env.terminfo_dir_list(), Some(b":/opt/terminfo".as_slice()));
            },
        );
    }

    #[test]
    fn empty_term_is_unset() {
        let env = Environment::default().term("");
        assert_eq!(env.term_name(), None);
    }

    #[test]
    fn empty_directory_is_set() {
        let env = Environment::default().terminfo("");
        assert_eq!(env.terminfo_dir(), Some(b"".as_slice()));
    }
}
