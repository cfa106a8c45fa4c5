// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolving capabilities from a terminfo database or builtin tables

use crate::{
    buffer::ScratchBuffer,
    builtin,
    capability::Capabilities,
    env::Environment,
    fs::{FileSystem, OsFileSystem},
    locate, parse,
};

/// Errors reported when no capabilities could be resolved
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `TERM` is unset or empty
    #[error("Terminal name is not set")]
    MissingTerminalName,
    /// Neither a usable database nor a builtin table exists for the terminal
    #[error("No capabilities found for terminal {0}")]
    Unsupported(String),
}

/// Resolves capabilities, owning the buffer database files are loaded into
///
/// Capabilities returned by [`Resolver::resolve`] may borrow the buffer, so
/// the resolver cannot be used again while they are alive.
pub struct Resolver<F = OsFileSystem> {
    fs: F,
    buffer: ScratchBuffer,
}

impl Resolver {
    /// Return a resolver reading files through `std::fs`
    pub const fn new() -> Self {
        Self::with_file_system(OsFileSystem)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Resolver<F> {
    pub const fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            buffer: ScratchBuffer::new(),
        }
    }

    /// Resolve key and function sequences for the terminal described by `env`
    ///
    /// The terminfo database is tried first. If it cannot be found or is
    /// malformed, the builtin tables are consulted.
    pub fn resolve(&mut self, env: &Environment) -> Result<Capabilities<'_>, Error> {
        let Some(term_name) = env.term_name() else {
            return Err(Error::MissingTerminalName);
        };

        match locate::load(&self.fs, env, &mut self.buffer) {
            Ok(_) => match parse::decode(self.buffer.as_bytes()) {
                Ok(caps) => {
                    tracing::debug!(
                        term = %String::from_utf8_lossy(term_name),
                        "Using terminfo database"
                    );
                    return Ok(caps);
                }
                Err(err) => {
                    tracing::debug!(%err, "Malformed terminfo database, using builtin tables");
                }
            },
            Err(err) => {
                tracing::debug!(%err, "No terminfo database, using builtin tables");
            }
        }

        let Some(terminal) = builtin::lookup(term_name) else {
            let term_name = String::from_utf8_lossy(term_name).into_owned();
            tracing::debug!(term = %term_name, "No builtin table");
            return Err(Error::Unsupported(term_name));
        };
        tracing::debug!(
            term = %String::from_utf8_lossy(term_name),
            builtin = terminal.name,
            "Using builtin table"
        );
        Ok(terminal.capabilities())
    }

    /// Resolve capabilities for the terminal of the current process
    pub fn resolve_from_env(&mut self) -> Result<Capabilities<'_>, Error> {
        self.resolve(&Environment::from_env())
    }
}
