// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Terminal key and control sequences from terminfo with builtin fallbacks
//!
//! ```no_run
//! use terminfo_caps::{Func, Resolver};
//!
//! let mut resolver = Resolver::new();
//! let caps = resolver.resolve_from_env()?;
//! let clear = caps.func(Func::ClearScreen);
//! # Ok::<(), terminfo_caps::resolve::Error>(())
//! ```

pub mod buffer;
pub mod builtin;
pub mod capability;
pub mod env;
pub mod fs;
pub mod locate;
pub mod parse;
pub mod resolve;

pub use buffer::ScratchBuffer;
pub use capability::{Capabilities, Func, Key, Source};
pub use env::Environment;
pub use fs::{FileSystem, OsFileSystem};
pub use locate::search_directories;
pub use parse::decode;
pub use resolve::Resolver;
