// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compiled-in capabilities for well-known terminals

use crate::capability::{Capabilities, FUNC_COUNT, KEY_COUNT, Source};

/// Capabilities of a terminal known without a terminfo database
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinTerminal {
    pub name: &'static str,
    keys: [&'static [u8]; KEY_COUNT],
    funcs: [&'static [u8]; FUNC_COUNT],
}

impl BuiltinTerminal {
    pub const fn capabilities(&self) -> Capabilities<'static> {
        Capabilities::new(self.keys, self.funcs, Source::Builtin(self.name))
    }
}

const RXVT_KEYS: [&[u8]; KEY_COUNT] = [
    b"\x1b[11~", b"\x1b[12~", b"\x1b[13~", b"\x1b[14~", b"\x1b[15~", b"\x1b[17~", b"\x1b[18~",
    b"\x1b[19~", b"\x1b[20~", b"\x1b[21~", b"\x1b[23~", b"\x1b[24~", b"\x1b[2~", b"\x1b[3~",
    b"\x1b[7~", b"\x1b[8~", b"\x1b[5~", b"\x1b[6~", b"\x1b[A", b"\x1b[B", b"\x1b[D", b"\x1b[C",
];

pub const RXVT_256COLOR: BuiltinTerminal = BuiltinTerminal {
    name: "rxvt-256color",
    keys: RXVT_KEYS,
    funcs: [
        b"\x1b7\x1b[?47h",
        b"\x1b[2J\x1b[?47l\x1b8",
        b"\x1b[?25h",
        b"\x1b[?25l",
        b"\x1b[H\x1b[2J",
        b"\x1b[m",
        b"\x1b[4m",
        b"\x1b[1m",
        b"\x1b[5m",
        b"\x1b[7m",
        b"\x1b=",
        b"\x1b>",
    ],
};

pub const ETERM: BuiltinTerminal = BuiltinTerminal {
    name: "Eterm",
    keys: RXVT_KEYS,
    funcs: [
        b"\x1b7\x1b[?47h",
        b"\x1b[2J\x1b[?47l\x1b8",
        b"\x1b[?25h",
        b"\x1b[?25l",
        b"\x1b[H\x1b[2J",
        b"\x1b[m",
        b"\x1b[4m",
        b"\x1b[1m",
        b"\x1b[5m",
        b"\x1b[7m",
        b"",
        b"",
    ],
};

pub const SCREEN: BuiltinTerminal = BuiltinTerminal {
    name: "screen",
    keys: [
        b"\x1bOP", b"\x1bOQ", b"\x1bOR", b"\x1bOS", b"\x1b[15~", b"\x1b[17~", b"\x1b[18~",
        b"\x1b[19~", b"\x1b[20~", b"\x1b[21~", b"\x1b[23~", b"\x1b[24~", b"\x1b[2~", b"\x1b[3~",
        b"\x1b[1~", b"\x1b[4~", b"\x1b[5~", b"\x1b[6~", b"\x1bOA", b"\x1bOB", b"\x1bOD", b"\x1bOC",
    ],
    funcs: [
        b"\x1b[?1049h",
        b"\x1b[?1049l",
        b"\x1b[34h\x1b[?25h",
        b"\x1b[?25l",
        b"\x1b[H\x1b[J",
        b"\x1b[m",
        b"\x1b[4m",
        b"\x1b[1m",
        b"\x1b[5m",
        b"\x1b[7m",
        b"\x1b[?1h\x1b=",
        b"\x1b[?1l\x1b>",
    ],
};

pub const RXVT_UNICODE: BuiltinTerminal = BuiltinTerminal {
    name: "rxvt-unicode",
    keys: RXVT_KEYS,
    funcs: [
        b"\x1b[?1049h",
        b"\x1b[r\x1b[?1049l",
        b"\x1b[?25h",
        b"\x1b[?25l",
        b"\x1b[H\x1b[2J",
        b"\x1b[m\x1b(B",
        b"\x1b[4m",
        b"\x1b[1m",
        b"\x1b[5m",
        b"\x1b[7m",
        b"\x1b=",
        b"\x1b>",
    ],
};

pub const LINUX: BuiltinTerminal = BuiltinTerminal {
    name: "linux",
    keys: [
        b"\x1b[[A", b"\x1b[[B", b"\x1b[[C", b"\x1b[[D", b"\x1b[[E", b"\x1b[17~", b"\x1b[18~",
        b"\x1b[19~", b"\x1b[20~", b"\x1b[21~", b"\x1b[23~", b"\x1b[24~", b"\x1b[2~", b"\x1b[3~",
        b"\x1b[1~", b"\x1b[4~", b"\x1b[5~", b"\x1b[6~", b"\x1b[A", b"\x1b[B", b"\x1b[D", b"\x1b[C",
    ],
    funcs: [
        b"",
        b"",
        b"\x1b[?25h\x1b[?0c",
        b"\x1b[?25l\x1b[?1c",
        b"\x1b[H\x1b[J",
        b"\x1b[0;10m",
        b"\x1b[4m",
        b"\x1b[1m",
        b"\x1b[5m",
        b"\x1b[7m",
        b"",
        b"",
    ],
};

pub const XTERM: BuiltinTerminal = BuiltinTerminal {
    name: "xterm",
    keys: [
        b"\x1bOP", b"\x1bOQ", b"\x1bOR", b"\x1bOS", b"\x1b[15~", b"\x1b[17~", b"\x1b[18~",
        b"\x1b[19~", b"\x1b[20~", b"\x1b[21~", b"\x1b[23~", b"\x1b[24~", b"\x1b[2~", b"\x1b[3~",
        b"\x1bOH", b"\x1bOF", b"\x1b[5~", b"\x1b[6~", b"\x1bOA", b"\x1bOB", b"\x1bOD", b"\x1bOC",
    ],
    funcs: [
        b"\x1b[?1049h",
        b"\x1b[?1049l",
        b"\x1b[?12l\x1b[?25h",
        b"\x1b[?25l",
        b"\x1b[H\x1b[2J",
        b"\x1b(B\x1b[m",
        b"\x1b[4m",
        b"\x1b[1m",
        b"\x1b[5m",
        b"\x1b[7m",
        b"\x1b[?1h\x1b=",
        b"\x1b[?1l\x1b>",
    ],
};

/// Terminals matched by their exact name
pub const EXACT: &[BuiltinTerminal] = &[
    RXVT_256COLOR,
    ETERM,
    SCREEN,
    RXVT_UNICODE,
    LINUX,
    XTERM,
];

/// Name fragments matched anywhere in the terminal name, with their tables
pub const COMPATIBLE: &[(&str, BuiltinTerminal)] = &[
    ("xterm", XTERM),
    ("rxvt", RXVT_UNICODE),
    ("linux", LINUX),
    ("Eterm", ETERM),
    ("screen", SCREEN),
    // cygwin is close enough to xterm
    ("cygwin", XTERM),
];

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

/// Find the compiled-in table for `term_name`
///
/// An exact name match is preferred. Otherwise the first entry of
/// [`COMPATIBLE`] whose fragment occurs in `term_name` is used, in
/// declaration order.
pub fn lookup(term_name: &[u8]) -> Option<&'static BuiltinTerminal> {
    if term_name.is_empty() {
        return None;
    }

    if let Some(terminal) = EXACT
        .iter()
        .find(|terminal| terminal.name.as_bytes() == term_name)
    {
        return Some(terminal);
    }

    COMPATIBLE
        .iter()
        .find(|(fragment, _)| contains(term_name, fragment.as_bytes()))
        .map(|(_, terminal)| terminal)
}
