// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Keys and control functions resolved for a terminal

/// Number of recognized keys
pub const KEY_COUNT: usize = 22;

/// Number of control functions
pub const FUNC_COUNT: usize = 12;

/// Special key sent by the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Key {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// All keys in their fixed order
    pub const ALL: [Self; KEY_COUNT] = [
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
        Self::Insert,
        Self::Delete,
        Self::Home,
        Self::End,
        Self::PageUp,
        Self::PageDown,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
    ];

    /// Index of the key in the string capability section of a terminfo file
    pub const fn capability(self) -> usize {
        match self {
            Self::F1 => 66,
            Self::F2 => 68,
            Self::F3 => 69,
            Self::F4 => 70,
            Self::F5 => 71,
            Self::F6 => 72,
            Self::F7 => 73,
            Self::F8 => 74,
            Self::F9 => 75,
            // kf10 comes right after kf1 in the terminfo order
            Self::F10 => 67,
            Self::F11 => 216,
            Self::F12 => 217,
            Self::Insert => 77,
            Self::Delete => 59,
            Self::Home => 76,
            Self::End => 164,
            Self::PageUp => 82,
            Self::PageDown => 81,
            Self::Up => 87,
            Self::Down => 61,
            Self::Left => 79,
            Self::Right => 83,
        }
    }

    /// Short terminfo name of the capability
    pub const fn terminfo_name(self) -> &'static str {
        match self {
            Self::F1 => "kf1",
            Self::F2 => "kf2",
            Self::F3 => "kf3",
            Self::F4 => "kf4",
            Self::F5 => "kf5",
            Self::F6 => "kf6",
            Self::F7 => "kf7",
            Self::F8 => "kf8",
            Self::F9 => "kf9",
            Self::F10 => "kf10",
            Self::F11 => "kf11",
            Self::F12 => "kf12",
            Self::Insert => "kich1",
            Self::Delete => "kdch1",
            Self::Home => "khome",
            Self::End => "kend",
            Self::PageUp => "kpp",
            Self::PageDown => "knp",
            Self::Up => "kcuu1",
            Self::Down => "kcud1",
            Self::Left => "kcub1",
            Self::Right => "kcuf1",
        }
    }
}

/// Control function sent to the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Func {
    EnterAltScreen,
    ExitAltScreen,
    ShowCursor,
    HideCursor,
    ClearScreen,
    AttrReset,
    Underline,
    Bold,
    Blink,
    Reverse,
    EnterKeypad,
    ExitKeypad,
}

impl Func {
    /// All functions in their fixed order
    pub const ALL: [Self; FUNC_COUNT] = [
        Self::EnterAltScreen,
        Self::ExitAltScreen,
        Self::ShowCursor,
        Self::HideCursor,
        Self::ClearScreen,
        Self::AttrReset,
        Self::Underline,
        Self::Bold,
        Self::Blink,
        Self::Reverse,
        Self::EnterKeypad,
        Self::ExitKeypad,
    ];

    /// Index of the function in the string capability section of a terminfo file
    pub const fn capability(self) -> usize {
        match self {
            Self::EnterAltScreen => 28,
            Self::ExitAltScreen => 40,
            Self::ShowCursor => 16,
            Self::HideCursor => 13,
            Self::ClearScreen => 5,
            Self::AttrReset => 39,
            Self::Underline => 36,
            Self::Bold => 27,
            Self::Blink => 26,
            Self::Reverse => 34,
            Self::EnterKeypad => 89,
            Self::ExitKeypad => 88,
        }
    }

    /// Short terminfo name of the capability
    pub const fn terminfo_name(self) -> &'static str {
        match self {
            Self::EnterAltScreen => "smcup",
            Self::ExitAltScreen => "rmcup",
            Self::ShowCursor => "cnorm",
            Self::HideCursor => "civis",
            Self::ClearScreen => "clear",
            Self::AttrReset => "sgr0",
            Self::Underline => "smul",
            Self::Bold => "bold",
            Self::Blink => "blink",
            Self::Reverse => "rev",
            Self::EnterKeypad => "smkx",
            Self::ExitKeypad => "rmkx",
        }
    }
}

/// Where resolved capabilities came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// A terminfo database file
    Database,
    /// Compiled-in table with the given name
    Builtin(&'static str),
}

/// Escape sequences for every [`Key`] and [`Func`]
///
/// Sequences are views without the terminating NUL. An empty sequence
/// means the terminal does not support the key or function. Sequences
/// decoded from a database borrow the buffer it was loaded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities<'a> {
    keys: [&'a [u8]; KEY_COUNT],
    funcs: [&'a [u8]; FUNC_COUNT],
    source: Source,
}

impl<'a> Capabilities<'a> {
    pub(crate) const fn new(
        keys: [&'a [u8]; KEY_COUNT],
        funcs: [&'a [u8]; FUNC_COUNT],
        source: Source,
    ) -> Self {
        Self {
            keys,
            funcs,
            source,
        }
    }

    /// Sequence sent by the terminal for `key`
    pub const fn key(&self, key: Key) -> &'a [u8] {
        self.keys[key as usize]
    }

    /// Sequence to send to the terminal to perform `func`
    pub const fn func(&self, func: Func) -> &'a [u8] {
        self.funcs[func as usize]
    }

    /// All keys with their sequences, in [`Key::ALL`] order
    pub fn keys(&self) -> impl Iterator<Item = (Key, &'a [u8])> {
        Key::ALL.into_iter().zip(self.keys)
    }

    /// All functions with their sequences, in [`Func::ALL`] order
    pub fn funcs(&self) -> impl Iterator<Item = (Func, &'a [u8])> {
        Func::ALL.into_iter().zip(self.funcs)
    }

    pub const fn source(&self) -> Source {
        self.source
    }

    /// Recognize a key at the start of `input`
    ///
    /// Keys are tried in [`Key::ALL`] order and the first non-empty
    /// sequence that prefixes `input` wins.
    ///
    /// Returns the key and the length of its sequence.
    pub fn match_key(&self, input: &[u8]) -> Option<(Key, usize)> {
        self.keys()
            .find(|(_, sequence)| !sequence.is_empty() && input.starts_with(sequence))
            .map(|(key, sequence)| (key, sequence.len()))
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn enumeration_order_matches_discriminants() {
        for (index, key) in Key::ALL.into_iter().enumerate() {
            assert_eq!(key as usize, index);
        }
        for (index, func) in Func::ALL.into_iter().enumerate() {
            assert_eq!(func as usize, index);
        }
    }

    #[test]
    fn capability_numbers() {
        let keys: Vec<usize> = Key::ALL.into_iter().map(Key::capability).collect();
        assert_eq!(
            keys,
            [
                66, 68, 69, 70, 71, 72, 73, 74, 75, 67, 216, 217, 77, 59, 76, 164, 82, 81, 87, 61,
                79, 83
            ]
        );
        let funcs: Vec<usize> = Func::ALL.into_iter().map(Func::capability).collect();
        assert_eq!(funcs, [28, 40, 16, 13, 5, 39, 36, 27, 26, 34, 89, 88]);
    }

    #[test]
    fn capability_numbers_unique() {
        let keys: BTreeSet<usize> = Key::ALL.into_iter().map(Key::capability).collect();
        let funcs: BTreeSet<usize> = Func::ALL.into_iter().map(Func::capability).collect();
        assert_eq!(keys.len(), KEY_COUNT);
        assert_eq!(funcs.len(), FUNC_COUNT);
        assert!(keys.is_disjoint(&funcs));
    }

    fn sample() -> Capabilities<'static> {
        let mut keys = [b"".as_slice(); KEY_COUNT];
        keys[Key::Up as usize] = b"\x1b[A";
        keys[Key::F1 as usize] = b"\x1b[[A";
        keys[Key::Delete as usize] = b"\x1b[3~";
        Capabilities::new(keys, [b"".as_slice(); FUNC_COUNT], Source::Database)
    }

    #[test]
    fn match_key_prefix() {
        let caps = sample();
        assert_eq!(caps.match_key(b"\x1b[Axyz"), Some((Key::Up, 3)));
        assert_eq!(caps.match_key(b"\x1b[3~"), Some((Key::Delete, 4)));
    }

    #[test]
    fn match_key_declaration_order() {
        let mut keys = [b"".as_slice(); KEY_COUNT];
        keys[Key::F1 as usize] = b"\x1b[";
        keys[Key::Up as usize] = b"\x1b[A";
        let caps = Capabilities::new(keys, [b"".as_slice(); FUNC_COUNT], Source::Database);
        assert_eq!(caps.match_key(b"\x1b[A"), Some((Key::F1, 2)));
    }

    #[test]
    fn match_key_ignores_empty_sequences() {
        let caps = sample();
        assert_eq!(caps.match_key(b"q"), None);
        assert_eq!(caps.match_key(b""), None);
        assert_eq!(caps.match_key(b"\x1b["), None);
    }
}
