//! Typed keypad events and the key map that produces them.

use std::collections::HashMap;
use std::fmt;

use super::error::KeyError;
use super::operator::Operator;

/// A single decimal digit, `'0'..='9'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() {
            Ok(Self(c))
        } else {
            Err(KeyError::InvalidDigit(c))
        }
    }
}

/// A button press on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Decimal,
    Clear,
    Backspace,
    ToggleSign,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "digit {}", d.as_char()),
            Self::Operator(op) => write!(f, "operator {op}"),
            Self::Equals => f.write_str("equals"),
            Self::Decimal => f.write_str("decimal point"),
            Self::Clear => f.write_str("clear"),
            Self::Backspace => f.write_str("backspace"),
            Self::ToggleSign => f.write_str("toggle sign"),
        }
    }
}

/// Maps single characters to keypad events.
#[derive(Clone, Debug)]
pub struct KeyBindings {
    keys: HashMap<char, Event>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::digits_only();
        for op in Operator::ALL {
            bindings.keys.insert(op.symbol(), Event::Operator(op));
        }
        bindings.keys.insert('*', Event::Operator(Operator::Multiply));
        bindings.keys.insert('=', Event::Equals);
        bindings.keys.insert('.', Event::Decimal);
        bindings.keys.insert('c', Event::Clear);
        bindings.keys.insert('<', Event::Backspace);
        bindings.keys.insert('~', Event::ToggleSign);
        bindings
    }
}

impl KeyBindings {
    /// Bindings with only `0`-`9` mapped.
    pub fn digits_only() -> Self {
        let keys = ('0'..='9')
            .map(|c| (c, Event::Digit(Digit(c))))
            .collect();
        Self { keys }
    }

    /// Bind `key` to `event`.
    ///
    /// Returns the already-bound event when `key` maps to something else;
    /// the existing binding is kept in that case.
    pub fn bind(&mut self, key: char, event: Event) -> Option<Event> {
        match self.keys.get(&key) {
            Some(existing) if *existing != event => Some(*existing),
            Some(_) => None,
            None => {
                self.keys.insert(key, event);
                None
            }
        }
    }

    /// Look up the event for a key press.
    pub fn event_for(&self, key: char) -> Result<Event, KeyError> {
        self.keys
            .get(&key)
            .copied()
            .ok_or(KeyError::UnboundKey(key))
    }

    /// All keys bound to `event`, sorted.
    pub fn keys_for(&self, event: Event) -> Vec<char> {
        let mut keys: Vec<char> = self
            .keys
            .iter()
            .filter(|(_, e)| **e == event)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_unstable();
        keys
    }
}
