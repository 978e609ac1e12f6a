//! Classification of shell input lines.
//!
//! A line is either a command word (`quit`, `state`, ...) or a run of key
//! presses fed to the calculator one character at a time.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single word of at least two letters, optionally padded with spaces.
    static ref COMMAND_WORD: Regex = Regex::new(r"^\s*([A-Za-z]{2,})\s*$").unwrap();
}

/// Shell commands that act on the session rather than the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    State,
    Copy,
}

impl Command {
    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Some(Self::Quit),
            "help" => Some(Self::Help),
            "state" => Some(Self::State),
            "copy" => Some(Self::Copy),
            _ => None,
        }
    }
}

/// A classified input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Empty,
    Command(Command),
    /// Key presses in order, whitespace removed.
    Keys(Vec<char>),
}

/// Classify one line of shell input.
///
/// Unknown words fall through to key presses, so a binding such as `c` for
/// clear still works when typed as part of a sequence.
pub fn classify_line(line: &str) -> Line {
    if line.trim().is_empty() {
        return Line::Empty;
    }

    if let Some(caps) = COMMAND_WORD.captures(line)
        && let Some(command) = Command::from_word(&caps[1])
    {
        return Line::Command(command);
    }

    Line::Keys(key_presses(line))
}

/// Split a key sequence into individual presses, ignoring whitespace.
pub fn key_presses(sequence: &str) -> Vec<char> {
    sequence.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), Line::Empty);
        assert_eq!(classify_line("   \t"), Line::Empty);
    }

    #[test]
    fn test_commands() {
        assert_eq!(classify_line("quit"), Line::Command(Command::Quit));
        assert_eq!(classify_line("  EXIT "), Line::Command(Command::Quit));
        assert_eq!(classify_line("help"), Line::Command(Command::Help));
        assert_eq!(classify_line("state"), Line::Command(Command::State));
        assert_eq!(classify_line("copy"), Line::Command(Command::Copy));
    }

    #[test]
    fn test_key_sequences() {
        assert_eq!(
            classify_line("5 + 3 ="),
            Line::Keys(vec!['5', '+', '3', '='])
        );
        assert_eq!(classify_line("12x3"), Line::Keys(vec!['1', '2', 'x', '3']));
        assert_eq!(classify_line("c"), Line::Keys(vec!['c']));
    }

    #[test]
    fn test_unknown_words_are_keys() {
        assert_eq!(classify_line("cc"), Line::Keys(vec!['c', 'c']));
        assert_eq!(classify_line("quit now"), Line::Keys("quitnow".chars().collect()));
    }
}
