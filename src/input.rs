//! Cellgrid Input Parser
//!
//! Parses raw terminal input into keys.
//! Handles:
//! - Regular characters (UTF-8)
//! - Arrow keys, paging keys and other escape sequences
//! - A lone ESC byte as the Escape key

use serde::{Deserialize, Serialize};

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Escape,
    Enter,
    Tab,
    Backspace,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    /// A printable (or unclassified control) character
    Char(char),
}

impl Key {
    /// Up arrow or vi `k` in either case
    pub fn is_up(&self) -> bool {
        matches!(self, Key::Up | Key::Char('k' | 'K'))
    }

    /// Down arrow or vi `j` in either case
    pub fn is_down(&self) -> bool {
        matches!(self, Key::Down | Key::Char('j' | 'J'))
    }

    /// Left arrow or vi `h` in either case
    pub fn is_left(&self) -> bool {
        matches!(self, Key::Left | Key::Char('h' | 'H'))
    }

    /// Right arrow or vi `l` in either case
    pub fn is_right(&self) -> bool {
        matches!(self, Key::Right | Key::Char('l' | 'L'))
    }
}

/// Input parser state machine
pub struct InputParser {
    /// Buffer for incomplete escape sequences
    buffer: Vec<u8>,
}

impl InputParser {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(32),
        }
    }

    /// Parse input bytes into keys.
    /// Incomplete sequences stay buffered for the next call.
    pub fn parse(&mut self, data: &[u8]) -> Vec<Key> {
        let mut keys = Vec::new();
        self.buffer.extend_from_slice(data);

        while !self.buffer.is_empty() {
            match self.try_parse_one() {
                ParseResult::Key(key) => {
                    keys.push(key);
                }
                ParseResult::Incomplete => {
                    // Need more data
                    break;
                }
                ParseResult::Invalid(skip) => {
                    // Skip invalid bytes
                    self.buffer.drain(0..skip);
                }
            }
        }

        keys
    }

    /// A read that ends with nothing but ESC buffered was the Escape key
    /// itself, since terminals deliver whole escape sequences in one read.
    pub fn take_lone_escape(&mut self) -> Option<Key> {
        if self.buffer == [0x1b] {
            self.buffer.clear();
            Some(Key::Escape)
        } else {
            None
        }
    }

    /// Try to parse one key from the buffer
    fn try_parse_one(&mut self) -> ParseResult {
        if self.buffer.is_empty() {
            return ParseResult::Incomplete;
        }

        let first = self.buffer[0];

        // Escape sequence
        if first == 0x1b {
            return self.parse_escape();
        }

        // Control characters (< 32) and DEL (0x7f)
        if first < 32 || first == 0x7f {
            let key = match first {
                0x0d | 0x0a => Key::Enter,
                0x09 => Key::Tab,
                0x7f | 0x08 => Key::Backspace,
                _ => Key::Char(first as char),
            };
            self.buffer.remove(0);
            return ParseResult::Key(key);
        }

        // Regular character (handle UTF-8)
        match self.decode_utf8() {
            Utf8::Char(ch, len) => {
                self.buffer.drain(0..len);
                ParseResult::Key(Key::Char(ch))
            }
            Utf8::Incomplete => ParseResult::Incomplete,
            Utf8::Invalid => ParseResult::Invalid(1),
        }
    }

    /// Parse an escape sequence
    fn parse_escape(&mut self) -> ParseResult {
        if self.buffer.len() < 2 {
            return ParseResult::Incomplete;
        }

        match self.buffer[1] {
            // CSI sequence: ESC [
            b'[' => self.parse_csi(),
            // SS3 sequence: ESC O (arrows and F1-F4 on some terminals)
            b'O' => self.parse_ss3(),
            // Double ESC: first one is the Escape key
            0x1b => {
                self.buffer.remove(0);
                ParseResult::Key(Key::Escape)
            }
            // Alt+key
            c if c >= 32 => {
                self.buffer.drain(0..2);
                ParseResult::Key(Key::Char(c as char))
            }
            _ => ParseResult::Invalid(1),
        }
    }

    /// Parse CSI (Control Sequence Introducer) sequence: ESC [
    fn parse_csi(&mut self) -> ParseResult {
        if self.buffer.len() < 3 {
            return ParseResult::Incomplete;
        }

        // Find the end of the sequence (a letter)
        let end = self.buffer[2..].iter().position(|&b| b.is_ascii_alphabetic() || b == b'~');

        match end {
            None => ParseResult::Incomplete,
            Some(pos) => {
                let end_idx = 2 + pos;
                let final_byte = self.buffer[end_idx];
                let params: Vec<u8> = self.buffer[2..end_idx].to_vec();

                let key = decode_csi(&params, final_byte);
                self.buffer.drain(0..=end_idx);

                key.map(ParseResult::Key).unwrap_or(ParseResult::Invalid(0))
            }
        }
    }

    /// Parse SS3 sequence: ESC O
    fn parse_ss3(&mut self) -> ParseResult {
        if self.buffer.len() < 3 {
            return ParseResult::Incomplete;
        }

        let key = match self.buffer[2] {
            b'P' => Some(Key::F1),
            b'Q' => Some(Key::F2),
            b'R' => Some(Key::F3),
            b'S' => Some(Key::F4),
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => None,
        };

        self.buffer.drain(0..3);
        key.map(ParseResult::Key).unwrap_or(ParseResult::Invalid(0))
    }

    /// Decode a UTF-8 character from the front of the buffer
    fn decode_utf8(&self) -> Utf8 {
        let first = self.buffer[0];

        // ASCII
        if first < 128 {
            return Utf8::Char(first as char, 1);
        }

        // Determine expected length
        let len = if first & 0xE0 == 0xC0 { 2 }
            else if first & 0xF0 == 0xE0 { 3 }
            else if first & 0xF8 == 0xF0 { 4 }
            else { return Utf8::Invalid };

        if self.buffer.len() < len {
            return Utf8::Incomplete;
        }

        match std::str::from_utf8(&self.buffer[0..len]).ok().and_then(|s| s.chars().next()) {
            Some(c) => Utf8::Char(c, len),
            None => Utf8::Invalid,
        }
    }
}

impl Default for InputParser {
    fn default() -> Self {
        Self::new()
    }
}

enum ParseResult {
    Key(Key),
    Incomplete,
    Invalid(usize),
}

enum Utf8 {
    Char(char, usize),
    Incomplete,
    Invalid,
}

/// Decode CSI parameters into a key
fn decode_csi(params: &[u8], final_byte: u8) -> Option<Key> {
    match final_byte {
        b'A' => Some(Key::Up),
        b'B' => Some(Key::Down),
        b'C' => Some(Key::Right),
        b'D' => Some(Key::Left),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        b'~' => {
            // Parse the number before ~
            let num: u8 = params.iter()
                .take_while(|&&b| b.is_ascii_digit())
                .fold(0u8, |acc, &b| acc.saturating_mul(10).saturating_add(b - b'0'));
            match num {
                1 | 7 => Some(Key::Home),
                2 => Some(Key::Insert),
                3 => Some(Key::Delete),
                4 | 8 => Some(Key::End),
                5 => Some(Key::PageUp),
                6 => Some(Key::PageDown),
                15 => Some(Key::F5),
                17 => Some(Key::F6),
                18 => Some(Key::F7),
                19 => Some(Key::F8),
                20 => Some(Key::F9),
                21 => Some(Key::F10),
                23 => Some(Key::F11),
                24 => Some(Key::F12),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char() {
        let mut parser = InputParser::new();
        assert_eq!(parser.parse(b"a"), vec![Key::Char('a')]);
    }

    #[test]
    fn test_parse_arrow_keys() {
        let mut parser = InputParser::new();

        assert_eq!(parser.parse(b"\x1b[A"), vec![Key::Up]);
        assert_eq!(parser.parse(b"\x1b[B"), vec![Key::Down]);
        assert_eq!(parser.parse(b"\x1bOD"), vec![Key::Left]);
    }

    #[test]
    fn test_parse_paging_keys() {
        let mut parser = InputParser::new();
        assert_eq!(parser.parse(b"\x1b[5~\x1b[6~"), vec![Key::PageUp, Key::PageDown]);
    }

    #[test]
    fn test_parse_enter_variants() {
        let mut parser = InputParser::new();
        assert_eq!(parser.parse(b"\r\n"), vec![Key::Enter, Key::Enter]);
    }

    #[test]
    fn test_lone_escape() {
        let mut parser = InputParser::new();
        assert!(parser.parse(b"\x1b").is_empty());
        assert_eq!(parser.take_lone_escape(), Some(Key::Escape));
        assert_eq!(parser.take_lone_escape(), None);
    }

    #[test]
    fn test_split_sequence_waits_for_rest() {
        let mut parser = InputParser::new();
        assert!(parser.parse(b"\x1b[").is_empty());
        assert_eq!(parser.take_lone_escape(), None);
        assert_eq!(parser.parse(b"C"), vec![Key::Right]);
    }

    #[test]
    fn test_parse_utf8() {
        let mut parser = InputParser::new();
        assert_eq!(parser.parse("ü".as_bytes()), vec![Key::Char('ü')]);
    }

    #[test]
    fn test_parse_multiple() {
        let mut parser = InputParser::new();
        let keys = parser.parse(b"jk\x1b[A");
        assert_eq!(keys, vec![Key::Char('j'), Key::Char('k'), Key::Up]);
        assert!(keys[0].is_down());
        assert!(keys[1].is_up());
    }

    #[test]
    fn test_vi_keys_ignore_case() {
        assert!(Key::Char('K').is_up());
        assert!(Key::Char('J').is_down());
        assert!(Key::Char('H').is_left());
        assert!(Key::Char('L').is_right());
        assert!(!Key::Char('x').is_up());
    }
}
