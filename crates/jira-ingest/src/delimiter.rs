//! Field delimiter selection.

use std::fmt;
use std::str::FromStr;

/// Single-character field delimiter for the input file.
///
/// Re-reading the same file under a different delimiter re-parses it from
/// disk; nothing from the previous parse is carried over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `;` — the default, common in European spreadsheet exports.
    #[default]
    Semicolon,
    /// `,`
    Comma,
    /// `|`
    Pipe,
    /// Horizontal tab.
    Tab,
}

impl Delimiter {
    /// Returns the delimiter byte handed to the tokenizer.
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Semicolon => b';',
            Delimiter::Comma => b',',
            Delimiter::Pipe => b'|',
            Delimiter::Tab => b'\t',
        }
    }

    /// Returns the label shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Semicolon => ";",
            Delimiter::Comma => ",",
            Delimiter::Pipe => "|",
            Delimiter::Tab => "TAB",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ";" | "semicolon" => Ok(Delimiter::Semicolon),
            "," | "comma" => Ok(Delimiter::Comma),
            "|" | "pipe" => Ok(Delimiter::Pipe),
            "\t" | "TAB" | "tab" => Ok(Delimiter::Tab),
            _ => Err(format!("Unknown delimiter: {s}")),
        }
    }
}
