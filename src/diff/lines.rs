//! Line splitting for diff listings.

use serde::{Deserialize, Serialize};

/// Line terminator convention used when splitting a diff file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Split on `\n` and drop a trailing `\r` from each line
    #[default]
    Auto,
    Lf,
    Crlf,
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(LineEnding::Auto),
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::Crlf),
            other => Err(format!("unknown line ending '{other}'")),
        }
    }
}

/// Split `text` into lines.
///
/// A single terminator at the very end of the text does not produce a
/// trailing empty line; any other empty line is kept so validation can
/// report it.
pub fn split_lines(text: &str, ending: LineEnding) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = match ending {
        LineEnding::Auto => text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect(),
        LineEnding::Lf => text.split('\n').collect(),
        LineEnding::Crlf => text.split("\r\n").collect(),
    };

    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
