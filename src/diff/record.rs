//! Diff records and their change status.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of change recorded for a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeStatus {
    #[serde(rename = "A")]
    Added,
    #[serde(rename = "D")]
    Deleted,
    #[serde(rename = "M")]
    Modified,
}

impl ChangeStatus {
    /// Parse a status letter, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" | "a" => Some(ChangeStatus::Added),
            "D" | "d" => Some(ChangeStatus::Deleted),
            "M" | "m" => Some(ChangeStatus::Modified),
            _ => None,
        }
    }

    /// Normalized (uppercase) status letter
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Added => "A",
            ChangeStatus::Deleted => "D",
            ChangeStatus::Modified => "M",
        }
    }
}

impl FromStr for ChangeStatus {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or("status should be A, D, or M")
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a diff listing, optionally annotated with its symbol path.
///
/// Field order matches the serialized output: `line`, `symbol`, `status`,
/// `content`. An unresolved symbol serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub line: u32,
    pub symbol: Option<String>,
    pub status: ChangeStatus,
    pub content: String,
}

impl DiffRecord {
    pub fn new(line: u32, status: ChangeStatus, content: impl Into<String>) -> Self {
        Self {
            line,
            symbol: None,
            status,
            content: content.into(),
        }
    }
}

impl std::fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.line,
            self.status,
            self.symbol.as_deref().unwrap_or(""),
            self.content
        )
    }
}
