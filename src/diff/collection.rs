//! Insertion-ordered collection of diff lines.
//!
//! Built once from the raw `<line>|<status>|<content>` listing, then annotated
//! in place by the mapper. Each record's symbol can be set at most once.

use super::record::{ChangeStatus, DiffRecord};
use crate::error::{DiffError, DiffProblem, DiffResult};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Field separator of the diff listing
pub const FIELD_SEPARATOR: char = '|';

/// First and last diff line of a collection; both `None` when it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRange {
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct DiffCollection {
    records: IndexMap<u32, DiffRecord>,
    first_line: Option<u32>,
    last_line: Option<u32>,
}

impl DiffCollection {
    /// Validate and collect raw diff lines.
    ///
    /// Fails on the first blank or malformed line; the error lists every
    /// problem of that line. A repeated line number replaces the earlier
    /// record but keeps its position.
    pub fn from_lines<I, S>(lines: I) -> DiffResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collection = Self::default();

        for (position, raw) in lines.into_iter().enumerate() {
            let raw = raw.as_ref();
            let index = position + 1;

            if raw.trim().is_empty() {
                return Err(DiffError::EmptyLine { index });
            }

            let record = parse_record(raw).map_err(|problems| DiffError::InvalidLine {
                index,
                raw: raw.to_string(),
                problems,
            })?;
            collection.insert(record);
        }

        tracing::debug!(
            "[diff] collected {} diff lines spanning {:?}",
            collection.len(),
            collection.range()
        );

        Ok(collection)
    }

    fn insert(&mut self, record: DiffRecord) {
        let line = record.line;
        if self.first_line.is_none_or(|first| line < first) {
            self.first_line = Some(line);
        }
        if self.last_line.is_none_or(|last| line > last) {
            self.last_line = Some(line);
        }
        self.records.insert(line, record);
    }

    /// Cached first and last line numbers
    pub fn range(&self) -> DiffRange {
        DiffRange {
            start: self.first_line,
            end: self.last_line,
        }
    }

    /// Set the symbol of the record at `line` unless it already has one.
    ///
    /// Returns `true` only when the assignment happened; a missing record or
    /// an earlier label leaves the collection untouched.
    pub fn try_to_set_symbol(&mut self, line: u32, symbol: &str) -> bool {
        match self.records.get_mut(&line) {
            Some(record) if record.symbol.is_none() => {
                record.symbol = Some(symbol.to_string());
                true
            }
            _ => false,
        }
    }

    /// Whether any recorded line falls within `start..=end`.
    pub fn has_diff_in_range(&self, start: u32, end: u32) -> bool {
        let (Some(first), Some(last)) = (self.first_line, self.last_line) else {
            return false;
        };
        if start > end || end < first || start > last {
            return false;
        }

        let low = start.max(first);
        let high = end.min(last);
        // Scan whichever side is smaller: the queried lines or the records
        if (high - low) as usize >= self.records.len() {
            self.records
                .keys()
                .any(|&line| line >= low && line <= high)
        } else {
            (low..=high).any(|line| self.records.contains_key(&line))
        }
    }

    pub fn get(&self, line: u32) -> Option<&DiffRecord> {
        self.records.get(&line)
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &DiffRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for DiffCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

/// Parse `<line>|<status>|<content...>`, collecting every problem found.
fn parse_record(raw: &str) -> Result<DiffRecord, Vec<DiffProblem>> {
    let mut fields = raw.split(FIELD_SEPARATOR);
    let line_field = fields.next().unwrap_or_default();
    let status_field = fields.next().unwrap_or_default();
    let content = fields.collect::<Vec<_>>().join("|");

    let mut problems = Vec::new();

    let line = match line_field.trim().parse::<i64>() {
        Ok(value) if value < 1 => {
            problems.push(DiffProblem::LineNotPositive);
            None
        }
        Ok(value) => match u32::try_from(value) {
            Ok(line) => Some(line),
            Err(_) => {
                problems.push(DiffProblem::LineNotInteger);
                None
            }
        },
        Err(_) => {
            problems.push(DiffProblem::LineNotInteger);
            None
        }
    };

    let status = ChangeStatus::parse(status_field);
    if status.is_none() {
        problems.push(DiffProblem::InvalidStatus);
    }

    if content.is_empty() {
        problems.push(DiffProblem::EmptyContent);
    }

    match (line, status) {
        (Some(line), Some(status)) if problems.is_empty() => {
            Ok(DiffRecord::new(line, status, content))
        }
        _ => Err(problems),
    }
}
