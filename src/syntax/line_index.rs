//! Byte offset to line lookup for a single source text.

/// Start offsets of every line in a source text.
///
/// Lines are split on `\n`, so `\r\n` files resolve to the same line numbers
/// as `\n` files; the trailing `\r` simply belongs to the line it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(offset, _)| offset + 1),
        );

        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// 0-based line containing `offset`.
    ///
    /// Offsets past the end of the text resolve to the last line.
    pub fn line_of(&self, offset: usize) -> u32 {
        let offset = offset.min(self.len);
        // line_starts[0] == 0, so the partition point is always >= 1
        (self.line_starts.partition_point(|&start| start <= offset) - 1) as u32
    }
}
