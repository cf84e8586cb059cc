use super::classify::LineRecord;

/// Forward cursor over classified lines with one line of lookahead.
///
/// The builder reads a line with [`Iterator::next`], may [`peek`] at the one
/// after it, and may [`push_back`] the line it just read so it is offered
/// again once the open block has been closed.
///
/// [`peek`]: LineCursor::peek
/// [`push_back`]: LineCursor::push_back
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [LineRecord],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [LineRecord]) -> Self {
        Self { lines, pos: 0 }
    }

    /// The line after the one last returned by `next`.
    pub fn peek(&self) -> Option<&'a LineRecord> {
        self.lines.get(self.pos)
    }

    /// Rewinds by one line.
    pub fn push_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = &'a LineRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line)
    }
}
