//! Line and column lookup for rendering diagnostics.

use kiln_ir::Span;

/// Byte offsets of every line start in a source file.
///
/// Built once per file so each diagnostic costs a binary search rather than
/// a scan.
///
/// ```
/// use kiln_diagnostic::span_utils::LineTable;
///
/// let source = "func f\n  (x: Int)";
/// let table = LineTable::build(source);
/// assert_eq!(table.line_col(source, 0), (1, 1));
/// assert_eq!(table.line_col(source, 9), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineTable {
    starts: Vec<u32>,
}

impl LineTable {
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineTable { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.starts[(line - 1) as usize] as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

/// 1-based (line, column) of `offset` without building a table.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    LineTable::build(source).line_col(source, offset)
}

/// 1-based (line, column) where `span` starts.
pub fn span_start(source: &str, span: Span) -> (u32, u32) {
    offset_to_line_col(source, span.start)
}
