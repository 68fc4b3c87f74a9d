use crate::draw::*;

/// Number of values shown when previewing a column.
pub const PREVIEW_ROWS: usize = 5;

/// A table read from a spreadsheet, after cleaning.
///
/// Only the columns with a name in the header are kept. Values are trimmed
/// and the rows that are entirely blank are dropped.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedTable {
    /// (position in the file, name)
    columns: Vec<(usize, String)>,
    rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Builds a table from raw rows, the first one being the header.
    pub fn from_raw_rows(path: &str, raw_rows: Vec<Vec<String>>) -> DrawCliResult<ParsedTable> {
        if raw_rows.len() < 2 {
            return NotEnoughRowsSnafu { path }.fail();
        }
        let mut iter = raw_rows.into_iter();
        let header = iter.next().unwrap_or_default();
        let columns: Vec<(usize, String)> = header
            .iter()
            .enumerate()
            .map(|(idx, h)| (idx, h.trim().to_string()))
            .filter(|(_, h)| !h.is_empty())
            .collect();
        debug!("from_raw_rows: {:?} columns: {:?}", path, columns);
        if columns.is_empty() {
            return EmptyHeaderSnafu { path }.fail();
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for (idx, raw) in iter.enumerate() {
            let row: Vec<String> = raw.iter().map(|s| s.trim().to_string()).collect();
            let blank = columns
                .iter()
                .all(|(col, _)| row.get(*col).map_or(true, |s| s.is_empty()));
            if blank {
                debug!("from_raw_rows: skipping blank row {}", idx + 2);
            } else {
                rows.push(row);
            }
        }
        if rows.is_empty() {
            return NoDataRowsSnafu { path }.fail();
        }
        Ok(ParsedTable { columns, rows })
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(_, name)| name.clone()).collect()
    }

    /// The name of the column at the given index of `column_names`.
    pub fn column_name(&self, col: usize) -> &str {
        self.columns
            .get(col)
            .map(|(_, name)| name.as_str())
            .unwrap_or("")
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Finds a column by its name. A table with a single column does not
    /// need a name.
    pub fn select_column(&self, name: Option<&str>) -> DrawCliResult<usize> {
        let available = self.column_names().join(", ");
        match name.map(|s| s.trim()) {
            Some(n) => self
                .columns
                .iter()
                .position(|(_, c)| c == n)
                .context(UnknownColumnSnafu {
                    column: n,
                    available,
                }),
            None if self.columns.len() == 1 => Ok(0),
            None => ColumnNotSelectedSnafu { available }.fail(),
        }
    }

    fn values(&self, col: usize) -> impl Iterator<Item = &str> {
        let file_idx = self.columns.get(col).map(|(idx, _)| *idx);
        self.rows.iter().map(move |row| {
            file_idx
                .and_then(|idx| row.get(idx))
                .map(|s| s.as_str())
                .unwrap_or("")
        })
    }

    /// The first values of a column, blanks included.
    pub fn preview(&self, col: usize, n: usize) -> Vec<String> {
        self.values(col).take(n).map(|s| s.to_string()).collect()
    }

    /// The non-blank values of a column, in file order.
    pub fn participants(&self, col: usize) -> DrawCliResult<Vec<String>> {
        let res: Vec<String> = self
            .values(col)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if res.is_empty() {
            return NoParticipantsInColumnSnafu {
                column: self.column_name(col),
            }
            .fail();
        }
        Ok(res)
    }
}
