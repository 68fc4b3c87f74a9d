// Primitives for reading CSV files.

use crate::draw::*;

pub fn read_csv_table(path: &str) -> DrawCliResult<ParsedTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        // Lines start at 1 to respect the conventions of spreadsheets.
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, line);
        raw_rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    ParsedTable::from_raw_rows(path, raw_rows)
}
