use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::draw::*;

pub fn read_excel_table(path: &str, worksheet_name: Option<&str>) -> DrawCliResult<ParsedTable> {
    let wrange = get_range(path, worksheet_name)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for (idx, row) in wrange.rows().enumerate() {
        let lineno = idx + 1;
        let cells: Vec<String> = row.iter().map(|cell| read_cell(cell, lineno)).collect();
        debug!("read_excel_table: lineno: {:?} row: {:?}", lineno, cells);
        raw_rows.push(cells);
    }
    ParsedTable::from_raw_rows(path, raw_rows)
}

/// Renders a cell as text. Integral numbers are written without decimals,
/// dates as their serial number and error cells as blanks.
fn read_cell(cell: &DataType, lineno: usize) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Empty => String::new(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) | DataType::DateTime(f) => number_as_text(*f),
        DataType::Bool(b) => b.to_string(),
        DataType::Error(e) => {
            debug!("read_cell: line {}: error cell {:?} read as blank", lineno, e);
            String::new()
        }
    }
}

fn number_as_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> DrawCliResult<calamine::Range<DataType>> {
    debug!(
        "read_excel_file: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                name: worksheet_name,
                path,
            })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!(
                    "read_excel_file: path: {:?} worksheet: {:?}",
                    &path, &worksheet_name
                );
                Ok(wrange.clone())
            }
            [(worksheet_name, wrange), ..] => {
                warn!(
                    "{:?} has {} worksheets, using the first one ({:?}). Use --excel-worksheet-name to select another one.",
                    path,
                    all_worksheets.len(),
                    worksheet_name
                );
                Ok(wrange.clone())
            }
        }
    }
}
