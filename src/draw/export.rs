// Writing the winners as a workbook or in CSV format.

use rust_xlsxwriter::Workbook;

use crate::draw::*;

/// Characters that cannot appear in file names on common systems.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const HEADER: [&str; 4] = ["activity", "prize", "position", "winner"];

pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// The local date, as used in export file names.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn default_export_name(activity: &str, date: &str) -> String {
    format!("{}_results_{}.xlsx", sanitize_file_name(activity), date)
}

/// Writes the winners to a workbook if the path ends with `.xlsx`, and in CSV
/// format otherwise.
pub fn write_winners(path: &Path, activity: &str, result: &DrawResult) -> DrawCliResult<()> {
    let is_xlsx = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("xlsx"));
    if is_xlsx {
        write_winners_xlsx(path, activity, result)
    } else {
        write_winners_csv(path, activity, result)
    }
}

/// Writes one line per winner: activity, prize, position (starting at 1), winner.
pub fn write_winners_csv(path: &Path, activity: &str, result: &DrawResult) -> DrawCliResult<()> {
    if result.is_empty() {
        return NothingToExportSnafu {}.fail();
    }
    let p = path.display().to_string();
    let mut wtr = csv::Writer::from_path(path).context(CsvWriteSnafu { path: p.clone() })?;
    wtr.write_record(HEADER)
        .context(CsvWriteSnafu { path: p.clone() })?;
    for (prize, winners) in result.iter() {
        for (idx, winner) in winners.iter().enumerate() {
            let position = (idx + 1).to_string();
            wtr.write_record([activity, prize, position.as_str(), winner.as_str()])
                .context(CsvWriteSnafu { path: p.clone() })?;
        }
    }
    wtr.flush().context(WritingOutputSnafu { path: p.clone() })?;
    info!("Winners exported to {:?}", p);
    Ok(())
}

/// Same layout as the CSV export, on a worksheet named `Results`.
pub fn write_winners_xlsx(path: &Path, activity: &str, result: &DrawResult) -> DrawCliResult<()> {
    if result.is_empty() {
        return NothingToExportSnafu {}.fail();
    }
    let p = path.display().to_string();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Results")
        .context(XlsxWriteSnafu { path: p.clone() })?;
    for (col, title) in HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *title)
            .context(XlsxWriteSnafu { path: p.clone() })?;
    }
    let mut row: u32 = 1;
    for (prize, winners) in result.iter() {
        for (idx, winner) in winners.iter().enumerate() {
            worksheet
                .write_string(row, 0, activity)
                .context(XlsxWriteSnafu { path: p.clone() })?;
            worksheet
                .write_string(row, 1, prize)
                .context(XlsxWriteSnafu { path: p.clone() })?;
            worksheet
                .write_number(row, 2, (idx + 1) as f64)
                .context(XlsxWriteSnafu { path: p.clone() })?;
            worksheet
                .write_string(row, 3, winner.as_str())
                .context(XlsxWriteSnafu { path: p.clone() })?;
            row += 1;
        }
    }
    workbook
        .save(path)
        .context(XlsxWriteSnafu { path: p.clone() })?;
    info!("Winners exported to {:?} ({} rows)", p, row - 1);
    Ok(())
}
