use log::{debug, info, warn};

use prize_draw::builder::Builder;
use prize_draw::random::RngSource;
use prize_draw::reveal::{reveal_plan, RevealEvent, RevealTiming};
use prize_draw::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::draw::config_reader::*;
use crate::draw::export::*;
use crate::draw::io_common::*;

pub mod config_reader;
pub mod export;
pub mod io_common;
mod io_csv;
mod io_excel;

pub const DEFAULT_ACTIVITY: &str = "Lucky draw";

#[derive(Debug, Snafu)]
pub enum DrawCliError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The file {path} does not contain any worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("Error opening file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error writing file {path}"))]
    CsvWrite { source: csv::Error, path: String },
    #[snafu(display("Error writing workbook {path}"))]
    XlsxWrite {
        source: rust_xlsxwriter::XlsxError,
        path: String,
    },
    #[snafu(display("Error reading file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Expected a number for {what}"))]
    ParsingJsonNumber { what: String },
    #[snafu(display("Error writing file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The configuration file has no parent directory"))]
    MissingParentDir {},

    #[snafu(display("{path}: the file needs a header row and at least one row of data"))]
    NotEnoughRows { path: String },
    #[snafu(display("{path}: the header row is empty"))]
    EmptyHeader { path: String },
    #[snafu(display("{path}: all the rows are empty"))]
    NoDataRows { path: String },
    #[snafu(display("Select the column with the names of the participants among: {available}"))]
    ColumnNotSelected { available: String },
    #[snafu(display("Column {column:?} not found, the columns are: {available}"))]
    UnknownColumn { column: String, available: String },
    #[snafu(display("Column {column:?} does not contain any name"))]
    NoParticipantsInColumn { column: String },
    #[snafu(display("No participants file: use --input or participantSources"))]
    NoParticipantSource {},
    #[snafu(display("Input type {provider:?} is not supported (expected xlsx or csv)"))]
    UnknownProvider { provider: String },
    #[snafu(display("Prize {arg:?} should be written as NAME=COUNT"))]
    InvalidPrize { arg: String },
    #[snafu(display("No prizes: use --prize or prizes"))]
    NoPrizes {},
    #[snafu(display("Draw error: {source}"))]
    DrawFailed { source: DrawErrors },
    #[snafu(display("There are no results to export"))]
    NothingToExport {},
    #[snafu(display("Difference detected between the draw summary and the reference summary"))]
    ReferenceMismatch {},

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DrawCliResult<T> = Result<T, DrawCliError>;

/// What to do with a draw, besides running it.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RunOptions {
    /// 'stdout' or a file path for the JSON summary.
    pub out: Option<String>,
    /// File path for the CSV list of winners.
    pub export: Option<String>,
    /// A previous summary that must match the new one.
    pub reference: Option<String>,
    pub preview: bool,
    pub animate: bool,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub activity: String,
    pub participants: usize,
    #[serde(rename = "totalWinners")]
    pub total_winners: usize,
    pub seed: Option<String>,
}

fn result_to_json(result: &DrawResult) -> Vec<JSValue> {
    result
        .iter()
        .map(|(prize, winners)| {
            json!({
                "prize": prize,
                "count": winners.len(),
                "winners": winners,
            })
        })
        .collect()
}

pub fn build_summary_js(config: &DrawConfig, num_participants: usize, rv: &DrawResult) -> JSValue {
    let c = SummaryConfig {
        activity: config.activity_name(),
        participants: num_participants,
        total_winners: rv.total_winners(),
        seed: config.rules.random_seed.clone(),
    };
    json!({
        "config": c,
        "results": result_to_json(rv) })
}

/// Reads the participants of one source, following the column selection of the source.
fn read_participants(root: &Path, source: &ParticipantSource, preview: bool) -> DrawCliResult<Vec<String>> {
    let p: PathBuf = root.join(&source.file_path);
    let path = p.as_path().display().to_string();
    info!("Attempting to read participants file {:?}", path);
    let table = match source.provider.as_str() {
        "xlsx" | "excel" => io_excel::read_excel_table(&path, source.excel_worksheet_name.as_deref())?,
        "csv" => io_csv::read_csv_table(&path)?,
        x => {
            return UnknownProviderSnafu {
                provider: x.to_string(),
            }
            .fail()
        }
    };
    if preview {
        println!("{}: columns: {}", path, table.column_names().join(", "));
    }
    let col = table.select_column(source.column.as_deref())?;
    if preview {
        println!("Preview of column {:?}:", table.column_name(col));
        for v in table.preview(col, PREVIEW_ROWS) {
            println!("  {}", v);
        }
    }
    let participants = table.participants(col)?;
    info!(
        "Read {} participants out of {} rows from column {:?} of {:?}",
        participants.len(),
        table.num_rows(),
        table.column_name(col),
        path
    );
    Ok(participants)
}

fn announce(result: &DrawResult, timing: &RevealTiming) {
    for step in reveal_plan(result, timing) {
        match step.event {
            RevealEvent::Start => info!("Revealing {} prizes", result.len()),
            RevealEvent::TierStart { tier, count } => println!("{} ({})", tier, count),
            RevealEvent::Winner { position, name, .. } => println!("  {}. {}", position, name),
            RevealEvent::TierEnd { tier } => debug!("announce: {} done", tier),
            RevealEvent::Finished => println!("All prizes have been drawn."),
        }
        if !step.delay.is_zero() {
            thread::sleep(step.delay);
        }
    }
}

/// Runs a complete draw: reads the participants, checks the prizes, draws and
/// writes the outputs requested in the options.
pub fn run_draw(config: &DrawConfig, root: &Path, options: &RunOptions) -> DrawCliResult<Option<DrawResult>> {
    info!("config: {:?}", config);
    if config.participant_sources.is_empty() {
        return NoParticipantSourceSnafu {}.fail();
    }

    let mut participants: Vec<String> = Vec::new();
    for source in config.participant_sources.iter() {
        let mut ps = read_participants(root, source, options.preview)?;
        participants.append(&mut ps);
    }
    if options.preview {
        return Ok(None);
    }

    let mut builder = Builder::new()
        .participants(&participants)
        .context(DrawFailedSnafu {})?;
    if config.prizes.is_empty() {
        return NoPrizesSnafu {}.fail();
    }
    for prize in config.prizes.iter() {
        builder
            .add_tier(&prize.name, prize.count()?)
            .context(DrawFailedSnafu {})?;
    }
    info!(
        "Drawing {} winners among {} participants",
        builder.total_winners(),
        builder.participant_names().len()
    );

    let mut rng = match config.rules.seed()? {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let result = builder.draw(&mut rng).context(DrawFailedSnafu {})?;
    info!("Draw done: {:?}", result);

    let summary_to_stdout = options.out.as_deref() == Some("stdout");
    if !summary_to_stdout {
        let timing = if options.animate {
            RevealTiming::default()
        } else {
            RevealTiming::instant()
        };
        announce(&result, &timing);
    }

    let summary_js = build_summary_js(config, builder.participant_names().len(), &result);
    let pretty_js_summary =
        serde_json::to_string_pretty(&summary_js).context(ParsingJsonSnafu {})?;
    match options.out.as_deref() {
        Some("stdout") => println!("{}", pretty_js_summary),
        Some(path) => {
            fs::write(path, &pretty_js_summary).context(WritingOutputSnafu { path })?;
            info!("Summary written to {:?}", path);
        }
        None => {}
    }

    let export_path: Option<PathBuf> = match (&options.export, &config.output_settings.output_directory) {
        (Some(p), _) => Some(PathBuf::from(p)),
        (None, Some(dir)) => Some(Path::new(dir).join(default_export_name(&config.activity_name(), &today()))),
        (None, None) => None,
    };
    if let Some(p) = export_path {
        write_winners(&p, &config.activity_name(), &result)?;
    }

    // The reference summary, if provided for comparison
    if let Some(reference_p) = &options.reference {
        check_reference(reference_p, &pretty_js_summary)?;
    }

    Ok(Some(result))
}

pub fn check_reference(reference_path: &str, pretty_js_summary: &str) -> DrawCliResult<()> {
    let summary_ref = read_summary(reference_path)?;
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_summary {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_summary, "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    info!("The draw matches the reference summary {:?}", reference_path);
    Ok(())
}

/// Combines the configuration file (if any) with the command line flags.
/// Flags take precedence.
pub fn config_from_args(args: &Args) -> DrawCliResult<(DrawConfig, PathBuf)> {
    let (mut config, mut root) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root = Path::new(config_path)
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            (config, root)
        }
        None => (DrawConfig::default(), PathBuf::new()),
    };

    if let Some(input) = &args.input {
        // Paths given on the command line are relative to the working directory.
        root = PathBuf::new();
        let provider = match &args.input_type {
            Some(t) => t.clone(),
            None => infer_provider(input),
        };
        config.participant_sources = vec![ParticipantSource {
            provider,
            file_path: input.clone(),
            column: args.column.clone(),
            excel_worksheet_name: args.excel_worksheet_name.clone(),
        }];
    } else {
        for source in config.participant_sources.iter_mut() {
            if args.column.is_some() {
                source.column = args.column.clone();
            }
            if args.excel_worksheet_name.is_some() {
                source.excel_worksheet_name = args.excel_worksheet_name.clone();
            }
        }
    }

    if !args.prize.is_empty() {
        let mut prizes: Vec<PrizeConfig> = Vec::new();
        for arg in args.prize.iter() {
            prizes.push(parse_prize_arg(arg)?);
        }
        config.prizes = prizes;
    }
    if let Some(seed) = args.seed {
        config.rules.random_seed = Some(seed.to_string());
    }
    if let Some(activity) = &args.activity {
        config.output_settings.activity_name = Some(activity.clone());
    }
    Ok((config, root))
}

pub fn run_from_args(args: &Args) -> DrawCliResult<()> {
    let (config, root) = config_from_args(args)?;
    let options = RunOptions {
        out: args.out.clone(),
        export: args.export.clone(),
        reference: args.reference.clone(),
        preview: args.preview,
        animate: args.animate,
    };
    run_draw(&config, &root, &options)?;
    Ok(())
}
