use clap::Parser;

/// Draws the winners of a raffle from a spreadsheet of participants.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file describing the draw in JSON format: participants files, prizes, seed.
    /// The other flags override the values of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The spreadsheet containing the participants. The first row must contain the names of the columns.
    /// Setting this option overrides the participants sources of the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (xlsx or csv, optional) The type of the input. By default, it is guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (column name) The column holding the names of the participants. It may be omitted when the input
    /// has a single column.
    #[clap(long, value_parser)]
    pub column: Option<String>,

    /// (default: first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (NAME=COUNT, repeated) A prize and its number of winners, for example "Grand prize=1".
    /// Prizes are drawn and announced in the order of the flags.
    #[clap(short, long, value_parser)]
    pub prize: Vec<String>,

    /// (integer, optional) Makes the draw reproducible: the same seed with the same inputs gives the same winners.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// The name of the event, used in the summary and in the exported file.
    #[clap(long, value_parser)]
    pub activity: Option<String>,

    /// (file path or 'stdout') If specified, the summary of the draw will be written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) If specified, the winners will be written to the given location: a workbook for .xlsx files, CSV otherwise.
    #[clap(short, long, value_parser)]
    pub export: Option<String>,

    /// (file path) A summary of a previous draw in JSON format. If provided, prizedraw will
    /// check that the new summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// Prints the columns of the input and the first values of the selected column, without drawing.
    #[clap(long, takes_value = false)]
    pub preview: bool,

    /// Reveals the winners one by one, with pauses.
    #[clap(long, takes_value = false)]
    pub animate: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
