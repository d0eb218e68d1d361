use clap::Parser;

/// This is an interactive quiz on past recruiting outcomes.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the settings of the quiz. See the manual for
    /// the list of options. The flags below override the values of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, optional) The Excel file with the candidates. If not provided, the quiz
    /// looks for data.xlsx, then data.xlsx.xlsx in the current directory.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default: first worksheet) The name of the worksheet to read in the input file.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (default 30) The maximum number of candidates in the quiz.
    #[clap(long, value_parser)]
    pub sample_size: Option<usize>,

    /// (number, optional) A seed for drawing the candidates. Without it, every session
    /// draws a different set of candidates.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// (default quiz_results.xlsx) Where to write the detailed results at the end of the quiz.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path, optional) If specified, a summary of the session is also written in
    /// JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub summary: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
