use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use freqdist_stats::dataset::Dataset;

use crate::{command::AnalysisArg, input};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeFileArg {
    /// Path to the CSV file (with a header row)
    pub path: PathBuf,

    /// Column to analyze (first column if not specified)
    #[arg(long)]
    pub column: Option<String>,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    #[clap(flatten)]
    pub analysis: AnalysisArg,
}

pub(crate) fn run(arg: &AnalyzeFileArg) -> anyhow::Result<()> {
    let delimiter = input::delimiter_byte(arg.delimiter)?;
    let column = input::read_csv_column(&arg.path, arg.column.as_deref(), delimiter)?;
    let dataset = Dataset::from_tokens(&column.cells)
        .with_context(|| format!("Column '{}' has no values", column.name))?;
    arg.analysis.run(&dataset, &column.name)
}
