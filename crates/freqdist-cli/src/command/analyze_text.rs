use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use freqdist_stats::dataset::{self, Dataset};

use crate::{command::AnalysisArg, input};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeTextArg {
    /// Values separated by commas, spaces or line breaks
    pub text: Option<String>,

    /// Read values from this file instead (stdin if neither is given)
    #[arg(long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    #[clap(flatten)]
    pub analysis: AnalysisArg,
}

pub(crate) fn run(arg: &AnalyzeTextArg) -> anyhow::Result<()> {
    let text = input::read_manual_entry(arg.text.as_deref(), arg.input.as_deref())?;
    let tokens = dataset::split_manual_entry(&text);
    tracing::debug!(tokens = tokens.len(), "parsed manual entry");
    let dataset = Dataset::from_tokens(tokens).context("No values entered")?;
    arg.analysis.run(&dataset, input::MANUAL_VARIABLE_NAME)
}
