use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use freqdist_stats::{
    classify::AnalysisMode,
    config::PolicyConfig,
    dataset::Dataset,
    summary::{AnalysisReport, AnalysisRequest},
};
use tracing_subscriber::EnvFilter;

use crate::{report, util};

use self::{
    analyze_file::AnalyzeFileArg, analyze_text::AnalyzeTextArg, list_columns::ListColumnsArg,
};

mod analyze_file;
mod analyze_text;
mod list_columns;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// What to analyze
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze one column of a CSV file
    AnalyzeFile(#[clap(flatten)] AnalyzeFileArg),
    /// Analyze values entered as text
    AnalyzeText(#[clap(flatten)] AnalyzeTextArg),
    /// List the columns of a CSV file
    ListColumns(#[clap(flatten)] ListColumnsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    dispatch(&args.mode)
}

fn dispatch(mode: &Mode) -> anyhow::Result<()> {
    match mode {
        Mode::AnalyzeFile(arg) => analyze_file::run(arg)?,
        Mode::AnalyzeText(arg) => analyze_text::run(arg)?,
        Mode::ListColumns(arg) => list_columns::run(arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// One row per distinct value
    Simple,
    /// Equal-width class intervals
    Grouped,
}

impl From<ModeArg> for AnalysisMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => Self::Simple,
            ModeArg::Grouped => Self::Grouped,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options shared by the analysis subcommands
#[derive(Debug, Clone, Args)]
pub(crate) struct AnalysisArg {
    /// Analysis mode; inferred from the data when omitted
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Number of classes in grouped mode; Sturges' rule when omitted
    #[arg(long)]
    bins: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Policy config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl AnalysisArg {
    /// Analyze a dataset and write the report in the requested format
    pub(crate) fn run(&self, dataset: &Dataset, variable_name: &str) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => util::read_policy_config_file(path)?,
            None => PolicyConfig::default(),
        };
        let request = AnalysisRequest {
            variable_name: Some(variable_name.to_owned()),
            mode: self.mode.map(AnalysisMode::from),
            bin_count: self.bins,
        };

        let report = AnalysisReport::analyze(dataset, &request, &config)
            .with_context(|| format!("Failed to analyze {variable_name}"))?;
        tracing::debug!(
            kind = %report.variable_kind,
            mode = %report.mode,
            rows = report.frequency_table.len(),
            "analysis finished"
        );

        let mut output = util::Output::from_output_path(self.output.clone())?;
        match self.format {
            OutputFormat::Json => output.write_json(&report)?,
            OutputFormat::Text => {
                let result = report::write_report(&mut output, &report)
                    .and_then(|()| io::Write::flush(&mut output));
                result.with_context(|| {
                    format!("Failed to write report to {}", output.display_path())
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::*;

    fn path_arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn test_parse_analyze_file() {
        let args = CommandArgs::try_parse_from([
            "freqdist",
            "analyze-file",
            "data.csv",
            "--column",
            "score",
            "--mode",
            "grouped",
            "--bins",
            "6",
            "--format",
            "json",
        ])
        .unwrap();
        let Mode::AnalyzeFile(arg) = args.mode else {
            panic!("unexpected subcommand");
        };
        assert_eq!(arg.column.as_deref(), Some("score"));
        assert_eq!(arg.analysis.mode, Some(ModeArg::Grouped));
        assert_eq!(arg.analysis.bins, Some(6));
        assert_eq!(arg.analysis.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_analyze_text_defaults() {
        let args =
            CommandArgs::try_parse_from(["freqdist", "-v", "analyze-text", "1,2,3"]).unwrap();
        assert!(args.verbose);
        let Mode::AnalyzeText(arg) = args.mode else {
            panic!("unexpected subcommand");
        };
        assert_eq!(arg.text.as_deref(), Some("1,2,3"));
        assert_eq!(arg.analysis.mode, None);
        assert_eq!(arg.analysis.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result =
            CommandArgs::try_parse_from(["freqdist", "analyze-text", "1", "--mode", "binned"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_file_writes_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("scores.csv");
        let report = dir.path().join("report.json");
        fs::write(&data, "name,score\nann,7\nbob,9\ncid,\ndee,7\n").unwrap();

        let args = CommandArgs::try_parse_from([
            "freqdist",
            "analyze-file",
            path_arg(&data),
            "--column",
            "score",
            "--format",
            "json",
            "--output",
            path_arg(&report),
        ])
        .unwrap();
        dispatch(&args.mode).unwrap();

        let text = fs::read_to_string(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["variable_name"], "score");
        assert_eq!(json["mode"], "simple");
        assert_eq!(json["n"], 3);
        assert_eq!(json["frequency_table"]["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["summary_statistics"]["type"], "numeric");
        assert_eq!(json["summary_statistics"]["mode"], 7.0);
        assert_eq!(json["box_plot"]["outliers"], serde_json::json!([]));
    }

    #[test]
    fn test_analyze_file_reports_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("scores.csv");
        fs::write(&data, "name,score\nann,7\n").unwrap();

        let args = CommandArgs::try_parse_from([
            "freqdist",
            "analyze-file",
            path_arg(&data),
            "--column",
            "grade",
        ])
        .unwrap();
        let message = format!("{:#}", dispatch(&args.mode).unwrap_err());
        assert!(message.contains("Column 'grade' not found (available: name, score)"));
    }

    #[test]
    fn test_analyze_text_applies_policy_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("policy.json");
        let report = dir.path().join("report.txt");
        fs::write(&config, r#"{ "discrete_threshold": 3 }"#).unwrap();

        let args = CommandArgs::try_parse_from([
            "freqdist",
            "analyze-text",
            "1 2 3 4 5 6 7 8",
            "--bins",
            "2",
            "--config",
            path_arg(&config),
            "--output",
            path_arg(&report),
        ])
        .unwrap();
        dispatch(&args.mode).unwrap();

        let text = fs::read_to_string(&report).unwrap();
        assert!(text.contains("Variable   : Manual data"));
        assert!(text.contains("continuous numeric"));
        assert!(text.contains("[ 1.00 ; 4.50 >"));
        assert!(text.contains("[ 4.50 ; 8.00 ]"));
    }

    #[test]
    fn test_invalid_policy_config_aborts_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("policy.json");
        let report = dir.path().join("report.txt");
        fs::write(&config, r#"{ "min_bins": 0 }"#).unwrap();

        let args = CommandArgs::try_parse_from([
            "freqdist",
            "analyze-text",
            "1,2,3",
            "--config",
            path_arg(&config),
            "--output",
            path_arg(&report),
        ])
        .unwrap();
        let message = format!("{:#}", dispatch(&args.mode).unwrap_err());
        assert!(message.contains("min_bins must be at least 1"));
        assert!(!report.exists());
    }
}
