//! Plain-text rendering of analysis reports
//!
//! Prints the detected summary, the frequency table, the summary measures and
//! the box-plot quartiles, fences and outliers in fixed-width columns.

use std::io::{self, Write};

use freqdist_stats::{
    box_plot::BoxPlotSummary,
    classify::AnalysisMode,
    frequency::FrequencyTable,
    summary::{AnalysisReport, SummaryStatistics},
};

/// Write a complete report
pub(crate) fn write_report<W>(out: &mut W, report: &AnalysisReport) -> io::Result<()>
where
    W: Write,
{
    write_detected_summary(out, report)?;
    writeln!(out)?;
    write_frequency_table(out, &report.frequency_table)?;
    writeln!(out)?;
    write_measures(out, &report.summary_statistics)?;
    if let Some(box_plot) = &report.box_plot {
        writeln!(out)?;
        write_box_plot(out, box_plot)?;
    }
    Ok(())
}

fn write_detected_summary<W>(out: &mut W, report: &AnalysisReport) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Detected Summary")?;
    writeln!(out, "================")?;
    writeln!(out, "  Sample (n) : {}", report.n)?;
    if let Some(name) = &report.variable_name {
        writeln!(out, "  Variable   : {name}")?;
    }
    writeln!(out, "  Kind       : {}", report.variable_kind)?;
    writeln!(out, "  Mode       : {}", report.mode)?;
    if let Some(bins) = report.suggested_bins {
        writeln!(out, "  Suggested classes (Sturges): {bins}")?;
    }
    Ok(())
}

fn write_frequency_table<W>(out: &mut W, table: &FrequencyTable) -> io::Result<()>
where
    W: Write,
{
    let grouped = table.mode == AnalysisMode::Grouped;

    writeln!(out, "Frequency Distribution Table")?;
    if grouped {
        writeln!(
            out,
            "  {:<24} {:>12} {:>8} {:>8} {:>8} {:>8} {:>9} {:>9}",
            "Interval", "Class mark", "fi", "hi", "Fi", "Hi", "hi%", "Hi%"
        )?;
    } else {
        writeln!(
            out,
            "  {:<24} {:>8} {:>8} {:>8} {:>8} {:>9} {:>9}",
            "Value", "fi", "hi", "Fi", "Hi", "hi%", "Hi%"
        )?;
    }
    // label(24) + mark(12) + 6 columns(8/9) + spaces
    let width = if grouped { 95 } else { 82 };
    writeln!(out, "  {}", "-".repeat(width))?;

    for row in &table.rows {
        let label = row.label.to_string();
        match row.label.as_interval() {
            Some(interval) => writeln!(
                out,
                "  {:<24} {:>12.2} {:>8} {:>8.4} {:>8} {:>8.4} {:>9} {:>9}",
                label,
                interval.class_mark,
                row.fi,
                row.hi,
                row.cum_fi,
                row.cum_hi,
                row.hi_percent,
                row.cum_hi_percent,
            )?,
            None => writeln!(
                out,
                "  {:<24} {:>8} {:>8.4} {:>8} {:>8.4} {:>9} {:>9}",
                label, row.fi, row.hi, row.cum_fi, row.cum_hi, row.hi_percent, row.cum_hi_percent,
            )?,
        }
    }
    if let Some(amplitude) = table.amplitude {
        writeln!(out, "  (Class amplitude: {amplitude:.2})")?;
    }
    Ok(())
}

fn write_measures<W>(out: &mut W, stats: &SummaryStatistics) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Measures")?;
    match stats {
        SummaryStatistics::Categorical { mode } => {
            writeln!(out, "  Mode               : {mode}")?;
        }
        SummaryStatistics::Numeric(stats) => {
            writeln!(out, "  Mode               : {:.2}", stats.mode)?;
            writeln!(out, "  Mean               : {:.2}", stats.mean)?;
            writeln!(out, "  Median             : {:.2}", stats.median)?;
            writeln!(out, "  Range              : {:.2}", stats.range)?;
            writeln!(out, "  Standard deviation : {:.2}", stats.standard_deviation)?;
            writeln!(out, "  Minimum            : {:.2}", stats.min)?;
            writeln!(out, "  Maximum            : {:.2}", stats.max)?;
        }
    }
    Ok(())
}

fn write_box_plot<W>(out: &mut W, box_plot: &BoxPlotSummary) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Box Plot")?;
    writeln!(
        out,
        "  Q1 / Q2 / Q3       : {:.2} / {:.2} / {:.2}",
        box_plot.q1, box_plot.q2, box_plot.q3
    )?;
    writeln!(out, "  IQR                : {:.2}", box_plot.iqr)?;
    writeln!(
        out,
        "  Tukey bounds       : [{:.2}, {:.2}]",
        box_plot.lower_bound, box_plot.upper_bound
    )?;
    writeln!(
        out,
        "  Whiskers           : [{:.2}, {:.2}]",
        box_plot.lower_fence, box_plot.upper_fence
    )?;
    if box_plot.outliers.is_empty() {
        writeln!(out, "  Outliers           : none")?;
    } else {
        let outliers = box_plot
            .outliers
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect::<Vec<_>>();
        writeln!(out, "  Outliers           : {}", outliers.join(", "))?;
    }
    Ok(())
}
