//! Input sources: CSV files and manual text entry.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::Context;

/// Variable name used for manually entered data.
pub(crate) const MANUAL_VARIABLE_NAME: &str = "Manual data";

/// One column extracted from a CSV file, with missing cells dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsvColumn {
    pub name: String,
    pub cells: Vec<String>,
}

fn csv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<R>
where
    R: Read,
{
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Convert a delimiter given on the command line to the byte the CSV reader expects
pub(crate) fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    u8::try_from(delimiter)
        .map_err(|_| anyhow::anyhow!("Delimiter must be a single-byte character: {delimiter:?}"))
}

/// Read the header names of a CSV file
pub(crate) fn read_csv_headers(path: &Path, delimiter: u8) -> anyhow::Result<Vec<String>> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    headers_from_reader(file, delimiter)
        .with_context(|| format!("Failed to read CSV headers: {}", path.display()))
}

/// Read one column of a CSV file
///
/// # Arguments
/// * `path` - CSV file with a header row
/// * `column` - Header of the column to read; the first column when `None`
/// * `delimiter` - Field delimiter byte
pub(crate) fn read_csv_column(
    path: &Path,
    column: Option<&str>,
    delimiter: u8,
) -> anyhow::Result<CsvColumn> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    let column = column_from_reader(file, column, delimiter)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    tracing::debug!(
        column = %column.name,
        cells = column.cells.len(),
        path = %path.display(),
        "read CSV column"
    );
    Ok(column)
}

fn headers_from_reader<R>(reader: R, delimiter: u8) -> anyhow::Result<Vec<String>>
where
    R: Read,
{
    let mut reader = csv_reader(reader, delimiter);
    let headers = reader.headers().context("Failed to parse header row")?;
    Ok(headers.iter().map(str::to_owned).collect())
}

fn column_from_reader<R>(
    reader: R,
    column: Option<&str>,
    delimiter: u8,
) -> anyhow::Result<CsvColumn>
where
    R: Read,
{
    let mut reader = csv_reader(reader, delimiter);
    let headers = reader
        .headers()
        .context("Failed to parse header row")?
        .clone();

    let index = match column {
        Some(name) => headers.iter().position(|h| h == name).ok_or_else(|| {
            anyhow::anyhow!(
                "Column '{name}' not found (available: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?,
        None if headers.is_empty() => anyhow::bail!("CSV file has no columns"),
        None => 0,
    };

    let mut cells = vec![];
    let mut missing = 0;
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to parse record {}", line + 1))?;
        match record.get(index).filter(|cell| !cell.is_empty()) {
            Some(cell) => cells.push(cell.to_owned()),
            None => missing += 1,
        }
    }
    if missing > 0 {
        tracing::info!(missing, "dropped missing cells");
    }

    Ok(CsvColumn {
        name: headers[index].to_owned(),
        cells,
    })
}

/// Read manually entered data
///
/// Uses `text` when given, otherwise the contents of `input`, otherwise
/// standard input.
pub(crate) fn read_manual_entry(
    text: Option<&str>,
    input: Option<&Path>,
) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    if let Some(path) = input {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read data from stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "name,score,grade\n\
                          ann,7,b\n\
                          bob,,a\n\
                          cid, 9 ,a\n\
                          dee,7\n";

    #[test]
    fn test_headers() {
        let headers = headers_from_reader(SAMPLE.as_bytes(), b',').unwrap();
        assert_eq!(headers, ["name", "score", "grade"]);
    }

    #[test]
    fn test_named_column_drops_missing_cells() {
        let column = column_from_reader(SAMPLE.as_bytes(), Some("score"), b',').unwrap();
        assert_eq!(column.name, "score");
        assert_eq!(column.cells, ["7", "9", "7"]);
    }

    #[test]
    fn test_short_records_count_as_missing() {
        let column = column_from_reader(SAMPLE.as_bytes(), Some("grade"), b',').unwrap();
        assert_eq!(column.cells, ["b", "a", "a"]);
    }

    #[test]
    fn test_first_column_by_default() {
        let column = column_from_reader(SAMPLE.as_bytes(), None, b',').unwrap();
        assert_eq!(column.name, "name");
        assert_eq!(column.cells.len(), 4);
    }

    #[test]
    fn test_unknown_column() {
        let err = column_from_reader(SAMPLE.as_bytes(), Some("height"), b',').unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = "a;b\n1;2\n3;4\n";
        let column = column_from_reader(data.as_bytes(), Some("b"), b';').unwrap();
        assert_eq!(column.cells, ["2", "4"]);
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert!(delimiter_byte('→').is_err());
    }

    #[test]
    fn test_manual_text_takes_precedence() {
        let text = read_manual_entry(Some("1 2 3"), Some(Path::new("/nonexistent"))).unwrap();
        assert_eq!(text, "1 2 3");
    }
}
