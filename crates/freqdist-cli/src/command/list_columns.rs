use std::path::PathBuf;

use clap::Args;

use crate::input;

#[derive(Debug, Clone, Args)]
pub(crate) struct ListColumnsArg {
    /// Path to the CSV file (with a header row)
    pub path: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

pub(crate) fn run(arg: &ListColumnsArg) -> anyhow::Result<()> {
    let delimiter = input::delimiter_byte(arg.delimiter)?;
    let headers = input::read_csv_headers(&arg.path, delimiter)?;
    for (index, name) in headers.iter().enumerate() {
        println!("{index:>3}  {name}");
    }
    Ok(())
}
