pub mod output;

pub use output::{create_writer, HeadlineReport, OutputFormat, OutputWriter};

use anyhow::Result;
use std::io::BufRead;

/// Read one headline from `reader`, without its line ending
pub fn read_headline<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
