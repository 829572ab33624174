use crate::scoring::ReadabilityResult;
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// A scored headline together with its raw size
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineReport {
    pub headline: String,
    /// Space-separated segments of the raw headline
    pub word_count: usize,
    /// Characters in the raw headline
    pub char_count: usize,
    pub readability: ReadabilityResult,
}

impl HeadlineReport {
    pub fn new(headline: impl Into<String>, readability: ReadabilityResult) -> Self {
        let headline = headline.into();
        Self {
            word_count: headline.split(' ').count(),
            char_count: headline.chars().count(),
            headline,
            readability,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &HeadlineReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &HeadlineReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &HeadlineReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.headline.bold().blue())?;
        writeln!(
            self.writer,
            "{} words, {} characters",
            report.word_count, report.char_count
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, result: &ReadabilityResult) -> anyhow::Result<()> {
        let width = result
            .fields()
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        for (name, value) in result.fields() {
            writeln!(
                self.writer,
                "  {:<width$}  {}",
                name,
                format_score(value),
                width = width
            )?;
        }
        Ok(())
    }

    fn write_summary(&mut self, result: &ReadabilityResult) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}  {} {}s",
            "Grade:".bold(),
            grade_label(result.median_grade),
            "Reading time:".bold(),
            format_score(result.reading_time)
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &HeadlineReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_scores(&report.readability)?;
        self.write_summary(&report.readability)?;
        Ok(())
    }
}

/// Two decimals, or `n/a` for non-numeric scores
fn format_score(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "n/a".to_string()
    }
}

fn grade_label(grade: f64) -> ColoredString {
    let text = format_score(grade);
    if !grade.is_finite() {
        text.dimmed()
    } else if grade <= 8.0 {
        text.green()
    } else if grade <= 12.0 {
        text.yellow()
    } else {
        text.red()
    }
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score;

    fn render(format: OutputFormat, report: &HeadlineReport) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, Box::new(&mut buffer));
            writer.write_report(report).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_counts_raw_headline() {
        let report = HeadlineReport::new("How to Win  Friends!", score("How to Win  Friends!"));
        assert_eq!(report.word_count, 5);
        assert_eq!(report.char_count, 20);
    }

    #[test]
    fn test_json_output_nests_readability() {
        let report = HeadlineReport::new("How to Win Friends", score("How to Win Friends"));
        let output = render(OutputFormat::Json, &report);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["wordCount"], 4);
        assert_eq!(value["charCount"], 18);
        assert_eq!(value["readability"]["readingTime"], 0.96);
    }

    #[test]
    fn test_terminal_output_lists_every_score() {
        colored::control::set_override(false);
        let report = HeadlineReport::new("How to Win Friends", score("How to Win Friends"));
        let output = render(OutputFormat::Terminal, &report);
        for (name, _) in report.readability.fields() {
            assert!(output.contains(name), "missing {}", name);
        }
        assert!(output.contains("4 words, 18 characters"));
        assert!(output.contains("Reading time: 0.96s"));
    }

    #[test]
    fn test_format_score_handles_non_numeric() {
        assert_eq!(format_score(f64::NAN), "n/a");
        assert_eq!(format_score(-2.234), "-2.23");
    }
}
