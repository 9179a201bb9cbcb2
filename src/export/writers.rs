use super::{HistoricalRow, WokeRow, HISTORICAL_HEADER, WOKE_HEADER};
use crate::errors::{Error, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub trait TableWriter {
    fn write_historical(&mut self, rows: &mut dyn Iterator<Item = HistoricalRow>) -> Result<usize>;
    fn write_woke(&mut self, rows: &mut dyn Iterator<Item = WokeRow>) -> Result<usize>;
}

/// Writes decision tables as delimited text, one header line then one line
/// per record.
///
/// Cell values never contain the delimiter: every occurrence is replaced by
/// the substitute character before the cell is emitted.
pub struct DelimitedWriter<W: Write> {
    writer: W,
    delimiter: char,
    substitute: char,
}

impl<W: Write> DelimitedWriter<W> {
    /// Comma-delimited, commas inside cells become semicolons.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: ',',
            substitute: ';',
        }
    }

    pub fn with_delimiter(writer: W, delimiter: char, substitute: char) -> Result<Self> {
        if delimiter == substitute {
            return Err(Error::Export(format!(
                "delimiter and substitute must differ (both {delimiter:?})"
            )));
        }
        Ok(Self {
            writer,
            delimiter,
            substitute,
        })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn escape<'a>(&self, cell: &'a str) -> Cow<'a, str> {
        if cell.contains(self.delimiter) {
            Cow::Owned(cell.replace(self.delimiter, &self.substitute.to_string()))
        } else {
            Cow::Borrowed(cell)
        }
    }

    fn write_line<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<()> {
        let delimiter = self.delimiter.to_string();
        let line = cells
            .iter()
            .map(|c| self.escape(c.as_ref()))
            .collect::<Vec<_>>()
            .join(&delimiter);
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

impl<W: Write> TableWriter for DelimitedWriter<W> {
    fn write_historical(&mut self, rows: &mut dyn Iterator<Item = HistoricalRow>) -> Result<usize> {
        self.write_line(&HISTORICAL_HEADER)?;
        let mut written = 0;
        for row in rows {
            self.write_line(&row.cells())?;
            written += 1;
        }
        self.writer.flush()?;
        Ok(written)
    }

    fn write_woke(&mut self, rows: &mut dyn Iterator<Item = WokeRow>) -> Result<usize> {
        self.write_line(&WOKE_HEADER)?;
        let mut written = 0;
        for row in rows {
            self.write_line(&row.cells()?)?;
            written += 1;
        }
        self.writer.flush()?;
        Ok(written)
    }
}

#[derive(Serialize)]
struct JsonRow<A, R> {
    answers: A,
    result: R,
}

/// Writes decision tables as a pretty-printed JSON array of
/// `{answers, result}` objects.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_rows<T: Serialize>(&mut self, rows: Vec<T>) -> Result<usize> {
        serde_json::to_writer_pretty(&mut self.writer, &rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(rows.len())
    }
}

impl<W: Write> TableWriter for JsonWriter<W> {
    fn write_historical(&mut self, rows: &mut dyn Iterator<Item = HistoricalRow>) -> Result<usize> {
        let rows: Vec<_> = rows
            .map(|r| JsonRow {
                answers: r.answers,
                result: r.result,
            })
            .collect();
        self.write_rows(rows)
    }

    fn write_woke(&mut self, rows: &mut dyn Iterator<Item = WokeRow>) -> Result<usize> {
        let rows: Vec<_> = rows
            .map(|r| JsonRow {
                answers: r.answers,
                result: r.result,
            })
            .collect();
        self.write_rows(rows)
    }
}
