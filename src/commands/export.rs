use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::CommandContext;
use crate::cli::ExportTable;
use crate::export::{
    historical_distribution, historical_table, woke_distribution, woke_table, DelimitedWriter,
    Distribution, ExportFormat, JsonWriter, TableWriter,
};

fn write_table(table: ExportTable, writer: &mut dyn TableWriter) -> Result<usize> {
    let written = match table {
        ExportTable::Historical => writer.write_historical(&mut historical_table())?,
        ExportTable::Woke => writer.write_woke(&mut woke_table())?,
    };
    Ok(written)
}

fn export_to<W: Write>(
    ctx: &CommandContext,
    table: ExportTable,
    format: ExportFormat,
    out: W,
) -> Result<usize> {
    match format {
        ExportFormat::Csv => {
            let (delimiter, substitute) = ctx.config.export_chars();
            let mut writer = DelimitedWriter::with_delimiter(out, delimiter, substitute)?;
            write_table(table, &mut writer)
        }
        ExportFormat::Json => write_table(table, &mut JsonWriter::new(out)),
    }
}

/// Writes the full decision table to `output`, or to `stdout` when no path
/// is given.
pub fn export_table<W: Write>(
    ctx: &CommandContext,
    table: ExportTable,
    format: ExportFormat,
    output: Option<&Path>,
    stdout: &mut W,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let rows = export_to(ctx, table, format, BufWriter::new(file))?;
            log::info!("Wrote {} rows to {}", rows, path.display());
            writeln!(stdout, "Wrote {}", path.display())?;
        }
        None => {
            export_to(ctx, table, format, &mut *stdout)?;
        }
    }
    Ok(())
}

fn distribution_table(title: &str, dist: &Distribution) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![title.to_string(), "Count".into(), "Share".into()]);
    for (code, count) in &dist.counts {
        let share = if dist.total == 0 {
            0.0
        } else {
            *count as f64 * 100.0 / dist.total as f64
        };
        table.add_row(vec![
            code.to_string(),
            count.to_string(),
            format!("{share:.1}%"),
        ]);
    }
    table
}

pub fn print_stats<W: Write>(out: &mut W) -> Result<()> {
    for (title, dist) in [
        ("Historical", historical_distribution()),
        ("Woke", woke_distribution()),
    ] {
        writeln!(out, "{} ({} combinations)", title, dist.total)?;
        writeln!(out, "{}", distribution_table(title, &dist))?;
        let unreached = dist.unreached();
        if !unreached.is_empty() {
            log::warn!("{} codes never produced: {}", title, unreached.join(", "));
        }
    }
    Ok(())
}
