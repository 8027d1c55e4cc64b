//! Rendering of command results as tables, CSV or JSON.
//!
//! Grid rows are a flat list of tagged records; the pivot view is built here
//! and never feeds back into the engine.

use std::io::Write;
use std::str::FromStr;

use fra_risk::GridRow;
use serde::Serialize;

use crate::{CliError, Result};

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Grid axis selected with `--pivot`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotAxis {
    InitialRate,
    Volatility,
    Maturity,
}

impl FromStr for PivotAxis {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rate" | "initial_rate" | "initial-rate" => Ok(Self::InitialRate),
            "vol" | "volatility" => Ok(Self::Volatility),
            "maturity" => Ok(Self::Maturity),
            other => Err(CliError::invalid_argument(format!(
                "Unknown pivot axis: {}. Supported: rate, volatility, maturity",
                other
            ))),
        }
    }
}

impl PivotAxis {
    fn value(self, row: &GridRow) -> f64 {
        match self {
            Self::InitialRate => row.initial_rate,
            Self::Volatility => row.volatility,
            Self::Maturity => row.maturity,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::InitialRate => "initial_rate",
            Self::Volatility => "volatility",
            Self::Maturity => "maturity",
        }
    }

    /// The two remaining axes as (row axis, column axis).
    fn others(self) -> (Self, Self) {
        match self {
            Self::InitialRate => (Self::Volatility, Self::Maturity),
            Self::Volatility => (Self::InitialRate, Self::Maturity),
            Self::Maturity => (Self::InitialRate, Self::Volatility),
        }
    }
}

/// Mean PnL laid out over two axes with the third held fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pivot {
    pub held_axis: PivotAxis,
    pub held_value: f64,
    pub row_axis: PivotAxis,
    pub column_axis: PivotAxis,
    pub row_keys: Vec<f64>,
    pub column_keys: Vec<f64>,
    /// `cells[r][c]`, `None` where the grid had no such combination
    pub cells: Vec<Vec<Option<f64>>>,
}

fn push_unique(keys: &mut Vec<f64>, value: f64) {
    if !keys.contains(&value) {
        keys.push(value);
    }
}

/// Pivots mean PnL, holding `held` at its first value in `rows`.
///
/// Returns `None` for an empty table.
pub fn pivot(rows: &[GridRow], held: PivotAxis) -> Option<Pivot> {
    let held_value = held.value(rows.first()?);
    let (row_axis, column_axis) = held.others();

    let selected: Vec<&GridRow> = rows.iter().filter(|r| held.value(r) == held_value).collect();

    let mut row_keys = Vec::new();
    let mut column_keys = Vec::new();
    for row in &selected {
        push_unique(&mut row_keys, row_axis.value(row));
        push_unique(&mut column_keys, column_axis.value(row));
    }

    let mut cells = vec![vec![None; column_keys.len()]; row_keys.len()];
    for row in &selected {
        let r = row_keys.iter().position(|&k| k == row_axis.value(row));
        let c = column_keys.iter().position(|&k| k == column_axis.value(row));
        if let (Some(r), Some(c)) = (r, c) {
            cells[r][c] = Some(row.mean_pnl);
        }
    }

    Some(Pivot {
        held_axis: held,
        held_value,
        row_axis,
        column_axis,
        row_keys,
        column_keys,
        cells,
    })
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes serialisable records as CSV with a header row.
pub fn write_csv<T: Serialize>(out: &mut dyn Write, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders the flat grid table.
pub fn write_grid(out: &mut dyn Write, rows: &[GridRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, rows),
        OutputFormat::Csv => write_csv(out, rows),
        OutputFormat::Table => {
            writeln!(
                out,
                "{:>12} {:>10} {:>10} {:>14} {:>14}",
                "initial_rate", "volatility", "maturity", "mean_pnl", "std_pnl"
            )?;
            for row in rows {
                writeln!(
                    out,
                    "{:>12.2} {:>10.4} {:>10.4} {:>14.2} {:>14.2}",
                    row.initial_rate, row.volatility, row.maturity, row.mean_pnl, row.std_pnl
                )?;
            }
            Ok(())
        }
    }
}

/// Renders a pivot view.
pub fn write_pivot(out: &mut dyn Write, pivot: &Pivot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, pivot),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            let corner = format!("{}\\{}", pivot.row_axis.name(), pivot.column_axis.name());
            let mut header = vec![corner];
            header.extend(pivot.column_keys.iter().map(|k| k.to_string()));
            writer.write_record(&header)?;
            for (key, cells) in pivot.row_keys.iter().zip(&pivot.cells) {
                let mut record = vec![key.to_string()];
                record.extend(
                    cells
                        .iter()
                        .map(|c| c.map(|v| v.to_string()).unwrap_or_default()),
                );
                writer.write_record(&record)?;
            }
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "mean_pnl at {} = {} ({} down, {} across)",
                pivot.held_axis.name(),
                pivot.held_value,
                pivot.row_axis.name(),
                pivot.column_axis.name()
            )?;
            write!(out, "{:>12}", "")?;
            for key in &pivot.column_keys {
                write!(out, " {:>14}", key)?;
            }
            writeln!(out)?;
            for (key, cells) in pivot.row_keys.iter().zip(&pivot.cells) {
                write!(out, "{:>12}", key)?;
                for cell in cells {
                    match cell {
                        Some(v) => write!(out, " {:>14.2}", v)?,
                        None => write!(out, " {:>14}", "-")?,
                    }
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}
