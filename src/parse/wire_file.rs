use std::path::Path;

use crate::foundation::{
    core::{GridDims, Wire, WireSet},
    error::{PlotError, PlotResult},
};

/// Parsed contents of a wire description file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireFile {
    /// Grid extent from the first line.
    pub dims: GridDims,
    /// Second line, verbatim. It is skipped and never interpreted.
    pub header: String,
    /// Wires in file order.
    pub wires: WireSet,
    /// Counts of wire lines that were skipped or trimmed.
    pub report: ParseReport,
}

/// Tally of recoverable problems seen while reading wire lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Lines containing a token that is not an integer.
    pub non_numeric_lines: usize,
    /// Lines with fewer than two points.
    pub short_lines: usize,
    /// Lines whose odd trailing integer was dropped.
    pub odd_trailing_dropped: usize,
}

impl ParseReport {
    pub fn skipped_lines(&self) -> usize {
        self.non_numeric_lines + self.short_lines
    }
}

/// Read and parse a wire description file.
pub fn read_wire_file(path: &Path) -> PlotResult<WireFile> {
    let text = std::fs::read_to_string(path).map_err(|e| PlotError::io(path, e))?;
    parse_wire_text(&text)
}

/// Parse wire description text.
///
/// The dimension line is mandatory and any problem with it is fatal. Wire lines are
/// best-effort: a line that does not tokenize into at least four integers is skipped.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_wire_text(text: &str) -> PlotResult<WireFile> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(PlotError::TooFewLines { found: lines.len() });
    }

    let dims = parse_dims(lines[0])?;
    let header = lines[1].to_string();

    let mut wires = WireSet::new();
    let mut report = ParseReport::default();
    for (idx, line) in lines.iter().enumerate().skip(2) {
        let coords = match parse_ints(line) {
            Some(c) => c,
            None => {
                tracing::debug!(line = idx + 1, "skipping non-numeric wire line");
                report.non_numeric_lines += 1;
                continue;
            }
        };
        if coords.len() < 4 {
            tracing::debug!(line = idx + 1, ints = coords.len(), "skipping short wire line");
            report.short_lines += 1;
            continue;
        }
        if coords.len() % 2 == 1 {
            report.odd_trailing_dropped += 1;
        }
        if let Some(w) = Wire::from_coords(&coords) {
            wires.push(w);
        }
    }

    if report.skipped_lines() > 0 {
        tracing::info!(
            skipped = report.skipped_lines(),
            kept = wires.len(),
            "ignored malformed wire lines"
        );
    }
    tracing::debug!(header = %header, "skipped second line");

    Ok(WireFile {
        dims,
        header,
        wires,
        report,
    })
}

fn parse_dims(line: &str) -> PlotResult<GridDims> {
    let mut tokens = line.split_whitespace();
    let mut next_dim = |axis: &str| -> PlotResult<u32> {
        let tok = tokens
            .next()
            .ok_or_else(|| PlotError::dimensions(format!("missing grid {axis} in '{line}'")))?;
        let value = tok.parse::<i64>().map_err(|e| {
            PlotError::dimensions(format!("invalid grid {axis} '{tok}': {e}"))
        })?;
        u32::try_from(value).map_err(|_| {
            PlotError::dimensions(format!("grid {axis} {value} is out of range 0..={}", u32::MAX))
        })
    };
    let width = next_dim("width")?;
    let height = next_dim("height")?;
    Ok(GridDims::new(width, height))
}

fn parse_ints(line: &str) -> Option<Vec<i64>> {
    line.split_whitespace()
        .map(|t| t.parse::<i64>().ok())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/parse/wire_file.rs"]
mod tests;
