//! Append-only per-tick series and their tabular export.

use std::io::{self, Write};

use crate::error::{Result, SimError};

/// Decimal places used by the reference export.
pub const EXPORT_PRECISION: usize = 5;

/// Column headers of the export, in order.
pub const CSV_HEADER: [&str; 4] = ["t (s)", "F (N)", "P_total (kg·m/s)", "KE_total (J)"];

/// One tick's worth of scalar samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRow {
    pub time: f64,
    pub force: f64,
    pub momentum: f64,
    pub kinetic_energy: f64,
}

/// Time, force, momentum and kinetic-energy series of one run.
///
/// The four columns always have equal length; they only grow during a run and
/// are cleared on reset/start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    time: Vec<f64>,
    force: Vec<f64>,
    momentum: Vec<f64>,
    kinetic_energy: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: SeriesRow) {
        self.time.push(row.time);
        self.force.push(row.force);
        self.momentum.push(row.momentum);
        self.kinetic_energy.push(row.kinetic_energy);
    }

    pub fn clear(&mut self) {
        self.time.clear();
        self.force.clear();
        self.momentum.clear();
        self.kinetic_energy.clear();
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn force(&self) -> &[f64] {
        &self.force
    }

    pub fn momentum(&self) -> &[f64] {
        &self.momentum
    }

    pub fn kinetic_energy(&self) -> &[f64] {
        &self.kinetic_energy
    }

    pub fn row(&self, index: usize) -> Option<SeriesRow> {
        Some(SeriesRow {
            time: *self.time.get(index)?,
            force: *self.force.get(index)?,
            momentum: *self.momentum.get(index)?,
            kinetic_energy: *self.kinetic_energy.get(index)?,
        })
    }

    pub fn last(&self) -> Option<SeriesRow> {
        self.len().checked_sub(1).and_then(|i| self.row(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = SeriesRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Write a header line and one comma-separated row per tick, each value
    /// with `precision` decimals.
    ///
    /// Fails with [`SimError::EmptySeries`] when nothing has been recorded.
    pub fn write_csv<W: Write>(&self, mut writer: W, precision: usize) -> Result<()> {
        if self.is_empty() {
            return Err(SimError::EmptySeries);
        }

        writeln!(writer, "{}", CSV_HEADER.join(","))?;
        for row in self.rows() {
            writeln!(
                writer,
                "{:.p$},{:.p$},{:.p$},{:.p$}",
                row.time,
                row.force,
                row.momentum,
                row.kinetic_energy,
                p = precision
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    /// [`write_csv`](Self::write_csv) into a `String` at [`EXPORT_PRECISION`].
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf, EXPORT_PRECISION)?;
        String::from_utf8(buf)
            .map_err(|e| SimError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
