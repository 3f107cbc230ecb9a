//! Comma-separated output of sampled states.
//!
//! ```csv
//! t,Ca,CaM,CaCaM,...,MLC,MLCact
//! 0.1002,0.0093,...
//! ```

use rhomyosin_core::integration::SampleSink;
use rhomyosin_core::species::{Species, SPECIES_COUNT};
use std::io::{self, Write};

/// Writes one row per sample: the time, then every species in enumeration order.
pub struct CsvSink<W: Write> {
    writer: W,
    rows: usize,
}

impl<W: Write> CsvSink<W> {
    /// Wraps `writer` and emits the header row.
    pub fn new(mut writer: W) -> io::Result<Self> {
        write!(writer, "t")?;
        for species in Species::ALL {
            write!(writer, ",{}", species.name())?;
        }
        writeln!(writer)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> SampleSink for CsvSink<W> {
    fn record(&mut self, t: f64, state: &[f64]) -> io::Result<()> {
        if state.len() != SPECIES_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("expected {SPECIES_COUNT} values, got {}", state.len()),
            ));
        }
        write!(self.writer, "{t}")?;
        for value in state {
            write!(self.writer, ",{value}")?;
        }
        writeln!(self.writer)?;
        self.rows += 1;
        Ok(())
    }
}
