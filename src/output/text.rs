use std::io;

use crate::output::Reporter;

/// Writes one value per line.
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for TextReporter {
    fn report(&self, values: &[i64], writer: &mut dyn io::Write) -> io::Result<()> {
        for value in values {
            writeln!(writer, "{value}")?;
        }
        Ok(())
    }
}
