pub mod text;

use std::io;

/// Trait for reporting filtered values.
pub trait Reporter {
    fn report(&self, values: &[i64], writer: &mut dyn io::Write) -> io::Result<()>;
}
