//! Report rendering port trait.

use crate::domain::error::MarketPulseError;
use crate::domain::report::ReportOutcome;
use std::io::Write;
use std::path::Path;

/// Port for rendering analysis reports.
pub trait ReportPort {
    fn render(&self, outcome: &ReportOutcome) -> String;

    /// Default implementation: writes `render` output to `output_path`, or to
    /// stdout when no path is given.
    fn write(&self, outcome: &ReportOutcome, output_path: Option<&Path>) -> Result<(), MarketPulseError> {
        let text = self.render(outcome);
        match output_path {
            Some(path) => std::fs::write(path, text)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
