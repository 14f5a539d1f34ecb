/// Report rendering for optimization results
pub mod json;
pub mod text;

use std::io::Write;

use crate::error::Result;
use crate::types::{OptimizationResult, OutputFormat};

pub use json::format_json_report;
pub use text::format_text_report;

/// Render the result in the requested format
pub fn render(result: &OptimizationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text_report(result)),
        OutputFormat::Json => format_json_report(result),
    }
}

/// Render and write the whole report in one go
pub fn write_report<W: Write>(result: &OptimizationResult, format: OutputFormat, out: &mut W) -> Result<()> {
    let rendered = render(result, format)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}
