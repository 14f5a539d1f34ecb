use crate::error::Result;
use crate::types::OptimizationResult;

pub fn format_json_report(result: &OptimizationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
