use std::fmt::Write;

use crate::time::calendar::weekday_abbrev;
use crate::types::OptimizationResult;

const RULE_WIDTH: usize = 70;

/// Digits grouped by thousands: 63190 -> "63,190"
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Human-readable report for one optimization run
pub fn format_text_report(result: &OptimizationResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_sections(result, &mut out);
    out
}

fn write_sections(result: &OptimizationResult, out: &mut String) -> std::fmt::Result {
    writeln!(
        out,
        "Year: {}, Voluntary Holidays: {}",
        result.year, result.num_voluntary_holidays
    )?;
    writeln!(out)?;
    writeln!(out, "=== Holiday Optimization for {} ===", result.year)?;
    writeln!(out)?;

    writeln!(out, "Fixed holidays ({}):", result.fixed_holidays.len())?;
    for holiday in &result.fixed_holidays {
        writeln!(
            out,
            "  - {}: {} ({})",
            holiday.name,
            holiday.date.format("%Y-%m-%d"),
            weekday_abbrev(holiday.date)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Baseline total days-until-holiday: {}", result.baseline_total)?;
    writeln!(out)?;
    writeln!(
        out,
        "Searching for best {} voluntary holiday(s)...",
        result.num_voluntary_holidays
    )?;
    writeln!(out, "Algorithm: {}", result.mode.description())?;
    if let Some(count) = result.combinations_evaluated {
        writeln!(out, "Evaluated {} combinations...", group_thousands(count))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(out, "Optimal voluntary holidays:")?;
    if result.voluntary_holidays.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for holiday in &result.voluntary_holidays {
        writeln!(
            out,
            "  - {} ({})",
            holiday.date.format("%Y-%m-%d"),
            weekday_abbrev(holiday.date)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Results:")?;
    writeln!(out, "  Baseline total:      {} days", result.baseline_total)?;
    writeln!(out, "  Optimized total:     {} days", result.optimized_total)?;
    writeln!(
        out,
        "  Improvement:         {} days ({:.1}%)",
        result.improvement, result.improvement_pct
    )?;
    write!(out, "  Average days/day:    {:.2}", result.average_days_per_day)?;
    Ok(())
}
