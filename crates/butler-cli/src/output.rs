//! Terminal output helpers

use std::io::Write;

use console::style;

/// Short status marker derived from an item's `color` field.
pub fn status_suffix(color: Option<&str>) -> String {
    let Some(color) = color else {
        return String::new();
    };

    let marker = match color {
        "blue" => style("ok").green().to_string(),
        "red" => style("failed").red().to_string(),
        "yellow" => style("unstable").yellow().to_string(),
        "grey" | "disabled" => style("disabled").dim().to_string(),
        "aborted" => style("aborted").red().to_string(),
        c if c.ends_with("_anime") => style("running").cyan().to_string(),
        _ => return String::new(),
    };

    format!(" [{marker}]")
}

/// Styled label for a completed build's result string.
pub fn result_label(result: &str) -> String {
    match result {
        "SUCCESS" => style("success").green().to_string(),
        "FAILURE" => style("failure").red().to_string(),
        "UNSTABLE" => style("unstable").yellow().to_string(),
        "ABORTED" => style("aborted").red().to_string(),
        "NOT_BUILT" => style("not built").dim().to_string(),
        other => style(other).dim().to_string(),
    }
}

pub fn format_duration_ms(ms: i64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn format_timestamp_ms(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ms.to_string())
}

pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Plain stdin yes/no confirmation, defaulting to yes.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} [Y/n] ");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
