//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Lay numbers out in right-aligned rows of `per_line` columns
///
/// Column width is that of the widest number.
pub fn wrap_numbers(numbers: &[u32], per_line: usize) -> Vec<String> {
    let width = numbers
        .iter()
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(0);

    numbers
        .chunks(per_line.max(1))
        .map(|row| {
            row.iter()
                .map(|n| format!("{n:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Render data as pretty-printed JSON
pub fn to_json<T: serde::Serialize>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// Print data as pretty-printed JSON on stdout
pub fn print_json<T: serde::Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", to_json(data)?);
    Ok(())
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
