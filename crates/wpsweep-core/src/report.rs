//! Rendering of find results

/// How a found set is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// One identifier per line, finder order
    List,
    /// A single count line
    Count,
}

/// Render a found set for the given mode.
///
/// List mode renders nothing for an empty set; count mode has an
/// explicit empty message. The asymmetry is observable caller-facing
/// behavior and kept as is.
pub fn format_report(found: &[i64], mode: ReportMode) -> String {
    match mode {
        ReportMode::List => found
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        ReportMode::Count => {
            if found.is_empty() {
                "No entries found.".to_string()
            } else {
                format!("Entries found: {}", found.len())
            }
        }
    }
}
