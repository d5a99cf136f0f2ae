use std::fmt;

/// Which of the two log formats an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    /// Semicolon-delimited Loot Logger export.
    LootLogger,
    /// Tab-delimited, quoted Chest Log export.
    ChestLog,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::LootLogger => "Loot Logger",
            LogKind::ChestLog => "Chest Log",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while reading log text.
///
/// Malformed data rows are not errors; they are skipped by the parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The text contains no non-blank line at all.
    EmptyInput { log: LogKind },
    /// The first non-blank line is not the exact header of `log`.
    HeaderMismatch { log: LogKind, found: String },
    /// A chest-log date could not be split into its date and time parts.
    Format { raw: String, reason: &'static str },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::EmptyInput { log } => write!(f, "{log} file is empty"),
            LogError::HeaderMismatch { log, found } => {
                write!(f, "Invalid {log} file format (header was '{found}')")
            }
            LogError::Format { raw, reason } => {
                write!(f, "malformed chest log date '{raw}': {reason}")
            }
        }
    }
}

impl std::error::Error for LogError {}
