//! Progress boundary.
//!
//! The pipeline reports each step to a [`ProgressSink`]; what the caller does
//! with it (log line, progress bar, nothing) is not this crate's concern.

/// Pipeline steps in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Parse,
    Merge,
    CopyChestLog,
    Prune,
    Match,
    Serialize,
    Complete,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Parse,
        Step::Merge,
        Step::CopyChestLog,
        Step::Prune,
        Step::Match,
        Step::Serialize,
        Step::Complete,
    ];

    /// Completion percentage shown when the step starts.
    pub fn percent(&self) -> u8 {
        match self {
            Step::Parse => 10,
            Step::Merge => 30,
            Step::CopyChestLog => 40,
            Step::Prune => 60,
            Step::Match => 80,
            Step::Serialize => 90,
            Step::Complete => 100,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Step::Parse => "Parsing files...",
            Step::Merge => "Merging Loot Logger files...",
            Step::CopyChestLog => "Processing Chest Log...",
            Step::Prune => "Pruning old timestamps...",
            Step::Match => "Matching and reducing quantities...",
            Step::Serialize => "Generating output files...",
            Step::Complete => "Complete!",
        }
    }
}

/// Receives `(percent, message)` as the pipeline advances.
pub trait ProgressSink {
    fn step(&mut self, percent: u8, message: &str);
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn step(&mut self, _percent: u8, _message: &str) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(u8, &str),
{
    fn step(&mut self, percent: u8, message: &str) {
        self(percent, message)
    }
}
