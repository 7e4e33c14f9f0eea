use crate::error::EngineError;
use rwc_core::Counts;
use serde::Serialize;

/// Counts of one successfully read input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub name: Option<String>,
    #[serde(flatten)]
    pub counts: Counts,
}

impl FileCounts {
    #[must_use]
    pub const fn new(name: Option<String>, counts: Counts) -> Self {
        Self { name, counts }
    }
}

/// Outcome of one attempted input, in command-line order.
#[derive(Debug)]
pub enum Outcome {
    Counted(FileCounts),
    Failed(EngineError),
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub outcomes: Vec<Outcome>,
}

impl RunResult {
    /// Number of inputs attempted, failed ones included.
    #[must_use]
    pub fn input_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn stats(&self) -> impl Iterator<Item = &FileCounts> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Counted(s) => Some(s),
            Outcome::Failed(_) => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &EngineError> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Counted(_) => None,
            Outcome::Failed(e) => Some(e),
        })
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Cumulative counts over the inputs that could be read.
    #[must_use]
    pub fn total(&self) -> Counts {
        self.stats().map(|s| s.counts).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(name: &str, lines: usize, max_line_length: usize) -> Outcome {
        Outcome::Counted(FileCounts::new(
            Some(name.to_owned()),
            Counts {
                lines,
                words: 1,
                chars: 2,
                bytes: 3,
                max_line_length,
            },
        ))
    }

    #[test]
    fn total_skips_failures() {
        let result = RunResult {
            outcomes: vec![
                counted("a", 2, 10),
                Outcome::Failed(EngineError::StdinInFilesFromStdin),
                counted("b", 5, 4),
            ],
        };

        assert_eq!(result.input_count(), 3);
        assert!(result.has_errors());
        let total = result.total();
        assert_eq!(total.lines, 7);
        assert_eq!(total.words, 2);
        assert_eq!(total.bytes, 6);
        assert_eq!(total.max_line_length, 10);
    }
}
