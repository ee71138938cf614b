//! Console reporting for conversion outcomes.

use std::fmt;

use crate::converter::Outcome;

/// Format the console line for one outcome.
pub fn format_outcome(outcome: &Outcome) -> String {
    match &outcome.result {
        Ok(artifact) => format!(
            "✅ Converted: {} → {}",
            outcome.file_name,
            artifact.display()
        ),
        Err(e) => format!("Conversion failed: {}, error: {}", outcome.file_name, e),
    }
}

/// Running totals for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_success() {
            self.converted += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} converted, {} failed", self.converted, self.failed)
    }
}
