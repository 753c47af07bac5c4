use crate::{core::ledger::HistoryLedger, format::format_number};

/// Placeholder shown for max/min/mean when there is no data.
pub const NO_DATA: &str = "-";

/// Aggregates over a non-empty set of results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
}

/// Count plus optional summary; `summary` is `None` for an empty ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub summary: Option<Summary>,
}

impl Statistics {
    pub fn from_ledger(ledger: &HistoryLedger) -> Self {
        Self::from_results(ledger.results())
    }

    pub fn from_results(results: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for r in results {
            count += 1;
            sum += r;
            max = max.max(r);
            min = min.min(r);
        }

        let summary = (count > 0).then(|| Summary {
            max,
            min,
            mean: sum / count as f64,
        });
        Self { count, summary }
    }

    /// Display texts for `(count, max, min, mean)`.
    pub fn display(&self) -> (String, String, String, String) {
        let count = self.count.to_string();
        match self.summary {
            Some(s) => (
                count,
                format_number(s.max),
                format_number(s.min),
                format_number(s.mean),
            ),
            None => (
                count,
                NO_DATA.to_string(),
                NO_DATA.to_string(),
                NO_DATA.to_string(),
            ),
        }
    }
}
