// Timed counter execution.
//
// Each counter consumes the whole token slice between two monotonic clock
// samples. The elapsed time is diagnostic only — it is reported alongside
// the ranking but nothing in the contract depends on it.

use std::time::{Duration, Instant};

use tracing::info;

use super::traits::FrequencyCounter;

/// Outcome of one counter's full pass over the token stream.
#[derive(Debug, Clone)]
pub struct CounterReport {
    pub label: &'static str,
    /// Top-N tokens, count descending, deterministic tie-break.
    pub top: Vec<(String, u64)>,
    /// Distinct tokens tracked when the stream ended.
    pub distinct_tracked: usize,
    /// Wall time for the counting pass (ranking extraction excluded).
    pub elapsed: Duration,
}

/// Feed every token to `counter`, then extract its top-`n` ranking.
///
/// Only the pass itself is timed; sorting for the report happens outside
/// the window so the three algorithms are compared on their streaming cost.
pub fn run_counter<C: FrequencyCounter>(
    counter: &mut C,
    tokens: &[String],
    n: usize,
) -> CounterReport {
    let start = Instant::now();
    for token in tokens {
        counter.observe(token);
    }
    let elapsed = start.elapsed();

    let report = CounterReport {
        label: counter.label(),
        top: counter.top_n(n),
        distinct_tracked: counter.distinct_tracked(),
        elapsed,
    };

    info!(
        counter = report.label,
        tokens = tokens.len(),
        distinct = report.distinct_tracked,
        elapsed_us = elapsed.as_micros() as u64,
        "Counting pass complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::exact::ExactCounter;
    use crate::counters::space_saving::SpaceSavingCounter;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn report_carries_ranking_and_size() {
        let stream = tokens(&["a", "b", "a", "c", "a", "b"]);
        let mut counter = ExactCounter::new();
        let report = run_counter(&mut counter, &stream, 2);

        assert_eq!(report.label, "exact");
        assert_eq!(report.distinct_tracked, 3);
        assert_eq!(
            report.top,
            vec![("a".to_string(), 3), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn top_length_is_min_of_n_and_distinct() {
        let stream = tokens(&["x", "y", "z"]);

        let mut exact = ExactCounter::new();
        assert_eq!(run_counter(&mut exact, &stream, 5).top.len(), 3);

        let mut bounded = SpaceSavingCounter::new(5).unwrap();
        assert_eq!(run_counter(&mut bounded, &stream, 5).top.len(), 3);
    }

    #[test]
    fn empty_stream_produces_empty_report() {
        let stream: Vec<String> = Vec::new();
        let mut counter = ExactCounter::new();
        let report = run_counter(&mut counter, &stream, 10);

        assert!(report.top.is_empty());
        assert_eq!(report.distinct_tracked, 0);
    }
}
