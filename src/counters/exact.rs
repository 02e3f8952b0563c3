// Exact frequency counter — the ground-truth baseline.
//
// Plain hash-map counting: O(1) amortized per token, O(distinct) memory.
// The other two counters are judged against this one.

use std::collections::HashMap;

use super::traits::FrequencyCounter;

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: u64,
    /// Position in first-encounter order; ties in `top_n` resolve by it.
    first_seen: usize,
}

/// Exact occurrence counts for every distinct token in the stream.
#[derive(Debug, Default)]
pub struct ExactCounter {
    slots: HashMap<String, Slot>,
}

impl ExactCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The exact count for a token, 0 if never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.slots.get(token).map(|slot| slot.count).unwrap_or(0)
    }
}

impl FrequencyCounter for ExactCounter {
    fn label(&self) -> &'static str {
        "exact"
    }

    fn observe(&mut self, token: &str) {
        let next_index = self.slots.len();
        self.slots
            .entry(token.to_string())
            .and_modify(|slot| slot.count += 1)
            .or_insert(Slot {
                count: 1,
                first_seen: next_index,
            });
    }

    fn distinct_tracked(&self) -> usize {
        self.slots.len()
    }

    fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&String, &Slot)> = self.slots.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked
            .into_iter()
            .take(n)
            .map(|(token, slot)| (token.clone(), slot.count))
            .collect()
    }
}
