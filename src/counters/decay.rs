// Decaying-probability counter — a randomized undercounting sketch.
//
// The first observation of a token is recorded deterministically; every
// later observation at estimate k increments with probability (1/sqrt(2))^k.
// Increments become exponentially rarer as an estimate grows, throttling
// counter growth for frequent tokens. Memory is NOT bounded: every distinct
// token keeps a slot — only the increment rate is throttled.

use std::collections::HashMap;
use std::f64::consts::SQRT_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::FrequencyCounter;

#[derive(Debug, Clone, Copy)]
struct Slot {
    estimate: u64,
    first_seen: usize,
}

/// Probabilistic frequency estimator with exponentially decaying increments.
///
/// The RNG is injected at construction: pass a seed for deterministic test
/// replay, or `None` to draw fresh OS entropy per run.
#[derive(Debug)]
pub struct DecayCounter {
    slots: HashMap<String, Slot>,
    rng: StdRng,
}

/// Probability of accepting an increment for a token currently at `estimate`.
fn acceptance_probability(estimate: u64) -> f64 {
    // Beyond a few hundred the probability underflows to zero anyway, so
    // clamping the exponent is unobservable.
    let k = estimate.min(i32::MAX as u64) as i32;
    SQRT_2.powi(-k)
}

impl DecayCounter {
    /// Create an estimator, seeding the RNG when a seed is given.
    ///
    /// The counter itself has no capacity — every distinct token gets a
    /// slot, and the top-N cutoff only matters at extraction. Callers must
    /// validate N >= 1 before counting (the CLI does this through
    /// `RunConfig::require_valid_cutoff`); `top_n(0)` merely returns an
    /// empty ranking.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            slots: HashMap::new(),
            rng,
        }
    }

    /// The current estimate for a token, 0 if never seen.
    pub fn estimate(&self, token: &str) -> u64 {
        self.slots.get(token).map(|slot| slot.estimate).unwrap_or(0)
    }
}

impl FrequencyCounter for DecayCounter {
    fn label(&self) -> &'static str {
        "decay"
    }

    fn observe(&mut self, token: &str) {
        let next_index = self.slots.len();
        match self.slots.get_mut(token) {
            None => {
                // First observation is always recorded.
                self.slots.insert(
                    token.to_string(),
                    Slot {
                        estimate: 1,
                        first_seen: next_index,
                    },
                );
            }
            Some(slot) => {
                let draw: f64 = self.rng.random();
                if draw < acceptance_probability(slot.estimate) {
                    slot.estimate += 1;
                }
            }
        }
    }

    fn distinct_tracked(&self) -> usize {
        self.slots.len()
    }

    fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&String, &Slot)> = self.slots.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.estimate
                .cmp(&a.1.estimate)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked
            .into_iter()
            .take(n)
            .map(|(token, slot)| (token.clone(), slot.estimate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_deterministic() {
        let mut counter = DecayCounter::new(Some(7));
        counter.observe("once");
        assert_eq!(counter.estimate("once"), 1);
    }

    #[test]
    fn estimates_never_decrease() {
        let mut counter = DecayCounter::new(Some(42));
        let mut previous = 0;
        for _ in 0..500 {
            counter.observe("word");
            let current = counter.estimate("word");
            assert!(current >= previous, "estimate decreased: {previous} -> {current}");
            previous = current;
        }
    }

    #[test]
    fn estimate_stays_at_or_below_true_count() {
        // Acceptance probability is < 1 for every estimate >= 1, so the
        // estimate can never outrun the number of observations.
        let mut counter = DecayCounter::new(Some(3));
        for _ in 0..1000 {
            counter.observe("word");
        }
        assert!(counter.estimate("word") <= 1000);
        assert!(counter.estimate("word") >= 1);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let tokens: Vec<String> = (0..200).map(|i| format!("w{}", i % 7)).collect();

        let mut first = DecayCounter::new(Some(99));
        let mut second = DecayCounter::new(Some(99));
        for token in &tokens {
            first.observe(token);
            second.observe(token);
        }

        assert_eq!(first.top_n(7), second.top_n(7));
    }

    #[test]
    fn top_n_returns_all_when_fewer_distinct() {
        let mut counter = DecayCounter::new(Some(1));
        counter.observe("a");
        counter.observe("b");
        assert_eq!(counter.top_n(10).len(), 2);
    }

    #[test]
    fn empty_stream_yields_empty_results() {
        let counter = DecayCounter::new(Some(1));
        assert!(counter.top_n(5).is_empty());
        assert_eq!(counter.distinct_tracked(), 0);
    }

    #[test]
    fn acceptance_probability_halves_every_two_steps() {
        assert!((acceptance_probability(0) - 1.0).abs() < 1e-12);
        assert!((acceptance_probability(2) - 0.5).abs() < 1e-12);
        assert!((acceptance_probability(4) - 0.25).abs() < 1e-12);
        assert!(acceptance_probability(200) < 1e-30);
    }
}
