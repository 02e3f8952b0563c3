// Counter contract — swap-ready abstraction.
//
// All three strategies consume the same token stream one token at a time and
// report a ranked top-N view at the end. The timed runner and the tests treat
// them uniformly through this trait; what differs is memory behavior and how
// far the reported counts may drift from the truth.

/// A single-pass word-frequency counter.
pub trait FrequencyCounter {
    /// Short human-readable name for reports ("exact", "decay", ...).
    fn label(&self) -> &'static str;

    /// Feed one token from the stream.
    fn observe(&mut self, token: &str);

    /// Number of distinct tokens currently tracked.
    fn distinct_tracked(&self) -> usize;

    /// The `n` highest-counted tokens, count descending, with a tie-break
    /// that is deterministic within a run. Returns all tracked tokens when
    /// fewer than `n` are tracked.
    fn top_n(&self, n: usize) -> Vec<(String, u64)>;
}
