// Space-saving tracker — bounded-memory top-K frequency estimation.
//
// At most `capacity` tokens are tracked at once. A token that arrives while
// the tracker is full evicts the tracked token with the minimum estimate and
// inherits its count plus one, so tracked estimates never undercount the
// true occurrences of their current identity; the inherited count is kept
// per slot as the overestimation error bound.
//
// Minimum lookup uses a lazy-deletion min-heap over (count, age) pairs: every
// count change pushes a fresh entry, and eviction pops until an entry matches
// the authoritative slot map. A popped entry is never trusted without that
// cross-check, and stale entries are simply discarded. The heap is rebuilt
// from the slot map whenever stale entries outnumber live ones, so it never
// holds more than twice the capacity and the whole structure stays O(N).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use anyhow::Result;

use super::traits::FrequencyCounter;

#[derive(Debug, Clone)]
struct Slot {
    count: u64,
    /// Count inherited at insertion — the maximum possible overcount.
    error: u64,
    /// Monotone slot-assignment order; breaks count ties deterministically.
    age: u64,
}

/// Bounded top-K tracker with the classical space-saving guarantee:
/// `true_count(t) <= estimate(t) <= true_count(t) + error(t)` for every
/// tracked token `t`.
#[derive(Debug)]
pub struct SpaceSavingCounter {
    capacity: usize,
    slots: HashMap<String, Slot>,
    /// Lazy min-heap of (count, age, token); entries go stale when a slot is
    /// incremented or evicted and are validated against `slots` on pop.
    heap: BinaryHeap<Reverse<(u64, u64, String)>>,
    next_age: u64,
}

impl SpaceSavingCounter {
    /// Create a tracker for at most `capacity` tokens.
    ///
    /// Fails fast on a zero capacity — the eviction step is meaningless
    /// without at least one slot.
    pub fn new(capacity: usize) -> Result<Self> {
        anyhow::ensure!(capacity >= 1, "capacity must be at least 1 (got {capacity})");
        Ok(Self {
            capacity,
            slots: HashMap::with_capacity(capacity),
            heap: BinaryHeap::new(),
            next_age: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, token: &str) -> bool {
        self.slots.contains_key(token)
    }

    /// The current estimate for a token, 0 if not tracked.
    pub fn estimate(&self, token: &str) -> u64 {
        self.slots.get(token).map(|slot| slot.count).unwrap_or(0)
    }

    /// The overestimation bound for a token, 0 if not tracked.
    pub fn error(&self, token: &str) -> u64 {
        self.slots.get(token).map(|slot| slot.error).unwrap_or(0)
    }

    /// Estimate minus error — never exceeds the token's true count.
    pub fn guaranteed_count(&self, token: &str) -> u64 {
        self.slots
            .get(token)
            .map(|slot| slot.count.saturating_sub(slot.error))
            .unwrap_or(0)
    }

    /// All tracked tokens with their estimates, count descending, oldest
    /// slot first among ties.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&String, &Slot)> = self.slots.iter().collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.age.cmp(&b.1.age)));
        ranked
            .into_iter()
            .map(|(token, slot)| (token.clone(), slot.count))
            .collect()
    }

    fn push_entry(&mut self, token: &str, count: u64, age: u64) {
        self.heap.push(Reverse((count, age, token.to_string())));
        if self.heap.len() > 2 * self.capacity {
            self.compact();
        }
    }

    /// Rebuild the heap from the authoritative slot map, shedding every
    /// stale entry. Triggered once per capacity-many pushes at most, so the
    /// rebuild cost amortizes to O(1) per observed token.
    fn compact(&mut self) {
        self.heap = self
            .slots
            .iter()
            .map(|(token, slot)| Reverse((slot.count, slot.age, token.clone())))
            .collect();
    }

    /// Pop the validated minimum-estimate entry and remove its slot.
    ///
    /// Stale heap entries (an old count for a live slot, or any count for an
    /// already-evicted token) are discarded until one matches the map.
    fn evict_min(&mut self) -> Option<(String, u64)> {
        while let Some(Reverse((count, age, token))) = self.heap.pop() {
            let live = self
                .slots
                .get(&token)
                .is_some_and(|slot| slot.count == count && slot.age == age);
            if live {
                self.slots.remove(&token);
                return Some((token, count));
            }
        }
        // Unreachable while any slot is live: every count change pushes a
        // matching entry.
        None
    }
}

impl FrequencyCounter for SpaceSavingCounter {
    fn label(&self) -> &'static str {
        "space-saving"
    }

    fn observe(&mut self, token: &str) {
        if let Some(slot) = self.slots.get_mut(token) {
            slot.count += 1;
            let (count, age) = (slot.count, slot.age);
            self.push_entry(token, count, age);
        } else if self.slots.len() < self.capacity {
            let age = self.next_age;
            self.next_age += 1;
            self.slots.insert(
                token.to_string(),
                Slot {
                    count: 1,
                    error: 0,
                    age,
                },
            );
            self.push_entry(token, 1, age);
        } else if let Some((_evicted, min_count)) = self.evict_min() {
            // Newcomer inherits the minimum count plus one; the inherited
            // part is its error bound.
            let age = self.next_age;
            self.next_age += 1;
            self.slots.insert(
                token.to_string(),
                Slot {
                    count: min_count + 1,
                    error: min_count,
                    age,
                },
            );
            self.push_entry(token, min_count + 1, age);
        }
    }

    fn distinct_tracked(&self) -> usize {
        self.slots.len()
    }

    fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
