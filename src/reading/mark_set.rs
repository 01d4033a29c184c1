use std::collections::HashMap;

/// Canonical keys currently marked, each with the number of marked tokens
/// sharing it.
///
/// The set trusts its caller: it only does counter arithmetic. Toggling based
/// on whether a token is already marked is the session's job.
#[derive(Debug, Default, Clone)]
pub struct MarkSet {
    counts: HashMap<String, usize>,
}

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Decrements `key`, dropping it when the count reaches zero. Unknown keys
    /// are left alone.
    pub fn unmark(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_marked(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct marked keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total marked tokens across all keys.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
