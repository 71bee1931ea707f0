use super::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Load-once-per-session cache keyed by source identifier. Successful loads
/// are memoized for the life of the cache; failed loads are not, so a
/// transient fetch error can be retried. Invalidation is dropping the cache.
#[derive(Debug, Default)]
pub struct DatasetCache<T> {
    entries: HashMap<String, T>,
}

impl<T> DatasetCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn get_or_load<F>(&mut self, id: &str, load: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        match self.entries.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(load()?)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
