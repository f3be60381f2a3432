use std::fmt;

use log::{debug, trace};

use crate::chain::{Chain, Entry};
use crate::config::{normalize_capacity, ConfigError, TableConfig, MIN_CAPACITY};
use crate::error::TableError;
use crate::{Key, Value};

/// Integer-keyed hash table using multiplicative hashing and separate chaining.
///
/// Inserting a key that is already present leaves the stored value untouched
/// (first write wins). The bucket count doubles before an insert once the load
/// factor reaches the grow threshold and halves after a remove once it falls to
/// the shrink threshold, never dropping below [`MIN_CAPACITY`].
#[derive(Debug, Clone)]
pub struct Table {
  buckets: Vec<Chain>,
  config: TableConfig,
  capacity: usize,
  size: usize,
}

impl Table {
  pub fn new() -> Self {
    Self::from_parts(MIN_CAPACITY, TableConfig::default())
  }

  /// Capacity is raised to at least [`MIN_CAPACITY`] and rounded up to a power of two.
  pub fn new_with_capacity(capacity: usize) -> Self {
    Self::from_parts(normalize_capacity(capacity), TableConfig::default())
  }

  pub fn new_with_config(config: TableConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::from_parts(normalize_capacity(config.initial_capacity), config))
  }

  fn from_parts(capacity: usize, config: TableConfig) -> Self {
    let buckets = (0..capacity).map(|_| Chain::new()).collect();
    Self { buckets, config, capacity, size: 0 }
  }

  /// Stores `value` under `key` unless the key is already present.
  ///
  /// Returns `true` if a new entry was added. The grow check runs first, so a
  /// duplicate insert into a full table still grows it.
  pub fn insert(&mut self, key: Key, value: Value) -> bool {
    if self.size as f64 >= self.capacity as f64 * self.config.grow_threshold {
      self.resize(self.capacity * 2);
    }

    let index = self.bucket_index(key);
    let chain = &mut self.buckets[index];
    if chain.find(key).is_some() {
      trace!("ignoring insert of existing key {} into bucket {}", key, index);
      return false;
    }

    chain.insert(key, value);
    self.size += 1;
    true
  }

  pub fn get(&self, key: Key) -> Result<Value, TableError> {
    let index = self.bucket_index(key);
    self.buckets[index]
      .find(key)
      .map(|entry| entry.value)
      .ok_or(TableError::KeyNotFound(key))
  }

  pub fn contains_key(&self, key: Key) -> bool {
    self.buckets[self.bucket_index(key)].find(key).is_some()
  }

  /// Removes `key` and returns its value, or `None` if it was absent.
  ///
  /// The shrink check runs after every call, including when nothing was removed.
  pub fn remove(&mut self, key: Key) -> Option<Value> {
    let index = self.bucket_index(key);
    let removed = self.buckets[index].remove(key).map(|entry| entry.value);
    if removed.is_some() {
      self.size -= 1;
    }

    if self.size as f64 <= self.capacity as f64 * self.config.shrink_threshold && self.capacity > MIN_CAPACITY {
      self.resize((self.capacity / 2).max(MIN_CAPACITY));
    }

    removed
  }

  /// Rebuilds the table with `new_capacity` buckets, re-inserting every entry
  /// in bucket order then chain order.
  fn resize(&mut self, new_capacity: usize) {
    debug!(
      "{} table from {} to {} buckets ({} entries)",
      if new_capacity > self.capacity { "growing" } else { "shrinking" },
      self.capacity,
      new_capacity,
      self.size
    );

    let mut resized = Table::from_parts(normalize_capacity(new_capacity), self.config);
    for chain in &mut self.buckets {
      for entry in chain.iter() {
        resized.insert(entry.key, entry.value);
      }
      chain.clear();
    }

    *self = resized;
  }

  /// Bucket that `key` hashes to at the current capacity. Changes on every resize.
  pub fn bucket_index(&self, key: Key) -> usize {
    bucket_index_for(key, self.config.multiplier, self.capacity)
  }

  pub fn len(&self) -> usize {
    self.size
  }

  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn load_factor(&self) -> f64 {
    self.size as f64 / self.capacity as f64
  }

  pub fn config(&self) -> &TableConfig {
    &self.config
  }

  pub fn buckets(&self) -> &[Chain] {
    &self.buckets
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      table: self,
      current_bucket: 0,
      current_index: 0,
      items_yielded: 0,
    }
  }
}

impl Default for Table {
  fn default() -> Self {
    Self::new()
  }
}

// floor(capacity * frac(key * multiplier))
fn bucket_index_for(key: Key, multiplier: f64, capacity: usize) -> usize {
  let product = key as f64 * multiplier;
  let fraction = product - product.floor();
  let index = (capacity as f64 * fraction) as usize;
  index.min(capacity - 1)
}

impl fmt::Display for Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, chain) in self.buckets.iter().enumerate() {
      writeln!(f, "Bucket {}: {}", index, chain)?;
    }
    Ok(())
  }
}

pub struct Iter<'a> {
  table: &'a Table,
  current_bucket: usize,
  current_index: usize,
  items_yielded: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = (Key, Value);

  fn next(&mut self) -> Option<Self::Item> {
    if self.items_yielded >= self.table.size {
      return None;
    }

    while let Some(chain) = self.table.buckets.get(self.current_bucket) {
      if let Some(entry) = chain.get(self.current_index) {
        self.current_index += 1;
        self.items_yielded += 1;
        return Some((entry.key, entry.value));
      }

      self.current_bucket += 1;
      self.current_index = 0;
    }

    None
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.table.size - self.items_yielded;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

pub struct IntoIter {
  buckets: std::vec::IntoIter<Chain>,
  current: std::vec::IntoIter<Entry>,
  remaining: usize,
}

impl Iterator for IntoIter {
  type Item = (Key, Value);

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(entry) = self.current.next() {
        self.remaining -= 1;
        return Some((entry.key, entry.value));
      }
      self.current = self.buckets.next()?.into_iter();
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Table {
  type Item = (Key, Value);
  type IntoIter = IntoIter;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter {
      buckets: self.buckets.into_iter(),
      current: Vec::new().into_iter(),
      remaining: self.size,
    }
  }
}

impl<'a> IntoIterator for &'a Table {
  type Item = (Key, Value);
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl FromIterator<(Key, Value)> for Table {
  fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
    let iter = iter.into_iter();
    // Upper bounds of adapters like take_while can be near usize::MAX.
    let (lower, _) = iter.size_hint();

    let mut table = Table::new_with_capacity(lower);
    table.extend(iter);
    table
  }
}

impl Extend<(Key, Value)> for Table {
  fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
    for (key, value) in iter {
      self.insert(key, value);
    }
  }
}
