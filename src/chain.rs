use std::fmt;

use crate::{Key, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
  pub key: Key,
  pub value: Value,
}

/// The entries of one bucket, kept in insertion order.
///
/// A chain does not enforce key uniqueness; the table checks with [`Chain::find`]
/// before it appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
  entries: Vec<Entry>,
}

impl Entry {
  pub fn new(key: Key, value: Value) -> Self {
    Self { key, value }
  }
}

impl Chain {
  pub fn new() -> Self {
    Self { entries: Vec::new() }
  }

  /// Appends at the tail, even if `key` is already present.
  pub fn insert(&mut self, key: Key, value: Value) {
    self.entries.push(Entry::new(key, value));
  }

  /// First entry with a matching key, scanning head to tail.
  pub fn find(&self, key: Key) -> Option<&Entry> {
    self.entries.iter().find(|entry| entry.key == key)
  }

  /// Unlinks the first entry with a matching key. Remaining entries keep their order.
  pub fn remove(&mut self, key: Key) -> Option<Entry> {
    let position = self.entries.iter().position(|entry| entry.key == key)?;
    Some(self.entries.remove(position))
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn head(&self) -> Option<&Entry> {
    self.entries.first()
  }

  pub fn tail(&self) -> Option<&Entry> {
    self.entries.last()
  }

  /// Entry at `index`, counting from the head.
  pub fn get(&self, index: usize) -> Option<&Entry> {
    self.entries.get(index)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
    self.entries.iter()
  }
}

impl IntoIterator for Chain {
  type Item = Entry;
  type IntoIter = std::vec::IntoIter<Entry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl<'a> IntoIterator for &'a Chain {
  type Item = &'a Entry;
  type IntoIter = std::slice::Iter<'a, Entry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

impl fmt::Display for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.key, self.value)
  }
}

impl fmt::Display for Chain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for entry in &self.entries {
      write!(f, "{} -> ", entry)?;
    }
    write!(f, "NULL")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn chain_of(pairs: &[(Key, Value)]) -> Chain {
    let mut chain = Chain::new();
    for &(key, value) in pairs {
      chain.insert(key, value);
    }
    chain
  }

  fn keys(chain: &Chain) -> Vec<Key> {
    chain.iter().map(|entry| entry.key).collect()
  }

  #[test]
  fn test_insert_appends_at_tail() {
    let chain = chain_of(&[(1, 10), (2, 20), (3, 30)]);
    assert_eq!(keys(&chain), vec![1, 2, 3]);
    assert_eq!(chain.head(), Some(&Entry::new(1, 10)));
    assert_eq!(chain.tail(), Some(&Entry::new(3, 30)));
    assert_eq!(chain.len(), 3);
  }

  #[test]
  fn test_insert_does_not_check_duplicates() {
    let chain = chain_of(&[(5, 1), (5, 2)]);
    assert_eq!(chain.len(), 2);
    // find returns the first match
    assert_eq!(chain.find(5), Some(&Entry::new(5, 1)));
  }

  #[test]
  fn test_get_by_position() {
    let chain = chain_of(&[(7, 70), (3, 30)]);
    assert_eq!(chain.get(0), Some(&Entry::new(7, 70)));
    assert_eq!(chain.get(1), Some(&Entry::new(3, 30)));
    assert_eq!(chain.get(2), None);
  }

  #[test]
  fn test_find_missing() {
    let chain = chain_of(&[(1, 10)]);
    assert_eq!(chain.find(2), None);
    assert_eq!(Chain::new().find(1), None);
  }

  #[test]
  fn test_remove_endpoints_and_middle() {
    let mut chain = chain_of(&[(1, 10), (2, 20), (3, 30), (4, 40)]);

    assert_eq!(chain.remove(1), Some(Entry::new(1, 10)));
    assert_eq!(chain.head(), Some(&Entry::new(2, 20)));

    assert_eq!(chain.remove(4), Some(Entry::new(4, 40)));
    assert_eq!(chain.tail(), Some(&Entry::new(3, 30)));

    chain.insert(5, 50);
    assert_eq!(chain.remove(3), Some(Entry::new(3, 30)));
    assert_eq!(keys(&chain), vec![2, 5]);

    assert_eq!(chain.remove(2), Some(Entry::new(2, 20)));
    assert_eq!(chain.remove(5), Some(Entry::new(5, 50)));
    assert!(chain.is_empty());
    assert_eq!(chain.head(), None);
    assert_eq!(chain.tail(), None);
  }

  #[test]
  fn test_remove_missing_is_noop() {
    let mut chain = chain_of(&[(1, 10), (2, 20)]);
    assert_eq!(chain.remove(9), None);
    assert_eq!(keys(&chain), vec![1, 2]);
  }

  #[test]
  fn test_clear() {
    let mut chain = chain_of(&[(1, 10), (2, 20)]);
    chain.clear();
    assert!(chain.is_empty());
    assert_eq!(chain.find(1), None);
    chain.insert(3, 30);
    assert_eq!(keys(&chain), vec![3]);
  }

  #[test]
  fn test_display() {
    assert_eq!(Chain::new().to_string(), "NULL");
    let chain = chain_of(&[(2, 200), (10, 400)]);
    assert_eq!(chain.to_string(), "(2, 200) -> (10, 400) -> NULL");
  }
}
