#![cfg_attr(not(test), no_std)]

//! Single-writer wrapper for sharing one [`RbTree`] between threads.
//!
//! The tree itself has no internal synchronization; every call here takes
//! the lock for its whole duration, so callers observe operations one at a
//! time.

use log::trace;
use redblack_tree::{
  NodeId,
  RbConfig,
  RbResult,
  RbTree,
};
use spin::Mutex;

pub struct SharedTree<K> {
  inner: Mutex<RbTree<K>>,
}

impl<K> SharedTree<K> {
  pub fn new() -> Self {
    Self::from(RbTree::new())
  }

  pub fn with_config(config: RbConfig) -> Self {
    Self::from(RbTree::with_config(config))
  }

  pub fn len(&self) -> usize {
    self.inner.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.lock().is_empty()
  }

  /// Runs `f` against the tree under the lock.
  pub fn with<R>(&self, f: impl FnOnce(&RbTree<K>) -> R) -> R {
    let guard = self.inner.lock();
    f(&guard)
  }

  /// Runs `f` against the tree under the lock, allowing a batch of
  /// mutations to appear as one step to other threads.
  pub fn with_mut<R>(&self, f: impl FnOnce(&mut RbTree<K>) -> R) -> R {
    let mut guard = self.inner.lock();
    f(&mut guard)
  }

  pub fn into_inner(self) -> RbTree<K> {
    self.inner.into_inner()
  }
}

impl<K: Ord> SharedTree<K> {
  pub fn insert(&self, key: K) -> RbResult<NodeId> {
    let mut tree = self.inner.lock();
    let id = tree.insert(key)?;
    trace!("shared insert {} ({} keys)", id, tree.len());
    Ok(id)
  }

  pub fn delete(&self, key: &K) -> Option<K> {
    let mut tree = self.inner.lock();
    let removed = tree.delete(key);
    trace!("shared delete hit={} ({} keys)", removed.is_some(), tree.len());
    removed
  }

  pub fn contains(&self, key: &K) -> bool {
    self.inner.lock().contains(key)
  }

  pub fn validate(&self) -> RbResult<()> {
    self.inner.lock().validate()
  }
}

impl<K: Clone> SharedTree<K> {
  /// Smallest key, cloned out so the lock is not held by the caller.
  pub fn first(&self) -> Option<K> {
    let tree = self.inner.lock();
    tree.first().and_then(|id| tree.key(id)).cloned()
  }

  pub fn last(&self) -> Option<K> {
    let tree = self.inner.lock();
    tree.last().and_then(|id| tree.key(id)).cloned()
  }
}

impl<K> From<RbTree<K>> for SharedTree<K> {
  fn from(tree: RbTree<K>) -> Self {
    Self {
      inner: Mutex::new(tree),
    }
  }
}

impl<K> Default for SharedTree<K> {
  fn default() -> Self {
    Self::new()
  }
}
