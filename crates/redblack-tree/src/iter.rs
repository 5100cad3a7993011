use core::iter::FusedIterator;

use crate::{
  NodeId,
  RbTree,
};

/// In-order keys, non-decreasing front to back.
pub struct Iter<'tree, K> {
  tree: &'tree RbTree<K>,
  front: Option<NodeId>,
  back: Option<NodeId>,
  remaining: usize,
}

impl<K> RbTree<K> {
  pub fn iter(&self) -> Iter<'_, K> {
    Iter {
      tree: self,
      front: self.first(),
      back: self.last(),
      remaining: self.len(),
    }
  }
}

impl<'tree, K> Iterator for Iter<'tree, K> {
  type Item = &'tree K;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let id = self.front?;
    self.remaining -= 1;
    self.front = self.tree.successor(id);
    self.tree.key(id)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let id = self.back?;
    self.remaining -= 1;
    self.back = self.tree.predecessor(id);
    self.tree.key(id)
  }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'tree, K> IntoIterator for &'tree RbTree<K> {
  type Item = &'tree K;
  type IntoIter = Iter<'tree, K>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
