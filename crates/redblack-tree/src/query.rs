use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::{
  Dir,
  NodeId,
  RbNode,
  RbTree,
};

impl<K: Ord> RbTree<K> {
  /// First node on the search path whose key equals `key`.
  pub fn find(&self, key: &K) -> Option<NodeId> {
    let mut cursor = self.root;
    while let Some(current) = cursor {
      let node = &self.nodes[current];
      cursor = match key.cmp(node.key()) {
        Ordering::Equal => return Some(current),
        Ordering::Less => node.left(),
        Ordering::Greater => node.right(),
      };
    }
    None
  }

  #[inline]
  pub fn contains(&self, key: &K) -> bool {
    self.find(key).is_some()
  }
}

impl<K> RbTree<K> {
  /// Read-only view of a node, or `None` for a stale id.
  #[inline(always)]
  pub fn get(&self, id: NodeId) -> Option<&RbNode<K>> {
    self.nodes.get(id)
  }

  #[inline(always)]
  pub fn key(&self, id: NodeId) -> Option<&K> {
    self.nodes.get(id).map(RbNode::key)
  }

  /// Leftmost node of the subtree rooted at `id`, or `None` for a stale id.
  pub fn minimum(&self, id: NodeId) -> Option<NodeId> {
    self.nodes.get(id)?;
    Some(self.extreme(id, Dir::Left))
  }

  /// Rightmost node of the subtree rooted at `id`, or `None` for a stale id.
  pub fn maximum(&self, id: NodeId) -> Option<NodeId> {
    self.nodes.get(id)?;
    Some(self.extreme(id, Dir::Right))
  }

  pub(crate) fn extreme(&self, mut id: NodeId, dir: Dir) -> NodeId {
    while let Some(next) = self.nodes[id].child(dir) {
      id = next;
    }
    id
  }

  pub fn first(&self) -> Option<NodeId> {
    self.root.map(|root| self.extreme(root, Dir::Left))
  }

  pub fn last(&self) -> Option<NodeId> {
    self.root.map(|root| self.extreme(root, Dir::Right))
  }

  fn step(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
    if let Some(child) = self.nodes.get(id)?.child(dir) {
      return Some(self.extreme(child, dir.opposite()));
    }

    let mut current = id;
    let mut parent = self.parent_of(current);
    while let Some(up) = parent {
      if self.nodes[up].child(dir) != Some(current) {
        return Some(up);
      }
      current = up;
      parent = self.parent_of(up);
    }
    None
  }

  /// In-order successor, or `None` at the end or for a stale id.
  pub fn successor(&self, id: NodeId) -> Option<NodeId> {
    self.step(id, Dir::Right)
  }

  pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
    self.step(id, Dir::Left)
  }

  /// Node count on the longest root-to-leaf path; `0` for an empty tree.
  pub fn height(&self) -> usize {
    let mut max = 0;
    let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

    while let Some((id, depth)) = stack.pop() {
      max = max.max(depth);
      let node = &self.nodes[id];
      for child in [node.left(), node.right()].into_iter().flatten() {
        stack.push((child, depth + 1));
      }
    }
    max
  }

  /// Black nodes below the root down to and including the sentinel, along
  /// the leftmost path; `0` for an empty tree. `validate` guarantees every
  /// path agrees.
  pub fn black_height(&self) -> usize {
    let Some(root) = self.root else {
      return 0;
    };

    let mut count = 1;
    let mut cursor = self.nodes[root].left();
    while let Some(id) = cursor {
      if self.nodes[id].color().is_black() {
        count += 1;
      }
      cursor = self.nodes[id].left();
    }
    count
  }
}
