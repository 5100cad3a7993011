use log::{
  debug,
  trace,
};

use crate::{
  Color,
  Dir,
  Duplicates,
  NodeId,
  RbError,
  RbNode,
  RbResult,
  RbTree,
};

impl<K: Ord> RbTree<K> {
  /// Inserts `key` as a red leaf and rebalances.
  ///
  /// Keys strictly less than a node go left, everything else goes right, so
  /// an equal key lands in the right subtree of the first equal node on the
  /// path. Under [`Duplicates::Reject`] that case returns
  /// [`RbError::Duplicate`] and the tree is left untouched.
  pub fn insert(&mut self, key: K) -> RbResult<NodeId> {
    let mut parent = None;
    let mut side = Dir::Left;
    let mut cursor = self.root;

    while let Some(current) = cursor {
      let node = &self.nodes[current];
      side = if key < *node.key() {
        Dir::Left
      } else if self.config.duplicates() == Duplicates::Reject && key == *node.key() {
        return Err(RbError::Duplicate);
      } else {
        Dir::Right
      };
      parent = Some(current);
      cursor = node.child(side);
    }

    let id = self
      .nodes
      .insert(RbNode::new(key, parent))
      .map_err(RbError::Arena)?;

    match parent {
      None => {
        self.root = Some(id);
        self.set_color(id, Color::Black);
        debug!("insert {} as root", id);
      }
      Some(parent) => {
        self.nodes[parent].set_child(side, Some(id));
        debug!("insert {} as {:?} child of {}", id, side, parent);
        self.insert_fixup(id);
      }
    }

    self.check_after_op();
    Ok(id)
  }
}

impl<K> RbTree<K> {
  // Only a red-red edge between `node` and its parent is carried up.
  pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
    while self.is_red(Some(node)) {
      let Some(parent) = self.parent_of(node) else {
        break;
      };
      if !self.is_red(Some(parent)) {
        break;
      }
      // A red parent is never the root.
      let Some(grand) = self.parent_of(parent) else {
        break;
      };

      let side = self.side_of(Some(parent), grand);
      let uncle = self.nodes[grand].child(side.opposite());

      if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
        trace!("insert-fixup: red uncle {}, recolor {}", uncle, grand);
        self.set_color(parent, Color::Black);
        self.set_color(uncle, Color::Black);
        self.set_color(grand, Color::Red);
        node = grand;
        continue;
      }

      let mut parent = parent;
      if self.nodes[parent].child(side.opposite()) == Some(node) {
        trace!("insert-fixup: inner child {}, rotate {:?} at {}", node, side, parent);
        self.rotate(parent, side);
        node = parent;
        parent = match self.parent_of(node) {
          Some(parent) => parent,
          None => break,
        };
      }

      trace!("insert-fixup: outer child {}, rotate {:?} at {}", node, side.opposite(), grand);
      self.set_color(parent, Color::Black);
      self.set_color(grand, Color::Red);
      self.rotate(grand, side.opposite());
      break;
    }

    if let Some(root) = self.root {
      self.set_color(root, Color::Black);
    }
  }
}
