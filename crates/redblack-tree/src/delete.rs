use log::{
  debug,
  trace,
};

use crate::{
  Color,
  Dir,
  NodeId,
  RbTree,
};

impl<K: Ord> RbTree<K> {
  /// Removes the first node whose key equals `key`, the same node `find`
  /// returns. Absent keys are a no-op.
  pub fn delete(&mut self, key: &K) -> Option<K> {
    let target = self.find(key)?;
    let removed = self.unlink(target);
    self.check_after_op();
    removed
  }

  /// Removes the node behind `id`. Stale ids are a no-op.
  pub fn remove_node(&mut self, id: NodeId) -> Option<K> {
    let removed = self.unlink(id);
    self.check_after_op();
    removed
  }
}

impl<K> RbTree<K> {
  // Two-child nodes are replaced in place by their predecessor.
  fn unlink(&mut self, target: NodeId) -> Option<K> {
    let node = self.nodes.get(target)?;
    let (left, right, parent, color) = (node.left(), node.right(), node.parent(), node.color());

    // `gap` is whatever now sits where a node was physically removed; it may
    // be the sentinel, so its parent travels alongside it.
    let (gap, gap_parent, removed_color) = match (left, right) {
      (None, _) => {
        self.transplant(target, right);
        (right, parent, color)
      }
      (Some(_), None) => {
        self.transplant(target, left);
        (left, parent, color)
      }
      (Some(left), Some(right)) => {
        let sub = self.extreme(left, Dir::Right);
        let sub_color = self.nodes[sub].color();
        let sub_left = self.nodes[sub].left();

        let gap_parent = if self.parent_of(sub) == Some(target) {
          Some(sub)
        } else {
          let sub_parent = self.parent_of(sub);
          self.transplant(sub, sub_left);
          self.nodes[sub].set_child(Dir::Left, Some(left));
          self.nodes[left].set_parent(Some(sub));
          sub_parent
        };

        self.transplant(target, Some(sub));
        self.nodes[sub].set_child(Dir::Right, Some(right));
        self.nodes[right].set_parent(Some(sub));
        self.set_color(sub, color);

        debug!("delete {}: predecessor {} takes its place", target, sub);
        (sub_left, gap_parent, sub_color)
      }
    };

    let removed = self.nodes.remove(target)?;
    debug!("delete {} ({:?})", target, removed_color);

    if removed_color.is_black() {
      self.delete_fixup(gap, gap_parent);
    }

    Some(removed.into_key())
  }

  fn transplant(&mut self, at: NodeId, with: Option<NodeId>) {
    let parent = self.parent_of(at);
    self.replace_child(parent, at, with);
    if let Some(with) = with {
      self.nodes[with].set_parent(parent);
    }
  }

  pub(crate) fn delete_fixup(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
    while node != self.root && !self.is_red(node) {
      let Some(up) = parent else {
        break;
      };

      let side = self.side_of(node, up);
      let far_side = side.opposite();
      let mut sibling = self.nodes[up].child(far_side);

      if let Some(red) = sibling.filter(|&s| self.is_red(Some(s))) {
        trace!("delete-fixup: red sibling {}, rotate {:?} at {}", red, side, up);
        self.set_color(red, Color::Black);
        self.set_color(up, Color::Red);
        self.rotate(up, side);
        sibling = self.nodes[up].child(far_side);
      }

      // A black deficiency below `up` means the sibling subtree holds at
      // least one real black node.
      let Some(mut sib) = sibling else {
        break;
      };

      let near = self.nodes[sib].child(side);
      let far = self.nodes[sib].child(far_side);
      if !self.is_red(near) && !self.is_red(far) {
        trace!("delete-fixup: black nephews, push deficiency to {}", up);
        self.set_color(sib, Color::Red);
        node = Some(up);
        parent = self.parent_of(up);
        continue;
      }

      if !self.is_red(far) {
        if let Some(near) = near {
          trace!("delete-fixup: near red nephew {}, rotate {:?} at {}", near, far_side, sib);
          self.set_color(near, Color::Black);
          self.set_color(sib, Color::Red);
          self.rotate(sib, far_side);
        }
        sib = match self.nodes[up].child(far_side) {
          Some(sib) => sib,
          None => break,
        };
      }

      trace!("delete-fixup: far red nephew, rotate {:?} at {}", side, up);
      let up_color = self.nodes[up].color();
      self.set_color(sib, up_color);
      self.set_color(up, Color::Black);
      if let Some(far) = self.nodes[sib].child(far_side) {
        self.set_color(far, Color::Black);
      }
      self.rotate(up, side);
      node = self.root;
      parent = None;
    }

    if let Some(node) = node {
      self.set_color(node, Color::Black);
    }
  }
}
