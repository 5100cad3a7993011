use log::{
  trace,
  warn,
};

use crate::{
  Dir,
  NodeId,
  RbTree,
};

impl<K> RbTree<K> {
  // The child opposite `dir` takes `node`'s place. Colors are untouched.
  pub(crate) fn rotate(&mut self, node: NodeId, dir: Dir) {
    let promoted = dir.opposite();
    let pivot = self.nodes[node].child(promoted);
    debug_assert!(
      pivot.is_some(),
      "rotate {:?} at {} without a {:?} child",
      dir,
      node,
      promoted
    );
    let Some(pivot) = pivot else {
      warn!("rotate {:?} at {} skipped: no {:?} child", dir, node, promoted);
      return;
    };

    trace!("rotate {:?} at {} (pivot {})", dir, node, pivot);

    let inner = self.nodes[pivot].child(dir);
    self.nodes[node].set_child(promoted, inner);
    if let Some(inner) = inner {
      self.nodes[inner].set_parent(Some(node));
    }

    let parent = self.parent_of(node);
    self.nodes[pivot].set_parent(parent);
    self.replace_child(parent, node, Some(pivot));

    self.nodes[pivot].set_child(dir, Some(node));
    self.nodes[node].set_parent(Some(pivot));
  }
}
