use crate::{
  NodeId,
  RbError,
  RbResult,
  RbTree,
};

impl<K: Ord> RbTree<K> {
  /// Checks every structural and coloring invariant, returning the first
  /// violation found.
  ///
  /// Keys in a left subtree compare `<=` their ancestor and keys in a right
  /// subtree `>=`, which admits chained duplicates after rotations.
  pub fn validate(&self) -> RbResult<()> {
    let Some(root) = self.root else {
      return match self.nodes.len() {
        0 => Ok(()),
        recorded => Err(RbError::LenMismatch {
          counted: 0,
          recorded,
        }),
      };
    };

    if self.nodes.get(root).is_none() {
      return Err(RbError::ParentLink(root));
    }
    if self.parent_of(root).is_some() {
      return Err(RbError::RootHasParent(root));
    }
    if self.is_red(Some(root)) {
      return Err(RbError::RedRoot(root));
    }

    let mut counted = 0;
    self.check_subtree(root, None, None, &mut counted)?;

    if counted != self.nodes.len() {
      return Err(RbError::LenMismatch {
        counted,
        recorded: self.nodes.len(),
      });
    }
    Ok(())
  }

  fn check_subtree(
    &self,
    id: NodeId,
    lower: Option<&K>,
    upper: Option<&K>,
    counted: &mut usize,
  ) -> RbResult<usize> {
    *counted += 1;
    if *counted > self.nodes.len() {
      // A cycle or shared child; the walk would never finish.
      return Err(RbError::ParentLink(id));
    }

    let node = &self.nodes[id];
    let key = node.key();
    if lower.is_some_and(|lower| key < lower) || upper.is_some_and(|upper| key > upper) {
      return Err(RbError::Order(id));
    }

    let mut heights = [1usize; 2];
    for (slot, child, lower, upper) in [
      (0, node.left(), lower, Some(key)),
      (1, node.right(), Some(key), upper),
    ] {
      let Some(child) = child else {
        continue;
      };
      let Some(child_node) = self.nodes.get(child) else {
        return Err(RbError::ParentLink(child));
      };
      if child_node.parent() != Some(id) {
        return Err(RbError::ParentLink(child));
      }
      if node.color().is_red() && child_node.color().is_red() {
        return Err(RbError::RedRed { parent: id, child });
      }
      heights[slot] = self.check_subtree(child, lower, upper, counted)?;
    }

    if heights[0] != heights[1] {
      return Err(RbError::BlackHeight(id));
    }

    Ok(heights[0] + usize::from(node.color().is_black()))
  }
}
