use alloc::format;
use core::fmt;

use crate::{
  Color,
  NodeId,
  RbTree,
};

const EMPTY: &str = "∅";

impl<K: fmt::Display> RbTree<K> {
  fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, tab: &str) -> fmt::Result {
    let node = &self.nodes[id];
    let tag = match node.color() {
      Color::Red => "R",
      Color::Black => "B",
    };
    write!(f, "{} ({})", node.key(), tag)?;

    if node.is_leaf() {
      return Ok(());
    }

    for (child, last) in [(node.left(), false), (node.right(), true)] {
      let branch = if last { "└─" } else { "├─" };
      write!(f, "\n{}{} ", tab, branch)?;
      match child {
        Some(child) => {
          let child_tab = format!("{}{}", tab, if last { "   " } else { "│  " });
          self.write_node(f, child, &child_tab)?;
        }
        None => f.write_str(EMPTY)?,
      }
    }
    Ok(())
  }
}

/// Indented dump, one node per line with its color; `∅` marks an empty
/// child slot next to a real sibling.
impl<K: fmt::Display> fmt::Display for RbTree<K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.root {
      Some(root) => self.write_node(f, root, ""),
      None => f.write_str(EMPTY),
    }
  }
}
