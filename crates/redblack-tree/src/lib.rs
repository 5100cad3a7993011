#![cfg_attr(not(test), no_std)]

//! Arena-backed red-black tree over totally ordered keys.
//!
//! Nodes live in a [`redblack_arena::Arena`] and link to each other through
//! [`NodeId`] indices. An absent link is the sentinel and reads as
//! [`Color::Black`] wherever a color is inspected. Equal keys are accepted by
//! default and chain down the right side of the first equal node.

extern crate alloc;

use core::fmt;

use redblack_arena::Arena;

pub mod config;

mod check;
mod delete;
mod dump;
mod insert;
mod iter;
mod node;
mod query;
mod rotate;

pub use config::{
  Duplicates,
  RbConfig,
};
pub use iter::Iter;
pub use node::{
  Color,
  Dir,
  RbNode,
};
pub use redblack_arena::{
  ArenaError,
  NodeId,
};

#[derive(Debug, PartialEq, Eq)]
pub enum RbError {
  Arena(ArenaError),
  Duplicate,
  RedRoot(NodeId),
  RootHasParent(NodeId),
  RedRed { parent: NodeId, child: NodeId },
  BlackHeight(NodeId),
  Order(NodeId),
  ParentLink(NodeId),
  LenMismatch { counted: usize, recorded: usize },
}

impl fmt::Display for RbError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RbError::Arena(ArenaError::Exhausted) => write!(f, "node arena exhausted"),
      RbError::Duplicate => write!(f, "key already present"),
      RbError::RedRoot(id) => write!(f, "root {} is red", id),
      RbError::RootHasParent(id) => write!(f, "root {} has a parent link", id),
      RbError::RedRed { parent, child } => {
        write!(f, "red node {} has red child {}", parent, child)
      }
      RbError::BlackHeight(id) => write!(f, "black height differs below {}", id),
      RbError::Order(id) => write!(f, "key at {} is out of order", id),
      RbError::ParentLink(id) => write!(f, "parent link of {} is inconsistent", id),
      RbError::LenMismatch { counted, recorded } => {
        write!(f, "reachable nodes {} != recorded length {}", counted, recorded)
      }
    }
  }
}

pub type RbResult<T> = Result<T, RbError>;

pub struct RbTree<K> {
  nodes: Arena<RbNode<K>>,
  root: Option<NodeId>,
  config: RbConfig,
}

impl<K> RbTree<K> {
  pub fn new() -> Self {
    Self::with_config(RbConfig::default())
  }

  pub fn with_config(config: RbConfig) -> Self {
    Self {
      nodes: Arena::with_capacity(config.capacity()),
      root: None,
      config,
    }
  }

  #[inline(always)]
  pub fn config(&self) -> &RbConfig {
    &self.config
  }

  #[inline(always)]
  pub fn root(&self) -> Option<NodeId> {
    self.root
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.root.is_none()
  }

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.root = None;
  }

  /// Color of a link; the sentinel (`None`) and stale ids read as black.
  #[inline(always)]
  pub fn color_of(&self, id: Option<NodeId>) -> Color {
    id.and_then(|id| self.nodes.get(id)).map_or(Color::Black, |node| node.color())
  }

  #[inline(always)]
  fn is_red(&self, id: Option<NodeId>) -> bool {
    self.color_of(id).is_red()
  }

  #[inline(always)]
  fn set_color(&mut self, id: NodeId, color: Color) {
    self.nodes[id].set_color(color);
  }

  #[inline(always)]
  fn parent_of(&self, id: NodeId) -> Option<NodeId> {
    self.nodes[id].parent()
  }

  // A sentinel child resolves to the empty side of `parent`, left first.
  #[inline(always)]
  fn side_of(&self, child: Option<NodeId>, parent: NodeId) -> Dir {
    if self.nodes[parent].left() == child {
      Dir::Left
    } else {
      Dir::Right
    }
  }

  fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
    match parent {
      None => self.root = new,
      Some(parent) => {
        let side = self.side_of(Some(old), parent);
        self.nodes[parent].set_child(side, new);
      }
    }
  }
}

impl<K: Ord> RbTree<K> {
  #[inline]
  fn check_after_op(&self) {
    if cfg!(debug_assertions) && self.config.check_after_ops() {
      if let Err(err) = self.validate() {
        panic!("red-black invariant broken: {}", err);
      }
    }
  }
}

impl<K> Default for RbTree<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

#[cfg(test)]
mod tests;
