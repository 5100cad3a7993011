use getset::{
  CopyGetters,
  Getters,
};
use redblack_arena::NodeId;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Color {
  #[default]
  Red,
  Black,
}

impl Color {
  #[inline(always)]
  pub const fn is_red(self) -> bool {
    matches!(self, Color::Red)
  }

  #[inline(always)]
  pub const fn is_black(self) -> bool {
    matches!(self, Color::Black)
  }
}

/// Child side. Rotations and fixups are written once against `Dir` and
/// mirrored through [`Dir::opposite`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dir {
  Left,
  Right,
}

impl Dir {
  #[inline(always)]
  pub const fn opposite(self) -> Self {
    match self {
      Dir::Left => Dir::Right,
      Dir::Right => Dir::Left,
    }
  }
}

/// A colored key holder. `None` links are the sentinel: black, keyless and
/// never dereferenced. `parent` is a navigation back-link only; the arena
/// owns every node.
#[derive(Debug, Getters, CopyGetters)]
pub struct RbNode<K> {
  #[getset(get = "pub")]
  key: K,
  #[getset(get_copy = "pub")]
  color: Color,
  #[getset(get_copy = "pub")]
  parent: Option<NodeId>,
  #[getset(get_copy = "pub")]
  left: Option<NodeId>,
  #[getset(get_copy = "pub")]
  right: Option<NodeId>,
}

impl<K> RbNode<K> {
  pub(crate) fn new(key: K, parent: Option<NodeId>) -> Self {
    Self {
      key,
      color: Color::default(),
      parent,
      left: None,
      right: None,
    }
  }

  #[inline(always)]
  pub fn child(&self, dir: Dir) -> Option<NodeId> {
    match dir {
      Dir::Left => self.left,
      Dir::Right => self.right,
    }
  }

  #[inline(always)]
  pub fn is_leaf(&self) -> bool {
    self.left.is_none() && self.right.is_none()
  }

  #[inline(always)]
  pub(crate) fn set_child(&mut self, dir: Dir, child: Option<NodeId>) {
    match dir {
      Dir::Left => self.left = child,
      Dir::Right => self.right = child,
    }
  }

  #[inline(always)]
  pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
    self.parent = parent;
  }

  #[inline(always)]
  pub(crate) fn set_color(&mut self, color: Color) {
    self.color = color;
  }

  pub(crate) fn into_key(self) -> K {
    self.key
  }
}
