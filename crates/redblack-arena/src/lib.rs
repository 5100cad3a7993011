#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::{
  fmt,
  ops::{
    Index,
    IndexMut,
  },
};

use getset::CopyGetters;

/// Highest slot count an arena hands out; ids are `u32` indices.
const MAX_SLOTS: usize = u32::MAX as usize;

#[derive(Debug, PartialEq, Eq)]
pub enum ArenaError {
  Exhausted,
}

pub type ArenaResult<T> = Result<T, ArenaError>;

/// Handle to a live slot. A slot index is recycled by later inserts, but the
/// generation tells the new occupant apart from the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
  index: u32,
  generation: u32,
}

impl NodeId {
  #[inline(always)]
  pub const fn index(self) -> usize {
    self.index as usize
  }

  #[inline(always)]
  pub const fn generation(self) -> u32 {
    self.generation
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.index)
  }
}

#[derive(Debug)]
enum Slot<T> {
  Occupied { generation: u32, value: T },
  Vacant { generation: u32, next: Option<u32> },
}

/// Dense slot storage with a LIFO free list.
#[derive(Debug, CopyGetters)]
pub struct Arena<T> {
  slots: Vec<Slot<T>>,
  free: Option<u32>,
  #[getset(get_copy = "pub")]
  len: usize,
}

impl<T> Arena<T> {
  pub const fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: None,
      len: 0,
    }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      slots: Vec::with_capacity(capacity.min(MAX_SLOTS)),
      free: None,
      len: 0,
    }
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  pub fn insert(&mut self, value: T) -> ArenaResult<NodeId> {
    if let Some(head) = self.free {
      let slot = &mut self.slots[head as usize];
      if let Slot::Vacant { generation, next } = *slot {
        *slot = Slot::Occupied { generation, value };
        self.free = next;
        self.len += 1;
        return Ok(NodeId {
          index: head,
          generation,
        });
      }
      debug_assert!(false, "free list points at a live slot");
      self.free = None;
    }

    if self.slots.len() >= MAX_SLOTS {
      return Err(ArenaError::Exhausted);
    }

    let id = NodeId {
      index: self.slots.len() as u32,
      generation: 0,
    };
    self.slots.push(Slot::Occupied {
      generation: 0,
      value,
    });
    self.len += 1;
    Ok(id)
  }

  pub fn remove(&mut self, id: NodeId) -> Option<T> {
    let slot = self.slots.get_mut(id.index())?;
    match slot {
      Slot::Occupied { generation, .. } if *generation == id.generation => {}
      _ => return None,
    }

    let vacant = Slot::Vacant {
      generation: id.generation.wrapping_add(1),
      next: self.free,
    };
    let prev = core::mem::replace(slot, vacant);
    self.free = Some(id.index);
    self.len -= 1;

    match prev {
      Slot::Occupied { value, .. } => Some(value),
      Slot::Vacant { .. } => None,
    }
  }

  #[inline(always)]
  pub fn get(&self, id: NodeId) -> Option<&T> {
    match self.slots.get(id.index())? {
      Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
      _ => None,
    }
  }

  #[inline(always)]
  pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
    match self.slots.get_mut(id.index())? {
      Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
      _ => None,
    }
  }

  pub fn contains(&self, id: NodeId) -> bool {
    self.get(id).is_some()
  }

  /// Drops every value but keeps the slots, so ids handed out before the
  /// clear stay stale.
  pub fn clear(&mut self) {
    let mut free = None;
    for (idx, slot) in self.slots.iter_mut().enumerate().rev() {
      let generation = match slot {
        Slot::Occupied { generation, .. } => generation.wrapping_add(1),
        Slot::Vacant { generation, .. } => *generation,
      };
      *slot = Slot::Vacant {
        generation,
        next: free,
      };
      free = Some(idx as u32);
    }
    self.free = free;
    self.len = 0;
  }

  pub fn iter(&self) -> ArenaIter<'_, T> {
    ArenaIter {
      inner: self.slots.iter().enumerate(),
      remaining: self.len,
    }
  }
}

impl<T> Default for Arena<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Index<NodeId> for Arena<T> {
  type Output = T;

  fn index(&self, id: NodeId) -> &Self::Output {
    match self.get(id) {
      Some(value) => value,
      None => panic!("stale arena id {}", id),
    }
  }
}

impl<T> IndexMut<NodeId> for Arena<T> {
  fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
    match self.get_mut(id) {
      Some(value) => value,
      None => panic!("stale arena id {}", id),
    }
  }
}

/// Live `(NodeId, &T)` pairs in slot order.
pub struct ArenaIter<'arena, T> {
  inner: core::iter::Enumerate<core::slice::Iter<'arena, Slot<T>>>,
  remaining: usize,
}

impl<'arena, T> Iterator for ArenaIter<'arena, T> {
  type Item = (NodeId, &'arena T);

  fn next(&mut self) -> Option<Self::Item> {
    for (idx, slot) in self.inner.by_ref() {
      if let Slot::Occupied { generation, value } = slot {
        self.remaining -= 1;
        let id = NodeId {
          index: idx as u32,
          generation: *generation,
        };
        return Some((id, value));
      }
    }
    None
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for ArenaIter<'_, T> {}
