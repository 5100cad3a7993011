use log::warn;
use redblack::prelude::RbTree;

use crate::RbTreeHandle;

/// Borrows the tree behind `handle`, or returns `missing` for a null handle.
///
/// # Safety
/// A non-null `handle` must come from `rb_tree_new` and still be live.
pub(crate) unsafe fn with_tree<R>(
  handle: *const RbTreeHandle,
  missing: R,
  f: impl FnOnce(&RbTree<i64>) -> R,
) -> R {
  match unsafe { handle.as_ref() } {
    Some(handle) => f(&handle.tree),
    None => {
      warn!("null tree handle");
      missing
    }
  }
}

/// # Safety
/// Same as [`with_tree`], and no other reference to the handle may be live.
pub(crate) unsafe fn with_tree_mut<R>(
  handle: *mut RbTreeHandle,
  missing: R,
  f: impl FnOnce(&mut RbTree<i64>) -> R,
) -> R {
  match unsafe { handle.as_mut() } {
    Some(handle) => f(&mut handle.tree),
    None => {
      warn!("null tree handle");
      missing
    }
  }
}
