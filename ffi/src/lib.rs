//! C ABI over an `i64` keyed tree. Callers parse and validate input before
//! it reaches these functions; keys arrive already well-typed.

use libc::{
  c_int,
  size_t,
};
use log::{
  LevelFilter,
  warn,
};
use simplelog::{
  ColorChoice,
  Config,
  TermLogger,
  TerminalMode,
};

pub use redblack::prelude::*;

mod handler;

use handler::{
  with_tree,
  with_tree_mut,
};

pub const RB_OK: c_int = 0;
pub const RB_NULL: c_int = -1;
pub const RB_NOT_FOUND: c_int = -2;
pub const RB_FAILED: c_int = -3;

/// Opaque to C.
pub struct RbTreeHandle {
  tree: RbTree<i64>,
}

#[unsafe(no_mangle)]
pub extern "C" fn rb_tree_new() -> *mut RbTreeHandle {
  Box::into_raw(Box::new(RbTreeHandle {
    tree: RbTree::new(),
  }))
}

/// # Safety
/// `handle` must be null or come from `rb_tree_new`, and is dangling after
/// this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_free(handle: *mut RbTreeHandle) {
  if handle.is_null() {
    return;
  }
  drop(unsafe { Box::from_raw(handle) });
}

/// # Safety
/// `handle` must be null or a live handle from `rb_tree_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_insert(handle: *mut RbTreeHandle, key: i64) -> c_int {
  unsafe {
    with_tree_mut(handle, RB_NULL, |tree| match tree.insert(key) {
      Ok(_) => RB_OK,
      Err(err) => {
        warn!("insert {} failed: {}", key, err);
        RB_FAILED
      }
    })
  }
}

/// # Safety
/// `handle` must be null or a live handle from `rb_tree_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_delete(handle: *mut RbTreeHandle, key: i64) -> c_int {
  unsafe {
    with_tree_mut(handle, RB_NULL, |tree| match tree.delete(&key) {
      Some(_) => RB_OK,
      None => RB_NOT_FOUND,
    })
  }
}

/// `1` when present, `0` when absent.
///
/// # Safety
/// `handle` must be null or a live handle from `rb_tree_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_contains(handle: *const RbTreeHandle, key: i64) -> c_int {
  unsafe { with_tree(handle, RB_NULL, |tree| c_int::from(tree.contains(&key))) }
}

/// # Safety
/// `handle` must be null or a live handle from `rb_tree_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_len(handle: *const RbTreeHandle) -> size_t {
  unsafe { with_tree(handle, 0, |tree| tree.len()) }
}

unsafe fn write_extreme(
  handle: *const RbTreeHandle,
  out: *mut i64,
  pick: fn(&RbTree<i64>) -> Option<NodeId>,
) -> c_int {
  if out.is_null() {
    return RB_NULL;
  }
  unsafe {
    with_tree(handle, RB_NULL, |tree| {
      match pick(tree).and_then(|id| tree.key(id)) {
        Some(&key) => {
          out.write(key);
          RB_OK
        }
        None => RB_NOT_FOUND,
      }
    })
  }
}

/// Writes the smallest key to `out`.
///
/// # Safety
/// `handle` must be null or a live handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_min(handle: *const RbTreeHandle, out: *mut i64) -> c_int {
  unsafe { write_extreme(handle, out, RbTree::first) }
}

/// Writes the largest key to `out`.
///
/// # Safety
/// `handle` must be null or a live handle; `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_max(handle: *const RbTreeHandle, out: *mut i64) -> c_int {
  unsafe { write_extreme(handle, out, RbTree::last) }
}

/// # Safety
/// `handle` must be null or a live handle from `rb_tree_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rb_tree_validate(handle: *const RbTreeHandle) -> c_int {
  unsafe {
    with_tree(handle, RB_NULL, |tree| match tree.validate() {
      Ok(()) => RB_OK,
      Err(err) => {
        warn!("tree failed validation: {}", err);
        RB_FAILED
      }
    })
  }
}

/// Installs a stderr logger. `level` runs from `0` (off) to `5` (trace).
#[unsafe(no_mangle)]
pub extern "C" fn rb_log_init(level: c_int) -> c_int {
  let filter = match level {
    c_int::MIN..=0 => LevelFilter::Off,
    1 => LevelFilter::Error,
    2 => LevelFilter::Warn,
    3 => LevelFilter::Info,
    4 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  match TermLogger::init(
    filter,
    Config::default(),
    TerminalMode::Stderr,
    ColorChoice::Never,
  ) {
    Ok(()) => RB_OK,
    Err(_) => RB_FAILED,
  }
}
