use getset::{
  CopyGetters,
  Setters,
};

/// Node slots reserved up front by [`RbConfig::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// What `insert` does with a key that compares equal to one already stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Duplicates {
  /// Equal keys descend right and are stored again.
  #[default]
  Chain,
  /// Equal keys are refused with `RbError::Duplicate`.
  Reject,
}

#[derive(Debug, Clone, Copy, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct RbConfig {
  duplicates: Duplicates,
  capacity: usize,
  /// Run `validate` after every mutation in debug builds.
  check_after_ops: bool,
}

impl Default for RbConfig {
  fn default() -> Self {
    Self {
      duplicates: Duplicates::Chain,
      capacity: DEFAULT_CAPACITY,
      check_after_ops: false,
    }
  }
}
