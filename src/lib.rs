#![no_std]

pub use redblack_arena as arena;
pub use redblack_sync as sync;
pub use redblack_tree as tree;

pub mod prelude {
  pub use redblack_arena::{
    Arena,
    ArenaError,
    NodeId,
  };
  pub use redblack_sync::SharedTree;
  pub use redblack_tree::{
    Color,
    Dir,
    Duplicates,
    RbConfig,
    RbError,
    RbNode,
    RbResult,
    RbTree,
    config::DEFAULT_CAPACITY,
  };
}
