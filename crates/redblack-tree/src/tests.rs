use rand::{
  Rng,
  SeedableRng,
  rngs::StdRng,
  seq::SliceRandom,
};
use simplelog::{
  Config,
  LevelFilter,
  TestLogger,
};

use super::*;

type Shape = Vec<(i32, Color, Option<i32>, Option<i32>, Option<i32>)>;

fn init_logging() {
  let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn tree_of(keys: &[i32]) -> RbTree<i32> {
  let mut tree = RbTree::new();
  for &key in keys {
    tree.insert(key).unwrap();
    tree.validate().unwrap();
  }
  tree
}

fn key_at(tree: &RbTree<i32>, id: Option<NodeId>) -> Option<i32> {
  id.and_then(|id| tree.key(id).copied())
}

fn node_of(tree: &RbTree<i32>, key: i32) -> &RbNode<i32> {
  let id = tree.find(&key).unwrap();
  tree.get(id).unwrap()
}

fn shape(tree: &RbTree<i32>) -> Shape {
  let mut out = Vec::new();
  let mut cursor = tree.first();
  while let Some(id) = cursor {
    let node = tree.get(id).unwrap();
    out.push((
      *node.key(),
      node.color(),
      key_at(tree, node.parent()),
      key_at(tree, node.left()),
      key_at(tree, node.right()),
    ));
    cursor = tree.successor(id);
  }
  out
}

fn keys(tree: &RbTree<i32>) -> Vec<i32> {
  tree.iter().copied().collect()
}

#[test]
fn test_empty_tree() {
  let tree: RbTree<i32> = RbTree::new();

  assert!(tree.is_empty());
  assert_eq!(tree.len(), 0);
  assert_eq!(tree.root(), None);
  assert_eq!(tree.find(&1), None);
  assert_eq!(tree.first(), None);
  assert_eq!(tree.last(), None);
  assert_eq!(tree.height(), 0);
  assert_eq!(tree.black_height(), 0);
  assert!(tree.validate().is_ok());
}

#[test]
fn test_first_insert_is_black_root() {
  let tree = tree_of(&[42]);
  let root = tree.root().unwrap();

  assert_eq!(tree.key(root), Some(&42));
  assert_eq!(tree.get(root).unwrap().color(), Color::Black);
  assert!(tree.get(root).unwrap().is_leaf());
}

#[test]
fn test_sentinel_reads_black() {
  let tree = tree_of(&[1]);
  assert_eq!(tree.color_of(None), Color::Black);
}

#[test]
fn test_right_right_rotation() {
  init_logging();
  let tree = tree_of(&[10, 20, 30]);

  assert_eq!(
    shape(&tree),
    vec![
      (10, Color::Red, Some(20), None, None),
      (20, Color::Black, None, Some(10), Some(30)),
      (30, Color::Red, Some(20), None, None),
    ]
  );
  assert_eq!(key_at(&tree, tree.root()), Some(20));
}

#[test]
fn test_left_left_rotation() {
  let tree = tree_of(&[30, 20, 10]);

  assert_eq!(key_at(&tree, tree.root()), Some(20));
  assert_eq!(node_of(&tree, 10).color(), Color::Red);
  assert_eq!(node_of(&tree, 30).color(), Color::Red);
}

#[test]
fn test_triangle_rotations() {
  let left_right = tree_of(&[30, 10, 20]);
  let right_left = tree_of(&[10, 30, 20]);

  for tree in [left_right, right_left] {
    assert_eq!(
      shape(&tree),
      vec![
        (10, Color::Red, Some(20), None, None),
        (20, Color::Black, None, Some(10), Some(30)),
        (30, Color::Red, Some(20), None, None),
      ]
    );
  }
}

#[test]
fn test_red_uncle_recolors() {
  let tree = tree_of(&[10, 5, 15, 3]);

  assert_eq!(
    shape(&tree),
    vec![
      (3, Color::Red, Some(5), None, None),
      (5, Color::Black, Some(10), Some(3), None),
      (10, Color::Black, None, Some(5), Some(15)),
      (15, Color::Black, Some(10), None, None),
    ]
  );
}

#[test]
fn test_ascending_run() {
  let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);

  assert_eq!(
    shape(&tree),
    vec![
      (1, Color::Black, Some(2), None, None),
      (2, Color::Black, None, Some(1), Some(4)),
      (3, Color::Black, Some(4), None, None),
      (4, Color::Red, Some(2), Some(3), Some(6)),
      (5, Color::Red, Some(6), None, None),
      (6, Color::Black, Some(4), Some(5), Some(7)),
      (7, Color::Red, Some(6), None, None),
    ]
  );
  assert_eq!(tree.height(), 4);
  assert_eq!(tree.black_height(), 2);
}

#[test]
fn test_two_child_delete_uses_predecessor() {
  init_logging();
  let mut tree = tree_of(&[10, 5, 15, 3, 7]);
  let root_color = tree.get(tree.root().unwrap()).unwrap().color();

  assert_eq!(tree.delete(&10), Some(10));
  tree.validate().unwrap();

  let root = tree.root().unwrap();
  assert_eq!(tree.key(root), Some(&7));
  assert_eq!(tree.get(root).unwrap().color(), root_color);
  assert_eq!(node_of(&tree, 5).right(), None);
  assert_eq!(
    shape(&tree),
    vec![
      (3, Color::Red, Some(5), None, None),
      (5, Color::Black, Some(7), Some(3), None),
      (7, Color::Black, None, Some(5), Some(15)),
      (15, Color::Black, Some(7), None, None),
    ]
  );
}

#[test]
fn test_delete_predecessor_is_direct_child() {
  let mut tree = tree_of(&[10, 5, 15]);

  assert_eq!(tree.delete(&10), Some(10));
  tree.validate().unwrap();
  assert_eq!(
    shape(&tree),
    vec![
      (5, Color::Black, None, None, Some(15)),
      (15, Color::Red, Some(5), None, None),
    ]
  );
}

#[test]
fn test_delete_black_leaf_runs_fixup() {
  let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);

  assert_eq!(tree.delete(&1), Some(1));
  tree.validate().unwrap();
  assert_eq!(keys(&tree), vec![2, 3, 4, 5, 6, 7]);

  assert_eq!(tree.delete(&3), Some(3));
  tree.validate().unwrap();
  assert_eq!(keys(&tree), vec![2, 4, 5, 6, 7]);
}

#[test]
fn test_delete_absent_is_noop() {
  let mut tree = tree_of(&[10, 20, 30]);
  let before = shape(&tree);

  assert_eq!(tree.delete(&25), None);
  assert_eq!(shape(&tree), before);
  assert_eq!(tree.len(), 3);
}

#[test]
fn test_round_trip_all_orders() {
  init_logging();
  let inserted = [10, 20, 30, 15, 25, 5];
  let orders: [[i32; 6]; 4] = [
    [10, 20, 30, 15, 25, 5],
    [5, 25, 15, 30, 20, 10],
    [20, 10, 5, 30, 25, 15],
    [15, 30, 5, 10, 25, 20],
  ];

  for order in orders {
    let mut tree = tree_of(&inserted);
    for key in order {
      assert_eq!(tree.delete(&key), Some(key));
      tree.validate().unwrap();
    }

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    for key in inserted {
      assert_eq!(tree.find(&key), None);
    }
  }
}

#[test]
fn test_duplicates_chain_right() {
  let mut tree = tree_of(&[5, 5, 5]);
  assert_eq!(tree.len(), 3);

  assert_eq!(tree.delete(&5), Some(5));
  tree.validate().unwrap();

  assert_eq!(tree.len(), 2);
  assert_eq!(keys(&tree), vec![5, 5]);
  assert!(tree.contains(&5));
}

#[test]
fn test_duplicate_goes_right_of_first_equal() {
  let tree = tree_of(&[10, 5, 10]);
  let root = tree.root().unwrap();

  assert_eq!(tree.key(root), Some(&10));
  assert_eq!(tree.find(&10), Some(root));
  assert_eq!(key_at(&tree, tree.get(root).unwrap().right()), Some(10));
}

#[test]
fn test_reject_duplicates() {
  let mut config = RbConfig::default();
  config.set_duplicates(Duplicates::Reject);
  let mut tree = RbTree::with_config(config);

  tree.insert(1).unwrap();
  tree.insert(2).unwrap();
  let before = shape(&tree);

  assert_eq!(tree.insert(1), Err(RbError::Duplicate));
  assert_eq!(tree.insert(2), Err(RbError::Duplicate));
  assert_eq!(shape(&tree), before);
  assert_eq!(tree.len(), 2);
}

#[test]
fn test_check_after_ops() {
  let mut config = RbConfig::default();
  config.set_check_after_ops(true).set_capacity(4);
  let mut tree = RbTree::with_config(config);

  for key in 0..64 {
    tree.insert(key % 7).unwrap();
  }
  for key in 0..32 {
    tree.delete(&(key % 5));
  }
  assert!(tree.config().check_after_ops());
  assert!(tree.validate().is_ok());
}

#[test]
fn test_find_minimum_maximum() {
  let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);

  let thirty = tree.find(&30).unwrap();
  let seventy = tree.find(&70).unwrap();
  assert_eq!(key_at(&tree, tree.minimum(thirty)), Some(20));
  assert_eq!(key_at(&tree, tree.maximum(thirty)), Some(40));
  assert_eq!(key_at(&tree, tree.minimum(seventy)), Some(60));
  assert_eq!(key_at(&tree, tree.maximum(seventy)), Some(80));

  assert_eq!(key_at(&tree, tree.first()), Some(20));
  assert_eq!(key_at(&tree, tree.last()), Some(80));
  assert_eq!(tree.find(&55), None);
  assert!(!tree.contains(&55));
}

#[test]
fn test_successor_predecessor() {
  let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
  let forty = tree.find(&40).unwrap();
  let eighty = tree.find(&80).unwrap();
  let twenty = tree.find(&20).unwrap();

  assert_eq!(key_at(&tree, tree.successor(forty)), Some(50));
  assert_eq!(key_at(&tree, tree.predecessor(forty)), Some(30));
  assert_eq!(tree.successor(eighty), None);
  assert_eq!(tree.predecessor(twenty), None);
}

#[test]
fn test_iter_both_ends() {
  let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

  let mut iter = tree.iter();
  assert_eq!(iter.len(), 7);
  assert_eq!(iter.next(), Some(&1));
  assert_eq!(iter.next_back(), Some(&7));
  assert_eq!(iter.next(), Some(&2));
  assert_eq!(iter.next_back(), Some(&6));
  assert_eq!(iter.len(), 3);

  let rest: Vec<i32> = iter.copied().collect();
  assert_eq!(rest, vec![3, 4, 5]);

  let reversed: Vec<i32> = tree.iter().rev().copied().collect();
  assert_eq!(reversed, vec![7, 6, 5, 4, 3, 2, 1]);

  let mut total = 0;
  for key in &tree {
    total += key;
  }
  assert_eq!(total, 28);
}

#[test]
fn test_remove_node_by_handle() {
  let mut tree = tree_of(&[8, 4, 12]);
  let id = tree.find(&4).unwrap();

  assert_eq!(tree.remove_node(id), Some(4));
  assert_eq!(tree.remove_node(id), None);
  assert_eq!(tree.get(id).map(|n| *n.key()), None);
  assert_eq!(keys(&tree), vec![8, 12]);
}

#[test]
fn test_clear() {
  let mut tree = tree_of(&[3, 1, 2]);
  tree.clear();

  assert!(tree.is_empty());
  assert_eq!(tree.len(), 0);
  assert!(tree.validate().is_ok());
  tree.insert(9).unwrap();
  assert_eq!(keys(&tree), vec![9]);
}

#[test]
fn test_rotation_preserves_order() {
  let mut tree = tree_of(&[10, 20, 30]);
  let root = tree.root().unwrap();

  tree.rotate(root, Dir::Right);
  let new_root = tree.root().unwrap();
  assert_eq!(tree.key(new_root), Some(&10));
  assert_eq!(tree.get(new_root).unwrap().parent(), None);
  assert_eq!(key_at(&tree, tree.get(new_root).unwrap().right()), Some(20));
  assert_eq!(node_of(&tree, 20).left(), None);
  assert_eq!(key_at(&tree, node_of(&tree, 20).right()), Some(30));
  assert_eq!(keys(&tree), vec![10, 20, 30]);
  // colors are the caller's job
  assert_eq!(node_of(&tree, 10).color(), Color::Red);

  tree.rotate(new_root, Dir::Left);
  assert_eq!(key_at(&tree, tree.root()), Some(20));
  assert!(tree.validate().is_ok());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "without a")]
fn test_rotation_guard_asserts() {
  let mut tree = tree_of(&[10, 20, 30]);
  let leaf = tree.find(&10).unwrap();
  tree.rotate(leaf, Dir::Left);
}

#[test]
#[cfg(not(debug_assertions))]
fn test_rotation_guard_is_noop() {
  let mut tree = tree_of(&[10, 20, 30]);
  let before = shape(&tree);
  let leaf = tree.find(&10).unwrap();
  tree.rotate(leaf, Dir::Left);
  assert_eq!(shape(&tree), before);
}

#[test]
fn test_fixups_are_noops_on_consistent_tree() {
  let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
  let before = shape(&tree);

  let ids: Vec<NodeId> = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    .iter()
    .filter_map(|key| tree.find(key))
    .collect();
  for id in ids {
    tree.insert_fixup(id);
  }
  assert_eq!(shape(&tree), before);

  let root = tree.root();
  tree.delete_fixup(root, None);
  assert_eq!(shape(&tree), before);

  let mut empty: RbTree<i32> = RbTree::new();
  empty.delete_fixup(None, None);
  assert!(empty.is_empty());
}

#[test]
fn test_validate_detects_red_root() {
  let mut tree = tree_of(&[1, 2]);
  let root = tree.root().unwrap();
  tree.set_color(root, Color::Red);

  assert_eq!(tree.validate(), Err(RbError::RedRoot(root)));
}

#[test]
fn test_validate_detects_red_red() {
  let mut tree = tree_of(&[10, 20, 30, 40]);
  let thirty = tree.find(&30).unwrap();
  let forty = tree.find(&40).unwrap();
  tree.set_color(thirty, Color::Red);

  assert_eq!(
    tree.validate(),
    Err(RbError::RedRed {
      parent: thirty,
      child: forty,
    })
  );
}

#[test]
fn test_validate_detects_black_height() {
  let mut tree = tree_of(&[10, 20, 30]);
  let ten = tree.find(&10).unwrap();
  let root = tree.root().unwrap();
  tree.set_color(ten, Color::Black);

  assert_eq!(tree.validate(), Err(RbError::BlackHeight(root)));
}

#[test]
fn test_validate_detects_parent_link() {
  let mut tree = tree_of(&[10, 20, 30]);
  let ten = tree.find(&10).unwrap();
  tree.nodes[ten].set_parent(None);

  let err = tree.validate().unwrap_err();
  assert_eq!(err, RbError::ParentLink(ten));
  assert_eq!(format!("{}", err), "parent link of #0 is inconsistent");
}

#[test]
fn test_display() {
  let tree = tree_of(&[10, 20, 30]);
  assert_eq!(format!("{}", tree), "20 (B)\n├─ 10 (R)\n└─ 30 (R)");

  let mut tree = tree_of(&[10, 5, 15, 3, 7]);
  tree.delete(&10);
  assert_eq!(
    format!("{}", tree),
    "7 (B)\n├─ 5 (B)\n│  ├─ 3 (R)\n│  └─ ∅\n└─ 15 (B)"
  );

  let empty: RbTree<i32> = RbTree::new();
  assert_eq!(format!("{}", empty), "∅");
}

#[test]
fn test_debug_lists_keys_in_order() {
  let tree = tree_of(&[3, 1, 2]);
  assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
}

#[test]
fn test_randomized_against_sorted_model() {
  init_logging();
  let mut rng = StdRng::seed_from_u64(0x5eed);
  let mut tree = RbTree::new();
  let mut model: Vec<i32> = Vec::new();

  for _ in 0..2000 {
    let key = rng.random_range(0..256);
    if rng.random_bool(0.6) {
      tree.insert(key).unwrap();
      let at = model.partition_point(|&k| k <= key);
      model.insert(at, key);
    } else {
      let removed = tree.delete(&key);
      match model.binary_search(&key) {
        Ok(at) => {
          model.remove(at);
          assert_eq!(removed, Some(key));
        }
        Err(_) => assert_eq!(removed, None),
      }
    }

    if let Err(err) = tree.validate() {
      panic!("invalid tree after op on {}: {}", key, err);
    }
    assert_eq!(tree.len(), model.len());
  }

  assert_eq!(keys(&tree), model);
}

#[test]
fn test_height_stays_logarithmic() {
  let mut rng = StdRng::seed_from_u64(7);
  let mut values: Vec<i32> = (0..4096).collect();
  values.shuffle(&mut rng);

  let mut tree = RbTree::new();
  for &value in &values {
    tree.insert(value).unwrap();
  }
  tree.validate().unwrap();

  // height <= 2 * log2(n + 1)
  assert!(tree.height() <= 2 * 13);

  let sorted = tree_of(&(0..1024).collect::<Vec<_>>());
  assert!(sorted.height() <= 2 * 11);

  values.shuffle(&mut rng);
  for value in values.iter().take(3000) {
    assert_eq!(tree.delete(value), Some(*value));
  }
  tree.validate().unwrap();
  assert_eq!(tree.len(), 1096);
}

#[test]
fn test_stale_handle_after_slot_reuse() {
  let mut tree = tree_of(&[8, 4, 12]);
  let stale = tree.find(&4).unwrap();
  assert_eq!(tree.delete(&4), Some(4));

  let hundred = tree.insert(100).unwrap();
  assert_eq!(hundred.index(), stale.index());
  assert_ne!(hundred, stale);

  assert_eq!(tree.remove_node(stale), None);
  assert!(tree.get(stale).is_none());
  assert_eq!(tree.key(stale), None);
  assert_eq!(keys(&tree), vec![8, 12, 100]);
  tree.validate().unwrap();
}

#[test]
fn test_stale_handle_queries_return_none() {
  let mut tree = tree_of(&[8, 4, 12, 2, 6]);
  let stale = tree.find(&4).unwrap();
  tree.delete(&4);

  assert_eq!(tree.minimum(stale), None);
  assert_eq!(tree.maximum(stale), None);
  assert_eq!(tree.successor(stale), None);
  assert_eq!(tree.predecessor(stale), None);
  assert_eq!(tree.color_of(Some(stale)), Color::Black);

  tree.insert(5).unwrap();
  assert_eq!(tree.minimum(stale), None);
  assert_eq!(tree.successor(stale), None);
  assert_eq!(keys(&tree), vec![2, 5, 6, 8, 12]);
}

#[test]
fn test_stale_handle_after_clear() {
  let mut tree = tree_of(&[1, 2, 3]);
  let old = tree.find(&1).unwrap();
  tree.clear();
  tree.insert(7).unwrap();

  assert_eq!(tree.remove_node(old), None);
  assert_eq!(tree.key(old), None);
  assert_eq!(keys(&tree), vec![7]);
}
