//! Stage 3 — Child-List Canonicalizer.
//!
//! Distinct child-lists are deduplicated by structural (sequence) equality
//! so later stages can treat a child-list reference as an opaque, directly
//! comparable handle instead of re-deriving equality on every comparison.

use super::ListId;
use crate::minimize::{MinDawg, NodeId};
use std::collections::HashMap;

pub(crate) struct Canon {
  /// Every distinct non-empty child-list, indexed by `ListId`.
  pub lists: Vec<Vec<NodeId>>,
  /// Each minimized node's canonical child-list, or `None` for a leaf.
  pub node_list: Vec<Option<ListId>>,
  /// The root's canonical child-list, or `None` for an empty dictionary.
  pub root_list: Option<ListId>,
}

fn intern(
  lists: &mut Vec<Vec<NodeId>>,
  index: &mut HashMap<Vec<NodeId>, ListId>,
  children: &[NodeId],
) -> Option<ListId> {
  if children.is_empty() {
    return None;
  }
  if let Some(&id) = index.get(children) {
    return Some(id);
  }
  let id = ListId(lists.len() as u32);
  lists.push(children.to_vec());
  index.insert(children.to_vec(), id);
  Some(id)
}

pub(crate) fn canonicalize(dawg: &MinDawg) -> Canon {
  let mut lists = Vec::new();
  let mut index = HashMap::new();

  let node_list: Vec<Option<ListId>> =
    dawg.nodes.iter().map(|n| intern(&mut lists, &mut index, &n.children)).collect();
  let root_list = intern(&mut lists, &mut index, &dawg.root_children);

  Canon { lists, node_list, root_list }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{minimize, trie, word::validate_words};

  fn canon_of(words: &[&str]) -> Canon {
    let raw = trie::build(&validate_words(words).unwrap());
    canonicalize(&minimize::minimize(&raw))
  }

  #[test]
  fn shared_child_list_becomes_one_instance() {
    // "AB","AC","XB","XC": the {B,C} child-list under A and under X are
    // built from the same (deduplicated) B and C nodes, so they should
    // canonicalize to the same list id.
    let canon = canon_of(&["AB", "AC", "XB", "XC"]);

    // There should be exactly one non-empty child-list of length 2.
    let two_child_lists: Vec<_> = canon.lists.iter().filter(|l| l.len() == 2).collect();
    assert_eq!(two_child_lists.len(), 1);

    let list_id = canon.lists.iter().position(|l| l.len() == 2).unwrap() as u32;
    let refs = canon.node_list.iter().filter(|l| **l == Some(ListId(list_id))).count();
    assert_eq!(refs, 2);
  }

  #[test]
  fn empty_dictionary_has_no_lists() {
    let canon = canon_of(&[]);
    assert!(canon.lists.is_empty());
    assert_eq!(canon.root_list, None);
  }
}
