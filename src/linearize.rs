/*!
Stage 5 — Array Linearizer.

Lays every surviving host run end to end into one flat array of records.
Index 0 is always the terminal sentinel (`val=0`, `children=0`), reserved
and never shared with a real host run, so a `children` field of 0
unambiguously means "no children" regardless of layout order. The final
slot is a synthetic root descriptor so the caller always has a single
fixed entry point regardless of how many distinct lists the root's own
children span.
*/

use crate::childlist::overlap::HostGroup;
use crate::childlist::{canon::Canon, ListId};
use crate::minimize::{MinDawg, NodeId};
use std::collections::HashMap;

/// One record of the linear array: a letter, whether it ends a word, the
/// `end_of_list` marker, and the index this record's own children start at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Record {
  pub val: Option<char>,
  pub is_end: bool,
  pub end_of_list: bool,
  pub children: u32,
}

pub(crate) struct NodeArray {
  pub records: Vec<Record>,
  /// Index of the synthetic root descriptor, always the array's last record.
  pub root_descriptor: usize,
}

fn sentinel() -> Record {
  Record { val: None, is_end: false, end_of_list: true, children: 0 }
}

/// Lays out `hosts` and appends a root descriptor pointing at `canon.root_list`'s run.
pub(crate) fn linearize(dawg: &MinDawg, canon: &Canon, hosts: &[HostGroup]) -> NodeArray {
  // host layout order must be a function of the input alone (not hash
  // iteration order), so repeated runs over the same input are
  // byte-identical: order hosts by the smallest ListId they contain.
  let mut host_order: Vec<usize> = (0..hosts.len()).collect();
  host_order.sort_by_key(|&i| hosts[i].members.iter().map(|(id, _)| id.0).min().unwrap());

  // pass 1: every run's base position is fixed by host_order and host
  // lengths alone, so compute all of them before resolving any children
  // pointer — a node can reference a list hosted later in layout order.
  // Real runs start at index 1; index 0 is reserved for the sentinel.
  let mut run_start: HashMap<ListId, u32> = HashMap::new();
  let mut base = 1u32;
  for &hi in &host_order {
    let host = &hosts[hi];
    let total = host.order.len() as u32;
    for &(list_id, len) in &host.members {
      run_start.insert(list_id, base + total - len as u32);
    }
    base += total;
  }

  let mut records = vec![sentinel()];
  for &hi in &host_order {
    let host = &hosts[hi];
    for (offset, &node_id) in host.order.iter().enumerate() {
      let node = &dawg.nodes[node_id.0 as usize];
      let is_last = offset + 1 == host.order.len();
      let children = match canon.node_list[node_id.0 as usize] {
        Some(list_id) => *run_start.get(&list_id).unwrap_or(&0),
        None => 0,
      };
      records.push(Record {
        val: Some(node.val),
        is_end: node.is_end,
        end_of_list: is_last,
        children,
      });
    }
  }

  let root_children = canon.root_list.and_then(|id| run_start.get(&id).copied()).unwrap_or(0);
  records.push(Record { val: None, is_end: false, end_of_list: true, children: root_children });
  let root_descriptor = records.len() - 1;

  NodeArray { records, root_descriptor }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{childlist, minimize, trie, word::validate_words};

  fn build(words: &[&str]) -> (MinDawg, Canon, Vec<HostGroup>) {
    let raw = trie::build(&validate_words(words).unwrap());
    let dawg = minimize::minimize(&raw);
    let canon = childlist::canon::canonicalize(&dawg);
    let hosts = childlist::overlap::compress(&canon.lists);
    (dawg, canon, hosts)
  }

  #[test]
  fn empty_dictionary_is_just_sentinel_and_root_descriptor() {
    let (dawg, canon, hosts) = build(&[]);
    let arr = linearize(&dawg, &canon, &hosts);
    assert_eq!(arr.records.len(), 2);
    assert_eq!(arr.root_descriptor, 1);
    assert_eq!(arr.records[0].children, 0);
    assert!(arr.records[0].end_of_list);
    assert_eq!(arr.records[arr.root_descriptor].children, 0);
  }

  #[test]
  fn root_descriptor_is_final_record_and_points_past_the_sentinel() {
    let (dawg, canon, hosts) = build(&["AB", "AC"]);
    let arr = linearize(&dawg, &canon, &hosts);
    assert_eq!(arr.root_descriptor, arr.records.len() - 1);

    let root_rec = arr.records[arr.root_descriptor];
    assert!(root_rec.val.is_none());
    assert_ne!(root_rec.children, 0);
    let first_child = &arr.records[root_rec.children as usize];
    assert_eq!(first_child.val, Some('A'));
  }

  #[test]
  fn no_real_run_starts_at_index_zero() {
    let (dawg, canon, hosts) = build(&["CAR", "CARS", "CAT", "CATS"]);
    let arr = linearize(&dawg, &canon, &hosts);
    assert!(arr.records[0].val.is_none());
    for record in &arr.records[1..arr.records.len() - 1] {
      assert!(record.val.is_some());
    }
  }
}
