//! Stage 4 — Child-List Overlap Compressor.
//!
//! Some child-lists are strict subsets of others. Rather than materialize
//! both as separate array runs, a sub-list is aliased onto a contiguous
//! trailing segment of a larger "host" run, so one physical run serves
//! lookups for both lists.

use super::ListId;
use crate::minimize::NodeId;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// A materialized run and the (list, length) chain it hosts, outermost
/// (the host itself) first.
pub(crate) struct HostGroup {
  /// The final order chosen for this run's records.
  pub order: Vec<NodeId>,
  /// `(list id, its length)` for the host and every list aliased onto it.
  pub members: Vec<(ListId, usize)>,
}

fn popularity(list: &[NodeId], inverse_len: &HashMap<NodeId, usize>) -> usize {
  list.iter().map(|m| inverse_len.get(m).copied().unwrap_or(0)).sum()
}

/// Finds host/alias relationships among `lists`, returning one [`HostGroup`]
/// per surviving host. Every `ListId` in `0..lists.len()` appears in exactly
/// one group's `members`.
pub(crate) fn compress(lists: &[Vec<NodeId>]) -> Vec<HostGroup> {
  let n = lists.len();

  let mut inverse: HashMap<NodeId, Vec<ListId>> = HashMap::new();
  for (i, list) in lists.iter().enumerate() {
    for &node in list {
      inverse.entry(node).or_default().push(ListId(i as u32));
    }
  }
  let inverse_len: HashMap<NodeId, usize> =
    inverse.iter().map(|(&node, ids)| (node, ids.len())).collect();

  // lists with fewer members, and rarer members, are easiest to commit to
  // as a host early — sort each node's candidate lists that way.
  for ids in inverse.values_mut() {
    ids.sort_by_key(|&lid| (lists[lid.0 as usize].len(), popularity(&lists[lid.0 as usize], &inverse_len)));
  }

  // process the hardest-to-place (largest, most-popular-membered) lists
  // first, so they get first claim on becoming hosts.
  let mut candidates: Vec<ListId> = (0..n as u32).map(ListId).collect();
  candidates.sort_by_key(|&lid| {
    let list = &lists[lid.0 as usize];
    (Reverse(list.len()), popularity(list, &inverse_len))
  });

  let mut chains: Vec<Option<Vec<ListId>>> = (0..n as u32).map(|i| Some(vec![ListId(i)])).collect();

  for cand in candidates {
    let cand_set: HashSet<NodeId> = lists[cand.0 as usize].iter().copied().collect();
    let Some(&shortest_member) =
      lists[cand.0 as usize].iter().min_by_key(|m| inverse_len.get(m).copied().unwrap_or(0))
    else {
      continue; // lists are non-empty by construction (canon.rs interns only non-empty lists)
    };

    let Some(hosts) = inverse.get(&shortest_member) else { continue };
    for &host in hosts {
      let Some(chain) = &chains[host.0 as usize] else { continue };
      let tail = *chain.last().unwrap();
      let tail_set: HashSet<NodeId> = lists[tail.0 as usize].iter().copied().collect();

      if cand_set.len() < tail_set.len() && cand_set.is_subset(&tail_set) {
        chains[host.0 as usize].as_mut().unwrap().push(cand);
        chains[cand.0 as usize] = None;
        break;
      }
    }
  }

  chains
    .into_iter()
    .enumerate()
    .filter_map(|(i, chain)| chain.map(|chain| materialize(lists, ListId(i as u32), chain)))
    .collect()
}

fn materialize(lists: &[Vec<NodeId>], host: ListId, chain: Vec<ListId>) -> HostGroup {
  if chain.len() == 1 {
    let order = lists[host.0 as usize].clone();
    let len = order.len();
    return HostGroup { order, members: vec![(host, len)] };
  }

  // bucket every member of the host by the deepest sub-list (in chain
  // order) that still contains it; sorting ascending by that depth places
  // each c_i as a contiguous trailing block of length |c_i|.
  let mut depth_of: HashMap<NodeId, usize> = HashMap::new();
  for (depth, &lid) in chain.iter().enumerate() {
    for &node in &lists[lid.0 as usize] {
      depth_of.insert(node, depth);
    }
  }

  let mut order: Vec<NodeId> = depth_of.keys().copied().collect();
  order.sort_by_key(|&node| (depth_of[&node], node));

  let members = chain.iter().map(|&lid| (lid, lists[lid.0 as usize].len())).collect();
  HostGroup { order, members }
}
