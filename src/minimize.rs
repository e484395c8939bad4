/*!
Stage 2 — Node Minimizer.

Hashes each subtree bottom-up and deduplicates equivalent subtrees by their
digest, turning the trie into a minimal DAWG: any two subtrees accepting the
same language end up sharing one physical node.
*/

use crate::trie::{RawId, RawTrie};
use md5::{Digest, Md5};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub u32);

#[derive(Debug, Clone)]
pub(crate) struct MinNode {
  pub val: char,
  pub is_end: bool,
  pub children: Vec<NodeId>,
}

pub(crate) struct MinDawg {
  pub nodes: Vec<MinNode>,
  pub root_children: Vec<NodeId>,
}

type Digest16 = [u8; 16];

fn digest_of(is_end: bool, val: Option<char>, child_digests: &[Digest16]) -> Digest16 {
  let mut hasher = Md5::new();
  hasher.update([is_end as u8]);
  hasher.update([val.map_or(0, |c| c as u8)]);
  for d in child_digests {
    hasher.update(d);
  }
  hasher.finalize().into()
}

struct Minimizer<'a> {
  raw: &'a RawTrie,
  dedup: HashMap<Digest16, NodeId>,
  digests: Vec<Digest16>,
  nodes: Vec<MinNode>,
}

impl<'a> Minimizer<'a> {
  fn minimize(&mut self, id: RawId) -> NodeId {
    let raw_node = self.raw.node(id);
    let children: Vec<NodeId> = raw_node.children.iter().map(|&c| self.minimize(c)).collect();
    let child_digests: Vec<Digest16> =
      children.iter().map(|c| self.digests[c.0 as usize]).collect();
    let digest = digest_of(raw_node.is_end, raw_node.val, &child_digests);

    if let Some(&rep) = self.dedup.get(&digest) {
      return rep;
    }

    let node_id = NodeId(self.nodes.len() as u32);
    self.nodes.push(MinNode {
      val: raw_node.val.expect("only the root has no letter, and the root is never minimized"),
      is_end: raw_node.is_end,
      children,
    });
    self.digests.push(digest);
    self.dedup.insert(digest, node_id);
    node_id
  }
}

/// Minimizes `raw` into a DAWG, returning the arena of unique nodes and the
/// (already-deduplicated) list of the root's children.
pub(crate) fn minimize(raw: &RawTrie) -> MinDawg {
  let mut m = Minimizer { raw, dedup: HashMap::new(), digests: Vec::new(), nodes: Vec::new() };
  let root_children = raw.root().children.iter().map(|&c| m.minimize(c)).collect();
  MinDawg { nodes: m.nodes, root_children }
}
