/*!
Stage 6 — Verifier.

Re-derives the word set the linear array actually encodes by walking it the
same way a reader of the final bit-packed file would, and compares it
against the input. A mismatch here means an earlier stage has a bug, not
that the input was bad.
*/

use crate::error::Error;
use crate::linearize::{NodeArray, Record};
use crate::word::Word;

/// DFS starts at the run the root descriptor's `children` field points to,
/// not at the descriptor record itself: the descriptor's own `val` is the
/// same sentinel marker used by index 0, so recursing into the descriptor's
/// own index would immediately bottom out.
fn collect_words(records: &[Record], start: usize, prefix: &mut String, out: &mut Vec<String>) {
  let mut i = start;
  loop {
    let record = &records[i];
    if let Some(c) = record.val {
      prefix.push(c);
      if record.is_end {
        out.push(prefix.clone());
      }
      if record.children != 0 {
        collect_words(records, record.children as usize, prefix, out);
      }
      prefix.pop();
    }
    if record.end_of_list {
      break;
    }
    i += 1;
  }
}

/// Enumerates every word the array accepts. The order follows physical
/// record layout, not alphabetical order: overlap-aliasing (stage 4) is
/// free to reorder a host run's members by `(depth, NodeId)` rather than by
/// letter, so a run whose members got aliased elsewhere can come out of
/// this walk in a different order than the sorted input.
pub(crate) fn enumerate_words(array: &NodeArray) -> Vec<String> {
  let root = &array.records[array.root_descriptor];
  let mut out = Vec::new();
  if root.children == 0 {
    return out;
  }
  let mut prefix = String::new();
  collect_words(&array.records, root.children as usize, &mut prefix, &mut out);
  out
}

/// Confirms `array` encodes exactly `words`, no more and no fewer. Compared
/// as sets, not sequences: `enumerate_words` follows physical run layout,
/// which overlap-aliasing is free to reorder away from alphabetical order,
/// matching the original `set(extract_words(array)) == set(wordlist)` check.
pub(crate) fn verify(array: &NodeArray, words: &[Word]) -> Result<(), Error> {
  let mut expected: Vec<&str> = words.iter().map(Word::as_str).collect();
  let mut actual = enumerate_words(array);
  expected.sort_unstable();
  actual.sort_unstable();
  if actual.iter().map(String::as_str).ne(expected.iter().copied()) {
    return Err(Error::CorruptOutput(format!(
      "expected {} words, array enumerates {}",
      expected.len(),
      actual.len()
    )));
  }
  Ok(())
}
