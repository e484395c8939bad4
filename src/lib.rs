/*!
Compiles a sorted, duplicate-free list of uppercase words into a bit-packed
Directed Acyclic Word Graph.

The pipeline runs in seven stages: a trie is built exploiting the input's
sortedness, structurally identical subtrees are merged by hashing
(minimization), identical child-lists are deduplicated, child-lists that are
a strict subset of another are aliased onto it instead of stored again,
everything is laid into one flat record array, the array is verified
against the input by re-deriving its word set, and finally the array is
packed into one of two little-endian record layouts.

[`compile`] drives the whole pipeline from an in-memory word list.
*/

mod childlist;
mod encode;
mod error;
mod linearize;
mod minimize;
mod pipeline;
mod trie;
mod verify;
mod word;

pub use encode::Mode;
pub use error::Error;
pub use pipeline::{assemble, compile, Assembled, Compiled};
pub use word::{validate_words, Word};
