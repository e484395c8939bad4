//! The error kinds the compile pipeline can raise.

/// Errors surfaced by any pipeline stage.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  /// The input word list was not sorted, contained an empty or
  /// non-`A`-`Z` word, or contained a duplicate.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// The verifier's enumerated word set disagreed with the input. This
  /// indicates a bug earlier in the pipeline, not a problem with the input.
  #[error("corrupt output: {0}")]
  CorruptOutput(String),

  /// Neither packing mode can address `node_count` nodes.
  #[error("too many nodes to pack: {node_count}")]
  TooManyNodes { node_count: usize },

  /// Propagated unchanged from the read/write surface.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
