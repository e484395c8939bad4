/*!
Stages 3 & 4 — Child-List Canonicalizer and Overlap Compressor.

Split into two submodules that share the [`ListId`] handle: [`canon`]
deduplicates child-lists by structural equality, and [`overlap`] then finds
subset relationships among the canonical lists so a sub-list can be stored
as a trailing alias of a larger host run instead of its own run.
*/

pub(crate) mod canon;
pub(crate) mod overlap;

/// A canonical child-list handle, opaque after [`canon::canonicalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ListId(pub u32);
