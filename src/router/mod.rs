//! The routing engine: a priority-ordered segment trie with radix compaction, fronted by a
//! static-route fast path.
//!
//! `trie` holds the recursive matching algorithm; `table` wraps it with the static-route map and
//! the prepare/freeze lifecycle callers actually interact with.

mod table;
mod trie;

pub use table::RoutingTable;
pub use trie::{ArgVec, LookupResult, RoutingTrie};
