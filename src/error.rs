//! Error surface for the routing table.
//!
//! Almost every condition that might look like "an error" is represented as `Option::None` rather
//! than `Result::Err` (an unrecognized convertor, a failed parameter validation, a method mismatch
//! at a leaf). The one exception is registering a route after the table has been frozen by
//! [`crate::router::RoutingTable::prepare`], which is a programmer error rather than ordinary
//! "no route" input.

use thiserror::Error;

/// Errors raised by the routing table.
#[derive(Debug, Error)]
pub enum RouterError {
    /// `add_route` was called after `prepare()` had already run. The table is frozen at that
    /// point; this crate refuses further mutation rather than silently corrupting the trie.
    #[error("cannot add route: routing table is already prepared and frozen")]
    AlreadyPrepared,
}
