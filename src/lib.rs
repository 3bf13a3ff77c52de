//! # radixroute
//!
//! A segment-trie HTTP route table with radix compaction, typed path parameters, and
//! priority-ordered parameter matching.
//!
//! ## Overview
//!
//! `radixroute` is a framework-agnostic routing table: given a set of path patterns (each tagged
//! with an opaque caller-owned handle), it resolves `(method, path)` pairs to the matching handle
//! plus the typed values bound to that path's parameters. It does not parse OpenAPI specs, serve
//! HTTP, or dispatch to handlers — those concerns live one layer up, in whatever web framework or
//! generated dispatcher owns the handle type.
//!
//! ## Architecture
//!
//! - **[`method`]** — the closed set of HTTP methods the table understands
//! - **[`param`]** — the typed, priority-ordered parameter kinds (`uuid`, `int`, `float`, `str`,
//!   `path`) and their single-segment validators
//! - **[`path`]** — path normalization and pattern-to-parts splitting
//! - **[`decl`]** — the route declaration data model (`StaticRouteDecl`, `ParamRouteDecl`)
//! - **[`parser`]** — crosswalk from a framework-native converter table into route declarations
//! - **[`router`]** — the trie and the `RoutingTable` facade that ties everything together
//! - **[`error`]** — the routing table's error surface
//! - **[`config`]** — ambient logging configuration for embedding binaries
//!
//! ## Example
//!
//! ```
//! use radixroute::{ParamRouteDecl, RouteDecl, StaticRouteDecl};
//! use radixroute::{Method, ParamType, PathPart, RoutingTable};
//! use std::collections::HashSet;
//!
//! let mut table = RoutingTable::new();
//! table.add_route(RouteDecl::Static(StaticRouteDecl {
//!     handle: "health_handler",
//!     methods: HashSet::from([Method::Get]),
//!     path: "health".to_string(),
//! }));
//! table.add_route(RouteDecl::Param(ParamRouteDecl::new(
//!     "get_user",
//!     HashSet::from([Method::Get]),
//!     "users/{user_id}".to_string(),
//!     vec![
//!         PathPart::Static { literal: "users".to_string() },
//!         PathPart::Param { name: "user_id".to_string(), param_type: ParamType::Int },
//!     ],
//! )));
//! table.prepare();
//!
//! let (handle, _params) = table.lookup(Method::Get, "/users/42").unwrap();
//! assert_eq!(handle, "get_user");
//! ```

pub mod config;
pub mod decl;
pub mod error;
pub mod method;
pub mod param;
pub mod parser;
pub mod path;
pub mod router;

pub use config::RouterConfig;
pub use decl::{ParamRouteDecl, RouteDecl, StaticRouteDecl};
pub use error::RouterError;
pub use method::Method;
pub use param::{ParamType, ParsedValue};
pub use parser::{parse_route_decl, Convertor, FrameworkRoute};
pub use path::PathPart;
pub use router::{ArgVec, LookupResult, RoutingTable, RoutingTrie};
