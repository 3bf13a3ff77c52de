//! The top-level routing-table facade: static-route fast path plus the parameterized trie.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::decl::{RouteDecl, StaticRouteDecl};
use crate::error::RouterError;
use crate::method::Method;
use crate::param::ParsedValue;
use crate::path::normalize;

use super::trie::RoutingTrie;

/// A routing table: ingests [`RouteDecl`]s, compiles them into a static map plus a segment trie,
/// and serves `(method, path)` lookups.
///
/// Registration is single-threaded; `add_route` must not be called after `prepare()` (it panics
/// if it is). Lookups are correct whether or not `prepare()` has run — `prepare()` only adds the
/// radix-fusion speedup and freezes the table against further mutation.
pub struct RoutingTable<H> {
    static_routes: HashMap<(String, Method), Arc<StaticRouteDecl<H>>>,
    trie: RoutingTrie<H>,
    prepared: AtomicBool,
}

impl<H> Default for RoutingTable<H> {
    fn default() -> Self {
        Self {
            static_routes: HashMap::new(),
            trie: RoutingTrie::new(),
            prepared: AtomicBool::new(false),
        }
    }
}

impl<H> RoutingTable<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route declaration.
    ///
    /// # Panics
    ///
    /// Panics if called after [`RoutingTable::prepare`] has already run; the table is frozen at
    /// that point.
    pub fn add_route(&mut self, decl: RouteDecl<H>) {
        if self.prepared.load(Ordering::Acquire) {
            panic!("{}", RouterError::AlreadyPrepared);
        }

        match decl {
            RouteDecl::Static(route) => {
                let route = Arc::new(route);
                debug!(path = %route.path, "registering static route");
                let key_path = normalize(&route.path).to_string();
                for method in route.methods.iter().copied() {
                    self.static_routes
                        .insert((key_path.clone(), method), Arc::clone(&route));
                }
            }
            RouteDecl::Param(route) => {
                debug!(path = %route.path, "registering parameterized route");
                let parts = route.parts.clone();
                self.trie.add_route(Arc::new(route), &parts);
            }
        }
    }

    /// Run the one-shot radix-compaction pass. Idempotent: the second and later calls are no-ops.
    pub fn prepare(&mut self) {
        if self.prepared.swap(true, Ordering::AcqRel) {
            return;
        }
        self.trie.prepare();
        info!(
            static_routes = self.static_routes.len(),
            "routing table prepared"
        );
    }

    /// Look up a route by method and raw (un-normalized) request path.
    ///
    /// Returns the matched handle plus a `name -> value` map of the typed path parameters. Safe
    /// to call before `prepare()`; only the radix-fusion shortcut is unavailable until then.
    #[must_use]
    pub fn lookup(&self, method: Method, raw_path: &str) -> Option<(H, HashMap<String, ParsedValue>)>
    where
        H: Clone,
    {
        let path = normalize(raw_path);

        if let Some(route) = self.static_routes.get(&(path.to_string(), method)) {
            return Some((route.handle.clone(), HashMap::new()));
        }

        let result = self.trie.lookup(method, path)?;
        let params = result
            .route
            .param_names
            .iter()
            .cloned()
            .zip(result.args.into_iter())
            .collect();
        Some((result.route.handle.clone(), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::ParamRouteDecl;
    use crate::param::ParamType;
    use crate::path::PathPart;

    fn static_decl<H>(handle: H, methods: &[Method], path: &str) -> RouteDecl<H> {
        RouteDecl::Static(StaticRouteDecl {
            handle,
            methods: methods.iter().copied().collect(),
            path: path.to_string(),
        })
    }

    fn param_decl<H>(handle: H, methods: &[Method], path: &str, parts: Vec<PathPart>) -> RouteDecl<H> {
        RouteDecl::Param(ParamRouteDecl::new(
            handle,
            methods.iter().copied().collect(),
            path.to_string(),
            parts,
        ))
    }

    #[test]
    fn static_route_round_trip() {
        let mut table = RoutingTable::new();
        table.add_route(static_decl("H1", &[Method::Get], "health"));
        table.prepare();

        assert_eq!(
            table.lookup(Method::Get, "/health"),
            Some(("H1", HashMap::new()))
        );
        assert_eq!(table.lookup(Method::Post, "/health"), None);
    }

    #[test]
    fn static_route_wins_over_param_sibling() {
        let mut table = RoutingTable::new();
        table.add_route(param_decl(
            "U",
            &[Method::Get],
            "users/{user_id}",
            vec![
                PathPart::Static { literal: "users".into() },
                PathPart::Param { name: "user_id".into(), param_type: ParamType::Int },
            ],
        ));
        table.add_route(static_decl("M", &[Method::Get], "users/me"));
        table.prepare();

        let (handle, params) = table.lookup(Method::Get, "/users/123").unwrap();
        assert_eq!(handle, "U");
        assert_eq!(params.get("user_id"), Some(&ParsedValue::Int(123)));

        let (handle, params) = table.lookup(Method::Get, "/users/me").unwrap();
        assert_eq!(handle, "M");
        assert!(params.is_empty());

        assert!(table.lookup(Method::Get, "/users/abc").is_none());
    }

    #[test]
    fn multi_param_route_zips_param_names_with_args_in_order() {
        let mut table = RoutingTable::new();
        table.add_route(param_decl(
            "P",
            &[Method::Get],
            "users/{user_id}/posts/{post_id}",
            vec![
                PathPart::Static { literal: "users".into() },
                PathPart::Param { name: "user_id".into(), param_type: ParamType::Int },
                PathPart::Static { literal: "posts".into() },
                PathPart::Param { name: "post_id".into(), param_type: ParamType::Int },
            ],
        ));
        table.prepare();

        let (handle, params) = table.lookup(Method::Get, "/users/7/posts/42").unwrap();
        assert_eq!(handle, "P");
        assert_eq!(params.get("user_id"), Some(&ParsedValue::Int(7)));
        assert_eq!(params.get("post_id"), Some(&ParsedValue::Int(42)));
    }

    #[test]
    fn lookup_before_prepare_is_still_correct() {
        let mut table = RoutingTable::new();
        table.add_route(param_decl(
            "F",
            &[Method::Get],
            "files/{rest}",
            vec![
                PathPart::Static { literal: "files".into() },
                PathPart::Param { name: "rest".into(), param_type: ParamType::Path },
            ],
        ));

        let (handle, params) = table.lookup(Method::Get, "/files/a/b/c").unwrap();
        assert_eq!(handle, "F");
        assert_eq!(
            params.get("rest"),
            Some(&ParsedValue::Str("a/b/c".to_string()))
        );
    }

    #[test]
    fn prepare_is_idempotent() {
        let mut table = RoutingTable::new();
        table.add_route(static_decl("H1", &[Method::Get], "health"));
        table.prepare();
        table.prepare();
        assert_eq!(
            table.lookup(Method::Get, "/health"),
            Some(("H1", HashMap::new()))
        );
    }

    #[test]
    #[should_panic(expected = "already prepared")]
    fn add_route_after_prepare_panics() {
        let mut table: RoutingTable<&str> = RoutingTable::new();
        table.prepare();
        table.add_route(static_decl("H1", &[Method::Get], "health"));
    }

    #[test]
    fn unregistered_path_returns_none() {
        let mut table: RoutingTable<&str> = RoutingTable::new();
        table.add_route(static_decl("H1", &[Method::Get], "health"));
        table.prepare();
        assert!(table.lookup(Method::Get, "/nonexistent").is_none());
    }
}
