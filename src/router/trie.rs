//! The segment trie: insertion, radix compaction, and lookup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

use crate::decl::ParamRouteDecl;
use crate::method::Method;
use crate::param::{ParamType, ParsedValue};
use crate::path::PathPart;

/// Inline capacity for accumulated lookup arguments before spilling to the heap.
/// Most real routes carry a handful of path parameters at most.
const MAX_INLINE_ARGS: usize = 8;

/// Typed parameter values accumulated during a trie descent, in declaration order.
pub type ArgVec = SmallVec<[ParsedValue; MAX_INLINE_ARGS]>;

/// The result of a successful trie lookup: the matched route plus its parsed arguments,
/// positionally aligned with [`ParamRouteDecl::param_names`].
#[derive(Debug, Clone)]
pub struct LookupResult<H> {
    pub route: Arc<ParamRouteDecl<H>>,
    pub args: ArgVec,
}

/// One node of the routing trie.
pub struct RoutingTrie<H> {
    /// Union of methods reachable from this subtree. Advisory only; never consulted to change
    /// matching semantics.
    methods: HashSet<Method>,
    leaves: Vec<Arc<ParamRouteDecl<H>>>,
    static_children: HashMap<String, RoutingTrie<H>>,
    /// Kept sorted by `ParamType::priority` at all times, so a fresh (unprepared) trie already
    /// matches the priority order `prepare()` would otherwise establish.
    param_children: Vec<(ParamType, RoutingTrie<H>)>,
    /// Set by `prepare()`: a fused `(prefix, subtrie)` shortcut, present only when this node had
    /// no leaves, no param children, and exactly one static child.
    radix_fuse: Option<(String, Box<RoutingTrie<H>>)>,
}

impl<H> Default for RoutingTrie<H> {
    fn default() -> Self {
        Self {
            methods: HashSet::new(),
            leaves: Vec::new(),
            static_children: HashMap::new(),
            param_children: Vec::new(),
            radix_fuse: None,
        }
    }
}

impl<H> RoutingTrie<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recursively insert `route`, consuming `remaining` one [`PathPart`] at a time.
    pub fn add_route(&mut self, route: Arc<ParamRouteDecl<H>>, remaining: &[PathPart]) {
        self.methods.extend(route.methods.iter().copied());

        let Some((part, rest)) = remaining.split_first() else {
            self.leaves.push(route);
            return;
        };

        match part {
            PathPart::Static { literal } => {
                self.static_children
                    .entry(literal.clone())
                    .or_default()
                    .add_route(route, rest);
            }
            PathPart::Param { param_type, .. } => {
                self.child_for_type(*param_type).add_route(route, rest);
            }
        }
    }

    /// Get the param-child subtrie for `param_type`, inserting it at its priority-sorted position
    /// if absent.
    fn child_for_type(&mut self, param_type: ParamType) -> &mut RoutingTrie<H> {
        if let Some(idx) = self
            .param_children
            .iter()
            .position(|(t, _)| *t == param_type)
        {
            return &mut self.param_children[idx].1;
        }
        self.param_children.push((param_type, RoutingTrie::default()));
        self.param_children
            .sort_by_key(|(t, _)| t.priority());
        let idx = self
            .param_children
            .iter()
            .position(|(t, _)| *t == param_type)
            .expect("just inserted");
        &mut self.param_children[idx].1
    }

    /// One-shot compaction: re-assert param-child priority order, then fuse any node that has
    /// exactly one static child and nothing else into a `radix_fuse` prefix edge.
    pub fn prepare(&mut self) {
        self.param_children.sort_by_key(|(t, _)| t.priority());

        for (_, child) in &mut self.param_children {
            child.prepare();
        }
        for child in self.static_children.values_mut() {
            child.prepare();
        }

        if !self.param_children.is_empty() || !self.leaves.is_empty() {
            return;
        }
        if self.static_children.len() != 1 {
            return;
        }

        // `lookup` checks `radix_fuse` first and returns unconditionally in that branch (never
        // falls through to `static_children`), so moving the sole child out here rather than
        // leaving an aliased copy behind is lookup-equivalent, without paying for an
        // `Rc<RefCell<_>>` in the hot path just to keep an otherwise-unreachable shadow copy
        // around.
        let literal = self
            .static_children
            .keys()
            .next()
            .cloned()
            .expect("checked len == 1 above");
        let child = self
            .static_children
            .remove(&literal)
            .expect("literal came from this map");

        self.radix_fuse = Some(match child.radix_fuse {
            Some((sub_prefix, sub_node)) => (format!("{literal}/{sub_prefix}"), sub_node),
            None => (literal, Box::new(child)),
        });
    }

    /// Try to match `path` (already normalized, no leading/trailing `/`) against this subtree.
    pub fn lookup(&self, method: Method, path: &str) -> Option<LookupResult<H>> {
        if path.is_empty() {
            trace!(depth = "leaf", "trying leaves");
            return self
                .leaves
                .iter()
                .find(|r| r.methods.contains(&method))
                .map(|route| LookupResult {
                    route: Arc::clone(route),
                    args: ArgVec::new(),
                });
        }

        if let Some((prefix, subnode)) = &self.radix_fuse {
            if let Some(rest) = strip_fused_prefix(path, prefix) {
                return subnode.lookup(method, rest);
            }
            return None;
        }

        let (head, tail) = match path.split_once('/') {
            Some((h, t)) => (h, t),
            None => (path, ""),
        };

        if let Some(child) = self.static_children.get(head) {
            if let Some(result) = child.lookup(method, tail) {
                return Some(result);
            }
        }

        for (param_type, subtrie) in &self.param_children {
            // `path` parameters are greedy to the end of the URL: the candidate segment is the
            // entire remaining path, and nothing can follow it in the pattern.
            let (segment, next_path) = if *param_type == ParamType::Path {
                (path, "")
            } else {
                (head, tail)
            };

            let Some(parsed) = param_type.validate(segment) else {
                continue;
            };

            if let Some(mut result) = subtrie.lookup(method, next_path) {
                result.args.insert(0, parsed);
                return Some(result);
            }
        }

        None
    }
}

fn strip_fused_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}
