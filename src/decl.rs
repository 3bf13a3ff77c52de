//! The route declaration data model.
//!
//! `H` is the caller's opaque handle type (e.g. a boxed handler, an `Arc<Endpoint>`, or anything
//! else the external dispatcher knows how to invoke). The routing table only ever clones and
//! returns it; it never inspects it.

use std::collections::HashSet;

use crate::method::Method;
use crate::path::PathPart;

/// A route with no path parameters; the full path is the lookup key.
#[derive(Debug, Clone)]
pub struct StaticRouteDecl<H> {
    pub handle: H,
    pub methods: HashSet<Method>,
    pub path: String,
}

/// A route with one or more typed path parameters.
///
/// Invariant: `param_names` equals the sequence of `Param` names in `parts`, in order.
#[derive(Debug, Clone)]
pub struct ParamRouteDecl<H> {
    pub handle: H,
    pub methods: HashSet<Method>,
    pub path: String,
    pub parts: Vec<PathPart>,
    pub param_names: Vec<String>,
}

impl<H> ParamRouteDecl<H> {
    /// Build from parts, deriving `param_names` from them so the invariant can't drift.
    #[must_use]
    pub fn new(handle: H, methods: HashSet<Method>, path: String, parts: Vec<PathPart>) -> Self {
        let param_names = parts
            .iter()
            .filter_map(|part| match part {
                PathPart::Param { name, .. } => Some(name.clone()),
                PathPart::Static { .. } => None,
            })
            .collect();
        Self {
            handle,
            methods,
            path,
            parts,
            param_names,
        }
    }
}

/// A registered route: either a parameter-free static path or a typed, parameterized one.
#[derive(Debug, Clone)]
pub enum RouteDecl<H> {
    Static(StaticRouteDecl<H>),
    Param(ParamRouteDecl<H>),
}

impl<H> RouteDecl<H> {
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self, RouteDecl::Static(_))
    }

    #[must_use]
    pub fn is_param(&self) -> bool {
        matches!(self, RouteDecl::Param(_))
    }
}
