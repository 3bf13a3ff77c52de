//! Crosswalk from a framework-native converter table to [`RouteDecl`]s.
//!
//! Models the registration-side boundary where framework-native route objects get turned into
//! route declarations, without committing to any particular web framework: a [`Convertor`] stands
//! in for whatever per-parameter type-converter object a framework attaches to a route (an
//! ecosystem analogue is Starlette's `starlette.convertors.Convertor`), and [`FrameworkRoute`]
//! stands in for the route object itself.

use std::collections::{HashMap, HashSet};

use crate::decl::{ParamRouteDecl, RouteDecl, StaticRouteDecl};
use crate::method::Method;
use crate::param::ParamType;
use crate::path::{normalize, split_parts};

/// A framework's per-parameter type converter, crosswalked to a [`ParamType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Convertor {
    StringConvertor,
    PathConvertor,
    IntegerConvertor,
    FloatConvertor,
    UuidConvertor,
    /// A converter this crate does not recognize, carrying its name for diagnostics.
    Unknown(String),
}

impl Convertor {
    fn to_param_type(&self) -> Option<ParamType> {
        match self {
            Convertor::StringConvertor => Some(ParamType::Str),
            Convertor::PathConvertor => Some(ParamType::Path),
            Convertor::IntegerConvertor => Some(ParamType::Int),
            Convertor::FloatConvertor => Some(ParamType::Float),
            Convertor::UuidConvertor => Some(ParamType::Uuid),
            Convertor::Unknown(_) => None,
        }
    }
}

/// A framework-native route object, reduced to the fields the crosswalk needs.
#[derive(Debug, Clone)]
pub struct FrameworkRoute<H> {
    pub path: String,
    pub methods: HashSet<Method>,
    pub param_convertors: HashMap<String, Convertor>,
    pub handle: H,
}

/// Crosswalk a [`FrameworkRoute`] into a [`RouteDecl`].
///
/// Returns `None` if any convertor is unrecognized; the route is then left for an external
/// fallback router to handle, if one is configured.
#[must_use]
pub fn parse_route_decl<H>(route: FrameworkRoute<H>) -> Option<RouteDecl<H>> {
    let path = normalize(&route.path).to_string();

    let mut params = HashMap::with_capacity(route.param_convertors.len());
    for (name, convertor) in &route.param_convertors {
        let param_type = convertor.to_param_type()?;
        params.insert(name.clone(), param_type);
    }

    if params.is_empty() {
        return Some(RouteDecl::Static(StaticRouteDecl {
            handle: route.handle,
            methods: route.methods,
            path,
        }));
    }

    let parts = split_parts(&path, &params);
    Some(RouteDecl::Param(ParamRouteDecl::new(
        route.handle,
        route.methods,
        path,
        parts,
    )))
}
