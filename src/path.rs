//! Path normalization and pattern splitting.

use std::collections::HashMap;

use crate::param::ParamType;

/// One `/`-delimited component of a path pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PathPart {
    /// An exact segment match.
    Static { literal: String },
    /// One segment, typed.
    Param { name: String, param_type: ParamType },
}

impl PathPart {
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self, PathPart::Static { .. })
    }

    #[must_use]
    pub fn is_param(&self) -> bool {
        matches!(self, PathPart::Param { .. })
    }
}

/// Strip exactly one leading `/` and one trailing `/`, if present.
///
/// Internal `//` is left alone: `"a//b"` normalizes to `"a//b"` (no leading/trailing slash to
/// strip) and later splits into parts `["a", "", "b"]`; the empty literal segment only matches a
/// request path that also has an empty segment at that position.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Split a normalized pattern into [`PathPart`]s, resolving `{name}` placeholders against
/// `params`. A placeholder whose name is absent from `params` is silently dropped (guards against
/// a mismatched convertor set supplied by the caller).
#[must_use]
pub fn split_parts(pattern: &str, params: &HashMap<String, ParamType>) -> Vec<PathPart> {
    pattern
        .split('/')
        .filter_map(|piece| {
            if let Some(name) = piece.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                params
                    .get(name)
                    .map(|&param_type| PathPart::Param {
                        name: name.to_string(),
                        param_type,
                    })
            } else {
                Some(PathPart::Static {
                    literal: piece.to_string(),
                })
            }
        })
        .collect()
}
