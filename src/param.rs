//! The parameter type system: a closed, totally ordered set of path-parameter kinds, each with its
//! own single-segment validator.

use uuid::Uuid;

/// The typed category of a path parameter.
///
/// Ordered by [`ParamType::priority`]: lower priority numbers are tried first when a trie node has
/// more than one candidate parameter type at the same depth. This lets `uuid` and `int` win over a
/// looser `str` alternative instead of leaving the match ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Uuid,
    Int,
    Float,
    Str,
    Path,
}

/// The typed result of successfully validating a path segment against a [`ParamType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Uuid(Uuid),
    Int(i64),
    Float(f64),
    /// Used for both `Str` and `Path` parameter types, which both ultimately hand back text.
    Str(String),
}

impl ParamType {
    /// Fixed total priority; lower is tried first.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            ParamType::Uuid => 0,
            ParamType::Int => 1,
            ParamType::Float => 2,
            ParamType::Str => 3,
            ParamType::Path => 4,
        }
    }

    /// Validate and parse a single candidate segment.
    ///
    /// For [`ParamType::Path`] the caller is expected to pass the *entire remaining request path*
    /// rather than a single `/`-delimited segment (path parameters are greedy to the end of the
    /// URL); see [`crate::router::RoutingTrie::lookup`] for where that substitution happens.
    #[must_use]
    pub fn validate(self, segment: &str) -> Option<ParsedValue> {
        match self {
            ParamType::Uuid => Uuid::parse_str(segment).ok().map(ParsedValue::Uuid),
            ParamType::Int => segment.parse::<i64>().ok().map(ParsedValue::Int),
            ParamType::Float => {
                if segment.is_empty() {
                    return None;
                }
                let value: f64 = segment.parse().ok()?;
                if value.is_nan() || value.is_infinite() {
                    return None;
                }
                Some(ParsedValue::Float(value))
            }
            ParamType::Str => {
                if segment.is_empty() || segment.contains('/') {
                    None
                } else {
                    Some(ParsedValue::Str(segment.to_string()))
                }
            }
            ParamType::Path => Some(ParsedValue::Str(segment.to_string())),
        }
    }
}
