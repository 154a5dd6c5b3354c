//! Path patterns
//!
//! A pattern is a `/`-separated list of literal segments with at most one
//! `:name` parameter segment, e.g. `/symbol/:symbol`.
//!
//! Matching is segment by segment:
//! - literal segments compare exactly (case-sensitive)
//! - a parameter segment accepts any non-empty segment and binds it
//! - the segment counts must agree, so `/dashboard/` does not match `/dashboard`
//!
//! Query strings and fragments are ignored. Bound values are percent-decoded.

use std::borrow::Cow;
use std::fmt;

use super::error::{RouteError, RouteResult};
use super::params::RouteParams;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse and validate a pattern
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        if !pattern.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(pattern.to_string()));
        }

        let parsed = Self::split(pattern);

        let mut seen_param = false;
        for segment in &parsed.segments {
            if let Segment::Param(name) = segment {
                if seen_param {
                    return Err(RouteError::TooManyParams(pattern.to_string()));
                }
                seen_param = true;

                let valid = !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
                if !valid {
                    return Err(RouteError::InvalidParamName {
                        pattern: pattern.to_string(),
                        name: name.clone(),
                    });
                }
            }
        }

        Ok(parsed)
    }

    /// Split without validation; only for patterns known to be well formed
    pub(crate) fn trusted(pattern: &'static str) -> Self {
        Self::split(pattern)
    }

    fn split(pattern: &str) -> Self {
        let rest = pattern.strip_prefix('/').unwrap_or(pattern);
        let segments = rest
            .split('/')
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Name of the parameter segment, if the pattern has one
    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a concrete path, returning the bound parameters on success
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let rest = strip_query_and_fragment(path).strip_prefix('/')?;

        let mut actual = rest.split('/');
        let mut params = RouteParams::new();

        for expected in &self.segments {
            let segment = actual.next()?;
            match expected {
                Segment::Literal(literal) => {
                    if literal != segment {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if segment.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), decode_segment(segment));
                }
            }
        }

        if actual.next().is_some() {
            return None;
        }

        Some(params)
    }

    /// Build a concrete path from parameters (percent-encoding their values)
    ///
    /// Returns `None` if the parameter is missing or empty.
    pub fn build(&self, params: &RouteParams) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(Cow::Borrowed(literal.as_str())),
                Segment::Param(name) => {
                    let value = params.get(name).filter(|v| !v.is_empty())?;
                    parts.push(urlencoding::encode(value));
                }
            }
        }
        Some(format!("/{}", parts.join("/")))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Drop `?query` and `#fragment` from a path
pub(crate) fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(|c| c == '?' || c == '#') {
        Some(idx) => &path[..idx],
        None => path,
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}
