//! Vertex identifier generation and bipartite sides.

use serde::Serialize;

use super::{GraphError, GraphResult, FIRST_VERTEX_ID, LAST_VERTEX_ID};

/// Side of a vertex created through bipartite generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Letter-named side.
    Left,
    /// Number-named side.
    Right,
}

impl Side {
    /// Return a human-readable name for this side.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Single uppercase ASCII letter held by `id`, if that is all it holds.
fn as_letter(id: &str) -> Option<char> {
    let mut chars = id.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}

/// Next letter identifier after the greatest single-letter id in `ids`.
///
/// Ids that are not a single uppercase letter are ignored. With no letter
/// ids the result is `"A"`. Stepping past `'Z'` is an error.
pub fn next_letter_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> GraphResult<String> {
    let greatest = ids.into_iter().filter_map(as_letter).max();
    match greatest {
        None => Ok(FIRST_VERTEX_ID.to_string()),
        Some(LAST_VERTEX_ID) => Err(GraphError::UnsupportedOperation(format!(
            "automatic vertex ids are exhausted after {:?}",
            LAST_VERTEX_ID
        ))),
        Some(c) => Ok(char::from(c as u8 + 1).to_string()),
    }
}
