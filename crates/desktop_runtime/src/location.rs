//! Typed dotted locations inside the kennel content tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::ContentError;

/// Segment name that authored paths may use between keys and that carries no meaning.
pub const CHILDREN_SEGMENT: &str = "children";

/// Non-empty key sequence from a root entry down to a node.
///
/// Empty and literal `children` segments are dropped while parsing, so
/// `ourKennel.children.aboutUs`, `ourKennel..aboutUs` and `ourKennel.aboutUs` are the same
/// location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreeLocation {
    segments: Vec<String>,
}

impl TreeLocation {
    /// Parses a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::EmptyPath`] when no key remains after dropping empty and
    /// `children` segments.
    pub fn parse(path: &str) -> Result<Self, ContentError> {
        Self::from_segments(path.trim().split('.'))
    }

    /// Builds a location from already split key segments.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::EmptyPath`] when no key remains after dropping empty and
    /// `children` segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|segment| segment.as_ref().to_string())
            .filter(|segment| !segment.is_empty() && segment != CHILDREN_SEGMENT)
            .collect();
        if segments.is_empty() {
            return Err(ContentError::EmptyPath);
        }
        Ok(Self { segments })
    }

    /// Location of a top-level entry.
    pub fn root(key: impl Into<String>) -> Self {
        Self {
            segments: vec![key.into()],
        }
    }

    /// Key segments from the root down.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Top-level key.
    pub fn root_key(&self) -> &str {
        &self.segments[0]
    }

    /// Final key (the node's own key).
    pub fn last_key(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Number of segments, `1` for a root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for top-level locations.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Location one level up, `None` at a root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Location of the direct child `key`.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }

    /// Every prefix from the root to `self`, inclusive.
    pub fn prefixes(&self) -> impl Iterator<Item = TreeLocation> + '_ {
        (1..=self.segments.len()).map(move |len| Self {
            segments: self.segments[..len].to_vec(),
        })
    }
}

impl fmt::Display for TreeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for TreeLocation {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TreeLocation {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TreeLocation> for String {
    fn from(value: TreeLocation) -> Self {
        value.to_string()
    }
}
