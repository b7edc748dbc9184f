//! Dotted field paths.
//!
//! A field such as `"source.geo.location"` is parsed once into its segments
//! and handled as a [`FieldPath`] from then on. Nothing downstream splits
//! strings on `.` again.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneveError, Result};

/// Parsed dotted path of a field.
///
/// Every segment is non-empty. The zero-segment path is the root group and
/// can only be obtained through [`FieldPath::root`].
///
/// # Example
///
/// ```
/// use geneve_core::FieldPath;
///
/// let path: FieldPath = "a.b.c".parse().unwrap();
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.last(), Some("c"));
/// assert_eq!(path.parent().unwrap().to_string(), "a.b");
///
/// assert!("a..c".parse::<FieldPath>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a dotted path, rejecting empty paths and empty segments.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() || s.split('.').any(str::is_empty) {
            return Err(GeneveError::InvalidPath(s.to_string()));
        }
        Ok(Self {
            segments: s.split('.').map(str::to_string).collect(),
        })
    }

    /// Builds a path from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(String::is_empty) {
            return Err(GeneveError::InvalidPath(segments.join(".")));
        }
        Ok(Self { segments })
    }

    /// The root group path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path with the last segment dropped, `None` for the root.
    pub fn parent(&self) -> Option<FieldPath> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Appends a segment.
    ///
    /// The segment must be non-empty; this is used to rebuild paths from
    /// keys already stored in a tree.
    pub fn child(&self, segment: &str) -> FieldPath {
        debug_assert!(!segment.is_empty());
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Non-root proper prefixes, deepest first.
    ///
    /// `a.b.c` yields `a.b` then `a`.
    pub fn proper_prefixes(&self) -> impl Iterator<Item = FieldPath> + '_ {
        (1..self.segments.len()).rev().map(move |n| FieldPath {
            segments: self.segments[..n].to_vec(),
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = GeneveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = GeneveError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
