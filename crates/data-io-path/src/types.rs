//! Type definitions for data paths.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::util::{parse_index, split_path, truncate_path_str};
use crate::validate::{validate_path_str, MAX_PATH_LENGTH};
use crate::PathError;

/// How a segment is turned into an array index when it meets an array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// `strtoul`-style: leading digits are used, anything else reads as `0`.
    #[default]
    Permissive,
    /// The segment must consist of ASCII digits only.
    Strict,
}

/// Options applied while resolving a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    pub index_policy: IndexPolicy,
}

impl ResolveOptions {
    pub fn strict() -> Self {
        Self {
            index_policy: IndexPolicy::Strict,
        }
    }
}

/// One step of a path.
///
/// Whether a step selects an object member or an array element is decided by
/// the kind of node met at that step, not by the variant: a `Key` reaching an
/// array is parsed as an index, an `Index` reaching an object is looked up by
/// its decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// The text used when this segment meets an object.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            PathSegment::Key(key) => Cow::Borrowed(key),
            PathSegment::Index(idx) => Cow::Owned(idx.to_string()),
        }
    }

    /// The position used when this segment meets an array.
    pub fn to_index(&self, policy: IndexPolicy) -> Option<usize> {
        match self {
            PathSegment::Key(key) => parse_index(key, policy),
            PathSegment::Index(idx) => Some(*idx),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// A dotted data path such as `devices.0.name`.
///
/// Paths are either parsed from text or assembled segment by segment:
///
/// ```
/// use data_io_path::Path;
///
/// let built = Path::new().key("devices").index(3).key("name");
/// assert_eq!(built.to_string(), "devices.3.name");
/// assert_eq!(Path::parse("devices..3.name.").len(), 3);
/// ```
///
/// Keys are not escaped: a key containing `.` can be reached through the
/// builder, but its formatted text parses back into more segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
    truncated: bool,
    separators_only: bool,
}

impl Path {
    /// The empty path, addressing the starting node itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dotted text, skipping empty segments.
    ///
    /// Text longer than the path buffer is cut at the limit; see
    /// [`Path::is_truncated`].
    pub fn parse(text: &str) -> Self {
        let (text, truncated) = truncate_path_str(text, MAX_PATH_LENGTH);
        if truncated {
            tracing::debug!(max = MAX_PATH_LENGTH, kept = %text, "path text truncated");
        }
        let segments: Vec<PathSegment> = split_path(text)
            .map(|s| PathSegment::Key(s.to_string()))
            .collect();
        Self {
            separators_only: segments.is_empty() && !text.is_empty(),
            segments,
            truncated,
        }
    }

    /// Parse dotted text, rejecting text longer than the path buffer.
    pub fn parse_strict(text: &str) -> Result<Self, PathError> {
        validate_path_str(text)?;
        Ok(Self::parse(text))
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.push_key(key);
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.push_index(index);
        self
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.separators_only = false;
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.separators_only = false;
        self.segments.push(PathSegment::Index(index));
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the path was given no text at all: built with no segments, or
    /// parsed from `""`. Text made only of separators (`"..."`) is not blank,
    /// it addresses the starting node.
    pub fn is_blank(&self) -> bool {
        self.segments.is_empty() && !self.separators_only
    }

    /// Whether [`Path::parse`] dropped text beyond the path buffer.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse_strict(s)
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Path::parse(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Path::parse(&text)
    }
}

impl From<&String> for Path {
    fn from(text: &String) -> Self {
        Path::parse(text)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self {
            segments,
            truncated: false,
            separators_only: false,
        }
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Path::from(iter.into_iter().collect::<Vec<_>>())
    }
}
