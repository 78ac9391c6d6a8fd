//! Field paths: structural addresses into the nested value tree

use std::fmt;

/// One step of a field path: a named key or a positional index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => f.write_str(k),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Structural address of a value within the nested input tree.
///
/// Paths render as dot-joined segments, e.g. `techs.0.title`. A purely
/// numeric segment is an index into a collection; everything else is a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    /// The empty path, addressing the root of the value tree.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Single-key path.
    pub fn key(name: impl Into<String>) -> Self {
        Self(vec![Segment::Key(name.into())])
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Extend with a named child segment.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(name.into()));
        Self(segments)
    }

    /// Extend with a positional index segment.
    pub fn index(&self, i: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(i));
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// A segment is an index only when it is the canonical decimal rendering
/// of one (`"1"`, not `"01"`); anything else is a key. Object keys that
/// look like canonical numbers (e.g. `"2024"`) cannot be addressed through
/// the string form — build such paths with [`FieldPath::child`].
impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            return Self::root();
        }
        let segments = s
            .split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(i) if i.to_string() == part => Segment::Index(i),
                _ => Segment::Key(part.to_string()),
            })
            .collect();
        Self(segments)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        FieldPath::from(s.as_str())
    }
}
