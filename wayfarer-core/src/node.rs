//! Node identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Label identifying a node, such as a building number on a campus map.
///
/// Equality and hashing follow the label, so a `HashMap<NodeId, _>` can be
/// queried with a plain `&str`.
///
/// # Examples
/// ```
/// use wayfarer_core::NodeId;
///
/// let id = NodeId::new("32");
/// assert_eq!(id.as_str(), "32");
/// assert_eq!(id.to_string(), "32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_follows_label() {
        assert_eq!(NodeId::new("a"), NodeId::from(String::from("a")));
        assert_ne!(NodeId::new("a"), NodeId::new("b"));
    }

    #[test]
    fn hash_lookup_accepts_str() {
        let ids: HashSet<NodeId> = ["a", "b"].into_iter().map(NodeId::from).collect();
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
    }
}
