use serde::{Serialize, Deserialize};

/// A heading captured from a document, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Heading level (2 = most prominent in the default scope, 6 = least)
    pub level: u8,
    /// Visible text of the heading
    pub text: String,
    /// Identifier already carried by the heading (`id` or `name` attribute)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_id: Option<String>,
}

impl HeadingRecord {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            explicit_id: None,
        }
    }

    pub fn with_explicit_id(mut self, id: impl Into<String>) -> Self {
        self.explicit_id = Some(id.into());
        self
    }
}

/// A heading once its anchor has been assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub level: u8,
    pub anchor: String,
    pub text: String,
}

/// One linked item of the outline tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub anchor: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(anchor: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::count).sum::<usize>()
    }

    /// Depth of this subtree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::depth).max().unwrap_or(0)
    }
}

/// Result of the outline computation for one document.
///
/// `anchors` holds one anchor per input heading, in input order, so the
/// caller can place markers without walking the tree. `nodes` are the
/// children of the implicit level-0 root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub anchors: Vec<String>,
    pub nodes: Vec<OutlineNode>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of linked items in the tree
    pub fn len(&self) -> usize {
        self.nodes.iter().map(OutlineNode::count).sum()
    }

    /// Number of nested list levels the rendered outline will have
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(OutlineNode::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_counts() {
        let mut parent = OutlineNode::new("setup", "Setup");
        parent.children.push(OutlineNode::new("requirements", "Requirements"));
        parent.children.push(OutlineNode::new("installation", "Installation"));

        let outline = Outline {
            anchors: vec![],
            nodes: vec![OutlineNode::new("intro", "Intro"), parent],
        };

        assert_eq!(outline.len(), 4);
        assert_eq!(outline.depth(), 2);
        assert!(!outline.is_empty());
        assert_eq!(Outline::default().depth(), 0);
    }

    #[test]
    fn test_leaf_children_are_not_serialized() {
        let json = serde_json::to_string(&OutlineNode::new("a", "A")).unwrap();
        assert_eq!(json, r#"{"anchor":"a","text":"A"}"#);
    }
}
