//! Arena-based DOM snapshot for the maquette converter.
//!
//! # Design
//!
//! The tree is an explicit, immutable snapshot of the parsed document: all
//! nodes live in a contiguous vector and every relationship is a [`NodeId`]
//! index. Conversion passes walk the snapshot without touching any live DOM,
//! which keeps the box-model computation unit-testable in isolation and rules
//! out live-mutation hazards during traversal.
//!
//! The tree has no back-edges other than `parent`; traversal terminates
//! because the structure is built append-only by the HTML parser.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the DOM snapshot.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// Provides O(1) access to any node without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single node in the snapshot.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node type... and parent (null or an element)."
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// Parent node, or `None` for the document root.
    pub parent: Option<NodeId>,
    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// Child nodes in document order.
    pub children: Vec<NodeId>,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data: local name plus attribute list.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element),
/// namespaces and custom-element state are not modeled; the converter only
/// needs the tag name and attributes.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's local name", lowercased by the parser.
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Returns the element's id attribute value if present.
    pub fn id(&self) -> Option<&String> {
        self.attrs.get("id")
    }

    /// Returns the class names from the class attribute, in attribute order.
    ///
    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    /// "a set of space-separated tokens"
    pub fn class_list(&self) -> Vec<&str> {
        match self.attrs.get("class") {
            Some(classlist) => classlist.split_whitespace().collect(),
            None => Vec::new(),
        }
    }

    /// Check whether the class attribute contains the given token.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class_list().iter().any(|c| *c == name)
    }

    /// Returns an attribute value if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Arena-based DOM snapshot with O(1) node access.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
/// "The DOM represents a document as a tree."
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes, indexed by NodeId. The Document node is always at index 0.
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new snapshot holding just the Document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
        };
        DomTree {
            nodes: vec![document],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the snapshot is empty (it never is; the Document is node 0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Direct (non-descendant) text content of an element, trimmed.
    ///
    /// Concatenates the element's immediate text-node children only; text
    /// inside child elements is attributed to those elements.
    #[must_use]
    pub fn direct_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child_id in self.children(id) {
            if let Some(text) = self.as_text(child_id) {
                out.push_str(text);
            }
        }
        out.trim().to_string()
    }

    /// Child nodes of `id` that are elements, in document order.
    #[must_use]
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.as_element(c).is_some())
            .collect()
    }

    /// Iterate over all ancestors of a node, from parent to root.
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// Find the first `body` element anywhere in the snapshot.
    ///
    /// Unlike the HTML spec's definition this searches the whole tree, so
    /// fragments like `<body>...</body>` without an `<html>` wrapper are
    /// still found. Returns `None` when the document has no body at all.
    #[must_use]
    pub fn find_body(&self) -> Option<NodeId> {
        self.find_by_tag(NodeId::ROOT, "body")
    }

    /// Depth-first search for the first element with the given tag name.
    #[must_use]
    pub fn find_by_tag(&self, from: NodeId, tag: &str) -> Option<NodeId> {
        if let Some(data) = self.as_element(from) {
            if data.tag_name.eq_ignore_ascii_case(tag) {
                return Some(from);
            }
        }
        for &child_id in self.children(from) {
            if let Some(found) = self.find_by_tag(child_id, tag) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
