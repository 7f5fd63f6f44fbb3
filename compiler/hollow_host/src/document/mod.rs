//! In-memory arena host.
//!
//! [`Document`] stores every node it has ever created in one `Vec`,
//! addressed by [`NodeId`]. Detached nodes stay in the arena; a document
//! lives as long as the UI it backs, so nothing is reclaimed.
//!
//! Every call that changes the document bumps a mutation counter, which
//! is how callers observe that an update touched nothing.

mod html;

use hollow_ir::{Name, Scalar};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Host, NodeId};

#[derive(Clone, Debug)]
enum NodeKind {
    Element {
        tag: Name,
        attributes: FxHashMap<Name, Scalar>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

/// An in-memory host tree.
///
/// # Panics
///
/// Node handles are `u32` arena indices. Creating a node once
/// `u32::MAX` nodes exist panics; detached nodes count toward the cap.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
    mutations: usize,
}

impl Document {
    /// Tag of the root element every document starts with.
    pub const ROOT_TAG: &'static str = "body";

    pub fn new() -> Self {
        let mut doc = Document {
            nodes: Vec::with_capacity(64),
            root: NodeId::new(0),
            mutations: 0,
        };
        doc.root = doc.alloc(NodeKind::Element {
            tag: Name::new(Self::ROOT_TAG),
            attributes: FxHashMap::default(),
        });
        doc
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of state-changing calls made since creation.
    #[inline]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    /// Number of nodes ever allocated, attached or not.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    /// Tag name of an element, `None` for text.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Content of a text node, `None` for elements.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&Scalar> {
        match &self.node(node).kind {
            NodeKind::Element { attributes, .. } => attributes.get(name),
            NodeKind::Text(_) => None,
        }
    }

    /// All attributes of an element, sorted by name.
    pub fn attributes(&self, node: NodeId) -> Vec<(&Name, &Scalar)> {
        match &self.node(node).kind {
            NodeKind::Element { attributes, .. } => {
                let mut sorted: Vec<_> = attributes.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(b.0));
                sorted
            }
            NodeKind::Text(_) => Vec::new(),
        }
    }

    /// Concatenated text of `node` and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let data = self.node(node);
        match &data.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &data.children {
                    hollow_ir::ensure_sufficient_stack(|| self.collect_text(child, out));
                }
            }
        }
    }

    /// Panics if `node` was not issued by this document.
    #[inline]
    fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.index()]
    }

    #[inline]
    fn node_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.index()]
    }

    /// Panics past `u32::MAX` nodes; see [`Document`].
    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = match u32::try_from(self.nodes.len()) {
            Ok(raw) => NodeId::new(raw),
            Err(_) => panic!("document exceeded {} nodes", u32::MAX),
        };
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: SmallVec::new(),
        });
        id
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != child);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Document {
    fn create_element(&mut self, tag: &Name) -> NodeId {
        self.mutations += 1;
        self.alloc(NodeKind::Element {
            tag: tag.clone(),
            attributes: FxHashMap::default(),
        })
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.mutations += 1;
        self.alloc(NodeKind::Text(text.to_owned()))
    }

    fn set_attribute(&mut self, node: NodeId, name: &Name, value: &Scalar) {
        self.mutations += 1;
        match &mut self.node_mut(node).kind {
            NodeKind::Element { attributes, .. } => {
                if value.is_null() {
                    attributes.remove(name.as_str());
                } else {
                    attributes.insert(name.clone(), value.clone());
                }
            }
            NodeKind::Text(_) => {
                tracing::warn!(?node, %name, "attribute set on a text node ignored");
            }
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.mutations += 1;
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.mutations += 1;
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        let children = &mut self.node_mut(parent).children;
        let at = index.min(children.len());
        children.insert(at, child);
    }

    fn clear_children(&mut self, node: NodeId) {
        self.mutations += 1;
        let children = std::mem::take(&mut self.node_mut(node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
    }

    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.node(node).children.get(index).copied()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let NodeKind::Text(content) = &mut self.node_mut(node).kind {
            content.clear();
            content.push_str(text);
            self.mutations += 1;
            return;
        }
        self.clear_children(node);
        let leaf = self.create_text(text);
        self.append_child(node, leaf);
    }
}
