//! The renderable tree: an element tree plus a style handle per node.

use std::collections::HashMap;

use quire_css::StyledElement;
use quire_dom::{DomTree, NodeId, NodeType};

/// A [`DomTree`] whose nodes may carry cascaded styles.
///
/// Nodes without an entry in the style table report `NoStyles` for every
/// property.
#[derive(Debug, Clone, Default)]
pub struct RenderTree {
    dom: DomTree,
    styles: HashMap<NodeId, StyledElement>,
}

impl From<DomTree> for RenderTree {
    fn from(dom: DomTree) -> Self {
        Self {
            dom,
            styles: HashMap::new(),
        }
    }
}

impl RenderTree {
    /// An empty tree holding only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element tree.
    #[must_use]
    pub const fn dom(&self) -> &DomTree {
        &self.dom
    }

    /// The style handle for `id`, if one was attached.
    #[must_use]
    pub fn styles(&self, id: NodeId) -> Option<&StyledElement> {
        self.styles.get(&id)
    }

    /// Mutable access to the style handle for `id`, creating an empty one
    /// if needed.
    pub fn styles_mut(&mut self, id: NodeId) -> &mut StyledElement {
        self.styles.entry(id).or_default()
    }

    /// Attach `styles` to `id`, replacing any previous handle. An empty
    /// handle removes the entry.
    pub fn set_styles(&mut self, id: NodeId, styles: StyledElement) {
        if styles.is_empty() {
            let _previous = self.styles.remove(&id);
        } else {
            let _previous = self.styles.insert(id, styles);
        }
    }

    /// Append a styled element under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this tree.
    pub fn append_element(&mut self, parent: NodeId, tag_name: &str, styles: StyledElement) -> NodeId {
        let id = self.dom.append_element(parent, tag_name);
        self.set_styles(id, styles);
        id
    }

    /// Append an unstyled text node under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this tree.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.dom.append_text(parent, text)
    }

    /// Append a styled text node under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this tree.
    pub fn append_styled_text(
        &mut self,
        parent: NodeId,
        text: &str,
        styles: StyledElement,
    ) -> NodeId {
        let id = self.dom.append_text(parent, text);
        self.set_styles(id, styles);
        id
    }

    /// Append a comment under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this tree.
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeType::Comment(text.to_string()), StyledElement::new())
    }

    /// Append a node of any kind under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this tree.
    pub fn append(&mut self, parent: NodeId, node_type: NodeType, styles: StyledElement) -> NodeId {
        let id = self.dom.alloc(node_type);
        self.dom.append_child(parent, id);
        self.set_styles(id, styles);
        id
    }
}
