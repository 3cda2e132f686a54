//! JSON document descriptions.
//!
//! A document is one node object:
//!
//! ```json
//! { "tag": "p", "style": { "font-size": "20px" }, "attrs": { "id": "intro" },
//!   "children": [ { "text": "Hello, world." }, { "comment": "draft" } ] }
//! ```
//!
//! Style values are taken as already cascaded; the value `inherit` defers to
//! the parent.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use quire_dom::{ElementData, NodeId, NodeType};
use quire_render::RenderTree;
use serde::Deserialize;

/// One node of a document description.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonNode {
    /// An element with optional styles, attributes and children.
    Element {
        /// Tag name.
        tag: String,
        /// Cascaded declarations.
        #[serde(default)]
        style: BTreeMap<String, String>,
        /// Attributes, shown by `quire tree`.
        #[serde(default)]
        attrs: BTreeMap<String, String>,
        /// Child nodes in order.
        #[serde(default)]
        children: Vec<JsonNode>,
    },
    /// A text run.
    Text {
        /// The literal text.
        text: String,
        /// Cascaded declarations for the run itself.
        #[serde(default)]
        style: BTreeMap<String, String>,
    },
    /// A comment, kept in the tree but never rendered.
    Comment {
        /// Comment body.
        comment: String,
    },
}

/// Parse a document description into a tree. The described node becomes
/// the document element.
///
/// # Errors
///
/// Fails if `json` is not a valid node description.
pub fn parse_document(json: &str) -> Result<RenderTree> {
    let node: JsonNode = serde_json::from_str(json).context("invalid document description")?;
    let mut tree = RenderTree::new();
    let _root = append_node(&mut tree, NodeId::ROOT, node);
    Ok(tree)
}

fn append_node(tree: &mut RenderTree, parent: NodeId, node: JsonNode) -> NodeId {
    match node {
        JsonNode::Element {
            tag,
            style,
            attrs,
            children,
        } => {
            let mut data = ElementData::new(&tag);
            data.attrs.extend(attrs);
            let id = tree.append(parent, NodeType::Element(data), style.into_iter().collect());
            for child in children {
                let _child = append_node(tree, id, child);
            }
            id
        }
        JsonNode::Text { text, style } => {
            tree.append_styled_text(parent, &text, style.into_iter().collect())
        }
        JsonNode::Comment { comment } => tree.append_comment(parent, &comment),
    }
}

#[cfg(test)]
mod tests {
    use quire_css::{Cascaded, Declared};

    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let tree = parse_document(
            r#"{
                "tag": "div",
                "style": { "font-size": "20px", "background-color": "inherit" },
                "attrs": { "id": "main" },
                "children": [
                    { "text": "Hello," },
                    { "comment": "skip me" },
                    { "tag": "span", "style": { "display": "inline" } }
                ]
            }"#,
        )
        .unwrap();

        let dom = tree.dom();
        let div = dom.document_element().unwrap();
        assert_eq!(dom.tag_name(div), Some("div"));
        assert_eq!(dom.as_element(div).unwrap().id(), Some(&"main".to_string()));

        let styles = tree.styles(div).unwrap();
        assert_eq!(styles.font_size().unwrap(), Cascaded::Value(20));
        assert_eq!(styles.declared("background-color"), Some(&Declared::Inherit));

        let children = dom.children(div);
        assert_eq!(children.len(), 3);
        assert_eq!(dom.as_text(children[0]), Some("Hello,"));
        assert!(tree.styles(children[0]).is_none());
        assert!(!dom.is_element(children[1]) && !dom.is_text(children[1]));
        assert_eq!(dom.tag_name(children[2]), Some("span"));
    }

    #[test]
    fn test_styled_text() {
        let tree = parse_document(r#"{ "text": "hi", "style": { "color": "red" } }"#).unwrap();
        let text = tree.dom().children(NodeId::ROOT)[0];
        assert!(tree.styles(text).is_some());
    }

    #[test]
    fn test_rejects_unknown_shape() {
        assert!(parse_document(r#"{ "nodes": [] }"#).is_err());
        assert!(parse_document("not json").is_err());
    }
}
