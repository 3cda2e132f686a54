//! Tests for tree construction, navigation and traversal.

use quire_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

/// Build `<body><p>text</p><!--c--><div><span/></div></body>` under the root.
fn sample_tree() -> (DomTree, [NodeId; 6]) {
    let mut tree = DomTree::new();
    let body = tree.append_element(NodeId::ROOT, "body");
    let p = tree.append_element(body, "p");
    let text = tree.append_text(p, "text");
    let comment = tree.alloc(NodeType::Comment("c".to_string()));
    tree.append_child(body, comment);
    let div = tree.append_element(body, "div");
    let span = tree.append_element(div, "span");
    (tree, [body, p, text, comment, div, span])
}

// ============================================================================
// Appending children
// ============================================================================

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(matches!(
        tree.get(tree.root()).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
}

#[test]
fn test_append_child_links_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(c));
    assert_eq!(tree.parent(b), Some(parent));

    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(c), None);
}

#[test]
fn test_sibling_chain_is_consistent() {
    let (tree, ids) = sample_tree();
    for id in ids {
        if let Some(next) = tree.next_sibling(id) {
            assert_eq!(tree.prev_sibling(next), Some(id));
        }
        if let Some(prev) = tree.prev_sibling(id) {
            assert_eq!(tree.next_sibling(prev), Some(id));
        }
    }
}

#[test]
#[should_panic(expected = "already attached")]
fn test_append_attached_node_panics() {
    let mut tree = DomTree::new();
    let a = tree.append_element(NodeId::ROOT, "a");
    let b = tree.append_element(NodeId::ROOT, "b");
    tree.append_child(b, a);
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_kind_accessors() {
    let (tree, [body, _, text, comment, ..]) = sample_tree();
    assert!(tree.is_element(body));
    assert_eq!(tree.tag_name(body), Some("body"));
    assert!(tree.is_text(text));
    assert_eq!(tree.as_text(text), Some("text"));
    assert!(!tree.is_element(comment));
    assert!(!tree.is_text(comment));
    assert_eq!(tree.tag_name(text), None);
}

#[test]
fn test_document_element() {
    let (tree, [body, ..]) = sample_tree();
    assert_eq!(tree.document_element(), Some(body));
    assert_eq!(DomTree::new().document_element(), None);
}

#[test]
fn test_ancestors_from_parent_to_root() {
    let (tree, [body, _, _, _, div, span]) = sample_tree();
    let ancestors: Vec<_> = tree.ancestors(span).collect();
    assert_eq!(ancestors, vec![div, body, NodeId::ROOT]);
}

#[test]
fn test_element_data_is_case_insensitive() {
    let data = ElementData::new("H1");
    assert!(data.is("h1"));
    assert!(!data.is("h2"));
    assert_eq!(data.id(), None);
}

// ============================================================================
// Elements walker
// ============================================================================

#[test]
fn test_elements_pre_order_from_document() {
    let (tree, [body, p, _, _, div, span]) = sample_tree();
    let visited: Vec<_> = tree.elements(NodeId::ROOT).collect();
    assert_eq!(visited, vec![body, p, div, span]);
}

#[test]
fn test_elements_visits_each_element_once() {
    let mut tree = DomTree::new();
    let outer = tree.append_element(NodeId::ROOT, "div");
    let middle = tree.append_element(outer, "div");
    let inner = tree.append_element(middle, "div");
    let visited: Vec<_> = tree.elements(outer).collect();
    assert_eq!(visited, vec![outer, middle, inner]);
}

#[test]
fn test_elements_limited_to_subtree() {
    let (tree, [_, p, _, _, div, span]) = sample_tree();
    assert_eq!(tree.elements(div).collect::<Vec<_>>(), vec![div, span]);
    assert_eq!(tree.elements(p).collect::<Vec<_>>(), vec![p]);
}

#[test]
fn test_elements_is_restartable() {
    let (tree, _) = sample_tree();
    let mut walk = tree.elements(NodeId::ROOT);
    let first = walk.next();
    let rest_a: Vec<_> = walk.clone().collect();
    let rest_b: Vec<_> = walk.collect();
    assert_eq!(rest_a, rest_b);

    let again: Vec<_> = tree.elements(NodeId::ROOT).collect();
    assert_eq!(again.first().copied(), first);
    assert_eq!(again.len(), rest_a.len() + 1);
}
