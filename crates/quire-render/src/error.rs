use quire_css::StyleError;
use quire_dom::NodeId;
use thiserror::Error;

/// Errors that abort a render.
///
/// Missing style data never produces an error; it resolves through the
/// documented fallbacks. Only a malformed cascade or a dangling node id
/// stops rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The style subsystem failed in a way other than inherit/no-styles.
    #[error("malformed cascade: {0}")]
    Style(#[from] StyleError),

    /// The node to render is not part of the tree.
    #[error("node {0:?} is not in the tree")]
    MissingNode(NodeId),
}
