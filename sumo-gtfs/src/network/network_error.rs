use super::{EdgeId, NodeId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("failure reading network file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure parsing network XML: {source}")]
    XmlParseError {
        #[from]
        source: roxmltree::Error,
    },
    #[error("<edge> element at line {0} has no 'id' attribute")]
    MissingEdgeId(u32),
    #[error("edge '{0}' is missing required attribute '{1}'")]
    MissingEdgeAttribute(EdgeId, String),
    #[error("attempting to get node '{0}' not in graph")]
    GraphMissingNodeId(NodeId),
    #[error("attempting to get edge from '{0}' to '{1}' not in graph")]
    GraphMissingEdge(NodeId, NodeId),
}
