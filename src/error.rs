use std::io;

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors raised while building graphs or searching them
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    InvalidVertexIndex { node: Node, number_of_nodes: NumNodes },
    #[error("search aborted after {completed_passes} ghost passes")]
    Aborted { completed_passes: NumNodes },
    #[error("I/O failure")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let err = GraphError::InvalidVertexIndex {
            node: 7,
            number_of_nodes: 5,
        };
        assert_eq!(
            err.to_string(),
            "node 7 is out of range for a graph with 5 nodes"
        );

        let err = GraphError::Aborted {
            completed_passes: 3,
        };
        assert_eq!(err.to_string(), "search aborted after 3 ghost passes");

        let err: GraphError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
