// models/src/identifiers.rs

use crate::errors::{GraphError, GraphResult};

/// A node identifier. Nodes are dense indices in `[0, node_count)`; a graph
/// never stores node objects, only the adjacency derived from its edges.
pub type NodeId = usize;

/// Validate that `node` addresses a node in a graph of `node_count` nodes.
pub fn ensure_in_range(node: NodeId, node_count: usize) -> GraphResult<()> {
    if node >= node_count {
        return Err(GraphError::NodeOutOfRange { node, node_count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_in_range;
    use crate::errors::GraphError;

    #[test]
    fn should_accept_nodes_in_range() {
        assert!(ensure_in_range(0, 1).is_ok());
        assert!(ensure_in_range(4, 5).is_ok());
    }

    #[test]
    fn should_reject_nodes_out_of_range() {
        assert!(matches!(
            ensure_in_range(1, 1),
            Err(GraphError::NodeOutOfRange { node: 1, node_count: 1 })
        ));
        assert!(ensure_in_range(0, 0).is_err());
    }
}
