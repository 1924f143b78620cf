//! Cluster node identity.

use serde::{Deserialize, Serialize};

use crate::subjects;

/// Identity of one cluster node: the namespace prefix shared by the whole
/// cluster plus the node's type and id.
///
/// Bundles the triple every subject computation needs, so dispatch code
/// holding a node's profile does not thread three strings around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Cluster namespace; isolates clusters sharing one bus
    pub prefix: String,
    /// Node type, e.g. "gate" or "game"
    pub node_type: String,
    /// Unique node id within the cluster
    pub node_id: String,
}

impl NodeInfo {
    pub fn new(
        prefix: impl Into<String>,
        node_type: impl Into<String>,
        node_id: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            node_type: node_type.into(),
            node_id: node_id.into(),
        }
    }

    /// Subject this node consumes for local delivery
    pub fn local_subject(&self) -> String {
        subjects::local_subject(&self.prefix, &self.node_type, &self.node_id)
    }

    /// Subject this node consumes for targeted remote delivery
    pub fn remote_subject(&self) -> String {
        subjects::remote_subject(&self.prefix, &self.node_type, &self.node_id)
    }

    /// Shared subject for any node of this node's type
    pub fn remote_type_subject(&self) -> String {
        subjects::remote_type_subject(&self.prefix, &self.node_type)
    }

    /// This node's private reply-correlation subject
    pub fn reply_subject(&self) -> String {
        subjects::reply_subject(&self.prefix, &self.node_type, &self.node_id)
    }
}
