//! Cluster subject naming.
//!
//! Every node computes bus subject names locally, so these functions must
//! produce byte-identical output on every deployment for the same inputs:
//!
//! - local delivery:   `cherry-{prefix}.local.{nodeType}.{nodeID}`
//! - remote delivery:  `cherry-{prefix}.remote.{nodeType}.{nodeID}`
//! - remote-by-type:   `cherry-{prefix}.remoteType.{nodeType}`
//! - reply/correlation: `cherry-{prefix}.reply.{nodeType}.{nodeID}`
//!
//! `remoteType` is shared by every node hosting the type, which is what
//! lets the bus spread type-addressed messages across them; `reply` is a
//! node-private subject for correlating responses to its own requests.
//!
//! The functions are total: empty components yield a degenerate but
//! well-formed subject, and components are not inspected for embedded
//! separators.

const SUBJECT_PREFIX: &str = "cherry-";
const LOCAL_INFIX: &str = ".local.";
const REMOTE_INFIX: &str = ".remote.";
const REMOTE_TYPE_INFIX: &str = ".remoteType.";
const REPLY_INFIX: &str = ".reply.";

/// Subject a node consumes for intra-process (local) delivery
pub fn local_subject(prefix: &str, node_type: &str, node_id: &str) -> String {
    [SUBJECT_PREFIX, prefix, LOCAL_INFIX, node_type, ".", node_id].concat()
}

/// Subject a node consumes for inter-node delivery targeted at it
pub fn remote_subject(prefix: &str, node_type: &str, node_id: &str) -> String {
    [SUBJECT_PREFIX, prefix, REMOTE_INFIX, node_type, ".", node_id].concat()
}

/// Subject shared by all nodes of a type, for type-addressed delivery
pub fn remote_type_subject(prefix: &str, node_type: &str) -> String {
    [SUBJECT_PREFIX, prefix, REMOTE_TYPE_INFIX, node_type].concat()
}

/// Node-private subject for reply correlation
pub fn reply_subject(prefix: &str, node_type: &str, node_id: &str) -> String {
    [SUBJECT_PREFIX, prefix, REPLY_INFIX, node_type, ".", node_id].concat()
}
