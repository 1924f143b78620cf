//! Decoded cluster wire packet.

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// The packet shape the transport hands to this core after decoding a bus
/// message.
///
/// `arg_bytes` stays opaque here;
/// [`Envelope::from_packet`](crate::envelope::Envelope::from_packet)
/// carries it through untouched and the dispatch layer decodes it against
/// the handler's signature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterPacket {
    /// Sender-side build time in milliseconds
    pub build_time: i64,
    /// Canonical path of the sending actor
    pub source_path: String,
    /// Canonical path of the target actor
    pub target_path: String,
    /// Handler name to invoke on the target
    pub func_name: String,
    /// Originating gateway session, if any
    pub session: Option<Session>,
    /// Raw, still-encoded argument payload
    pub arg_bytes: Vec<u8>,
}
