//! The per-send routing record.
//!
//! An envelope is created for each send, handed to exactly one receiving
//! execution context, and disposed after its handler runs. Disposal drops
//! the payload, session, headers, reply channel, and the resolved-address
//! memo so references are released promptly; the scalar metadata stays
//! readable for diagnostics.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tokio::sync::oneshot;
use tracing::debug;

use routing::{ActorPath, AddressResolver, RoutingResult};

use crate::packet::ClusterPacket;
use crate::payload::Payload;
use crate::session::Session;

/// Routing metadata and payload for one send.
///
/// `source` and `target` are canonical actor path strings, set at
/// construction and never mutated by this core. The structured form of
/// `target` is resolved lazily through [`Envelope::resolve_target`] and
/// memoized until [`Envelope::dispose`].
pub struct Envelope {
    /// Build time in milliseconds
    pub build_time: i64,
    /// Time the dispatch layer posted this envelope to a mailbox, in
    /// milliseconds; 0 until posted
    pub post_time: i64,
    /// Canonical path of the sending actor
    pub source: String,
    /// Canonical path of the target actor
    pub target: String,
    /// Handler name to invoke on the target
    pub func_name: String,
    /// Reply-correlation subject; empty when no reply is expected
    pub reply: String,
    /// True when this envelope was built from a cluster packet
    pub is_cluster: bool,
    /// Originating gateway session, if any
    pub session: Option<Arc<Session>>,
    /// String-keyed transport metadata
    pub headers: HashMap<String, String>,
    /// Argument payload
    pub args: Payload,

    target_path: Option<ActorPath>,
    reply_tx: Option<oneshot::Sender<Payload>>,
}

impl Envelope {
    /// Empty envelope stamped with the current wall clock
    pub fn new() -> Self {
        Self {
            build_time: Utc::now().timestamp_millis(),
            post_time: 0,
            source: String::new(),
            target: String::new(),
            func_name: String::new(),
            reply: String::new(),
            is_cluster: false,
            session: None,
            headers: HashMap::new(),
            args: Payload::Empty,
            target_path: None,
            reply_tx: None,
        }
    }

    /// Envelope for a local fire-and-forget send
    pub fn local(
        source: impl Into<String>,
        target: impl Into<String>,
        func_name: impl Into<String>,
        args: Payload,
    ) -> Self {
        let mut envelope = Self::new();
        envelope.source = source.into();
        envelope.target = target.into();
        envelope.func_name = func_name.into();
        envelope.args = args;
        envelope
    }

    /// Envelope for a request/response send.
    ///
    /// The returned receiver is the waiter's end of the one-shot result
    /// channel; the caller imposes its own timeout on it. The handler side
    /// completes through [`Envelope::complete`], which never blocks even if
    /// the waiter already gave up.
    pub fn request(
        source: impl Into<String>,
        target: impl Into<String>,
        func_name: impl Into<String>,
        args: Payload,
    ) -> (Self, oneshot::Receiver<Payload>) {
        let (reply_tx, reply_rx) = oneshot::channel();
        let mut envelope = Self::local(source, target, func_name, args);
        envelope.reply_tx = Some(reply_tx);
        (envelope, reply_rx)
    }

    /// Envelope for a message received from the cluster.
    ///
    /// Copies the packet's routing metadata and keeps `arg_bytes` raw;
    /// decoding them against the handler signature is the dispatch layer's
    /// job. The transport fills `reply` from the bus message's reply
    /// subject when the sender expects a response.
    pub fn from_packet(packet: ClusterPacket) -> Self {
        Self {
            build_time: packet.build_time,
            post_time: 0,
            source: packet.source_path,
            target: packet.target_path,
            func_name: packet.func_name,
            reply: String::new(),
            is_cluster: true,
            session: packet.session.map(Arc::new),
            headers: HashMap::new(),
            args: Payload::Raw(Bytes::from(packet.arg_bytes)),
            target_path: None,
            reply_tx: None,
        }
    }

    /// Resolve `target` into its structured form, memoizing the success.
    ///
    /// The memo is populated at most once until [`Envelope::dispose`]; a
    /// malformed target is reported on every call and never memoized, the
    /// same way the resolver caches successes only.
    pub fn resolve_target(&mut self, resolver: &AddressResolver) -> RoutingResult<&ActorPath> {
        if self.target_path.is_none() {
            self.target_path = Some(resolver.parse(&self.target)?);
        }
        Ok(self.target_path.as_ref().expect("memo populated above"))
    }

    /// Memoized target address, if already resolved
    pub fn target_path(&self) -> Option<&ActorPath> {
        self.target_path.as_ref()
    }

    /// True when the sender expects a response published to `reply`
    pub fn is_reply(&self) -> bool {
        !self.reply.is_empty()
    }

    /// True while a request/response waiter is attached
    pub fn has_reply_channel(&self) -> bool {
        self.reply_tx.is_some()
    }

    /// Deliver the handler's result to the attached waiter.
    ///
    /// One-shot: the channel is consumed by the first call. Returns false
    /// without blocking when no waiter is attached or the waiter dropped
    /// its receiver before the handler finished.
    pub fn complete(&mut self, result: Payload) -> bool {
        match self.reply_tx.take() {
            Some(reply_tx) => match reply_tx.send(result) {
                Ok(()) => true,
                Err(_) => {
                    debug!(
                        to = %self.target,
                        func_name = %self.func_name,
                        "reply receiver dropped before completion"
                    );
                    false
                }
            },
            None => false,
        }
    }

    /// Release per-message references after processing.
    ///
    /// Clears the resolved-address memo, session, payload, headers, and
    /// reply channel. Scalar metadata stays readable; resolving the target
    /// again after disposal re-parses the (uncleared) `target` string.
    pub fn dispose(&mut self) {
        self.target_path = None;
        self.session = None;
        self.args = Payload::Empty;
        self.headers.clear();
        self.reply_tx = None;
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("build_time", &self.build_time)
            .field("post_time", &self.post_time)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("func_name", &self.func_name)
            .field("reply", &self.reply)
            .field("is_cluster", &self.is_cluster)
            .field("args", &self.args)
            .field("resolved", &self.target_path.is_some())
            .field("has_reply_channel", &self.reply_tx.is_some())
            .finish()
    }
}
