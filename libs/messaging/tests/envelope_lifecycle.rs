//! End-to-end flow of a cluster message: decoded packet to envelope,
//! target resolution, reply correlation, and disposal.

use messaging::{AddressResolver, ClusterPacket, Envelope, Payload};
use routing::NodeInfo;

#[test]
fn cluster_message_dispatch_flow() {
    // Transport decoded a bus message into the wire-packet shape
    let packet: ClusterPacket = serde_json::from_str(
        r#"{
            "build_time": 1700000000123,
            "source_path": "gate-1.player.10001",
            "target_path": "game-1.room",
            "func_name": "join",
            "session": {"sid": "s-1", "uid": 42, "ip": "10.0.0.8"},
            "arg_bytes": [10, 20, 30]
        }"#,
    )
    .unwrap();

    let sender = NodeInfo::new("game", "gate", "gate-1");
    let mut envelope = Envelope::from_packet(packet);
    envelope.reply = sender.reply_subject();

    assert!(envelope.is_cluster);
    assert!(envelope.is_reply());
    assert_eq!(envelope.reply, "cherry-game.reply.gate.gate-1");
    assert_eq!(envelope.args.as_raw().unwrap().as_ref(), &[10, 20, 30]);

    // Dispatch resolves the target to pick the actor instance
    let resolver = AddressResolver::new();
    let path = envelope.resolve_target(&resolver).unwrap();
    assert_eq!(path.node_id, "game-1");
    assert_eq!(path.actor_id, "room");
    assert!(path.is_parent());

    // The handler ran; the envelope is done
    envelope.dispose();
    assert!(envelope.session.is_none());
    assert!(envelope.args.is_empty());
    assert_eq!(envelope.func_name, "join");
}

#[tokio::test]
async fn local_request_reply_flow() {
    let resolver = AddressResolver::new();
    let (mut envelope, reply_rx) = Envelope::request(
        "game-1.room",
        "game-1.room.10001",
        "score",
        Payload::value("hi".to_string()),
    );

    let path = envelope.resolve_target(&resolver).unwrap();
    assert!(path.is_child());
    assert_eq!(path.child_id, "10001");

    // Handler completes exactly once, then the envelope is disposed
    assert!(envelope.complete(Payload::value(250u32)));
    envelope.dispose();

    let result = reply_rx.await.unwrap();
    assert_eq!(result.downcast::<u32>().map(|v| *v), Some(250));
}
