use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;

use graph_search_core::{Color, Edge};
use graph_search_net::config::parse_seed_edges;
use graph_search_net::ProtocolError;
use graph_search_net::{seed_graph, send_message, Client, Message, Method, Response, Server, Settings};

fn start(seed: &str) -> SocketAddr {
    let settings = Settings {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        seed_edges: parse_seed_edges(seed).unwrap(),
        ..Settings::default()
    };
    let server = Server::bind(&settings, seed_graph(&settings).unwrap()).unwrap();
    let addr = server.local_addr().unwrap();
    thread::spawn(move || server.serve());
    addr
}

#[test]
fn test_bfs_over_tcp() {
    let addr = start("15:25,15:50,25:50");
    let response = send_message(addr, Method::Bfs, 0, -1).unwrap();
    let Response::Traversal(t) = response else { panic!("unexpected {:?}", response) };
    assert_eq!(t.color, vec![Color::Black; 3]);
    assert_eq!(t.vertex_ordering, vec![0, 1, 2]);
    assert_eq!(t.edge_ordering, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)]);
    assert_eq!(t.parent, vec![None, Some(0), Some(0)]);
    assert_eq!(t.distance, vec![0, 1, 1]);
}

#[test]
fn test_dfs_over_tcp() {
    let addr = start("15:25,15:50,25:50");
    let Response::Traversal(t) = send_message(addr, Method::Dfs, 0, -1).unwrap() else {
        panic!("expected traversal")
    };
    assert_eq!(t.vertex_ordering, vec![0, 2, 1]);
}

#[test]
fn test_mutations_visible_on_same_connection() {
    let addr = start("");
    let mut client = Client::connect(addr).unwrap();

    assert_eq!(client.call(&Message::new(Method::Add, 0, 1)).unwrap(), Response::Ack);
    assert_eq!(client.call(&Message::new(Method::Add, 1, 2)).unwrap(), Response::Ack);
    assert_eq!(
        client.call(&Message::bare(Method::Print)).unwrap(),
        Response::Graph(vec![vec![1], vec![2], vec![]])
    );

    assert_eq!(client.call(&Message::new(Method::Remove, 1, 0)).unwrap(), Response::Ack);
    assert_eq!(
        client.call(&Message::bare(Method::Print)).unwrap(),
        Response::Graph(vec![vec![], vec![]])
    );
}

#[test]
fn test_mutations_visible_across_connections() {
    let addr = start("1:2");
    assert_eq!(send_message(addr, Method::Add, 1, 2).unwrap(), Response::Ack);
    let Response::Traversal(t) = send_message(addr, Method::Bfs, 1, -1).unwrap() else {
        panic!("expected traversal")
    };
    assert_eq!(t.vertex_ordering, vec![1, 2]);
}

#[test]
fn test_components_over_tcp() {
    let addr = start("15:25,15:50,25:50,35:75,100:300");
    let mut client = Client::connect(addr).unwrap();
    let Response::Components(c) = client.call(&Message::bare(Method::StrongConnComponents)).unwrap() else {
        panic!("expected components")
    };
    let seeds: Vec<_> = c.iter().map(|t| t.source()).collect();
    assert_eq!(seeds, vec![Some(0), Some(3), Some(5)]);
}

#[test]
fn test_error_response_keeps_connection_open() {
    let addr = start("1:2");
    let mut client = Client::connect(addr).unwrap();
    let r = client.call(&Message::new(Method::Bfs, 9, -1)).unwrap();
    assert!(matches!(r, Response::Error { .. }));
    let r = client.call(&Message::new(Method::Bfs, 0, 1)).unwrap();
    assert!(matches!(r, Response::Traversal(_)));
}

#[test]
fn test_concurrent_clients() {
    let addr = start("");
    let handles: Vec<_> = (0..8)
        .map(|i| thread::spawn(move || send_message(addr, Method::Add, 0, i + 1).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Response::Ack);
    }

    let Response::Graph(rows) = send_message(addr, Method::Print, 0, 0).unwrap() else {
        panic!("expected graph")
    };
    let mut targets = rows[0].clone();
    targets.sort_unstable();
    assert_eq!(targets, (1..=8).collect::<Vec<_>>());
    assert_eq!(rows.len(), 9);
}

#[test]
fn test_huge_add_rejected_and_server_survives() {
    let addr = start("1:2");
    let r = send_message(addr, Method::Add, 0, 1 << 44).unwrap();
    let Response::Error { message } = r else { panic!("expected error, got {:?}", r) };
    assert!(message.contains("exceeds the limit"), "{}", message);

    assert_eq!(
        send_message(addr, Method::Print, 0, 0).unwrap(),
        Response::Graph(vec![vec![1], vec![]])
    );
}

/// Write `bytes` on a raw socket and return whatever the server sends back
/// before it closes the connection.
fn send_raw(addr: SocketAddr, bytes: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(bytes).unwrap();
    let mut reply = Vec::new();
    stream.read_to_end(&mut reply).unwrap();
    reply
}

#[test]
fn test_bad_frame_closes_only_that_connection() {
    let addr = start("1:2");
    let mut bystander = Client::connect(addr).unwrap();
    assert!(matches!(
        bystander.call(&Message::new(Method::Bfs, 0, -1)).unwrap(),
        Response::Traversal(_)
    ));

    // Oversized length prefix: no reply, connection closed.
    assert!(send_raw(addr, &u32::MAX.to_be_bytes()).is_empty());

    // Undecodable body: same.
    let mut garbage = 3u32.to_be_bytes().to_vec();
    garbage.extend_from_slice(b"???");
    assert!(send_raw(addr, &garbage).is_empty());

    // Existing and new connections are unaffected.
    assert!(matches!(
        bystander.call(&Message::new(Method::Dfs, 0, -1)).unwrap(),
        Response::Traversal(_)
    ));
    assert!(matches!(
        send_message(addr, Method::Bfs, 0, 1).unwrap(),
        Response::Traversal(_)
    ));
}

#[test]
fn test_client_response_limit() {
    let addr = start("1:2,2:3,3:4,4:5");
    let mut tight = Client::connect(addr).unwrap().with_max_message_bytes(16);
    let err = tight.call(&Message::bare(Method::StrongConnComponents)).unwrap_err();
    assert!(matches!(err, ProtocolError::FrameTooLarge { max: 16, .. }));

    let mut roomy = Client::connect(addr).unwrap().with_max_message_bytes(1 << 16);
    assert!(matches!(
        roomy.call(&Message::bare(Method::StrongConnComponents)).unwrap(),
        Response::Components(_)
    ));
}
