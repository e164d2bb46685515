//! Every verb against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the executor with the
//! real `UreqTransport`. Validates request building, transport and outcome
//! classification end-to-end.

use std::net::SocketAddr;

use log::Level;
use placeholder_core::{Operation, Outcome, RecordingObserver, RequestExecutor, UreqTransport};
use serde_json::json;

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn executor(addr: SocketAddr) -> RequestExecutor<UreqTransport, RecordingObserver> {
    RequestExecutor::new(&format!("http://{addr}"), UreqTransport::new(), RecordingObserver::new())
}

#[test]
fn every_verb_against_mock_server() {
    let exec = executor(start_mock_server());

    // GET list.
    let posts = exec.get_data("/posts");
    assert_eq!(posts.as_array().map(Vec::len), Some(3));

    // GET single.
    let outcome = exec.execute(&Operation::get("/posts/1"));
    let post = match outcome {
        Outcome::Success(post) => post,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(post["id"], 1);

    // GET missing route.
    assert_eq!(exec.execute(&Operation::get("/404")), Outcome::HttpError(404));

    // POST.
    let created = exec.post_data(
        "/posts",
        &json!({"title": "Новий пост", "body": "Це вміст поста", "userId": 1}),
    );
    assert_eq!(created["id"], 4);
    assert_eq!(created["title"], "Новий пост");

    // PUT.
    let replaced = exec.put_data(
        1,
        &json!({"title": "Оновлений заголовок", "body": "Оновлений вміст", "userId": 1}),
    );
    assert_eq!(replaced["title"], "Оновлений заголовок");
    assert_eq!(replaced["body"], "Оновлений вміст");

    // PATCH.
    let patched = exec.patch_data(1, &json!({"title": "Новий заголовок"}));
    assert_eq!(patched["title"], "Новий заголовок");
    assert_eq!(patched["body"], "Оновлений вміст");

    // PATCH unknown post.
    assert_eq!(
        exec.patch_data(999, &json!({"title": "x"})),
        json!("Помилка: HTTP статус 404")
    );

    // DELETE, then DELETE again.
    assert_eq!(exec.delete_data(1), json!(true));
    assert_eq!(exec.delete_data(1), json!(404));

    let records = exec.observer().records();
    assert_eq!(records.len(), 9, "one log line per call");
    assert_eq!(records[2], (Level::Error, "HTTP помилка зі статусом: 404".to_string()));
    assert_eq!(
        records[7],
        (Level::Info, "Post with id 1 has been successfully deleted.".to_string())
    );
    assert_eq!(
        records[8],
        (Level::Error, "Failed to delete post with id 1. Status: 404".to_string())
    );
}

#[test]
fn concurrent_gets_each_log_once() {
    let exec = executor(start_mock_server());

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = ["/posts", "/posts/1", "/404"]
            .into_iter()
            .map(|segment| {
                let exec = &exec;
                s.spawn(move || exec.get_data(segment))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results[0].is_array());
    assert_eq!(results[1]["id"], 1);
    assert_eq!(results[2], json!(404));
    assert_eq!(exec.observer().records().len(), 3);
}

#[test]
fn connection_refused_is_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let exec = executor(addr);

    let outcome = exec.execute(&Operation::delete(1));
    let message = match outcome {
        Outcome::TransportError(message) => message,
        other => panic!("expected transport error, got {other:?}"),
    };
    assert!(!message.is_empty());
    assert_eq!(
        exec.observer().messages(),
        vec![format!("Error during deletion: {message}")]
    );
}
