//! Replays the demo calls against the placeholder API.
//!
//! The base URL defaults to the public service and can be pointed at the mock
//! server with `PLACEHOLDER_BASE_URL`. Log verbosity follows `RUST_LOG`.

use placeholder_core::{LogObserver, RequestExecutor, UreqTransport, DEFAULT_BASE_URL};
use serde_json::json;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_url = std::env::var("PLACEHOLDER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    log::debug!("using base url {base_url}");
    let exec = RequestExecutor::new(&base_url, UreqTransport::new(), LogObserver);

    // The three probes are independent; their log lines may interleave.
    std::thread::scope(|s| {
        for segment in ["/posts", "/posts/1", "/404"] {
            let exec = &exec;
            s.spawn(move || exec.get_data(segment));
        }
    });

    exec.post_data(
        "/posts",
        &json!({
            "title": "Новий пост",
            "body": "Це вміст поста",
            "userId": 1
        }),
    );

    exec.put_data(
        1,
        &json!({
            "title": "Оновлений заголовок",
            "body": "Оновлений вміст",
            "userId": 1
        }),
    );

    exec.patch_data(1, &json!({ "title": "Новий заголовок" }));

    exec.delete_data(1);
}
