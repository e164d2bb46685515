//! Request executor for the jsonplaceholder REST API.
//!
//! # Overview
//! One parameterized `RequestExecutor` covers GET, POST, PUT, PATCH and
//! DELETE. Each call builds a plain-data `HttpRequest`, hands it to a
//! `Transport`, classifies the reply into an `Outcome` and reports exactly
//! one log line to an `Observer`.
//!
//! # Design
//! - The executor is stateless apart from `base_url`; independent calls can
//!   run on separate threads.
//! - Failures never propagate out of `execute`: HTTP status failures become
//!   `Outcome::HttpError`, everything else `Outcome::TransportError`.
//! - Logging is injected so tests can assert on the exact lines.

pub mod client;
pub mod error;
pub mod http;
pub mod observer;
pub mod transport;
pub mod types;

pub use client::{RequestExecutor, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use observer::{LogObserver, Observer, RecordingObserver};
pub use transport::{Transport, UreqTransport};
pub use types::{Operation, Outcome};
