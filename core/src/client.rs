//! Parameterized executor behind the five verb operations.
//!
//! # Design
//! `RequestExecutor` holds the base URL plus two injected collaborators: a
//! `Transport` that performs the round-trip and an `Observer` that receives
//! the log line. A call is linear: build the request, send it, classify the
//! response, report. The executor keeps no state between calls.

use log::Level;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::observer::{LogObserver, Observer};
use crate::transport::{Transport, UreqTransport};
use crate::types::{status_message, to_body, Operation, Outcome};

/// Base URL of the public placeholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Executes `Operation`s against a base URL.
#[derive(Debug, Clone)]
pub struct RequestExecutor<T, O> {
    base_url: String,
    transport: T,
    observer: O,
}

impl RequestExecutor<UreqTransport, LogObserver> {
    /// Executor for the public API, logging through the `log` facade.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_BASE_URL, UreqTransport::new(), LogObserver)
    }
}

impl<T: Transport, O: Observer> RequestExecutor<T, O> {
    pub fn new(base_url: &str, transport: T, observer: O) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            observer,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Build the `HttpRequest` for `operation` without sending it.
    pub fn build_request(&self, operation: &Operation) -> Result<HttpRequest, ApiError> {
        let url = format!("{}{}", self.base_url, operation.path());
        let (headers, body) = match operation.body() {
            Some(body) => {
                let text = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
                (
                    vec![("content-type".to_string(), "application/json".to_string())],
                    Some(text),
                )
            }
            None => (Vec::new(), None),
        };
        Ok(HttpRequest {
            method: operation.method(),
            url,
            headers,
            body,
        })
    }

    /// Perform `operation`, log one line describing the result and return it.
    pub fn execute(&self, operation: &Operation) -> Outcome {
        let outcome = match self.round_trip(operation) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::TransportError(err.to_string()),
        };
        self.report(operation, &outcome);
        outcome
    }

    pub fn get_data(&self, segment: &str) -> Value {
        self.run(Operation::get(segment))
    }

    pub fn post_data<B: Serialize>(&self, segment: &str, body: &B) -> Value {
        self.run_with_body(body, |body| Operation::Post { segment: segment.to_string(), body })
    }

    pub fn put_data<B: Serialize>(&self, id: u64, body: &B) -> Value {
        self.run_with_body(body, |body| Operation::Put { id, body })
    }

    pub fn patch_data<B: Serialize>(&self, id: u64, body: &B) -> Value {
        self.run_with_body(body, |body| Operation::Patch { id, body })
    }

    /// Returns `true` on success, else the status number or error message.
    pub fn delete_data(&self, id: u64) -> Value {
        self.run(Operation::delete(id))
    }

    fn run(&self, operation: Operation) -> Value {
        self.execute(&operation).into_value(&operation)
    }

    // A body that cannot become JSON never reaches the transport but is
    // reported like any other failed request. `build` is called with `Null`
    // on that path only to route the report.
    fn run_with_body<B: Serialize>(&self, body: &B, build: impl FnOnce(Value) -> Operation) -> Value {
        match to_body(body) {
            Ok(body) => self.run(build(body)),
            Err(err) => {
                let operation = build(Value::Null);
                let outcome = Outcome::TransportError(err.to_string());
                self.report(&operation, &outcome);
                outcome.into_value(&operation)
            }
        }
    }

    fn round_trip(&self, operation: &Operation) -> Result<Outcome, ApiError> {
        let request = self.build_request(operation)?;
        let response = self.transport.send(&request)?;
        classify(operation, &response)
    }

    fn report(&self, operation: &Operation, outcome: &Outcome) {
        let (level, line) = match outcome {
            Outcome::Success(value) => (Level::Info, success_line(operation, value)),
            Outcome::HttpError(status) => (Level::Error, status_line(operation, *status)),
            Outcome::TransportError(message) => {
                (Level::Error, transport_failure_line(operation.method(), message))
            }
        };
        self.observer.record(level, &line);
    }
}

/// Map a received response to an `Outcome`.
///
/// DELETE never looks at the body: any 2xx counts as deleted.
fn classify(operation: &Operation, response: &HttpResponse) -> Result<Outcome, ApiError> {
    if !response.is_success() {
        return Ok(Outcome::HttpError(response.status));
    }
    if let Operation::Delete { .. } = operation {
        return Ok(Outcome::Success(Value::Bool(true)));
    }
    let value = serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(Outcome::Success(value))
}

fn success_line(operation: &Operation, value: &Value) -> String {
    match operation {
        Operation::Get { .. } => format!("Отримані дані: {value}"),
        Operation::Post { .. } => format!("Успішна відповідь: {value}"),
        Operation::Put { .. } => format!("Успішно оновлено: {value}"),
        Operation::Patch { .. } => format!("Успішно оновлено (частково): {value}"),
        Operation::Delete { id } => format!("Post with id {id} has been successfully deleted."),
    }
}

fn status_line(operation: &Operation, status: u16) -> String {
    match operation {
        Operation::Get { .. } => format!("HTTP помилка зі статусом: {status}"),
        Operation::Post { .. } | Operation::Put { .. } | Operation::Patch { .. } => status_message(status),
        Operation::Delete { id } => format!("Failed to delete post with id {id}. Status: {status}"),
    }
}

fn transport_failure_line(method: HttpMethod, message: &str) -> String {
    match method {
        HttpMethod::Get => format!("Помилка при запиті: {message}"),
        HttpMethod::Post => format!("Помилка під час запиту: {message}"),
        HttpMethod::Put => format!("Помилка під час PUT-запиту: {message}"),
        HttpMethod::Patch => format!("Помилка під час PATCH-запиту: {message}"),
        HttpMethod::Delete => format!("Error during deletion: {message}"),
    }
}
