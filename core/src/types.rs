//! Operations and outcomes.
//!
//! # Design
//! `Operation` has one variant per verb. Only POST, PUT and PATCH carry a
//! body, so a bodyless GET or DELETE is the only thing that can be expressed.
//! Bodies are arbitrary JSON because the remote API has no fixed schema.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpMethod;

/// One call against the placeholder API.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `GET {base}{segment}`
    Get { segment: String },
    /// `POST {base}{segment}` with a JSON body.
    Post { segment: String, body: Value },
    /// `PUT {base}/posts/{id}` with a JSON body.
    Put { id: u64, body: Value },
    /// `PATCH {base}/posts/{id}` with a JSON body.
    Patch { id: u64, body: Value },
    /// `DELETE {base}/posts/{id}`
    Delete { id: u64 },
}

impl Operation {
    pub fn get(segment: impl Into<String>) -> Self {
        Operation::Get {
            segment: segment.into(),
        }
    }

    pub fn post<T: Serialize>(segment: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Ok(Operation::Post {
            segment: segment.into(),
            body: to_body(body)?,
        })
    }

    pub fn put<T: Serialize>(id: u64, body: &T) -> Result<Self, ApiError> {
        Ok(Operation::Put {
            id,
            body: to_body(body)?,
        })
    }

    pub fn patch<T: Serialize>(id: u64, body: &T) -> Result<Self, ApiError> {
        Ok(Operation::Patch {
            id,
            body: to_body(body)?,
        })
    }

    pub fn delete(id: u64) -> Self {
        Operation::Delete { id }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::Get { .. } => HttpMethod::Get,
            Operation::Post { .. } => HttpMethod::Post,
            Operation::Put { .. } => HttpMethod::Put,
            Operation::Patch { .. } => HttpMethod::Patch,
            Operation::Delete { .. } => HttpMethod::Delete,
        }
    }

    /// Path appended to the base URL.
    pub fn path(&self) -> String {
        match self {
            Operation::Get { segment } | Operation::Post { segment, .. } => segment.clone(),
            Operation::Put { id, .. } | Operation::Patch { id, .. } | Operation::Delete { id } => {
                format!("/posts/{id}")
            }
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            Operation::Post { body, .. } | Operation::Put { body, .. } | Operation::Patch { body, .. } => {
                Some(body)
            }
            Operation::Get { .. } | Operation::Delete { .. } => None,
        }
    }
}

/// Result of one request attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx response. Holds the parsed body, or `true` for DELETE.
    Success(Value),
    /// Response with a status outside 2xx.
    HttpError(u16),
    /// The request never produced a usable response.
    TransportError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The plain value the legacy per-verb functions returned.
    ///
    /// GET and DELETE surface an HTTP failure as the bare status number;
    /// POST, PUT and PATCH surface it as a formatted message.
    pub fn into_value(self, operation: &Operation) -> Value {
        match self {
            Outcome::Success(value) => value,
            Outcome::HttpError(status) => match operation.method() {
                HttpMethod::Get | HttpMethod::Delete => Value::from(status),
                HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => {
                    Value::String(status_message(status))
                }
            },
            Outcome::TransportError(message) => Value::String(message),
        }
    }
}

/// Convert a request payload into the JSON value an `Operation` carries.
pub(crate) fn to_body<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

pub(crate) fn status_message(status: u16) -> String {
    format!("Помилка: HTTP статус {status}")
}
