//! Interpretation of reporting API responses.
//!
//! # Design
//! The reporting server answers many application errors with HTTP 200 and
//! a body like `{"result":"error","message":"..."}`, so a 200 status alone
//! says nothing about success. `QueryResult::has_error` combines the status
//! with the shape of the decoded body:
//!
//! - status other than 200: error, whatever the body;
//! - body that is not a JSON object (array, scalar, null, undecodable):
//!   error;
//! - object whose `result` field is the string `"error"`: error;
//! - any other object: success.
//!
//! The body is decoded on first access and cached for the lifetime of the
//! result.

use std::cell::OnceCell;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{QueryError, Result};
use crate::http::HttpResponse;

const SUCCESS_STATUS: u16 = 200;

/// The outcome of one reporting API dispatch.
#[derive(Debug)]
pub struct QueryResult {
    response: HttpResponse,
    decoded: OnceCell<Value>,
}

impl QueryResult {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            decoded: OnceCell::new(),
        }
    }

    /// The untouched HTTP response.
    pub fn raw_response(&self) -> &HttpResponse {
        &self.response
    }

    pub fn into_raw_response(self) -> HttpResponse {
        self.response
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// The decoded body. A body that is not valid JSON decodes to `Null`.
    pub fn response(&self) -> &Value {
        self.decoded.get_or_init(|| {
            serde_json::from_str(&self.response.body).unwrap_or_else(|err| {
                debug!(error = %err, "reporting response body is not valid JSON");
                Value::Null
            })
        })
    }

    pub fn is_object(&self) -> bool {
        self.response().is_object()
    }

    pub fn is_array(&self) -> bool {
        self.response().is_array()
    }

    /// Whether the call failed, at the HTTP level or as a masked
    /// application error. Never fails itself.
    pub fn has_error(&self) -> bool {
        if self.response.status != SUCCESS_STATUS {
            return true;
        }
        match self.response() {
            Value::Object(fields) => fields.get("result").and_then(Value::as_str) == Some("error"),
            _ => true,
        }
    }

    /// The `message` field of an errored object response, if there is one.
    pub fn error_message(&self) -> Option<&Value> {
        if !self.has_error() {
            return None;
        }
        self.response().as_object()?.get("message")
    }

    /// The named field of an object response.
    ///
    /// Fails with `QueryError::InvalidArgument` if the body is not an
    /// object or the field is absent.
    pub fn get(&self, name: &str) -> Result<&Value> {
        let fields = self.response().as_object().ok_or_else(|| {
            QueryError::invalid_argument(format!(
                "Cannot retrieve parameter '{name}', the response is not an object."
            ))
        })?;
        fields.get(name).ok_or_else(|| {
            QueryError::invalid_argument(format!("Parameter '{name}' does not exist."))
        })
    }

    /// Whether an object response has the named field.
    ///
    /// Fails with `QueryError::InvalidArgument` if the body is not an object.
    pub fn parameter_exists(&self, name: &str) -> Result<bool> {
        let fields = self.response().as_object().ok_or_else(|| {
            QueryError::invalid_argument(format!(
                "Cannot check if '{name}' exists, the response is not an object."
            ))
        })?;
        Ok(fields.contains_key(name))
    }

    /// Number of elements in an array response.
    ///
    /// Fails with `QueryError::Domain` if the body is not an array.
    pub fn result_count(&self) -> Result<usize> {
        self.response().as_array().map(Vec::len).ok_or_else(|| {
            QueryError::Domain(
                "Cannot get result count, the response is not an array.".to_string(),
            )
        })
    }

    /// Deserialize the decoded body into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.response().clone()).map_err(|err| {
            QueryError::invalid_argument(format!("Cannot deserialize the response: {err}"))
        })
    }
}
