//! A single reporting API call: parameters in, `QueryResult` out.

use tracing::debug;

use crate::dispatcher::RequestDispatcher;
use crate::error::{QueryError, Result};
use crate::http::HttpMethod;
use crate::params::{ParamValue, Parameters};
use crate::result::QueryResult;

/// Accumulates request parameters and dispatches them to the reporting API.
///
/// `format=json` and `module=API` are forced onto the parameter set right
/// before each dispatch, overwriting whatever the caller stored under
/// those names. Until then the caller's values can be read back as set.
#[derive(Debug, Clone)]
pub struct Query {
    dispatcher: RequestDispatcher,
    parameters: Parameters,
}

impl Query {
    /// Create a query targeting `url`. Fails with
    /// `QueryError::InvalidArgument` if the URL is malformed.
    pub fn new(url: &str, mut dispatcher: RequestDispatcher) -> Result<Self> {
        dispatcher.set_url(url)?;
        Ok(Self {
            dispatcher,
            parameters: Parameters::new(),
        })
    }

    pub fn set_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> &mut Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Apply `set_parameter` for every entry, in iteration order.
    pub fn set_parameters<I, K, V>(&mut self, parameters: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (name, value) in parameters {
            self.set_parameter(name, value);
        }
        self
    }

    /// The value stored under `name`, or `QueryError::InvalidArgument` if it
    /// was never set.
    pub fn parameter(&self, name: &str) -> Result<&ParamValue> {
        self.parameters
            .get(name)
            .ok_or_else(|| QueryError::invalid_argument(format!("Parameter '{name}' is not set.")))
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    /// Dispatch with the dispatcher's current method (GET unless changed).
    pub fn execute(&mut self) -> Result<QueryResult> {
        self.finalize_parameters();
        debug!(
            method = ?self.parameters.get("method").and_then(ParamValue::as_str),
            "executing reporting query"
        );
        let response = self
            .dispatcher
            .set_request_parameters(self.parameters.clone())
            .send_request()?;
        Ok(QueryResult::new(response))
    }

    /// Select the HTTP method by name, then dispatch. Only `"GET"` and
    /// `"POST"` are accepted; anything else fails before any network
    /// activity.
    pub fn execute_with(&mut self, method: &str) -> Result<QueryResult> {
        self.dispatcher.set_method(method)?;
        self.execute()
    }

    /// Dispatch with parameters in the query string.
    pub fn get(&mut self) -> Result<QueryResult> {
        self.execute_with(HttpMethod::Get.as_str())
    }

    /// Dispatch with parameters in a form-encoded body.
    pub fn post(&mut self) -> Result<QueryResult> {
        self.execute_with(HttpMethod::Post.as_str())
    }

    fn finalize_parameters(&mut self) {
        self.set_parameter("format", "json");
        self.set_parameter("module", "API");
    }
}
