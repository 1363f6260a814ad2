//! Produces queries pre-seeded with default parameters.

use std::sync::Arc;

use crate::dispatcher::RequestDispatcher;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::params::{ParamValue, Parameters};
use crate::query::Query;

/// Builds `Query` values for one reporting API endpoint.
///
/// Defaults registered with [`QueryFactory::set`] (site id, period, auth
/// token, ...) are copied into every query it creates.
#[derive(Debug, Clone)]
pub struct QueryFactory {
    url: String,
    dispatcher: RequestDispatcher,
    default_parameters: Parameters,
}

impl QueryFactory {
    pub fn new(url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_dispatcher(url, RequestDispatcher::new(transport))
    }

    pub fn with_dispatcher(url: impl Into<String>, dispatcher: RequestDispatcher) -> Self {
        Self {
            url: url.into(),
            dispatcher,
            default_parameters: Parameters::new(),
        }
    }

    /// A factory that talks to `url` over a blocking `ureq` agent.
    #[cfg(feature = "ureq")]
    pub fn create(url: impl Into<String>) -> Self {
        Self::new(url, Arc::new(crate::transport::UreqTransport::new()))
    }

    /// Change the endpoint. Validation happens when a query is created.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.default_parameters.insert(name.into(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.default_parameters.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.default_parameters.remove(name);
        self
    }

    pub fn default_parameters(&self) -> &Parameters {
        &self.default_parameters
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    /// A query for the reporting method `name`, formatted
    /// `"ModuleName.methodName"`, seeded with the defaults.
    ///
    /// Fails with `QueryError::InvalidArgument` if the factory URL is
    /// malformed.
    pub fn query(&self, name: &str) -> Result<Query> {
        let mut query = Query::new(&self.url, self.dispatcher.clone())?;
        query
            .set_parameters(self.default_parameters.clone())
            .set_parameter("method", name);
        Ok(query)
    }
}
