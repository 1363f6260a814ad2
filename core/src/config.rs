//! Endpoint configuration for building a `QueryFactory`.

use std::collections::BTreeMap;
use std::env;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{QueryError, Result};
use crate::factory::QueryFactory;
use crate::http::HttpTransport;

pub const URL_VAR: &str = "REPORTING_URL";
pub const TOKEN_AUTH_VAR: &str = "REPORTING_TOKEN_AUTH";

/// Where the reporting API lives and which parameters every query carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportingConfig {
    pub url: String,
    #[serde(default)]
    pub token_auth: Option<String>,
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

impl ReportingConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| {
            QueryError::invalid_argument(format!("Invalid reporting configuration: {err}"))
        })
    }

    /// Read `REPORTING_URL` (required) and `REPORTING_TOKEN_AUTH` (optional).
    pub fn from_env() -> Result<Self> {
        let url = env::var(URL_VAR)
            .map_err(|_| QueryError::invalid_argument(format!("{URL_VAR} is not set.")))?;
        Ok(Self {
            url,
            token_auth: env::var(TOKEN_AUTH_VAR).ok().filter(|token| !token.is_empty()),
            defaults: BTreeMap::new(),
        })
    }

    /// A factory for this endpoint with the defaults and auth token seeded.
    pub fn into_factory(self, transport: Arc<dyn HttpTransport>) -> QueryFactory {
        let mut factory = QueryFactory::new(self.url, transport);
        for (name, value) in self.defaults {
            factory.set(name, value);
        }
        if let Some(token) = self.token_auth {
            factory.set("token_auth", token);
        }
        factory
    }
}
