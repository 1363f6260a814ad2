//! Synchronous client core for the Matomo reporting API.
//!
//! # Overview
//! A `Query` collects request parameters, forces `format=json` and
//! `module=API`, and hands them to a `RequestDispatcher`, which performs a
//! single exchange through an injected `HttpTransport`. The response comes
//! back wrapped in a `QueryResult` that decodes the JSON body lazily and
//! tells success from the server's masked (HTTP 200) application errors.
//!
//! # Design
//! - The transport is a trait object shared behind `Arc`, so tests plug in
//!   stubs and hosts choose their HTTP client. `UreqTransport` is provided
//!   behind the default `ureq` feature.
//! - Requests and responses are plain owned data (`HttpRequest`,
//!   `HttpResponse`).
//! - Contract violations are `Err(QueryError)`; application errors reported
//!   by the server are not, and are read through `QueryResult::has_error`.
//!
//! ```no_run
//! use reporting_core::QueryFactory;
//!
//! # fn main() -> reporting_core::Result<()> {
//! let mut factory = QueryFactory::create("https://analytics.example.com/");
//! factory.set("idSite", 1u32).set("period", "day").set("date", "today");
//!
//! let result = factory.query("VisitsSummary.get")?.execute()?;
//! if result.has_error() {
//!     eprintln!("reporting error: {:?}", result.error_message());
//! } else {
//!     println!("visits: {}", result.get("nb_visits")?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod factory;
pub mod http;
pub mod params;
pub mod query;
pub mod result;
#[cfg(feature = "ureq")]
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::ReportingConfig;
pub use dispatcher::RequestDispatcher;
pub use error::{QueryError, Result, TransportError};
pub use factory::QueryFactory;
pub use http::{
    DefaultRequestFactory, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestFactory,
};
pub use params::{ParamValue, Parameters};
pub use query::Query;
pub use result::QueryResult;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
