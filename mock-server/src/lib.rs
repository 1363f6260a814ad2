//! A stand-in for the reporting API endpoint, used by integration tests.
//!
//! Serves `/index.php` over GET (query string) and POST (form body). Like
//! the real server, application errors come back as HTTP 200 with
//! `{"result":"error","message":...}`.

use std::collections::HashMap;

use axum::{
    extract::{Form, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::debug;

pub const VERSION: &str = "5.0.0";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Site {
    pub idsite: String,
    pub name: String,
    pub main_url: String,
}

pub fn sites() -> Vec<Site> {
    vec![
        Site {
            idsite: "1".to_string(),
            name: "Example".to_string(),
            main_url: "https://example.com".to_string(),
        },
        Site {
            idsite: "2".to_string(),
            name: "Example Blog".to_string(),
            main_url: "https://blog.example.com".to_string(),
        },
    ]
}

pub type Params = HashMap<String, String>;

pub fn app() -> Router {
    Router::new().route("/index.php", get(via_query).post(via_form))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn via_query(Query(params): Query<Params>) -> Response {
    respond(&params)
}

async fn via_form(Form(params): Form<Params>) -> Response {
    respond(&params)
}

fn respond(params: &Params) -> Response {
    debug!(?params, "reporting request");

    if params.get("module").map(String::as_str) != Some("API") {
        return (StatusCode::BAD_REQUEST, "module=API is required").into_response();
    }
    if params.get("format").map(String::as_str) != Some("json") {
        return (StatusCode::BAD_REQUEST, "only format=json is supported").into_response();
    }

    let method = params.get("method").map(String::as_str).unwrap_or_default();
    match method {
        "API.getMatomoVersion" => Json(json!({ "value": VERSION })).into_response(),
        "SitesManager.getAllSites" => Json(sites()).into_response(),
        "SitesManager.getSiteFromId" => site_from_id(params),
        "Live.getLastVisitsDetails" => last_visits(params),
        "" => masked_error("Please specify a value for 'method'."),
        other => masked_error(&format!(
            "The method '{other}' does not exist or is not available in the module 'API'."
        )),
    }
}

fn site_from_id(params: &Params) -> Response {
    let Some(id) = params.get("idSite") else {
        return masked_error("Please specify a value for 'idSite'.");
    };
    match sites().into_iter().find(|site| &site.idsite == id) {
        Some(site) => Json(site).into_response(),
        None => masked_error(&format!("The site id {id} is invalid.")),
    }
}

/// `filter_limit` visit rows (default 100), so tests can ask for bodies of
/// any size.
fn last_visits(params: &Params) -> Response {
    let limit = match params.get("filter_limit").map(|raw| raw.parse::<usize>()) {
        None => 100,
        Some(Ok(limit)) => limit,
        Some(Err(_)) => return masked_error("filter_limit must be a non-negative integer."),
    };
    let visits: Vec<_> = (0..limit)
        .map(|id| {
            json!({
                "idVisit": id.to_string(),
                "visitorId": format!("{id:016x}"),
                "actions": "3",
                "referrerUrl": "https://search.example.com/?q=reporting+api+client",
            })
        })
        .collect();
    Json(visits).into_response()
}

/// HTTP 200 carrying an application error, the way the real server does.
fn masked_error(message: &str) -> Response {
    Json(json!({ "result": "error", "message": message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn site_serializes_with_reporting_field_names() {
        let json = serde_json::to_value(&sites()[0]).unwrap();
        assert_eq!(json["idsite"], "1");
        assert_eq!(json["main_url"], "https://example.com");
    }

    #[test]
    fn missing_module_is_rejected() {
        let response = respond(&params(&[("format", "json")]));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_method_is_a_masked_error() {
        let response = respond(&params(&[
            ("format", "json"),
            ("module", "API"),
            ("method", "Nope.nothing"),
        ]));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
