//! GraphQL Transport
//!
//! One POST endpoint, bearer-token authenticated. Operations live in
//! submodules by domain.

mod todos;

pub use todos::*;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("graphql error: {0}")]
    Graphql(String),
    #[error("bad response shape: {0}")]
    Decode(String),
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// A non-empty `errors` array is a failure even under HTTP 200.
fn decode<T>(response: GraphqlResponse<T>) -> Result<T, ApiError> {
    if !response.errors.is_empty() {
        let joined = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::Graphql(joined));
    }
    response
        .data
        .ok_or_else(|| ApiError::Decode("response carried no data".into()))
}

pub(crate) async fn post<T: DeserializeOwned>(query: &str, variables: Value) -> Result<T, ApiError> {
    let envelope = GraphqlRequest { query, variables };
    let response = Request::post(config::FAUNA_DB_URI)
        .header("Authorization", &format!("Bearer {}", config::FAUNA_DB_SECRET))
        .json(&envelope)
        .map_err(|e| ApiError::Http(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Http(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body: GraphqlResponse<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode(body)
}
