//! GraphQL-over-HTTP client with an in-memory response cache.
//!
//! One instance per process. Every request is a `POST` of
//! `{"query", "variables", "operationName"}` to a single endpoint, carrying
//! the admin secret as a default header.
//!
//! The cache is keyed by query document + serialized variables and stores
//! the raw `data` payload. It is never invalidated by key: callers re-fetch
//! with [`FetchPolicy::NetworkOnly`] after a mutation, which overwrites the
//! entry.

use std::collections::HashMap;

use log::{debug, info, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::graphql::GraphQlError;

pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// How a query treats the response cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Answer from the cache when an entry exists, otherwise fetch and store.
    CacheFirst,
    /// Always fetch, then overwrite the cache entry.
    NetworkOnly,
}

/// A named GraphQL document.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a, V> {
    query: &'a str,
    variables: &'a V,
    operation_name: &'a str,
}

#[derive(Deserialize, Debug)]
struct ResponseBody {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize, Debug)]
struct ErrorEntry {
    message: String,
}

pub struct GraphQlClient {
    endpoint: String,
    http: reqwest::Client,
    cache: Mutex<HashMap<String, serde_json::Value>>,
}

impl GraphQlClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Arguments
    /// * `endpoint` - Full GraphQL URL, e.g. `https://example.hasura.app/v1/graphql`
    /// * `admin_secret` - Sent as `x-hasura-admin-secret` on every request when present
    pub fn new(endpoint: impl Into<String>, admin_secret: Option<&str>) -> Result<Self, GraphQlError> {
        let endpoint = endpoint.into();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match admin_secret {
            Some(secret) => {
                let mut value = HeaderValue::from_str(secret)
                    .map_err(|e| GraphQlError::Config(format!("invalid admin secret: {e}")))?;
                value.set_sensitive(true);
                headers.insert(HeaderName::from_static(ADMIN_SECRET_HEADER), value);
            }
            None => warn!("No admin secret configured; requests to {} are unauthenticated", endpoint),
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GraphQlError::Config(e.to_string()))?;

        info!("GraphQL client ready for {}", endpoint);
        Ok(Self {
            endpoint,
            http,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs a read-only operation under the given cache policy.
    pub async fn query<V, T>(
        &self,
        operation: Operation,
        variables: &V,
        policy: FetchPolicy,
    ) -> Result<T, GraphQlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let key = cache_key(operation, variables)?;

        if policy == FetchPolicy::CacheFirst {
            let cached = self.cache.lock().await.get(&key).cloned();
            if let Some(data) = cached {
                debug!("Cache hit for {}", operation.name);
                return decode(data);
            }
        }

        let data = self.execute(operation, variables).await?;
        self.cache.lock().await.insert(key, data.clone());
        decode(data)
    }

    /// Runs a write. Mutations always reach the network and are never cached.
    pub async fn mutate<V, T>(&self, operation: Operation, variables: &V) -> Result<T, GraphQlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let data = self.execute(operation, variables).await?;
        decode(data)
    }

    /// Number of cached query responses.
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }

    async fn execute<V: Serialize>(
        &self,
        operation: Operation,
        variables: &V,
    ) -> Result<serde_json::Value, GraphQlError> {
        let body = RequestBody {
            query: operation.document,
            variables,
            operation_name: operation.name,
        };

        info!("GraphQL {} -> {}", operation.name, self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| GraphQlError::Network(e.to_string()))?;

        debug!("GraphQL {} status: {}", operation.name, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GraphQL {} failed: {} - {}", operation.name, status, body);
            return Err(GraphQlError::Http { status, body });
        }

        let payload: ResponseBody = response
            .json()
            .await
            .map_err(|e| GraphQlError::Parse(e.to_string()))?;

        if !payload.errors.is_empty() {
            let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
            warn!("GraphQL {} returned errors: {:?}", operation.name, messages);
            return Err(GraphQlError::Response(messages));
        }

        payload.data.ok_or(GraphQlError::MissingData)
    }
}

fn cache_key<V: Serialize>(operation: Operation, variables: &V) -> Result<String, GraphQlError> {
    let variables =
        serde_json::to_string(variables).map_err(|e| GraphQlError::Encode(e.to_string()))?;
    Ok(format!("{}\n{}", operation.document, variables))
}

fn decode<T: DeserializeOwned>(data: serde_json::Value) -> Result<T, GraphQlError> {
    serde_json::from_value(data).map_err(|e| GraphQlError::Parse(e.to_string()))
}
