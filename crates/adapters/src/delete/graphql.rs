// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delete via the web client's GraphQL `DeleteTweet` mutation.
//!
//! Authentication piggybacks on a browser session: the csrf token, bearer
//! token and cookie copied from dev tools are sent as default headers on
//! every request.

use super::{DeleteAdapter, DeleteError, DeleteOutcome};
use async_trait::async_trait;
use deltweet_core::{Credentials, TweetId};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// Persisted query id of the `DeleteTweet` operation
pub const DELETE_QUERY_ID: &str = "VaenaVgh5q5ih7kvyVjgtg";

/// Endpoint settings
#[derive(Debug, Clone)]
pub struct GraphqlConfig {
    /// Scheme and host, without trailing slash
    pub base_url: String,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            base_url: crate::env::api_base(),
        }
    }
}

impl GraphqlConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn delete_url(&self) -> String {
        format!(
            "{}/i/api/graphql/{}/DeleteTweet",
            self.base_url, DELETE_QUERY_ID
        )
    }
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    variables: DeleteVariables<'a>,
    #[serde(rename = "queryId")]
    query_id: &'static str,
}

#[derive(Serialize)]
struct DeleteVariables<'a> {
    tweet_id: &'a str,
    dark_request: bool,
}

impl<'a> DeleteRequest<'a> {
    fn new(id: &'a TweetId) -> Self {
        Self {
            variables: DeleteVariables {
                tweet_id: id.as_str(),
                dark_request: false,
            },
            query_id: DELETE_QUERY_ID,
        }
    }
}

/// Production adapter backed by a `reqwest` client
#[derive(Clone)]
pub struct GraphqlDeleteAdapter {
    client: Client,
    url: String,
}

impl GraphqlDeleteAdapter {
    pub fn new(credentials: &Credentials, config: GraphqlConfig) -> Result<Self, DeleteError> {
        let client = Client::builder()
            .default_headers(header_map(credentials)?)
            .build()
            .map_err(|e| DeleteError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: config.delete_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn header_map(credentials: &Credentials) -> Result<HeaderMap, DeleteError> {
    let mut headers = HeaderMap::new();
    for (name, value) in credentials.headers() {
        let invalid = |reason: String| DeleteError::InvalidHeader {
            name: name.to_string(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let mut header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        header_value.set_sensitive(true);
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[async_trait]
impl DeleteAdapter for GraphqlDeleteAdapter {
    async fn delete(&self, id: &TweetId) -> Result<DeleteOutcome, DeleteError> {
        let response = self
            .client
            .post(&self.url)
            .json(&DeleteRequest::new(id))
            .send()
            .await
            .map_err(|e| DeleteError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(DeleteOutcome::Deleted);
        }
        // Body is diagnostic only; a failed read still reports the status
        let body = response.text().await.unwrap_or_default();
        Ok(DeleteOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[path = "graphql_tests.rs"]
mod tests;
