// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A Reqwest-based implementation of NetworkClient

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;

use crate::attributes::Query;
use crate::error::ClientError;

use super::NetworkClient;

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const DEFAULT_API_PREFIX: &str = "v2.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
struct ServerError {
    #[serde(rename = "NeutronError")]
    neutron_error: NeutronError,
}

#[derive(Deserialize)]
struct NeutronError {
    message: String,
}

#[derive(Default)]
pub struct ReqwestNetworkClientBuilder {
    url: Option<String>,
    api_prefix: Option<String>,
    auth_token: Option<String>,
    timeout: Option<Duration>,
}

impl ReqwestNetworkClientBuilder {
    pub fn new() -> Self {
        ReqwestNetworkClientBuilder::default()
    }

    /// The Neutron endpoint, for example `http://controller:9696`.
    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// The API version prefix placed between the endpoint and resource URIs. Defaults to
    /// `v2.0`; an empty prefix sends resource URIs directly under the endpoint.
    pub fn with_api_prefix(mut self, api_prefix: String) -> Self {
        self.api_prefix = Some(api_prefix);
        self
    }

    pub fn with_auth_token(mut self, auth_token: String) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ReqwestNetworkClient, ClientError> {
        let url = self.url.ok_or_else(|| {
            ClientError::InvalidArgument("Failed to build client, url not provided".to_string())
        })?;
        let api_prefix = self
            .api_prefix
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());

        let endpoint = url.trim_end_matches('/');
        let api_prefix = api_prefix.trim_matches('/');
        let base_url = if api_prefix.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}/{}", endpoint, api_prefix)
        };

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|err| {
                ClientError::InvalidArgument(format!("Failed to build client: {}", err))
            })?;

        Ok(ReqwestNetworkClient {
            client,
            base_url,
            auth_token: self.auth_token,
        })
    }
}

/// Sends resource requests to a Neutron endpoint over HTTP.
pub struct ReqwestNetworkClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ReqwestNetworkClient {
    /// The URL that resource URIs are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, uri: &str) -> String {
        format!("{}{}", self.base_url, uri)
    }

    fn send(&self, request: RequestBuilder, action: &str) -> Result<Response, ClientError> {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .map_err(|err| ClientError::Transport(format!("{} request failed: {}", action, err)))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            debug!(
                "{} request failed with status code '{}': {}",
                action, status, body
            );
            let message = match serde_json::from_str::<ServerError>(&body) {
                Ok(server_error) => server_error.neutron_error.message,
                Err(_) if body.is_empty() => status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string(),
                Err(_) => body,
            };
            Err(ClientError::from_status(status.as_u16(), message))
        }
    }

    fn decode(response: Response, action: &str) -> Result<Value, ClientError> {
        response.json::<Value>().map_err(|err| {
            ClientError::InvalidResponse(format!(
                "{} request was successful, but received an invalid response: {}",
                action, err
            ))
        })
    }
}

impl NetworkClient for ReqwestNetworkClient {
    fn create_resource(&self, uri: &str, body: &Value) -> Result<Value, ClientError> {
        let response = self.send(self.client.post(&self.url(uri)).json(body), "Create")?;
        Self::decode(response, "Create")
    }

    fn update_resource(&self, uri: &str, body: &Value) -> Result<Value, ClientError> {
        let response = self.send(self.client.put(&self.url(uri)).json(body), "Update")?;
        Self::decode(response, "Update")
    }

    fn show_resource(&self, uri: &str, query: &Query) -> Result<Value, ClientError> {
        let response = self.send(
            self.client.get(&self.url(uri)).query(query.pairs()),
            "Show",
        )?;
        Self::decode(response, "Show")
    }

    fn delete_resource(&self, uri: &str) -> Result<(), ClientError> {
        self.send(self.client.delete(&self.url(uri)), "Delete")
            .map(|_| ())
    }

    fn list_resources(&self, uri: &str, query: &Query) -> Result<Value, ClientError> {
        let response = self.send(
            self.client.get(&self.url(uri)).query(query.pairs()),
            "List",
        )?;
        Self::decode(response, "List")
    }
}
