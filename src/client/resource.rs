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

//! The generic create/update/show/delete/list adapter shared by every resource type.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::attributes::{Attributes, Query};
use crate::error::ClientError;
use crate::resource::ResourceSpec;

use super::{LogRequestLogger, NetworkClient, RequestLogger};

/// Maps resource operations onto `NetworkClient` calls for one `ResourceSpec`.
///
/// The client holds no state between calls. Request bodies are wrapped in the spec's singular
/// key; responses are unwrapped from the singular key (single resources) or the plural key
/// (lists).
#[derive(Clone)]
pub struct ResourceClient {
    client: Arc<dyn NetworkClient>,
    spec: ResourceSpec,
    parent: Option<String>,
    logger: Arc<dyn RequestLogger>,
}

impl ResourceClient {
    pub fn new(client: Arc<dyn NetworkClient>, spec: ResourceSpec) -> Self {
        ResourceClient {
            client,
            spec,
            parent: None,
            logger: Arc::new(LogRequestLogger::default()),
        }
    }

    /// Creates a client for a resource nested under `parent_uri`, such as the members of a
    /// pool.
    pub fn nested(client: Arc<dyn NetworkClient>, spec: ResourceSpec, parent_uri: String) -> Self {
        ResourceClient {
            parent: Some(parent_uri),
            ..ResourceClient::new(client, spec)
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    pub fn network_client(&self) -> &Arc<dyn NetworkClient> {
        &self.client
    }

    pub fn logger(&self) -> &Arc<dyn RequestLogger> {
        &self.logger
    }

    pub fn collection_uri(&self) -> String {
        self.spec.collection_uri(self.parent.as_deref())
    }

    pub fn instance_uri(&self, id: &str) -> Result<String, ClientError> {
        self.spec.instance_uri(self.parent.as_deref(), id)
    }

    /// Creates a resource and returns the attributes the server reports for it.
    pub fn create(&self, attrs: &Attributes) -> Result<Attributes, ClientError> {
        let uri = self.collection_uri();
        let body = self.envelope(attrs);
        self.logger.log_request("POST", &uri, Some(&body));
        let response = self.client.create_resource(&uri, &body)?;
        self.unwrap_single(response)
    }

    /// Updates the resource named by `id` with the given attributes.
    pub fn update(&self, id: &str, attrs: &Attributes) -> Result<Attributes, ClientError> {
        let uri = self.instance_uri(id)?;
        let body = self.envelope(attrs);
        self.logger.log_request("PUT", &uri, Some(&body));
        let response = self.client.update_resource(&uri, &body)?;
        self.unwrap_single(response)
    }

    /// Fetches the resource named by `id`, optionally restricted to the queried fields.
    pub fn show(&self, id: &str, query: &Query) -> Result<Attributes, ClientError> {
        let uri = self.instance_uri(id)?;
        self.logger.log_request("GET", &uri, None);
        let response = self.client.show_resource(&uri, query)?;
        self.unwrap_single(response)
    }

    pub fn delete(&self, id: &str) -> Result<(), ClientError> {
        let uri = self.instance_uri(id)?;
        self.logger.log_request("DELETE", &uri, None);
        self.client.delete_resource(&uri)
    }

    /// Lists the resources matching the query filters, in the order the server returns them.
    pub fn list(&self, query: &Query) -> Result<Vec<Attributes>, ClientError> {
        let uri = self.collection_uri();
        self.logger.log_request("GET", &uri, None);
        let response = self.client.list_resources(&uri, query)?;
        self.unwrap_list(response)
    }

    fn envelope(&self, attrs: &Attributes) -> Value {
        let mut body = Map::new();
        body.insert(self.spec.singular_key.to_string(), attrs.clone().into_value());
        Value::Object(body)
    }

    fn unwrap_single(&self, response: Value) -> Result<Attributes, ClientError> {
        let key = self.spec.singular_key;
        match response {
            Value::Object(mut body) => body
                .remove(key)
                .and_then(Attributes::from_value)
                .ok_or_else(|| {
                    ClientError::InvalidResponse(format!(
                        "response does not contain a '{}' object",
                        key
                    ))
                }),
            _ => Err(ClientError::InvalidResponse(format!(
                "expected a JSON object wrapping '{}'",
                key
            ))),
        }
    }

    fn unwrap_list(&self, response: Value) -> Result<Vec<Attributes>, ClientError> {
        let key = self.spec.plural_key;
        let items = match response {
            Value::Object(mut body) => match body.remove(key) {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(ClientError::InvalidResponse(format!(
                        "response does not contain a '{}' list",
                        key
                    )))
                }
            },
            _ => {
                return Err(ClientError::InvalidResponse(format!(
                    "expected a JSON object wrapping '{}'",
                    key
                )))
            }
        };

        items
            .into_iter()
            .map(|item| {
                Attributes::from_value(item).ok_or_else(|| {
                    ClientError::InvalidResponse(format!("'{}' contains a non-object entry", key))
                })
            })
            .collect()
    }
}
