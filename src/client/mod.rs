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

//! Traits and implementations for sending resource requests to the Neutron API.

mod reqwest;
mod resource;

use serde_json::Value;

use crate::attributes::Query;
use crate::error::ClientError;

pub use self::reqwest::{ReqwestNetworkClient, ReqwestNetworkClientBuilder};
pub use self::resource::ResourceClient;

/// The HTTP primitives the resource clients are built on.
///
/// Implementations are responsible for building the full request URL, injecting
/// authentication, encoding and decoding JSON, and mapping non-success responses to a
/// categorized `ClientError`. The `uri` arguments are relative to the API root, for example
/// `/l2-gateways/abc-123`.
pub trait NetworkClient: Send + Sync {
    /// Sends a POST with the given body and returns the decoded response.
    ///
    /// # Arguments
    ///
    /// * `uri` - The collection URI
    /// * `body` - The enveloped resource attributes
    fn create_resource(&self, uri: &str, body: &Value) -> Result<Value, ClientError>;

    /// Sends a PUT with the given body and returns the decoded response.
    ///
    /// # Arguments
    ///
    /// * `uri` - The instance URI
    /// * `body` - The enveloped resource attributes
    fn update_resource(&self, uri: &str, body: &Value) -> Result<Value, ClientError>;

    /// Sends a GET for a single resource and returns the decoded response.
    ///
    /// # Arguments
    ///
    /// * `uri` - The instance URI
    /// * `query` - Field selection parameters
    fn show_resource(&self, uri: &str, query: &Query) -> Result<Value, ClientError>;

    /// Sends a DELETE for a single resource.
    ///
    /// # Arguments
    ///
    /// * `uri` - The instance URI
    fn delete_resource(&self, uri: &str) -> Result<(), ClientError>;

    /// Sends a GET for a collection and returns the decoded response.
    ///
    /// # Arguments
    ///
    /// * `uri` - The collection URI
    /// * `query` - Filter parameters
    fn list_resources(&self, uri: &str, query: &Query) -> Result<Value, ClientError>;
}

/// Receives a record of each request a resource client is about to send.
pub trait RequestLogger: Send + Sync {
    fn log_request(&self, method: &str, uri: &str, body: Option<&Value>);
}

/// A `RequestLogger` that writes through the `log` facade at info level.
#[derive(Debug, Clone)]
pub struct LogRequestLogger {
    target: String,
}

impl LogRequestLogger {
    pub fn new<T: Into<String>>(target: T) -> Self {
        LogRequestLogger {
            target: target.into(),
        }
    }
}

impl Default for LogRequestLogger {
    fn default() -> Self {
        LogRequestLogger::new(module_path!())
    }
}

impl RequestLogger for LogRequestLogger {
    fn log_request(&self, method: &str, uri: &str, body: Option<&Value>) {
        match body {
            Some(body) => info!(
                target: self.target.as_str(),
                "{} URI: {}, posting data: {}",
                method,
                uri,
                body
            ),
            None => info!(target: self.target.as_str(), "{} URI: {}", method, uri),
        }
    }
}
