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

use std::time::Duration;

use log::LevelFilter;

/// ConfigSource displays the source of configuration values, used to identify which of the various
/// config modules were used to create a particular PartialConfig object.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Toml { file: String },
    Default,
    Environment,
}

/// PartialConfig is an intermediate representation of configuration values, used when combining
/// several sources. As such, all values of the PartialConfig are options as it is not necessary
/// to provide all values from a single source.
#[derive(Debug)]
pub struct PartialConfig {
    source: ConfigSource,
    network_endpoint: Option<String>,
    api_prefix: Option<String>,
    auth_token: Option<String>,
    request_timeout: Option<Duration>,
    build_interval: Option<Duration>,
    build_timeout: Option<Duration>,
    tenant_id: Option<String>,
    log_level: Option<LevelFilter>,
    l2gw_device_name: Option<String>,
    l2gw_interface_name: Option<String>,
}

impl PartialConfig {
    pub fn new(source: ConfigSource) -> Self {
        PartialConfig {
            source,
            network_endpoint: None,
            api_prefix: None,
            auth_token: None,
            request_timeout: None,
            build_interval: None,
            build_timeout: None,
            tenant_id: None,
            log_level: None,
            l2gw_device_name: None,
            l2gw_interface_name: None,
        }
    }

    pub fn source(&self) -> ConfigSource {
        self.source.clone()
    }

    pub fn network_endpoint(&self) -> Option<String> {
        self.network_endpoint.clone()
    }

    pub fn api_prefix(&self) -> Option<String> {
        self.api_prefix.clone()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.clone()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn build_interval(&self) -> Option<Duration> {
        self.build_interval
    }

    pub fn build_timeout(&self) -> Option<Duration> {
        self.build_timeout
    }

    pub fn tenant_id(&self) -> Option<String> {
        self.tenant_id.clone()
    }

    pub fn log_level(&self) -> Option<LevelFilter> {
        self.log_level
    }

    pub fn l2gw_device_name(&self) -> Option<String> {
        self.l2gw_device_name.clone()
    }

    pub fn l2gw_interface_name(&self) -> Option<String> {
        self.l2gw_interface_name.clone()
    }

    /// Adds a `network_endpoint` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `network_endpoint` - The Neutron endpoint, without the API version prefix.
    ///
    pub fn with_network_endpoint(mut self, network_endpoint: Option<String>) -> Self {
        self.network_endpoint = network_endpoint;
        self
    }

    /// Adds an `api_prefix` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `api_prefix` - The API version placed between the endpoint and resource URIs.
    ///
    pub fn with_api_prefix(mut self, api_prefix: Option<String>) -> Self {
        self.api_prefix = api_prefix;
        self
    }

    /// Adds an `auth_token` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `auth_token` - A pre-issued Keystone token sent as `X-Auth-Token`.
    ///
    pub fn with_auth_token(mut self, auth_token: Option<String>) -> Self {
        self.auth_token = auth_token;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Adds a `build_interval` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `build_interval` - Time between status polls while waiting on a resource.
    ///
    pub fn with_build_interval(mut self, build_interval: Option<Duration>) -> Self {
        self.build_interval = build_interval;
        self
    }

    /// Adds a `build_timeout` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `build_timeout` - Time after which waiting on a resource fails.
    ///
    pub fn with_build_timeout(mut self, build_timeout: Option<Duration>) -> Self {
        self.build_timeout = build_timeout;
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: Option<String>) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    pub fn with_log_level(mut self, log_level: Option<LevelFilter>) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_l2gw_device_name(mut self, l2gw_device_name: Option<String>) -> Self {
        self.l2gw_device_name = l2gw_device_name;
        self
    }

    pub fn with_l2gw_interface_name(mut self, l2gw_interface_name: Option<String>) -> Self {
        self.l2gw_interface_name = l2gw_interface_name;
        self
    }
}
