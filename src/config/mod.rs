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

//! Test harness configuration, assembled from environment variables, an optional toml file and
//! built-in defaults, in that order of precedence.

mod builder;
mod default;
mod env;
mod error;
mod partial;
mod toml;

use std::env as std_env;
use std::fs;
use std::time::Duration;

use log::LevelFilter;

pub use crate::config::default::DefaultPartialConfigBuilder;
pub use crate::config::env::EnvPartialConfigBuilder;
pub use crate::config::toml::TomlPartialConfigBuilder;
pub use builder::{ConfigBuilder, PartialConfigBuilder};
pub use error::ConfigError;
pub use partial::{ConfigSource, PartialConfig};

use crate::client::{ReqwestNetworkClient, ReqwestNetworkClientBuilder};
use crate::error::ClientError;

/// Config is the final representation of configuration values. This final config object assembles
/// values from PartialConfig objects generated from various sources.
#[derive(Debug)]
pub struct Config {
    network_endpoint: (String, ConfigSource),
    api_prefix: (String, ConfigSource),
    auth_token: Option<(String, ConfigSource)>,
    request_timeout: (Duration, ConfigSource),
    build_interval: (Duration, ConfigSource),
    build_timeout: (Duration, ConfigSource),
    tenant_id: Option<(String, ConfigSource)>,
    log_level: (LevelFilter, ConfigSource),
    l2gw_device_name: Option<(String, ConfigSource)>,
    l2gw_interface_name: Option<(String, ConfigSource)>,
}

impl Config {
    pub fn network_endpoint(&self) -> &str {
        &self.network_endpoint.0
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix.0
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout.0
    }

    pub fn build_interval(&self) -> Duration {
        self.build_interval.0
    }

    pub fn build_timeout(&self) -> Duration {
        self.build_timeout.0
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.0
    }

    pub fn l2gw_device_name(&self) -> Option<&str> {
        self.l2gw_device_name.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn l2gw_interface_name(&self) -> Option<&str> {
        self.l2gw_interface_name
            .as_ref()
            .map(|(name, _)| name.as_str())
    }

    pub fn network_endpoint_source(&self) -> &ConfigSource {
        &self.network_endpoint.1
    }

    fn api_prefix_source(&self) -> &ConfigSource {
        &self.api_prefix.1
    }

    fn request_timeout_source(&self) -> &ConfigSource {
        &self.request_timeout.1
    }

    fn build_interval_source(&self) -> &ConfigSource {
        &self.build_interval.1
    }

    fn build_timeout_source(&self) -> &ConfigSource {
        &self.build_timeout.1
    }

    fn log_level_source(&self) -> &ConfigSource {
        &self.log_level.1
    }

    /// Builds the HTTP network client described by this config.
    pub fn network_client(&self) -> Result<ReqwestNetworkClient, ClientError> {
        let mut builder = ReqwestNetworkClientBuilder::new()
            .with_url(self.network_endpoint().to_string())
            .with_api_prefix(self.api_prefix().to_string())
            .with_timeout(self.request_timeout());
        if let Some(token) = self.auth_token() {
            builder = builder.with_auth_token(token.to_string());
        }
        builder.build()
    }

    /// Displays the configuration value along with where the value was sourced from. The auth
    /// token is never logged.
    pub fn log_as_debug(&self) {
        debug!(
            "Config: network_endpoint: {} (source: {:?})",
            self.network_endpoint(),
            self.network_endpoint_source()
        );
        debug!(
            "Config: api_prefix: {} (source: {:?})",
            self.api_prefix(),
            self.api_prefix_source()
        );
        if let Some((_, source)) = &self.auth_token {
            debug!("Config: auth_token: <set> (source: {:?})", source);
        }
        debug!(
            "Config: request_timeout: {:?} (source: {:?})",
            self.request_timeout(),
            self.request_timeout_source()
        );
        debug!(
            "Config: build_interval: {:?} (source: {:?})",
            self.build_interval(),
            self.build_interval_source()
        );
        debug!(
            "Config: build_timeout: {:?} (source: {:?})",
            self.build_timeout(),
            self.build_timeout_source()
        );
        if let Some((tenant_id, source)) = &self.tenant_id {
            debug!("Config: tenant_id: {} (source: {:?})", tenant_id, source);
        }
        debug!(
            "Config: log_level: {} (source: {:?})",
            self.log_level(),
            self.log_level_source()
        );
        if let Some((name, source)) = &self.l2gw_device_name {
            debug!("Config: l2gw_device_name: {} (source: {:?})", name, source);
        }
        if let Some((name, source)) = &self.l2gw_interface_name {
            debug!(
                "Config: l2gw_interface_name: {} (source: {:?})",
                name, source
            );
        }
    }
}

/// Loads the harness configuration.
///
/// Values set in `NSX_TEMPEST_*` environment variables take precedence over the toml file named
/// by `NSX_TEMPEST_CONFIG`, which in turn takes precedence over the defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut builder =
        ConfigBuilder::new().with_partial_config(EnvPartialConfigBuilder::new().build()?);

    if let Ok(path) = std_env::var(env::CONFIG_ENV) {
        let contents = fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
            file: path.clone(),
            err,
        })?;
        builder = builder.with_partial_config(TomlPartialConfigBuilder::new(contents, path)?.build()?);
    }

    let config = builder
        .with_partial_config(DefaultPartialConfigBuilder::new().build()?)
        .build()?;
    config.log_as_debug();
    Ok(config)
}
