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

//! `PartialConfig` builder using values from a toml config file.

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::config::PartialConfigBuilder;
use crate::config::{ConfigError, ConfigSource, PartialConfig};

/// `TOML_VERSION` represents the version of the toml config file.
/// The version determines the most current valid toml config entries.
const TOML_VERSION: &str = "1";

/// Holds the `[l2gw]` table, which names the bridge device used by the L2 gateway tests.
#[derive(Deserialize, Default, Debug)]
struct TomlL2GatewayConfig {
    device_name: Option<String>,
    interface_name: Option<String>,
}

/// Holds configuration values defined in a toml file. Durations are given in seconds.
#[derive(Deserialize, Default, Debug)]
struct TomlConfig {
    version: Option<String>,
    network_endpoint: Option<String>,
    api_prefix: Option<String>,
    auth_token: Option<String>,
    request_timeout: Option<u64>,
    build_interval: Option<u64>,
    build_timeout: Option<u64>,
    tenant_id: Option<String>,
    log_level: Option<String>,
    l2gw: Option<TomlL2GatewayConfig>,
}

pub struct TomlPartialConfigBuilder {
    source: ConfigSource,
    toml_config: TomlConfig,
}

/// Uses a deserialized `TomlConfig` object and the path of the config file to
/// construct a `TomlPartialConfigBuilder`.
impl TomlPartialConfigBuilder {
    pub fn new(toml: String, toml_path: String) -> Result<TomlPartialConfigBuilder, ConfigError> {
        Ok(TomlPartialConfigBuilder {
            source: ConfigSource::Toml { file: toml_path },
            toml_config: toml::from_str::<TomlConfig>(&toml).map_err(ConfigError::from)?,
        })
    }
}

impl PartialConfigBuilder for TomlPartialConfigBuilder {
    fn build(self) -> Result<PartialConfig, ConfigError> {
        let file_path = match &self.source {
            ConfigSource::Toml { file } => file.clone(),
            _ => String::from("<unknown>"),
        };

        match self.toml_config.version {
            Some(version) if version != TOML_VERSION => {
                return Err(ConfigError::InvalidVersion(format!(
                    "Config file {} has incompatible version {}, supported version is {}",
                    file_path, version, TOML_VERSION,
                )))
            }
            Some(_) => (),
            None => {
                return Err(ConfigError::MissingValue(format!(
                    "{:?} version",
                    &self.source
                )))
            }
        }

        let log_level = match self.toml_config.log_level {
            Some(level) => Some(LevelFilter::from_str(&level).map_err(|_| {
                ConfigError::InvalidArgument(format!(
                    "Config file {} has invalid log_level: {}",
                    file_path, level
                ))
            })?),
            None => None,
        };
        let l2gw = self.toml_config.l2gw.unwrap_or_default();

        Ok(PartialConfig::new(self.source)
            .with_network_endpoint(self.toml_config.network_endpoint)
            .with_api_prefix(self.toml_config.api_prefix)
            .with_auth_token(self.toml_config.auth_token)
            .with_request_timeout(self.toml_config.request_timeout.map(Duration::from_secs))
            .with_build_interval(self.toml_config.build_interval.map(Duration::from_secs))
            .with_build_timeout(self.toml_config.build_timeout.map(Duration::from_secs))
            .with_tenant_id(self.toml_config.tenant_id)
            .with_log_level(log_level)
            .with_l2gw_device_name(l2gw.device_name)
            .with_l2gw_interface_name(l2gw.interface_name))
    }
}
