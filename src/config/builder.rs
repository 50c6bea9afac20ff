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

//! `ConfigBuilder` implementation to construct a finalized `Config` object.
//!
//! Takes various `PartialConfig` objects and finalizes the config values sourced from the
//! `PartialConfigs` to construct a `Config` object used by the test harness.

use crate::config::error::ConfigError;
use crate::config::{Config, PartialConfig};

pub trait PartialConfigBuilder {
    /// Takes all values set in a config object to create a `PartialConfig` object.
    ///
    fn build(self) -> Result<PartialConfig, ConfigError>;
}

/// ConfigBuilder collects `PartialConfig` objects from various sources to be used to generate a
/// `Config` object. Earlier partial configs take precedence over later ones.
#[derive(Default)]
pub struct ConfigBuilder {
    partial_configs: Vec<PartialConfig>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            partial_configs: Vec::new(),
        }
    }

    /// Adds a `PartialConfig` to the `ConfigBuilder` object.
    ///
    /// # Arguments
    ///
    /// * `partial` - A `PartialConfig` object generated from any of the config modules.
    ///
    pub fn with_partial_config(mut self, partial: PartialConfig) -> Self {
        self.partial_configs.push(partial);
        self
    }

    /// Builds a `Config` object by incorporating the values from each `PartialConfig` object.
    ///
    pub fn build(self) -> Result<Config, ConfigError> {
        // Iterates over the list of `PartialConfig` objects to find the first config with a value
        // for the specific field. If no value is found for a required field, an error is returned.
        let network_endpoint = self
            .partial_configs
            .iter()
            .find_map(|p| p.network_endpoint().map(|v| (v, p.source())))
            .ok_or_else(|| ConfigError::MissingValue("network endpoint".to_string()))?;
        let api_prefix = self
            .partial_configs
            .iter()
            .find_map(|p| p.api_prefix().map(|v| (v, p.source())))
            .ok_or_else(|| ConfigError::MissingValue("api prefix".to_string()))?;
        let request_timeout = self
            .partial_configs
            .iter()
            .find_map(|p| p.request_timeout().map(|v| (v, p.source())))
            .ok_or_else(|| ConfigError::MissingValue("request timeout".to_string()))?;
        let build_interval = self
            .partial_configs
            .iter()
            .find_map(|p| p.build_interval().map(|v| (v, p.source())))
            .ok_or_else(|| ConfigError::MissingValue("build interval".to_string()))?;
        let build_timeout = self
            .partial_configs
            .iter()
            .find_map(|p| p.build_timeout().map(|v| (v, p.source())))
            .ok_or_else(|| ConfigError::MissingValue("build timeout".to_string()))?;
        let log_level = self
            .partial_configs
            .iter()
            .find_map(|p| p.log_level().map(|v| (v, p.source())))
            .ok_or_else(|| ConfigError::MissingValue("log level".to_string()))?;

        if build_interval.0 > build_timeout.0 {
            return Err(ConfigError::InvalidArgument(format!(
                "build interval ({:?}) must not exceed build timeout ({:?})",
                build_interval.0, build_timeout.0
            )));
        }

        Ok(Config {
            network_endpoint,
            api_prefix,
            auth_token: self
                .partial_configs
                .iter()
                .find_map(|p| p.auth_token().map(|v| (v, p.source()))),
            request_timeout,
            build_interval,
            build_timeout,
            tenant_id: self
                .partial_configs
                .iter()
                .find_map(|p| p.tenant_id().map(|v| (v, p.source()))),
            log_level,
            l2gw_device_name: self
                .partial_configs
                .iter()
                .find_map(|p| p.l2gw_device_name().map(|v| (v, p.source()))),
            l2gw_interface_name: self
                .partial_configs
                .iter()
                .find_map(|p| p.l2gw_interface_name().map(|v| (v, p.source()))),
        })
    }
}
