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

//! `PartialConfig` builder using values from environment variables.

use std::env;
use std::str::FromStr;

use log::LevelFilter;

use crate::config::{ConfigError, ConfigSource, PartialConfig, PartialConfigBuilder};

pub(super) const CONFIG_ENV: &str = "NSX_TEMPEST_CONFIG";
const NETWORK_ENDPOINT_ENV: &str = "NSX_TEMPEST_NETWORK_ENDPOINT";
const AUTH_TOKEN_ENV: &str = "NSX_TEMPEST_AUTH_TOKEN";
const TENANT_ID_ENV: &str = "NSX_TEMPEST_TENANT_ID";
const LOG_LEVEL_ENV: &str = "NSX_TEMPEST_LOG_LEVEL";

#[derive(Default)]
pub struct EnvPartialConfigBuilder;

impl EnvPartialConfigBuilder {
    pub fn new() -> Self {
        EnvPartialConfigBuilder {}
    }
}

/// Implementation of the `PartialConfigBuilder` trait to create a `PartialConfig` object from the
/// environment variable config options.
impl PartialConfigBuilder for EnvPartialConfigBuilder {
    fn build(self) -> Result<PartialConfig, ConfigError> {
        let log_level = match env::var(LOG_LEVEL_ENV).ok() {
            Some(level) => Some(LevelFilter::from_str(&level).map_err(|_| {
                ConfigError::InvalidArgument(format!("{} is not a log level: {}", LOG_LEVEL_ENV, level))
            })?),
            None => None,
        };

        Ok(PartialConfig::new(ConfigSource::Environment)
            .with_network_endpoint(env::var(NETWORK_ENDPOINT_ENV).ok())
            .with_auth_token(env::var(AUTH_TOKEN_ENV).ok())
            .with_tenant_id(env::var(TENANT_ID_ENV).ok())
            .with_log_level(log_level))
    }
}
