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

//! `PartialConfig` builder using default values.

use std::time::Duration;

use log::LevelFilter;

use crate::config::{ConfigError, ConfigSource, PartialConfig, PartialConfigBuilder};

const NETWORK_ENDPOINT: &str = "http://127.0.0.1:9696";
const API_PREFIX: &str = "v2.0";

const REQUEST_TIMEOUT: u64 = 60; // 60 seconds
const BUILD_INTERVAL: u64 = 1; // 1 second
const BUILD_TIMEOUT: u64 = 300; // 300 seconds = 5 minutes

#[derive(Default)]
pub struct DefaultPartialConfigBuilder;

impl DefaultPartialConfigBuilder {
    pub fn new() -> Self {
        DefaultPartialConfigBuilder {}
    }
}

/// Constructs a `PartialConfig` object from the `DefaultPartialConfigBuilder`.
impl PartialConfigBuilder for DefaultPartialConfigBuilder {
    fn build(self) -> Result<PartialConfig, ConfigError> {
        Ok(PartialConfig::new(ConfigSource::Default)
            .with_network_endpoint(Some(String::from(NETWORK_ENDPOINT)))
            .with_api_prefix(Some(String::from(API_PREFIX)))
            .with_request_timeout(Some(Duration::from_secs(REQUEST_TIMEOUT)))
            .with_build_interval(Some(Duration::from_secs(BUILD_INTERVAL)))
            .with_build_timeout(Some(Duration::from_secs(BUILD_TIMEOUT)))
            .with_log_level(Some(LevelFilter::Info)))
    }
}
