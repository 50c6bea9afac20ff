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

//! Polling helpers that wait for a load balancer to settle after a change.
//!
//! LBaaS rejects changes to a load balancer while it is in a `PENDING_*` provisioning status,
//! so test fixtures wait for `ACTIVE` between steps.

use std::thread;
use std::time::{Duration, Instant};

use crate::attributes::{Attributes, Query};
use crate::error::ClientError;

use super::LoadBalancersClient;

pub const ACTIVE: &str = "ACTIVE";
pub const ONLINE: &str = "ONLINE";
pub const ERROR: &str = "ERROR";

const RESOURCE_NAME: &str = "load balancer";

/// Polls a load balancer until it reports the given statuses.
///
/// # Arguments
///
/// * `client` - The client used to show the load balancer
/// * `id` - The id of the load balancer
/// * `provisioning_status` - The provisioning status to wait for, usually `ACTIVE`
/// * `operating_status` - The operating status to wait for; `None` accepts any
/// * `interval` - Time between polls
/// * `timeout` - Time after which waiting fails with `ClientError::Timeout`
///
/// Fails with `ClientError::ResourceInError` as soon as either status is `ERROR`.
pub fn wait_for_load_balancer_status(
    client: &LoadBalancersClient,
    id: &str,
    provisioning_status: &str,
    operating_status: Option<&str>,
    interval: Duration,
    timeout: Duration,
) -> Result<Attributes, ClientError> {
    let start = Instant::now();
    loop {
        let load_balancer = client.show_load_balancer(id, &Query::new())?;
        let current_provisioning = load_balancer
            .get_str("provisioning_status")
            .unwrap_or_default();
        let current_operating = load_balancer
            .get_str("operating_status")
            .unwrap_or_default();

        if current_provisioning == ERROR || current_operating == ERROR {
            return Err(ClientError::ResourceInError {
                resource: RESOURCE_NAME.to_string(),
                id: id.to_string(),
                status: format!("{}/{}", current_provisioning, current_operating),
            });
        }

        if current_provisioning == provisioning_status
            && operating_status.map_or(true, |status| status == current_operating)
        {
            return Ok(load_balancer);
        }

        if start.elapsed() >= timeout {
            return Err(ClientError::Timeout {
                resource: RESOURCE_NAME.to_string(),
                id: id.to_string(),
                waited: start.elapsed(),
            });
        }

        debug!(
            "Load balancer {} is {}/{}, waiting for {}/{}",
            id,
            current_provisioning,
            current_operating,
            provisioning_status,
            operating_status.unwrap_or("*")
        );
        thread::sleep(interval);
    }
}

/// Polls a load balancer until showing it fails with not-found.
pub fn wait_for_load_balancer_deletion(
    client: &LoadBalancersClient,
    id: &str,
    interval: Duration,
    timeout: Duration,
) -> Result<(), ClientError> {
    let start = Instant::now();
    loop {
        match client.show_load_balancer(id, &Query::new()) {
            Err(ClientError::NotFound { .. }) => return Ok(()),
            Err(err) => return Err(err),
            Ok(_) if start.elapsed() >= timeout => {
                return Err(ClientError::Timeout {
                    resource: RESOURCE_NAME.to_string(),
                    id: id.to_string(),
                    waited: start.elapsed(),
                })
            }
            Ok(_) => thread::sleep(interval),
        }
    }
}
