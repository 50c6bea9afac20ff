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

//! Clients for the LBaaS v2 resources: load balancers, listeners, pools, pool members and
//! health monitors.

mod waiter;

use std::sync::Arc;

use serde_json::Value;

use crate::attributes::{Attributes, Query};
use crate::client::{LogRequestLogger, NetworkClient, RequestLogger, ResourceClient};
use crate::error::ClientError;
use crate::resource::{HEALTH_MONITOR, LISTENER, LOAD_BALANCER, MEMBER, POOL};

pub use waiter::{
    wait_for_load_balancer_deletion, wait_for_load_balancer_status, ACTIVE, ERROR, ONLINE,
};

resource_client! {
    /// Requests load balancer resources under `/lbaas/loadbalancers`.
    pub struct LoadBalancersClient => LOAD_BALANCER {
        create: create_load_balancer,
        update: update_load_balancer,
        show: show_load_balancer,
        delete: delete_load_balancer,
        list: list_load_balancers,
    }
}

impl LoadBalancersClient {
    /// Fetches the status tree of a load balancer and its listeners, pools and members.
    pub fn show_load_balancer_status_tree(&self, id: &str) -> Result<Attributes, ClientError> {
        let uri = format!("{}/statuses", self.resources.instance_uri(id)?);
        self.resources.logger().log_request("GET", &uri, None);
        let response = self
            .resources
            .network_client()
            .show_resource(&uri, &Query::new())?;

        match response {
            Value::Object(mut body) => body
                .remove("statuses")
                .and_then(Attributes::from_value)
                .ok_or_else(|| {
                    ClientError::InvalidResponse(
                        "response does not contain a 'statuses' object".into(),
                    )
                }),
            _ => Err(ClientError::InvalidResponse(
                "expected a JSON object wrapping 'statuses'".into(),
            )),
        }
    }
}

resource_client! {
    /// Requests listener resources under `/lbaas/listeners`.
    pub struct ListenersClient => LISTENER {
        create: create_listener,
        update: update_listener,
        show: show_listener,
        delete: delete_listener,
        list: list_listeners,
    }
}

resource_client! {
    /// Requests pool resources under `/lbaas/pools`.
    pub struct PoolsClient => POOL {
        create: create_pool,
        update: update_pool,
        show: show_pool,
        delete: delete_pool,
        list: list_pools,
    }
}

resource_client! {
    /// Requests health monitor resources under `/lbaas/healthmonitors`.
    pub struct HealthMonitorsClient => HEALTH_MONITOR {
        create: create_health_monitor,
        update: update_health_monitor,
        show: show_health_monitor,
        delete: delete_health_monitor,
        list: list_health_monitors,
    }
}

/// Requests the members of a pool, under `/lbaas/pools/{pool_id}/members`.
#[derive(Clone)]
pub struct MembersClient {
    client: Arc<dyn NetworkClient>,
    logger: Arc<dyn RequestLogger>,
}

impl MembersClient {
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        MembersClient {
            client,
            logger: Arc::new(LogRequestLogger::default()),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// The generic client for the members of one pool.
    pub fn members(&self, pool_id: &str) -> Result<ResourceClient, ClientError> {
        let pool_uri = POOL.instance_uri(None, pool_id)?;
        Ok(
            ResourceClient::nested(self.client.clone(), MEMBER, pool_uri)
                .with_logger(self.logger.clone()),
        )
    }

    pub fn create_member(
        &self,
        pool_id: &str,
        attrs: &Attributes,
    ) -> Result<Attributes, ClientError> {
        self.members(pool_id)?.create(attrs)
    }

    pub fn update_member(
        &self,
        pool_id: &str,
        member_id: &str,
        attrs: &Attributes,
    ) -> Result<Attributes, ClientError> {
        self.members(pool_id)?.update(member_id, attrs)
    }

    pub fn show_member(
        &self,
        pool_id: &str,
        member_id: &str,
        query: &Query,
    ) -> Result<Attributes, ClientError> {
        self.members(pool_id)?.show(member_id, query)
    }

    pub fn delete_member(&self, pool_id: &str, member_id: &str) -> Result<(), ClientError> {
        self.members(pool_id)?.delete(member_id)
    }

    pub fn list_members(&self, pool_id: &str, query: &Query) -> Result<Vec<Attributes>, ClientError> {
        self.members(pool_id)?.list(query)
    }
}
