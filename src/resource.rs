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

//! Paths and envelope keys of the Neutron resources used by this crate.

use crate::error::ClientError;

/// Describes where a resource type lives and how its bodies are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Path of the collection, relative to the API root or to a parent resource.
    pub collection_path: &'static str,
    /// Key wrapping a single resource in request and response bodies.
    pub singular_key: &'static str,
    /// Key wrapping the resources in a list response.
    pub plural_key: &'static str,
}

impl ResourceSpec {
    pub const fn new(
        collection_path: &'static str,
        singular_key: &'static str,
        plural_key: &'static str,
    ) -> Self {
        ResourceSpec {
            collection_path,
            singular_key,
            plural_key,
        }
    }

    /// The collection URI, optionally nested under a parent instance URI.
    pub fn collection_uri(&self, parent: Option<&str>) -> String {
        match parent {
            Some(parent) => format!("{}{}", parent, self.collection_path),
            None => self.collection_path.to_string(),
        }
    }

    /// The URI of one resource in the collection.
    pub fn instance_uri(&self, parent: Option<&str>, id: &str) -> Result<String, ClientError> {
        check_id(id)?;
        Ok(format!("{}/{}", self.collection_uri(parent), id))
    }
}

/// Rejects ids that would not map to exactly one path segment.
pub fn check_id(id: &str) -> Result<(), ClientError> {
    if id.is_empty() {
        return Err(ClientError::InvalidArgument(
            "resource id must not be empty".into(),
        ));
    }
    if id == "." || id == ".." {
        return Err(ClientError::InvalidArgument(format!(
            "resource id '{}' is a relative path segment",
            id
        )));
    }
    // A `%` would let an already-encoded separator reach the server.
    if id.contains(|c: char| c == '/' || c == '?' || c == '#' || c == '%') {
        return Err(ClientError::InvalidArgument(format!(
            "resource id '{}' contains a reserved URI character",
            id
        )));
    }
    Ok(())
}

pub const L2_GATEWAY: ResourceSpec = ResourceSpec::new("/l2-gateways", "l2_gateway", "l2_gateways");

pub const L2_GATEWAY_CONNECTION: ResourceSpec = ResourceSpec::new(
    "/l2-gateway-connections",
    "l2_gateway_connection",
    "l2_gateway_connections",
);

pub const LOAD_BALANCER: ResourceSpec =
    ResourceSpec::new("/lbaas/loadbalancers", "loadbalancer", "loadbalancers");

pub const LISTENER: ResourceSpec = ResourceSpec::new("/lbaas/listeners", "listener", "listeners");

pub const POOL: ResourceSpec = ResourceSpec::new("/lbaas/pools", "pool", "pools");

/// Members are nested under a pool instance URI.
pub const MEMBER: ResourceSpec = ResourceSpec::new("/members", "member", "members");

pub const HEALTH_MONITOR: ResourceSpec =
    ResourceSpec::new("/lbaas/healthmonitors", "healthmonitor", "healthmonitors");

pub const NETWORK: ResourceSpec = ResourceSpec::new("/networks", "network", "networks");

pub const SUBNET: ResourceSpec = ResourceSpec::new("/subnets", "subnet", "subnets");
