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

//! Resource clients and test support for the Neutron extension APIs exposed by the NSX
//! OpenStack networking driver.
//!
//! Every resource client is a stateless mapping from an operation name to a URI and an HTTP
//! verb. The HTTP work itself is done by a [`NetworkClient`](client::NetworkClient), which is
//! shared between the resource clients and may be replaced in tests.

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod attributes;
pub mod cleanup;
pub mod client;
pub mod config;
pub mod error;
pub mod l2gw;
pub mod lbaas;
pub mod logging;
pub mod network;
pub mod resource;

pub use attributes::{Attributes, Query};
pub use error::ClientError;
