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

//! Core network and subnet clients, used to build the tenant network other resources attach to.

use crate::resource::{NETWORK, SUBNET};

resource_client! {
    pub struct NetworksClient => NETWORK {
        create: create_network,
        update: update_network,
        show: show_network,
        delete: delete_network,
        list: list_networks,
    }
}

resource_client! {
    pub struct SubnetsClient => SUBNET {
        create: create_subnet,
        update: update_subnet,
        show: show_subnet,
        delete: delete_subnet,
        list: list_subnets,
    }
}
