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

//! Clients for the L2 gateway extension: gateways bridging a logical network to a physical
//! network, and the connections binding a gateway to a specific network.

use crate::resource::{L2_GATEWAY, L2_GATEWAY_CONNECTION};

resource_client! {
    /// Requests L2 gateway resources.
    ///
    /// Bodies are wrapped in `l2_gateway`; resources live under `/l2-gateways`.
    pub struct L2GatewayClient => L2_GATEWAY {
        create: create_l2_gateway,
        update: update_l2_gateway,
        show: show_l2_gateway,
        delete: delete_l2_gateway,
        list: list_l2_gateways,
    }
}

resource_client! {
    /// Requests L2 gateway connection resources.
    ///
    /// Bodies are wrapped in `l2_gateway_connection`; resources live under
    /// `/l2-gateway-connections`.
    pub struct L2GatewayConnectionClient => L2_GATEWAY_CONNECTION {
        create: create_l2_gateway_connection,
        update: update_l2_gateway_connection,
        show: show_l2_gateway_connection,
        delete: delete_l2_gateway_connection,
        list: list_l2_gateway_connections,
    }
}
