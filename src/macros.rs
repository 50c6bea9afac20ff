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

// Generates a named client over `ResourceClient` for one `ResourceSpec`, exposing the five
// resource operations under resource-specific method names.
macro_rules! resource_client {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $spec:path {
            create: $create:ident,
            update: $update:ident,
            show: $show:ident,
            delete: $delete:ident,
            list: $list:ident,
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            resources: $crate::client::ResourceClient,
        }

        impl $name {
            pub fn new(client: ::std::sync::Arc<dyn $crate::client::NetworkClient>) -> Self {
                $name {
                    resources: $crate::client::ResourceClient::new(client, $spec),
                }
            }

            /// Replaces the default `log`-based request logger.
            pub fn with_logger(
                mut self,
                logger: ::std::sync::Arc<dyn $crate::client::RequestLogger>,
            ) -> Self {
                self.resources = self.resources.with_logger(logger);
                self
            }

            /// The generic client this client delegates to.
            pub fn resources(&self) -> &$crate::client::ResourceClient {
                &self.resources
            }

            pub fn $create(
                &self,
                attrs: &$crate::attributes::Attributes,
            ) -> Result<$crate::attributes::Attributes, $crate::error::ClientError> {
                self.resources.create(attrs)
            }

            pub fn $update(
                &self,
                id: &str,
                attrs: &$crate::attributes::Attributes,
            ) -> Result<$crate::attributes::Attributes, $crate::error::ClientError> {
                self.resources.update(id, attrs)
            }

            pub fn $show(
                &self,
                id: &str,
                query: &$crate::attributes::Query,
            ) -> Result<$crate::attributes::Attributes, $crate::error::ClientError> {
                self.resources.show(id, query)
            }

            pub fn $delete(&self, id: &str) -> Result<(), $crate::error::ClientError> {
                self.resources.delete(id)
            }

            pub fn $list(
                &self,
                query: &$crate::attributes::Query,
            ) -> Result<Vec<$crate::attributes::Attributes>, $crate::error::ClientError> {
                self.resources.list(query)
            }
        }
    };
}
