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

//! Suites run against a live Neutron deployment with the NSX plugin.
//!
//! The deployment is described by the `NSX_TEMPEST_*` environment variables or the toml file
//! named by `NSX_TEMPEST_CONFIG`. Run with `cargo test --features live-tests --test live`.
