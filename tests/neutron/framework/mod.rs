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

//! An in-memory Neutron server used to exercise the HTTP client end to end.

use std::collections::{HashMap, VecDeque};
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use percent_encoding::percent_decode_str;
use serde_json::{json, Map, Value};
use tiny_http::{Header, Method, Request, Response, Server};
use uuid::Uuid;

use nsx_tempest::client::{ReqwestNetworkClient, ReqwestNetworkClientBuilder};

const API_PREFIX: &str = "/v2.0";

/// A request received by the fake server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub auth_token: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// The request path, without the query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    /// The raw query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.url.splitn(2, '?').nth(1)
    }
}

#[derive(Default)]
struct State {
    required_token: Option<String>,
    collections: HashMap<String, Vec<Map<String, Value>>>,
    requests: Vec<RecordedRequest>,
    failures: VecDeque<(u16, String)>,
}

/// Serves the Neutron resource API for the collections the resource clients use, storing
/// resources in memory.
pub struct FakeNeutron {
    endpoint: String,
    server: Arc<Server>,
    state: Arc<Mutex<State>>,
    join_handle: Option<JoinHandle<()>>,
}

impl FakeNeutron {
    pub fn start() -> Self {
        Self::start_with_state(State::default())
    }

    /// Starts a server that rejects requests without the given `X-Auth-Token`.
    pub fn start_with_token(token: &str) -> Self {
        Self::start_with_state(State {
            required_token: Some(token.to_string()),
            ..State::default()
        })
    }

    fn start_with_state(state: State) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Unable to start fake server"));
        let port = server.server_addr().port();
        let state = Arc::new(Mutex::new(state));

        let thread_server = server.clone();
        let thread_state = state.clone();
        let join_handle = thread::Builder::new()
            .name("Thread-FakeNeutron".into())
            .spawn(move || {
                for request in thread_server.incoming_requests() {
                    handle(&thread_state, request);
                }
            })
            .expect("Unable to spawn fake server thread");

        FakeNeutron {
            endpoint: format!("http://127.0.0.1:{}", port),
            server,
            state,
            join_handle: Some(join_handle),
        }
    }

    pub fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    /// A network client for this server, sending the given auth token if any.
    pub fn client(&self, auth_token: Option<&str>) -> Arc<ReqwestNetworkClient> {
        let mut builder = ReqwestNetworkClientBuilder::new().with_url(self.endpoint());
        if let Some(token) = auth_token {
            builder = builder.with_auth_token(token.to_string());
        }
        Arc::new(builder.build().expect("Unable to build network client"))
    }

    /// Answers the next request with the given status and raw body, instead of handling it.
    pub fn fail_next(&self, status: u16, body: &str) {
        self.state
            .lock()
            .expect("fake server state poisoned")
            .failures
            .push_back((status, body.to_string()));
    }

    /// Answers the next request with the given status and a Neutron error body.
    pub fn fail_next_with_message(&self, status: u16, message: &str) {
        self.fail_next(status, &neutron_error(message).to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .lock()
            .expect("fake server state poisoned")
            .requests
            .clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("the fake server has not received any requests")
    }
}

impl Drop for FakeNeutron {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(join_handle) = self.join_handle.take() {
            let _ = join_handle.join();
        }
    }
}

struct Route {
    collection: String,
    singular: &'static str,
    plural: &'static str,
    parent: Option<(String, String)>,
    id: Option<String>,
    statuses: bool,
}

fn route(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let (collection_len, singular, plural) = match segments.as_slice() {
        ["lbaas", "pools", _, "members", ..] => (4, "member", "members"),
        ["lbaas", "loadbalancers", ..] => (2, "loadbalancer", "loadbalancers"),
        ["lbaas", "listeners", ..] => (2, "listener", "listeners"),
        ["lbaas", "pools", ..] => (2, "pool", "pools"),
        ["lbaas", "healthmonitors", ..] => (2, "healthmonitor", "healthmonitors"),
        ["l2-gateways", ..] => (1, "l2_gateway", "l2_gateways"),
        ["l2-gateway-connections", ..] => (1, "l2_gateway_connection", "l2_gateway_connections"),
        ["networks", ..] => (1, "network", "networks"),
        ["subnets", ..] => (1, "subnet", "subnets"),
        _ => return None,
    };
    let parent = if plural == "members" {
        Some(("/lbaas/pools".to_string(), segments[2].to_string()))
    } else {
        None
    };

    let collection = format!("/{}", segments[..collection_len].join("/"));
    let (id, statuses) = match &segments[collection_len..] {
        [] => (None, false),
        [id] => (Some(id.to_string()), false),
        [id, "statuses"] if plural == "loadbalancers" => (Some(id.to_string()), true),
        _ => return None,
    };

    Some(Route {
        collection,
        singular,
        plural,
        parent,
        id,
        statuses,
    })
}

fn neutron_error(message: &str) -> Value {
    json!({
        "NeutronError": {
            "type": "HTTPError",
            "message": message,
            "detail": ""
        }
    })
}

fn not_found(route: &Route, id: &str) -> (u16, Value) {
    (
        404,
        neutron_error(&format!("{} {} could not be found.", route.singular, id)),
    )
}

fn handle(state: &Mutex<State>, mut request: Request) {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_str::<Value>(&body).ok()
    };
    let auth_token = request
        .headers()
        .iter()
        .find(|header| header.field.equiv("X-Auth-Token"))
        .map(|header| header.value.as_str().to_string());

    let recorded = RecordedRequest {
        method: request.method().to_string(),
        url: request.url().to_string(),
        auth_token,
        body,
    };

    let (status, text) = {
        let mut state = match state.lock() {
            Ok(state) => state,
            Err(_) => return,
        };
        state.requests.push(recorded.clone());

        if let Some((status, text)) = state.failures.pop_front() {
            (status, text)
        } else if state.required_token.is_some() && state.required_token != recorded.auth_token {
            (401, "Authentication required".to_string())
        } else {
            let (status, value) = dispatch(&mut state, request.method(), &recorded);
            (status, value.map(|v| v.to_string()).unwrap_or_default())
        }
    };

    let response = Response::from_string(text)
        .with_status_code(status)
        .with_header(
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("valid header could not be turned into a header struct"),
        );
    let _ = request.respond(response);
}

fn dispatch(state: &mut State, method: &Method, request: &RecordedRequest) -> (u16, Option<Value>) {
    let path = match request.path().strip_prefix(API_PREFIX) {
        Some(path) => path,
        None => return (404, Some(neutron_error("The resource could not be found."))),
    };
    let route = match route(path) {
        Some(route) => route,
        None => return (404, Some(neutron_error("The resource could not be found."))),
    };

    if let Some((parent_collection, parent_id)) = &route.parent {
        let parent_exists = state
            .collections
            .get(parent_collection)
            .map(|items| items.iter().any(|item| has_id(item, parent_id)))
            .unwrap_or(false);
        if !parent_exists {
            return (
                404,
                Some(neutron_error(&format!("pool {} could not be found.", parent_id))),
            );
        }
    }

    let params = parse_query(request.query().unwrap_or_default());

    let (status, value) = match (method, &route.id, route.statuses) {
        (Method::Get, Some(id), true) => show_statuses(state, &route, id),
        (Method::Post, None, false) => create(state, &route, request.body.as_ref()),
        (Method::Get, None, false) => list(state, &route, &params),
        (Method::Get, Some(id), false) => show(state, &route, id, &params),
        (Method::Put, Some(id), false) => update(state, &route, id, request.body.as_ref()),
        (Method::Delete, Some(id), false) => return delete(state, &route, id),
        _ => (405, neutron_error("Method not allowed.")),
    };
    (status, Some(value))
}

fn has_id(item: &Map<String, Value>, id: &str) -> bool {
    item.get("id").and_then(Value::as_str) == Some(id)
}

fn create(state: &mut State, route: &Route, body: Option<&Value>) -> (u16, Value) {
    let mut item = match body
        .and_then(|body| body.get(route.singular))
        .and_then(Value::as_object)
    {
        Some(item) => item.clone(),
        None => {
            return (
                400,
                neutron_error(&format!("Resource body required: {}", route.singular)),
            )
        }
    };

    if item.get("tenant_id").and_then(Value::as_str) == Some("") {
        return (
            400,
            neutron_error("Invalid input for tenant_id. Reason: '' is not a valid tenant id."),
        );
    }

    if !item.contains_key("id") {
        item.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
    }
    if route.plural == "loadbalancers" {
        item.insert("provisioning_status".into(), json!("ACTIVE"));
        item.insert("operating_status".into(), json!("ONLINE"));
    }

    state
        .collections
        .entry(route.collection.clone())
        .or_default()
        .push(item.clone());
    (201, json!({ route.singular: item }))
}

fn list(state: &State, route: &Route, params: &[(String, String)]) -> (u16, Value) {
    let items: Vec<Value> = state
        .collections
        .get(&route.collection)
        .map(|items| {
            items
                .iter()
                .filter(|item| matches_filters(item, params))
                .map(|item| select_fields(item, params))
                .collect()
        })
        .unwrap_or_default();
    (200, json!({ route.plural: items }))
}

fn show(state: &State, route: &Route, id: &str, params: &[(String, String)]) -> (u16, Value) {
    match find(state, route, id) {
        Some(item) => (200, json!({ route.singular: select_fields(item, params) })),
        None => not_found(route, id),
    }
}

fn update(state: &mut State, route: &Route, id: &str, body: Option<&Value>) -> (u16, Value) {
    let changes = match body
        .and_then(|body| body.get(route.singular))
        .and_then(Value::as_object)
    {
        Some(changes) => changes.clone(),
        None => {
            return (
                400,
                neutron_error(&format!("Resource body required: {}", route.singular)),
            )
        }
    };

    let item = state
        .collections
        .get_mut(&route.collection)
        .and_then(|items| items.iter_mut().find(|item| has_id(item, id)));
    match item {
        Some(item) => {
            for (key, value) in changes {
                if key != "id" {
                    item.insert(key, value);
                }
            }
            (200, json!({ route.singular: item.clone() }))
        }
        None => not_found(route, id),
    }
}

fn delete(state: &mut State, route: &Route, id: &str) -> (u16, Option<Value>) {
    let items = state.collections.entry(route.collection.clone()).or_default();
    match items.iter().position(|item| has_id(item, id)) {
        Some(index) => {
            items.remove(index);
            (204, None)
        }
        None => {
            let (status, value) = not_found(route, id);
            (status, Some(value))
        }
    }
}

fn show_statuses(state: &State, route: &Route, id: &str) -> (u16, Value) {
    let load_balancer = match find(state, route, id) {
        Some(load_balancer) => load_balancer,
        None => return not_found(route, id),
    };
    let listeners: Vec<Value> = state
        .collections
        .get("/lbaas/listeners")
        .map(|listeners| {
            listeners
                .iter()
                .filter(|listener| {
                    listener.get("loadbalancer_id").and_then(Value::as_str) == Some(id)
                })
                .map(|listener| {
                    json!({
                        "id": listener.get("id"),
                        "name": listener.get("name"),
                        "operating_status": "ONLINE",
                        "provisioning_status": "ACTIVE",
                        "pools": []
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    (
        200,
        json!({
            "statuses": {
                "loadbalancer": {
                    "id": id,
                    "name": load_balancer.get("name"),
                    "operating_status": load_balancer.get("operating_status"),
                    "provisioning_status": load_balancer.get("provisioning_status"),
                    "listeners": listeners
                }
            }
        }),
    )
}

fn find<'a>(state: &'a State, route: &Route, id: &str) -> Option<&'a Map<String, Value>> {
    state
        .collections
        .get(&route.collection)
        .and_then(|items| items.iter().find(|item| has_id(item, id)))
}

fn matches_filters(item: &Map<String, Value>, params: &[(String, String)]) -> bool {
    params
        .iter()
        .filter(|(key, _)| key != "fields")
        .all(|(key, expected)| match item.get(key) {
            Some(Value::String(value)) => value == expected,
            Some(value) => &value.to_string() == expected,
            None => false,
        })
}

fn select_fields(item: &Map<String, Value>, params: &[(String, String)]) -> Value {
    let fields: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "fields")
        .map(|(_, value)| value.as_str())
        .collect();
    if fields.is_empty() {
        return Value::Object(item.clone());
    }
    Value::Object(
        item.iter()
            .filter(|(key, _)| fields.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            (decode_component(key), decode_component(value))
        })
        .collect()
}

// Form encoding sends spaces as `+`; a literal plus arrives as `%2B`.
fn decode_component(input: &str) -> String {
    percent_decode_str(&input.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
