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

//! Open attribute mappings and query parameters passed to the resource clients.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// The attributes of a resource, as sent to and returned by the server.
///
/// No typing or validation is applied to the values; the server decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Attributes::default()
    }

    /// Converts any serializable value into attributes. The value must serialize to a JSON
    /// object.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(Attributes(map)),
            Ok(other) => Err(ClientError::InvalidArgument(format!(
                "attributes must be a JSON object, got {}",
                other
            ))),
            Err(err) => Err(ClientError::InvalidArgument(format!(
                "attributes are not serializable: {}",
                err
            ))),
        }
    }

    /// Converts a decoded JSON value into attributes, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Attributes(map)),
            _ => None,
        }
    }

    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The server-assigned id of the resource.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns true if every attribute in `other` is present here with an equal value.
    pub fn contains_all(&self, other: &Attributes) -> bool {
        other
            .0
            .iter()
            .all(|(key, value)| self.0.get(key) == Some(value))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Attributes(map)
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// Query parameters for list filters and show field selection.
///
/// Parameters keep their insertion order and names may repeat, as with `fields=id&fields=name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    pub fn with<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Restricts a show or list response to the named field.
    pub fn with_field<F: Into<String>>(self, field: F) -> Self {
        let field: String = field.into();
        self.with("fields", field)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
