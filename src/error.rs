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

//! Errors returned by the resource clients.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// An error returned by a resource client or the underlying `NetworkClient`.
///
/// HTTP failures are categorized by status code so that tests can assert on the kind of
/// failure, for example `matches!(err, ClientError::BadRequest { .. })`.
#[derive(Debug)]
pub enum ClientError {
    /// The server rejected the request with 400, or any 4xx status not covered by a more
    /// specific variant.
    BadRequest { status: u16, message: String },
    /// The server returned 401.
    Unauthorized { status: u16, message: String },
    /// The server returned 403.
    Forbidden { status: u16, message: String },
    /// The server returned 404.
    NotFound { status: u16, message: String },
    /// The server returned 409, usually because of a uniqueness constraint.
    Conflict { status: u16, message: String },
    /// The server returned a 5xx status.
    ServerFault { status: u16, message: String },
    /// The server returned a status that is neither a success nor an error.
    UnexpectedStatus { status: u16, message: String },
    /// The request could not be sent or the response could not be read.
    Transport(String),
    /// The request succeeded, but the response body was not what was expected.
    InvalidResponse(String),
    /// The request was rejected before being sent.
    InvalidArgument(String),
    /// A resource being waited on entered an error state.
    ResourceInError {
        resource: String,
        id: String,
        status: String,
    },
    /// A resource did not reach the requested state in time.
    Timeout {
        resource: String,
        id: String,
        waited: Duration,
    },
}

impl ClientError {
    /// Categorizes a non-success HTTP status and the message extracted from its body.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ClientError::BadRequest { status, message },
            401 => ClientError::Unauthorized { status, message },
            403 => ClientError::Forbidden { status, message },
            404 => ClientError::NotFound { status, message },
            409 => ClientError::Conflict { status, message },
            400..=499 => ClientError::BadRequest { status, message },
            500..=599 => ClientError::ServerFault { status, message },
            _ => ClientError::UnexpectedStatus { status, message },
        }
    }

    /// Returns the HTTP status carried by this error, if it came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::BadRequest { status, .. }
            | ClientError::Unauthorized { status, .. }
            | ClientError::Forbidden { status, .. }
            | ClientError::NotFound { status, .. }
            | ClientError::Conflict { status, .. }
            | ClientError::ServerFault { status, .. }
            | ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

impl Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::BadRequest { status, message } => {
                write!(f, "Bad request ({}): {}", status, message)
            }
            ClientError::Unauthorized { status, message } => {
                write!(f, "Unauthorized ({}): {}", status, message)
            }
            ClientError::Forbidden { status, message } => {
                write!(f, "Forbidden ({}): {}", status, message)
            }
            ClientError::NotFound { status, message } => {
                write!(f, "Not found ({}): {}", status, message)
            }
            ClientError::Conflict { status, message } => {
                write!(f, "Conflict ({}): {}", status, message)
            }
            ClientError::ServerFault { status, message } => {
                write!(f, "Server fault ({}): {}", status, message)
            }
            ClientError::UnexpectedStatus { status, message } => {
                write!(f, "Unexpected response status ({}): {}", status, message)
            }
            ClientError::Transport(msg) => write!(f, "Failed to send request: {}", msg),
            ClientError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ClientError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ClientError::ResourceInError {
                resource,
                id,
                status,
            } => write!(f, "{} {} entered status {}", resource, id, status),
            ClientError::Timeout {
                resource,
                id,
                waited,
            } => write!(
                f,
                "{} {} did not reach the requested status within {:?}",
                resource, id, waited
            ),
        }
    }
}
