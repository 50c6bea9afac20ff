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

//! Teardown of resources created by a test, in reverse creation order.

use std::error::Error;
use std::fmt;

use crate::error::ClientError;

type CleanupAction = Box<dyn FnOnce() -> Result<(), ClientError>>;

/// Collects cleanup actions as resources are created and runs them last-in, first-out.
///
/// A cleanup that fails with `NotFound` is treated as done, since the test may already have
/// deleted the resource. Remaining actions run when the stack is dropped.
#[derive(Default)]
pub struct CleanupStack {
    actions: Vec<(String, CleanupAction)>,
}

impl CleanupStack {
    pub fn new() -> Self {
        CleanupStack::default()
    }

    /// Registers an action to run during cleanup.
    ///
    /// # Arguments
    ///
    /// * `description` - Names the resource in log messages, e.g. `member 1234`
    /// * `action` - Deletes the resource
    pub fn push<D, F>(&mut self, description: D, action: F)
    where
        D: Into<String>,
        F: FnOnce() -> Result<(), ClientError> + 'static,
    {
        self.actions.push((description.into(), Box::new(action)));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs every registered action, newest first. All actions are attempted even if some fail.
    pub fn run(&mut self) -> Result<(), CleanupError> {
        let mut failures = vec![];
        while let Some((description, action)) = self.actions.pop() {
            match action() {
                Ok(()) => debug!("Cleaned up {}", description),
                Err(ClientError::NotFound { .. }) => {
                    debug!("{} was already removed", description)
                }
                Err(err) => {
                    warn!("Failed to clean up {}: {}", description, err);
                    failures.push((description, err));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CleanupError { failures })
        }
    }
}

impl Drop for CleanupStack {
    fn drop(&mut self) {
        if let Err(err) = self.run() {
            error!("{}", err);
        }
    }
}

/// The cleanup actions that failed with something other than not-found.
#[derive(Debug)]
pub struct CleanupError {
    pub failures: Vec<(String, ClientError)>,
}

impl Error for CleanupError {}

impl fmt::Display for CleanupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cleanup failed for: {}",
            self.failures
                .iter()
                .map(|(description, err)| format!("{} ({})", description, err))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
