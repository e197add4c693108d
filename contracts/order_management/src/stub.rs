// Copyright 2021 Cargill Incorporated
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

//! The ledger access facade the contract is written against.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error returned by a `ChaincodeStub` when the host fails to read or write state.
#[derive(Debug, Clone, PartialEq)]
pub struct StubError {
    message: String,
}

impl StubError {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Error for StubError {}

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Host-provided access to the current invocation and to world state.
///
/// Keys are passed through verbatim; any mapping onto the host's own address space is the
/// implementation's concern.
pub trait ChaincodeStub {
    /// Returns the invoked function name and its string parameters.
    fn get_function_and_parameters(&self) -> (String, Vec<String>);

    /// Returns the value stored at `key`, or `None` if nothing is stored there.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError>;

    /// Stores `value` at `key`, replacing any existing value.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StubError>;
}

/// An in-memory `ChaincodeStub`.
///
/// Counts every state access so callers can assert that a path did not touch state, and can be
/// told to fail reads or writes.
#[derive(Debug, Default)]
pub struct MemoryStub {
    function: String,
    parameters: Vec<String>,
    state: RefCell<HashMap<String, Vec<u8>>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
    read_error: Option<String>,
    write_error: Option<String>,
}

impl MemoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the invocation returned by `get_function_and_parameters`.
    pub fn with_invocation(mut self, function: &str, parameters: &[&str]) -> Self {
        self.function = function.to_string();
        self.parameters = parameters.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_state(self, key: &str, value: &[u8]) -> Self {
        self.state
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        self
    }

    /// Makes every `get_state` fail with `message`.
    pub fn with_read_error(mut self, message: &str) -> Self {
        self.read_error = Some(message.to_string());
        self
    }

    /// Makes every `put_state` fail with `message`.
    pub fn with_write_error(mut self, message: &str) -> Self {
        self.write_error = Some(message.to_string());
        self
    }

    /// Replaces the invocation, keeping state.
    pub fn set_invocation(&mut self, function: &str, parameters: &[&str]) {
        self.function = function.to_string();
        self.parameters = parameters.iter().map(|p| p.to_string()).collect();
    }

    pub fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.state.borrow().get(key).cloned()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ChaincodeStub for MemoryStub {
    fn get_function_and_parameters(&self) -> (String, Vec<String>) {
        (self.function.clone(), self.parameters.clone())
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        self.reads.set(self.reads.get() + 1);
        if let Some(message) = &self.read_error {
            return Err(StubError::new(message.clone()));
        }
        Ok(self.state.borrow().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StubError> {
        self.writes.set(self.writes.get() + 1);
        if let Some(message) = &self.write_error {
            return Err(StubError::new(message.clone()));
        }
        if key.is_empty() {
            return Err(StubError::new("key must not be empty".to_string()));
        }
        self.state.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
