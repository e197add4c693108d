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

//! Results returned to the caller of an invocation.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Failure of a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChaincodeError {
    /// A required argument was not supplied
    MissingArgument(String),
    /// An argument or a stored record is not a valid document
    MalformedPayload(String),
    NotFound { order_number: String },
    /// The host failed to read or write state
    StateError(String),
    NoSuchFunction(String),
}

impl ChaincodeError {
    /// The world state key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ChaincodeError::NotFound { order_number } => Some(order_number.as_str()),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ChaincodeError::MissingArgument(_) => "missing_argument",
            ChaincodeError::MalformedPayload(_) => "malformed_payload",
            ChaincodeError::NotFound { .. } => "not_found",
            ChaincodeError::StateError(_) => "state_error",
            ChaincodeError::NoSuchFunction(_) => "no_such_function",
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.to_string(),
            kind: self.kind(),
            key: self.key().map(String::from),
        }
    }
}

impl StdError for ChaincodeError {}

impl fmt::Display for ChaincodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ChaincodeError::MissingArgument(ref s) => f.write_str(s),
            ChaincodeError::MalformedPayload(ref s) => f.write_str(s),
            ChaincodeError::NotFound { ref order_number } => {
                write!(f, "Failed to get state for order number {}", order_number)
            }
            ChaincodeError::StateError(ref s) => f.write_str(s),
            ChaincodeError::NoSuchFunction(ref name) => write!(f, "No such function: {}", name),
        }
    }
}

/// Structured form of a `ChaincodeError`, for hosts that carry errors as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ErrorEnvelope {
    pub fn to_json(&self) -> String {
        // plain strings always serialize
        serde_json::to_string(self).unwrap_or_else(|_| self.error.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 200,
            Status::Error => 500,
        }
    }
}

/// The outcome of exactly one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: Status,
    message: String,
    payload: Vec<u8>,
    error: Option<ChaincodeError>,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Response {
            status: Status::Ok,
            message: String::new(),
            payload,
            error: None,
        }
    }

    pub fn error(error: ChaincodeError) -> Self {
        Response {
            status: Status::Error,
            message: error.to_string(),
            payload: Vec::new(),
            error: Some(error),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Ok
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn cause(&self) -> Option<&ChaincodeError> {
        self.error.as_ref()
    }

    pub fn error_envelope(&self) -> Option<ErrorEnvelope> {
        self.error.as_ref().map(ChaincodeError::envelope)
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => Response::error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Test that an error response carries the error text as its message
    fn test_error_response() {
        let response = Response::error(ChaincodeError::NoSuchFunction("deleteOrder".into()));

        assert!(!response.is_success());
        assert_eq!(response.status().code(), 500);
        assert_eq!(response.message(), "No such function: deleteOrder");
        assert!(response.payload().is_empty());
    }

    #[test]
    // Test that the not found envelope serializes the message and the missing key
    fn test_not_found_envelope() {
        let err = ChaincodeError::NotFound {
            order_number: "NOPE".into(),
        };

        assert_eq!(
            err.envelope().to_json(),
            r#"{"error":"Failed to get state for order number NOPE","kind":"not_found","key":"NOPE"}"#
        );
    }

    #[test]
    // Test that envelopes without a key omit the field
    fn test_envelope_without_key() {
        let response = Response::error(ChaincodeError::MissingArgument(
            "Expecting order to be provided in parameter list".into(),
        ));
        let envelope = response.error_envelope().expect("Missing envelope");

        assert_eq!(
            envelope.to_json(),
            r#"{"error":"Expecting order to be provided in parameter list","kind":"missing_argument"}"#
        );
        assert!(Response::success(vec![]).error_envelope().is_none());
    }
}
