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

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use sabre_sdk::ApplyError;
        use sabre_sdk::TransactionContext;
    } else {
        use sawtooth_sdk::processor::handler::ApplyError;
        use sawtooth_sdk::processor::handler::TransactionContext;
    }
}

use crate::addressing::compute_state_address;
use crate::payload::OrderPayload;
use crate::stub::{ChaincodeStub, StubError};

/// A `ChaincodeStub` over the transaction context of a single transaction.
///
/// World state keys are mapped onto Merkle addresses in the order management namespace.
pub struct OrderState<'a> {
    context: &'a dyn TransactionContext,
    function: String,
    parameters: Vec<String>,
}

impl<'a> OrderState<'a> {
    pub fn new(context: &'a dyn TransactionContext, payload: &OrderPayload) -> Self {
        Self {
            context,
            function: payload.function().to_string(),
            parameters: payload.parameters().to_vec(),
        }
    }

    /// Attaches a response payload to the transaction receipt.
    pub fn add_receipt_data(&self, data: &[u8]) -> Result<(), ApplyError> {
        self.context
            .add_receipt_data(data)
            .map_err(|err| ApplyError::InternalError(format!("{}", err)))
    }
}

impl<'a> ChaincodeStub for OrderState<'a> {
    fn get_function_and_parameters(&self) -> (String, Vec<String>) {
        (self.function.clone(), self.parameters.clone())
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        let address = compute_state_address(key);
        let d = self
            .context
            .get_state_entry(&address)
            .map_err(|err| StubError::new(format!("{}", err)))?;
        // an unset address may come back as an empty entry
        match d {
            Some(packed) if !packed.is_empty() => Ok(Some(packed)),
            _ => Ok(None),
        }
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StubError> {
        if key.is_empty() {
            return Err(StubError::new("key must not be empty".to_string()));
        }
        let address = compute_state_address(key);
        self.context
            .set_state_entry(address, value)
            .map_err(|err| StubError::new(format!("{}", err)))
    }
}
