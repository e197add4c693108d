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
    } else {
        use sawtooth_sdk::processor::handler::ApplyError;
    }
}

use serde::Deserialize;

/// Wire form of a transaction payload: `{"Args": ["<function>", "<arg>", ...]}`
#[derive(Debug, Deserialize)]
struct ChaincodeInput {
    #[serde(rename = "Args", alias = "args")]
    args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderPayload {
    function: String,
    parameters: Vec<String>,
}

impl OrderPayload {
    pub fn new(payload: &[u8]) -> Result<OrderPayload, ApplyError> {
        let input: ChaincodeInput = serde_json::from_slice(payload).map_err(|err| {
            ApplyError::InvalidTransaction(format!("Cannot deserialize payload: {}", err))
        })?;

        // the first argument names the function; an empty list invokes ""
        let mut args = input.args.into_iter();
        let function = args.next().unwrap_or_default();

        Ok(OrderPayload {
            function,
            parameters: args.collect(),
        })
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}
