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
        use sabre_sdk::TransactionHandler;
        use sabre_sdk::TpProcessRequest;
        use sabre_sdk::{WasmPtr, execute_entrypoint};
    } else {
        use sawtooth_sdk::processor::handler::ApplyError;
        use sawtooth_sdk::processor::handler::TransactionContext;
        use sawtooth_sdk::processor::handler::TransactionHandler;
        use sawtooth_sdk::messages::processor::TpProcessRequest;
    }
}

use crate::addressing::ORDER_MANAGEMENT_NAMESPACE;
use crate::chaincode::{Chaincode, OrderChaincode};
use crate::payload::OrderPayload;
use crate::response::{ChaincodeError, Response};
use crate::state::OrderState;

#[cfg(target_arch = "wasm32")]
// Sabre apply must return a bool
fn apply(
    request: &TpProcessRequest,
    context: &mut dyn TransactionContext,
) -> Result<bool, ApplyError> {
    let handler = OrderTransactionHandler::new();
    match handler.apply(request, context) {
        Ok(_) => Ok(true),
        Err(err) => {
            info!("{} received {}", handler.family_name(), err);
            Err(err)
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[no_mangle]
pub unsafe fn entrypoint(payload: WasmPtr, signer: WasmPtr, signature: WasmPtr) -> i32 {
    execute_entrypoint(payload, signer, signature, apply)
}

#[derive(Default)]
pub struct OrderTransactionHandler {
    family_name: String,
    family_versions: Vec<String>,
    namespaces: Vec<String>,
    chaincode: OrderChaincode,
}

impl OrderTransactionHandler {
    pub fn new() -> Self {
        Self {
            family_name: "order_management".to_string(),
            family_versions: vec!["1.0".to_string()],
            namespaces: vec![ORDER_MANAGEMENT_NAMESPACE.to_string()],
            chaincode: OrderChaincode::new(),
        }
    }
}

impl TransactionHandler for OrderTransactionHandler {
    fn family_name(&self) -> String {
        self.family_name.clone()
    }

    fn family_versions(&self) -> Vec<String> {
        self.family_versions.clone()
    }

    fn namespaces(&self) -> Vec<String> {
        self.namespaces.clone()
    }

    fn apply(
        &self,
        request: &TpProcessRequest,
        context: &mut dyn TransactionContext,
    ) -> Result<(), ApplyError> {
        let payload = OrderPayload::new(request.get_payload())?;

        info!(
            "Order Management Payload {} with {} parameter(s)",
            payload.function(),
            payload.parameters().len()
        );

        let state = OrderState::new(context, &payload);
        let response = self.chaincode.invoke(&state);

        if !response.is_success() {
            return Err(into_apply_error(&response));
        }

        if !response.payload().is_empty() {
            state.add_receipt_data(response.payload())?;
        }

        Ok(())
    }
}

/// Host failures are internal errors; everything else rejects the transaction. The message is
/// the JSON error envelope.
fn into_apply_error(response: &Response) -> ApplyError {
    let message = match response.error_envelope() {
        Some(envelope) => envelope.to_json(),
        None => response.message().to_string(),
    };

    match response.cause() {
        Some(ChaincodeError::StateError(_)) => ApplyError::InternalError(message),
        _ => ApplyError::InvalidTransaction(message),
    }
}
