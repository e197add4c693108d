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

//! The order management contract: create an order, read it back by order number.

use crate::order::Order;
use crate::response::{ChaincodeError, Response};
use crate::stub::ChaincodeStub;

pub const CREATE_ORDER: &str = "createOrder";
pub const GET_PURCHASE_ORDER: &str = "getPurchaseOrder";

/// Entry points called by the host for each lifecycle event.
pub trait Chaincode {
    /// Called when the contract is installed or upgraded.
    fn init(&self, stub: &dyn ChaincodeStub) -> Response;

    /// Called once per transaction. Always produces exactly one response.
    fn invoke(&self, stub: &dyn ChaincodeStub) -> Response;
}

/// Stateless; everything it reads or writes goes through the stub.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderChaincode;

impl OrderChaincode {
    pub fn new() -> Self {
        OrderChaincode
    }

    /// Routes `function` to its handler.
    pub fn dispatch(&self, stub: &dyn ChaincodeStub, function: &str, args: &[String]) -> Response {
        let result = match function {
            CREATE_ORDER => create_order(stub, args),
            GET_PURCHASE_ORDER => get_purchase_order(stub, args),
            _ => Err(ChaincodeError::NoSuchFunction(function.to_string())),
        };

        if let Err(ref err) = result {
            debug!("{} rejected: {}", function, err);
        }

        Response::from(result)
    }
}

impl Chaincode for OrderChaincode {
    fn init(&self, _stub: &dyn ChaincodeStub) -> Response {
        Response::success(Vec::new())
    }

    fn invoke(&self, stub: &dyn ChaincodeStub) -> Response {
        let (function, args) = stub.get_function_and_parameters();
        self.dispatch(stub, &function, &args)
    }
}

fn create_order(stub: &dyn ChaincodeStub, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
    let raw = args.first().ok_or_else(|| {
        ChaincodeError::MissingArgument(
            "Expecting order to be provided in parameter list".to_string(),
        )
    })?;

    let order = Order::from_json(raw.as_bytes())
        .map_err(|err| ChaincodeError::MalformedPayload(err.to_string()))?;

    // The caller's bytes are stored as given, never re-serialized.
    //
    // A failed write is reported to the caller. Earlier deployments of this contract dropped the
    // write error and returned success; test_create_order_write_error pins the new behaviour.
    stub.put_state(&order.order_number, raw.as_bytes().to_vec())
        .map_err(|err| ChaincodeError::StateError(err.to_string()))?;

    info!("Created order {}", order.order_number);

    Ok(Vec::new())
}

fn get_purchase_order(
    stub: &dyn ChaincodeStub,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    let order_number = args.first().ok_or_else(|| {
        ChaincodeError::MissingArgument(
            "Expecting order number to be provided in parameter list".to_string(),
        )
    })?;

    let packed = match stub.get_state(order_number) {
        Ok(Some(packed)) if !packed.is_empty() => packed,
        Ok(_) => {
            return Err(ChaincodeError::NotFound {
                order_number: order_number.to_string(),
            })
        }
        Err(err) => return Err(ChaincodeError::StateError(err.to_string())),
    };

    let order = Order::from_json(&packed)
        .map_err(|err| ChaincodeError::MalformedPayload(err.to_string()))?;

    if !order.has_expected_doc_type() {
        debug!(
            "Order {} is stored with docType {:?}",
            order_number, order.doc_type
        );
    }

    info!("Retrieved order {}", order_number);

    Ok(packed)
}
