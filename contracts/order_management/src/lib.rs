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

//! Order management smart contract.
//!
//! Records purchase order documents in world state under their order number and reads them back.
//! The contract itself (`chaincode`) only talks to a `ChaincodeStub`; `handler` and `state` host it
//! as a Sawtooth transaction processor or, on `wasm32`, a Sabre contract.

#[macro_use]
extern crate cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        #[macro_use]
        extern crate sabre_sdk;
    } else {
        #[macro_use]
        extern crate log;
    }
}

pub mod addressing;
pub mod chaincode;
pub mod handler;
pub mod order;
pub mod payload;
pub mod response;
pub mod state;
pub mod stub;
