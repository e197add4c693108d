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

//! Provides constants and functions for computing Merkle addresses.

use crypto::digest::Digest;
use crypto::sha2::Sha512;

pub const ORDER_MANAGEMENT_NAMESPACE: &str = "4f5244";

pub const ORDER_PREFIX: &str = "00";

/// Computes the Merkle address world state key `key` is stored at.
pub fn compute_state_address(key: &str) -> String {
    let mut sha = Sha512::new();
    sha.input(key.as_bytes());
    let hash_str = String::from(ORDER_MANAGEMENT_NAMESPACE) + ORDER_PREFIX + &sha.result_str();
    hash_str[..70].to_string()
}
