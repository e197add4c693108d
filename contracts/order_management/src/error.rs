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

use std::error::Error as StdError;
use std::fmt;

use flexi_logger::FlexiLoggerError;

#[derive(Debug)]
pub enum CliError {
    LoggingInitializationError(FlexiLoggerError),
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CliError::LoggingInitializationError(err) => Some(err),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::LoggingInitializationError(e) => {
                write!(f, "Logging initialization error: {}", e)
            }
        }
    }
}

impl From<FlexiLoggerError> for CliError {
    fn from(err: FlexiLoggerError) -> Self {
        CliError::LoggingInitializationError(err)
    }
}
