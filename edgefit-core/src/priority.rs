// Copyright 2025 Gibran Rodriguez <brangi000@gmail.com>
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

//! User optimization priority

use crate::{EdgeFitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user wants the deployed model to be best at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Fastest inference
    Latency,
    /// Lowest energy per inference
    Energy,
    /// Smallest stored model
    Size,
}

impl Priority {
    /// All recognized priorities
    pub const ALL: [Priority; 3] = [Priority::Latency, Priority::Energy, Priority::Size];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latency => "latency",
            Self::Energy => "energy",
            Self::Size => "size",
        }
    }

    /// Parse a priority name, rejecting anything outside the three known values
    pub fn parse(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for Priority {
    type Err = EdgeFitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "latency" => Ok(Self::Latency),
            "energy" => Ok(Self::Energy),
            "size" => Ok(Self::Size),
            other => Err(EdgeFitError::InvalidPriority {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_priorities() {
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()).unwrap(), priority);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Priority::parse("Latency").is_err());
        assert!(Priority::parse("").is_err());
    }

    #[test]
    fn test_unknown_priority() {
        match Priority::parse("throughput") {
            Err(EdgeFitError::InvalidPriority { value }) => assert_eq!(value, "throughput"),
            other => panic!("expected InvalidPriority, got {:?}", other),
        }
    }
}
