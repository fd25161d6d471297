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

//! Error handling for EdgeFit Core

use thiserror::Error;

/// Result type alias for EdgeFit operations
pub type Result<T> = std::result::Result<T, EdgeFitError>;

/// Error types for EdgeFit operations
#[derive(Error, Debug)]
pub enum EdgeFitError {
    #[error("Invalid model metrics: {reason}")]
    InvalidMetrics { reason: String },

    #[error("Invalid priority '{value}': expected one of latency, energy, size")]
    InvalidPriority { value: String },

    #[error("No applicable strategies for hardware '{hardware}'")]
    EmptyCatalog { hardware: String },

    #[error("Invalid strategy '{id}': {reason}")]
    InvalidStrategy { id: String, reason: String },

    #[error("Invalid hardware profile '{id}': {reason}")]
    InvalidHardware { id: String, reason: String },

    #[error("Target hardware not supported: {target}")]
    UnsupportedTarget { target: String },

    #[error("Duplicate hardware identifier: {id}")]
    DuplicateHardware { id: String },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EdgeFitError {
    /// Whether the caller should present this as "no applicable strategies"
    /// rather than an internal failure
    pub fn is_reportable(&self) -> bool {
        matches!(self, EdgeFitError::EmptyCatalog { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EdgeFitError::InvalidPriority {
            value: "throughput".to_string(),
        };
        assert!(err.to_string().contains("throughput"));

        let err = EdgeFitError::EmptyCatalog {
            hardware: "arduino-nano-33-ble".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No applicable strategies for hardware 'arduino-nano-33-ble'"
        );
    }

    #[test]
    fn test_reportable_errors() {
        assert!(EdgeFitError::EmptyCatalog {
            hardware: "x".to_string()
        }
        .is_reportable());
        assert!(!EdgeFitError::InvalidMetrics {
            reason: "negative MACs".to_string()
        }
        .is_reportable());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EdgeFitError = io.into();
        assert!(matches!(err, EdgeFitError::Io(_)));
    }
}
