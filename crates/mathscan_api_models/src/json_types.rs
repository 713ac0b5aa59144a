use serde::{Deserialize, Serialize};

use crate::wire::WireReply;

/// Stable schema version for JSON outputs.
pub const SCHEMA_VERSION: u8 = 1;

/// The line picked out of the OCR text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DetectionJson {
    pub raw_expression: String,
    pub normalized_expression: String,
    pub right_expression: Option<String>,
    pub original_line: String,
    pub has_equation: bool,
}

/// Evaluated values and display strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolutionJson {
    pub expression: String,
    pub answer: String,
    pub explanation: String,
    pub left_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_value: Option<String>,
    pub latex: String,
}

/// An error with stable code plus the notice a user would see.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorJson {
    pub code: String,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Output of `detect`, `solve` and `scan` in JSON mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScanJsonOutput {
    pub schema_version: u8,
    pub ok: bool,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<DetectionJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<SolutionJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire: Option<WireReply>,
}

impl ScanJsonOutput {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            command: command.into(),
            detection: None,
            solution: None,
            error: None,
            wire: None,
        }
    }

    pub fn with_detection(mut self, detection: DetectionJson) -> Self {
        self.ok = true;
        self.detection = Some(detection);
        self
    }

    pub fn with_solution(mut self, solution: SolutionJson) -> Self {
        self.ok = true;
        self.solution = Some(solution);
        self
    }

    /// Mark the output as failed. Any partial detection is kept.
    pub fn with_error(mut self, error: ErrorJson) -> Self {
        self.ok = false;
        self.error = Some(error);
        self
    }

    pub fn with_wire(mut self, wire: WireReply) -> Self {
        self.wire = Some(wire);
        self
    }
}
