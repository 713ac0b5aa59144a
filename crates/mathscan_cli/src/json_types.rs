//! Conversions from engine records into the transport DTOs.

use mathscan_api_models::{
    build_notice_wire_reply, build_scan_wire_reply, DetectionJson, ErrorJson, SolutionJson,
    WireReply,
};
use mathscan_engine::{chat_message, Detection, ScanError, ScanOutput, Solution};

pub fn detection_json(detection: &Detection) -> DetectionJson {
    DetectionJson {
        raw_expression: detection.raw_expression.clone(),
        normalized_expression: detection.normalized_expression.clone(),
        right_expression: detection.right_expression.clone(),
        original_line: detection.original_line.clone(),
        has_equation: detection.has_equation,
    }
}

pub fn solution_json(solution: &Solution) -> SolutionJson {
    SolutionJson {
        expression: solution.expression.clone(),
        answer: solution.answer.clone(),
        explanation: solution.explanation.clone(),
        left_value: solution.left_value.clone(),
        right_value: solution.right_value.clone(),
        latex: solution.latex.clone(),
    }
}

pub fn error_json(error: &ScanError) -> ErrorJson {
    let notice = error.notice();
    ErrorJson {
        code: error.code().to_string(),
        title: notice.title.to_string(),
        message: notice.body.to_string(),
        detail: Some(error.to_string()),
    }
}

pub fn success_wire(output: &ScanOutput) -> WireReply {
    build_scan_wire_reply(&chat_message(output), &output.solution.latex)
}

pub fn error_wire(error: &ScanError) -> WireReply {
    let notice = error.notice();
    build_notice_wire_reply(error.code(), notice.title, notice.body)
}
