//! Wire model for chat rendering.
//!
//! One stable message schema for whatever shows the answer to the student:
//! the CLI, a mobile chat screen or a web view.

use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;

/// Top-level wire response container.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireReply {
    /// Schema version for forwards/backwards compatibility
    pub schema_version: u8,
    /// Messages in order of emission
    pub messages: Vec<WireMsg>,
}

impl WireReply {
    /// Create a new WireReply with current schema version.
    pub fn new(messages: Vec<WireMsg>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            messages,
        }
    }
}

/// Message kind for wire format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WireKind {
    /// Chat bubble with the answer.
    Output,
    /// Notice shown instead of an answer.
    Error,
}

/// Individual message in wire format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireMsg {
    pub kind: WireKind,
    pub text: String,
    /// Structured metadata for the renderer (codes, LaTeX, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl WireMsg {
    pub fn with_data(kind: WireKind, text: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            kind,
            text: text.into(),
            data: Some(data),
        }
    }

    /// Error message with stable code and the notice title.
    pub fn error_with_code(code: &str, title: &str, message: impl Into<String>) -> Self {
        use serde_json::json;
        Self {
            kind: WireKind::Error,
            text: message.into(),
            data: Some(json!({"code": code, "title": title})),
        }
    }
}

/// Wire envelope for a solved scan: a single output bubble carrying the
/// typeset answer in `data.latex` so the renderer can typeset it.
pub fn build_scan_wire_reply(chat_text: &str, latex: &str) -> WireReply {
    use serde_json::json;
    WireReply::new(vec![WireMsg::with_data(
        WireKind::Output,
        chat_text,
        json!({"latex": latex}),
    )])
}

/// Wire envelope for a scan that ended in a notice.
pub fn build_notice_wire_reply(code: &str, title: &str, body: &str) -> WireReply {
    WireReply::new(vec![WireMsg::error_with_code(code, title, body)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_reply_has_single_output_with_latex() {
        let reply = build_scan_wire_reply("Solution: 4", "$$2 + 2 = 4$$");
        assert_eq!(reply.schema_version, SCHEMA_VERSION);
        assert_eq!(reply.messages.len(), 1);
        assert_eq!(reply.messages[0].kind, WireKind::Output);
        assert_eq!(
            reply.messages[0].data,
            Some(json!({"latex": "$$2 + 2 = 4$$"}))
        );
    }

    #[test]
    fn notice_reply_is_an_error_with_code() {
        let reply = build_notice_wire_reply("E_NO_MATH", "Math not detected", "Try again");
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["messages"][0]["kind"], json!("error"));
        assert_eq!(value["messages"][0]["data"]["code"], json!("E_NO_MATH"));
        assert_eq!(value["messages"][0]["text"], json!("Try again"));
    }

    #[test]
    fn wire_reply_round_trips_through_json() {
        let reply = build_scan_wire_reply("hi", "$$1$$");
        let text = serde_json::to_string(&reply).unwrap();
        let back: WireReply = serde_json::from_str(&text).unwrap();
        assert_eq!(back, reply);
    }
}
