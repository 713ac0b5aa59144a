//! JSON DTOs shared by the CLI and any chat front end.
//!
//! Transport models stay independent from engine internals; callers fill
//! them from the engine's records.

pub mod json_types;
pub mod wire;

pub use json_types::{
    DetectionJson, ErrorJson, ScanJsonOutput, SolutionJson, SCHEMA_VERSION,
};
pub use wire::{build_notice_wire_reply, build_scan_wire_reply, WireKind, WireMsg, WireReply};
