//! JTAGICE3 protocol engine.
//!
//! This is the layer every sub-protocol in the JTAGICE3 family shares:
//! - Command-frame encoding and response-frame decoding ([`frame`])
//! - The blocking send/receive correlator ([`Jtagice3`])
//! - Response validation (`check_response` / `peel_response`)
//! - The parameter store accessor (get/set values within a context)
//! - Failure-code description tables ([`ErrorCatalog`])
//!
//! The engine owns no device state. One instance is bound to exactly one
//! [`Handler`] and one transport connection for its lifetime; sub-protocols
//! compose an engine rather than inheriting from it.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod frame;

pub use catalog::ErrorCatalog;
pub use engine::Jtagice3;
pub use error::{ProtocolError, Result};
pub use frame::{Handler, Response, Status, CMD_GET, CMD_SET, VERSION0};
