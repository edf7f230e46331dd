//! Transport boundary for JTAGICE3-family debug tools.
//!
//! The protocol engine exchanges opaque, report-sized byte buffers with a
//! physically attached tool (USB HID in the original deployment). This crate
//! defines that boundary:
//! - The [`Transport`] trait implemented by concrete report transports
//! - The [`TransportError`] taxonomy
//! - Default report-size lookup for known tool product IDs ([`toolinfo`])
//!
//! This is the lowest layer of edbglink. Everything else builds on top of
//! the [`Transport`] trait provided here.

pub mod error;
pub mod toolinfo;
pub mod traits;

pub use error::{Result, TransportError};
pub use toolinfo::default_report_size;
pub use traits::Transport;
