//! mEDBG configuration sub-protocol.
//!
//! The mEDBG debugger on entry-level kits exposes a narrow subset of the
//! EDBG command surface: byte-range reads and writes of its configuration
//! banks, expressed as parameter GET/SET frames through an engine bound to
//! [`Handler::Edbg`](edbglink_protocol::Handler::Edbg).

pub mod error;
pub mod protocol;

pub use error::{MEdbgError, Result};
pub use protocol::{MEdbg, MAX_CONFIG_WRITE, SUFFER_BANK, SUFFER_OFFSET};
