//! AVR8 debug/programming sub-protocol.
//!
//! The primary consumer of the JTAGICE3 protocol engine: physical-interface
//! activation, debug attach/detach, programming mode, chip erase, typed
//! memory access, execution control and breakpoint management for 8-bit AVR
//! targets.
//!
//! Every operation is a single command frame sent through an engine bound
//! to [`Handler::Avr8Generic`](edbglink_protocol::Handler::Avr8Generic).
//! The tool is authoritative for all session-state transitions; [`Avr8`]
//! keeps only an advisory record of what was last requested, exposed via
//! [`Avr8::session`] for diagnostics.

pub mod error;
pub mod failures;
pub mod protocol;
pub mod types;

pub use error::{Avr8Error, Result};
pub use failures::{error_as_string, FAILURE_INVALID_PHYSICAL_STATE};
pub use protocol::{Avr8, ExecutionState, SessionState, REGFILE_SIZE};
pub use types::{
    Avr8Command, ConfigParam, Context, EraseMode, Function, Memtype, OptionParam, PhysicalInterface,
    PhysicalParam, Variant,
};
