//! The AVR8 failure-code taxonomy.
//!
//! Codes in this namespace appear as the first payload byte of a FAILED
//! response from the AVR8 handler. The table is closed; codes outside it
//! are surfaced as a marked unknown, never a crash.

use edbglink_protocol::ErrorCatalog;

use crate::error::{Avr8Error, Result};

/// Failure code returned when an operation is issued in the wrong
/// physical-interface state (e.g. attach before activation).
pub const FAILURE_INVALID_PHYSICAL_STATE: u8 = 0x31;

pub(crate) const AVR8_FAILURES: &[(u8, &str)] = &[
    (0x00, "success"),
    (0x01, "debugWIRE physical error"),
    (0x02, "JTAGM failed to initialise"),
    (0x03, "JTAGM protocol error"),
    (0x04, "JTAG low-level error"),
    (0x05, "unsupported JTAGM version"),
    (0x06, "JTAG master timed out"),
    (0x07, "JTAG bit-banger timed out"),
    (0x08, "parity error on received data"),
    (0x09, "did not receive expected empty byte"),
    (0x0A, "PDI physical timed out"),
    (0x0B, "collision on physical level"),
    (0x0C, "PDI enable failed"),
    (0x10, "target interface error"),
    (0x11, "unexpected RESET condition"),
    (0x12, "target not found"),
    (0x13, "failure reading memory"),
    (0x14, "failure writing memory"),
    (0x17, "could not find OCD"),
    (0x18, "failed to enable OCD"),
    (0x20, "target failed to reply"),
    (0x21, "polling for a debug event timed out"),
    (0x22, "failed to break the target"),
    (0x23, "target in unexpected run state"),
    (0x30, "invalid configuration"),
    (FAILURE_INVALID_PHYSICAL_STATE, "invalid physical state"),
    (0x32, "illegal memory type"),
    (0x33, "illegal memory range"),
    (0x34, "operation not supported"),
    (0x35, "illegal parameter value"),
    (0x36, "illegal target ID"),
    (0x37, "clock value out of range"),
    (0x38, "operation timed out"),
    (0x39, "illegal address"),
];

/// The catalog handed to the engine at construction.
pub(crate) static AVR8_CATALOG: ErrorCatalog = ErrorCatalog::new(AVR8_FAILURES);

/// Translate an AVR8 failure code into its descriptive string.
///
/// A pure lookup, not a protocol operation. Unlike the engine's lenient
/// formatting of unmapped codes, a code entirely unknown to the taxonomy
/// is an error here.
pub fn error_as_string(code: u8) -> Result<&'static str> {
    AVR8_CATALOG
        .describe(code)
        .ok_or(Avr8Error::UnknownFailureCode(code))
}
