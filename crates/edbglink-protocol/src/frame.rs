//! Wire layout of JTAGICE3 command and response frames.
//!
//! A command body is `[command_id, protocol_version, operation_fields...]`.
//! The engine prepends a one-byte handler envelope before the frame reaches
//! the transport, and the response echoes it back:
//!
//! ```text
//! request:  ┌─────────────┬────────────┬──────────┬────────────────────┐
//!           │ Handler (1) │ Command (1)│ Version  │ Operation fields   │
//!           └─────────────┴────────────┴──────────┴────────────────────┘
//! response: ┌─────────────┬────────────┬───────────────────────────────┐
//!           │ Handler (1) │ Status (1) │ Response fields               │
//!           └─────────────┴────────────┴───────────────────────────────┘
//! ```
//!
//! Multi-byte numeric fields inside payloads are little-endian and 32 bits
//! wide unless an operation states otherwise.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{ProtocolError, Result};

/// Protocol version byte carried in every command frame. Only one version
/// exists in the family today.
pub const VERSION0: u8 = 0x00;

/// Parameter-store SET command, common to every handler.
pub const CMD_SET: u8 = 0x01;

/// Parameter-store GET command, common to every handler.
pub const CMD_GET: u8 = 0x02;

/// Server-side handler that interprets a frame.
///
/// An engine instance is bound to exactly one handler at construction and
/// never renegotiates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Handler {
    /// Tool discovery.
    Discovery = 0x00,
    /// Tool housekeeping (sign-on, power, firmware info).
    Housekeeping = 0x01,
    /// SPI programming.
    Spi = 0x11,
    /// Generic AVR8 debug/programming handler.
    Avr8Generic = 0x12,
    /// Generic AVR32 handler.
    Avr32Generic = 0x13,
    /// TPI programming.
    Tpi = 0x14,
    /// EDBG configuration handler.
    Edbg = 0x20,
}

impl Handler {
    /// The wire identifier for this handler.
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Status byte of a response frame. Exactly one status per response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Command acknowledged, nothing more to say.
    Ok,
    /// A list of items follows.
    List,
    /// A program-counter value follows.
    PcValue,
    /// Data follows.
    Data,
    /// The command failed; the first payload byte is the failure code.
    Failed,
    /// Handler-specific status outside the common set.
    Other(u8),
}

impl Status {
    /// Decode a status byte.
    pub fn from_byte(byte: u8) -> Status {
        match byte {
            0x80 => Status::Ok,
            0x81 => Status::List,
            0x83 => Status::PcValue,
            0x84 => Status::Data,
            0xA0 => Status::Failed,
            other => Status::Other(other),
        }
    }

    /// The wire encoding of this status.
    pub fn byte(self) -> u8 {
        match self {
            Status::Ok => 0x80,
            Status::List => 0x81,
            Status::PcValue => 0x83,
            Status::Data => 0x84,
            Status::Failed => 0xA0,
            Status::Other(other) => other,
        }
    }
}

/// A decoded response frame: one status code plus an opaque payload.
///
/// Responses live for the duration of a single call; nothing is buffered.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,
    pub payload: Bytes,
}

/// Encode a command frame: handler envelope followed by the command body.
pub fn encode_command(handler: Handler, body: &[u8], dst: &mut BytesMut) {
    dst.reserve(1 + body.len());
    dst.put_u8(handler.id());
    dst.put_slice(body);
}

/// Decode a response frame received on a connection bound to `handler`.
///
/// Validates and strips the handler envelope; the remainder is status plus
/// payload.
pub fn decode_response(handler: Handler, raw: &[u8]) -> Result<Response> {
    if raw.len() < 2 {
        return Err(ProtocolError::ShortResponse { len: raw.len() });
    }
    if raw[0] != handler.id() {
        return Err(ProtocolError::HandlerMismatch {
            expected: handler.id(),
            actual: raw[0],
        });
    }
    Ok(Response {
        status: Status::from_byte(raw[1]),
        payload: Bytes::copy_from_slice(&raw[2..]),
    })
}
