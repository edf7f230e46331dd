use crate::frame::Status;

/// Errors raised by the protocol engine.
///
/// Remote command failures ([`ProtocolError::CommandFailed`]) are an
/// expected outcome of normal operation (the tool rejects sequences it
/// considers invalid) and carry the numeric failure code so callers can
/// branch on it; transport faults and framing mismatches are genuine
/// faults. Nothing in this layer retries.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The transport could not send or receive a report.
    #[error("transport error: {0}")]
    Transport(#[from] edbglink_transport::TransportError),

    /// The tool answered FAILED. The description is resolved from the
    /// handler's failure-code catalog; unmapped codes are formatted as
    /// `unknown error code 0xNN`.
    #[error("remote command failed: {description} (code 0x{code:02X})")]
    CommandFailed { code: u8, description: String },

    /// The response status is not the one expected for the issued command.
    /// Indicates a framing/version bug or malformed tool firmware.
    #[error("unexpected response status (expected {expected:?}, got {actual:?})")]
    UnexpectedStatus { expected: Status, actual: Status },

    /// The response was addressed to a different handler than the one this
    /// connection is bound to.
    #[error("response for handler 0x{actual:02X} on a connection bound to 0x{expected:02X}")]
    HandlerMismatch { expected: u8, actual: u8 },

    /// The response frame is too short to carry a status byte.
    #[error("response frame too short ({len} bytes)")]
    ShortResponse { len: usize },

    /// A FAILED response arrived without an embedded failure code.
    #[error("FAILED response carried no failure code")]
    MissingFailureCode,

    /// A parameter read returned a different number of bytes than requested.
    #[error("parameter read returned {got} bytes, requested {requested}")]
    ParameterLength { requested: usize, got: usize },

    /// A parameter write exceeds the one-byte length field of a SET frame.
    #[error("parameter value too long ({len} bytes, max 255)")]
    ParameterTooLong { len: usize },
}

impl ProtocolError {
    /// The numeric failure code, if this is a remote command failure.
    ///
    /// Lets callers branch on expected rejections (e.g. invalid physical
    /// state) without string matching.
    pub fn failure_code(&self) -> Option<u8> {
        match self {
            ProtocolError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
