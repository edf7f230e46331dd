use edbglink_protocol::ProtocolError;

/// Errors raised by the AVR8 sub-protocol.
///
/// The non-protocol variants are local precondition violations, detected
/// before any frame is sent.
#[derive(Debug, thiserror::Error)]
pub enum Avr8Error {
    /// Engine-level failure: transport fault, remote rejection or framing
    /// mismatch.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Register-file writes must cover the whole 32-byte region.
    #[error("register file must be exactly 32 bytes, got {got}")]
    RegfileLength { got: usize },

    /// A memory read returned a different number of bytes than requested.
    #[error("memory read returned {got} bytes, requested {requested}")]
    ReadLength { requested: usize, got: usize },

    /// Physical activation returned a payload that is neither empty nor a
    /// 4-byte device ID.
    #[error("device ID payload has unexpected length {0}")]
    DeviceIdLength(usize),

    /// A failure code with no entry in the AVR8 taxonomy.
    #[error("unknown AVR8 failure code 0x{0:02X}")]
    UnknownFailureCode(u8),
}

impl Avr8Error {
    /// The numeric failure code, if this wraps a remote command failure.
    pub fn failure_code(&self) -> Option<u8> {
        match self {
            Avr8Error::Protocol(inner) => inner.failure_code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Avr8Error>;
