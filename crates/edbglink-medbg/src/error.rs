use edbglink_protocol::ProtocolError;

/// Errors raised by the mEDBG config sub-protocol.
#[derive(Debug, thiserror::Error)]
pub enum MEdbgError {
    /// Engine-level failure: transport fault, remote rejection or framing
    /// mismatch.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Config writes are capped by the handler's fixed frame size; checked
    /// before any frame is sent.
    #[error("config write too long ({len} bytes, max {max})")]
    ConfigTooLong { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, MEdbgError>;
