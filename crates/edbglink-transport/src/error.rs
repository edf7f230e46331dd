/// Errors that can occur on a tool transport connection.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// An I/O error occurred while exchanging reports with the tool.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tool disconnected before a report could be exchanged.
    #[error("tool disconnected")]
    Disconnected,

    /// No response report arrived within the transport's deadline.
    #[error("receive timed out")]
    Timeout,

    /// The outgoing report exceeds the negotiated packet size.
    #[error("report too large ({size} bytes, max {max})")]
    ReportTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, TransportError>;
