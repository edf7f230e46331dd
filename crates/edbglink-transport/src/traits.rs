use crate::error::Result;

/// A point-to-point connection to a physically attached debug tool.
///
/// Implementations exchange opaque byte reports, blocking on each call.
/// The protocol engine relies on a strict request/response contract: every
/// report sent is answered by exactly one report received, in order, with
/// nothing else interleaved. A transport that reorders or drops reports
/// without signalling an error breaks response correlation; the engine does
/// not detect this.
///
/// A connection is owned by exactly one protocol instance for its lifetime
/// and must not be shared across threads.
pub trait Transport {
    /// Send one report to the tool (blocking).
    fn send(&mut self, report: &[u8]) -> Result<()>;

    /// Receive one report from the tool (blocking).
    fn receive(&mut self) -> Result<Vec<u8>>;

    /// Send one report and receive its response (blocking).
    fn exchange(&mut self, report: &[u8]) -> Result<Vec<u8>> {
        self.send(report)?;
        self.receive()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, report: &[u8]) -> Result<()> {
        (**self).send(report)
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        (**self).receive()
    }
}
