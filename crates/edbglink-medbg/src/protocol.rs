//! Config bank access.

use bytes::Bytes;
use tracing::debug;

use edbglink_protocol::{ErrorCatalog, Handler, Jtagice3};
use edbglink_transport::Transport;

use crate::error::{MEdbgError, Result};

/// Largest config write the handler accepts in one frame.
pub const MAX_CONFIG_WRITE: usize = 32;

/// Config banks live at this offset in the parameter-context namespace.
const CONFIG_BANK_BASE: u8 = 0x10;

/// Bank holding the SUFFER register.
pub const SUFFER_BANK: u8 = 1;

/// Offset of the SUFFER register within its bank.
pub const SUFFER_OFFSET: u8 = 0x20;

/// The mEDBG configuration sub-protocol.
///
/// Two operations over the shared engine: bounded config reads and writes.
pub struct MEdbg<T> {
    engine: Jtagice3<T>,
}

impl<T: Transport> MEdbg<T> {
    /// Take exclusive ownership of a tool connection and speak mEDBG on it.
    ///
    /// The EDBG handler publishes no failure-code table; codes surface as
    /// marked unknowns.
    pub fn new(transport: T) -> Self {
        Self {
            engine: Jtagice3::new(transport, Handler::Edbg, ErrorCatalog::EMPTY),
        }
    }

    /// Consume the instance and return the transport connection.
    pub fn into_transport(self) -> T {
        self.engine.into_transport()
    }

    /// Read `length` bytes from a 512-byte config bank.
    pub fn read_config(&mut self, bank: u8, offset: u8, length: u8) -> Result<Bytes> {
        debug!(bank, offset, length, "reading config");
        let data = self
            .engine
            .get_parameters(bank + CONFIG_BANK_BASE, offset, length)?;
        Ok(data)
    }

    /// Write bytes into a 512-byte config bank.
    ///
    /// Writes over [`MAX_CONFIG_WRITE`] bytes fail locally, without a
    /// round trip.
    pub fn write_config(&mut self, bank: u8, offset: u8, data: &[u8]) -> Result<()> {
        if data.len() > MAX_CONFIG_WRITE {
            return Err(MEdbgError::ConfigTooLong {
                len: data.len(),
                max: MAX_CONFIG_WRITE,
            });
        }
        debug!(bank, offset, len = data.len(), "writing config");
        self.engine
            .set_parameters(bank + CONFIG_BANK_BASE, offset, data)?;
        Ok(())
    }
}
