use bytes::{Bytes, BytesMut};
use tracing::trace;

use edbglink_transport::Transport;

use crate::catalog::ErrorCatalog;
use crate::error::{ProtocolError, Result};
use crate::frame::{decode_response, encode_command, Handler, Response, Status, CMD_GET, CMD_SET, VERSION0};

/// The JTAGICE3 frame codec and correlator.
///
/// Owns its transport connection exclusively and speaks on behalf of one
/// handler. Every call is strictly synchronous: one command out, one
/// blocking receive for the matching response, no queueing and no retries.
/// Correlation is implicit — the transport guarantees the next report
/// received is the response to the last report sent.
pub struct Jtagice3<T> {
    transport: T,
    handler: Handler,
    catalog: ErrorCatalog,
    buf: BytesMut,
}

impl<T: Transport> Jtagice3<T> {
    /// Bind an engine to a transport connection, a handler and the
    /// handler's failure-code catalog. The binding is permanent.
    pub fn new(transport: T, handler: Handler, catalog: ErrorCatalog) -> Self {
        Self {
            transport,
            handler,
            catalog,
            buf: BytesMut::with_capacity(64),
        }
    }

    /// The handler this engine is bound to.
    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// Consume the engine and return the transport connection.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send a command body and block until the correlated response arrives.
    ///
    /// The body is `[command_id, protocol_version, operation_fields...]`;
    /// the handler envelope is added here.
    pub fn command_response(&mut self, body: &[u8]) -> Result<Response> {
        self.buf.clear();
        encode_command(self.handler, body, &mut self.buf);
        trace!(handler = ?self.handler, len = body.len(), "sending command frame");
        self.transport.send(&self.buf)?;
        let raw = self.transport.receive()?;
        let response = decode_response(self.handler, &raw)?;
        trace!(status = ?response.status, len = response.payload.len(), "received response frame");
        Ok(response)
    }

    /// Validate an acknowledgement-style response and unwrap its payload.
    ///
    /// Expects [`Status::Ok`]; see [`check_response_expecting`] for
    /// data-bearing responses.
    ///
    /// [`check_response_expecting`]: Jtagice3::check_response_expecting
    pub fn check_response(&self, response: Response) -> Result<Bytes> {
        self.check_response_expecting(response, Status::Ok)
    }

    /// Validate a response against an expected status and unwrap its
    /// payload.
    ///
    /// A FAILED response becomes [`ProtocolError::CommandFailed`] with its
    /// embedded failure code resolved through the catalog; any other
    /// unexpected status is a [`ProtocolError::UnexpectedStatus`].
    pub fn check_response_expecting(&self, response: Response, expected: Status) -> Result<Bytes> {
        if response.status == Status::Failed {
            return Err(self.remote_failure(&response.payload));
        }
        self.peel_response(response, expected)
    }

    /// Unwrap the payload of a response whose status must match `expected`,
    /// without the FAILED decoding of [`check_response`].
    ///
    /// [`check_response`]: Jtagice3::check_response
    pub fn peel_response(&self, response: Response, expected: Status) -> Result<Bytes> {
        if response.status != expected {
            return Err(ProtocolError::UnexpectedStatus {
                expected,
                actual: response.status,
            });
        }
        Ok(response.payload)
    }

    /// Build the error for a FAILED response payload.
    pub fn remote_failure(&self, payload: &[u8]) -> ProtocolError {
        let Some(&code) = payload.first() else {
            return ProtocolError::MissingFailureCode;
        };
        ProtocolError::CommandFailed {
            code,
            description: self.catalog.describe_or_unknown(code),
        }
    }

    // Parameter store accessor. Every handler exposes the same SET/GET
    // shape over its own context/parameter namespace.

    /// Set a single-byte parameter within a context.
    pub fn set_byte(&mut self, context: u8, parameter: u8, value: u8) -> Result<()> {
        self.set_parameters(context, parameter, &[value])
    }

    /// Set a multi-byte parameter within a context.
    ///
    /// Frame shape: `[SET, version, context, parameter, length, data...]`.
    pub fn set_parameters(&mut self, context: u8, parameter: u8, data: &[u8]) -> Result<()> {
        if data.len() > u8::MAX as usize {
            return Err(ProtocolError::ParameterTooLong { len: data.len() });
        }
        let mut body = Vec::with_capacity(5 + data.len());
        body.extend_from_slice(&[CMD_SET, VERSION0, context, parameter, data.len() as u8]);
        body.extend_from_slice(data);
        let response = self.command_response(&body)?;
        self.check_response(response)?;
        Ok(())
    }

    /// Get a single-byte parameter within a context.
    pub fn get_byte(&mut self, context: u8, parameter: u8) -> Result<u8> {
        let data = self.get_parameters(context, parameter, 1)?;
        Ok(data[0])
    }

    /// Get a multi-byte parameter within a context.
    ///
    /// Frame shape: `[GET, version, context, parameter, count]`; the Data
    /// payload must be exactly `count` bytes.
    pub fn get_parameters(&mut self, context: u8, parameter: u8, count: u8) -> Result<Bytes> {
        let response = self.command_response(&[CMD_GET, VERSION0, context, parameter, count])?;
        let payload = self.check_response_expecting(response, Status::Data)?;
        if payload.len() != count as usize {
            return Err(ProtocolError::ParameterLength {
                requested: count as usize,
                got: payload.len(),
            });
        }
        Ok(payload)
    }
}
