//! HTTP transport and the session that owns it.

use reqwest::{StatusCode, blocking};

/// Executes fully built requests.
///
/// Implemented for [`reqwest::blocking::Client`], which pools connections across calls.
pub trait Transport {
    /// Raw response handed back to the caller.
    type Response: TransportResponse;

    /// Send one request and wait for its response.
    fn execute(&self, request: blocking::Request) -> reqwest::Result<Self::Response>;

    /// Release pooled resources. Called once by [`Session`].
    fn close(&mut self) {}
}

/// Access to the status of a transport response.
pub trait TransportResponse {
    /// HTTP status of the response.
    fn status(&self) -> StatusCode;
}

impl Transport for blocking::Client {
    type Response = blocking::Response;

    fn execute(&self, request: blocking::Request) -> reqwest::Result<Self::Response> {
        blocking::Client::execute(self, request)
    }
}

impl TransportResponse for blocking::Response {
    fn status(&self) -> StatusCode {
        blocking::Response::status(self)
    }
}

/// Scoped owner of a transport.
///
/// The transport is closed exactly once: on [`Session::close`], or on drop if it was
/// never closed explicitly.
#[derive(Debug)]
pub struct Session<T: Transport> {
    closed: bool,
    transport: T,
}

impl<T: Transport> Session<T> {
    /// Take ownership of a transport.
    pub fn new(transport: T) -> Self {
        Self {
            closed: false,
            transport,
        }
    }

    /// The owned transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether the transport has been released.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the transport. Later calls are no-ops.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.transport.close();
        #[cfg(feature = "tracing")]
        tracing::debug!("airtable session closed");
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.close();
    }
}
