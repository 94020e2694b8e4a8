use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use pulse_logging::{pulse_trace, pulse_warn};

use crate::{PulseError, DEFAULT_CONNECT_TIMEOUT};

/// Sends one progress pulse: connect to `host:port`, then close at once.
///
/// No bytes are exchanged and nothing is retried. Each resolved address is
/// tried in turn until one accepts the connection.
pub fn try_signal_progress(
    host: &str,
    port: u16,
    connect_timeout: Duration,
) -> Result<(), PulseError> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|source| PulseError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?;

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, connect_timeout) {
            Ok(stream) => {
                drop(stream);
                pulse_trace!("pulse delivered to {}", addr);
                return Ok(());
            }
            Err(source) => last_error = Some(PulseError::Connect { addr, source }),
        }
    }

    Err(last_error.unwrap_or_else(|| PulseError::NoAddress {
        host: host.to_string(),
        port,
    }))
}

/// Sends one pulse, logging and swallowing any failure.
///
/// A lost pulse only makes the indicator lag; it must never fail the work
/// unit that sent it. Returns whether the pulse was delivered.
pub fn signal_progress(host: &str, port: u16) -> bool {
    deliver(host, port, DEFAULT_CONNECT_TIMEOUT)
}

fn deliver(host: &str, port: u16, connect_timeout: Duration) -> bool {
    match try_signal_progress(host, port, connect_timeout) {
        Ok(()) => true,
        Err(err) => {
            pulse_warn!("progress pulse lost: {}", err);
            false
        }
    }
}

/// Worker-side handle for a progress server running elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseWorker {
    host: String,
    port: u16,
    connect_timeout: Duration,
}

impl PulseWorker {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Reports one unit of progress. Failures are logged, never returned.
    pub fn increment(&self) -> bool {
        deliver(&self.host, self.port, self.connect_timeout)
    }

    /// Nothing to release: every pulse uses its own short-lived connection.
    pub fn done(&self) {}
}
