use std::io;
use std::net::SocketAddr;

use pulse_core::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid session: {0}")]
    InvalidSession(#[from] SessionError),
    #[error("failed to bind progress listener: {0}")]
    Bind(#[source] io::Error),
    #[error("failed to start accept runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn accept thread: {0}")]
    Spawn(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum PulseError {
    #[error("could not resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
    #[error("{host}:{port} resolved to no addresses")]
    NoAddress { host: String, port: u16 },
    #[error("connect to {addr} failed: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}
