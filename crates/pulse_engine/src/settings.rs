use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// How long one accept attempt may block before the stop flag is rechecked.
pub const DEFAULT_ACCEPT_TIMEOUT: Duration = Duration::from_millis(100);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Interface the progress listener binds to; the port is always ephemeral.
    pub bind_address: IpAddr,
    pub accept_timeout: Duration,
    /// Used by workers created from these settings.
    pub connect_timeout: Duration,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            accept_timeout: DEFAULT_ACCEPT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ServerSettings {
    /// Settings that only accept pulses from this machine.
    pub fn loopback() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            ..Self::default()
        }
    }
}
