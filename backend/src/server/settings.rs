//! Listener settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Values controlling where the HTTP listener binds.
///
/// Read from the `HOST` and `PORT` environment variables, a configuration
/// file, or command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the socket address, falling back to all interfaces.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse::<IpAddr>().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid HOST {raw:?}: {e}"),
                )
            })?,
        };
        Ok(SocketAddr::new(host, self.port))
    }
}
