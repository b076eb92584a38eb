use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use sasang_instruments::get_instrument;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_INSTRUMENT: &str = "qsccii";

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub default_instrument: String,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset variables fall back to
    /// the defaults above.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr =
            lookup("SASANG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid SASANG_BIND_ADDR '{bind_addr}': {e}"))?;

        let data_dir = lookup("SASANG_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let default_instrument =
            lookup("SASANG_DEFAULT_INSTRUMENT").unwrap_or_else(|| DEFAULT_INSTRUMENT.to_string());
        if get_instrument(&default_instrument).is_none() {
            eyre::bail!(
                "SASANG_DEFAULT_INSTRUMENT names an unknown instrument: {default_instrument}"
            );
        }

        Ok(Self {
            bind_addr,
            data_dir,
            default_instrument,
        })
    }
}
