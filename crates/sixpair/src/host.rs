//! Host adapter address resolution
//!
//! Supplies the target master address: either the one given on the command
//! line, or the local adapter's own address queried from the Bluetooth
//! stack via `hcitool dev`.

use protocol::BdAddr;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Resolver errors
///
/// Both variants carry the remedial guidance in their message; the driver
/// treats any of them as fatal before the write is attempted.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(
        "unable to run `hcitool dev`: {0}\nPlease enable Bluetooth or specify an address manually."
    )]
    Spawn(#[from] std::io::Error),

    #[error(
        "unable to retrieve local bd_addr from `hcitool dev`.\nPlease enable Bluetooth or specify an address manually."
    )]
    NoAdapter,
}

/// Supplies the address the controllers should pair to
pub struct HostAddressResolver {
    override_addr: Option<BdAddr>,
}

impl HostAddressResolver {
    /// A resolver that prefers `override_addr` and falls back to the host stack
    pub fn new(override_addr: Option<BdAddr>) -> Self {
        Self { override_addr }
    }

    /// Resolve the target master address.
    pub fn resolve(&self) -> Result<BdAddr, ResolveError> {
        if let Some(addr) = self.override_addr {
            debug!("using address from command line: {}", addr);
            return Ok(addr);
        }

        let output = Command::new("hcitool").arg("dev").output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("hcitool dev output: {:?}", stdout);

        parse_hcitool_dev(&stdout).ok_or(ResolveError::NoAdapter)
    }
}

/// Extract the first adapter's address from `hcitool dev` output.
///
/// The output's first line is the `Devices:` header; the first adapter is
/// on the second line as `\thci0\t<bd_addr>`, so the address is that line's
/// second whitespace-delimited field.
fn parse_hcitool_dev(output: &str) -> Option<BdAddr> {
    output
        .lines()
        .nth(1)?
        .split_whitespace()
        .nth(1)?
        .parse()
        .ok()
}
