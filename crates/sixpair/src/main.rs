//! sixpair
//!
//! Reconfigures the paired Bluetooth master stored inside a SIXAXIS game
//! controller over USB, so the controller will subsequently connect
//! wirelessly to the given host adapter.

mod host;
mod logging;
mod usb;

use anyhow::{Context as _, Result};
use clap::Parser;
use host::HostAddressResolver;
use protocol::BdAddr;
use rusb::Context;
use tracing::{debug, warn};
use usb::{Candidate, PairingSession, find_candidates};

#[derive(Parser, Debug)]
#[command(name = "sixpair")]
#[command(
    author,
    version,
    about = "Pair SIXAXIS controllers to a Bluetooth master over USB"
)]
#[command(long_about = "
Finds every SIXAXIS controller attached over USB, shows the Bluetooth
master address each one is currently paired to, and stores a new one.

EXAMPLES:
    # Pair all attached controllers to the local Bluetooth adapter
    sixpair

    # Pair to an explicit master address
    sixpair 00:1a:7d:da:71:13

    # Run with debug logging
    sixpair --log-level debug
")]
struct Args {
    /// bd_addr of the master to pair to (defaults to the local adapter's)
    #[arg(value_name = "BD_ADDR")]
    bd_addr: Option<BdAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(&args.log_level)?;

    let resolver = HostAddressResolver::new(args.bd_addr);

    let context = Context::new().context("failed to initialize USB subsystem")?;
    let candidates = find_candidates(&context).context("USB device enumeration failed")?;

    if candidates.is_empty() {
        println!("No controller found on USB busses.");
        return Ok(());
    }

    debug!("processing {} candidate(s)", candidates.len());
    for candidate in &candidates {
        pair_controller(candidate, &resolver)?;
    }

    Ok(())
}

/// Run one pairing session against a matched controller interface.
///
/// The read of the current master is informational: a failure there is
/// logged and the write still happens. Every other failure aborts the run.
fn pair_controller(candidate: &Candidate, resolver: &HostAddressResolver) -> Result<()> {
    let handle = candidate.device.open().with_context(|| {
        format!(
            "failed to open device on bus {:03} address {:03}",
            candidate.device.bus_number(),
            candidate.device.address()
        )
    })?;

    let session = PairingSession::claim(handle, candidate.interface)?;

    match session.current_master() {
        Ok(addr) => println!("Current Bluetooth master: {}", addr),
        Err(e) => warn!("could not read current master: {}", e),
    }

    let target = resolver.resolve()?;
    println!("Setting master bd_addr to {}", target);
    session.set_master(target)?;

    Ok(())
}
