//! Per-candidate pairing session
//!
//! Owns a claimed HID interface on one opened controller and issues the two
//! master-address control transfers. The interface is released when the
//! session is dropped, on every exit path.

use protocol::{
    BdAddr, GET_MASTER_REQUEST, MASTER_REPORT_VALUE, REPORT_LEN, SET_MASTER_REQUEST,
    decode_master_report, encode_master_report,
};
use rusb::{Context, Direction, Recipient, RequestType, request_type};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Timeout for the master-address control transfers (5 seconds)
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(5);

/// Session-level errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Interface claim failed (already in use, or kernel driver still bound)
    #[error("failed to claim interface {interface}: {source}")]
    Claim { interface: u8, source: rusb::Error },

    /// GET_REPORT transfer for the current master failed
    #[error("failed to read current master: {0}")]
    Read(#[source] rusb::Error),

    /// Device answered the read with a malformed report
    #[error("malformed master report: {0}")]
    Report(#[from] protocol::ProtocolError),

    /// SET_REPORT transfer for the new master failed
    #[error("failed to write master address: {0}")]
    Write(#[source] rusb::Error),

    /// Device accepted fewer bytes than the fixed report length
    #[error("short write: device accepted {sent} of {expected} bytes")]
    ShortWrite { sent: usize, expected: usize },
}

/// Raw control operations on an opened USB device
///
/// Implemented for `rusb::DeviceHandle`; test code substitutes a mock to
/// exercise the session state machine without hardware.
pub trait ControlPort {
    fn detach_kernel_driver(&mut self, interface: u8) -> rusb::Result<()>;
    fn claim_interface(&mut self, interface: u8) -> rusb::Result<()>;
    fn release_interface(&mut self, interface: u8) -> rusb::Result<()>;
    fn read_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> rusb::Result<usize>;
    fn write_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &[u8],
        timeout: Duration,
    ) -> rusb::Result<usize>;
}

impl ControlPort for rusb::DeviceHandle<Context> {
    fn detach_kernel_driver(&mut self, interface: u8) -> rusb::Result<()> {
        rusb::DeviceHandle::detach_kernel_driver(self, interface)
    }

    fn claim_interface(&mut self, interface: u8) -> rusb::Result<()> {
        rusb::DeviceHandle::claim_interface(self, interface)
    }

    fn release_interface(&mut self, interface: u8) -> rusb::Result<()> {
        rusb::DeviceHandle::release_interface(self, interface)
    }

    fn read_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> rusb::Result<usize> {
        rusb::DeviceHandle::read_control(self, request_type, request, value, index, buf, timeout)
    }

    fn write_control(
        &self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &[u8],
        timeout: Duration,
    ) -> rusb::Result<usize> {
        rusb::DeviceHandle::write_control(self, request_type, request, value, index, buf, timeout)
    }
}

/// An opened controller with its pairing interface claimed
pub struct PairingSession<P: ControlPort> {
    port: P,
    interface: u8,
}

impl<P: ControlPort> PairingSession<P> {
    /// Detach any bound kernel driver (best effort) and claim the interface.
    ///
    /// Detach failure is discarded by policy: on hosts without a default
    /// HID driver there is nothing to detach, and a genuine conflict shows
    /// up as a claim error right after.
    pub fn claim(mut port: P, interface: u8) -> Result<Self, SessionError> {
        if let Err(e) = port.detach_kernel_driver(interface) {
            debug!("no kernel driver detached from interface {}: {}", interface, e);
        }

        port.claim_interface(interface)
            .map_err(|source| SessionError::Claim { interface, source })?;
        debug!("claimed interface {}", interface);

        Ok(Self { port, interface })
    }

    /// Read the master address currently stored on the controller.
    pub fn current_master(&self) -> Result<BdAddr, SessionError> {
        let mut report = [0u8; REPORT_LEN];
        let len = self
            .port
            .read_control(
                request_type(Direction::In, RequestType::Class, Recipient::Interface),
                GET_MASTER_REQUEST,
                MASTER_REPORT_VALUE,
                u16::from(self.interface),
                &mut report,
                TRANSFER_TIMEOUT,
            )
            .map_err(SessionError::Read)?;

        debug!("read master report: {} bytes", len);
        Ok(decode_master_report(&report[..len])?)
    }

    /// Store `addr` as the controller's new master address.
    pub fn set_master(&self, addr: BdAddr) -> Result<(), SessionError> {
        let report = encode_master_report(addr);
        let sent = self
            .port
            .write_control(
                request_type(Direction::Out, RequestType::Class, Recipient::Interface),
                SET_MASTER_REQUEST,
                MASTER_REPORT_VALUE,
                u16::from(self.interface),
                &report,
                TRANSFER_TIMEOUT,
            )
            .map_err(SessionError::Write)?;

        if sent != REPORT_LEN {
            return Err(SessionError::ShortWrite {
                sent,
                expected: REPORT_LEN,
            });
        }

        debug!("wrote master report for {}", addr);
        Ok(())
    }
}

impl<P: ControlPort> Drop for PairingSession<P> {
    fn drop(&mut self) {
        if let Err(e) = self.port.release_interface(self.interface) {
            warn!("failed to release interface {}: {}", self.interface, e);
        }
    }
}
