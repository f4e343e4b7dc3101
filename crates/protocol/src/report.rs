//! Master-address feature report codec
//!
//! The SIXAXIS stores its paired master address behind a class-scoped,
//! interface-recipient control transfer pair: HID GET_REPORT (0x01) reads
//! it, HID SET_REPORT (0x09) writes it, both addressing feature report
//! 0xf5 (wValue 0x03f5). The data stage is a fixed 8-byte buffer with the
//! address in bytes 2..8.

use crate::address::BdAddr;
use crate::error::{ProtocolError, Result};

/// bRequest for reading the stored master address (HID GET_REPORT)
pub const GET_MASTER_REQUEST: u8 = 0x01;

/// bRequest for writing a new master address (HID SET_REPORT)
pub const SET_MASTER_REQUEST: u8 = 0x09;

/// wValue selecting the pairing feature report (report type 3, report id 0xf5)
pub const MASTER_REPORT_VALUE: u16 = 0x03f5;

/// Fixed length of the master-address report
pub const REPORT_LEN: usize = 8;

/// Offset of the address within the report
const ADDR_OFFSET: usize = 2;

/// Decode the address from a master report read off the device.
///
/// Bytes 0..2 are a device-specific header and are ignored. Anything
/// shorter than the fixed report length is an error.
pub fn decode_master_report(report: &[u8]) -> Result<BdAddr> {
    if report.len() < REPORT_LEN {
        return Err(ProtocolError::ShortReport {
            expected: REPORT_LEN,
            actual: report.len(),
        });
    }

    let mut bytes = [0u8; 6];
    bytes.copy_from_slice(&report[ADDR_OFFSET..REPORT_LEN]);
    Ok(BdAddr(bytes))
}

/// Encode the report that sets `addr` as the new master.
///
/// Layout: `[0x01, 0x00, addr[0], .., addr[5]]`.
pub fn encode_master_report(addr: BdAddr) -> [u8; REPORT_LEN] {
    let mut report = [0u8; REPORT_LEN];
    report[0] = 0x01;
    report[1] = 0x00;
    report[ADDR_OFFSET..].copy_from_slice(addr.bytes());
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_skips_header() {
        let report = [0x00, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
        let addr = decode_master_report(&report).unwrap();
        assert_eq!(addr.to_string(), "11:22:33:44:55:66");
    }

    #[test]
    fn test_decode_ignores_header_content() {
        let report = [0xff, 0xee, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
        let addr = decode_master_report(&report).unwrap();
        assert_eq!(addr, BdAddr([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]));
    }

    #[test]
    fn test_decode_rejects_short_report() {
        let err = decode_master_report(&[0x00, 0x00, 0x11]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::ShortReport {
                expected: 8,
                actual: 3
            }
        );
    }

    #[test]
    fn test_encode_layout() {
        let addr: BdAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        let report = encode_master_report(addr);
        assert_eq!(report, [0x01, 0x00, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let addr = BdAddr([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
        assert_eq!(decode_master_report(&encode_master_report(addr)).unwrap(), addr);
    }
}
