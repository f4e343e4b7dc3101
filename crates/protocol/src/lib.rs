//! Pairing protocol for SIXAXIS controllers
//!
//! This crate defines the host side of the SIXAXIS "pair to master" vendor
//! protocol: the Bluetooth device address type with its canonical text form,
//! and the codec for the 8-byte feature report that carries the paired
//! master address over USB.
//!
//! # Example
//!
//! ```
//! use protocol::{BdAddr, decode_master_report, encode_master_report};
//!
//! let addr: BdAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
//! let report = encode_master_report(addr);
//! assert_eq!(report, [0x01, 0x00, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
//!
//! let decoded = decode_master_report(&report).unwrap();
//! assert_eq!(decoded, addr);
//! ```

pub mod address;
pub mod error;
pub mod report;

pub use address::BdAddr;
pub use error::{ProtocolError, Result};
pub use report::{
    GET_MASTER_REQUEST, MASTER_REPORT_VALUE, REPORT_LEN, SET_MASTER_REQUEST, decode_master_report,
    encode_master_report,
};
