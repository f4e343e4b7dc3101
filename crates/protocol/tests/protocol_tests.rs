//! Integration tests for the pairing protocol crate
//!
//! Exercises the address text round-trip and the master report codec
//! against the fixed wire layout.

use proptest::prelude::*;
use protocol::{
    BdAddr, ProtocolError, REPORT_LEN, decode_master_report, encode_master_report,
};

#[test]
fn report_decode_reproduces_payload_tail() {
    let report = [0x5a, 0xa5, 0xde, 0xad, 0xbe, 0xef, 0x00, 0x42];
    let addr = decode_master_report(&report).expect("Failed to decode");
    assert_eq!(&encode_master_report(addr)[2..], &report[2..]);
}

#[test]
fn report_is_fixed_length() {
    let addr = BdAddr([0; 6]);
    assert_eq!(encode_master_report(addr).len(), REPORT_LEN);
}

#[test]
fn parse_rejects_garbage_without_partial_address() {
    for input in ["", "garbage", "aa:bb:cc:dd:ee", "aa-bb-cc-dd-ee-ff", "::::::"] {
        assert!(
            input.parse::<BdAddr>().is_err(),
            "expected parse error for {:?}",
            input
        );
    }
}

#[test]
fn decode_short_reports_error_for_every_length() {
    for len in 0..REPORT_LEN {
        let buf = vec![0u8; len];
        assert!(matches!(
            decode_master_report(&buf),
            Err(ProtocolError::ShortReport { expected: 8, .. })
        ));
    }
}

proptest! {
    #[test]
    fn text_roundtrip(bytes in prop::array::uniform6(any::<u8>())) {
        let addr = BdAddr(bytes);
        let parsed: BdAddr = addr.to_string().parse().unwrap();
        prop_assert_eq!(parsed, addr);
    }

    #[test]
    fn report_roundtrip(bytes in prop::array::uniform6(any::<u8>())) {
        let addr = BdAddr(bytes);
        prop_assert_eq!(decode_master_report(&encode_master_report(addr)).unwrap(), addr);
    }
}
