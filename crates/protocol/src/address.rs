//! Bluetooth device address type
//!
//! A `BdAddr` is the 6-byte hardware address of a Bluetooth adapter, stored
//! most-significant byte first and rendered as six lowercase 2-digit hex
//! groups joined by colons (`aa:bb:cc:dd:ee:ff`).

use crate::error::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// Bluetooth device address (bd_addr), most-significant byte first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BdAddr(pub [u8; 6]);

impl BdAddr {
    /// Raw address bytes, MSB first
    pub fn bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

impl FromStr for BdAddr {
    type Err = ProtocolError;

    /// Parse the canonical `%x:%x:%x:%x:%x:%x` shape.
    ///
    /// Each group is 1 or 2 hex digits; exactly six groups are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split(':').collect();
        if groups.len() != 6 {
            return Err(ProtocolError::WrongGroupCount {
                input: s.to_string(),
                groups: if s.is_empty() { 0 } else { groups.len() },
            });
        }

        let mut bytes = [0u8; 6];
        for (byte, group) in bytes.iter_mut().zip(groups) {
            *byte = u8::from_str_radix(group, 16).map_err(|_| ProtocolError::InvalidGroup {
                group: group.to_string(),
            })?;
        }

        Ok(BdAddr(bytes))
    }
}
