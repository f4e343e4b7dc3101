//! Controller discovery
//!
//! Walks every configuration, interface, and alt-setting of every attached
//! USB device and yields a candidate for each alt-setting that looks like
//! the HID interface of a SIXAXIS controller. Traversal order follows the
//! host USB stack's own device ordering.

use rusb::{Context, Device, UsbContext};
use tracing::{debug, trace};

/// Sony Corp. vendor ID
pub const SIXAXIS_VENDOR_ID: u16 = 0x054c;

/// SIXAXIS / DualShock 3 product ID
pub const SIXAXIS_PRODUCT_ID: u16 = 0x0268;

/// bInterfaceClass for HID
pub const HID_INTERFACE_CLASS: u8 = 3;

/// One matched (device, interface) pair
///
/// If a controller exposes several matching alt-settings of the same
/// interface, each match is yielded as its own candidate and processed
/// independently, matching the device family's established pairing flow.
pub struct Candidate {
    /// The matched device
    pub device: Device<Context>,
    /// bInterfaceNumber of the matched HID interface
    pub interface: u8,
}

/// Whether an alt-setting belongs to a SIXAXIS pairing interface
fn matches_sixaxis(vendor_id: u16, product_id: u16, interface_class: u8) -> bool {
    vendor_id == SIXAXIS_VENDOR_ID
        && product_id == SIXAXIS_PRODUCT_ID
        && interface_class == HID_INTERFACE_CLASS
}

/// Enumerate all attached controllers
///
/// Errors from the device list or descriptor reads propagate to the caller;
/// an empty result is not an error.
pub fn find_candidates(context: &Context) -> Result<Vec<Candidate>, rusb::Error> {
    let mut candidates = Vec::new();

    for device in context.devices()?.iter() {
        let descriptor = device.device_descriptor()?;
        trace!(
            "bus {:03} device {:03}: {:04x}:{:04x}",
            device.bus_number(),
            device.address(),
            descriptor.vendor_id(),
            descriptor.product_id()
        );

        for config_index in 0..descriptor.num_configurations() {
            let config = device.config_descriptor(config_index)?;

            for interface in config.interfaces() {
                for alt in interface.descriptors() {
                    if matches_sixaxis(
                        descriptor.vendor_id(),
                        descriptor.product_id(),
                        alt.class_code(),
                    ) {
                        debug!(
                            "controller on bus {:03} device {:03}, interface {}, alt {}",
                            device.bus_number(),
                            device.address(),
                            alt.interface_number(),
                            alt.setting_number()
                        );
                        candidates.push(Candidate {
                            device: device.clone(),
                            interface: alt.interface_number(),
                        });
                    }
                }
            }
        }
    }

    debug!("enumeration found {} candidate(s)", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_sixaxis_hid_interface() {
        assert!(matches_sixaxis(0x054c, 0x0268, 3));
    }

    #[test]
    fn test_rejects_wrong_vendor() {
        assert!(!matches_sixaxis(0x046d, 0x0268, 3));
    }

    #[test]
    fn test_rejects_wrong_product() {
        assert!(!matches_sixaxis(0x054c, 0x05c4, 3));
    }

    #[test]
    fn test_rejects_non_hid_class() {
        // Audio class on the same VID:PID must not match
        assert!(!matches_sixaxis(0x054c, 0x0268, 1));
        assert!(!matches_sixaxis(0x054c, 0x0268, 0));
    }

    #[test]
    fn test_simulated_topology_yields_one_candidate() {
        // One controller HID alt-setting among unrelated alt-settings
        let alt_settings = [
            (0x1d6b, 0x0002, 9u8),
            (0x054c, 0x0268, 3u8),
            (0x046d, 0xc52b, 3u8),
        ];
        let matched: Vec<_> = alt_settings
            .iter()
            .filter(|(vid, pid, class)| matches_sixaxis(*vid, *pid, *class))
            .collect();
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_duplicate_alt_settings_are_not_deduplicated() {
        // Two matching alt-settings of the same interface yield two candidates
        let alt_settings = [(0x054c, 0x0268, 3u8), (0x054c, 0x0268, 3u8)];
        let matched = alt_settings
            .iter()
            .filter(|(vid, pid, class)| matches_sixaxis(*vid, *pid, *class))
            .count();
        assert_eq!(matched, 2);
    }
}
