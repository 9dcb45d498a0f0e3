//! Data types for the LP8860 driver.

use crate::registers::addr;

/// LED output clusters of the LP8860.
///
/// Cluster 1 drives the display string with a 16-bit brightness range and a
/// two-byte current limit; clusters 2-4 are auxiliary strings with a 13-bit
/// brightness range and a single current byte each.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
    Cl1,
    Cl2,
    Cl3,
    Cl4,
}

impl Channel {
    /// Auxiliary clusters sharing the 13-bit brightness range.
    pub const AUX: [Channel; 3] = [Channel::Cl2, Channel::Cl3, Channel::Cl4];

    /// Brightness MSB register for this cluster.
    pub const fn brightness_msb(self) -> u8 {
        match self {
            Channel::Cl1 => addr::CL1_BRT_MSB,
            Channel::Cl2 => addr::CL2_BRT_MSB,
            Channel::Cl3 => addr::CL3_BRT_MSB,
            Channel::Cl4 => addr::CL4_BRT_MSB,
        }
    }

    /// Brightness LSB register for this cluster.
    pub const fn brightness_lsb(self) -> u8 {
        match self {
            Channel::Cl1 => addr::CL1_BRT_LSB,
            Channel::Cl2 => addr::CL2_BRT_LSB,
            Channel::Cl3 => addr::CL3_BRT_LSB,
            Channel::Cl4 => addr::CL4_BRT_LSB,
        }
    }
}

/// Raw fault snapshot from the FAULT and LED_FAULT registers.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Faults {
    /// FAULT register (0x0F) contents.
    pub chip: u8,
    /// LED_FAULT register (0x10) contents, one bit per LED string.
    pub led: u8,
}

impl Faults {
    /// True when either register reports a fault.
    pub fn any(&self) -> bool {
        self.chip != 0 || self.led != 0
    }
}
