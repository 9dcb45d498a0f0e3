//! Register map and constants for the LP8860.
//! Addresses and the EEPROM image follow the datasheet register table.

/// Fixed 7-bit I2C address of the LP8860.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x2D;

/// ID register value read back from a dead or absent device.
pub const INVALID_ID: u8 = 0x00;

/// Largest payload accepted for a single block write. Matches the SMBus
/// block-transfer limit enforced by Linux bus drivers.
pub const MAX_TRANSFER_SIZE: usize = 32;

/// Register addresses (7-bit).
pub mod addr {
    /// Display cluster 1 brightness, 16-bit MSB/LSB pair.
    pub const CL1_BRT_MSB: u8 = 0x00;
    pub const CL1_BRT_LSB: u8 = 0x01;
    /// Display cluster 1 current limit, 12-bit MSB/LSB pair.
    pub const CL1_CURR_MSB: u8 = 0x02;
    pub const CL1_CURR_LSB: u8 = 0x03;
    /// Clusters 2-4: 13-bit brightness pairs plus a single current byte each.
    pub const CL2_BRT_MSB: u8 = 0x04;
    pub const CL2_BRT_LSB: u8 = 0x05;
    pub const CL2_CURRENT: u8 = 0x06;
    pub const CL3_BRT_MSB: u8 = 0x07;
    pub const CL3_BRT_LSB: u8 = 0x08;
    pub const CL3_CURRENT: u8 = 0x09;
    pub const CL4_BRT_MSB: u8 = 0x0A;
    pub const CL4_BRT_LSB: u8 = 0x0B;
    pub const CL4_CURRENT: u8 = 0x0C;
    /// Device configuration.
    pub const CONFIG: u8 = 0x0D;
    /// Operating status.
    pub const STATUS: u8 = 0x0E;
    /// Latched fault summary.
    pub const FAULT: u8 = 0x0F;
    /// Per-string LED fault bits.
    pub const LED_FAULT: u8 = 0x10;
    /// Write-to-clear command register for latched faults.
    pub const FAULT_CLEAR: u8 = 0x11;
    /// Device identification.
    pub const ID: u8 = 0x12;
    /// Die temperature sensor, MSB/LSB pair.
    pub const TEMP_MSB: u8 = 0x13;
    pub const TEMP_LSB: u8 = 0x14;
    /// Measured display LED current readback.
    pub const DISP_LED_CURR_MSB: u8 = 0x15;
    pub const DISP_LED_CURR_LSB: u8 = 0x16;
    /// Measured display LED PWM readback.
    pub const DISP_LED_PWM_MSB: u8 = 0x17;
    pub const DISP_LED_PWM_LSB: u8 = 0x18;
    /// EEPROM load/program command register.
    pub const EEPROM_CTRL: u8 = 0x19;
    /// EEPROM lock/unlock key register.
    pub const EEPROM_UNLOCK: u8 = 0x1A;
    /// First register of the 25-byte EEPROM shadow block (0x60..=0x78).
    pub const EEPROM_START: u8 = 0x60;
}

/// Brightness domain exposed to callers, in duty percent.
pub const BRIGHTNESS_MIN_PERCENT: u8 = 0;
pub const BRIGHTNESS_MAX_PERCENT: u8 = 100;

/// Full-scale brightness codes. Cluster 1 carries a 16-bit range; clusters
/// 2-4 carry a 13-bit range.
pub const CL1_BRIGHTNESS_MAX: u16 = 0xFFFF;
pub const AUX_BRIGHTNESS_MAX: u16 = 0x1FFF;

/// Maximum current-limit codes (cluster 1 pair, clusters 2-4 single byte).
pub const CL1_CURRENT_MAX: u16 = 0x0FFF;
pub const AUX_CURRENT_MAX: u8 = 0xFF;

/// Unlock key, written one byte at a time to [`addr::EEPROM_UNLOCK`].
pub const EEPROM_UNLOCK_CODES: [u8; 3] = [0x08, 0xBA, 0xEF];
/// Value written to [`addr::EEPROM_UNLOCK`] to re-lock the array.
pub const EEPROM_LOCK: u8 = 0x00;
/// Command written to [`addr::FAULT_CLEAR`] to reset latched faults.
pub const CLEAR_FAULTS: u8 = 0x01;

/// Settle time after commanding an EEPROM load into the shadow registers.
pub const EEPROM_LOAD_MS: u32 = 100;
/// Settle time after commanding an EEPROM program cycle.
pub const EEPROM_PROGRAM_MS: u32 = 200;

/// Calibration/configuration image for the EEPROM block at 0x60..=0x78.
pub const EEPROM_TABLE: [u8; 25] = [
    0xEF, 0xFF, 0xDC, 0xAE, 0x5F, 0xE5, 0xF2, 0x77,
    0x77, 0x71, 0x3F, 0xB7, 0x17, 0xEF, 0xB0, 0x87,
    0xCF, 0x72, 0xC5, 0xDE, 0x35, 0x06, 0xDE, 0xFF,
    0x3E,
];

bitflags::bitflags! {
    /// EEPROM_CTRL register bits (0x19).
    pub struct EepromCtrl: u8 {
        /// Bit 0: latch stored EEPROM contents into the shadow registers.
        const LOAD = 1 << 0;
        /// Bit 1: burn the shadow registers into the EEPROM array.
        const PROGRAM = 1 << 1;
    }
}

/// Convert a duty percent to the cluster 1 brightness code (16-bit range).
/// Clamps to 100 %.
pub fn percent_to_cl1_brightness(percent: u8) -> u16 {
    let percent = percent.min(BRIGHTNESS_MAX_PERCENT) as u32;
    ((CL1_BRIGHTNESS_MAX as u32 * percent) / 100) as u16
}

/// Convert a duty percent to the cluster 2-4 brightness code (13-bit range).
/// Clamps to 100 %.
pub fn percent_to_aux_brightness(percent: u8) -> u16 {
    let percent = percent.min(BRIGHTNESS_MAX_PERCENT) as u32;
    ((AUX_BRIGHTNESS_MAX as u32 * percent) / 100) as u16
}

/// Convert a cluster 1 brightness readback to percent.
///
/// The chip-reported scaling divides full scale by the register value, so
/// readbacks below full scale map to more than 100 %. A zeroed register
/// returns 0 rather than dividing by zero.
pub fn cl1_brightness_to_percent(code: u16) -> u32 {
    if code == 0 {
        return 0;
    }
    (100 * CL1_BRIGHTNESS_MAX as u32) / code as u32
}
