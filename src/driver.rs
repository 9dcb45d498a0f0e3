//! Blocking driver for the LP8860 backlight controller.
//! All bus traffic goes through the register helpers at the bottom; the
//! EEPROM settle times block through the injected delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;
use embedded_hal::i2c::I2c;

use crate::data_types::{Channel, Faults};
use crate::error::Error;
use crate::registers::{
    AUX_CURRENT_MAX, BRIGHTNESS_MAX_PERCENT, BRIGHTNESS_MIN_PERCENT, CL1_CURRENT_MAX,
    CLEAR_FAULTS, DEFAULT_I2C_ADDRESS, EEPROM_LOAD_MS, EEPROM_LOCK, EEPROM_PROGRAM_MS,
    EEPROM_TABLE, EEPROM_UNLOCK_CODES, EepromCtrl, INVALID_ID, MAX_TRANSFER_SIZE, addr,
    cl1_brightness_to_percent, percent_to_aux_brightness, percent_to_cl1_brightness,
};

/// LP8860 backlight driver.
///
/// Owns the I2C bus handle and the power-enable pin for its lifetime.
/// Concurrent access to one instance is not supported; serialize at the
/// caller if needed.
pub struct Lp8860<I2C, EN> {
    i2c: I2C,
    address: u8,
    enable: EN,
}

impl<I2C, EN> Lp8860<I2C, EN> {
    /// Create a new driver instance with the fixed chip address (0x2D).
    pub fn new(i2c: I2C, enable: EN) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
            enable,
        }
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, enable: EN, address: u8) -> Self {
        Self {
            i2c,
            address,
            enable,
        }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus handle and the enable pin.
    pub fn free(self) -> (I2C, EN) {
        (self.i2c, self.enable)
    }
}

impl<I2C, EN> Lp8860<I2C, EN>
where
    I2C: I2c,
    EN: StatefulOutputPin,
{
    /// Probe the device. Fails with [`Error::NotDetected`] when the ID
    /// register cannot be read or reads back the invalid-ID sentinel.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error, EN::Error>> {
        match self.chip_id() {
            Ok(id) if id != INVALID_ID => Ok(()),
            _ => Err(Error::NotDetected),
        }
    }

    /// Read the ID register.
    pub fn chip_id(&mut self) -> Result<u8, Error<I2C::Error, EN::Error>> {
        self.read_reg(addr::ID)
    }

    /// Re-probe the device; true when it answers with a valid ID.
    pub fn is_available(&mut self) -> bool {
        self.init().is_ok()
    }

    /// Brightness domain accepted by [`Lp8860::set_brightness`], in percent.
    pub fn brightness_range(&self) -> (u8, u8) {
        (BRIGHTNESS_MIN_PERCENT, BRIGHTNESS_MAX_PERCENT)
    }

    /// True when the enable pin is driven high. A failed pin readback
    /// reports unpowered.
    pub fn is_powered(&mut self) -> bool {
        self.enable.is_set_high().unwrap_or(false)
    }

    /// Power up the chip and run the bring-up sequence once per off-to-on
    /// transition: brightness to zero, EEPROM load/verify, current limits
    /// to maximum. Already-powered calls are a no-op.
    ///
    /// Only a failure to drive the enable pin aborts bring-up; brightness
    /// and EEPROM failures are logged and the sequence continues. The
    /// result reflects the final current-limit step.
    pub fn power_on<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error<I2C::Error, EN::Error>> {
        if self.is_powered() {
            return Ok(());
        }
        self.enable.set_high().map_err(Error::Pin)?;
        if self.set_brightness(0).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("lp8860: zeroing brightness at power-on failed");
        }
        if self.load_eeprom(delay).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("lp8860: EEPROM load at power-on failed");
        }
        self.allow_max_current()
    }

    /// Drive the enable pin low. Brightness and EEPROM state are left
    /// untouched.
    pub fn power_off(&mut self) -> Result<(), Error<I2C::Error, EN::Error>> {
        self.enable.set_low().map_err(Error::Pin)
    }

    /// Read back the cluster 1 brightness pair as a duty percent.
    ///
    /// Uses the chip's readback scaling (full scale divided by the register
    /// value), so values below full scale report above 100.
    pub fn brightness(&mut self) -> Result<u32, Error<I2C::Error, EN::Error>> {
        let msb = self.read_reg(addr::CL1_BRT_MSB)?;
        let lsb = self.read_reg(addr::CL1_BRT_LSB)?;
        Ok(cl1_brightness_to_percent(u16::from_be_bytes([msb, lsb])))
    }

    /// Set all four clusters to the given duty percent. Cluster 1 uses the
    /// 16-bit range, clusters 2-4 the 13-bit range.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), Error<I2C::Error, EN::Error>> {
        let cl1 = percent_to_cl1_brightness(percent).to_be_bytes();
        self.write_reg(addr::CL1_BRT_MSB, cl1[0])?;
        self.write_reg(addr::CL1_BRT_LSB, cl1[1])?;
        let aux = percent_to_aux_brightness(percent).to_be_bytes();
        for channel in Channel::AUX {
            self.write_reg(channel.brightness_msb(), aux[0])?;
            self.write_reg(channel.brightness_lsb(), aux[1])?;
        }
        Ok(())
    }

    /// Latch the EEPROM into the shadow registers and verify it against the
    /// built-in calibration image, programming the array when it differs.
    ///
    /// When the shadow contents already match, no unlock or program command
    /// is issued. Programming burns the full 25-byte block and takes an
    /// additional 200 ms settle.
    pub fn load_eeprom<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error<I2C::Error, EN::Error>> {
        self.write_reg(addr::EEPROM_CTRL, EepromCtrl::LOAD.bits())?;
        delay.delay_ms(EEPROM_LOAD_MS);

        let mut shadow = [0u8; EEPROM_TABLE.len()];
        self.read_regs(addr::EEPROM_START, &mut shadow)?;
        if shadow != EEPROM_TABLE {
            self.program_eeprom(delay)?;
        }
        Ok(())
    }

    fn program_eeprom<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error<I2C::Error, EN::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!("lp8860: EEPROM not initialized, programming");
        for code in EEPROM_UNLOCK_CODES {
            self.write_reg(addr::EEPROM_UNLOCK, code)?;
        }
        self.write_regs(addr::EEPROM_START, &EEPROM_TABLE)?;
        self.write_reg(addr::EEPROM_CTRL, EepromCtrl::PROGRAM.bits())?;
        delay.delay_ms(EEPROM_PROGRAM_MS);
        self.write_reg(addr::EEPROM_CTRL, 0)?;
        self.write_reg(addr::EEPROM_UNLOCK, EEPROM_LOCK)
    }

    /// Raise all four current limits to their maximum codes.
    pub fn allow_max_current(&mut self) -> Result<(), Error<I2C::Error, EN::Error>> {
        let cl1 = CL1_CURRENT_MAX.to_be_bytes();
        self.write_reg(addr::CL1_CURR_MSB, cl1[0])?;
        self.write_reg(addr::CL1_CURR_LSB, cl1[1])?;
        self.write_reg(addr::CL2_CURRENT, AUX_CURRENT_MAX)?;
        self.write_reg(addr::CL3_CURRENT, AUX_CURRENT_MAX)?;
        self.write_reg(addr::CL4_CURRENT, AUX_CURRENT_MAX)
    }

    /// Snapshot the FAULT and LED_FAULT registers.
    pub fn faults(&mut self) -> Result<Faults, Error<I2C::Error, EN::Error>> {
        Ok(Faults {
            chip: self.read_reg(addr::FAULT)?,
            led: self.read_reg(addr::LED_FAULT)?,
        })
    }

    /// Reset latched faults.
    pub fn clear_faults(&mut self) -> Result<(), Error<I2C::Error, EN::Error>> {
        self.write_reg(addr::FAULT_CLEAR, CLEAR_FAULTS)
    }

    /// Raw die-temperature sensor code (MSB/LSB pair).
    pub fn temperature_raw(&mut self) -> Result<u16, Error<I2C::Error, EN::Error>> {
        let msb = self.read_reg(addr::TEMP_MSB)?;
        let lsb = self.read_reg(addr::TEMP_LSB)?;
        Ok(u16::from_be_bytes([msb, lsb]))
    }

    /// Write a single register.
    pub fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error, EN::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Error::I2c)
    }

    /// Read a single register.
    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error, EN::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Write a burst starting at a register. Payloads beyond the 32-byte
    /// block-transfer limit are rejected without touching the bus.
    pub fn write_regs(
        &mut self,
        start_reg: u8,
        data: &[u8],
    ) -> Result<(), Error<I2C::Error, EN::Error>> {
        let mut buf = [0u8; MAX_TRANSFER_SIZE + 1];
        if data.len() > MAX_TRANSFER_SIZE {
            return Err(Error::BufferTooLarge);
        }
        buf[0] = start_reg;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..=data.len()])
            .map_err(Error::I2c)
    }

    /// Read a burst starting at a register.
    pub fn read_regs(
        &mut self,
        start_reg: u8,
        data: &mut [u8],
    ) -> Result<(), Error<I2C::Error, EN::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .map_err(Error::I2c)
    }
}
