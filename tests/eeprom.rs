use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::Mock as PinMock;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use lp8860_rs::driver::Lp8860;
use lp8860_rs::registers::{EEPROM_TABLE, addr};

fn release(driver: Lp8860<I2cMock, PinMock>) {
    let (mut i2c, mut pin) = driver.free();
    i2c.done();
    pin.done();
}

#[test]
fn load_skips_programming_when_shadow_matches() {
    let expectations = [
        I2cTrans::write(0x2D, vec![0x19, 0x01]),
        I2cTrans::write_read(0x2D, vec![0x60], EEPROM_TABLE.to_vec()),
    ];
    let mut driver = Lp8860::new(I2cMock::new(&expectations), PinMock::new(&[]));
    driver.load_eeprom(&mut NoopDelay::new()).unwrap();
    release(driver);
}

#[test]
fn load_programs_when_shadow_differs() {
    let mut shadow = EEPROM_TABLE;
    shadow[7] ^= 0xFF;

    let mut block_write = vec![0x60];
    block_write.extend_from_slice(&EEPROM_TABLE);

    let expectations = [
        I2cTrans::write(0x2D, vec![0x19, 0x01]),
        I2cTrans::write_read(0x2D, vec![0x60], shadow.to_vec()),
        // unlock key, one byte per write
        I2cTrans::write(0x2D, vec![0x1A, 0x08]),
        I2cTrans::write(0x2D, vec![0x1A, 0xBA]),
        I2cTrans::write(0x2D, vec![0x1A, 0xEF]),
        // full image in a single block write, then the program cycle
        I2cTrans::write(0x2D, block_write),
        I2cTrans::write(0x2D, vec![0x19, 0x02]),
        I2cTrans::write(0x2D, vec![0x19, 0x00]),
        I2cTrans::write(0x2D, vec![0x1A, 0x00]),
    ];
    let mut driver = Lp8860::new(I2cMock::new(&expectations), PinMock::new(&[]));
    driver.load_eeprom(&mut NoopDelay::new()).unwrap();
    release(driver);
}

#[test]
fn load_is_idempotent_once_programmed() {
    // Two consecutive loads against a matching shadow never touch the
    // unlock register.
    let expectations = [
        I2cTrans::write(0x2D, vec![0x19, 0x01]),
        I2cTrans::write_read(0x2D, vec![0x60], EEPROM_TABLE.to_vec()),
        I2cTrans::write(0x2D, vec![0x19, 0x01]),
        I2cTrans::write_read(0x2D, vec![0x60], EEPROM_TABLE.to_vec()),
    ];
    let mut driver = Lp8860::new(I2cMock::new(&expectations), PinMock::new(&[]));
    let mut delay = NoopDelay::new();
    driver.load_eeprom(&mut delay).unwrap();
    driver.load_eeprom(&mut delay).unwrap();
    release(driver);
}

#[test]
fn eeprom_image_spans_shadow_block() {
    assert_eq!(EEPROM_TABLE.len(), 25);
    assert_eq!(addr::EEPROM_START as usize + EEPROM_TABLE.len() - 1, 0x78);
}
