use serial_test::serial;

use super::common::open_and_begin;

#[test]
#[ignore]
#[serial]
fn firmware_version_on_hardware() -> anyhow::Result<()> {
    let Some(mut dev) = open_and_begin()? else {
        eprintln!("no I2C bus device, skipping");
        return Ok(());
    };
    let v = dev.get_firmware_version()?;
    println!("{}", v);
    assert_eq!(v.ic, 0x32);
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn read_uid_on_hardware() -> anyhow::Result<()> {
    let Some(mut dev) = open_and_begin()? else {
        eprintln!("no I2C bus device, skipping");
        return Ok(());
    };
    match dev.read_passive_target_a(1000)? {
        Some(uid) => println!("uid {}", uid.to_hex()),
        None => println!("no target in field"),
    }
    Ok(())
}
