//! Library-level tests across load, find, format, mutate, and save.

use std::collections::BTreeSet;

use netinv::inventory::{
    Device, DeviceRecord, FIELDNAMES, InventoryError, add_device, format_inventory_json,
    format_inventory_yaml, get_device, parse_inventory_json, read_inventory, remove_device,
    save_inventory,
};

use super::{ROUTER_ROW, inventory_dir};

fn five_tuples(inventory: &[DeviceRecord]) -> BTreeSet<[String; 5]> {
    inventory
        .iter()
        .map(|r| FIELDNAMES.map(|f| r.get(f).unwrap_or_default().to_owned()))
        .collect()
}

#[test]
fn test_load_json_parse_round_trip() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[
        ROUTER_ROW,
        "Switch1,10.0.0.2,admin,pass456,Access switch\n",
        "\"Edge, west\",192.0.2.7,ops,\"quote\"\"d\",Edge router\n",
    ])?;
    let inventory = read_inventory(&path)?;
    let parsed = parse_inventory_json(&format_inventory_json(&inventory)?)?;
    assert_eq!(five_tuples(&parsed), five_tuples(&inventory));
    assert_eq!(parsed.len(), 3);
    Ok(())
}

#[test]
fn test_finder_against_loaded_file() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[
        ROUTER_ROW,
        "Router1,10.9.9.9,backup,x,Duplicate\n",
    ])?;
    let inventory = read_inventory(&path)?;
    let found = get_device(&inventory, "Router1").expect("Router1 present");
    assert_eq!(found.get("Management IP"), Some("10.0.0.1"));
    assert!(get_device(&inventory, "Switch9").is_none());
    Ok(())
}

#[test]
fn test_add_save_load_preserves_order() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[ROUTER_ROW])?;
    let mut inventory = read_inventory(&path)?;
    let before = inventory.clone();

    let switch = Device {
        name: "Switch1".to_owned(),
        management_ip: "10.0.0.2".to_owned(),
        username: "admin".to_owned(),
        password: "pass456".to_owned(),
        description: "Access switch".to_owned(),
    };
    add_device(&mut inventory, switch.clone().into());
    save_inventory(&path, &inventory)?;

    let after = read_inventory(&path)?;
    assert_eq!(&after[..1], &before[..]);
    assert_eq!(Device::from_record(&after[1], 2)?, switch);
    Ok(())
}

#[test]
fn test_remove_then_save() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[ROUTER_ROW, "Switch1,10.0.0.2,admin,pass456,Access switch\n"])?;
    let mut inventory = read_inventory(&path)?;
    assert!(remove_device(&mut inventory, "Router1").is_some());
    save_inventory(&path, &inventory)?;

    let after = read_inventory(&path)?;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].name(), Some("Switch1"));
    Ok(())
}

#[test]
fn test_partial_record_is_rejected_before_write() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[ROUTER_ROW])?;
    let original = std::fs::read_to_string(&path)?;

    let mut inventory = read_inventory(&path)?;
    let partial: DeviceRecord = [
        ("Name", "Switch1"),
        ("Management IP", "10.0.0.2"),
        ("Username", "admin"),
        ("Description", "Access switch"),
    ]
    .into_iter()
    .collect();
    add_device(&mut inventory, partial);

    let err = save_inventory(&path, &inventory).unwrap_err();
    assert!(matches!(err, InventoryError::MissingField { field: "Password", .. }));
    assert_eq!(std::fs::read_to_string(&path)?, original);
    Ok(())
}

#[test]
fn test_yaml_lists_every_device() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[ROUTER_ROW, "Switch1,10.0.0.2,admin,pass456,Access switch\n"])?;
    let yaml = format_inventory_yaml(&read_inventory(&path)?)?;
    assert_eq!(yaml.lines().filter(|l| l.starts_with("- ")).count(), 2);
    assert!(yaml.contains("Name: Router1"));
    assert!(yaml.contains("Name: Switch1"));
    Ok(())
}

#[test]
fn test_yaml_steps_four_spaces() -> anyhow::Result<()> {
    let (_dir, path) = inventory_dir(&[ROUTER_ROW])?;
    let yaml = format_inventory_yaml(&read_inventory(&path)?)?;
    let mut lines = yaml.lines();
    assert_eq!(lines.next(), Some("-   Name: Router1"));
    assert!(lines.all(|l| l.starts_with("    ") && !l.starts_with("     ")));
    Ok(())
}
