use energy_cost_calculator::appliance::ApplianceCatalog;

#[test]
fn builtin_catalog_order_and_size() {
    let catalog = ApplianceCatalog::builtin();
    assert_eq!(catalog.len(), 14);
    assert!(!catalog.is_empty());
    let first = catalog.by_number(1).expect("first appliance");
    assert_eq!(first.name, "Air Conditioner");
    assert_eq!(first.power_kw, 1.5);
    let last = catalog.by_number(14).expect("last appliance");
    assert_eq!(last.name, "Electric Kettle");
}

#[test]
fn menu_numbers_out_of_range() {
    let catalog = ApplianceCatalog::builtin();
    assert!(catalog.by_number(0).is_none());
    assert!(catalog.by_number(15).is_none());
}

#[test]
fn lookup_by_exact_name() {
    let catalog = ApplianceCatalog::builtin();
    assert_eq!(catalog.find("Laptop").map(|p| p.power_kw), Some(0.05));
    assert_eq!(catalog.find("Electric Fan").map(|p| p.power_kw), Some(0.075));
    assert!(catalog.find("laptop").is_none());
}
