//! Tests for display and formatting utilities.

use foodco2::display::{format_co2, get_co2_equivalents};

#[test]
fn test_format_co2_tonnes() {
    assert_eq!(format_co2(1000.0), "1.00 t CO₂e");
    assert_eq!(format_co2(2345.6), "2.35 t CO₂e");
}

#[test]
fn test_format_co2_kilograms() {
    assert_eq!(format_co2(1.0), "1.00 kg CO₂e");
    assert_eq!(format_co2(36.8), "36.80 kg CO₂e");
    assert!(format_co2(999.99).ends_with("kg CO₂e"));
}

#[test]
fn test_format_co2_grams() {
    assert_eq!(format_co2(0.5), "500 g CO₂e");
    assert_eq!(format_co2(0.0), "0 g CO₂e");
    assert_eq!(format_co2(0.0124), "12 g CO₂e");
    assert!(format_co2(0.999).ends_with(" g CO₂e"));
}

#[test]
fn test_format_co2_unit_follows_rounding() {
    assert_eq!(format_co2(999.996), "1.00 t CO₂e");
    assert_eq!(format_co2(999.994), "999.99 kg CO₂e");
    assert_eq!(format_co2(0.9996), "1.00 kg CO₂e");
    assert_eq!(format_co2(0.9994), "999 g CO₂e");
}

#[test]
fn test_equivalents() {
    let eq = get_co2_equivalents(21.0);
    assert!((eq.trees_needed - 1.0).abs() < 1e-12);
    assert!((eq.car_km - 175.0).abs() < 1e-9);
    assert!((eq.phone_charges - 2625.0).abs() < 1e-9);
}

#[test]
fn test_equivalents_zero() {
    let eq = get_co2_equivalents(0.0);
    assert_eq!(eq.car_km, 0.0);
    assert_eq!(eq.trees_needed, 0.0);
    assert_eq!(eq.phone_charges, 0.0);
}
