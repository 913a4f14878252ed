//! Booking requests loaded from JSON files

use shared::{MembershipTier, PricingError, SeatZone};
use std::io::Write;
use tempfile::NamedTempFile;
use ticket_pricing::{final_price, load_booking};

fn write_booking(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_price_booking() {
    let file = write_booking(
        r#"{
            "event": {
                "name": "Campus Concert",
                "is_weekend": true,
                "booking_fee": 5.0,
                "is_high_demand": true
            },
            "seats": ["VIP", "VIP", "PREMIUM"],
            "membership": "GOLD",
            "promo": {"type": "STUDENT", "value": 15.0}
        }"#,
    );

    let request = load_booking(file.path()).unwrap();
    assert_eq!(request.tier(), MembershipTier::Gold);
    assert_eq!(request.seats()[2], SeatZone::Premium);
    assert_eq!(final_price(&request).to_string(), "489.29");
}

#[test]
fn test_null_promo_is_absent() {
    let file = write_booking(
        r#"{
            "event": {"name": "Movie Night", "is_weekend": false, "booking_fee": 2.0},
            "seats": ["STANDARD", "STANDARD", "STANDARD"],
            "membership": "NONE",
            "promo": null
        }"#,
    );

    let request = load_booking(file.path()).unwrap();
    assert!(request.promo().is_none());
    assert_eq!(final_price(&request).to_string(), "242.00");
}

#[test]
fn test_unknown_zone_in_file() {
    let file = write_booking(
        r#"{
            "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
            "seats": ["STANDING"]
        }"#,
    );

    let err = load_booking(file.path()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PricingError>(),
        Some(&PricingError::UnknownZone("STANDING".to_string()))
    );
}

#[test]
fn test_empty_seats_in_file() {
    let file = write_booking(
        r#"{
            "event": {"name": "Gig", "is_weekend": false, "booking_fee": 0},
            "seats": []
        }"#,
    );

    let err = load_booking(file.path()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PricingError>(),
        Some(&PricingError::EmptySelection)
    );
}

#[test]
fn test_malformed_json_reports_path() {
    let file = write_booking("{ not json");
    let err = load_booking(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid booking JSON"));
}

#[test]
fn test_missing_file() {
    let err = load_booking(std::path::Path::new("/nonexistent/booking.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read booking file"));
}
