// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the airport handlers: validation, composite creates and
//! updates, kind discovery, and the delete cascade.

use crate::error::ApiError;
use crate::handlers::{
    airport_kind, create_aircraft, create_private_airport, create_public_airport, delete_airport,
    get_aircraft, get_airport, get_public_airport, list_airports, list_private_airports,
    list_public_airports, update_private_airport, update_public_airport,
};
use crate::request_response::{UpdatePrivateAirportRequest, UpdatePublicAirportRequest};
use crate::tests::{
    aircraft_request, private_airport_request, public_airport_request, test_address_payload,
    test_persistence, update_private_request,
};

#[test]
fn create_public_airport_returns_id_and_kind() {
    let mut persistence = test_persistence();

    let response =
        create_public_airport(&mut persistence, &public_airport_request("Manises")).unwrap();
    assert_eq!(response.kind, "public");

    let fetched = get_public_airport(&mut persistence, response.airport_id).unwrap();
    assert_eq!(fetched.airport.name, "Manises");
    assert_eq!(fetched.worker_count, 210);
    assert_eq!(fetched.airport.address.city, "Valencia");
}

#[test]
fn create_private_airport_returns_id_and_kind() {
    let mut persistence = test_persistence();

    let response =
        create_private_airport(&mut persistence, &private_airport_request("Requena")).unwrap();
    assert_eq!(response.kind, "private");

    let kind = airport_kind(&mut persistence, response.airport_id).unwrap();
    assert_eq!(kind.kind, "private");
}

#[test]
fn create_rejects_blank_name() {
    let mut persistence = test_persistence();

    let request = public_airport_request("  ");
    let err = create_public_airport(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "name"));
}

#[test]
fn create_rejects_out_of_range_inauguration_year() {
    let mut persistence = test_persistence();

    let mut request = private_airport_request("Requena");
    request.inauguration_year = 1880;
    let err = create_private_airport(&mut persistence, &request).unwrap_err();
    assert!(
        matches!(err, ApiError::InvalidInput { ref field, .. } if field == "inauguration_year")
    );
}

#[test]
fn create_rejects_invalid_address_field() {
    let mut persistence = test_persistence();

    let mut request = public_airport_request("Manises");
    request.address.street_number = 0;
    let err = create_public_airport(&mut persistence, &request).unwrap_err();
    assert!(
        matches!(err, ApiError::InvalidInput { ref field, .. } if field == "address.street number")
    );
}

#[test]
fn create_rejects_negative_extension_fields() {
    let mut persistence = test_persistence();

    let mut public = public_airport_request("Manises");
    public.funding = -1.0;
    let err = create_public_airport(&mut persistence, &public).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "funding"));

    let mut private = private_airport_request("Requena");
    private.partner_count = -3;
    let err = create_private_airport(&mut persistence, &private).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "partner_count"));
}

#[test]
fn listings_cover_both_kinds() {
    let mut persistence = test_persistence();

    create_public_airport(&mut persistence, &public_airport_request("Manises")).unwrap();
    create_private_airport(&mut persistence, &private_airport_request("Requena")).unwrap();

    assert_eq!(list_airports(&mut persistence).unwrap().airports.len(), 2);
    assert_eq!(
        list_public_airports(&mut persistence).unwrap().airports.len(),
        1
    );
    assert_eq!(
        list_private_airports(&mut persistence)
            .unwrap()
            .airports
            .len(),
        1
    );
}

#[test]
fn get_unknown_airport_is_not_found() {
    let mut persistence = test_persistence();

    let err = get_airport(&mut persistence, 9999).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Airport"));

    let err = airport_kind(&mut persistence, 9999).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn update_public_airport_overwrites_all_three_rows() {
    let mut persistence = test_persistence();

    let created =
        create_public_airport(&mut persistence, &public_airport_request("Manises")).unwrap();

    let mut request = UpdatePublicAirportRequest {
        name: String::from("Valencia Airport"),
        inauguration_year: 1983,
        capacity: 10_000_000,
        address: test_address_payload(),
        image: None,
        funding: 1_200_000.0,
        worker_count: 260,
    };
    request.address.city = String::from("Manises");

    update_public_airport(&mut persistence, created.airport_id, &request).unwrap();

    let fetched = get_public_airport(&mut persistence, created.airport_id).unwrap();
    assert_eq!(fetched.airport.name, "Valencia Airport");
    assert_eq!(fetched.airport.capacity, 10_000_000);
    assert_eq!(fetched.airport.address.city, "Manises");
    assert_eq!(fetched.worker_count, 260);
}

#[test]
fn update_private_airport_keeps_the_address_row() {
    let mut persistence = test_persistence();

    let created =
        create_private_airport(&mut persistence, &private_airport_request("Requena")).unwrap();
    let before = get_airport(&mut persistence, created.airport_id).unwrap();

    let request: UpdatePrivateAirportRequest = update_private_request("Requena Aerodrome", 9);
    update_private_airport(&mut persistence, created.airport_id, &request).unwrap();

    let after = get_airport(&mut persistence, created.airport_id).unwrap();
    assert_eq!(after.address.id, before.address.id);
    assert_eq!(after.name, "Requena Aerodrome");
}

#[test]
fn update_unknown_airport_is_not_found() {
    let mut persistence = test_persistence();

    let request: UpdatePrivateAirportRequest = update_private_request("Nowhere", 1);
    let err = update_private_airport(&mut persistence, 9999, &request).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn delete_airport_removes_its_aircraft() {
    let mut persistence = test_persistence();

    let created =
        create_public_airport(&mut persistence, &public_airport_request("Manises")).unwrap();
    let aircraft =
        create_aircraft(&mut persistence, &aircraft_request(created.airport_id)).unwrap();

    delete_airport(&mut persistence, created.airport_id).unwrap();

    assert!(get_airport(&mut persistence, created.airport_id).is_err());
    assert!(get_aircraft(&mut persistence, aircraft.aircraft_id).is_err());
}

#[test]
fn delete_unknown_airport_is_not_found() {
    let mut persistence = test_persistence();

    let err = delete_airport(&mut persistence, 424_242).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Airport"));
}
