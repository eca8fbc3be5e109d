// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for airport persistence: composite creates, subtype joins,
//! updates, and the delete cascade.

use crate::tests::{test_aircraft, test_private_airport, test_public_airport};
use crate::{Persistence, PersistenceError};
use skyport_domain::AirportKind;

#[test]
fn test_create_and_fetch_public_airport() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();

    let fetched = persistence
        .get_public_airport(airport_id)
        .unwrap()
        .unwrap();
    assert_eq!(fetched.airport.id, airport_id);
    assert_eq!(fetched.airport.name, "Barajas");
    assert_eq!(fetched.airport.inauguration_year, 1931);
    assert_eq!(fetched.airport.capacity, 2_000_000);
    assert!((fetched.funding - 1_500_000.0).abs() < f64::EPSILON);
    assert_eq!(fetched.worker_count, 320);

    // The owned address comes back embedded.
    assert_eq!(fetched.airport.address.city, "Madrid");
    assert_eq!(fetched.airport.address.street_number, 4);

    assert_eq!(
        persistence.airport_kind(airport_id).unwrap(),
        Some(AirportKind::Public)
    );
}

#[test]
fn test_create_and_fetch_private_airport() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_private_airport(&test_private_airport("Son Bonet"))
        .unwrap();

    let fetched = persistence
        .get_private_airport(airport_id)
        .unwrap()
        .unwrap();
    assert_eq!(fetched.airport.id, airport_id);
    assert_eq!(fetched.airport.name, "Son Bonet");
    assert_eq!(fetched.partner_count, 12);

    assert_eq!(
        persistence.airport_kind(airport_id).unwrap(),
        Some(AirportKind::Private)
    );
}

#[test]
fn test_base_listing_covers_both_subtypes() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let public_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();
    let private_id = persistence
        .create_private_airport(&test_private_airport("Son Bonet"))
        .unwrap();

    let airports = persistence.list_airports().unwrap();
    assert_eq!(airports.len(), 2);
    assert_eq!(airports[0].id, public_id);
    assert_eq!(airports[1].id, private_id);
}

#[test]
fn test_subtype_listings_do_not_mix() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let public_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();
    let private_id = persistence
        .create_private_airport(&test_private_airport("Son Bonet"))
        .unwrap();

    let public = persistence.list_public_airports().unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].airport.id, public_id);

    let private = persistence.list_private_airports().unwrap();
    assert_eq!(private.len(), 1);
    assert_eq!(private[0].airport.id, private_id);

    // A private airport has no public extension row, so the public getter
    // sees nothing.
    assert!(persistence.get_public_airport(private_id).unwrap().is_none());
    assert!(persistence.get_private_airport(public_id).unwrap().is_none());
}

#[test]
fn test_airport_kind_is_none_for_unknown_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.airport_kind(9999).unwrap(), None);
}

#[test]
fn test_get_airport_returns_none_for_unknown_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_airport(9999).unwrap().is_none());
}

#[test]
fn test_update_public_airport_touches_all_three_rows() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();

    let mut airport = persistence
        .get_public_airport(airport_id)
        .unwrap()
        .unwrap();
    airport.airport.name = String::from("Adolfo Suarez Madrid-Barajas");
    airport.airport.capacity = 70_000_000;
    airport.airport.address.city = String::from("Barajas");
    airport.funding = 2_750_000.5;
    airport.worker_count = 410;

    persistence.update_public_airport(&airport).unwrap();

    let fetched = persistence
        .get_public_airport(airport_id)
        .unwrap()
        .unwrap();
    assert_eq!(fetched.airport.name, "Adolfo Suarez Madrid-Barajas");
    assert_eq!(fetched.airport.capacity, 70_000_000);
    assert_eq!(fetched.airport.address.city, "Barajas");
    assert!((fetched.funding - 2_750_000.5).abs() < f64::EPSILON);
    assert_eq!(fetched.worker_count, 410);
}

#[test]
fn test_update_base_airport_rewrites_base_and_address_rows() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();

    let mut airport = persistence.get_airport(airport_id).unwrap().unwrap();
    let address_id = airport.address.id;
    airport.name = String::from("Adolfo Suarez Madrid-Barajas");
    airport.inauguration_year = 1933;
    airport.capacity = 70_000_000;
    airport.address.street = String::from("Avenida de la Hispanidad");
    airport.address.street_number = 1;

    persistence.update_airport(&airport).unwrap();

    let fetched = persistence.get_airport(airport_id).unwrap().unwrap();
    assert_eq!(fetched.name, "Adolfo Suarez Madrid-Barajas");
    assert_eq!(fetched.inauguration_year, 1933);
    assert_eq!(fetched.capacity, 70_000_000);
    assert_eq!(fetched.address.id, address_id);
    assert_eq!(fetched.address.street, "Avenida de la Hispanidad");
    assert_eq!(fetched.address.street_number, 1);

    // The extension row is outside the base update and keeps its values.
    let public = persistence
        .get_public_airport(airport_id)
        .unwrap()
        .unwrap();
    assert_eq!(public.worker_count, 320);
}

#[test]
fn test_update_private_airport_changes_partner_count() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_private_airport(&test_private_airport("Son Bonet"))
        .unwrap();

    let mut airport = persistence
        .get_private_airport(airport_id)
        .unwrap()
        .unwrap();
    airport.partner_count = 25;

    persistence.update_private_airport(&airport).unwrap();

    let fetched = persistence
        .get_private_airport(airport_id)
        .unwrap()
        .unwrap();
    assert_eq!(fetched.partner_count, 25);
}

#[test]
fn test_update_unknown_airport_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();
    let mut airport = persistence
        .get_public_airport(airport_id)
        .unwrap()
        .unwrap();
    persistence.delete_airport(airport_id).unwrap();

    airport.worker_count = 1;
    let result = persistence.update_public_airport(&airport);
    assert!(result.is_err());
}

#[test]
fn test_delete_airport_cascades_to_aircraft_and_extension() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();
    let aircraft_id = persistence
        .create_aircraft(&test_aircraft(airport_id))
        .unwrap();

    persistence.delete_airport(airport_id).unwrap();

    assert!(persistence.get_airport(airport_id).unwrap().is_none());
    assert!(persistence.get_public_airport(airport_id).unwrap().is_none());
    assert!(persistence.get_aircraft(aircraft_id).unwrap().is_none());
    assert_eq!(persistence.airport_kind(airport_id).unwrap(), None);
}

#[test]
fn test_delete_airport_leaves_address_behind() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let airport_id = persistence
        .create_public_airport(&test_public_airport("Barajas"))
        .unwrap();
    let address_id = persistence
        .get_airport(airport_id)
        .unwrap()
        .unwrap()
        .address
        .id;

    persistence.delete_airport(airport_id).unwrap();

    // The address row survives the cascade.
    let address = persistence.get_address(address_id).unwrap();
    assert!(address.is_some());
}

#[test]
fn test_delete_unknown_airport_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.delete_airport(424_242);
    assert_eq!(result, Err(PersistenceError::AirportNotFound(424_242)));
}
