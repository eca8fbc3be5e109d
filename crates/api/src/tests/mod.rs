// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API handler tests.

mod airport_handler_tests;
mod login_tests;

use crate::request_response::{
    AddressPayload, CreateAircraftRequest, CreatePrivateAirportRequest,
    CreatePublicAirportRequest, UpdatePrivateAirportRequest,
};
use skyport_persistence::Persistence;

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn test_address_payload() -> AddressPayload {
    AddressPayload {
        country: String::from("Spain"),
        city: String::from("Valencia"),
        street: String::from("Carrer de Colon"),
        street_number: 9,
    }
}

pub fn public_airport_request(name: &str) -> CreatePublicAirportRequest {
    CreatePublicAirportRequest {
        name: String::from(name),
        inauguration_year: 1983,
        capacity: 8_000_000,
        address: test_address_payload(),
        image: None,
        funding: 950_000.0,
        worker_count: 210,
    }
}

pub fn private_airport_request(name: &str) -> CreatePrivateAirportRequest {
    CreatePrivateAirportRequest {
        name: String::from(name),
        inauguration_year: 1965,
        capacity: 300_000,
        address: test_address_payload(),
        image: None,
        partner_count: 6,
    }
}

pub fn update_private_request(name: &str, partner_count: i32) -> UpdatePrivateAirportRequest {
    UpdatePrivateAirportRequest {
        name: String::from(name),
        inauguration_year: 1965,
        capacity: 300_000,
        address: test_address_payload(),
        image: None,
        partner_count,
    }
}

pub fn aircraft_request(airport_id: i64) -> CreateAircraftRequest {
    CreateAircraftRequest {
        model: String::from("ATR 72"),
        seat_count: 70,
        max_speed: 510,
        is_active: true,
        airport_id,
    }
}
