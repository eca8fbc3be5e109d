// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod types;

use crate::types::{NewAddress, NewAircraft, NewAirport};

pub fn sample_address() -> NewAddress {
    NewAddress {
        country: String::from("Spain"),
        city: String::from("Bilbao"),
        street: String::from("Gran Via"),
        street_number: 12,
    }
}

pub fn sample_airport() -> NewAirport {
    NewAirport {
        name: String::from("Bilbao Airport"),
        inauguration_year: 1948,
        capacity: 4_000_000,
        address: sample_address(),
        image: None,
    }
}

pub fn sample_aircraft(airport_id: i64) -> NewAircraft {
    NewAircraft {
        model: String::from("A320"),
        seat_count: 180,
        max_speed: 870,
        is_active: true,
        airport_id,
    }
}
