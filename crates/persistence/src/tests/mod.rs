// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod airport_tests;
mod user_tests;

use skyport_domain::{NewAddress, NewAircraft, NewAirport, NewPrivateAirport, NewPublicAirport};

pub fn test_address() -> NewAddress {
    NewAddress {
        country: String::from("Spain"),
        city: String::from("Madrid"),
        street: String::from("Calle Mayor"),
        street_number: 4,
    }
}

pub fn test_airport(name: &str) -> NewAirport {
    NewAirport {
        name: String::from(name),
        inauguration_year: 1931,
        capacity: 2_000_000,
        address: test_address(),
        image: None,
    }
}

pub fn test_public_airport(name: &str) -> NewPublicAirport {
    NewPublicAirport {
        airport: test_airport(name),
        funding: 1_500_000.0,
        worker_count: 320,
    }
}

pub fn test_private_airport(name: &str) -> NewPrivateAirport {
    NewPrivateAirport {
        airport: test_airport(name),
        partner_count: 12,
    }
}

pub fn test_aircraft(airport_id: i64) -> NewAircraft {
    NewAircraft {
        model: String::from("Cessna 172"),
        seat_count: 4,
        max_speed: 302,
        is_active: true,
        airport_id,
    }
}
