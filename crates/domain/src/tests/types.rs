// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for domain type behavior.

use crate::{AirportKind, DomainError, User};
use std::str::FromStr;

#[test]
fn airport_kind_round_trips_through_strings() {
    assert_eq!(AirportKind::Public.as_str(), "public");
    assert_eq!(AirportKind::Private.as_str(), "private");
    assert_eq!(
        AirportKind::from_str("public").unwrap(),
        AirportKind::Public
    );
    assert_eq!(
        AirportKind::from_str("private").unwrap(),
        AirportKind::Private
    );
}

#[test]
fn airport_kind_rejects_unknown_strings() {
    let err = AirportKind::from_str("municipal").unwrap_err();
    assert_eq!(err, DomainError::InvalidAirportKind(String::from("municipal")));
}

#[test]
fn airport_kind_display_matches_as_str() {
    assert_eq!(AirportKind::Public.to_string(), "public");
    assert_eq!(AirportKind::Private.to_string(), "private");
}

#[test]
fn users_are_identified_by_username_only() {
    let a = User {
        username: String::from("admin"),
        password: String::from("one"),
    };
    let b = User {
        username: String::from("admin"),
        password: String::from("two"),
    };
    let c = User {
        username: String::from("other"),
        password: String::from("one"),
    };

    assert_eq!(a, b);
    assert_ne!(a, c);
}
