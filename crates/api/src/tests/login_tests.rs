// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the login and user creation handlers.

use crate::error::ApiError;
use crate::handlers::{create_user, login};
use crate::request_response::{CreateUserRequest, LoginRequest};
use crate::tests::test_persistence;
use skyport_persistence::Persistence;

fn seed_user(persistence: &mut Persistence) {
    let request: CreateUserRequest = CreateUserRequest {
        username: String::from("admin"),
        password: String::from("swordfish"),
    };
    create_user(persistence, &request).unwrap();
}

#[test]
fn login_succeeds_with_matching_credentials() {
    let mut persistence = test_persistence();
    seed_user(&mut persistence);

    let request: LoginRequest = LoginRequest {
        username: String::from("admin"),
        password: String::from("swordfish"),
    };
    let response = login(&mut persistence, &request).unwrap();
    assert_eq!(response.username, "admin");
    assert!(response.message.contains("admin"));
}

#[test]
fn login_rejects_wrong_password() {
    let mut persistence = test_persistence();
    seed_user(&mut persistence);

    let request: LoginRequest = LoginRequest {
        username: String::from("admin"),
        password: String::from("Swordfish"),
    };
    let err = login(&mut persistence, &request).unwrap_err();
    assert_eq!(
        err,
        ApiError::AuthenticationFailed {
            reason: String::from("invalid username or password"),
        }
    );
}

#[test]
fn login_rejects_unknown_user_with_the_same_generic_failure() {
    let mut persistence = test_persistence();
    seed_user(&mut persistence);

    let request: LoginRequest = LoginRequest {
        username: String::from("ghost"),
        password: String::from("swordfish"),
    };
    let err = login(&mut persistence, &request).unwrap_err();
    // Same failure as the wrong-password case; the two are only
    // distinguishable in the logs.
    assert_eq!(
        err,
        ApiError::AuthenticationFailed {
            reason: String::from("invalid username or password"),
        }
    );
}

#[test]
fn login_rejects_empty_fields_before_touching_the_database() {
    let mut persistence = test_persistence();

    let request: LoginRequest = LoginRequest {
        username: String::new(),
        password: String::from("swordfish"),
    };
    let err = login(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "username"));

    let request: LoginRequest = LoginRequest {
        username: String::from("admin"),
        password: String::new(),
    };
    let err = login(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "password"));
}

#[test]
fn create_user_rejects_duplicate_username() {
    let mut persistence = test_persistence();
    seed_user(&mut persistence);

    let request: CreateUserRequest = CreateUserRequest {
        username: String::from("admin"),
        password: String::from("other"),
    };
    let err = create_user(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_username"));
}
