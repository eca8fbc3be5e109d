// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for login user persistence and credential checks.

use crate::{Persistence, PersistenceError};
use skyport_domain::User;

fn test_user() -> User {
    User {
        username: String::from("admin"),
        password: String::from("swordfish"),
    }
}

#[test]
fn test_create_and_fetch_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence.create_user(&test_user()).unwrap();

    let fetched = persistence.get_user("admin").unwrap().unwrap();
    assert_eq!(fetched.username, "admin");
    assert_eq!(fetched.password, "swordfish");
}

#[test]
fn test_get_user_returns_none_for_unknown_username() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_user("ghost").unwrap().is_none());
}

#[test]
fn test_duplicate_username_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence.create_user(&test_user()).unwrap();
    let result = persistence.create_user(&test_user());
    assert!(result.is_err());
}

#[test]
fn test_verify_login_accepts_matching_credentials() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence.create_user(&test_user()).unwrap();
    assert!(persistence.verify_login("admin", "swordfish").unwrap());
}

#[test]
fn test_verify_login_rejects_wrong_password() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence.create_user(&test_user()).unwrap();
    assert!(!persistence.verify_login("admin", "Swordfish").unwrap());
    assert!(!persistence.verify_login("admin", "").unwrap());
}

#[test]
fn test_verify_login_rejects_unknown_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(!persistence.verify_login("ghost", "swordfish").unwrap());
}

#[test]
fn test_delete_user() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence.create_user(&test_user()).unwrap();
    persistence.delete_user("admin").unwrap();

    assert!(persistence.get_user("admin").unwrap().is_none());
    assert_eq!(
        persistence.delete_user("admin"),
        Err(PersistenceError::UserNotFound(String::from("admin")))
    );
}
