// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login user mutations.

use diesel::prelude::*;
use skyport_domain::User;
use tracing::info;

use crate::diesel_schema::users;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new login user.
///
/// Passwords are stored as given; credentials are compared in plain text
/// at login.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user` - The user to insert
///
/// # Errors
///
/// Returns an error if the insert fails, including when the username
/// already exists.
pub fn create_user(conn: &mut _, user: &User) -> Result<(), PersistenceError> {
    info!("Creating user: {}", user.username);

    diesel::insert_into(users::table)
        .values((
            users::username.eq(&user.username),
            users::password.eq(&user.password),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a login user by username.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username to delete
///
/// # Errors
///
/// Returns an error if the user doesn't exist or the delete fails.
pub fn delete_user(conn: &mut _, username: &str) -> Result<(), PersistenceError> {
    info!("Deleting user: {}", username);

    let rows_affected: usize = diesel::delete(users::table)
        .filter(users::username.eq(username))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::UserNotFound(username.to_string()));
    }

    Ok(())
}
}
