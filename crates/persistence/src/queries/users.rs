// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login user queries.

use diesel::prelude::*;
use skyport_domain::User;
use tracing::debug;

use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    username: String,
    password: String,
}

backend_fn! {
/// Retrieves a user by username.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user(conn: &mut _, username: &str) -> Result<Option<User>, PersistenceError> {
    debug!("Looking up user by username: {}", username);

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::username.eq(username))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(User {
            username: row.username,
            password: row.password,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
