// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the airport registry.
//!
//! Handlers accept request DTOs, validate them with the domain crate,
//! drive the persistence adapter, and translate domain and persistence
//! errors into [`ApiError`] values that represent the API contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
