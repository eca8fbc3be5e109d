// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Most mutations use Diesel DSL and are backend-agnostic, with
//! minimal use of backend-specific helpers (e.g., `last_insert_rowid()`
//! for `SQLite`).
//!
//! ## Module Organization
//!
//! - `addresses` — Address mutations
//! - `airports` — Base airport and extension row mutations
//! - `aircraft` — Aircraft mutations
//! - `users` — Login user mutations
//!
//! Multi-row operations (creating an airport with its address and extension
//! row, or the delete cascade) are sequenced by the `Persistence` adapter
//! in `lib.rs`; each function here touches exactly one table.

pub mod addresses;
pub mod aircraft;
pub mod airports;
pub mod users;
