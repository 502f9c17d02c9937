//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turn database rows into domain objects.
//! Inserts bind the `New*` payloads from `poll-core` directly.

mod admin;
mod choice;
mod question;
