//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON shapes exchanged with clients. Server-side domain models in
//! `server::model` convert into these at the controller boundary.

pub mod api;
pub mod booking;
pub mod court;
pub mod schedule;
