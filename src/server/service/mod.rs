//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Slot generation, availability, reservation and cancellation rules
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Translation**: Mapping store conflicts onto domain errors

pub mod auth;
pub mod availability;
pub mod booking;
pub mod court;
pub mod schedule;

#[cfg(test)]
mod test;
