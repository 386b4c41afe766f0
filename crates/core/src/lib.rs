//! `fleet-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the fleet error taxonomy, strongly-typed identifiers and the aggregate/entity
//! traits shared by the vessel model and the registry.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{FleetError, FleetResult};
pub use id::{PassengerId, TankId};
