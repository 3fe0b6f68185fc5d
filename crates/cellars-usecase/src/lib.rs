//! # Cellars Use Case Layer
//!
//! Application-specific business rules.
//! The facade turns raw creation parameters into a saved `Creature`; the
//! identifier generators give every new creature its id.

pub mod creature_facade;
pub mod creature_report;
pub mod id_generator;

pub use cellars_domain;

pub use creature_facade::{CreateCreature, CreatureFacade};
pub use creature_report::{challenge_rating, describe};
pub use id_generator::{generate_token, IdGenerator, PseudoUuidGenerator, UuidV4Generator};
