//! # Cellars Domain Layer
//!
//! Creature records for a tabletop RPG: identity, armor class, speeds and
//! hit points, plus the port the domain needs for persistence.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Creature & its value objects                  ││
//! │  │  repository/- Creatures port (trait, not implementation)    ││
//! │  │  service/   - CreatureService                               ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate has no runtime dependencies. Id generation lives in the
//! use case layer, storage lives in the adapter layer.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    armor_class::{ArmorClass, STANDARD_ARMOR_CLASS_DESCRIPTION},
    creature::Creature,
    creature_id::CreatureId,
    creature_type::{CreatureType, ParseCreatureTypeError, STANDARD_CREATURE_TYPE},
    hit_points::HitPoints,
    speed::{ParseSpeedTypeError, Speed, SpeedType},
};

pub use repository::creatures::{CreatureError, Creatures};

pub use service::creature_service::CreatureService;
