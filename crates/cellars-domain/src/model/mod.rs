//! Domain Models - The vocabulary of the creature registry
//!
//! Value objects first, then the `Creature` entity that owns them.

pub mod armor_class;
pub mod creature;
pub mod creature_id;
pub mod creature_type;
pub mod hit_points;
pub mod speed;
