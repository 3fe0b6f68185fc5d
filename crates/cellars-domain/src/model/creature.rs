//! Creature - One monster or character instance
//!
//! Creature is an Entity: two creatures with the same id are the same
//! creature, whatever their stats say. Everything except the id is optional
//! until set.

use std::collections::HashMap;

use super::armor_class::ArmorClass;
use super::creature_id::CreatureId;
use super::creature_type::{CreatureType, STANDARD_CREATURE_TYPE};
use super::hit_points::HitPoints;
use super::speed::{Speed, SpeedType};

#[derive(Debug, Clone)]
pub struct Creature {
    /// Unique identifier (Entity identity)
    id: CreatureId,
    creature_type: Option<CreatureType>,
    armor_class: Option<ArmorClass>,
    /// At most one speed per movement type
    speeds: HashMap<SpeedType, Speed>,
    hit_points: Option<HitPoints>,
}

impl Creature {
    /// Create a creature of the standard type
    pub fn new(id: CreatureId) -> Self {
        Self::with_type(id, STANDARD_CREATURE_TYPE)
    }

    pub fn with_type(id: CreatureId, creature_type: CreatureType) -> Self {
        Self {
            id,
            creature_type: Some(creature_type),
            armor_class: None,
            speeds: HashMap::new(),
            hit_points: None,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &CreatureId {
        &self.id
    }

    pub fn creature_type(&self) -> Option<CreatureType> {
        self.creature_type
    }

    pub fn armor_class(&self) -> Option<&ArmorClass> {
        self.armor_class.as_ref()
    }

    pub fn speeds(&self) -> &HashMap<SpeedType, Speed> {
        &self.speeds
    }

    pub fn speed(&self, speed_type: SpeedType) -> Option<Speed> {
        self.speeds.get(&speed_type).copied()
    }

    pub fn hit_points(&self) -> Option<HitPoints> {
        self.hit_points
    }

    // ========== Setters ==========

    pub fn set_id(&mut self, id: CreatureId) {
        self.id = id;
    }

    pub fn set_type(&mut self, creature_type: CreatureType) {
        self.creature_type = Some(creature_type);
    }

    pub fn set_armor_class(&mut self, armor_class: ArmorClass) {
        self.armor_class = Some(armor_class);
    }

    /// Replace the whole speed mapping
    pub fn set_speeds(&mut self, speeds: HashMap<SpeedType, Speed>) {
        self.speeds = speeds;
    }

    /// Set one speed, replacing any previous speed of that type
    pub fn add_speed(&mut self, speed_type: SpeedType, speed: Speed) {
        self.speeds.insert(speed_type, speed);
    }

    pub fn set_hit_points(&mut self, hit_points: HitPoints) {
        self.hit_points = Some(hit_points);
    }

    // ========== Combat ==========

    /// Apply damage to the creature's hit points, if it has any
    pub fn take_damage(&mut self, damage: i32) {
        if let Some(hp) = self.hit_points {
            self.hit_points = Some(hp.take_damage(damage));
        }
    }

    /// A creature without hit points is not alive
    pub fn is_alive(&self) -> bool {
        self.hit_points.is_some_and(|hp| hp.is_alive())
    }
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Creature {}
