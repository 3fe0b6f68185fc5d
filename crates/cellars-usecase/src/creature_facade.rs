//! CreatureFacade - The single entry point for creating creatures
//!
//! ```text
//! caller ──CreateCreature──► CreatureFacade
//!                              ├─ IdGenerator::generate()     (one call)
//!                              ├─ assemble Creature
//!                              └─ CreatureService::save()     (one write)
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use cellars_domain::{
    ArmorClass, Creature, CreatureError, CreatureId, CreatureService, CreatureType, HitPoints,
    Speed, SpeedType, STANDARD_CREATURE_TYPE,
};
use tracing::{debug, info, warn};

use crate::id_generator::IdGenerator;

/// Raw parameters for a new creature
///
/// Hit points are not validated; a value of zero or below is the caller's
/// mistake and is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCreature {
    pub creature_type: CreatureType,
    pub walk_speed: Speed,
    pub fly_speed: Speed,
    pub swim_speed: Speed,
    pub burrow_speed: Speed,
    pub climb_speed: Speed,
    pub armor_class: ArmorClass,
    pub hit_points_value: i32,
}

impl CreateCreature {
    /// Start a command with every speed at zero
    pub fn new(creature_type: CreatureType, armor_class: ArmorClass, hit_points_value: i32) -> Self {
        Self {
            creature_type,
            walk_speed: Speed::default(),
            fly_speed: Speed::default(),
            swim_speed: Speed::default(),
            burrow_speed: Speed::default(),
            climb_speed: Speed::default(),
            armor_class,
            hit_points_value,
        }
    }

    /// Builder: set the speed for one movement type
    pub fn with_speed(mut self, speed_type: SpeedType, speed: Speed) -> Self {
        match speed_type {
            SpeedType::Walking => self.walk_speed = speed,
            SpeedType::Flying => self.fly_speed = speed,
            SpeedType::Swimming => self.swim_speed = speed,
            SpeedType::Burrowing => self.burrow_speed = speed,
            SpeedType::Climbing => self.climb_speed = speed,
        }
        self
    }

    fn speeds(&self) -> HashMap<SpeedType, Speed> {
        HashMap::from([
            (SpeedType::Walking, self.walk_speed),
            (SpeedType::Flying, self.fly_speed),
            (SpeedType::Swimming, self.swim_speed),
            (SpeedType::Burrowing, self.burrow_speed),
            (SpeedType::Climbing, self.climb_speed),
        ])
    }
}

pub struct CreatureFacade {
    creature_service: CreatureService,
    id_generator: Arc<dyn IdGenerator>,
}

impl CreatureFacade {
    pub const STANDARD_CREATURE_TYPE: CreatureType = STANDARD_CREATURE_TYPE;

    pub fn new(creature_service: CreatureService, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            creature_service,
            id_generator,
        }
    }

    /// Assemble a creature under a fresh id and save it
    ///
    /// Returns the saved creature so the caller learns its id.
    pub fn create(&self, command: CreateCreature) -> Result<Creature, CreatureError> {
        let id = self.id_generator.generate();
        let speeds = command.speeds();

        let mut creature = Creature::with_type(id, command.creature_type);
        creature.set_armor_class(command.armor_class);
        creature.set_hit_points(HitPoints::init(command.hit_points_value));
        creature.set_speeds(speeds);

        self.creature_service.save(&creature)?;

        info!(
            creature_id = %creature.id(),
            creature_type = %command.creature_type,
            "Creature created"
        );
        Ok(creature)
    }

    /// Create a plain monstrosity: AC 10, 10 hit points, walking 30 ft.
    pub fn create_standard(&self) -> Result<Creature, CreatureError> {
        let command = CreateCreature::new(Self::STANDARD_CREATURE_TYPE, ArmorClass::new(10, 0), 10)
            .with_speed(SpeedType::Walking, Speed::new(30));
        self.create(command)
    }

    pub fn find(&self, id: &CreatureId) -> Result<Creature, CreatureError> {
        debug!(creature_id = %id, "Looking up creature");
        self.creature_service.find(id).inspect_err(|e| {
            if e.is_not_found() {
                warn!(creature_id = %id, "No such creature");
            }
        })
    }

    pub fn list(&self) -> Result<Vec<Creature>, CreatureError> {
        let mut creatures = self.creature_service.find_all()?;
        creatures.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(creatures)
    }

    pub fn delete(&self, id: &CreatureId) -> Result<(), CreatureError> {
        self.creature_service.delete(id)?;
        info!(creature_id = %id, "Creature deleted");
        Ok(())
    }
}

impl core::fmt::Debug for CreatureFacade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CreatureFacade")
            .field("creature_service", &self.creature_service)
            .finish_non_exhaustive()
    }
}
