//! Human-readable creature summaries

use std::fmt::Write as _;

use cellars_domain::{Creature, CreatureType, SpeedType};

/// Multi-line summary: id, type, armor class, hit points, speeds
///
/// Unset fields are left out. Speeds are listed in movement-type order.
pub fn describe(creature: &Creature) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", creature.id());

    if let Some(creature_type) = creature.creature_type() {
        let _ = writeln!(out, "Type: {}", creature_type);
    }
    if let Some(armor_class) = creature.armor_class() {
        let _ = writeln!(out, "Armor Class: {}", armor_class);
    }
    if let Some(hit_points) = creature.hit_points() {
        let _ = writeln!(out, "Hit Points: {}", hit_points);
    }

    let speeds: Vec<String> = SpeedType::all()
        .iter()
        .filter_map(|t| creature.speed(*t).map(|s| format!("{}: {}", t, s)))
        .collect();
    if !speeds.is_empty() {
        let _ = writeln!(out, "Speeds: {}", speeds.join(", "));
    }

    out.truncate(out.trim_end().len());
    out
}

/// Rough challenge rating from armor class, hit points and type
pub fn challenge_rating(creature: &Creature) -> f64 {
    let mut rating = 0.5;

    if let Some(armor_class) = creature.armor_class() {
        rating += f64::from(armor_class.total()) * 0.1;
    }
    if let Some(hit_points) = creature.hit_points() {
        rating += f64::from(hit_points.max()) * 0.05;
    }

    rating += match creature.creature_type() {
        Some(CreatureType::Dragon) => 5.0,
        Some(CreatureType::Fiend) => 3.0,
        Some(CreatureType::Undead) => 2.0,
        Some(CreatureType::Beast) => 1.0,
        _ => 0.0,
    };

    rating
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellars_domain::{ArmorClass, CreatureId, HitPoints, Speed};

    fn wolf() -> Creature {
        let mut creature = Creature::with_type(CreatureId::new("wolf-1"), CreatureType::Beast);
        creature.set_armor_class(ArmorClass::new(13, 0));
        creature.set_hit_points(HitPoints::init(11));
        creature.add_speed(SpeedType::Climbing, Speed::new(0));
        creature.add_speed(SpeedType::Walking, Speed::new(40));
        creature
    }

    #[test]
    fn test_describe_full_creature() {
        assert_eq!(
            describe(&wolf()),
            "ID: wolf-1\n\
             Type: BEAST\n\
             Armor Class: 13 (natural armor)\n\
             Hit Points: 11/11\n\
             Speeds: WALKING: 40 ft., CLIMBING: 0 ft."
        );
    }

    #[test]
    fn test_describe_minimal_creature() {
        let creature = Creature::new(CreatureId::new("bare"));
        assert_eq!(describe(&creature), "ID: bare\nType: MONSTROSITY");
    }

    #[test]
    fn test_challenge_rating() {
        // 0.5 + 1.3 + 0.55 + 1.0
        assert!((challenge_rating(&wolf()) - 3.35).abs() < 1e-9);

        let bare = Creature::new(CreatureId::new("bare"));
        assert!((challenge_rating(&bare) - 0.5).abs() < 1e-9);
    }
}
