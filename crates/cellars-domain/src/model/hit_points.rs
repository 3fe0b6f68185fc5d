//! HitPoints - How much punishment a creature can take
//!
//! HitPoints is an immutable Value Object. Damage and healing return a new
//! value instead of changing this one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitPoints {
    current: i32,
    max: i32,
    temporary: i32,
}

impl HitPoints {
    /// Create hit points without temporary hit points
    pub fn new(current: i32, max: i32) -> Self {
        Self::with_temporary(current, max, 0)
    }

    pub fn with_temporary(current: i32, max: i32, temporary: i32) -> Self {
        Self {
            current,
            max,
            temporary,
        }
    }

    /// Fresh hit points: full health, no temporary hit points
    pub fn init(max: i32) -> Self {
        Self::with_temporary(max, max, 0)
    }

    // ========== Getters ==========

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn temporary(&self) -> i32 {
        self.temporary
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    // ========== Arithmetic ==========

    /// Current hit points after `damage`, never below zero
    pub fn take_damage(&self, damage: i32) -> Self {
        Self {
            current: self.current.saturating_sub(damage).max(0),
            ..*self
        }
    }

    /// Current hit points after `healing`, never above max
    pub fn heal(&self, healing: i32) -> Self {
        Self {
            current: self.current.saturating_add(healing).min(self.max),
            ..*self
        }
    }
}

impl core::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.temporary > 0 {
            write!(f, "{}/{} (+{} temporary)", self.current, self.max, self.temporary)
        } else {
            write!(f, "{}/{}", self.current, self.max)
        }
    }
}
