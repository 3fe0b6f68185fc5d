//! ArmorClass - How hard a creature is to hit
//!
//! `total` is derived from `base + bonus` whenever either part is set, but
//! `set_total` writes it directly and leaves base and bonus alone. A stat
//! block may list an armor class that differs from the sum of its parts, so
//! the override is kept.
//!
//! The sum wraps on overflow, as two's-complement `int` arithmetic does.

/// Description used when none is given
pub const STANDARD_ARMOR_CLASS_DESCRIPTION: &str = "natural armor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorClass {
    description: String,
    base: i32,
    bonus: i32,
    total: i32,
}

impl ArmorClass {
    /// Create an armor class with the standard description
    pub fn new(base: i32, bonus: i32) -> Self {
        Self::with_description(base, bonus, STANDARD_ARMOR_CLASS_DESCRIPTION)
    }

    pub fn with_description(base: i32, bonus: i32, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            base,
            bonus,
            total: base.wrapping_add(bonus),
        }
    }

    // ========== Getters ==========

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // ========== Setters ==========

    pub fn set_base(&mut self, base: i32) {
        self.base = base;
        self.total = self.base.wrapping_add(self.bonus);
    }

    pub fn set_bonus(&mut self, bonus: i32) {
        self.bonus = bonus;
        self.total = self.base.wrapping_add(self.bonus);
    }

    /// Override the total without touching base or bonus
    pub fn set_total(&mut self, total: i32) {
        self.total = total;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl core::fmt::Display for ArmorClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.total, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_armor_class_defaults() {
        let ac = ArmorClass::new(10, 2);
        assert_eq!(ac.base(), 10);
        assert_eq!(ac.bonus(), 2);
        assert_eq!(ac.total(), 12);
        assert_eq!(ac.description(), STANDARD_ARMOR_CLASS_DESCRIPTION);
        assert_eq!(ac.to_string(), "12 (natural armor)");
    }

    #[test]
    fn test_total_override_desynchronizes() {
        let mut ac = ArmorClass::new(10, 2);
        ac.set_total(20);
        assert_eq!(ac.total(), 20);
        assert_eq!(ac.base() + ac.bonus(), 12);

        // Setting a part re-derives the total and drops the override
        ac.set_bonus(3);
        assert_eq!(ac.total(), 13);
    }

    #[test]
    fn test_custom_description() {
        let mut ac = ArmorClass::with_description(13, 2, "chain shirt, shield");
        assert_eq!(ac.to_string(), "15 (chain shirt, shield)");
        ac.set_description("leather armor");
        assert_eq!(ac.description(), "leather armor");
    }

    #[test]
    fn test_total_wraps_on_overflow() {
        let mut ac = ArmorClass::new(i32::MAX, 1);
        assert_eq!(ac.total(), i32::MIN);

        ac.set_bonus(0);
        assert_eq!(ac.total(), i32::MAX);
        ac.set_base(i32::MIN);
        ac.set_bonus(-1);
        assert_eq!(ac.total(), i32::MAX);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_after_construction(base in any::<i32>(), bonus in any::<i32>()) {
            let ac = ArmorClass::new(base, bonus);
            prop_assert_eq!(ac.total(), base.wrapping_add(bonus));
        }

        #[test]
        fn prop_total_is_sum_after_setters(
            base in any::<i32>(),
            bonus in any::<i32>(),
            new_base in any::<i32>(),
            new_bonus in any::<i32>(),
        ) {
            let mut ac = ArmorClass::new(base, bonus);
            ac.set_base(new_base);
            prop_assert_eq!(ac.total(), new_base.wrapping_add(bonus));
            ac.set_bonus(new_bonus);
            prop_assert_eq!(ac.total(), new_base.wrapping_add(new_bonus));
        }

        #[test]
        fn prop_set_total_is_independent(base in any::<i32>(), bonus in any::<i32>(), total in any::<i32>()) {
            let mut ac = ArmorClass::new(base, bonus);
            ac.set_total(total);
            prop_assert_eq!(ac.total(), total);
            prop_assert_eq!(ac.base(), base);
            prop_assert_eq!(ac.bonus(), bonus);
        }
    }
}
